use dioxus::prelude::*;
use services::Intent;

use crate::vm::ExplanationVm;

/// Bottom sheet with the verdict and the rule behind the current clip.
#[component]
pub fn ExplanationSheet(explanation: ExplanationVm, on_intent: EventHandler<Intent>) -> Element {
    let tone = if explanation.is_correct { "correct" } else { "wrong" };

    rsx! {
        div { class: "sheet-layer",
            div {
                class: "sheet-backdrop",
                onclick: move |_| on_intent.call(Intent::CloseExplanation),
            }
            aside { class: "sheet {tone}",
                div { class: "sheet-header",
                    h4 { "{explanation.heading()}" }
                    button {
                        id: "quiz-close-why",
                        class: "link",
                        onclick: move |_| on_intent.call(Intent::CloseExplanation),
                        "Close"
                    }
                }
                p { class: "verdict", "{explanation.verdict()}" }
                p { class: "explanation", "{explanation.body}" }
            }
        }
    }
}
