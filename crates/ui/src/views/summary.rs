use dioxus::prelude::*;
use services::Intent;

use crate::vm::SummaryVm;

#[component]
pub fn SummaryCard(summary: SummaryVm, on_intent: EventHandler<Intent>) -> Element {
    rsx! {
        section { class: "card summary",
            p { class: "eyebrow", "Session Complete" }

            div { class: "summary-body",
                div { class: "score-ring band-{summary.band_class()}",
                    span { class: "score-value", "{summary.percent}%" }
                }
                div {
                    h3 { "Nice work" }
                    p { "You answered {summary.correct} of {summary.total} correctly." }
                    button {
                        id: "quiz-restart",
                        class: "primary",
                        onclick: move |_| on_intent.call(Intent::Reset),
                        "Restart"
                    }
                }
            }
        }
    }
}
