use dioxus::prelude::*;
use services::Intent;

use crate::vm::HeaderVm;

#[component]
pub fn QuizHeader(header: HeaderVm, on_intent: EventHandler<Intent>) -> Element {
    rsx! {
        header { class: "quiz-header",
            div { class: "quiz-heading",
                {header.subtitle.as_ref().map(|subtitle| rsx! {
                    p { class: "eyebrow", "{subtitle}" }
                })}
                h1 { "{header.title}" }
            }

            div { class: "quiz-status",
                div { class: "progress",
                    div {
                        class: "progress-fill",
                        style: "width: {header.progress_percent}%",
                    }
                }
                span { class: "counter", "{header.completed}/{header.total}" }
                button {
                    id: "quiz-reset",
                    class: "ghost",
                    title: "Reset session",
                    onclick: move |_| on_intent.call(Intent::Reset),
                    "Reset"
                }
            }
        }
    }
}
