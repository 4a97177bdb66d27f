use dioxus::prelude::*;
use services::Intent;

use crate::vm::IntroVm;

#[component]
pub fn IntroCard(intro: IntroVm, on_intent: EventHandler<Intent>) -> Element {
    let remember = intro.remember_progress;

    rsx! {
        section { class: "card intro",
            p {
                "{intro.question_count} scenarios. Watch the clip, pick the correct rule, and see the why. Progress can be saved on this device."
            }

            div { class: "intro-actions",
                label { class: "remember",
                    input {
                        r#type: "checkbox",
                        checked: remember,
                        onchange: move |_| on_intent.call(Intent::RememberProgress(!remember)),
                    }
                    "Remember progress on this device"
                }
                button {
                    id: "quiz-start",
                    class: "primary",
                    onclick: move |_| on_intent.call(Intent::Start),
                    "Start"
                }
            }
        }
    }
}
