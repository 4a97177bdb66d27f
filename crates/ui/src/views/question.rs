use dioxus::prelude::*;
use services::Intent;

use crate::vm::QuestionVm;

#[component]
pub fn QuestionCard(question: QuestionVm, on_intent: EventHandler<Intent>) -> Element {
    let why_title = if question.can_explain {
        "Explain the rule"
    } else {
        "Answer first to unlock"
    };

    rsx! {
        section { class: "question-layout", "data-question": "{question.id}",
            div { class: "clip",
                video {
                    src: "{question.clip_url}",
                    title: "{question.title}",
                    controls: true,
                    preload: "metadata",
                }
            }

            div { class: "card question",
                p { class: "eyebrow", "Question {question.position} of {question.total}" }
                h3 { "{question.prompt}" }

                ul { class: "options",
                    for option in question.options.iter().cloned() {
                        li { key: "{option.index}",
                            button {
                                class: "option {option.state.class()}",
                                disabled: option.disabled,
                                onclick: move |_| on_intent.call(Intent::Select(option.index)),
                                "{option.label}"
                            }
                        }
                    }
                }

                div { class: "controls",
                    button {
                        id: "quiz-why",
                        class: "ghost",
                        disabled: !question.can_explain,
                        title: why_title,
                        onclick: move |_| on_intent.call(Intent::OpenExplanation),
                        "Why?"
                    }
                    div { class: "nav",
                        button {
                            id: "quiz-prev",
                            disabled: !question.can_prev,
                            onclick: move |_| on_intent.call(Intent::Prev),
                            "Prev"
                        }
                        button {
                            id: "quiz-next",
                            class: "primary",
                            disabled: !question.can_next,
                            onclick: move |_| on_intent.call(Intent::Next),
                            "Next"
                        }
                    }
                }
            }
        }
    }
}
