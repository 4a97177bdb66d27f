use dioxus::prelude::*;
use services::Intent;

use crate::context::AppContext;
use crate::views::{ExplanationSheet, IntroCard, QuestionCard, QuizHeader, SummaryCard};
use crate::vm::ScreenVm;

/// Root of the quiz: header on every screen, then intro or the active question.
#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut screen = use_signal({
        let ctx = ctx.clone();
        move || ctx.screen()
    });

    let on_intent = use_callback(move |intent: Intent| {
        if ctx.dispatch(intent).is_applied() {
            screen.set(ctx.screen());
        }
    });

    let vm = screen.read().clone();

    rsx! {
        div { class: "quiz",
            QuizHeader { header: vm.header.clone(), on_intent: on_intent }

            main { class: "quiz-main",
                match vm.screen.clone() {
                    ScreenVm::Intro(intro) => rsx! {
                        IntroCard { intro: intro, on_intent: on_intent }
                    },
                    ScreenVm::Active { question, explanation, summary } => rsx! {
                        QuestionCard { question: question, on_intent: on_intent }
                        {summary.map(|summary| rsx! {
                            SummaryCard { summary: summary, on_intent: on_intent }
                        })}
                        {explanation.map(|explanation| rsx! {
                            ExplanationSheet { explanation: explanation, on_intent: on_intent }
                        })}
                    },
                }
            }
        }
    }
}
