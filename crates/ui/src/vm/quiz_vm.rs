use quiz_core::model::{AnswerRecord, Question, Score, ScoreBand};
use services::QuizController;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderVm {
    pub title: String,
    pub subtitle: Option<String>,
    pub completed: usize,
    pub total: usize,
    /// Progress bar fill, 0..=100.
    pub progress_percent: u8,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntroVm {
    pub question_count: usize,
    pub remember_progress: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Idle,
    Correct,
    Wrong,
}

impl OptionState {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Correct => "correct",
            Self::Wrong => "wrong",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub label: String,
    pub state: OptionState,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub id: String,
    /// 1-based position for display.
    pub position: usize,
    pub total: usize,
    pub title: String,
    pub clip_url: String,
    pub prompt: String,
    pub options: Vec<OptionVm>,
    pub answered: bool,
    pub can_explain: bool,
    pub can_prev: bool,
    pub can_next: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExplanationVm {
    pub is_correct: bool,
    pub chosen: String,
    pub correct: String,
    pub body: String,
}

impl ExplanationVm {
    #[must_use]
    pub fn heading(&self) -> &'static str {
        if self.is_correct {
            "Correct"
        } else {
            "Let's review"
        }
    }

    #[must_use]
    pub fn verdict(&self) -> String {
        format!(
            "You chose {}. The correct answer is {}.",
            self.chosen, self.correct
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub correct: usize,
    pub total: usize,
    pub percent: u8,
    pub band: ScoreBand,
}

impl SummaryVm {
    #[must_use]
    pub fn band_class(&self) -> &'static str {
        self.band.as_str()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenVm {
    Intro(IntroVm),
    Active {
        question: QuestionVm,
        explanation: Option<ExplanationVm>,
        summary: Option<SummaryVm>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizScreenVm {
    pub header: HeaderVm,
    pub screen: ScreenVm,
}

#[must_use]
pub fn map_quiz_screen(controller: &QuizController) -> QuizScreenVm {
    let session = controller.session();
    let quiz = session.quiz();
    let progress = session.progress();

    let header = HeaderVm {
        title: quiz.title().to_owned(),
        subtitle: quiz.subtitle().map(str::to_owned),
        completed: progress.completed,
        total: progress.total,
        progress_percent: Score::new(progress.completed, progress.total).percent(),
    };

    let current = session
        .current_question()
        .filter(|_| session.state().started());
    let Some(question) = current else {
        return QuizScreenVm {
            header,
            screen: ScreenVm::Intro(IntroVm {
                question_count: quiz.len(),
                remember_progress: session.remembers_progress(),
            }),
        };
    };

    let answer = session.current_answer().copied();
    let explanation = answer
        .filter(|_| controller.explanation_open())
        .map(|answer| map_explanation(question, answer));
    let summary = progress.is_complete.then(|| {
        let score = progress.score();
        SummaryVm {
            correct: score.correct(),
            total: score.total(),
            percent: score.percent(),
            band: score.band(),
        }
    });

    QuizScreenVm {
        header,
        screen: ScreenVm::Active {
            question: QuestionVm {
                id: question.id().to_string(),
                position: session.state().current_index() + 1,
                total: quiz.len(),
                title: question.title().to_owned(),
                clip_url: question.clip_url().to_owned(),
                prompt: question.prompt().to_owned(),
                options: map_options(question, answer),
                answered: answer.is_some(),
                can_explain: controller.can_explain(),
                can_prev: controller.can_go_prev(),
                can_next: controller.can_go_next(),
            },
            explanation,
            summary,
        },
    }
}

fn map_options(question: &Question, answer: Option<AnswerRecord>) -> Vec<OptionVm> {
    question
        .options()
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let state = match answer {
                None => OptionState::Idle,
                Some(_) if index == question.correct_index() => OptionState::Correct,
                Some(answer) if index == answer.selected_index() => OptionState::Wrong,
                Some(_) => OptionState::Idle,
            };
            OptionVm {
                index,
                label: label.clone(),
                state,
                disabled: answer.is_some(),
            }
        })
        .collect()
}

fn map_explanation(question: &Question, answer: AnswerRecord) -> ExplanationVm {
    ExplanationVm {
        is_correct: answer.is_correct(),
        chosen: question
            .option(answer.selected_index())
            .unwrap_or_default()
            .to_owned(),
        correct: question.correct_option().to_owned(),
        body: question.explanation().to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use quiz_core::catalog::defensive_concepts;
    use services::Intent;
    use storage::{InMemoryStore, SnapshotStore};

    use super::*;

    async fn controller() -> QuizController {
        let store = SnapshotStore::with_default_key(Arc::new(InMemoryStore::new()));
        QuizController::open(Arc::new(defensive_concepts().unwrap()), store).await
    }

    fn active(vm: QuizScreenVm) -> (QuestionVm, Option<ExplanationVm>, Option<SummaryVm>) {
        match vm.screen {
            ScreenVm::Active {
                question,
                explanation,
                summary,
            } => (question, explanation, summary),
            ScreenVm::Intro(_) => panic!("expected an active screen"),
        }
    }

    #[tokio::test]
    async fn intro_before_start() {
        let ctl = controller().await;
        let vm = map_quiz_screen(&ctl);
        assert_eq!(vm.header.title, "Defensive Concepts");
        assert_eq!(vm.header.subtitle.as_deref(), Some("Knowledge Check"));
        assert_eq!(vm.header.total, 6);
        assert_eq!(
            vm.screen,
            ScreenVm::Intro(IntroVm {
                question_count: 6,
                remember_progress: true,
            })
        );
    }

    #[tokio::test]
    async fn unanswered_question_is_idle_and_enabled() {
        let mut ctl = controller().await;
        ctl.dispatch(Intent::Start);
        let (question, explanation, summary) = active(map_quiz_screen(&ctl));

        assert_eq!(question.position, 1);
        assert!(!question.answered);
        assert!(!question.can_explain);
        assert!(!question.can_prev);
        assert!(question.can_next);
        assert!(question
            .options
            .iter()
            .all(|o| o.state == OptionState::Idle && !o.disabled));
        assert!(explanation.is_none());
        assert!(summary.is_none());
    }

    #[tokio::test]
    async fn wrong_pick_marks_both_options_and_opens_review() {
        let mut ctl = controller().await;
        ctl.dispatch(Intent::Start);
        ctl.dispatch(Intent::Select(2));
        let (question, explanation, _) = active(map_quiz_screen(&ctl));

        let states: Vec<_> = question.options.iter().map(|o| o.state).collect();
        assert_eq!(
            states,
            [
                OptionState::Correct,
                OptionState::Idle,
                OptionState::Wrong,
                OptionState::Idle
            ]
        );
        assert!(question.options.iter().all(|o| o.disabled));

        let explanation = explanation.expect("explanation opens on a wrong answer");
        assert_eq!(explanation.heading(), "Let's review");
        assert_eq!(
            explanation.verdict(),
            "You chose Executing a stunt. The correct answer is Helping from the strong-side corner."
        );
    }

    #[tokio::test]
    async fn completed_session_shows_summary() {
        let mut ctl = controller().await;
        ctl.dispatch(Intent::Start);
        for pick in [0, 1, 1, 2, 2, 0] {
            ctl.dispatch(Intent::Select(pick));
            ctl.dispatch(Intent::Next);
        }
        let vm = map_quiz_screen(&ctl);
        assert_eq!(vm.header.progress_percent, 100);
        let (_, _, summary) = active(vm);
        let summary = summary.expect("summary once every question is answered");
        assert_eq!(summary.correct, 6);
        assert_eq!(summary.percent, 100);
        assert_eq!(summary.band, ScoreBand::Strong);
    }
}
