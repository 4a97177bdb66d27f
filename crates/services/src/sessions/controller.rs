use std::sync::Arc;

use quiz_core::model::{Quiz, RecordOutcome};
use storage::SnapshotStore;

use super::store::QuizSession;

/// A discrete user action coming from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Start,
    /// Choose option `n` for the question at the current index.
    Select(usize),
    Prev,
    Next,
    Reset,
    OpenExplanation,
    CloseExplanation,
    RememberProgress(bool),
}

/// Whether an intent had any effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    Applied,
    Ignored,
}

impl Handled {
    #[must_use]
    pub fn is_applied(self) -> bool {
        self == Self::Applied
    }

    fn from_changed(changed: bool) -> Self {
        if changed { Self::Applied } else { Self::Ignored }
    }
}

/// Translates [`Intent`]s into [`QuizSession`] operations and owns the
/// explanation panel flag.
///
/// The panel flag is transient UI state; it is never written to storage.
pub struct QuizController {
    session: QuizSession,
    explanation_open: bool,
}

impl QuizController {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self {
            session,
            explanation_open: false,
        }
    }

    /// Restore the stored session for `quiz` and wrap it.
    pub async fn open(quiz: Arc<Quiz>, store: SnapshotStore) -> Self {
        Self::new(QuizSession::open(quiz, store).await)
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn explanation_open(&self) -> bool {
        self.explanation_open
    }

    /// The explanation can only be opened once the current question has an answer.
    #[must_use]
    pub fn can_explain(&self) -> bool {
        self.session.current_answer().is_some()
    }

    #[must_use]
    pub fn can_go_prev(&self) -> bool {
        self.session.state().current_index() > 0
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.session.state().current_index() < self.session.quiz().last_index()
    }

    pub fn dispatch(&mut self, intent: Intent) -> Handled {
        tracing::trace!(?intent, "dispatch");
        match intent {
            Intent::Start => {
                let was_started = self.session.state().started();
                self.session.set_started();
                Handled::from_changed(!was_started)
            }
            Intent::Select(index) => self.select(index),
            Intent::Prev => self.navigate(QuizSession::go_prev),
            Intent::Next => self.navigate(QuizSession::go_next),
            Intent::Reset => {
                self.session.reset();
                self.explanation_open = false;
                Handled::Applied
            }
            Intent::OpenExplanation => {
                if !self.can_explain() || self.explanation_open {
                    return Handled::Ignored;
                }
                self.explanation_open = true;
                Handled::Applied
            }
            Intent::CloseExplanation => {
                let was_open = self.explanation_open;
                self.explanation_open = false;
                Handled::from_changed(was_open)
            }
            Intent::RememberProgress(remember) => {
                let changed = self.session.remembers_progress() != remember;
                self.session.set_remember_progress(remember);
                Handled::from_changed(changed)
            }
        }
    }

    /// Wait for queued snapshot writes.
    pub async fn flush(&self) {
        self.session.flush().await;
    }

    fn select(&mut self, index: usize) -> Handled {
        if !self.session.state().started() || self.can_explain() {
            return Handled::Ignored;
        }
        let Some(id) = self.session.current_question().map(|q| q.id().clone()) else {
            return Handled::Ignored;
        };
        let outcome = self.session.record_answer(&id, index);
        if outcome.opens_explanation() {
            self.explanation_open = true;
        }
        match outcome {
            RecordOutcome::Recorded { .. } => Handled::Applied,
            RecordOutcome::Locked(_) | RecordOutcome::Ignored => Handled::Ignored,
        }
    }

    fn navigate(&mut self, step: fn(&mut QuizSession)) -> Handled {
        let before = self.session.state().current_index();
        step(&mut self.session);
        let moved = self.session.state().current_index() != before;
        if moved {
            self.explanation_open = false;
        }
        Handled::from_changed(moved)
    }
}
