use std::sync::Arc;

use quiz_core::model::{
    AnswerRecord, Question, QuestionId, Quiz, RecordOutcome, SessionProgress, SessionState,
};
use storage::SnapshotStore;

use super::writer::SnapshotWriter;

//
// ─── SESSION STORE ─────────────────────────────────────────────────────────────
//

/// Owns the single [`SessionState`] of a running quiz.
///
/// Every operation that changes the state writes it through to the snapshot
/// writer before returning; the write itself happens in the background.
pub struct QuizSession {
    quiz: Arc<Quiz>,
    state: SessionState,
    writer: SnapshotWriter,
    remember: bool,
}

impl QuizSession {
    /// Load the stored snapshot once and start the background writer.
    ///
    /// A missing or unreadable snapshot starts from the default state. A
    /// restored snapshot is fitted to `quiz` before use.
    ///
    /// Must be called from within a Tokio runtime.
    pub async fn open(quiz: Arc<Quiz>, store: SnapshotStore) -> Self {
        let state = match store.load().await {
            Some(restored) => {
                let state = restored.reconcile(&quiz);
                tracing::debug!(
                    started = state.started(),
                    index = state.current_index(),
                    answered = state.completed_count(),
                    "restored quiz session"
                );
                state
            }
            None => SessionState::default(),
        };
        let writer = SnapshotWriter::spawn(store);
        Self {
            quiz,
            state,
            writer,
            remember: true,
        }
    }

    #[must_use]
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        self.state.progress(&self.quiz)
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.state.current_question(&self.quiz)
    }

    #[must_use]
    pub fn current_answer(&self) -> Option<&AnswerRecord> {
        self.state.current_answer(&self.quiz)
    }

    /// Handle to the background writer, for waiting on queued writes
    /// without borrowing the session.
    #[must_use]
    pub fn writer(&self) -> SnapshotWriter {
        self.writer.clone()
    }

    /// Whether changes are currently written through to storage.
    #[must_use]
    pub fn remembers_progress(&self) -> bool {
        self.remember
    }

    pub fn set_started(&mut self) {
        if self.state.start() {
            self.write_through();
        }
    }

    /// Lock in an answer; see [`SessionState::record_answer`].
    pub fn record_answer(&mut self, question_id: &QuestionId, selected_index: usize) -> RecordOutcome {
        let outcome = self
            .state
            .record_answer(&self.quiz, question_id, selected_index);
        if outcome.is_recorded() {
            self.write_through();
        }
        outcome
    }

    /// Saturating jump to `index`.
    pub fn go_to(&mut self, index: i64) {
        if self.state.go_to(&self.quiz, index) {
            self.write_through();
        }
    }

    pub fn go_prev(&mut self) {
        if self.state.go_prev(&self.quiz) {
            self.write_through();
        }
    }

    pub fn go_next(&mut self) {
        if self.state.go_next(&self.quiz) {
            self.write_through();
        }
    }

    /// Back to the default state, and erase the stored snapshot.
    pub fn reset(&mut self) {
        self.state.reset();
        self.writer.clear();
    }

    /// Turn write-through on or off.
    ///
    /// Turning it off erases the stored snapshot; turning it back on writes the
    /// current state immediately.
    pub fn set_remember_progress(&mut self, remember: bool) {
        if self.remember == remember {
            return;
        }
        self.remember = remember;
        if remember {
            self.writer.save(self.state.clone());
        } else {
            self.writer.clear();
        }
    }

    /// Wait for queued writes to land.
    pub async fn flush(&self) {
        self.writer.flush().await;
    }

    fn write_through(&self) {
        if self.remember {
            self.writer.save(self.state.clone());
        }
    }
}
