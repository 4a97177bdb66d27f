use std::collections::BTreeMap;

use crate::model::answer::AnswerRecord;
use crate::model::ids::QuestionId;
use crate::model::question::Question;
use crate::model::quiz::Quiz;
use crate::model::score::Score;

//
// ─── OUTCOMES ──────────────────────────────────────────────────────────────────
//

/// Result of trying to record an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordOutcome {
    /// A new answer was locked in. `open_explanation` is the one-shot signal
    /// raised for an incorrect answer; it is never stored.
    Recorded {
        answer: AnswerRecord,
        open_explanation: bool,
    },
    /// The question already had an answer; the first one stands.
    Locked(AnswerRecord),
    /// Unknown question or a selection outside the option range.
    Ignored,
}

impl RecordOutcome {
    #[must_use]
    pub fn is_recorded(&self) -> bool {
        matches!(self, Self::Recorded { .. })
    }

    #[must_use]
    pub fn opens_explanation(&self) -> bool {
        matches!(
            self,
            Self::Recorded {
                open_explanation: true,
                ..
            }
        )
    }

    /// The answer that is in effect after the call, if any.
    #[must_use]
    pub fn answer(&self) -> Option<AnswerRecord> {
        match self {
            Self::Recorded { answer, .. } | Self::Locked(answer) => Some(*answer),
            Self::Ignored => None,
        }
    }
}

/// Values derived from the answer map and the dataset length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionProgress {
    pub total: usize,
    pub completed: usize,
    pub correct: usize,
    pub ratio: f64,
    pub is_complete: bool,
}

impl SessionProgress {
    #[must_use]
    pub fn score(&self) -> Score {
        Score::new(self.correct, self.total)
    }
}

//
// ─── SESSION STATE ─────────────────────────────────────────────────────────────
//

/// Mutable state of one run through a quiz.
///
/// Answers are first-writer-wins: once a question has an [`AnswerRecord`] it
/// only goes away through [`SessionState::reset`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    started: bool,
    current_index: usize,
    answers: BTreeMap<QuestionId, AnswerRecord>,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate state from a persisted snapshot.
    ///
    /// No dataset checks happen here; see [`SessionState::reconcile`].
    #[must_use]
    pub fn from_persisted(
        started: bool,
        current_index: usize,
        answers: BTreeMap<QuestionId, AnswerRecord>,
    ) -> Self {
        Self {
            started,
            current_index,
            answers,
        }
    }

    /// Fit a restored state to `quiz`: clamp the index and drop answers for
    /// unknown questions or out-of-range selections. Stored correctness flags
    /// are kept as they are.
    #[must_use]
    pub fn reconcile(mut self, quiz: &Quiz) -> Self {
        self.current_index = self.current_index.min(quiz.last_index());
        self.answers.retain(|id, answer| {
            quiz.find(id)
                .is_some_and(|q| q.accepts(answer.selected_index()))
        });
        self
    }

    #[must_use]
    pub fn started(&self) -> bool {
        self.started
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn answers(&self) -> &BTreeMap<QuestionId, AnswerRecord> {
        &self.answers
    }

    #[must_use]
    pub fn answer(&self, id: &QuestionId) -> Option<&AnswerRecord> {
        self.answers.get(id)
    }

    #[must_use]
    pub fn is_answered(&self, id: &QuestionId) -> bool {
        self.answers.contains_key(id)
    }

    #[must_use]
    pub fn current_question<'q>(&self, quiz: &'q Quiz) -> Option<&'q Question> {
        quiz.get(self.current_index)
    }

    /// Answer recorded for the question at `current_index`, if any.
    #[must_use]
    pub fn current_answer(&self, quiz: &Quiz) -> Option<&AnswerRecord> {
        self.current_question(quiz)
            .and_then(|q| self.answers.get(q.id()))
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.answers.values().filter(|a| a.is_correct()).count()
    }

    #[must_use]
    pub fn progress(&self, quiz: &Quiz) -> SessionProgress {
        let total = quiz.len();
        let completed = self.completed_count();
        #[allow(clippy::cast_precision_loss)]
        let ratio = if total == 0 {
            0.0
        } else {
            (completed as f64 / total as f64).clamp(0.0, 1.0)
        };
        SessionProgress {
            total,
            completed,
            correct: self.correct_count(),
            ratio,
            is_complete: total > 0 && completed == total,
        }
    }

    //
    // ─── TRANSITIONS ───────────────────────────────────────────────────────
    //

    /// Leave the intro screen. Returns true if the state changed.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        tracing::debug!("quiz session started");
        true
    }

    /// Lock in `selected_index` for `question_id`.
    pub fn record_answer(
        &mut self,
        quiz: &Quiz,
        question_id: &QuestionId,
        selected_index: usize,
    ) -> RecordOutcome {
        if let Some(existing) = self.answers.get(question_id) {
            return RecordOutcome::Locked(*existing);
        }
        let Some(answer) = quiz
            .find(question_id)
            .and_then(|q| AnswerRecord::evaluate(q, selected_index))
        else {
            return RecordOutcome::Ignored;
        };

        self.answers.insert(question_id.clone(), answer);
        tracing::debug!(
            question = %question_id,
            selected = selected_index,
            correct = answer.is_correct(),
            "answer recorded"
        );
        RecordOutcome::Recorded {
            answer,
            open_explanation: !answer.is_correct(),
        }
    }

    /// Move to `index`, saturating at both ends. Returns true if the index moved.
    pub fn go_to(&mut self, quiz: &Quiz, index: i64) -> bool {
        let target = quiz.clamp_index(index);
        let moved = target != self.current_index;
        self.current_index = target;
        moved
    }

    pub fn go_prev(&mut self, quiz: &Quiz) -> bool {
        self.go_to(quiz, current_as_i64(self.current_index) - 1)
    }

    pub fn go_next(&mut self, quiz: &Quiz) -> bool {
        self.go_to(quiz, current_as_i64(self.current_index) + 1)
    }

    /// Return to the default state. Returns true if anything was cleared.
    pub fn reset(&mut self) -> bool {
        let changed = *self != Self::default();
        *self = Self::default();
        tracing::debug!("quiz session reset");
        changed
    }
}

fn current_as_i64(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}
