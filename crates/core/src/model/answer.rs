use crate::model::question::Question;

/// The locked-in answer for one question.
///
/// `is_correct` is decided once, when the answer is first recorded, and is
/// carried as-is through persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnswerRecord {
    selected_index: usize,
    is_correct: bool,
}

impl AnswerRecord {
    /// Grade `selected_index` against `question`.
    ///
    /// Returns `None` if the index does not address one of the question's options.
    #[must_use]
    pub fn evaluate(question: &Question, selected_index: usize) -> Option<Self> {
        if !question.accepts(selected_index) {
            return None;
        }
        Some(Self {
            selected_index,
            is_correct: question.is_correct(selected_index),
        })
    }

    /// Rehydrate an answer from a persisted snapshot without regrading it.
    #[must_use]
    pub fn from_persisted(selected_index: usize, is_correct: bool) -> Self {
        Self {
            selected_index,
            is_correct,
        }
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}
