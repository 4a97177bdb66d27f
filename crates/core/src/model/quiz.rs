use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::question::{Question, QuestionDraft, QuestionError};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("quiz must contain at least one question")]
    Empty,

    #[error("duplicate question id: {0}")]
    DuplicateId(QuestionId),

    #[error(transparent)]
    Question(#[from] QuestionError),

    #[error("invalid quiz json: {0}")]
    Parse(String),
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated dataset, as read from JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub questions: Vec<QuestionDraft>,
}

impl QuizDraft {
    /// Validate every question and the dataset-wide invariants.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` for a dataset without questions,
    /// `QuizError::DuplicateId` if two questions share an id, and
    /// `QuizError::Question` for the first invalid question.
    pub fn validate(self) -> Result<Quiz, QuizError> {
        if self.questions.is_empty() {
            return Err(QuizError::Empty);
        }

        let mut seen = HashSet::with_capacity(self.questions.len());
        let mut questions = Vec::with_capacity(self.questions.len());
        for draft in self.questions {
            let question = draft.validate()?;
            if !seen.insert(question.id().clone()) {
                return Err(QuizError::DuplicateId(question.id().clone()));
            }
            questions.push(question);
        }

        Ok(Quiz {
            title: self.title.trim().to_owned(),
            subtitle: self
                .subtitle
                .map(|s| s.trim().to_owned())
                .filter(|s| !s.is_empty()),
            questions,
        })
    }
}

//
// ─── QUIZ ──────────────────────────────────────────────────────────────────────
//

/// Ordered, immutable question set. Dataset order is navigation order.
///
/// A `Quiz` always holds at least one question, so `len() - 1` is a valid index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    title: String,
    subtitle: Option<String>,
    questions: Vec<Question>,
}

impl Quiz {
    /// Build a quiz from already-validated questions.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` or `QuizError::DuplicateId`.
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Result<Self, QuizError> {
        if questions.is_empty() {
            return Err(QuizError::Empty);
        }
        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(QuizError::DuplicateId(question.id().clone()));
            }
        }
        Ok(Self {
            title: title.into(),
            subtitle: None,
            questions,
        })
    }

    /// Parse and validate a dataset from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Parse` for malformed JSON, otherwise any validation error.
    pub fn from_json(raw: &str) -> Result<Self, QuizError> {
        let draft: QuizDraft =
            serde_json::from_str(raw).map_err(|err| QuizError::Parse(err.to_string()))?;
        draft.validate()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed quiz; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.questions.len().saturating_sub(1)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn find(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    #[must_use]
    pub fn position(&self, id: &QuestionId) -> Option<usize> {
        self.questions.iter().position(|q| q.id() == id)
    }

    /// Clamp an arbitrary index into `[0, len - 1]`.
    #[must_use]
    pub fn clamp_index(&self, index: i64) -> usize {
        let last = i64::try_from(self.last_index()).unwrap_or(i64::MAX);
        usize::try_from(index.clamp(0, last)).unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}
