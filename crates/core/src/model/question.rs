use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuestionId;

/// Every question offers exactly this many choices.
pub const OPTION_COUNT: usize = 4;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question id cannot be empty")]
    EmptyId,

    #[error("question {id} has an empty prompt")]
    EmptyPrompt { id: QuestionId },

    #[error("question {id} has {len} options, expected {OPTION_COUNT}")]
    WrongOptionCount { id: QuestionId, len: usize },

    #[error("question {id} has an empty option at position {index}")]
    EmptyOption { id: QuestionId, index: usize },

    #[error("question {id} marks option {index} correct but only has {len} options")]
    CorrectIndexOutOfRange {
        id: QuestionId,
        index: usize,
        len: usize,
    },
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated question as it appears in a dataset file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraft {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub clip_url: String,
    #[serde(rename = "question")]
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    #[serde(default)]
    pub explanation: String,
}

impl QuestionDraft {
    /// Validate the draft into an immutable [`Question`].
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the id or prompt is blank, the option count
    /// is not [`OPTION_COUNT`], an option is blank, or `correct_index` does not
    /// point at an option.
    pub fn validate(self) -> Result<Question, QuestionError> {
        let id = QuestionId::new(self.id);
        if id.is_empty() {
            return Err(QuestionError::EmptyId);
        }

        let prompt = self.prompt.trim().to_owned();
        if prompt.is_empty() {
            return Err(QuestionError::EmptyPrompt { id });
        }

        let len = self.options.len();
        if len != OPTION_COUNT {
            return Err(QuestionError::WrongOptionCount { id, len });
        }
        if let Some(index) = self.options.iter().position(|opt| opt.trim().is_empty()) {
            return Err(QuestionError::EmptyOption { id, index });
        }
        if self.correct_index >= len {
            return Err(QuestionError::CorrectIndexOutOfRange {
                id,
                index: self.correct_index,
                len,
            });
        }

        Ok(Question {
            id,
            title: self.title.trim().to_owned(),
            clip_url: self.clip_url.trim().to_owned(),
            prompt,
            options: self.options,
            correct_index: self.correct_index,
            explanation: self.explanation.trim().to_owned(),
        })
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single video-based multiple-choice question.
///
/// Immutable once validated; `clip_url` is carried through untouched for the
/// presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    title: String,
    clip_url: String,
    prompt: String,
    options: Vec<String>,
    correct_index: usize,
    explanation: String,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn clip_url(&self) -> &str {
        &self.clip_url
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    #[must_use]
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Returns true if `index` addresses one of this question's options.
    #[must_use]
    pub fn accepts(&self, index: usize) -> bool {
        index < self.options.len()
    }

    #[must_use]
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> QuestionDraft {
        QuestionDraft {
            id: "q1".into(),
            title: "Corner help".into(),
            clip_url: "/clips/corner.mp4".into(),
            prompt: "What happened?".into(),
            options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            correct_index: 2,
            explanation: "Because.".into(),
        }
    }

    #[test]
    fn validates_well_formed_draft() {
        let question = draft().validate().unwrap();
        assert_eq!(question.id().as_str(), "q1");
        assert_eq!(question.correct_option(), "C");
        assert!(question.is_correct(2));
        assert!(!question.is_correct(0));
        assert!(question.accepts(3));
        assert!(!question.accepts(4));
    }

    #[test]
    fn rejects_out_of_range_correct_index() {
        let mut bad = draft();
        bad.correct_index = 4;
        assert_eq!(
            bad.validate().unwrap_err(),
            QuestionError::CorrectIndexOutOfRange {
                id: QuestionId::new("q1"),
                index: 4,
                len: 4,
            }
        );
    }

    #[test]
    fn rejects_wrong_option_count() {
        let mut bad = draft();
        bad.options.pop();
        assert!(matches!(
            bad.validate(),
            Err(QuestionError::WrongOptionCount { len: 3, .. })
        ));
    }

    #[test]
    fn rejects_blank_id_and_prompt() {
        let mut bad = draft();
        bad.id = "  ".into();
        assert_eq!(bad.validate().unwrap_err(), QuestionError::EmptyId);

        let mut bad = draft();
        bad.prompt = String::new();
        assert!(matches!(
            bad.validate(),
            Err(QuestionError::EmptyPrompt { .. })
        ));
    }

    #[test]
    fn deserializes_dataset_keys() {
        let json = r#"{
            "id": "q9",
            "title": "Lock and trail",
            "clipUrl": "/clips/lock.mp4",
            "question": "Which technique?",
            "options": ["a", "b", "c", "d"],
            "correctIndex": 1,
            "explanation": "Trail the hip."
        }"#;
        let draft: QuestionDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.clip_url, "/clips/lock.mp4");
        assert_eq!(draft.prompt, "Which technique?");
        assert_eq!(draft.correct_index, 1);
    }
}
