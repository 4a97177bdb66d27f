//! Datasets embedded at build time.

use crate::model::{Quiz, QuizError};

const DEFENSIVE_CONCEPTS: &str = include_str!("../data/defensive_concepts.json");

/// The six-clip "Defensive Concepts" knowledge check.
///
/// # Errors
///
/// Returns `QuizError` only if the embedded JSON is broken.
pub fn defensive_concepts() -> Result<Quiz, QuizError> {
    Quiz::from_json(DEFENSIVE_CONCEPTS)
}
