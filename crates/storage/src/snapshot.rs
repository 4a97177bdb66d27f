//! Text form of a [`SessionState`].
//!
//! The payload is a JSON object `{ "started", "idx", "answers" }` where
//! `answers` maps question ids to `{ "selected", "correct" }`. There is no
//! version field: decoding falls back to a default for each field that is
//! missing or has the wrong type instead of rejecting the whole payload.

use std::collections::BTreeMap;

use quiz_core::model::{AnswerRecord, QuestionId, SessionState};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::repository::StorageError;

#[derive(Serialize)]
struct SnapshotRecord<'a> {
    started: bool,
    idx: usize,
    answers: BTreeMap<&'a str, AnswerEntry>,
}

#[derive(Serialize)]
struct AnswerEntry {
    selected: usize,
    correct: bool,
}

impl<'a> SnapshotRecord<'a> {
    fn from_state(state: &'a SessionState) -> Self {
        Self {
            started: state.started(),
            idx: state.current_index(),
            answers: state
                .answers()
                .iter()
                .map(|(id, answer)| {
                    (
                        id.as_str(),
                        AnswerEntry {
                            selected: answer.selected_index(),
                            correct: answer.is_correct(),
                        },
                    )
                })
                .collect(),
        }
    }
}

/// Serialize `state` to snapshot text.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if JSON encoding fails.
pub fn serialize(state: &SessionState) -> Result<String, StorageError> {
    serde_json::to_string(&SnapshotRecord::from_state(state))
        .map_err(|err| StorageError::Serialization(err.to_string()))
}

/// Parse snapshot text.
///
/// Returns `None` when the text is not JSON or not a JSON object. Otherwise
/// each field is read on its own and defaults when absent or mistyped:
/// `started` to `false`, `idx` to `0`, `answers` to empty. Answer entries
/// without an integer `selected` and a boolean `correct` are skipped.
#[must_use]
pub fn deserialize(raw: &str) -> Option<SessionState> {
    let value: Value = serde_json::from_str(raw).ok()?;
    let Value::Object(fields) = value else {
        return None;
    };

    let started = fields
        .get("started")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let idx = fields.get("idx").and_then(as_index).unwrap_or(0);
    let answers = fields
        .get("answers")
        .and_then(Value::as_object)
        .map(decode_answers)
        .unwrap_or_default();

    Some(SessionState::from_persisted(started, idx, answers))
}

fn decode_answers(entries: &Map<String, Value>) -> BTreeMap<QuestionId, AnswerRecord> {
    entries
        .iter()
        .filter_map(|(id, entry)| {
            let id = QuestionId::new(id.as_str());
            if id.is_empty() {
                return None;
            }
            let selected = entry.get("selected").and_then(as_index)?;
            let correct = entry.get("correct").and_then(Value::as_bool)?;
            Some((id, AnswerRecord::from_persisted(selected, correct)))
        })
        .collect()
}

/// Non-negative integers, including whole floats such as `2.0`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn as_index(value: &Value) -> Option<usize> {
    if let Some(n) = value.as_u64() {
        return usize::try_from(n).ok();
    }
    let f = value.as_f64()?;
    if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64 {
        Some(f as usize)
    } else {
        None
    }
}
