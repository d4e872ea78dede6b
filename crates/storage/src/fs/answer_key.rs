use std::collections::BTreeMap;

use exam_core::model::{AnswerKey, Choice, QuestionNumber};
use serde::Deserialize;
use serde_json::Value;

use crate::repository::StorageError;

/// File name of the answer key inside an exam directory.
pub const ANSWER_KEY_FILE: &str = "answer_key.json";

#[derive(Deserialize)]
#[serde(transparent)]
struct RawAnswerKey(BTreeMap<String, Value>);

/// Parse an answer key document: a JSON object of question number to choice.
///
/// Keys must coerce to an integer in 1..=50 and values to an integer in 0..=4
/// (numbers or numeric strings). Entries that do not are skipped with a
/// warning; a value of 0 leaves the question without a key.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if the document is not a JSON object.
pub fn parse_answer_key(json: &str) -> Result<AnswerKey, StorageError> {
    let RawAnswerKey(raw) =
        serde_json::from_str(json).map_err(|e| StorageError::Serialization(e.to_string()))?;

    let mut entries = Vec::with_capacity(raw.len());
    for (key, value) in &raw {
        let Some(question) = QuestionNumber::parse_input(key) else {
            tracing::warn!(key = %key, "skipping answer key entry with invalid question number");
            continue;
        };
        match coerce_choice(value) {
            Some(Some(choice)) => entries.push((question, choice)),
            Some(None) => {}
            None => {
                tracing::warn!(question = %question, value = %value, "skipping answer key entry with invalid choice");
            }
        }
    }

    Ok(AnswerKey::from_entries(entries))
}

/// `Some(None)` is an explicit 0, `None` is an unusable value.
fn coerce_choice(value: &Value) -> Option<Option<Choice>> {
    let raw = match value {
        Value::Number(n) => n.as_u64()?,
        Value::String(s) => s.trim().parse::<u64>().ok()?,
        _ => return None,
    };
    let raw = u8::try_from(raw).ok()?;
    Choice::from_sheet_value(raw).ok()
}
