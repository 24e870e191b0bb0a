//! Prompt/chosen/rejected record transform.

use serde_json::Value;

use super::error::{Result, TransformError};
use super::{MessageTransform, PreferenceMessages};
use crate::message::{Message, Role};

/// Transform for records shaped `{"prompt": [...], "chosen": [...], "rejected": [...]}`.
///
/// Each field is an array of message objects (`role`, `content`, optional
/// `masked`). The output conversations are `prompt ++ chosen` and
/// `prompt ++ rejected`. Prompt messages are always masked; continuation
/// messages are masked unless spoken by the assistant, so only the diverging
/// response trains.
///
/// Optional column remapping covers sources whose fields are named
/// differently (e.g. `question`/`good`/`bad`).
#[derive(Debug, Clone)]
pub struct ChosenRejectedTransform {
    prompt_column: String,
    chosen_column: String,
    rejected_column: String,
}

impl ChosenRejectedTransform {
    /// Create a transform reading the default `prompt`/`chosen`/`rejected` columns.
    #[must_use]
    pub fn new() -> Self {
        Self {
            prompt_column: "prompt".to_string(),
            chosen_column: "chosen".to_string(),
            rejected_column: "rejected".to_string(),
        }
    }

    /// Remap the source column names.
    #[must_use]
    pub fn with_columns(
        mut self,
        prompt: impl Into<String>,
        chosen: impl Into<String>,
        rejected: impl Into<String>,
    ) -> Self {
        self.prompt_column = prompt.into();
        self.chosen_column = chosen.into();
        self.rejected_column = rejected.into();
        self
    }

    fn parse_messages(record: &Value, column: &str, field: &'static str) -> Result<Vec<Message>> {
        let value = record
            .get(column)
            .ok_or(TransformError::MissingField { field })?;
        let entries = value
            .as_array()
            .ok_or(TransformError::NotAnArray { field })?;

        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                serde_json::from_value(entry.clone()).map_err(|e| {
                    TransformError::InvalidMessage { field, index, reason: e.to_string() }
                })
            })
            .collect()
    }
}

impl Default for ChosenRejectedTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageTransform for ChosenRejectedTransform {
    fn transform(&self, record: &Value) -> Result<PreferenceMessages> {
        let prompt = Self::parse_messages(record, &self.prompt_column, "prompt")?
            .into_iter()
            .map(|m| m.with_masked(true))
            .collect::<Vec<_>>();

        // Non-assistant turns inside a continuation (e.g. tool output) stay
        // masked; only assistant responses train.
        let continuation = |messages: Vec<Message>| {
            messages
                .into_iter()
                .map(|m| {
                    let masked = m.role != Role::Assistant;
                    m.with_masked(masked)
                })
                .collect::<Vec<_>>()
        };

        let chosen_tail = continuation(Self::parse_messages(record, &self.chosen_column, "chosen")?);
        let rejected_tail =
            continuation(Self::parse_messages(record, &self.rejected_column, "rejected")?);

        let mut chosen = prompt.clone();
        chosen.extend(chosen_tail);
        let mut rejected = prompt;
        rejected.extend(rejected_tail);

        Ok(PreferenceMessages { chosen, rejected })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> Value {
        json!({
            "prompt": [{"role": "user", "content": "What is 2+2?"}],
            "chosen": [{"role": "assistant", "content": "The answer is 4."}],
            "rejected": [{"role": "assistant", "content": "The answer is 12."}],
        })
    }

    #[test]
    fn test_shared_prompt_prefix() {
        let out = ChosenRejectedTransform::new().transform(&record()).unwrap();
        assert_eq!(out.chosen.len(), 2);
        assert_eq!(out.rejected.len(), 2);
        assert_eq!(out.chosen[0], out.rejected[0]);
        assert_eq!(out.chosen[0].content, "What is 2+2?");
    }

    #[test]
    fn test_prompt_masked_response_not() {
        let out = ChosenRejectedTransform::new().transform(&record()).unwrap();
        assert!(out.chosen[0].masked);
        assert!(!out.chosen[1].masked);
        assert!(out.rejected[0].masked);
        assert!(!out.rejected[1].masked);
    }

    #[test]
    fn test_missing_field() {
        let err = ChosenRejectedTransform::new()
            .transform(&json!({"prompt": [], "chosen": []}))
            .unwrap_err();
        assert!(matches!(err, TransformError::MissingField { field: "rejected" }));
    }

    #[test]
    fn test_field_not_an_array() {
        let err = ChosenRejectedTransform::new()
            .transform(&json!({"prompt": "oops", "chosen": [], "rejected": []}))
            .unwrap_err();
        assert!(matches!(err, TransformError::NotAnArray { field: "prompt" }));
    }

    #[test]
    fn test_invalid_message_reports_index() {
        let err = ChosenRejectedTransform::new()
            .transform(&json!({
                "prompt": [{"role": "user", "content": "q"}],
                "chosen": [{"role": "nobody", "content": "a"}],
                "rejected": [],
            }))
            .unwrap_err();
        match err {
            TransformError::InvalidMessage { field, index, .. } => {
                assert_eq!(field, "chosen");
                assert_eq!(index, 0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_column_remap() {
        let transform =
            ChosenRejectedTransform::new().with_columns("question", "good", "bad");
        let out = transform
            .transform(&json!({
                "question": [{"role": "user", "content": "q"}],
                "good": [{"role": "assistant", "content": "a"}],
                "bad": [{"role": "assistant", "content": "b"}],
            }))
            .unwrap();
        assert_eq!(out.chosen[1].content, "a");
        assert_eq!(out.rejected[1].content, "b");
    }

    #[test]
    fn test_tool_turn_in_continuation_stays_masked() {
        let out = ChosenRejectedTransform::new()
            .transform(&json!({
                "prompt": [{"role": "user", "content": "q"}],
                "chosen": [
                    {"role": "tool", "content": "lookup"},
                    {"role": "assistant", "content": "a"}
                ],
                "rejected": [{"role": "assistant", "content": "b"}],
            }))
            .unwrap();
        assert!(out.chosen[1].masked);
        assert!(!out.chosen[2].masked);
    }
}
