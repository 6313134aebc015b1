//! Response-shape validation for chat-completion bodies.
//!
//! The endpoint is third-party; the bot never trusts the body blindly. The reply
//! text is accepted only after a sequential walk of the nesting:
//! `choices` (array) → `choices[0]` → `message` (object) → `content` (non-empty string).

use serde_json::Value;

use crate::error::ResponseShapeError;

/// Extracts the reply text from a parsed completion response.
///
/// Each level of nesting is checked for presence and type before descending;
/// the first violated requirement is returned as the matching
/// [`ResponseShapeError`] variant.
pub fn extract_content(response: &Value) -> Result<String, ResponseShapeError> {
    let choices = response
        .get("choices")
        .and_then(Value::as_array)
        .ok_or(ResponseShapeError::MissingChoices)?;

    let first_choice = choices.first().ok_or(ResponseShapeError::EmptyChoices)?;

    let message = first_choice
        .get("message")
        .filter(|m| m.is_object())
        .ok_or(ResponseShapeError::MissingMessage)?;

    let content = message
        .get("content")
        .and_then(Value::as_str)
        .ok_or(ResponseShapeError::MissingContent)?;

    if content.is_empty() {
        return Err(ResponseShapeError::EmptyContent);
    }

    Ok(content.to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn accepts_well_formed_response() {
        let body = json!({
            "id": "cmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "hello"}}
            ]
        });
        assert_eq!(extract_content(&body).unwrap(), "hello");
    }

    #[test]
    fn only_first_choice_is_read() {
        let body = json!({
            "choices": [
                {"message": {"content": "first"}},
                {"message": {"content": "second"}}
            ]
        });
        assert_eq!(extract_content(&body).unwrap(), "first");
    }

    #[test]
    fn rejects_missing_choices() {
        let body = json!({"id": "cmpl-1"});
        assert_eq!(
            extract_content(&body).unwrap_err(),
            ResponseShapeError::MissingChoices
        );
    }

    #[test]
    fn rejects_choices_of_wrong_type() {
        let body = json!({"choices": "not-an-array"});
        assert_eq!(
            extract_content(&body).unwrap_err(),
            ResponseShapeError::MissingChoices
        );
    }

    #[test]
    fn rejects_empty_choices() {
        let body = json!({"choices": []});
        assert_eq!(
            extract_content(&body).unwrap_err(),
            ResponseShapeError::EmptyChoices
        );
    }

    #[test]
    fn rejects_missing_message() {
        let body = json!({"choices": [{"index": 0}]});
        assert_eq!(
            extract_content(&body).unwrap_err(),
            ResponseShapeError::MissingMessage
        );
    }

    #[test]
    fn rejects_message_of_wrong_type() {
        let body = json!({"choices": [{"message": 42}]});
        assert_eq!(
            extract_content(&body).unwrap_err(),
            ResponseShapeError::MissingMessage
        );
    }

    #[test]
    fn rejects_missing_content() {
        let body = json!({"choices": [{"message": {"role": "assistant"}}]});
        assert_eq!(
            extract_content(&body).unwrap_err(),
            ResponseShapeError::MissingContent
        );
    }

    #[test]
    fn rejects_non_string_content() {
        let body = json!({"choices": [{"message": {"content": ["chunks"]}}]});
        assert_eq!(
            extract_content(&body).unwrap_err(),
            ResponseShapeError::MissingContent
        );
    }

    #[test]
    fn rejects_empty_content() {
        let body = json!({"choices": [{"message": {"content": ""}}]});
        assert_eq!(
            extract_content(&body).unwrap_err(),
            ResponseShapeError::EmptyContent
        );
    }
}
