use serde::Deserialize;
use serde_json::Value;

use crate::domain::JsonObject;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response is not a JSON object")]
    NotAnObject,
}

/// Parse a response body into a string-keyed mapping.
///
/// Numbers keep their exact textual representation, so integer ids wider
/// than 53 bits survive without truncation.
pub fn decode_json_object(body: &str) -> Result<JsonObject, DecodeError> {
    let value: Value = serde_json::from_str(body)?;
    match value {
        Value::Object(object) => Ok(object),
        _ => Err(DecodeError::NotAnObject),
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ErrorEnvelope {
    error: Value,
    #[serde(default)]
    code: Option<String>,
}

/// Domain failure reported inside a decoded response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    pub code: Option<String>,
    pub message: String,
}

/// A decoded body with a top-level `error` key is a domain failure
/// regardless of HTTP status. The message is cleaned with
/// [`clean_error_message`]; `code` is carried through as-is.
pub fn extract_api_failure(object: &JsonObject) -> Option<ApiFailure> {
    if !object.contains_key("error") {
        return None;
    }

    let envelope: ErrorEnvelope =
        serde_json::from_value(Value::Object(object.clone())).ok()?;
    let message = match &envelope.error {
        Value::String(text) => clean_error_message(text).to_owned(),
        other => other.to_string(),
    };
    Some(ApiFailure {
        code: envelope.code,
        message,
    })
}

/// Strip the service's internal prefix from an error message.
///
/// The service sometimes prefixes an internal code before a bracketed
/// human-readable explanation (`OB13012016 [Can't find user]`); only the
/// bracketed text is meaningful. Messages without brackets, or with a
/// closing bracket before the opening one, are returned unchanged.
pub fn clean_error_message(raw: &str) -> &str {
    match (raw.find('['), raw.rfind(']')) {
        (Some(open), Some(close)) if open < close => &raw[open + 1..close],
        _ => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_objects_and_rejects_other_shapes() {
        let object = decode_json_object(r#"{"result": {"id": 1}}"#).unwrap();
        assert!(object.contains_key("result"));

        assert!(matches!(
            decode_json_object("[1, 2, 3]"),
            Err(DecodeError::NotAnObject)
        ));
        assert!(matches!(
            decode_json_object("{ not json }"),
            Err(DecodeError::Json(_))
        ));
    }

    #[test]
    fn large_integers_survive_decoding() {
        let object = decode_json_object(r#"{"id": 90071992547409934}"#).unwrap();
        assert_eq!(object["id"].to_string(), "90071992547409934");
    }

    #[test]
    fn bodies_without_error_key_are_not_failures() {
        let object = decode_json_object(r#"{"result": "ok"}"#).unwrap();
        assert_eq!(extract_api_failure(&object), None);
    }

    #[test]
    fn error_with_invalid_arg_code_is_extracted_and_cleaned() {
        let object = decode_json_object(
            r#"{"error": "OB13012016 [Can't find user]", "code": "invalid_arg"}"#,
        )
        .unwrap();
        let failure = extract_api_failure(&object).unwrap();
        assert_eq!(failure.code.as_deref(), Some("invalid_arg"));
        assert_eq!(failure.message, "Can't find user");
    }

    #[test]
    fn error_without_code_keeps_the_message_as_is() {
        let object = decode_json_object(r#"{"error": "Unknown failure"}"#).unwrap();
        let failure = extract_api_failure(&object).unwrap();
        assert_eq!(failure.code, None);
        assert_eq!(failure.message, "Unknown failure");
    }

    #[test]
    fn non_string_error_values_are_stringified() {
        let object = decode_json_object(r#"{"error": {"reason": "down"}}"#).unwrap();
        let failure = extract_api_failure(&object).unwrap();
        assert_eq!(failure.message, r#"{"reason":"down"}"#);
    }

    #[test]
    fn clean_error_message_extracts_the_bracketed_text() {
        assert_eq!(
            clean_error_message("OB13012016 [Can't find user]"),
            "Can't find user"
        );
        assert_eq!(clean_error_message("[already clean]"), "already clean");
    }

    #[test]
    fn clean_error_message_leaves_bracketless_input_unchanged() {
        assert_eq!(clean_error_message("Unknown failure"), "Unknown failure");
    }

    #[test]
    fn clean_error_message_tolerates_malformed_brackets() {
        assert_eq!(clean_error_message("open [ only"), "open [ only");
        assert_eq!(clean_error_message("close ] only"), "close ] only");
        assert_eq!(clean_error_message("] backwards ["), "] backwards [");
    }

    #[test]
    fn clean_error_message_spans_first_open_to_last_close() {
        assert_eq!(
            clean_error_message("X [a [nested] b] Y"),
            "a [nested] b"
        );
    }
}
