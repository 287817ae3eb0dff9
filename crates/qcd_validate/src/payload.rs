//! Raw payload extraction
//!
//! Gantree: L2_Validation → Payload
//!
//! Turns raw text (an import file, or a language model reply that may wrap
//! the JSON in prose) into a JSON object. Anything that is not an object
//! after extraction is a hard failure.

use qcd_core::{QcdError, QcdResult};
use serde_json::{Map, Value};

/// Parse raw text into a JSON object
/// Gantree: extract_object(raw) -> Result<Map> // 하드 실패 판정
pub fn extract_object(raw: &str) -> QcdResult<Map<String, Value>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(QcdError::MalformedPayload("empty payload".into()));
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => into_object(value),
        Err(direct_err) => {
            // Replies often look like "Here is your circuit: { ... } Enjoy!"
            let Some(embedded) = embedded_braces(trimmed) else {
                return Err(QcdError::MalformedPayload(direct_err.to_string()));
            };
            let value = serde_json::from_str::<Value>(embedded)
                .map_err(|e| QcdError::MalformedPayload(e.to_string()))?;
            into_object(value)
        }
    }
}

/// Require an already-parsed value to be an object
pub fn into_object(value: Value) -> QcdResult<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(QcdError::MalformedPayload(format!(
            "expected a JSON object, found {}",
            kind_of(&other)
        ))),
    }
}

/// Greedy span from the first `{` to the last `}`
fn embedded_braces(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_object() {
        let map = extract_object(r#"{"qubits": 3}"#).unwrap();
        assert_eq!(map["qubits"], 3);
    }

    #[test]
    fn test_object_wrapped_in_prose() {
        let raw = "Sure! Here is the circuit:\n```json\n{\"name\": \"Bell\", \"gates\": []}\n```\nLet me know.";
        let map = extract_object(raw).unwrap();
        assert_eq!(map["name"], "Bell");
    }

    #[test]
    fn test_unparseable_is_hard_failure() {
        for raw in ["", "   ", "no braces here", "{ not json }", "} backwards {"] {
            let err = extract_object(raw).unwrap_err();
            assert!(err.is_hard_failure(), "{raw:?} should be a hard failure");
        }
    }

    #[test]
    fn test_non_object_is_hard_failure() {
        assert!(matches!(
            extract_object("[1, 2, 3]"),
            Err(QcdError::MalformedPayload(msg)) if msg.contains("array")
        ));
        assert!(extract_object("42").is_err());
    }
}
