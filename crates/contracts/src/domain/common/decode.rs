use serde_json::Value;
use thiserror::Error;

/// Errors produced while turning raw API JSON into typed records
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("invalid payload: {0}")]
    Payload(String),

    #[error("record is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("record {id} has invalid amount {amount}")]
    InvalidAmount { id: i64, amount: f64 },
}

/// Extract the list of raw records from an API response.
///
/// Accepts a bare JSON array, the `{ "data": [...] }` envelope used by the
/// backend, or `null` (treated as an empty list).
pub fn list_payload(value: Value) -> Result<Vec<Value>, DecodeError> {
    match value {
        Value::Array(items) => Ok(items),
        Value::Null => Ok(Vec::new()),
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => Ok(items),
            Some(Value::Null) => Ok(Vec::new()),
            Some(_) => Err(DecodeError::Payload(
                "`data` must be an array of records".to_string(),
            )),
            None => Err(DecodeError::Payload(
                "response object has no `data` field".to_string(),
            )),
        },
        other => Err(DecodeError::Payload(format!(
            "expected an array of records, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
