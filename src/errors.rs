use thiserror::Error;

/// Errors raised while assembling a query.
///
/// Every variant is the result of calling the builder API with arguments it
/// cannot interpret; none of them are transient.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuilderError {
    #[error("Invalid argument combination: {0}")]
    ArgumentShape(String),
    #[error("{slot} must be {expected}")]
    TypeMismatch {
        slot: &'static str,
        expected: &'static str,
    },
    #[error("When passing a string clause to raw, params should be an object (got {0})")]
    RawClauseArgument(String),
    #[error("Invalid projection term: {0}")]
    InvalidTerm(String),
    #[error("Invalid ORDER BY fields: {0}")]
    InvalidOrderBy(String),
    #[error("Unknown relationship direction '{0}' (expected in, out or either)")]
    InvalidDirection(String),
}

impl BuilderError {
    pub(crate) fn type_mismatch(slot: &'static str, expected: &'static str) -> Self {
        BuilderError::TypeMismatch { slot, expected }
    }
}

/// Short description of a JSON value's shape for error messages
pub(crate) fn describe_value(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
