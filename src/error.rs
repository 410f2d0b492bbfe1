//! Error types for the generator.
//!
//! Everything past parsing is total: once a document is known to be a JSON
//! object, inference and emission cannot fail.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Input text is not valid JSON. `path` is where the parser gave up.
    #[error("failed to parse JSON at path `{path}`: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The document (or the selected sub-document) is not an object.
    #[error("expected a JSON object at the top level, found {found}")]
    Shape { found: &'static str },

    #[error("JSON pointer `{pointer}` does not select any value")]
    Pointer { pointer: String },

    #[error("invalid {what} `{value}`: must be an identifier ([A-Za-z_][A-Za-z0-9_]*)")]
    InvalidName { what: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Human name of a JSON value's type, for `Error::Shape`.
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
