use thiserror::Error;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("unsupported value for field `{field}`: {reason}")]
    UnsupportedType { field: String, reason: String },
    #[error("field `{field}` is not declared by schema `{schema}`")]
    UnknownField { field: String, schema: String },
    /// Text rendering failed inside serde_json. Trees built by the encoder
    /// only hold strings and objects, so this is not expected in practice.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("malformed value for field `{field}`: {raw}")]
    MalformedValue { field: String, raw: String },
    #[error("invalid json: {0}")]
    Syntax(String),
    #[error("expected {expected}, found {found}")]
    UnexpectedShape {
        expected: &'static str,
        found: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum BindError {
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("cannot bind `{entity}`: {reason}")]
    Entity { entity: &'static str, reason: String },
    #[error("binder is closed")]
    Closed,
}
