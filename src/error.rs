use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolshedError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Schema error in `{field}`: {reason}")]
    Schema { field: String, reason: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Invalid regex pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

impl ToolshedError {
    /// Build a schema error for a named field
    pub fn schema(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ToolshedError::Schema {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ToolshedError>;
