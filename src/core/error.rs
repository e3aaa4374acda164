use thiserror::Error;

/// Errors surfaced by the particle engine and its drawing surfaces.
#[derive(Debug, Error)]
pub enum FieldError {
    #[error("invalid field config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("unknown particle variant `{0}`")]
    UnknownVariant(String),
    #[error("surface error: {0}")]
    Surface(String),
}

pub type Result<T, E = FieldError> = std::result::Result<T, E>;
