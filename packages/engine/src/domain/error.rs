use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhysicsError {
    #[error("body `{0}` is already registered")]
    DuplicateBody(String),

    #[error("body `{id}` has a non-finite {field}")]
    NonFinite { id: String, field: &'static str },

    #[error("body `{id}` has a negative size ({width} x {height})")]
    InvalidShape { id: String, width: f32, height: f32 },

    #[error("invalid physics config: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type PhysicsResult<T> = Result<T, PhysicsError>;
