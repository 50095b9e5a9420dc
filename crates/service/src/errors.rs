use serde::Serialize;
use thiserror::Error;

use models::errors::ModelError;

/// One rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {}", join(.0))]
    Validation(Vec<FieldViolation>),
    #[error("{0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}

fn join(violations: &[FieldViolation]) -> String {
    violations.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

impl ServiceError {
    pub fn game_not_found(id: i32) -> Self { Self::NotFound(format!("game with id {} not found", id)) }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation { field, message } => Self::Validation(vec![FieldViolation::new(field, message)]),
            ModelError::NotFound(msg) => Self::NotFound(msg),
            ModelError::Db(msg) => Self::Db(msg),
        }
    }
}
