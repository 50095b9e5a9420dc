use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("{field} {message}")]
    Validation { field: &'static str, message: String },
    #[error("record not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ModelError {
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation { field, message: message.into() }
    }
}

impl From<DbErr> for ModelError {
    fn from(e: DbErr) -> Self {
        match e {
            // row vanished between lookup and write
            DbErr::RecordNotUpdated => Self::NotFound("record was not updated".to_string()),
            DbErr::RecordNotFound(msg) => Self::NotFound(msg),
            other => Self::Db(other.to_string()),
        }
    }
}
