use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::{FieldViolation, ServiceError};
use thiserror::Error;
use tracing::error;

/// JSON error body: `{"statusCode", "error", "message", "details"}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: Option<String>,
    pub details: Vec<FieldViolation>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, message: Option<String>) -> Self {
        Self { status, error, message, details: Vec::new() }
    }

    pub fn with_details(mut self, details: Vec<FieldViolation>) -> Self {
        self.details = details;
        self
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let mut body = serde_json::json!({
            "statusCode": self.status.as_u16(),
            "error": self.error,
        });
        if let Some(msg) = self.message {
            body["message"] = serde_json::Value::String(msg);
        }
        if !self.details.is_empty() {
            body["details"] = serde_json::json!(self.details);
        }
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let msg = e.to_string();
        match e {
            ServiceError::Validation(violations) => {
                JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(msg)).with_details(violations)
            }
            ServiceError::NotFound(_) => JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", Some(msg)),
            ServiceError::Db(_) => {
                error!(err = %msg, "storage failure");
                JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", None)
            }
        }
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(r: JsonRejection) -> Self {
        JsonApiError::new(StatusCode::BAD_REQUEST, "Bad Request", Some(r.body_text()))
    }
}

impl From<PathRejection> for JsonApiError {
    fn from(r: PathRejection) -> Self {
        JsonApiError::new(StatusCode::BAD_REQUEST, "Bad Request", Some(r.body_text()))
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(resp: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_maps_to_400_with_details() {
        let err: JsonApiError = ServiceError::Validation(vec![FieldViolation::new("pricePaid", "must not be less than 0")]).into();
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        assert_eq!(body["statusCode"], 400);
        assert_eq!(body["details"][0]["field"], "pricePaid");
    }

    #[tokio::test]
    async fn not_found_maps_to_404_naming_id() {
        let resp = JsonApiError::from(ServiceError::game_not_found(5)).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = body_json(resp).await;
        assert_eq!(body["message"], "game with id 5 not found");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn db_errors_are_opaque_500s() {
        let resp = JsonApiError::from(ServiceError::Db("password authentication failed".into())).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(resp).await;
        assert!(body.get("message").is_none());
    }
}
