use std::any::Any;
use std::fmt::Display;

use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::MessageBody;
use models::errors::ModelError;
use models::validation::ValidationErrors;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Errors surfaced by request handlers.
///
/// 5xx variants carry a fixed client-facing message; the underlying cause is
/// only logged.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid data: {0}")]
    Validation(ValidationErrors),
    /// Body the extractors could not read; carries the extractor's status.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
    #[error("{message}: {detail}")]
    Internal { message: &'static str, detail: String },
}

impl ApiError {
    pub fn internal(message: &'static str, cause: impl Display) -> Self {
        Self::Internal { message, detail: cause.to_string() }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected { status: rejection.status(), message: rejection.body_text() }
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        Self::Rejected { status: rejection.status(), message: rejection.body_text() }
    }
}

impl From<ModelError> for ApiError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(errors) => ApiError::Validation(errors),
        }
    }
}

#[derive(Serialize)]
struct InvalidDataBody<'a> {
    message: &'static str,
    errors: &'a ValidationErrors,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(InvalidDataBody { message: "Invalid data", errors: &errors }),
            )
                .into_response(),
            ApiError::Rejected { status, message } => {
                (status, Json(MessageBody::new(message))).into_response()
            }
            ApiError::Internal { message, detail } => {
                error!(error = %detail, "{message}");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(MessageBody::new(message))).into_response()
            }
        }
    }
}

/// Response for a panic caught inside a handler.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };
    error!(event = "handler_panic", error = %detail, "handler panicked");
    let body = Json(MessageBody::new("Internal Server Error"));
    (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("cannot bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}
