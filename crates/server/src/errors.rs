use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::errors::ModelError;
use serde::Serialize;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorType {
    MissingRequiredField,
    InvalidField,
    NotExists,
    CantDeleteReferenced,
}

/// Body of every 4xx reply that has one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ErrorReply {
    #[serde(rename = "type")]
    pub kind: ErrorType,
    pub message: String,
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub reply: Option<ErrorReply>,
}

impl ApiError {
    fn typed(status: StatusCode, kind: ErrorType, message: impl Into<String>) -> Self {
        Self { status, reply: Some(ErrorReply { kind, message: message.into() }) }
    }

    pub fn not_exists(message: impl Into<String>) -> Self {
        Self::typed(StatusCode::NOT_FOUND, ErrorType::NotExists, message)
    }

    pub fn invalid_field(message: impl Into<String>) -> Self {
        Self::typed(StatusCode::NOT_ACCEPTABLE, ErrorType::InvalidField, message)
    }

    pub fn missing_field(message: impl Into<String>) -> Self {
        Self::typed(StatusCode::NOT_ACCEPTABLE, ErrorType::MissingRequiredField, message)
    }

    pub fn cant_delete_referenced(message: impl Into<String>) -> Self {
        Self::typed(StatusCode::NOT_ACCEPTABLE, ErrorType::CantDeleteReferenced, message)
    }

    /// 409 with an empty body.
    pub fn conflict() -> Self {
        Self { status: StatusCode::CONFLICT, reply: None }
    }

    pub fn internal(detail: impl std::fmt::Display) -> Self {
        error!(error = %detail, "request failed");
        Self { status: StatusCode::INTERNAL_SERVER_ERROR, reply: None }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.reply {
            Some(reply) => (self.status, Json(reply)).into_response(),
            None if self.status.is_server_error() => {
                (self.status, Json(serde_json::json!({"error": "internal server error"}))).into_response()
            }
            None => self.status.into_response(),
        }
    }
}

impl From<ModelError> for ApiError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::MissingField(_) => Self::missing_field(e.to_string()),
            ModelError::InvalidField { .. } | ModelError::Validation(_) => Self::invalid_field(e.to_string()),
            ModelError::Db(detail) => Self::internal(detail),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Model(m) => m.into(),
            ServiceError::Store(s) => Self::internal(s),
        }
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
