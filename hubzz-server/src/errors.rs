use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hubzz_client::ApiError;
use hubzz_core::DeepLinkError;
use serde_json::json;
use thiserror::Error;

pub type ServerResult<T> = Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    #[error("Missing required {0}")]
    BadRequest(&'static str),

    #[error("Upstream returned status {status}")]
    Upstream { status: u16 },

    #[error("Upstream response was invalid")]
    Validation,

    #[error("Unknown internal error: {0}")]
    Unknown(String),
}

impl ServerError {
    fn as_status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { resource: _ } => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Upstream { status } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> String {
        match self {
            // Internal error detail stays in the logs
            Self::Unknown(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let body = json!({ "error": self.public_message() });

        (self.as_status_code(), Json(body)).into_response()
    }
}

impl From<ApiError> for ServerError {
    fn from(value: ApiError) -> Self {
        match value {
            ApiError::NotFound { resource } => Self::NotFound { resource },
            ApiError::BadRequest(name) => Self::BadRequest(name),
            ApiError::UpstreamStatus { status } => Self::Upstream { status },
            ApiError::Validation(details) => {
                // A validation failure is a contract mismatch with the
                // upstream API, not a client mistake. Log the specifics,
                // answer with a generic 500.
                log::error!("Upstream payload failed validation: {}", details);
                Self::Validation
            }
            e => Self::Unknown(e.to_string()),
        }
    }
}

impl From<DeepLinkError> for ServerError {
    fn from(value: DeepLinkError) -> Self {
        Self::Unknown(value.to_string())
    }
}
