//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// API error type
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
        }
    }

    pub fn bad_gateway(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: msg.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}

impl From<narrator_core::Error> for ApiError {
    fn from(err: narrator_core::Error) -> Self {
        use narrator_core::Error;

        match &err {
            // The credential name must not leak into responses
            Error::MissingCredential(_) => {
                ApiError::internal("Server configuration incomplete: API credential missing")
            }
            Error::ConfigError(_) => ApiError::internal(err.to_string()),
            Error::EmptyAudio => {
                ApiError::internal("The TTS provider produced no audio for this request")
            }
            Error::UpstreamError(_) | Error::HttpError(_) => ApiError::bad_gateway(err.to_string()),
            _ => ApiError::internal(err.to_string()),
        }
    }
}
