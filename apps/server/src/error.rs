//! Error types for the Pokédex server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Search backend error: {0}")]
    Backend(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration source error: {0}")]
    ConfigSource(#[from] config::ConfigError),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Backend(_) | Error::Http(_) | Error::Json(_) => StatusCode::BAD_GATEWAY,
            Error::Config(_) | Error::ConfigSource(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
            match status {
                StatusCode::BAD_GATEWAY => "Search backend unavailable".to_string(),
                _ => "Internal server error".to_string(),
            }
        } else {
            self.to_string()
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
