use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures reported by a [`HotelStore`](crate::store::HotelStore)
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to read seed data: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed seed data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Handler errors, rendered as `{ "message": ... }`
///
/// Store details are logged by the handler and never sent to the client.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Something went wrong")]
    SearchFailed(#[source] StoreError),

    #[error("{message}")]
    FetchFailed {
        message: &'static str,
        #[source]
        source: StoreError,
    },

    #[error("Hotel not found")]
    NotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::SearchFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::FetchFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound => StatusCode::NOT_FOUND,
        };

        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}
