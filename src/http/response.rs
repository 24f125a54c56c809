//! JSON error responses.
//!
//! Every failure leaves the service as `{"message": "<text>"}`, where the text is the
//! `Display` of the error.

use crate::product_actor::ProductError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

/// Anything a handler can fail with.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Product(#[from] ProductError),

    /// No route matches the method and path.
    #[error("Sahifa topilmadi")]
    RouteNotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Product(ProductError::NotFound(_)) | ApiError::RouteNotFound => {
                StatusCode::NOT_FOUND
            }
            ApiError::Product(ProductError::MissingRequiredFields | ProductError::InvalidJson) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Product(
                ProductError::IdsExhausted
                | ProductError::Storage { .. }
                | ProductError::ActorCommunicationError(_),
            ) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = ?self, "Request failed");
        }
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}
