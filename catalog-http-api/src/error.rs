use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use catalog_runtime::CatalogError;

/// A failed catalog request, rendered as `{"errors": [{"message": ...}]}`.
#[derive(Debug)]
pub struct ApiError(pub CatalogError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            CatalogError::UnknownNetwork(_) => StatusCode::NOT_FOUND,
            CatalogError::Query { .. } | CatalogError::HttpError(_) => StatusCode::BAD_GATEWAY,
            CatalogError::InvalidAddress { .. }
            | CatalogError::MalformedRecord(_)
            | CatalogError::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "catalog request failed");
        }

        let errors: Vec<_> = self
            .0
            .messages()
            .into_iter()
            .map(|message| json!({ "message": message }))
            .collect();

        (status, Json(json!({ "errors": errors }))).into_response()
    }
}
