/**
 * Error Conversion
 *
 * This module provides the `IntoResponse` implementation for `ApiError`,
 * allowing handlers to return it directly. The error is converted to an
 * appropriate HTTP status code and a JSON body of the form:
 *
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 404
 * }
 * ```
 *
 * Internal failures are logged here (with their source detail) and rendered
 * with a generic body. Rejected tokens additionally carry a
 * `WWW-Authenticate: Bearer` header.
 */

use axum::{
    http::header::WWW_AUTHENTICATE,
    response::{IntoResponse, Response},
    Json,
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Database(e) => tracing::error!("database error: {:?}", e),
            ApiError::Hash(e) => tracing::error!("password hashing error: {:?}", e),
            ApiError::Token(e) => tracing::error!("token signing error: {:?}", e),
            _ => {}
        }

        let status = self.status_code();
        let body = Json(serde_json::json!({
            "error": self.message(),
            "status": status.as_u16(),
        }));

        if matches!(self, ApiError::Unauthenticated) {
            (status, [(WWW_AUTHENTICATE, "Bearer")], body).into_response()
        } else {
            (status, body).into_response()
        }
    }
}
