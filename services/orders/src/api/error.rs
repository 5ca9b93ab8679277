//! API error types and helpers.
//!
//! # Purpose
//! Centralizes HTTP error response construction so every endpoint returns the
//! same `{code, message, request_id}` shape, and maps workflow failures onto
//! status codes that let clients distinguish "definitely no stock" (409) from
//! "don't know, retry later" (503).
//!
//! # Notes
//! Internal errors log details server-side but return generic messages.
use crate::api::types::ErrorResponse;
use crate::store::StoreError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

/// Structured API error returned by handlers.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self.body)).into_response()
    }
}

fn api_error(status: StatusCode, code: &str, message: &str) -> ApiError {
    ApiError {
        status,
        body: ErrorResponse {
            code: code.to_string(),
            message: message.to_string(),
            request_id: None,
        },
    }
}

/// Build a 400 Bad Request validation error.
pub fn api_validation_error(message: &str) -> ApiError {
    api_error(StatusCode::BAD_REQUEST, "validation_error", message)
}

/// Build a 409 Conflict for a definitive out-of-stock answer.
///
/// Retrying immediately will not help the client; the stock level has to
/// change first.
pub fn api_out_of_stock(message: &str) -> ApiError {
    api_error(StatusCode::CONFLICT, "out_of_stock", message)
}

/// Build a 503 Service Unavailable for an inconclusive stock check.
///
/// Kept separate from `out_of_stock`: the inventory answer is unknown, so the
/// request is retryable by the caller.
pub fn api_inventory_unreachable(message: &str) -> ApiError {
    api_error(
        StatusCode::SERVICE_UNAVAILABLE,
        "inventory_unreachable",
        message,
    )
}

/// Build a 500 Internal Server Error from a store error.
///
/// Logs the store error and returns a generic internal error response.
pub fn api_internal(message: &str, err: &StoreError) -> ApiError {
    tracing::error!(error = ?err, "order storage error");
    api_error(StatusCode::INTERNAL_SERVER_ERROR, "internal", message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helpers_build_expected_codes() {
        let validation = api_validation_error("bad");
        assert_eq!(validation.status, StatusCode::BAD_REQUEST);
        assert_eq!(validation.body.code, "validation_error");

        let out_of_stock = api_out_of_stock("no stock");
        assert_eq!(out_of_stock.status, StatusCode::CONFLICT);
        assert_eq!(out_of_stock.body.code, "out_of_stock");

        let unreachable = api_inventory_unreachable("timeout");
        assert_eq!(unreachable.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(unreachable.body.code, "inventory_unreachable");

        let internal = api_internal(
            "storage failed",
            &StoreError::Unexpected(anyhow::anyhow!("boom")),
        );
        assert_eq!(internal.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(internal.body.code, "internal");
        assert_eq!(internal.body.message, "storage failed");
    }

    #[test]
    fn out_of_stock_and_unreachable_remain_distinguishable() {
        let out_of_stock = api_out_of_stock("no stock");
        let unreachable = api_inventory_unreachable("timeout");
        assert_ne!(out_of_stock.status, unreachable.status);
        assert_ne!(out_of_stock.body.code, unreachable.body.code);
    }
}
