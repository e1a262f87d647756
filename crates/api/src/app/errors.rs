use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use tambo_core::{DomainError, StoreError};
use tambo_infra::{CatalogError, LedgerError};
use tambo_messaging::EngineError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvariantViolation(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invariant_violation", msg)
        }
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
    }
}

pub fn store_error_to_response(err: StoreError) -> axum::response::Response {
    json_error(
        StatusCode::SERVICE_UNAVAILABLE,
        "store_unavailable",
        err.to_string(),
    )
}

pub fn catalog_error_to_response(err: CatalogError) -> axum::response::Response {
    match err {
        CatalogError::Domain(e) => domain_error_to_response(e),
        CatalogError::Store(e) => store_error_to_response(e),
    }
}

pub fn ledger_error_to_response(err: LedgerError) -> axum::response::Response {
    match err {
        LedgerError::Domain(e) => domain_error_to_response(e),
        LedgerError::Store(e) => store_error_to_response(e),
    }
}

/// Engine failures are always adapter failures, so they map to 503.
pub fn engine_error_to_response(err: EngineError) -> axum::response::Response {
    json_error(
        StatusCode::SERVICE_UNAVAILABLE,
        "store_unavailable",
        err.to_string(),
    )
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
