use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use tambo_chatlog::TurnStore;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

const DEFAULT_MESSAGES_LIMIT: usize = 50;

pub fn router() -> Router {
    Router::new()
        .route("/process", post(process_message))
        .route("/messages", get(list_messages))
}

pub async fn process_message(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::ProcessMessageRequest>,
) -> axum::response::Response {
    let phone = body.phone.trim();
    if phone.is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "phone must not be empty",
        );
    }

    match services.engine.process_message(phone, &body.message) {
        Ok(turn) => (StatusCode::OK, Json(dto::process_reply_to_json(&turn))).into_response(),
        Err(e) => errors::engine_error_to_response(e),
    }
}

pub async fn list_messages(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ListMessagesQuery>,
) -> axum::response::Response {
    let limit = query.limit.unwrap_or(DEFAULT_MESSAGES_LIMIT);
    let offset = query.offset.unwrap_or(0);

    match services.turn_log.list(limit, offset) {
        Ok(turns) => {
            let items = turns.iter().map(dto::turn_to_json).collect::<Vec<_>>();
            (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}
