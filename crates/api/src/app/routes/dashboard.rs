use std::sync::Arc;

use axum::{
    extract::Extension, http::StatusCode, response::IntoResponse, routing::get, Json, Router,
};
use chrono::{DateTime, Utc};

use tambo_chatlog::TurnStore;
use tambo_core::StoreResult;
use tambo_sales::RevenueReader;

use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/stats", get(stats))
}

pub async fn stats(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match collect_stats(&services, Utc::now()) {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

fn collect_stats(services: &AppServices, now: DateTime<Utc>) -> StoreResult<serde_json::Value> {
    let total_products = services.catalog.count()?;
    let low_stock_alerts = services.catalog.low_stock()?.len();
    let total_orders = services.ledger.count()?;
    let pending_orders = services.ledger.count_pending()?;
    let today_sales = services.ledger.sales_today(now)?;
    let monthly_sales = services.ledger.sales_this_month(now)?;
    let whatsapp_messages = services.turn_log.count()?;
    let commands_processed = services.turn_log.count_with_command()?;

    Ok(serde_json::json!({
        "total_products": total_products,
        "low_stock_alerts": low_stock_alerts,
        "total_orders": total_orders,
        "pending_orders": pending_orders,
        "today_sales": today_sales.to_string(),
        "monthly_sales": monthly_sales.to_string(),
        "whatsapp_messages": whatsapp_messages,
        "commands_processed": commands_processed,
    }))
}
