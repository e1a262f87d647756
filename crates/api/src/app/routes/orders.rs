use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};
use chrono::Utc;

use tambo_core::{Money, ProductId, SaleId};
use tambo_sales::{NewSaleOrder, SaleItem, SaleOrder};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_orders).post(create_order))
        .route("/:id", get(get_order))
        .route("/:id/status", put(update_order_status))
}

pub async fn create_order(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateOrderRequest>,
) -> axum::response::Response {
    // Validate the order shell up front; taken stock is not restored on a
    // later rejection.
    if body.customer_name.trim().is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "customer name must not be empty",
        );
    }
    if body.customer_phone.trim().is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "customer phone must not be empty",
        );
    }
    if body.items.is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "order must contain at least one item",
        );
    }

    let mut wants = Vec::with_capacity(body.items.len());
    for item in &body.items {
        let id: ProductId = match item.product_id.parse() {
            Ok(v) => v,
            Err(_) => {
                return errors::json_error(
                    StatusCode::BAD_REQUEST,
                    "invalid_id",
                    "invalid product id",
                )
            }
        };
        if item.quantity == 0 {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "validation_error",
                "item quantity must be at least 1",
            );
        }
        wants.push((id, item.quantity));
    }

    let taken = match services.catalog.take_stock(&wants) {
        Ok(products) => products,
        Err(e) => return errors::catalog_error_to_response(e),
    };

    // Price each line from the same catalog snapshot the stock came from.
    let items: Vec<SaleItem> = wants
        .iter()
        .zip(taken.iter())
        .map(|((id, quantity), product)| {
            SaleItem::new(*id, product.name.clone(), *quantity, product.sale_price)
        })
        .collect();

    let new_order = NewSaleOrder {
        customer_name: body.customer_name,
        customer_phone: body.customer_phone,
        items,
        delivery_fee: Money::from_centavos(body.delivery_fee),
        payment_method: body.payment_method,
        notes: body.notes,
    };

    let order = match SaleOrder::place(SaleId::new(), new_order, Utc::now()) {
        Ok(o) => o,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.ledger.record(order) {
        Ok(o) => (StatusCode::CREATED, Json(dto::order_to_json(&o))).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn list_orders(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.ledger.list() {
        Ok(orders) => {
            let items = orders.iter().map(dto::order_to_json).collect::<Vec<_>>();
            (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn get_order(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: SaleId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid order id")
        }
    };

    match services.ledger.get(id) {
        Ok(order) => (StatusCode::OK, Json(dto::order_to_json(&order))).into_response(),
        Err(e) => errors::ledger_error_to_response(e),
    }
}

pub async fn update_order_status(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateOrderStatusRequest>,
) -> axum::response::Response {
    let id: SaleId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid order id")
        }
    };

    match services.ledger.set_status(id, body.status, Utc::now()) {
        Ok(order) => (StatusCode::OK, Json(dto::order_to_json(&order))).into_response(),
        Err(e) => errors::ledger_error_to_response(e),
    }
}
