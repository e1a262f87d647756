use serde::Deserialize;

use tambo_catalog::{Category, NewProduct, Product, DEFAULT_MIN_STOCK};
use tambo_chatlog::{ConversationTurn, TurnOutcome};
use tambo_core::Money;
use tambo_sales::{PaymentMethod, SaleOrder, SaleStatus};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct ProcessMessageRequest {
    pub phone: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ListMessagesQuery {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

/// Product payload, used for both create and update (full replacement).
/// Prices are in centavos.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub category: Category,
    pub cost_price: u64,
    pub sale_price: u64,
    #[serde(default)]
    pub stock: u32,
    #[serde(default = "default_min_stock")]
    pub min_stock: u32,
    pub supplier: Option<String>,
}

fn default_min_stock() -> u32 {
    DEFAULT_MIN_STOCK
}

impl CreateProductRequest {
    pub fn into_new_product(self) -> NewProduct {
        NewProduct {
            name: self.name,
            description: self.description,
            category: self.category,
            cost_price: Money::from_centavos(self.cost_price),
            sale_price: Money::from_centavos(self.sale_price),
            stock: self.stock,
            min_stock: self.min_stock,
            supplier: self.supplier,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OrderItemRequest {
    pub product_id: String,
    pub quantity: u32,
}

/// Order payload. `delivery_fee` is in centavos; item prices come from the
/// catalog at placement time, not from the request.
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub customer_name: String,
    pub customer_phone: String,
    pub items: Vec<OrderItemRequest>,
    #[serde(default)]
    pub delivery_fee: u64,
    pub payment_method: Option<PaymentMethod>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: SaleStatus,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn product_to_json(p: &Product) -> serde_json::Value {
    serde_json::json!({
        "id": p.id.to_string(),
        "name": p.name,
        "description": p.description,
        "category": p.category,
        "cost_price": p.cost_price.centavos(),
        "sale_price": p.sale_price.centavos(),
        "sale_price_display": p.sale_price.to_string(),
        "margin_percent": p.margin_percent(),
        "stock": p.stock,
        "min_stock": p.min_stock,
        "low_stock": p.is_low_stock(),
        "supplier": p.supplier,
        "created_at": p.created_at.to_rfc3339(),
        "updated_at": p.updated_at.to_rfc3339(),
    })
}

pub fn order_to_json(o: &SaleOrder) -> serde_json::Value {
    serde_json::json!({
        "id": o.id.to_string(),
        "customer_name": o.customer_name,
        "customer_phone": o.customer_phone,
        "items": o.items.iter().map(|i| serde_json::json!({
            "product_id": i.product_id.to_string(),
            "product_name": i.product_name,
            "quantity": i.quantity,
            "unit_price": i.unit_price.centavos(),
            "line_total": i.line_total.centavos(),
        })).collect::<Vec<_>>(),
        "subtotal": o.totals.subtotal.centavos(),
        "iva": o.totals.iva.centavos(),
        "it": o.totals.it.centavos(),
        "delivery_fee": o.totals.delivery_fee.centavos(),
        "total": o.totals.total.centavos(),
        "total_display": o.totals.total.to_string(),
        "status": o.status,
        "payment_method": o.payment_method,
        "notes": o.notes,
        "placed_at": o.placed_at.to_rfc3339(),
        "delivered_at": o.delivered_at.map(|d| d.to_rfc3339()),
    })
}

pub fn turn_to_json(t: &ConversationTurn) -> serde_json::Value {
    let (reply, error) = match &t.outcome {
        TurnOutcome::Replied { reply } => (Some(reply.as_str()), None),
        TurnOutcome::Failed { error } => (None, Some(error.as_str())),
    };

    serde_json::json!({
        "id": t.id.as_u64(),
        "phone": t.sender,
        "message": t.text,
        "command": t.command,
        "reply": reply,
        "error": error,
        "recorded_at": t.recorded_at.to_rfc3339(),
    })
}

/// Compact reply shape returned by the message-processing endpoint.
pub fn process_reply_to_json(t: &ConversationTurn) -> serde_json::Value {
    serde_json::json!({
        "reply": t.outcome.reply(),
        "command": t.command,
    })
}
