use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tambo_core::{DomainError, DomainResult, Money, ProductId, SaleId};

/// IVA (value-added tax) rate applied to the subtotal.
pub const IVA_RATE_PERCENT: u64 = 13;

/// IT (transaction tax) rate applied to the subtotal.
pub const IT_RATE_PERCENT: u64 = 3;

/// Sale order status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaleStatus {
    Pendiente,
    Confirmado,
    EnPreparacion,
    EnEntrega,
    Entregado,
    Cancelado,
}

/// How the customer pays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Efectivo,
    Qr,
    TigoMoney,
    Banco,
    Tarjeta,
}

/// Order line: product snapshot, quantity, prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleItem {
    pub product_id: ProductId,
    /// Name at sale time; later catalog edits do not rewrite order history.
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub line_total: Money,
}

impl SaleItem {
    pub fn new(product_id: ProductId, product_name: String, quantity: u32, unit_price: Money) -> Self {
        Self {
            product_id,
            product_name,
            quantity,
            unit_price,
            line_total: unit_price.times(quantity),
        }
    }
}

/// Monetary breakdown of an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleTotals {
    pub subtotal: Money,
    pub iva: Money,
    pub it: Money,
    pub delivery_fee: Money,
    pub total: Money,
}

impl SaleTotals {
    /// Compute totals from line items plus a delivery fee.
    ///
    /// Both taxes are taken over the goods subtotal only; the delivery fee is
    /// added untaxed.
    pub fn compute(items: &[SaleItem], delivery_fee: Money) -> Self {
        let subtotal: Money = items.iter().map(|item| item.line_total).sum();
        let iva = subtotal.percent(IVA_RATE_PERCENT);
        let it = subtotal.percent(IT_RATE_PERCENT);
        let total = subtotal
            .saturating_add(iva)
            .saturating_add(it)
            .saturating_add(delivery_fee);
        Self {
            subtotal,
            iva,
            it,
            delivery_fee,
            total,
        }
    }
}

/// Input for placing a sale order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSaleOrder {
    pub customer_name: String,
    pub customer_phone: String,
    pub items: Vec<SaleItem>,
    pub delivery_fee: Money,
    pub payment_method: Option<PaymentMethod>,
    pub notes: Option<String>,
}

/// A customer sale order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleOrder {
    pub id: SaleId,
    pub customer_name: String,
    pub customer_phone: String,
    pub items: Vec<SaleItem>,
    pub totals: SaleTotals,
    pub status: SaleStatus,
    pub payment_method: Option<PaymentMethod>,
    pub notes: Option<String>,
    pub placed_at: DateTime<Utc>,
    pub delivered_at: Option<DateTime<Utc>>,
}

impl SaleOrder {
    /// Place a new order in `Pendiente` status with computed totals.
    pub fn place(id: SaleId, new: NewSaleOrder, now: DateTime<Utc>) -> DomainResult<Self> {
        if new.customer_name.trim().is_empty() {
            return Err(DomainError::validation("customer name cannot be empty"));
        }
        if new.customer_phone.trim().is_empty() {
            return Err(DomainError::validation("customer phone cannot be empty"));
        }
        if new.items.is_empty() {
            return Err(DomainError::validation("order must contain at least one item"));
        }
        let totals = SaleTotals::compute(&new.items, new.delivery_fee);
        Ok(Self {
            id,
            customer_name: new.customer_name.trim().to_string(),
            customer_phone: new.customer_phone.trim().to_string(),
            items: new.items,
            totals,
            status: SaleStatus::Pendiente,
            payment_method: new.payment_method,
            notes: new.notes,
            placed_at: now,
            delivered_at: None,
        })
    }

    /// Move the order to `status`, stamping the delivery time on `Entregado`.
    pub fn set_status(&mut self, status: SaleStatus, now: DateTime<Utc>) {
        self.status = status;
        if status == SaleStatus::Entregado {
            self.delivered_at = Some(now);
        }
    }

    /// Cancelled orders are excluded from every revenue figure.
    pub fn counts_toward_revenue(&self) -> bool {
        self.status != SaleStatus::Cancelado
    }
}
