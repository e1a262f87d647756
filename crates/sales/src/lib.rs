//! Sale orders domain module.
//!
//! This crate contains business rules for sale orders and revenue windows,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod order;
pub mod revenue;

pub use order::{
    NewSaleOrder, PaymentMethod, SaleItem, SaleOrder, SaleStatus, SaleTotals, IT_RATE_PERCENT,
    IVA_RATE_PERCENT,
};
pub use revenue::RevenueReader;
