//! `tambo-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod money;

pub use error::{DomainError, DomainResult, StoreError, StoreResult};
pub use id::{ProductId, SaleId};
pub use money::Money;
