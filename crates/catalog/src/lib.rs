//! Product catalog domain module.
//!
//! This crate contains business rules for the store catalog, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage).

pub mod product;
pub mod reader;

pub use product::{Category, NewProduct, Product, DEFAULT_MIN_STOCK};
pub use reader::CatalogReader;
