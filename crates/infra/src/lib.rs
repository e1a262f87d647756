//! Infrastructure layer: in-memory stores and demo data.

pub mod catalog_store;
pub mod sales_ledger;
pub mod seed;

pub use catalog_store::{CatalogError, InMemoryCatalog};
pub use sales_ledger::{InMemorySalesLedger, LedgerError};
