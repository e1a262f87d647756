//! Engine error model.

use thiserror::Error;

use tambo_core::StoreError;

/// Failure of a message-processing step.
///
/// Only adapter failures surface as errors; usage mistakes, unknown commands
/// and empty results are normal replies. The variant records which adapter
/// failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The catalog reader failed.
    #[error("catalog read failed: {0}")]
    Catalog(#[source] StoreError),

    /// The sales ledger reader failed.
    #[error("sales read failed: {0}")]
    Ledger(#[source] StoreError),

    /// The conversation log could not record the turn.
    #[error("conversation log write failed: {0}")]
    Log(#[source] StoreError),
}
