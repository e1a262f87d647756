//! Service wiring: in-memory stores plus the messaging engine built over them.

use std::sync::Arc;

use tambo_chatlog::InMemoryTurnLog;
use tambo_infra::{seed, InMemoryCatalog, InMemorySalesLedger};
use tambo_messaging::MessageEngine;

/// The engine as wired for this process (in-memory stores behind `Arc`).
pub type WiredEngine =
    MessageEngine<Arc<InMemoryCatalog>, Arc<InMemorySalesLedger>, Arc<InMemoryTurnLog>>;

/// Shared application state handed to handlers via `Extension`.
pub struct AppServices {
    pub catalog: Arc<InMemoryCatalog>,
    pub ledger: Arc<InMemorySalesLedger>,
    pub turn_log: Arc<InMemoryTurnLog>,
    pub engine: WiredEngine,
}

pub fn build_services(seed_demo: bool) -> AppServices {
    let catalog = Arc::new(InMemoryCatalog::new());
    let ledger = Arc::new(InMemorySalesLedger::new());
    let turn_log = Arc::new(InMemoryTurnLog::new());

    if seed_demo {
        if let Err(err) = seed::seed_demo_catalog(&catalog) {
            tracing::error!("failed to seed demo catalog: {}", err);
        }
    }

    let engine = MessageEngine::new(
        Arc::clone(&catalog),
        Arc::clone(&ledger),
        Arc::clone(&turn_log),
    );

    AppServices {
        catalog,
        ledger,
        turn_log,
        engine,
    }
}
