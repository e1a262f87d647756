use std::sync::RwLock;

use chrono::{DateTime, Utc};
use thiserror::Error;

use tambo_core::{DomainError, Money, SaleId, StoreError, StoreResult};
use tambo_sales::{RevenueReader, SaleOrder, SaleStatus};

/// Failure of a ledger mutation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// In-memory sales ledger.
#[derive(Debug, Default)]
pub struct InMemorySalesLedger {
    orders: RwLock<Vec<SaleOrder>>,
}

impl InMemorySalesLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, order: SaleOrder) -> StoreResult<SaleOrder> {
        let mut orders = self.write()?;
        orders.push(order.clone());
        Ok(order)
    }

    /// All orders, most recently placed first.
    pub fn list(&self) -> StoreResult<Vec<SaleOrder>> {
        let orders = self.read()?;
        let mut listed = orders.clone();
        listed.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));
        Ok(listed)
    }

    pub fn get(&self, id: SaleId) -> Result<SaleOrder, LedgerError> {
        let orders = self.read()?;
        orders
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or(LedgerError::Domain(DomainError::NotFound))
    }

    pub fn set_status(
        &self,
        id: SaleId,
        status: SaleStatus,
        now: DateTime<Utc>,
    ) -> Result<SaleOrder, LedgerError> {
        let mut orders = self.write()?;
        let order = orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(DomainError::NotFound)?;
        order.set_status(status, now);
        Ok(order.clone())
    }

    pub fn count(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn count_pending(&self) -> StoreResult<usize> {
        let orders = self.read()?;
        Ok(orders
            .iter()
            .filter(|o| o.status == SaleStatus::Pendiente)
            .count())
    }

    fn read(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, Vec<SaleOrder>>> {
        self.orders
            .read()
            .map_err(|_| StoreError::unavailable("sales ledger lock poisoned"))
    }

    fn write(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, Vec<SaleOrder>>> {
        self.orders
            .write()
            .map_err(|_| StoreError::unavailable("sales ledger lock poisoned"))
    }
}

impl RevenueReader for InMemorySalesLedger {
    fn revenue_in_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> StoreResult<Money> {
        let orders = self.read()?;
        Ok(orders
            .iter()
            .filter(|o| o.counts_toward_revenue() && o.placed_at >= start && o.placed_at <= end)
            .map(|o| o.totals.total)
            .sum())
    }
}
