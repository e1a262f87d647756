use std::sync::Arc;

use chrono::{DateTime, Datelike, NaiveTime, Utc};

use tambo_core::{Money, StoreResult};

/// Read-side contract over recorded sales.
///
/// All windows are expressed in UTC; callers pass `now` explicitly so report
/// figures are reproducible in tests.
pub trait RevenueReader: Send + Sync {
    /// Total revenue from non-cancelled orders placed in `[start, end]`,
    /// both bounds inclusive.
    fn revenue_in_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> StoreResult<Money>;

    /// Revenue from midnight of `now`'s day through `now`.
    fn sales_today(&self, now: DateTime<Utc>) -> StoreResult<Money> {
        self.revenue_in_range(start_of_day(now), now)
    }

    /// Revenue from the first of `now`'s month through `now`.
    fn sales_this_month(&self, now: DateTime<Utc>) -> StoreResult<Money> {
        self.revenue_in_range(start_of_month(now), now)
    }
}

impl<S> RevenueReader for Arc<S>
where
    S: RevenueReader + ?Sized,
{
    fn revenue_in_range(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> StoreResult<Money> {
        (**self).revenue_in_range(start, end)
    }
}

fn start_of_day(now: DateTime<Utc>) -> DateTime<Utc> {
    now.date_naive().and_time(NaiveTime::MIN).and_utc()
}

fn start_of_month(now: DateTime<Utc>) -> DateTime<Utc> {
    let first = now
        .date_naive()
        .with_day(1)
        .unwrap_or_else(|| now.date_naive());
    first.and_time(NaiveTime::MIN).and_utc()
}
