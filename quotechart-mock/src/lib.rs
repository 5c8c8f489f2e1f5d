//! Mock quote sources for tests and demos.
//!
//! [`MockSource`] serves deterministic fixtures; [`DynamicMockSource`] lets a
//! test script each response through a [`DynamicMockController`].
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use quotechart_core::{ChartError, QuoteSource, RawQuotePoint, RawSeries, SeriesKind, Symbol};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockController, DynamicMockSource, MockBehavior};
pub use fixtures::daily::DAILY_LEN;
pub use fixtures::intraday::INTRADAY_LEN;

const NAME: &str = "quotechart-mock";

/// Mock source for CI-safe tests and demos. Provides deterministic data from static fixtures.
///
/// Daily fixtures exist for `AAPL`, `MSFT`, `GOOG` and `TSLA`; intraday
/// fixtures only for `AAPL` and `MSFT`. A few reserved symbols trigger
/// failure paths:
/// - `FAIL`: provider error
/// - `LIMIT`: rate limit
/// - `BAD`: a series whose newest close does not parse
#[derive(Debug, Default)]
pub struct MockSource {
    daily_calls: AtomicUsize,
    intraday_calls: AtomicUsize,
}

impl MockSource {
    /// A mock with zeroed call counters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            daily_calls: AtomicUsize::new(0),
            intraday_calls: AtomicUsize::new(0),
        }
    }

    /// Number of `daily` and `intraday` calls served so far, failures included.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.daily_calls() + self.intraday_calls()
    }

    /// Number of `daily` calls served so far.
    #[must_use]
    pub fn daily_calls(&self) -> usize {
        self.daily_calls.load(Ordering::SeqCst)
    }

    /// Number of `intraday` calls served so far.
    #[must_use]
    pub fn intraday_calls(&self) -> usize {
        self.intraday_calls.load(Ordering::SeqCst)
    }

    fn maybe_fail(symbol: &Symbol, kind: SeriesKind) -> Result<(), ChartError> {
        match symbol.as_str() {
            "FAIL" => Err(ChartError::provider(NAME, format!("forced failure: {kind}"))),
            "LIMIT" => Err(ChartError::rate_limited(
                NAME,
                "standard API call frequency exceeded",
            )),
            _ => Ok(()),
        }
    }

    fn malformed(kind: SeriesKind) -> RawSeries {
        let fixture = match kind {
            SeriesKind::Daily => fixtures::daily::by_symbol("AAPL"),
            SeriesKind::Intraday => fixtures::intraday::by_symbol("AAPL"),
        };
        let mut points = fixture.map(RawSeries::into_points).unwrap_or_default();
        if let Some(newest) = points.first_mut() {
            *newest = RawQuotePoint::new(newest.timestamp.clone(), "N/A");
        }
        RawSeries::from_newest_first(points)
    }

    fn fixture(symbol: &Symbol, kind: SeriesKind) -> Result<RawSeries, ChartError> {
        Self::maybe_fail(symbol, kind)?;
        if symbol.as_str() == "BAD" {
            return Ok(Self::malformed(kind));
        }
        let found = match kind {
            SeriesKind::Daily => fixtures::daily::by_symbol(symbol.as_str()),
            SeriesKind::Intraday => fixtures::intraday::by_symbol(symbol.as_str()),
        };
        found.ok_or_else(|| ChartError::not_found(format!("{kind} series for {symbol}")))
    }
}

#[async_trait]
impl QuoteSource for MockSource {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn daily(&self, symbol: &Symbol) -> Result<RawSeries, ChartError> {
        self.daily_calls.fetch_add(1, Ordering::SeqCst);
        Self::fixture(symbol, SeriesKind::Daily)
    }

    async fn intraday(&self, symbol: &Symbol) -> Result<RawSeries, ChartError> {
        self.intraday_calls.fetch_add(1, Ordering::SeqCst);
        Self::fixture(symbol, SeriesKind::Intraday)
    }
}
