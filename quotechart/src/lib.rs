//! quotechart keeps the state of a stock chart dashboard and turns it into
//! renderer-ready chart data.
//!
//! Overview
//! - A [`Dashboard`] owns one [`QuoteSource`], the ordered symbol list
//!   (primary symbol, then comparisons in insertion order), the fetched
//!   datasets and the selected [`Granularity`].
//! - [`Dashboard::payload`] runs the pure aggregator from `quotechart_core`
//!   over a snapshot of that state; nothing is cached between calls.
//! - [`Dashboard::refresh`] re-fetches every tracked symbol concurrently and
//!   [`Dashboard::start_auto_refresh`] does so on a timer until the returned
//!   [`RefreshHandle`] is stopped or dropped.
//!
//! Example
//! ```rust,ignore
//! use std::sync::Arc;
//! use quotechart::{Dashboard, Granularity};
//! use quotechart_mock::MockSource;
//!
//! let dash = Arc::new(
//!     Dashboard::builder()
//!         .source(Arc::new(MockSource::new()))
//!         .build()?,
//! );
//! dash.search("aapl").await?;
//! dash.add_comparison("MSFT").await?;
//! dash.set_granularity(Granularity::Weekly).await;
//! let chart = dash.payload().await?.to_renderer();
//!
//! let handle = dash.start_auto_refresh();
//! // ...
//! handle.stop().await;
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
mod refresh;
mod state;

pub use crate::core::{Dashboard, DashboardBuilder};
pub use refresh::RefreshSummary;

pub use quotechart_middleware::CachingSource;

// Re-export core types for convenience
pub use quotechart_core::{
    AggregationConfig, CacheConfig, ChartConfig, ChartError, ChartPayload, ChartPoint,
    ChartSeries, Color, Granularity, Palette, QuoteSource, RawQuotePoint, RawSeries,
    RefreshHandle, RendererDataset, RendererPayload, SeriesKind, SeriesOutcome, SkipReason,
    SkippedSymbol, Symbol, SymbolDataset,
};
