//! quotechart-core
//!
//! Core types, traits, and the chart-data builder shared across quotechart.
//!
//! - `model`: raw provider series, per-symbol datasets, and chart payloads.
//! - `timeseries`: timestamp/close parsing and the intraday/daily/weekly windows.
//! - `aggregate`: turns `{symbol → dataset}` plus a granularity into a payload.
//! - `render`: the JSON shape consumed by the charting widget.
//! - `source`: the `QuoteSource` trait implemented by connectors.
//! - `refresh`: handle for the cancellable periodic refresh task.
//!
//! The aggregator is synchronous and pure. Only `source` and `refresh` are
//! coupled to Tokio.
#![warn(missing_docs)]

/// Payload building across symbols.
pub mod aggregate;
/// Raw and rendered data model.
pub mod model;
/// Handle owning the periodic refresh task.
pub mod refresh;
/// Renderer-facing payload shape.
pub mod render;
/// Quote source trait implemented by connectors.
pub mod source;
/// Parsing and windowing of raw provider series.
pub mod timeseries;
pub mod types;

pub use aggregate::{build_chart_payload, build_chart_payload_with, build_series_outcomes};
pub use model::{
    ChartPayload, ChartPoint, ChartSeries, RawQuotePoint, RawSeries, SeriesOutcome, SkipReason,
    SkippedSymbol, SymbolDataset,
};
pub use refresh::RefreshHandle;
pub use render::{RendererDataset, RendererPayload};
pub use source::QuoteSource;
pub use types::*;
