//! Time-series helpers shared by the aggregator.
//!
//! Modules include:
//! - `parse`: provider timestamp/close parsing and axis label formatting
//! - `window`: the intraday, daily, and weekly windows over one raw series
/// Timestamp and closing-price parsing.
pub mod parse;
/// Windowing and weekly bucketing of a single raw series.
pub mod window;
