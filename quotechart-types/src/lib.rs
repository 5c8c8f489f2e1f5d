//! Quotechart data transfer objects and configuration primitives shared by
//! the aggregator, the connectors, and the dashboard session.
#![warn(missing_docs)]

mod config;
mod error;
mod granularity;
mod palette;
mod symbol;

pub use config::{AggregationConfig, CacheConfig, ChartConfig};
pub use error::ChartError;
pub use granularity::{Granularity, SeriesKind};
pub use palette::{Color, Palette};
pub use symbol::Symbol;
