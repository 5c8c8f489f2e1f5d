//! Re-export of foundational types from `quotechart-types`.
// Consolidated re-exports so downstream crates can depend on `quotechart-core` only

pub use quotechart_types::{
    AggregationConfig, CacheConfig, ChartConfig, ChartError, Color, Granularity, Palette,
    SeriesKind, Symbol,
};

pub use rust_decimal::Decimal;
