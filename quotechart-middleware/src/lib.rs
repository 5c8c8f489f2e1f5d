//! quotechart-middleware
//!
//! Wrappers that add behavior around any [`QuoteSource`](quotechart_core::QuoteSource).
#![warn(missing_docs)]

mod cache;

pub use crate::cache::CachingSource;
