//! Configuration types shared by the aggregator and the dashboard session.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{ChartError, Palette};

/// Window sizes and colors used when building a chart payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationConfig {
    /// Most recent intraday points shown (78 five-minute bars ≈ 6.5 trading hours).
    pub intraday_points: usize,
    /// Most recent daily points shown.
    pub daily_points: usize,
    /// Number of consecutive daily points averaged into one weekly point.
    pub week_size: usize,
    /// Most recent weekly groups shown.
    pub weeks: usize,
    /// Colors assigned by symbol position.
    pub palette: Palette,
}

impl AggregationConfig {
    /// Default intraday window.
    pub const INTRADAY_POINTS: usize = 78;
    /// Default daily window.
    pub const DAILY_POINTS: usize = 30;
    /// Default weekly group size.
    pub const WEEK_SIZE: usize = 7;
    /// Default number of weekly groups.
    pub const WEEKS: usize = 12;

    /// Check that every window is non-zero and the palette has colors.
    ///
    /// # Errors
    /// Returns `ChartError::InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<(), ChartError> {
        let windows = [
            ("intraday_points", self.intraday_points),
            ("daily_points", self.daily_points),
            ("week_size", self.week_size),
            ("weeks", self.weeks),
        ];
        if let Some((name, _)) = windows.iter().find(|(_, v)| *v == 0) {
            return Err(ChartError::InvalidConfig(format!("{name} must be > 0")));
        }
        if self.palette.is_empty() {
            return Err(ChartError::InvalidConfig("palette must not be empty".into()));
        }
        Ok(())
    }
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            intraday_points: Self::INTRADAY_POINTS,
            daily_points: Self::DAILY_POINTS,
            week_size: Self::WEEK_SIZE,
            weeks: Self::WEEKS,
            palette: Palette::default(),
        }
    }
}

/// Bounded TTL cache settings for fetched series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of cached series.
    pub capacity: u64,
    /// How long a fetched series is served from cache.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: 256,
            ttl: Duration::from_secs(60),
        }
    }
}

/// Global configuration for a `Dashboard` session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Window sizes and palette for payload building.
    pub aggregation: AggregationConfig,
    /// Period of the auto-refresh task.
    pub refresh_interval: Duration,
    /// Also fetch the intraday series for every symbol.
    ///
    /// Intraday calls cost a second provider request per symbol; disable on
    /// tight API budgets.
    pub fetch_intraday: bool,
    /// Optional cache wrapped around the quote source.
    pub cache: Option<CacheConfig>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            aggregation: AggregationConfig::default(),
            refresh_interval: Duration::from_secs(60),
            fetch_intraday: true,
            cache: None,
        }
    }
}
