use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ChartError;

/// Time bucketing requested for chart display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// Most recent trading day of 5-minute closes.
    Intraday,
    /// Most recent daily closes.
    #[default]
    Daily,
    /// Daily closes averaged over consecutive groups of points.
    Weekly,
}

impl Granularity {
    /// All granularities in display order.
    pub const ALL: [Self; 3] = [Self::Intraday, Self::Daily, Self::Weekly];

    /// Which raw series the granularity is built from.
    #[must_use]
    pub const fn required_series(self) -> SeriesKind {
        match self {
            Self::Intraday => SeriesKind::Intraday,
            Self::Daily | Self::Weekly => SeriesKind::Daily,
        }
    }

    /// Stable lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Intraday => "intraday",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "intraday" => Ok(Self::Intraday),
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            other => Err(ChartError::InvalidConfig(format!(
                "unknown granularity: {other}"
            ))),
        }
    }
}

/// The two raw series a provider delivers per symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    /// Recent daily closes.
    Daily,
    /// Recent 5-minute closes.
    Intraday,
}

impl SeriesKind {
    /// Stable lowercase name, used as a capability label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Intraday => "intraday",
        }
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
