use serde::{Deserialize, Serialize};

use crate::{Color, Decimal, SeriesKind, Symbol};

/// A single provider observation: timestamp and closing price as delivered.
///
/// Both fields keep the provider's textual form; they are parsed when a
/// window is built so that format drift surfaces as `MalformedQuoteData`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQuotePoint {
    /// `YYYY-MM-DD` or `YYYY-MM-DD HH:MM[:SS]`.
    pub timestamp: String,
    /// Decimal closing price, e.g. `"185.6400"`.
    pub close: String,
}

impl RawQuotePoint {
    /// Build a point from its textual parts.
    pub fn new(timestamp: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            close: close.into(),
        }
    }
}

/// One symbol's raw series in provider order (newest first).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawSeries {
    points: Vec<RawQuotePoint>,
}

impl RawSeries {
    /// Wrap points already ordered newest first.
    #[must_use]
    pub const fn from_newest_first(points: Vec<RawQuotePoint>) -> Self {
        Self { points }
    }

    /// Wrap points ordered oldest first; they are stored newest first.
    #[must_use]
    pub fn from_oldest_first(mut points: Vec<RawQuotePoint>) -> Self {
        points.reverse();
        Self { points }
    }

    /// Points newest first.
    #[must_use]
    pub fn points(&self) -> &[RawQuotePoint] {
        &self.points
    }

    /// Consume the series, returning its points newest first.
    #[must_use]
    pub fn into_points(self) -> Vec<RawQuotePoint> {
        self.points
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the provider returned no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Daily and intraday series fetched for one symbol. Either may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SymbolDataset {
    /// Recent daily closes (~100 points).
    pub daily: Option<RawSeries>,
    /// Recent 5-minute closes (~1 trading day).
    pub intraday: Option<RawSeries>,
}

impl SymbolDataset {
    /// Build a dataset from its optional parts.
    #[must_use]
    pub const fn new(daily: Option<RawSeries>, intraday: Option<RawSeries>) -> Self {
        Self { daily, intraday }
    }

    /// The series of the given kind, if fetched.
    #[must_use]
    pub const fn series(&self, kind: SeriesKind) -> Option<&RawSeries> {
        match kind {
            SeriesKind::Daily => self.daily.as_ref(),
            SeriesKind::Intraday => self.intraday.as_ref(),
        }
    }
}

/// One plotted point: X-axis label and value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Display label (`HH:MM` or `M/D`).
    pub label: String,
    /// Closing price or weekly mean.
    pub value: Decimal,
}

/// One renderable line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Symbol the line belongs to.
    pub symbol: Symbol,
    /// Legend text.
    pub label: String,
    /// Points oldest first.
    pub points: Vec<ChartPoint>,
    /// Color picked by the symbol's position in the ordered symbol list.
    pub color: Color,
}

impl ChartSeries {
    /// Point values oldest first.
    pub fn values(&self) -> impl Iterator<Item = Decimal> + '_ {
        self.points.iter().map(|p| p.value)
    }

    /// Point labels oldest first.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.points.iter().map(|p| p.label.as_str())
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the series has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Why a symbol contributed no series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "reason")]
pub enum SkipReason {
    /// No dataset has been stored for the symbol (not fetched or fetch failed).
    NoDataset,
    /// The dataset lacks the series the granularity is built from.
    MissingSeries {
        /// Series kind that was required.
        kind: SeriesKind,
    },
    /// The required series exists but holds no points.
    EmptySeries {
        /// Series kind that was required.
        kind: SeriesKind,
    },
    /// The series has fewer points than the shared X-axis.
    ShortHistory {
        /// Points the symbol produced.
        have: usize,
        /// Points on the shared X-axis.
        need: usize,
    },
}

/// Per-symbol result of building one granularity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesOutcome {
    /// The symbol yielded a line.
    Present(ChartSeries),
    /// The symbol was left out of the chart.
    Skipped(SkipReason),
}

impl SeriesOutcome {
    /// The series, if present.
    #[must_use]
    pub const fn as_present(&self) -> Option<&ChartSeries> {
        match self {
            Self::Present(s) => Some(s),
            Self::Skipped(_) => None,
        }
    }
}

/// A symbol omitted from a payload and the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedSymbol {
    /// Omitted symbol.
    pub symbol: Symbol,
    /// Why it was omitted.
    pub reason: SkipReason,
}

/// Renderer-ready bundle: shared X-axis labels plus one line per symbol.
///
/// Every series holds exactly `labels.len()` points. A payload without series
/// is a valid result and renders as an empty chart area.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChartPayload {
    /// X-axis labels oldest first.
    pub labels: Vec<String>,
    /// Lines in symbol order.
    pub series: Vec<ChartSeries>,
    /// Symbols that produced no line.
    pub skipped: Vec<SkippedSymbol>,
}

impl ChartPayload {
    /// True if no symbol produced a line.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// The line for `symbol`, if present.
    #[must_use]
    pub fn series_for(&self, symbol: &Symbol) -> Option<&ChartSeries> {
        self.series.iter().find(|s| &s.symbol == symbol)
    }
}
