use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::{ChartPayload, ChartSeries};

/// Line tension passed to the widget (0 draws straight segments).
const LINE_TENSION: f64 = 0.1;

/// One dataset in the charting widget's `{labels, datasets}` shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RendererDataset {
    /// Legend text.
    pub label: String,
    /// Values aligned with the payload labels.
    pub data: Vec<f64>,
    /// Line color.
    pub border_color: String,
    /// Fill color.
    pub background_color: String,
    /// Area fill under the line; always off.
    pub fill: bool,
    /// Bezier tension.
    pub tension: f64,
}

/// JSON payload consumed by the charting widget.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RendererPayload {
    /// Shared X-axis labels.
    pub labels: Vec<String>,
    /// One dataset per line.
    pub datasets: Vec<RendererDataset>,
}

impl From<&ChartSeries> for RendererDataset {
    fn from(s: &ChartSeries) -> Self {
        Self {
            label: s.label.clone(),
            data: s
                .values()
                .map(|v| v.to_f64().unwrap_or(f64::NAN))
                .collect(),
            border_color: s.color.border(),
            background_color: s.color.background(),
            fill: false,
            tension: LINE_TENSION,
        }
    }
}

impl ChartPayload {
    /// Convert to the widget's shape. Decimal values become `f64` here and
    /// nowhere earlier.
    #[must_use]
    pub fn to_renderer(&self) -> RendererPayload {
        RendererPayload {
            labels: self.labels.clone(),
            datasets: self.series.iter().map(RendererDataset::from).collect(),
        }
    }
}
