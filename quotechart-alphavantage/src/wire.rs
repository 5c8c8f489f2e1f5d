//! Response envelope of the `TIME_SERIES_*` query endpoint.
use indexmap::IndexMap;
use serde::Deserialize;

use quotechart_core::{ChartError, RawQuotePoint, RawSeries, SeriesKind, Symbol};

use crate::NAME;

/// Series key for daily closes.
pub const DAILY_KEY: &str = "Time Series (Daily)";
/// Series key for 5-minute intraday closes.
pub const INTRADAY_KEY: &str = "Time Series (5min)";

#[derive(Deserialize, Debug)]
struct Bar {
    #[serde(rename = "4. close")]
    close: Option<String>,
}

// Maps deserialize straight into `IndexMap` so the provider's newest-first
// order survives.
#[derive(Deserialize, Debug)]
struct Envelope {
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
    #[serde(rename = "Time Series (Daily)")]
    daily: Option<IndexMap<String, Bar>>,
    #[serde(rename = "Time Series (5min)")]
    intraday: Option<IndexMap<String, Bar>>,
}

/// Decode a query response body into a raw close series.
///
/// # Errors
/// - `NotFound` when the body carries `"Error Message"` (unknown symbol).
/// - `RateLimited` when it carries `"Note"` or `"Information"`.
/// - `Provider` when the body is not JSON or lacks the expected series key.
/// - `MalformedQuoteData` when a bar has no `"4. close"` field.
pub fn parse_time_series(
    symbol: &Symbol,
    kind: SeriesKind,
    body: &[u8],
) -> Result<RawSeries, ChartError> {
    let envelope: Envelope = serde_json::from_slice(body)
        .map_err(|e| ChartError::provider(NAME, format!("invalid response body: {e}")))?;

    if let Some(msg) = envelope.error_message {
        return Err(ChartError::not_found(format!(
            "{kind} series for {symbol} ({msg})"
        )));
    }
    if let Some(msg) = envelope.note.or(envelope.information) {
        return Err(ChartError::rate_limited(NAME, msg));
    }

    let (key, bars) = match kind {
        SeriesKind::Daily => (DAILY_KEY, envelope.daily),
        SeriesKind::Intraday => (INTRADAY_KEY, envelope.intraday),
    };
    let bars = bars.ok_or_else(|| {
        ChartError::provider(NAME, format!("response for {symbol} has no {key:?}"))
    })?;

    let points = bars
        .into_iter()
        .map(|(timestamp, bar)| match bar.close {
            Some(close) => Ok(RawQuotePoint::new(timestamp, close)),
            None => Err(ChartError::malformed(
                symbol.as_str(),
                format!("missing close at {timestamp}"),
            )),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(RawSeries::from_newest_first(points))
}
