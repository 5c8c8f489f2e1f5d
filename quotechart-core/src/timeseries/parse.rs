use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};

use crate::{ChartError, Decimal, RawQuotePoint, Symbol};

const DATE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a provider timestamp (`YYYY-MM-DD` or `YYYY-MM-DD HH:MM[:SS]`).
///
/// Date-only values resolve to midnight. Timestamps are kept in the
/// exchange-local wall clock the provider reports.
///
/// # Errors
/// Returns `ChartError::MalformedQuoteData` naming `symbol` if no format matches.
pub fn parse_timestamp(symbol: &Symbol, raw: &str) -> Result<NaiveDateTime, ChartError> {
    let s = raw.trim();
    for fmt in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| ChartError::malformed(symbol.as_str(), format!("timestamp {raw:?}")))
}

/// Parse a closing price.
///
/// # Errors
/// Returns `ChartError::MalformedQuoteData` naming `symbol` and the point's
/// timestamp if the close is not a finite decimal.
pub fn parse_close(symbol: &Symbol, point: &RawQuotePoint) -> Result<Decimal, ChartError> {
    Decimal::from_str(point.close.trim())
        .or_else(|_| Decimal::from_scientific(point.close.trim()))
        .map_err(|_| {
            ChartError::malformed(
                symbol.as_str(),
                format!("close {:?} at {}", point.close, point.timestamp),
            )
        })
}

/// `HH:MM` label used on intraday axes.
#[must_use]
pub fn time_of_day_label(ts: NaiveDateTime) -> String {
    ts.format("%H:%M").to_string()
}

/// `M/D` label used on daily and weekly axes.
#[must_use]
pub fn month_day_label(ts: NaiveDateTime) -> String {
    ts.format("%-m/%-d").to_string()
}
