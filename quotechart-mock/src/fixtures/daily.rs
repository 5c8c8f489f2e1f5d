use chrono::{Datelike, Duration, NaiveDate, Weekday};
use quotechart_core::{RawQuotePoint, RawSeries};

use super::close_at;

/// Trading days served per symbol.
pub const DAILY_LEN: usize = 40;

fn last_session() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 28).unwrap_or_default()
}

/// Weekdays ending at the last fixture session, newest first.
pub fn sessions(count: usize) -> Vec<NaiveDate> {
    let mut out = Vec::with_capacity(count);
    let mut day = last_session();
    while out.len() < count {
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            out.push(day);
        }
        day -= Duration::days(1);
    }
    out
}

fn base_cents(symbol: &str) -> Option<i64> {
    match symbol {
        "AAPL" => Some(21_040),
        "MSFT" => Some(44_610),
        "GOOG" => Some(18_320),
        "TSLA" => Some(19_750),
        _ => None,
    }
}

/// Daily fixture for a known symbol.
pub fn by_symbol(symbol: &str) -> Option<RawSeries> {
    let base = base_cents(symbol)?;
    let points = sessions(DAILY_LEN)
        .into_iter()
        .enumerate()
        .map(|(i, day)| RawQuotePoint::new(day.format("%Y-%m-%d").to_string(), close_at(base, i)))
        .collect();
    Some(RawSeries::from_newest_first(points))
}
