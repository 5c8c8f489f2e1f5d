use chrono::Duration;
use quotechart_core::{RawQuotePoint, RawSeries};

use super::close_at;
use super::daily::sessions;

/// Five-minute bars in one regular session (09:35 through 16:00).
pub const INTRADAY_LEN: usize = 78;

fn base_cents(symbol: &str) -> Option<i64> {
    match symbol {
        "AAPL" => Some(21_010),
        "MSFT" => Some(44_590),
        _ => None,
    }
}

/// Intraday fixture for symbols that have one (AAPL, MSFT).
pub fn by_symbol(symbol: &str) -> Option<RawSeries> {
    let base = base_cents(symbol)?;
    let close_bell = sessions(1).first()?.and_hms_opt(16, 0, 0)?;
    let points = (0..INTRADAY_LEN)
        .map(|i| {
            let minutes = i64::try_from(i * 5).unwrap_or(0);
            let ts = close_bell - Duration::minutes(minutes);
            RawQuotePoint::new(ts.format("%Y-%m-%d %H:%M:%S").to_string(), close_at(base, i))
        })
        .collect();
    Some(RawSeries::from_newest_first(points))
}
