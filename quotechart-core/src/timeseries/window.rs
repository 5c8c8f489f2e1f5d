use super::parse::{month_day_label, parse_close, parse_timestamp, time_of_day_label};
use crate::{AggregationConfig, ChartError, ChartPoint, Decimal, Granularity, RawSeries, Symbol};

/// Most recent `limit` points oldest first, labelled with `label_of`.
fn recent_window<F>(
    symbol: &Symbol,
    series: &RawSeries,
    limit: usize,
    label_of: F,
) -> Result<Vec<ChartPoint>, ChartError>
where
    F: Fn(chrono::NaiveDateTime) -> String,
{
    let take = limit.min(series.len());
    series.points()[..take]
        .iter()
        .rev()
        .map(|p| {
            let ts = parse_timestamp(symbol, &p.timestamp)?;
            Ok(ChartPoint {
                label: label_of(ts),
                value: parse_close(symbol, p)?,
            })
        })
        .collect()
}

/// Most recent `limit` intraday closes oldest first, labelled `HH:MM`.
///
/// # Errors
/// Returns `ChartError::MalformedQuoteData` if a point in the window fails to parse.
pub fn intraday_window(
    symbol: &Symbol,
    series: &RawSeries,
    limit: usize,
) -> Result<Vec<ChartPoint>, ChartError> {
    recent_window(symbol, series, limit, time_of_day_label)
}

/// Most recent `limit` daily closes oldest first, labelled `M/D`.
///
/// # Errors
/// Returns `ChartError::MalformedQuoteData` if a point in the window fails to parse.
pub fn daily_window(
    symbol: &Symbol,
    series: &RawSeries,
    limit: usize,
) -> Result<Vec<ChartPoint>, ChartError> {
    recent_window(symbol, series, limit, month_day_label)
}

/// Weekly means over the daily series, oldest group first.
///
/// The series is split by array position (provider order, newest first) into
/// consecutive groups of `week_size`; group boundaries do not follow calendar
/// weeks. Each group yields the arithmetic mean of its closes, divided by the
/// group's actual size, labelled with the `M/D` of its newest member. The
/// first `weeks` groups are kept and reversed.
///
/// ```
/// use quotechart_core::timeseries::window::weekly_window;
/// use quotechart_core::{Decimal, RawQuotePoint, RawSeries, Symbol};
///
/// let closes = [10, 12, 14, 16, 18, 20, 22, 24, 26, 28, 30, 32, 34, 36];
/// let points = closes
///     .iter()
///     .enumerate()
///     .map(|(i, c)| RawQuotePoint::new(format!("2024-01-{:02}", 20 - i), c.to_string()))
///     .collect();
/// let sym = Symbol::new("AAPL").unwrap();
/// let out = weekly_window(&sym, &RawSeries::from_newest_first(points), 7, 12).unwrap();
/// let values: Vec<Decimal> = out.iter().map(|p| p.value).collect();
/// assert_eq!(values, vec![Decimal::from(30), Decimal::from(16)]);
/// assert_eq!(out[0].label, "1/13");
/// assert_eq!(out[1].label, "1/20");
/// ```
///
/// # Errors
/// - Returns `ChartError::InvalidConfig` if `week_size` is zero.
/// - Returns `ChartError::MalformedQuoteData` if a point in a kept group fails to parse.
pub fn weekly_window(
    symbol: &Symbol,
    series: &RawSeries,
    week_size: usize,
    weeks: usize,
) -> Result<Vec<ChartPoint>, ChartError> {
    if week_size == 0 {
        return Err(ChartError::InvalidConfig("week_size must be > 0".into()));
    }
    let mut out = series
        .points()
        .chunks(week_size)
        .take(weeks)
        .map(|group| {
            let newest = &group[0];
            let ts = parse_timestamp(symbol, &newest.timestamp)?;
            let mut sum = Decimal::ZERO;
            for p in group {
                sum = sum
                    .checked_add(parse_close(symbol, p)?)
                    .ok_or_else(|| ChartError::malformed(symbol.as_str(), "close sum overflow"))?;
            }
            let mean = sum
                .checked_div(Decimal::from(group.len()))
                .ok_or_else(|| ChartError::malformed(symbol.as_str(), "weekly mean overflow"))?;
            Ok(ChartPoint {
                label: month_day_label(ts),
                value: mean.normalize(),
            })
        })
        .collect::<Result<Vec<_>, ChartError>>()?;
    out.reverse();
    Ok(out)
}

/// Build the window for `granularity` from the matching raw series.
///
/// # Errors
/// Propagates the errors of the selected window function.
pub fn window_for(
    symbol: &Symbol,
    series: &RawSeries,
    granularity: Granularity,
    cfg: &AggregationConfig,
) -> Result<Vec<ChartPoint>, ChartError> {
    match granularity {
        Granularity::Intraday => intraday_window(symbol, series, cfg.intraday_points),
        Granularity::Daily => daily_window(symbol, series, cfg.daily_points),
        Granularity::Weekly => weekly_window(symbol, series, cfg.week_size, cfg.weeks),
    }
}
