use std::collections::BTreeMap;

use crate::timeseries::window::window_for;
use crate::{
    AggregationConfig, ChartError, ChartPayload, ChartSeries, Granularity, SeriesOutcome,
    SkipReason, SkippedSymbol, Symbol, SymbolDataset,
};

fn series_label(symbol: &Symbol, granularity: Granularity) -> String {
    match granularity {
        Granularity::Intraday | Granularity::Daily => format!("{symbol} Closing Price"),
        Granularity::Weekly => format!("{symbol} Weekly Average"),
    }
}

/// Build each symbol's line independently, in `ordered_symbols` order.
///
/// Lines are not yet aligned to a shared X-axis: each carries its own labels
/// and length. Colors are assigned from the symbol's index in
/// `ordered_symbols`, so a skipped symbol still consumes its color slot.
///
/// # Errors
/// - Returns `ChartError::InvalidConfig` if `cfg` fails validation.
/// - Returns `ChartError::MalformedQuoteData` if any processed point fails to parse.
pub fn build_series_outcomes(
    datasets: &BTreeMap<Symbol, SymbolDataset>,
    ordered_symbols: &[Symbol],
    granularity: Granularity,
    cfg: &AggregationConfig,
) -> Result<Vec<(Symbol, SeriesOutcome)>, ChartError> {
    cfg.validate()?;
    let kind = granularity.required_series();
    let mut out = Vec::with_capacity(ordered_symbols.len());
    for (index, symbol) in ordered_symbols.iter().enumerate() {
        let outcome = match datasets.get(symbol).map(|d| d.series(kind)) {
            None => SeriesOutcome::Skipped(SkipReason::NoDataset),
            Some(None) => SeriesOutcome::Skipped(SkipReason::MissingSeries { kind }),
            Some(Some(raw)) if raw.is_empty() => {
                SeriesOutcome::Skipped(SkipReason::EmptySeries { kind })
            }
            Some(Some(raw)) => {
                let points = window_for(symbol, raw, granularity, cfg)?;
                let color = cfg
                    .palette
                    .color_for(index)
                    .ok_or_else(|| ChartError::InvalidConfig("palette must not be empty".into()))?;
                SeriesOutcome::Present(ChartSeries {
                    symbol: symbol.clone(),
                    label: series_label(symbol, granularity),
                    points,
                    color,
                })
            }
        };
        out.push((symbol.clone(), outcome));
    }
    Ok(out)
}

/// Build a renderer-ready payload with the default windows and palette.
///
/// See [`build_chart_payload_with`].
///
/// # Errors
/// Returns `ChartError::MalformedQuoteData` if any processed point fails to parse.
pub fn build_chart_payload(
    datasets: &BTreeMap<Symbol, SymbolDataset>,
    ordered_symbols: &[Symbol],
    granularity: Granularity,
) -> Result<ChartPayload, ChartError> {
    build_chart_payload_with(
        datasets,
        ordered_symbols,
        granularity,
        &AggregationConfig::default(),
    )
}

/// Build a renderer-ready payload: shared labels plus one line per symbol.
///
/// - The labels of the first symbol in `ordered_symbols` that yields a line
///   become the shared X-axis.
/// - Later lines are aligned by position: point *i* is plotted at label *i*.
///   Lines longer than the axis are cut to its length; lines shorter than the
///   axis are skipped with `SkipReason::ShortHistory`. Calendars are not
///   reconciled across symbols.
/// - Symbols without data for `granularity` are listed in `skipped` and
///   contribute no line.
///
/// The function is pure: identical inputs always produce identical payloads.
///
/// # Errors
/// - Returns `ChartError::InvalidConfig` if `cfg` fails validation.
/// - Returns `ChartError::MalformedQuoteData` if any processed point fails to parse.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "quotechart_core::aggregate::build_chart_payload",
        skip(datasets, ordered_symbols, granularity, cfg),
        fields(granularity = %granularity, symbols = ordered_symbols.len()),
        err,
    )
)]
pub fn build_chart_payload_with(
    datasets: &BTreeMap<Symbol, SymbolDataset>,
    ordered_symbols: &[Symbol],
    granularity: Granularity,
    cfg: &AggregationConfig,
) -> Result<ChartPayload, ChartError> {
    let outcomes = build_series_outcomes(datasets, ordered_symbols, granularity, cfg)?;

    let mut payload = ChartPayload::default();
    let mut axis: Option<Vec<String>> = None;
    for (symbol, outcome) in outcomes {
        let mut series = match outcome {
            SeriesOutcome::Present(s) => s,
            SeriesOutcome::Skipped(reason) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(symbol = %symbol, ?reason, "symbol skipped");
                payload.skipped.push(SkippedSymbol { symbol, reason });
                continue;
            }
        };
        match &axis {
            None => {
                axis = Some(series.labels().map(str::to_string).collect());
            }
            Some(labels) => {
                if series.len() < labels.len() {
                    let reason = SkipReason::ShortHistory {
                        have: series.len(),
                        need: labels.len(),
                    };
                    #[cfg(feature = "tracing")]
                    tracing::debug!(symbol = %symbol, ?reason, "symbol skipped");
                    payload.skipped.push(SkippedSymbol { symbol, reason });
                    continue;
                }
                series.points.truncate(labels.len());
                for (point, label) in series.points.iter_mut().zip(labels) {
                    point.label.clone_from(label);
                }
            }
        }
        payload.series.push(series);
    }
    payload.labels = axis.unwrap_or_default();
    Ok(payload)
}
