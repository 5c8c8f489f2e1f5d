#![allow(dead_code)]

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use quotechart_core::{RawQuotePoint, RawSeries, Symbol, SymbolDataset};

pub fn sym(s: &str) -> Symbol {
    Symbol::new(s).unwrap()
}

fn anchor_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 28).unwrap()
}

/// Daily series newest first: point `i` is dated `anchor - i days`.
pub fn daily_newest_first(closes: &[i64]) -> RawSeries {
    let points = closes
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let day = anchor_day() - Duration::days(i as i64);
            RawQuotePoint::new(day.format("%Y-%m-%d").to_string(), c.to_string())
        })
        .collect();
    RawSeries::from_newest_first(points)
}

/// Intraday series newest first: point `i` is `16:00 - 5*i minutes`.
pub fn intraday_newest_first(closes: &[i64]) -> RawSeries {
    let close_bell: NaiveDateTime = anchor_day().and_hms_opt(16, 0, 0).unwrap();
    let points = closes
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let ts = close_bell - Duration::minutes(5 * i as i64);
            RawQuotePoint::new(ts.format("%Y-%m-%d %H:%M:%S").to_string(), c.to_string())
        })
        .collect();
    RawSeries::from_newest_first(points)
}

pub fn ramp(len: usize, start: i64) -> Vec<i64> {
    (0..len as i64).map(|i| start + i).collect()
}

pub fn store(entries: Vec<(&str, SymbolDataset)>) -> BTreeMap<Symbol, SymbolDataset> {
    entries.into_iter().map(|(s, d)| (sym(s), d)).collect()
}

pub fn daily_only(series: RawSeries) -> SymbolDataset {
    SymbolDataset::new(Some(series), None)
}
