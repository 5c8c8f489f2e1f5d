mod common;

use std::collections::BTreeMap;

use common::{daily_newest_first, intraday_newest_first, sym};
use proptest::prelude::*;
use quotechart_core::{Granularity, Symbol, SymbolDataset, build_chart_payload};

const NAMES: [&str; 5] = ["AAPL", "MSFT", "GOOG", "TSLA", "AMZN"];

fn arb_closes(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    proptest::collection::vec(1i64..100_000i64, 0..max_len)
}

fn arb_dataset() -> impl Strategy<Value = SymbolDataset> {
    (
        prop::option::of(arb_closes(120)),
        prop::option::of(arb_closes(100)),
    )
        .prop_map(|(daily, intraday)| {
            SymbolDataset::new(
                daily.map(|c| daily_newest_first(&c)),
                intraday.map(|c| intraday_newest_first(&c)),
            )
        })
}

fn arb_store() -> impl Strategy<Value = BTreeMap<Symbol, SymbolDataset>> {
    proptest::collection::vec(prop::option::of(arb_dataset()), NAMES.len()).prop_map(|ds| {
        NAMES
            .iter()
            .zip(ds)
            .filter_map(|(n, d)| d.map(|d| (sym(n), d)))
            .collect()
    })
}

fn arb_order() -> impl Strategy<Value = Vec<Symbol>> {
    prop::sample::subsequence(NAMES.to_vec(), 0..=NAMES.len())
        .prop_shuffle()
        .prop_map(|names| names.into_iter().map(sym).collect())
}

fn arb_granularity() -> impl Strategy<Value = Granularity> {
    prop::sample::select(Granularity::ALL.to_vec())
}

proptest! {
    #[test]
    fn every_series_matches_the_axis(
        datasets in arb_store(),
        order in arb_order(),
        g in arb_granularity(),
    ) {
        let payload = build_chart_payload(&datasets, &order, g).unwrap();
        for s in &payload.series {
            prop_assert_eq!(s.len(), payload.labels.len());
        }
        prop_assert_eq!(payload.series.len() + payload.skipped.len(), order.len());
        prop_assert_eq!(payload.labels.is_empty(), payload.series.is_empty());
    }

    #[test]
    fn daily_axis_never_exceeds_thirty(
        datasets in arb_store(),
        order in arb_order(),
    ) {
        let payload = build_chart_payload(&datasets, &order, Granularity::Daily).unwrap();
        prop_assert!(payload.labels.len() <= 30);
    }

    #[test]
    fn window_bounds_hold_per_granularity(
        datasets in arb_store(),
        order in arb_order(),
    ) {
        let intraday = build_chart_payload(&datasets, &order, Granularity::Intraday).unwrap();
        prop_assert!(intraday.labels.len() <= 78);
        let weekly = build_chart_payload(&datasets, &order, Granularity::Weekly).unwrap();
        prop_assert!(weekly.labels.len() <= 12);
    }

    #[test]
    fn series_follow_symbol_order(
        datasets in arb_store(),
        order in arb_order(),
        g in arb_granularity(),
    ) {
        let payload = build_chart_payload(&datasets, &order, g).unwrap();
        let positions: Vec<usize> = payload
            .series
            .iter()
            .map(|s| order.iter().position(|o| o == &s.symbol).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn build_is_idempotent(
        datasets in arb_store(),
        order in arb_order(),
        g in arb_granularity(),
    ) {
        let once = build_chart_payload(&datasets, &order, g).unwrap();
        let twice = build_chart_payload(&datasets, &order, g).unwrap();
        prop_assert_eq!(once, twice);
    }
}
