use std::sync::Arc;

use quotechart::{
    AggregationConfig, ChartConfig, ChartError, Dashboard, Granularity, Palette, QuoteSource,
    SkipReason, Symbol,
};
use quotechart_mock::MockSource;

fn sym(s: &str) -> Symbol {
    Symbol::new(s).unwrap()
}

fn dashboard(mock: &Arc<MockSource>) -> Dashboard {
    Dashboard::builder()
        .source(Arc::clone(mock) as Arc<dyn QuoteSource>)
        .build()
        .unwrap()
}

#[tokio::test]
async fn builder_requires_source() {
    let err = Dashboard::builder().build().err().unwrap();
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}

#[tokio::test]
async fn builder_rejects_invalid_config() {
    let mock: Arc<dyn QuoteSource> = Arc::new(MockSource::new());

    let mut cfg = ChartConfig::default();
    cfg.aggregation.daily_points = 0;
    let err = Dashboard::builder()
        .source(Arc::clone(&mock))
        .config(cfg)
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, ChartError::InvalidConfig(_)));

    let cfg = ChartConfig {
        aggregation: AggregationConfig {
            palette: Palette::new(vec![]),
            ..AggregationConfig::default()
        },
        ..ChartConfig::default()
    };
    let err = Dashboard::builder()
        .source(Arc::clone(&mock))
        .config(cfg)
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, ChartError::InvalidConfig(_)));

    let err = Dashboard::builder()
        .source(mock)
        .refresh_interval(std::time::Duration::ZERO)
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}

#[tokio::test]
async fn fresh_session_charts_nothing() {
    let mock = Arc::new(MockSource::new());
    let dash = dashboard(&mock);
    assert_eq!(dash.granularity().await, Granularity::Daily);
    assert!(dash.symbols().await.is_empty());
    let payload = dash.payload().await.unwrap();
    assert!(payload.is_empty());
    assert!(payload.labels.is_empty());
}

#[tokio::test]
async fn search_normalizes_and_charts_primary() {
    let mock = Arc::new(MockSource::new());
    let dash = dashboard(&mock);

    let got = dash.search("  aapl ").await.unwrap();
    assert_eq!(got, Some(sym("AAPL")));
    assert_eq!(dash.primary().await, Some(sym("AAPL")));

    let payload = dash.payload().await.unwrap();
    assert_eq!(payload.labels.len(), 30);
    assert_eq!(payload.series.len(), 1);
    assert_eq!(payload.series[0].label, "AAPL Closing Price");
    assert_eq!(payload.series[0].color.border(), "rgba(75,192,192,1)");
}

#[tokio::test]
async fn search_rejects_blank_input_without_fetching() {
    let mock = Arc::new(MockSource::new());
    let dash = dashboard(&mock);
    let err = dash.search("   ").await.unwrap_err();
    assert!(matches!(err, ChartError::InvalidSymbol(_)));
    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn failed_search_leaves_session_unchanged() {
    let mock = Arc::new(MockSource::new());
    let dash = dashboard(&mock);
    dash.search("AAPL").await.unwrap();

    let err = dash.search("NOPE").await.unwrap_err();
    assert!(matches!(err, ChartError::NotFound { .. }));
    assert_eq!(dash.symbols().await, vec![sym("AAPL")]);
    assert!(dash.dataset(&sym("AAPL")).await.is_some());
}

#[tokio::test]
async fn new_search_replaces_primary_and_keeps_comparisons() {
    let mock = Arc::new(MockSource::new());
    let dash = dashboard(&mock);
    dash.search("AAPL").await.unwrap();
    dash.add_comparison("MSFT").await.unwrap();

    dash.search("GOOG").await.unwrap();
    assert_eq!(dash.symbols().await, vec![sym("GOOG"), sym("MSFT")]);
    assert!(dash.dataset(&sym("AAPL")).await.is_none());
    assert!(dash.dataset(&sym("MSFT")).await.is_some());
}

#[tokio::test]
async fn searching_a_comparison_promotes_it() {
    let mock = Arc::new(MockSource::new());
    let dash = dashboard(&mock);
    dash.search("AAPL").await.unwrap();
    dash.add_comparison("MSFT").await.unwrap();
    dash.add_comparison("TSLA").await.unwrap();

    dash.search("msft").await.unwrap();
    assert_eq!(dash.symbols().await, vec![sym("MSFT"), sym("TSLA")]);
}

#[tokio::test]
async fn comparisons_are_deduplicated() {
    let mock = Arc::new(MockSource::new());
    let dash = dashboard(&mock);
    dash.search("AAPL").await.unwrap();
    let calls = mock.calls();

    assert!(dash.add_comparison("MSFT").await.unwrap());
    assert!(!dash.add_comparison("msft").await.unwrap());
    assert!(!dash.add_comparison("AAPL").await.unwrap());
    assert_eq!(dash.symbols().await, vec![sym("AAPL"), sym("MSFT")]);
    // one dataset fetch (daily + intraday) for MSFT only
    assert_eq!(mock.calls() - calls, 2);
}

#[tokio::test]
async fn failed_comparison_is_not_added() {
    let mock = Arc::new(MockSource::new());
    let dash = dashboard(&mock);
    dash.search("AAPL").await.unwrap();

    let err = dash.add_comparison("FAIL").await.unwrap_err();
    assert!(matches!(err, ChartError::Provider { .. }));
    assert_eq!(dash.symbols().await, vec![sym("AAPL")]);
}

#[tokio::test]
async fn remove_comparison_drops_line_and_dataset() {
    let mock = Arc::new(MockSource::new());
    let dash = dashboard(&mock);
    dash.search("AAPL").await.unwrap();
    dash.add_comparison("MSFT").await.unwrap();
    dash.add_comparison("GOOG").await.unwrap();

    assert!(dash.remove_comparison(&sym("MSFT")).await);
    assert!(!dash.remove_comparison(&sym("MSFT")).await);
    assert!(!dash.remove_comparison(&sym("AAPL")).await, "primary is not a comparison");
    assert!(dash.dataset(&sym("MSFT")).await.is_none());

    let payload = dash.payload().await.unwrap();
    let symbols: Vec<&str> = payload.series.iter().map(|s| s.symbol.as_str()).collect();
    assert_eq!(symbols, vec!["AAPL", "GOOG"]);
    // GOOG moved up to index 1 and takes the second palette color
    assert_eq!(payload.series[1].color.border(), "rgba(255,99,132,1)");
}

#[tokio::test]
async fn intraday_granularity_skips_symbols_without_intraday() {
    let mock = Arc::new(MockSource::new());
    let dash = dashboard(&mock);
    dash.search("AAPL").await.unwrap();
    dash.add_comparison("GOOG").await.unwrap();
    dash.set_granularity(Granularity::Intraday).await;

    let payload = dash.payload().await.unwrap();
    assert_eq!(payload.labels.len(), 78);
    assert_eq!(payload.series.len(), 1);
    assert_eq!(payload.skipped.len(), 1);
    assert_eq!(payload.skipped[0].symbol, sym("GOOG"));
    assert!(matches!(payload.skipped[0].reason, SkipReason::MissingSeries { .. }));
}

#[tokio::test]
async fn weekly_granularity_uses_daily_series() {
    let mock = Arc::new(MockSource::new());
    let dash = dashboard(&mock);
    dash.search("TSLA").await.unwrap();
    dash.set_granularity(Granularity::Weekly).await;

    let payload = dash.payload().await.unwrap();
    assert_eq!(payload.series[0].label, "TSLA Weekly Average");
    assert!(payload.labels.len() <= 12);
    assert_eq!(payload.labels.last().map(String::as_str), Some("6/28"));
}

#[tokio::test]
async fn intraday_fetch_can_be_disabled() {
    let mock = Arc::new(MockSource::new());
    let dash = Dashboard::builder()
        .source(Arc::clone(&mock) as Arc<dyn QuoteSource>)
        .fetch_intraday(false)
        .build()
        .unwrap();
    dash.search("AAPL").await.unwrap();
    assert_eq!(mock.intraday_calls(), 0);
    assert!(dash.dataset(&sym("AAPL")).await.unwrap().intraday.is_none());
}

#[tokio::test]
async fn malformed_data_fails_payload_not_session() {
    let mock = Arc::new(MockSource::new());
    let dash = dashboard(&mock);
    dash.search("AAPL").await.unwrap();
    dash.add_comparison("BAD").await.unwrap();

    let err = dash.payload().await.unwrap_err();
    assert!(matches!(err, ChartError::MalformedQuoteData { ref symbol, .. } if symbol == "BAD"));

    dash.remove_comparison(&sym("BAD")).await;
    assert!(dash.payload().await.is_ok());
}

#[tokio::test]
async fn renderer_payload_serializes() {
    let mock = Arc::new(MockSource::new());
    let dash = dashboard(&mock);
    dash.search("AAPL").await.unwrap();
    dash.add_comparison("MSFT").await.unwrap();

    let json = serde_json::to_value(dash.payload().await.unwrap().to_renderer()).unwrap();
    assert_eq!(json["labels"].as_array().map(Vec::len), Some(30));
    assert_eq!(json["datasets"][1]["label"], "MSFT Closing Price");
    assert_eq!(json["datasets"][1]["backgroundColor"], "rgba(255,99,132,0.2)");
}
