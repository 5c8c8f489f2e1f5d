use std::time::Duration;

use quotechart_core::{ChartError, RawQuotePoint, RawSeries, SeriesKind, Symbol};
use quotechart_mock::{DynamicMockSource, MockBehavior};

fn series(closes: &[&str]) -> RawSeries {
    RawSeries::from_newest_first(
        closes
            .iter()
            .enumerate()
            .map(|(i, c)| RawQuotePoint::new(format!("2024-06-{:02}", 28 - i), *c))
            .collect(),
    )
}

#[tokio::test]
async fn returns_configured_series() {
    let (mock, controller) = DynamicMockSource::new_with_controller("P0");
    let sym = Symbol::new("AAPL").unwrap();
    let want = series(&["101.5", "100.0"]);
    controller
        .set_daily(sym.clone(), MockBehavior::Return(want.clone()))
        .await;

    assert_eq!(mock.name(), "P0");
    let got = mock.daily(&sym).await.expect("daily ok");
    assert_eq!(got, want);
}

#[tokio::test]
async fn fails_with_configured_error() {
    let (mock, controller) = DynamicMockSource::new_with_controller("P0");
    let sym = Symbol::new("MSFT").unwrap();
    let err = ChartError::rate_limited("P0", "slow down");
    controller
        .set_intraday(sym.clone(), MockBehavior::Fail(err.clone()))
        .await;

    let got = mock.intraday(&sym).await.expect_err("err");
    assert_eq!(got, err);
}

#[tokio::test]
async fn unconfigured_series_is_unsupported() {
    let (mock, _controller) = DynamicMockSource::new_with_controller("P0");
    let got = mock
        .series(&Symbol::new("GOOG").unwrap(), SeriesKind::Daily)
        .await
        .expect_err("err");
    assert!(matches!(got, ChartError::Unsupported { .. }));
}

#[tokio::test]
async fn hang_never_resolves() {
    let (mock, controller) = DynamicMockSource::new_with_controller("P0");
    let sym = Symbol::new("TSLA").unwrap();
    controller.set_daily(sym.clone(), MockBehavior::Hang).await;

    let res = tokio::time::timeout(Duration::from_millis(50), mock.daily(&sym)).await;
    assert!(res.is_err(), "hang should time out");
}

#[tokio::test]
async fn logs_requests_and_clears() {
    let (mock, controller) = DynamicMockSource::new_with_controller("P0");
    let sym = Symbol::new("AAPL").unwrap();
    controller
        .set_daily(sym.clone(), MockBehavior::Return(series(&["1"])))
        .await;

    let _ = mock.dataset(&sym, true).await;
    let _ = mock.daily(&sym).await;

    assert_eq!(controller.request_count(&sym, SeriesKind::Daily).await, 2);
    assert_eq!(controller.request_count(&sym, SeriesKind::Intraday).await, 1);
    assert_eq!(controller.requests().await.len(), 3);

    controller.clear_all_behaviors().await;
    assert!(controller.requests().await.is_empty());
    assert!(mock.daily(&sym).await.is_err());
}
