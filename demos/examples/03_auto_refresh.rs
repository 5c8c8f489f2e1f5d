use std::sync::Arc;
use std::time::Duration;

use quotechart::{CacheConfig, ChartConfig, Dashboard, Symbol};
use quotechart_demos::common::get_source;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Cache responses for 30s so re-adding a symbol does not burn API quota.
    // Refresh ticks always go to the provider.
    let cfg = ChartConfig {
        cache: Some(CacheConfig {
            capacity: 64,
            ttl: Duration::from_secs(30),
        }),
        ..ChartConfig::default()
    };
    let dash = Arc::new(
        Dashboard::builder()
            .source(get_source()?)
            .config(cfg)
            .refresh_interval(Duration::from_millis(200))
            .build()?,
    );
    dash.search("MSFT").await?;
    dash.add_comparison("AAPL").await?;
    dash.remove_comparison(&Symbol::new("AAPL")?).await;
    dash.add_comparison("AAPL").await?;

    let handle = dash.start_auto_refresh();
    tokio::time::sleep(Duration::from_millis(700)).await;
    if !handle.stop_within(Duration::from_secs(5)).await {
        eprintln!("refresh task did not stop in time; aborted");
    }

    let summary = dash.refresh().await;
    println!(
        "refreshed {} symbol(s), {} failure(s)",
        summary.refreshed.len(),
        summary.failed.len()
    );
    Ok(())
}
