use quotechart::{Dashboard, Granularity};
use quotechart_demos::common::get_source;
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,quotechart=trace,quotechart_alphavantage=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let dash = Dashboard::builder().source(get_source()?).build()?;

    dash.search("AAPL").await?;
    // Unknown tickers fail the call and leave the session as it was.
    let _ = dash.add_comparison("NOPE").await;
    dash.add_comparison("MSFT").await?;

    for granularity in Granularity::ALL {
        dash.set_granularity(granularity).await;
        let _ = dash.payload().await?;
    }

    let _ = dash.refresh().await;
    Ok(())
}
