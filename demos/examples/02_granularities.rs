use quotechart::{Dashboard, Granularity};
use quotechart_demos::common::get_source;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dash = Dashboard::builder().source(get_source()?).build()?;
    dash.search("AAPL").await?;
    dash.add_comparison("GOOG").await?;
    dash.add_comparison("TSLA").await?;

    for granularity in Granularity::ALL {
        dash.set_granularity(granularity).await;
        let payload = dash.payload().await?;

        println!("\n## {granularity}");
        println!(
            "{} labels ({} .. {})",
            payload.labels.len(),
            payload.labels.first().map_or("-", String::as_str),
            payload.labels.last().map_or("-", String::as_str),
        );
        for series in &payload.series {
            let last = series.values().last().unwrap_or_default();
            println!("{:<28} last {:>10.2}  {}", series.label, last, series.color.border());
        }
        for skipped in &payload.skipped {
            println!("{:<28} skipped: {:?}", skipped.symbol.as_str(), skipped.reason);
        }
    }
    Ok(())
}
