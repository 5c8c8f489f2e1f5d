use quotechart::Dashboard;
use quotechart_demos::common::get_source;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dash = Dashboard::builder().source(get_source()?).build()?;

    dash.search("aapl").await?;
    dash.add_comparison("MSFT").await?;

    // The widget consumes exactly this JSON.
    let chart = dash.payload().await?.to_renderer();
    println!("{}", serde_json::to_string_pretty(&chart)?);
    Ok(())
}
