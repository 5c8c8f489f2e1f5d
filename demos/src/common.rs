use std::sync::Arc;

use quotechart::{ChartError, QuoteSource};

/// Return a quote source for demos.
///
/// Uses the mock source when `QUOTECHART_DEMOS_USE_MOCK` is set, otherwise
/// Alpha Vantage with the key from `ALPHAVANTAGE_API_KEY`.
///
/// # Errors
/// Returns `ChartError::InvalidConfig` if the live source is selected and no
/// API key is configured.
pub fn get_source() -> Result<Arc<dyn QuoteSource>, ChartError> {
    if std::env::var("QUOTECHART_DEMOS_USE_MOCK").is_ok() {
        println!("--- (Using Mock Source for CI) ---");
        Ok(Arc::new(quotechart_mock::MockSource::new()))
    } else {
        Ok(Arc::new(
            quotechart_alphavantage::AlphaVantageSource::from_env()?,
        ))
    }
}
