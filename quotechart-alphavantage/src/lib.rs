//! quotechart-alphavantage
//!
//! [`QuoteSource`] backed by the Alpha Vantage `TIME_SERIES_DAILY` and
//! `TIME_SERIES_INTRADAY` endpoints. One request per call and no retries.
#![warn(missing_docs)]

/// Response decoding.
pub mod wire;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};

use quotechart_core::{ChartError, QuoteSource, RawSeries, SeriesKind, Symbol};

pub(crate) const NAME: &str = "quotechart-alphavantage";

/// Production endpoint root.
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co";

/// Environment variable read by [`AlphaVantageSource::from_env`].
pub const API_KEY_ENV: &str = "ALPHAVANTAGE_API_KEY";

/// Alpha Vantage quote source.
pub struct AlphaVantageSource {
    client: Client,
    api_key: SecretString,
    base_url: String,
}

impl AlphaVantageSource {
    /// Build against the production endpoint with a default HTTP client.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_client(Client::new(), api_key)
    }

    /// Build from a caller-provided `reqwest::Client`.
    #[must_use]
    pub fn with_client(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: SecretString::new(api_key.into().into_boxed_str()),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Build with the key from `ALPHAVANTAGE_API_KEY`.
    ///
    /// # Errors
    /// Returns `ChartError::InvalidConfig` if the variable is unset or empty.
    pub fn from_env() -> Result<Self, ChartError> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key.trim())),
            _ => Err(ChartError::InvalidConfig(format!("{API_KEY_ENV} is not set"))),
        }
    }

    /// Point the source at another endpoint root (used by tests).
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    fn query_params<'a>(&'a self, symbol: &'a Symbol, kind: SeriesKind) -> Vec<(&'a str, &'a str)> {
        let mut params = vec![("symbol", symbol.as_str()), ("outputsize", "compact")];
        match kind {
            SeriesKind::Daily => params.push(("function", "TIME_SERIES_DAILY")),
            SeriesKind::Intraday => {
                params.push(("function", "TIME_SERIES_INTRADAY"));
                params.push(("interval", "5min"));
            }
        }
        params.push(("apikey", self.api_key.expose_secret()));
        params
    }

    async fn fetch(&self, symbol: &Symbol, kind: SeriesKind) -> Result<RawSeries, ChartError> {
        let url = format!("{}/query", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&self.query_params(symbol, kind))
            .send()
            .await
            // Drop the URL: it carries the API key.
            .map_err(|e| ChartError::provider(NAME, format!("request failed: {}", e.without_url())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChartError::provider(NAME, format!("HTTP {status}")));
        }
        let body = response
            .bytes()
            .await
            .map_err(|e| ChartError::provider(NAME, format!("reading body: {}", e.without_url())))?;
        wire::parse_time_series(symbol, kind, &body)
    }
}

impl std::fmt::Debug for AlphaVantageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlphaVantageSource")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl QuoteSource for AlphaVantageSource {
    fn name(&self) -> &'static str {
        NAME
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "quotechart_alphavantage::daily",
            skip(self, symbol),
            fields(symbol = %symbol),
            err,
        )
    )]
    async fn daily(&self, symbol: &Symbol) -> Result<RawSeries, ChartError> {
        self.fetch(symbol, SeriesKind::Daily).await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "quotechart_alphavantage::intraday",
            skip(self, symbol),
            fields(symbol = %symbol),
            err,
        )
    )]
    async fn intraday(&self, symbol: &Symbol) -> Result<RawSeries, ChartError> {
        self.fetch(symbol, SeriesKind::Intraday).await
    }
}
