use async_trait::async_trait;

use crate::{ChartError, RawSeries, SeriesKind, Symbol, SymbolDataset};

/// Role trait for connectors that deliver raw close series for a symbol.
///
/// Implementations return series in provider order (newest first). They do
/// not retry; transport failures surface as `ChartError::Provider`.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Stable provider name used in errors and logs.
    fn name(&self) -> &'static str;

    /// Fetch recent daily closes.
    async fn daily(&self, symbol: &Symbol) -> Result<RawSeries, ChartError>;

    /// Fetch the most recent trading day of 5-minute closes.
    ///
    /// Default returns `unsupported` for providers without intraday data.
    async fn intraday(&self, _symbol: &Symbol) -> Result<RawSeries, ChartError> {
        Err(ChartError::unsupported(SeriesKind::Intraday.as_str()))
    }

    /// Fetch one series by kind.
    async fn series(&self, symbol: &Symbol, kind: SeriesKind) -> Result<RawSeries, ChartError> {
        match kind {
            SeriesKind::Daily => self.daily(symbol).await,
            SeriesKind::Intraday => self.intraday(symbol).await,
        }
    }

    /// Fetch the dataset stored for a symbol.
    ///
    /// The daily series is required and its error is returned as-is. When
    /// `with_intraday` is set the intraday series is fetched concurrently; any
    /// intraday failure leaves `intraday` empty instead of failing the dataset.
    async fn dataset(
        &self,
        symbol: &Symbol,
        with_intraday: bool,
    ) -> Result<SymbolDataset, ChartError> {
        if !with_intraday {
            return Ok(SymbolDataset::new(Some(self.daily(symbol).await?), None));
        }
        let (daily, intraday) = tokio::join!(self.daily(symbol), self.intraday(symbol));
        let intraday = match intraday {
            Ok(series) => Some(series),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::info!(
                    provider = self.name(),
                    symbol = %symbol,
                    error = %_e,
                    "intraday series unavailable"
                );
                None
            }
        };
        Ok(SymbolDataset::new(Some(daily?), intraday))
    }
}
