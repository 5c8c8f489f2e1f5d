use std::sync::Arc;

use quotechart_core::{
    ChartConfig, ChartError, ChartPayload, Granularity, QuoteSource, Symbol, SymbolDataset,
    build_chart_payload_with,
};
use quotechart_middleware::CachingSource;
use tokio::sync::RwLock;

use crate::state::SessionState;

/// Stock chart dashboard session.
///
/// Holds the quote source, the tracked symbols with their datasets, and the
/// selected granularity. All methods take `&self`; state sits behind a
/// `tokio::sync::RwLock` that is never held across a provider call.
pub struct Dashboard {
    pub(crate) source: Arc<dyn QuoteSource>,
    /// Same object as `source` when a cache is configured; refresh invalidates
    /// through it.
    pub(crate) cache: Option<Arc<CachingSource<dyn QuoteSource>>>,
    pub(crate) cfg: ChartConfig,
    pub(crate) state: RwLock<SessionState>,
}

/// Builder for constructing a [`Dashboard`] with custom configuration.
pub struct DashboardBuilder {
    source: Option<Arc<dyn QuoteSource>>,
    cfg: ChartConfig,
    granularity: Granularity,
}

impl Default for DashboardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardBuilder {
    /// Create a new builder with the default [`ChartConfig`] and no source.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            cfg: ChartConfig::default(),
            granularity: Granularity::default(),
        }
    }

    /// Set the quote source. Required.
    #[must_use]
    pub fn source(mut self, source: Arc<dyn QuoteSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: ChartConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Granularity selected when the session starts (default `Daily`).
    #[must_use]
    pub const fn granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    /// Period of [`Dashboard::start_auto_refresh`].
    #[must_use]
    pub const fn refresh_interval(mut self, every: std::time::Duration) -> Self {
        self.cfg.refresh_interval = every;
        self
    }

    /// Whether fetches also request the intraday series.
    #[must_use]
    pub const fn fetch_intraday(mut self, yes: bool) -> Self {
        self.cfg.fetch_intraday = yes;
        self
    }

    /// Build the dashboard.
    ///
    /// When `cache` is configured the source is wrapped in a [`CachingSource`].
    /// The cache serves repeated `search`/`add_comparison` fetches;
    /// [`Dashboard::refresh`] always goes to the provider.
    ///
    /// # Errors
    /// Returns `ChartError::InvalidConfig` if no source was set, a window size
    /// is zero, the palette is empty, or the refresh interval is zero.
    pub fn build(self) -> Result<Dashboard, ChartError> {
        let Some(source) = self.source else {
            return Err(ChartError::InvalidConfig(
                "no quote source; set one via source(...)".to_string(),
            ));
        };
        self.cfg.aggregation.validate()?;
        if self.cfg.refresh_interval.is_zero() {
            return Err(ChartError::InvalidConfig(
                "refresh_interval must be > 0".to_string(),
            ));
        }

        let (source, cache) = match &self.cfg.cache {
            Some(cfg) => {
                let cache = Arc::new(CachingSource::new(source, cfg));
                (Arc::clone(&cache) as Arc<dyn QuoteSource>, Some(cache))
            }
            None => (source, None),
        };
        Ok(Dashboard {
            source,
            cache,
            cfg: self.cfg,
            state: RwLock::new(SessionState {
                granularity: self.granularity,
                ..SessionState::default()
            }),
        })
    }
}

impl Dashboard {
    /// Start building a new `Dashboard`.
    #[must_use]
    pub fn builder() -> DashboardBuilder {
        DashboardBuilder::new()
    }

    /// Effective configuration.
    #[must_use]
    pub const fn config(&self) -> &ChartConfig {
        &self.cfg
    }

    /// Name of the underlying quote source.
    #[must_use]
    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    pub(crate) async fn fetch(&self, symbol: &Symbol) -> Result<SymbolDataset, ChartError> {
        self.source.dataset(symbol, self.cfg.fetch_intraday).await
    }

    /// Make `raw` the primary symbol.
    ///
    /// The input is trimmed and upper-cased. Its dataset is fetched and
    /// replaces the previous primary's; comparison symbols are kept. When the
    /// fetch fails the session is left unchanged.
    ///
    /// Returns `Ok(Some(symbol))` once the symbol is the primary. If a newer
    /// `search` started while this one was fetching, the fetched dataset is
    /// dropped and `Ok(None)` is returned, whether or not the newer search
    /// succeeded.
    ///
    /// # Errors
    /// - `ChartError::InvalidSymbol` for an empty or malformed ticker.
    /// - Any error of the source's daily fetch.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "quotechart::search", skip(self), err)
    )]
    pub async fn search(&self, raw: &str) -> Result<Option<Symbol>, ChartError> {
        let symbol = Symbol::new(raw)?;
        let ticket = {
            let mut st = self.state.write().await;
            st.search_epoch += 1;
            st.search_epoch
        };
        let dataset = self.fetch(&symbol).await?;

        let mut st = self.state.write().await;
        if st.search_epoch != ticket {
            #[cfg(feature = "tracing")]
            tracing::debug!(symbol = %symbol, "search superseded by a newer one");
            return Ok(None);
        }
        st.replace_primary(symbol.clone(), dataset);
        Ok(Some(symbol))
    }

    /// Fetch `raw` and overlay it as a comparison line.
    ///
    /// Returns `Ok(false)` without fetching if the symbol is already the
    /// primary or a comparison.
    ///
    /// # Errors
    /// - `ChartError::InvalidSymbol` for an empty or malformed ticker.
    /// - Any error of the source's daily fetch; nothing is added then.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "quotechart::add_comparison", skip(self), err)
    )]
    pub async fn add_comparison(&self, raw: &str) -> Result<bool, ChartError> {
        let symbol = Symbol::new(raw)?;
        if self.state.read().await.is_tracked(&symbol) {
            return Ok(false);
        }
        let dataset = self.fetch(&symbol).await?;
        Ok(self.state.write().await.push_comparison(symbol, dataset))
    }

    /// Drop a comparison symbol and its dataset. Returns `false` if it was not
    /// a comparison.
    pub async fn remove_comparison(&self, symbol: &Symbol) -> bool {
        self.state.write().await.remove_comparison(symbol)
    }

    /// Select the granularity used by [`payload`](Self::payload).
    pub async fn set_granularity(&self, granularity: Granularity) {
        self.state.write().await.granularity = granularity;
    }

    /// Currently selected granularity.
    pub async fn granularity(&self) -> Granularity {
        self.state.read().await.granularity
    }

    /// Primary symbol, if one was searched.
    pub async fn primary(&self) -> Option<Symbol> {
        self.state.read().await.primary.clone()
    }

    /// Tracked symbols: the primary first, then comparisons in insertion order.
    pub async fn symbols(&self) -> Vec<Symbol> {
        self.state.read().await.ordered_symbols()
    }

    /// Copy of the stored dataset for `symbol`.
    pub async fn dataset(&self, symbol: &Symbol) -> Option<SymbolDataset> {
        self.state.read().await.datasets.get(symbol).cloned()
    }

    /// Build the chart for the current symbols and granularity.
    ///
    /// # Errors
    /// Returns `ChartError::MalformedQuoteData` if a stored series has an
    /// unparsable point inside the charted window.
    pub async fn payload(&self) -> Result<ChartPayload, ChartError> {
        let st = self.state.read().await;
        build_chart_payload_with(
            &st.datasets,
            &st.ordered_symbols(),
            st.granularity,
            &self.cfg.aggregation,
        )
    }
}
