use std::sync::Arc;

use async_trait::async_trait;
use moka::future::Cache;
use quotechart_core::{CacheConfig, ChartError, QuoteSource, RawSeries, SeriesKind, Symbol};

type SeriesKey = (Symbol, SeriesKind);

/// Source wrapper that memoizes successful series fetches.
///
/// Entries are keyed by symbol and series kind, bounded by
/// `CacheConfig::capacity` and expire `CacheConfig::ttl` after insertion.
/// Errors are never cached. A zero capacity or TTL disables the store and
/// every call goes to the inner source.
pub struct CachingSource<S: ?Sized> {
    inner: Arc<S>,
    store: Option<Cache<SeriesKey, Arc<RawSeries>>>,
}

impl<S> CachingSource<S>
where
    S: QuoteSource + ?Sized,
{
    /// Wrap `inner` with a store sized and timed by `cfg`.
    #[must_use]
    pub fn new(inner: Arc<S>, cfg: &CacheConfig) -> Self {
        let store = (cfg.capacity > 0 && !cfg.ttl.is_zero()).then(|| {
            Cache::builder()
                .max_capacity(cfg.capacity)
                .time_to_live(cfg.ttl)
                .build()
        });
        Self { inner, store }
    }

    /// The wrapped source.
    #[must_use]
    pub fn inner(&self) -> &Arc<S> {
        &self.inner
    }

    /// Drop every cached series.
    pub fn invalidate_all(&self) {
        if let Some(store) = &self.store {
            store.invalidate_all();
        }
    }

    /// Drop the cached series of one symbol.
    pub async fn invalidate(&self, symbol: &Symbol) {
        if let Some(store) = &self.store {
            for kind in [SeriesKind::Daily, SeriesKind::Intraday] {
                store.invalidate(&(symbol.clone(), kind)).await;
            }
        }
    }

    async fn cached(&self, symbol: &Symbol, kind: SeriesKind) -> Result<RawSeries, ChartError> {
        let Some(store) = &self.store else {
            return self.inner.series(symbol, kind).await;
        };
        let key = (symbol.clone(), kind);
        if let Some(hit) = store.get(&key).await {
            #[cfg(feature = "tracing")]
            tracing::trace!(provider = self.inner.name(), symbol = %symbol, %kind, "cache hit");
            return Ok(hit.as_ref().clone());
        }
        let fresh = self.inner.series(symbol, kind).await?;
        store.insert(key, Arc::new(fresh.clone())).await;
        Ok(fresh)
    }
}

#[async_trait]
impl<S> QuoteSource for CachingSource<S>
where
    S: QuoteSource + ?Sized,
{
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    async fn daily(&self, symbol: &Symbol) -> Result<RawSeries, ChartError> {
        self.cached(symbol, SeriesKind::Daily).await
    }

    async fn intraday(&self, symbol: &Symbol) -> Result<RawSeries, ChartError> {
        self.cached(symbol, SeriesKind::Intraday).await
    }
}
