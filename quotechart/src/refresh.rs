use std::sync::{Arc, Weak};

use futures::future::join_all;
use quotechart_core::{ChartError, RefreshHandle, Symbol};
use tokio::sync::oneshot;
use tokio::time::{Instant, MissedTickBehavior};

use crate::core::Dashboard;

/// Outcome of one refresh pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RefreshSummary {
    /// Symbols whose dataset was replaced, in symbol order.
    pub refreshed: Vec<Symbol>,
    /// Symbols whose fetch failed; their previous dataset is kept.
    pub failed: Vec<(Symbol, ChartError)>,
    /// Symbols whose fetched data was dropped because the symbol was removed,
    /// or its dataset stored again, while the fetch was in flight.
    pub superseded: Vec<Symbol>,
}

impl RefreshSummary {
    /// True if no fetch failed.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

impl Dashboard {
    /// Re-fetch every tracked symbol concurrently.
    ///
    /// Refresh always reaches the provider: cached series of the tracked
    /// symbols are invalidated first. A failed fetch keeps the previous
    /// dataset. A result is dropped when its symbol was removed, re-searched
    /// or re-added while the fetch was in flight, so a slow refresh never
    /// overwrites newer data.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "quotechart::refresh", skip(self))
    )]
    pub async fn refresh(&self) -> RefreshSummary {
        let targets = self.state.read().await.refresh_targets();
        if let Some(cache) = &self.cache {
            for (symbol, _) in &targets {
                cache.invalidate(symbol).await;
            }
        }
        let results = join_all(targets.iter().map(|(s, _)| self.fetch(s))).await;

        let mut summary = RefreshSummary::default();
        let mut st = self.state.write().await;
        for ((symbol, generation), result) in targets.into_iter().zip(results) {
            match result {
                Ok(dataset) => {
                    if st.apply_refresh(&symbol, generation, dataset) {
                        summary.refreshed.push(symbol);
                    } else {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(symbol = %symbol, "refresh result superseded");
                        summary.superseded.push(symbol);
                    }
                }
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(symbol = %symbol, error = %e, "refresh failed; keeping previous dataset");
                    summary.failed.push((symbol, e));
                }
            }
        }
        summary
    }

    /// Spawn a task that calls [`refresh`](Self::refresh) every
    /// `refresh_interval`, the first time after one full period.
    ///
    /// The task holds only a weak reference and exits once the dashboard is
    /// dropped. The stop signal is honoured while a refresh is in flight too;
    /// the pending fetches are cancelled and nothing is stored. Stop it with
    /// [`RefreshHandle::stop`]; dropping the handle aborts it.
    #[must_use]
    pub fn start_auto_refresh(self: &Arc<Self>) -> RefreshHandle {
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
        let weak: Weak<Self> = Arc::downgrade(self);
        let period = self.cfg.refresh_interval;

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    biased;
                    _ = &mut stop_rx => break,
                    _ = ticker.tick() => {
                        let Some(dash) = weak.upgrade() else { break };
                        tokio::select! {
                            biased;
                            _ = &mut stop_rx => break,
                            _summary = dash.refresh() => {
                                #[cfg(feature = "tracing")]
                                tracing::debug!(
                                    refreshed = _summary.refreshed.len(),
                                    failed = _summary.failed.len(),
                                    "auto refresh tick"
                                );
                            }
                        }
                    }
                }
            }
        });
        RefreshHandle::new(task, stop_tx)
    }
}
