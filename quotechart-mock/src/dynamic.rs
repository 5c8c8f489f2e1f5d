use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use quotechart_core::{ChartError, QuoteSource, RawSeries, SeriesKind, Symbol};

/// Instruction for how a fetch should behave for a given symbol and series.
#[derive(Debug, Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(ChartError),
    /// Hang indefinitely (simulate a stalled request).
    Hang,
}

#[derive(Default)]
struct InternalState {
    rules: HashMap<(Symbol, SeriesKind), MockBehavior<RawSeries>>,
    requests: Vec<(Symbol, SeriesKind)>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for one series of a symbol.
    pub async fn set_behavior(
        &self,
        symbol: Symbol,
        kind: SeriesKind,
        behavior: MockBehavior<RawSeries>,
    ) {
        let mut guard = self.state.lock().await;
        guard.rules.insert((symbol, kind), behavior);
    }

    /// Shorthand for `set_behavior(symbol, SeriesKind::Daily, behavior)`.
    pub async fn set_daily(&self, symbol: Symbol, behavior: MockBehavior<RawSeries>) {
        self.set_behavior(symbol, SeriesKind::Daily, behavior).await;
    }

    /// Shorthand for `set_behavior(symbol, SeriesKind::Intraday, behavior)`.
    pub async fn set_intraday(&self, symbol: Symbol, behavior: MockBehavior<RawSeries>) {
        self.set_behavior(symbol, SeriesKind::Intraday, behavior)
            .await;
    }

    /// Return a copy of the request log, oldest first.
    pub async fn requests(&self) -> Vec<(Symbol, SeriesKind)> {
        self.state.lock().await.requests.clone()
    }

    /// Number of logged requests for one series of a symbol.
    pub async fn request_count(&self, symbol: &Symbol, kind: SeriesKind) -> usize {
        let guard = self.state.lock().await;
        guard
            .requests
            .iter()
            .filter(|(s, k)| s == symbol && *k == kind)
            .count()
    }

    /// Clear all configured behaviors and the request log.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.rules.clear();
        guard.requests.clear();
    }
}

/// A source that defers all behavior to an external controller.
///
/// Series without a configured behavior return `ChartError::Unsupported`.
pub struct DynamicMockSource {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockSource {
    /// Create a new dynamic mock source and its controller.
    #[must_use]
    pub fn new_with_controller(name: &'static str) -> (Arc<dyn QuoteSource>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn QuoteSource>, controller)
    }

    async fn respond(&self, symbol: &Symbol, kind: SeriesKind) -> Result<RawSeries, ChartError> {
        // Snapshot the behavior without holding the lock across await points
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.requests.push((symbol.clone(), kind));
            guard.rules.get(&(symbol.clone(), kind)).cloned()
        };

        match behavior {
            Some(MockBehavior::Return(series)) => Ok(series),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => std::future::pending().await,
            None => Err(ChartError::unsupported(kind.as_str())),
        }
    }
}

#[async_trait]
impl QuoteSource for DynamicMockSource {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn daily(&self, symbol: &Symbol) -> Result<RawSeries, ChartError> {
        self.respond(symbol, SeriesKind::Daily).await
    }

    async fn intraday(&self, symbol: &Symbol) -> Result<RawSeries, ChartError> {
        self.respond(symbol, SeriesKind::Intraday).await
    }
}
