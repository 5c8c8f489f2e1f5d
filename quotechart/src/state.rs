use std::collections::BTreeMap;

use quotechart_core::{Granularity, Symbol, SymbolDataset};

/// Everything the dashboard tracks between user actions.
#[derive(Debug, Default)]
pub(crate) struct SessionState {
    pub(crate) primary: Option<Symbol>,
    pub(crate) comparisons: Vec<Symbol>,
    pub(crate) datasets: BTreeMap<Symbol, SymbolDataset>,
    pub(crate) granularity: Granularity,
    /// Bumped by every `search`; a fetch that finishes after a newer search
    /// started is discarded.
    pub(crate) search_epoch: u64,
    /// Generation of each stored dataset. A refresh only lands on the
    /// generation it started from.
    pub(crate) generations: BTreeMap<Symbol, u64>,
    pub(crate) next_generation: u64,
}

impl SessionState {
    /// Primary symbol first, then comparisons in insertion order.
    pub(crate) fn ordered_symbols(&self) -> Vec<Symbol> {
        self.primary
            .iter()
            .chain(self.comparisons.iter())
            .cloned()
            .collect()
    }

    /// Tracked symbols paired with the generation of their stored dataset.
    pub(crate) fn refresh_targets(&self) -> Vec<(Symbol, u64)> {
        self.ordered_symbols()
            .into_iter()
            .filter_map(|s| self.generations.get(&s).copied().map(|g| (s, g)))
            .collect()
    }

    pub(crate) fn is_tracked(&self, symbol: &Symbol) -> bool {
        self.primary.as_ref() == Some(symbol) || self.comparisons.contains(symbol)
    }

    fn store(&mut self, symbol: Symbol, dataset: SymbolDataset) {
        self.next_generation += 1;
        self.generations.insert(symbol.clone(), self.next_generation);
        self.datasets.insert(symbol, dataset);
    }

    fn forget(&mut self, symbol: &Symbol) {
        self.datasets.remove(symbol);
        self.generations.remove(symbol);
    }

    /// Install `symbol` as the primary symbol with its freshly fetched dataset.
    ///
    /// The previous primary's dataset is dropped; a comparison equal to the
    /// new primary is folded into it.
    pub(crate) fn replace_primary(&mut self, symbol: Symbol, dataset: SymbolDataset) {
        if let Some(old) = self.primary.take()
            && old != symbol
        {
            self.forget(&old);
        }
        self.comparisons.retain(|s| s != &symbol);
        self.store(symbol.clone(), dataset);
        self.primary = Some(symbol);
    }

    /// Append a comparison symbol. Returns `false` if it was already tracked.
    pub(crate) fn push_comparison(&mut self, symbol: Symbol, dataset: SymbolDataset) -> bool {
        if self.is_tracked(&symbol) {
            return false;
        }
        self.store(symbol.clone(), dataset);
        self.comparisons.push(symbol);
        true
    }

    /// Drop a comparison symbol and its dataset. The primary is never removed here.
    pub(crate) fn remove_comparison(&mut self, symbol: &Symbol) -> bool {
        let before = self.comparisons.len();
        self.comparisons.retain(|s| s != symbol);
        if self.comparisons.len() == before {
            return false;
        }
        self.forget(symbol);
        true
    }

    /// Store a refreshed dataset fetched while `generation` was current.
    ///
    /// Returns `false` and drops `fresh` if the symbol is no longer tracked or
    /// its dataset was stored again since. An intraday series that could not
    /// be refreshed keeps its previous value.
    pub(crate) fn apply_refresh(
        &mut self,
        symbol: &Symbol,
        generation: u64,
        mut fresh: SymbolDataset,
    ) -> bool {
        if !self.is_tracked(symbol) || self.generations.get(symbol) != Some(&generation) {
            return false;
        }
        if fresh.intraday.is_none()
            && let Some(prev) = self.datasets.get_mut(symbol)
        {
            fresh.intraday = prev.intraday.take();
        }
        self.store(symbol.clone(), fresh);
        true
    }
}
