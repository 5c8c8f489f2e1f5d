use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the quotechart workspace.
///
/// Covers malformed provider payloads, symbol validation, provider-tagged
/// failures, rate limiting, and configuration problems.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChartError {
    /// A provider payload could not be parsed into numeric prices or dates.
    #[error("malformed quote data for {symbol}: {detail}")]
    MalformedQuoteData {
        /// Symbol whose payload failed to parse.
        symbol: String,
        /// Human-readable description of the offending value.
        detail: String,
    },

    /// User input could not be turned into a ticker symbol.
    #[error("invalid symbol: {0:?}")]
    InvalidSymbol(String),

    /// The provider does not know the requested symbol.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "daily series for AAPL".
        what: String,
    },

    /// The provider refused the call because of its request budget.
    #[error("{provider} rate limited: {msg}")]
    RateLimited {
        /// Provider name that applied the limit.
        provider: String,
        /// Message returned by the provider.
        msg: String,
    },

    /// An individual provider returned an error.
    #[error("{provider} failed: {msg}")]
    Provider {
        /// Provider name that failed.
        provider: String,
        /// Human-readable error message.
        msg: String,
    },

    /// The requested series kind is not offered by the provider.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// Capability label, e.g. "intraday".
        capability: String,
    },

    /// Configuration rejected while building a session or source.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl ChartError {
    /// Helper: build a `MalformedQuoteData` error.
    pub fn malformed(symbol: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::MalformedQuoteData {
            symbol: symbol.into(),
            detail: detail.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `Provider` error with the provider name and message.
    pub fn provider(provider: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `RateLimited` error.
    pub fn rate_limited(provider: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::RateLimited {
            provider: provider.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build an `Unsupported` error for a capability label.
    #[must_use]
    pub fn unsupported(capability: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: capability.into(),
        }
    }

    /// Returns true if this error should be surfaced to users as actionable.
    ///
    /// Capability absence and benign not-found conditions are not actionable;
    /// they lead to a symbol being left out of the chart.
    #[must_use]
    pub const fn is_actionable(&self) -> bool {
        !matches!(self, Self::Unsupported { .. } | Self::NotFound { .. })
    }
}
