use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ChartError;

/// Stock ticker identifier, e.g. `AAPL`.
///
/// Input is trimmed and upper-cased; empty input and input containing
/// whitespace are rejected.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Parse user input into a symbol.
    ///
    /// # Errors
    /// Returns `ChartError::InvalidSymbol` if the trimmed input is empty or
    /// contains whitespace or control characters.
    pub fn new(raw: &str) -> Result<Self, ChartError> {
        let trimmed = raw.trim();
        if trimmed.is_empty()
            || trimmed
                .chars()
                .any(|c| c.is_whitespace() || c.is_control())
        {
            return Err(ChartError::InvalidSymbol(raw.to_string()));
        }
        Ok(Self(trimmed.to_uppercase()))
    }

    /// Borrow the canonical (upper-case) ticker.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Symbol {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Symbol {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
