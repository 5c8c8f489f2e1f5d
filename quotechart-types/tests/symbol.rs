use quotechart_types::{ChartError, Symbol};

#[test]
fn input_is_trimmed_and_uppercased() {
    let s = Symbol::new("  aapl ").expect("valid symbol");
    assert_eq!(s.as_str(), "AAPL");
    assert_eq!(s.to_string(), "AAPL");
}

#[test]
fn dotted_and_dashed_tickers_are_kept() {
    assert_eq!(Symbol::new("brk.b").expect("valid").as_str(), "BRK.B");
    assert_eq!(Symbol::new("btc-usd").expect("valid").as_str(), "BTC-USD");
}

#[test]
fn empty_or_spaced_input_is_rejected() {
    for raw in ["", "   ", "AA PL", "A\tB"] {
        assert!(
            matches!(Symbol::new(raw), Err(ChartError::InvalidSymbol(_))),
            "{raw:?} should be rejected"
        );
    }
}

#[test]
fn serde_validates_on_deserialize() {
    let s: Symbol = serde_json::from_str("\"msft\"").expect("deserialize");
    assert_eq!(s.as_str(), "MSFT");
    assert_eq!(serde_json::to_string(&s).expect("serialize"), "\"MSFT\"");
    assert!(serde_json::from_str::<Symbol>("\"\"").is_err());
}

#[test]
fn not_found_and_unsupported_are_not_actionable() {
    assert!(!ChartError::not_found("daily series for ZZZZ").is_actionable());
    assert!(!ChartError::unsupported("intraday").is_actionable());
    assert!(ChartError::malformed("AAPL", "close \"n/a\"").is_actionable());
    assert!(ChartError::rate_limited("alphavantage", "slow down").is_actionable());
}

#[test]
fn malformed_message_names_the_symbol() {
    let e = ChartError::malformed("TSLA", "close \"abc\" at 2024-01-05");
    assert!(e.to_string().contains("TSLA"));
}
