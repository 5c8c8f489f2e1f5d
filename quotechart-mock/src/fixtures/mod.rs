pub mod daily;
pub mod intraday;

use rust_decimal::Decimal;

/// Provider-style close string (`"185.6400"`) for `cents` plus a bounded,
/// deterministic wobble keyed by the point index.
pub fn close_at(base_cents: i64, index: usize) -> String {
    let i = i64::try_from(index).unwrap_or(0);
    let wobble = (i * 37).rem_euclid(17) * 25 - 200;
    let drift = i * 15;
    format!("{:.4}", Decimal::new(base_cents - drift + wobble, 2))
}
