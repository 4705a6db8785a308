//! Currency helpers.
//!
//! All amounts are exact decimals. Rounding happens only when a value is handed to
//! a presentation layer, never while accumulating.

use rust_decimal::{Decimal, RoundingStrategy};

pub type Amount = Decimal;

/// Decimal places shown for currency values.
pub const CURRENCY_SCALE: u32 = 2;

/// Round to cents, halves away from zero.
pub fn round_currency(amount: Amount) -> Amount {
    amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Render an amount with its currency symbol and exactly two decimals, e.g. `R$ 57.80`.
pub fn format_amount(symbol: &str, amount: Amount) -> String {
    let mut rounded = round_currency(amount);
    rounded.rescale(CURRENCY_SCALE);
    format!("{} {}", symbol, rounded)
}
