//! Currency scale and rounding
//!
//! Amounts are fixed-point decimals. The settlement currency has three decimal
//! subunits (millimes), so every value that leaves the engine is rounded to that
//! scale and any balance within one millime of zero counts as settled.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places of the settlement currency
pub const CURRENCY_SCALE: u32 = 3;

/// Balances closer to zero than this are treated as settled (one millime)
pub const SETTLEMENT_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, CURRENCY_SCALE);

/// Round an amount to the currency scale
///
/// Midpoints round away from zero. A value that rounds to zero is returned as
/// a positive zero so it never renders as `-0`.
pub fn round_millimes(value: Decimal) -> Decimal {
    let rounded =
        value.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        Decimal::ZERO
    } else {
        rounded
    }
}
