//! Money calculation utilities using rust_decimal for precision
//!
//! All monetary arithmetic runs on `Decimal` and is converted back to `f64`
//! only at the storage/serialization boundary, rounded half-up to cents.
//! Accumulating in `f64` would drift (0.1 + 0.2 != 0.3) and misround the
//! `.005` boundary.

use rust_decimal::prelude::*;

/// Monetary values carry 2 decimal places
const DECIMAL_PLACES: u32 = 2;

/// Convert an f64 price/quantity to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded half-up to cents
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Normalize a currency amount to 2 decimal places
#[inline]
pub fn round_to_cents(value: f64) -> f64 {
    to_f64(to_decimal(value))
}

/// Line total: unit price × quantity, rounded half-up to cents
///
/// The `.005` boundary rounds away from zero: 9.995 × 3 = 29.985 → 29.99.
pub fn line_total(unit_price: f64, quantity: f64) -> f64 {
    to_f64(to_decimal(unit_price) * to_decimal(quantity))
}

/// Sum of already-rounded line totals
pub fn sum_totals<I>(totals: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    to_f64(totals.into_iter().map(to_decimal).sum::<Decimal>())
}
