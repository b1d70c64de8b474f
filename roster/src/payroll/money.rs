//! Decimal conversions for pay arithmetic
//!
//! Amounts are stored and serialized as `f64`. Sums are computed in
//! `Decimal` so that entered values like `0.1` and `0.2` add up exactly.
//! Entered values are never rounded.
//!
//! `Decimal` tops out around 7.9e28. When an amount or a running total
//! leaves that range the sum is done in plain `f64` instead.

use rust_decimal::prelude::*;

/// Non-finite amounts count as zero
#[inline]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        tracing::warn!(value = ?value, "Non-finite amount in pay calculation, counting as zero");
        0.0
    }
}

/// Convert f64 to Decimal; `None` when outside Decimal's range
#[inline]
pub fn to_decimal(value: f64) -> Option<Decimal> {
    Decimal::from_f64(value)
}

/// Convert Decimal back to f64 for storage
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// Sum of `values`, exact in Decimal when every amount and partial sum fits,
/// otherwise in f64. Never panics.
pub fn sum(values: impl IntoIterator<Item = f64>) -> f64 {
    let values: Vec<f64> = values.into_iter().map(finite_or_zero).collect();

    let exact = values
        .iter()
        .try_fold(Decimal::ZERO, |acc, value| acc.checked_add(to_decimal(*value)?));

    match exact {
        Some(total) => to_f64(total),
        None => {
            tracing::warn!(
                count = values.len(),
                "Amounts exceed decimal range, summing as f64"
            );
            values.iter().sum()
        }
    }
}
