//! Fixed-point conversion between asset quantities and monetary amounts.
//!
//! All four operations work in scaled `i128`, carrying three extra decimal
//! digits (a factor of 1000) through the intermediate product or quotient so
//! the rounding step has real sub-unit information to look at.
//!
//! Headroom: the widest intermediate is `quantity.scaled() × cost × 1000`.
//! With costs below 10^9 minor units that leaves room for roughly 10^8 whole
//! asset units before `i128` overflows, far beyond realistic holdings.

use crate::{Money, Quantity};
use thiserror::Error;

/// Error from a conversion operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UnitsError {
    /// A divide operation was handed a zero quantity.
    #[error("division by zero quantity")]
    DivisionByZero,
}

/// Extra precision factor carried through intermediate computation.
const EXTRA: i128 = 1000;

/// Collapse a thousandths-scaled value to whole minor units, rounding up
/// whenever the discarded remainder exceeds 1.
///
/// This is neither round-half-up (threshold 500) nor ceiling (any nonzero
/// remainder); the threshold of 1 out of 1000 is the historical behavior of
/// the ledger and is kept verbatim. It lives in this one function so the
/// policy can be changed without touching call sites.
const fn settle_thousandths(value: i128) -> i128 {
    let settled = value / EXTRA;
    if value % EXTRA > 1 {
        settled + 1
    } else {
        settled
    }
}

/// Extended value of `qty` units priced at `unit_cost` minor units each,
/// rounded with the [`settle_thousandths`] policy.
#[must_use]
pub fn multiply_round_up(qty: Quantity, unit_cost: Money) -> Money {
    let wide = qty.scaled() * i128::from(unit_cost.minor()) * EXTRA / Quantity::SCALE;
    Money::from_minor(settle_thousandths(wide) as i64)
}

/// Extended value of `qty` units priced at `unit_cost`, truncated.
#[must_use]
pub fn multiply_truncate(qty: Quantity, unit_cost: Money) -> Money {
    let wide = qty.scaled() * i128::from(unit_cost.minor()) * EXTRA / Quantity::SCALE;
    Money::from_minor((wide / EXTRA) as i64)
}

/// Per-unit cost of spreading `amount` across `qty` units, rounded with the
/// [`settle_thousandths`] policy.
///
/// The inverse of [`multiply_round_up`]: turns an accumulated extended cost
/// back into an average unit cost for the quantity it covers.
pub fn divide_round(amount: Money, qty: Quantity) -> Result<Money, UnitsError> {
    if qty.is_zero() {
        return Err(UnitsError::DivisionByZero);
    }
    let wide = i128::from(amount.minor()) * Quantity::SCALE * EXTRA / qty.scaled();
    Ok(Money::from_minor(settle_thousandths(wide) as i64))
}

/// Per-unit cost of spreading `amount` across `qty` units, truncated.
pub fn divide_truncate(amount: Money, qty: Quantity) -> Result<Money, UnitsError> {
    if qty.is_zero() {
        return Err(UnitsError::DivisionByZero);
    }
    let wide = i128::from(amount.minor()) * Quantity::SCALE * EXTRA / qty.scaled();
    Ok(Money::from_minor((wide / EXTRA) as i64))
}
