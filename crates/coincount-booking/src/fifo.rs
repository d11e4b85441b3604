//! FIFO cost-basis matching over an inventory movement history.

use coincount_core::units::{self, UnitsError};
use coincount_core::{InventoryMovement, Money, Quantity};
use std::collections::VecDeque;
use thiserror::Error;

/// Error from a cost-basis computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CostError {
    /// Acquisition lots ran out before recorded disposals plus the requested
    /// quantity were satisfied. The inventory is oversold; this is a
    /// data-integrity condition the caller must surface, not retry.
    #[error("out of inventory: acquisition lots exhausted before demand was satisfied")]
    OutOfInventory,

    /// A conversion operation failed.
    #[error(transparent)]
    Units(#[from] UnitsError),
}

/// Compute the FIFO-weighted average unit cost of disposing `qty` units,
/// given the item's full movement history in chronological order.
///
/// Recorded disposals in the history are replayed first, consuming the
/// oldest acquisition lots, so that the requested quantity is priced against
/// whatever those disposals left behind. The result is the average cost per
/// unit for the `qty`-sized request, in minor currency units.
///
/// A zero `qty` short-circuits to zero cost with no error.
///
/// This is a single linear pass; it never looks past the current lot/demand
/// pair.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use coincount_booking::calc_cost;
/// use coincount_core::{Account, InventoryMovement, Item, Money, Quantity};
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let account = Account::new(1330, "ETH-Main");
/// let item = Item::new(1, "Ether");
/// let one: Quantity = "1.0".parse().unwrap();
///
/// let history = vec![InventoryMovement::inbound(
///     date,
///     account,
///     item,
///     one,
///     Money::from_minor(100),
///     "PUR-1",
/// )];
///
/// assert_eq!(calc_cost(&history, one).unwrap(), Money::from_minor(100));
/// ```
pub fn calc_cost(movements: &[InventoryMovement], qty: Quantity) -> Result<Money, CostError> {
    if qty.is_zero() {
        return Ok(Money::ZERO);
    }

    let mut inbound: VecDeque<&InventoryMovement> = VecDeque::new();
    let mut outbound: VecDeque<&InventoryMovement> = VecDeque::new();
    for movement in movements {
        if movement.is_inbound() {
            inbound.push_back(movement);
        } else if movement.is_outbound() {
            outbound.push_back(movement);
        }
    }

    let mut lot_left = Quantity::ZERO;
    let mut lot_cost = Money::ZERO;
    let mut demand_left = Quantity::ZERO;
    let mut basis = Money::ZERO;

    loop {
        if lot_left.is_zero() {
            let lot = inbound.pop_front().ok_or(CostError::OutOfInventory)?;
            lot_left = lot.qty_in;
            lot_cost = lot.unit_cost;
        }

        if demand_left.is_zero() {
            // A new demand chunk begins; the basis accumulator is scoped to
            // one chunk. Once recorded disposals are exhausted the caller's
            // qty becomes the single terminal demand.
            basis = Money::ZERO;
            demand_left = match outbound.front() {
                Some(disposal) => disposal.qty_out,
                None => qty,
            };
        }

        if demand_left <= lot_left {
            lot_left -= demand_left;
            basis += units::multiply_round_up(demand_left, lot_cost);
            demand_left = Quantity::ZERO;
            if outbound.pop_front().is_none() {
                // The terminal demand was the caller's qty; average it out.
                return Ok(units::divide_round(basis, qty)?);
            }
        } else {
            demand_left -= lot_left;
            basis += units::multiply_round_up(lot_left, lot_cost);
            lot_left = Quantity::ZERO;
        }
    }
}
