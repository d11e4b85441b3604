//! Inventory movements: acquisitions into and disposals out of a lot history.

use crate::{Account, Item, Money, Quantity};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One inventory movement for a tracked item.
///
/// Direction is structural: an acquisition carries its quantity in `qty_in`,
/// a disposal in `qty_out`, and exactly one of the two is nonzero. The
/// per-unit cost is fixed when the movement is created and never recomputed.
/// Movements are append-only history; a correction is a new offsetting
/// movement, not an edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryMovement {
    /// Movement date.
    pub date: NaiveDate,
    /// The inventory account touched.
    pub account: Account,
    /// The tracked item.
    pub item: Item,
    /// Quantity acquired; zero for disposals.
    pub qty_in: Quantity,
    /// Quantity disposed; zero for acquisitions.
    pub qty_out: Quantity,
    /// Per-unit cost in minor currency units.
    pub unit_cost: Money,
    /// Free-form memo, typically `PUR-<purchase id>`.
    pub memo: String,
}

impl InventoryMovement {
    /// An acquisition of `qty` units.
    #[must_use]
    pub fn inbound(
        date: NaiveDate,
        account: Account,
        item: Item,
        qty: Quantity,
        unit_cost: Money,
        memo: impl Into<String>,
    ) -> Self {
        debug_assert!(!qty.is_negative(), "inbound quantity must be non-negative");
        Self {
            date,
            account,
            item,
            qty_in: qty,
            qty_out: Quantity::ZERO,
            unit_cost,
            memo: memo.into(),
        }
    }

    /// A disposal of `qty` units.
    #[must_use]
    pub fn outbound(
        date: NaiveDate,
        account: Account,
        item: Item,
        qty: Quantity,
        unit_cost: Money,
        memo: impl Into<String>,
    ) -> Self {
        debug_assert!(!qty.is_negative(), "outbound quantity must be non-negative");
        Self {
            date,
            account,
            item,
            qty_in: Quantity::ZERO,
            qty_out: qty,
            unit_cost,
            memo: memo.into(),
        }
    }

    /// True when this movement acquires inventory.
    #[must_use]
    pub fn is_inbound(&self) -> bool {
        !self.qty_in.is_zero()
    }

    /// True when this movement disposes of inventory.
    #[must_use]
    pub fn is_outbound(&self) -> bool {
        !self.qty_out.is_zero()
    }
}
