//! Purchases: the business event that gets posted exactly once.

use crate::{Account, Item, Money, Quantity, Vendor};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One line of a purchase.
///
/// Lines either touch inventory or are pure expenses. The variant replaces
/// the sentinel "no item" id an older schema used for expense lines, so the
/// distinction is carried by the type rather than a magic comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineItem {
    /// A line that acquires or returns tracked inventory.
    Inventory {
        /// The tracked item.
        item: Item,
        /// The inventory account the movement posts against.
        account: Account,
        /// Signed quantity; negative means a return/disposal.
        qty: Quantity,
        /// Per-unit cost in minor units.
        unit_cost: Money,
        /// Caller-supplied extended value for the line. Trusted as-is; the
        /// engine only uses `qty` to decide direction.
        amount: Money,
    },
    /// A pure expense line with no inventory effect.
    Expense {
        /// The expense account.
        account: Account,
        /// Signed extended value for the line.
        amount: Money,
    },
}

impl LineItem {
    /// The line's extended value.
    #[must_use]
    pub const fn amount(&self) -> Money {
        match self {
            Self::Inventory { amount, .. } | Self::Expense { amount, .. } => *amount,
        }
    }
}

/// A purchase from a vendor, settled against a payable account.
///
/// Created by an upstream workflow (e.g. a mining payout), posted exactly
/// once, immutable history afterwards. The store assigns `id` on save; a
/// freshly built purchase carries id 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Purchase {
    /// Store-assigned purchase id (0 until saved).
    pub id: u64,
    /// Purchase date.
    pub date: NaiveDate,
    /// The vendor.
    pub vendor: Vendor,
    /// The payable account the balancing row posts against.
    pub payable_account: Account,
    /// Total amount owed for the purchase.
    pub amount: Money,
    /// Line items, owned by value.
    pub lines: Vec<LineItem>,
}

impl Purchase {
    /// Build an unsaved purchase with no lines.
    #[must_use]
    pub fn new(date: NaiveDate, vendor: Vendor, payable_account: Account, amount: Money) -> Self {
        Self {
            id: 0,
            date,
            vendor,
            payable_account,
            amount,
            lines: Vec::new(),
        }
    }

    /// Append a line item.
    #[must_use]
    pub fn with_line(mut self, line: LineItem) -> Self {
        self.lines.push(line);
        self
    }

    /// Sum of line amounts, useful for cross-checking against `amount`.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.lines.iter().map(LineItem::amount).sum()
    }
}
