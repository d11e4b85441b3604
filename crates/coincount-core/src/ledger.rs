//! General-ledger rows and the atomic posting bundle.

use crate::{Account, InventoryMovement, Money};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One general-ledger row.
///
/// The `id` is a ledger-transaction-group identifier shared by every row of
/// one posting. Exactly one of `debit`/`credit` is nonzero per row, and the
/// debits and credits of a group sum to the same total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRow {
    /// Ledger-transaction-group id.
    pub id: u64,
    /// Posting date.
    pub date: NaiveDate,
    /// The account debited or credited.
    pub account: Account,
    /// Non-negative debit amount; zero when the row credits.
    pub debit: Money,
    /// Non-negative credit amount; zero when the row debits.
    pub credit: Money,
    /// Free-form memo shared by the posting group.
    pub memo: String,
}

impl LedgerRow {
    /// A row debiting `account` for `amount`.
    #[must_use]
    pub fn debit(
        id: u64,
        date: NaiveDate,
        account: Account,
        amount: Money,
        memo: impl Into<String>,
    ) -> Self {
        debug_assert!(!amount.is_negative(), "debit amount must be non-negative");
        Self {
            id,
            date,
            account,
            debit: amount,
            credit: Money::ZERO,
            memo: memo.into(),
        }
    }

    /// A row crediting `account` for `amount`.
    #[must_use]
    pub fn credit(
        id: u64,
        date: NaiveDate,
        account: Account,
        amount: Money,
        memo: impl Into<String>,
    ) -> Self {
        debug_assert!(!amount.is_negative(), "credit amount must be non-negative");
        Self {
            id,
            date,
            account,
            debit: Money::ZERO,
            credit: amount,
            memo: memo.into(),
        }
    }
}

/// The output of posting one business event: movements plus ledger rows,
/// committed to the store as a single atomic unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    /// Inventory movements to append.
    pub movements: Vec<InventoryMovement>,
    /// Ledger rows to append under one shared transaction id.
    pub rows: Vec<LedgerRow>,
}

impl Posting {
    /// Total debits across the posting's rows.
    #[must_use]
    pub fn total_debits(&self) -> Money {
        self.rows.iter().map(|r| r.debit).sum()
    }

    /// Total credits across the posting's rows.
    #[must_use]
    pub fn total_credits(&self) -> Money {
        self.rows.iter().map(|r| r.credit).sum()
    }

    /// Double-entry balance check: debits equal credits.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.total_debits() == self.total_credits()
    }
}
