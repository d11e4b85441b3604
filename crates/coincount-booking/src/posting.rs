//! Posting engine: turn a purchase into balanced ledger output.

use chrono::NaiveDate;
use coincount_core::units;
use coincount_core::{
    Account, InventoryMovement, Item, LedgerRow, LineItem, Money, Posting, Purchase, Quantity,
    Vendor,
};

/// Reference data the payout constructor posts against.
///
/// Injected configuration rather than process-wide globals: build one from a
/// [`Chart`](coincount_core::Chart) at startup and hand it to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayoutConfig {
    /// The electric utility the payable is owed to.
    pub vendor: Vendor,
    /// The payable account for electricity.
    pub payable_account: Account,
    /// The mined item.
    pub item: Item,
    /// The inventory account the mined units land in.
    pub inventory_account: Account,
}

/// Builds purchases for recurring business events.
#[derive(Debug, Clone)]
pub struct PostingEngine {
    payout: PayoutConfig,
}

impl PostingEngine {
    /// Create an engine with the given payout configuration.
    #[must_use]
    pub const fn new(payout: PayoutConfig) -> Self {
        Self { payout }
    }

    /// Model a mining-reward receipt as a purchase of the mined units from
    /// the electric utility, at the cost of the electricity burned per unit.
    ///
    /// The extended amount is `qty × electricity_rate` under the engine's
    /// round-up policy.
    #[must_use]
    pub fn mining_payout(
        &self,
        date: NaiveDate,
        qty: Quantity,
        electricity_rate: Money,
    ) -> Purchase {
        let amount = units::multiply_round_up(qty, electricity_rate);

        Purchase::new(
            date,
            self.payout.vendor.clone(),
            self.payout.payable_account.clone(),
            amount,
        )
        .with_line(LineItem::Inventory {
            item: self.payout.item.clone(),
            account: self.payout.inventory_account.clone(),
            qty,
            unit_cost: electricity_rate,
            amount,
        })
    }
}

/// Post a purchase: produce its inventory movements and the ledger rows of
/// one balanced transaction group.
///
/// Every inventory line yields one movement (signed qty split structurally
/// into an acquisition or disposal) and one row against its inventory
/// account (signed amount split into debit or credit). Expense lines post
/// nothing. A final row settles the purchase total against the payable
/// account with the debit/credit roles reversed, which is what balances the
/// group: a positive total credits payables.
///
/// All rows share `next_ledger_id`; the caller obtains a fresh id per
/// posting and commits the returned [`Posting`] atomically. The purchase is
/// read-only here; no validation of its reference data is attempted.
#[must_use]
pub fn post_purchase(date: NaiveDate, purchase: &Purchase, next_ledger_id: u64) -> Posting {
    let memo = format!("PUR-{}", purchase.id);
    let mut posting = Posting::default();

    for line in &purchase.lines {
        let LineItem::Inventory {
            item,
            account,
            qty,
            unit_cost,
            amount,
        } = line
        else {
            continue;
        };

        let movement = if qty.is_negative() {
            InventoryMovement::outbound(
                date,
                account.clone(),
                item.clone(),
                qty.abs(),
                *unit_cost,
                memo.clone(),
            )
        } else {
            InventoryMovement::inbound(
                date,
                account.clone(),
                item.clone(),
                *qty,
                *unit_cost,
                memo.clone(),
            )
        };
        posting.movements.push(movement);

        let row = if amount.is_negative() {
            LedgerRow::credit(next_ledger_id, date, account.clone(), amount.abs(), memo.clone())
        } else {
            LedgerRow::debit(next_ledger_id, date, account.clone(), *amount, memo.clone())
        };
        posting.rows.push(row);
    }

    // Payable side, roles reversed relative to the line convention.
    let settle = if purchase.amount.is_negative() {
        LedgerRow::debit(
            next_ledger_id,
            date,
            purchase.payable_account.clone(),
            purchase.amount.abs(),
            memo,
        )
    } else {
        LedgerRow::credit(
            next_ledger_id,
            date,
            purchase.payable_account.clone(),
            purchase.amount,
            memo,
        )
    };
    posting.rows.push(settle);

    posting
}

#[cfg(test)]
mod tests {
    use super::*;
    use coincount_core::chart::{standard_ids, Chart};

    fn qty(text: &str) -> Quantity {
        Quantity::from_decimal_str(text).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn engine() -> PostingEngine {
        let chart = Chart::standard();
        PostingEngine::new(PayoutConfig {
            vendor: chart.vendor(standard_ids::ELECTRIC_COMPANY).unwrap().clone(),
            payable_account: chart.account(standard_ids::ELECTRIC_BILL).unwrap().clone(),
            item: chart.item(standard_ids::ETHER).unwrap().clone(),
            inventory_account: chart.account(standard_ids::ETH_MAIN).unwrap().clone(),
        })
    }

    #[test]
    fn test_mining_payout_shape() {
        let purchase = engine().mining_payout(date(2024, 1, 5), qty("0.35"), Money::from_minor(10_200));

        assert_eq!(purchase.vendor.name, "Electric Company");
        assert_eq!(purchase.payable_account.id, standard_ids::ELECTRIC_BILL);
        assert_eq!(purchase.amount, Money::from_minor(3_570));
        assert_eq!(purchase.lines.len(), 1);
        assert_eq!(purchase.line_total(), purchase.amount);
    }

    #[test]
    fn test_single_line_posting_is_mirror_rows() {
        let mut purchase = engine().mining_payout(date(2024, 1, 5), qty("1.0"), Money::from_minor(100));
        purchase.id = 7;

        let posting = post_purchase(purchase.date, &purchase, 3);

        assert_eq!(posting.rows.len(), 2);
        let inventory_row = &posting.rows[0];
        let payable_row = &posting.rows[1];

        assert_eq!(inventory_row.debit, Money::from_minor(100));
        assert!(inventory_row.credit.is_zero());
        assert_eq!(payable_row.credit, Money::from_minor(100));
        assert!(payable_row.debit.is_zero());
        assert!(posting.is_balanced());

        assert!(posting.rows.iter().all(|r| r.id == 3));
        assert!(posting.rows.iter().all(|r| r.memo == "PUR-7"));
    }

    #[test]
    fn test_positive_line_becomes_acquisition() {
        let purchase = engine().mining_payout(date(2024, 1, 5), qty("0.35"), Money::from_minor(10_200));
        let posting = post_purchase(purchase.date, &purchase, 1);

        assert_eq!(posting.movements.len(), 1);
        let movement = &posting.movements[0];
        assert!(movement.is_inbound());
        assert_eq!(movement.qty_in, qty("0.35"));
        assert_eq!(movement.unit_cost, Money::from_minor(10_200));
    }

    #[test]
    fn test_negative_line_becomes_disposal_and_credit() {
        let chart = Chart::standard();
        let purchase = Purchase::new(
            date(2024, 2, 1),
            chart.vendor(4).unwrap().clone(),
            chart.account(standard_ids::ELECTRIC_BILL).unwrap().clone(),
            Money::from_minor(-250),
        )
        .with_line(LineItem::Inventory {
            item: chart.item(standard_ids::ETHER).unwrap().clone(),
            account: chart.account(standard_ids::ETH_MAIN).unwrap().clone(),
            qty: -qty("0.5"),
            unit_cost: Money::from_minor(500),
            amount: Money::from_minor(-250),
        });

        let posting = post_purchase(purchase.date, &purchase, 9);

        let movement = &posting.movements[0];
        assert!(movement.is_outbound());
        assert_eq!(movement.qty_out, qty("0.5"));

        // negative line amount credits the inventory account; negative total
        // debits the payable account
        assert_eq!(posting.rows[0].credit, Money::from_minor(250));
        assert_eq!(posting.rows[1].debit, Money::from_minor(250));
        assert!(posting.is_balanced());
    }

    #[test]
    fn test_expense_lines_post_nothing() {
        let chart = Chart::standard();
        let purchase = Purchase::new(
            date(2024, 3, 1),
            chart.vendor(standard_ids::ELECTRIC_COMPANY).unwrap().clone(),
            chart.account(standard_ids::ELECTRIC_BILL).unwrap().clone(),
            Money::from_minor(100),
        )
        .with_line(LineItem::Expense {
            account: chart.account(6200).unwrap().clone(),
            amount: Money::from_minor(40),
        })
        .with_line(LineItem::Inventory {
            item: chart.item(standard_ids::ETHER).unwrap().clone(),
            account: chart.account(standard_ids::ETH_MAIN).unwrap().clone(),
            qty: qty("1.0"),
            unit_cost: Money::from_minor(100),
            amount: Money::from_minor(100),
        });

        let posting = post_purchase(purchase.date, &purchase, 2);

        // one movement and one row for the inventory line, plus the payable
        // settlement; the expense line contributes neither
        assert_eq!(posting.movements.len(), 1);
        assert_eq!(posting.rows.len(), 2);
    }
}
