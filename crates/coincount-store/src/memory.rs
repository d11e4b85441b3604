//! In-memory store, serializable as a single snapshot.

use crate::{LedgerStore, PurchaseStore, StoreError};
use coincount_core::{InventoryMovement, LedgerRow, Posting, Purchase};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An inventory movement plus the id the store assigned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredMovement {
    /// Store-assigned id, 1-based.
    pub id: u64,
    /// The movement itself.
    pub movement: InventoryMovement,
}

/// The whole book-of-record in memory.
///
/// Serializes to one snapshot document; the CLI persists it as a JSON file
/// between invocations. Quantities inside serialize in their base-16 wire
/// form via the core types.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryStore {
    movements: Vec<StoredMovement>,
    rows: Vec<LedgerRow>,
    purchases: Vec<Purchase>,
    posted: BTreeMap<u64, u64>,
}

impl MemoryStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All ledger rows, in commit order.
    #[must_use]
    pub fn rows(&self) -> &[LedgerRow] {
        &self.rows
    }

    /// The rows of one transaction group.
    #[must_use]
    pub fn rows_for_transaction(&self, transaction_id: u64) -> Vec<&LedgerRow> {
        self.rows.iter().filter(|r| r.id == transaction_id).collect()
    }

    /// All saved purchases.
    #[must_use]
    pub fn purchases(&self) -> &[Purchase] {
        &self.purchases
    }

    fn next_movement_id(&self) -> u64 {
        self.movements.iter().map(|m| m.id).max().unwrap_or(0) + 1
    }
}

impl LedgerStore for MemoryStore {
    fn next_transaction_id(&self) -> Result<u64, StoreError> {
        Ok(self.rows.iter().map(|r| r.id).max().unwrap_or(0) + 1)
    }

    fn commit_posting(&mut self, posting: Posting) -> Result<Vec<u64>, StoreError> {
        tracing::debug!(
            movements = posting.movements.len(),
            rows = posting.rows.len(),
            "committing posting"
        );

        let mut next = self.next_movement_id();
        let mut ids = Vec::with_capacity(posting.movements.len());
        for movement in posting.movements {
            ids.push(next);
            self.movements.push(StoredMovement { id: next, movement });
            next += 1;
        }
        self.rows.extend(posting.rows);
        Ok(ids)
    }

    fn movements_for_item(&self, item_id: u32) -> Result<Vec<InventoryMovement>, StoreError> {
        let mut movements: Vec<&StoredMovement> = self
            .movements
            .iter()
            .filter(|m| m.movement.item.id == item_id)
            .collect();
        // stable on date so same-day movements keep commit order
        movements.sort_by_key(|m| m.movement.date);
        Ok(movements.into_iter().map(|m| m.movement.clone()).collect())
    }
}

impl PurchaseStore for MemoryStore {
    fn save_purchase(&mut self, mut purchase: Purchase) -> Result<u64, StoreError> {
        let id = self.purchases.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        purchase.id = id;
        tracing::debug!(purchase = id, lines = purchase.lines.len(), "saving purchase");
        self.purchases.push(purchase);
        Ok(id)
    }

    fn purchase(&self, id: u64) -> Result<Purchase, StoreError> {
        self.purchases
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(StoreError::PurchaseNotFound(id))
    }

    fn mark_posted(&mut self, purchase_id: u64, transaction_id: u64) -> Result<(), StoreError> {
        if let Some(&existing) = self.posted.get(&purchase_id) {
            return Err(StoreError::AlreadyPosted {
                purchase: purchase_id,
                transaction: existing,
            });
        }
        self.posted.insert(purchase_id, transaction_id);
        Ok(())
    }

    fn posted_transaction(&self, purchase_id: u64) -> Result<Option<u64>, StoreError> {
        Ok(self.posted.get(&purchase_id).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use coincount_core::{Account, Item, LineItem, Money, Quantity, Vendor};

    fn qty(text: &str) -> Quantity {
        Quantity::from_decimal_str(text).unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn inbound(day: u32, q: &str, cost: i64) -> InventoryMovement {
        InventoryMovement::inbound(
            date(day),
            Account::new(1330, "ETH-Main"),
            Item::new(1, "Ether"),
            qty(q),
            Money::from_minor(cost),
            "PUR-1",
        )
    }

    fn purchase() -> Purchase {
        Purchase::new(
            date(5),
            Vendor::new(1, "Electric Company"),
            Account::new(2350, "Electric Bill"),
            Money::from_minor(100),
        )
        .with_line(LineItem::Inventory {
            item: Item::new(1, "Ether"),
            account: Account::new(1330, "ETH-Main"),
            qty: qty("1.0"),
            unit_cost: Money::from_minor(100),
            amount: Money::from_minor(100),
        })
    }

    #[test]
    fn test_empty_ledger_starts_at_one() {
        let store = MemoryStore::new();
        assert_eq!(store.next_transaction_id().unwrap(), 1);
    }

    #[test]
    fn test_next_transaction_id_is_highest_plus_one() {
        let mut store = MemoryStore::new();
        let mut posting = Posting::default();
        posting.rows.push(LedgerRow::debit(
            7,
            date(1),
            Account::new(1330, "ETH-Main"),
            Money::from_minor(100),
            "PUR-1",
        ));
        store.commit_posting(posting).unwrap();
        assert_eq!(store.next_transaction_id().unwrap(), 8);
    }

    #[test]
    fn test_commit_assigns_sequential_movement_ids() {
        let mut store = MemoryStore::new();
        let mut posting = Posting::default();
        posting.movements.push(inbound(1, "1.0", 100));
        posting.movements.push(inbound(2, "2.0", 200));

        let ids = store.commit_posting(posting).unwrap();
        assert_eq!(ids, vec![1, 2]);

        let mut posting = Posting::default();
        posting.movements.push(inbound(3, "0.5", 300));
        assert_eq!(store.commit_posting(posting).unwrap(), vec![3]);
    }

    #[test]
    fn test_movements_query_is_chronological() {
        let mut store = MemoryStore::new();
        let mut posting = Posting::default();
        posting.movements.push(inbound(9, "1.0", 100));
        posting.movements.push(inbound(2, "2.0", 200));
        posting.movements.push(inbound(9, "3.0", 300));
        store.commit_posting(posting).unwrap();

        let movements = store.movements_for_item(1).unwrap();
        assert_eq!(movements.len(), 3);
        assert_eq!(movements[0].date, date(2));
        // same-day movements keep commit order
        assert_eq!(movements[1].qty_in, qty("1.0"));
        assert_eq!(movements[2].qty_in, qty("3.0"));
    }

    #[test]
    fn test_movements_query_filters_by_item() {
        let mut store = MemoryStore::new();
        let mut posting = Posting::default();
        posting.movements.push(inbound(1, "1.0", 100));
        posting.movements.push(InventoryMovement::inbound(
            date(1),
            Account::new(1510, "ENS Domains"),
            Item::new(2, "ENS Name"),
            qty("1.0"),
            Money::from_minor(50),
            "PUR-2",
        ));
        store.commit_posting(posting).unwrap();

        assert_eq!(store.movements_for_item(1).unwrap().len(), 1);
        assert_eq!(store.movements_for_item(2).unwrap().len(), 1);
        assert!(store.movements_for_item(3).unwrap().is_empty());
    }

    #[test]
    fn test_save_purchase_assigns_ids_from_one() {
        let mut store = MemoryStore::new();
        assert_eq!(store.save_purchase(purchase()).unwrap(), 1);
        assert_eq!(store.save_purchase(purchase()).unwrap(), 2);
        assert_eq!(store.purchase(2).unwrap().id, 2);
    }

    #[test]
    fn test_missing_purchase_errors() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.purchase(9).unwrap_err(),
            StoreError::PurchaseNotFound(9)
        ));
    }

    #[test]
    fn test_posting_marker_is_exactly_once() {
        let mut store = MemoryStore::new();
        let id = store.save_purchase(purchase()).unwrap();

        assert_eq!(store.posted_transaction(id).unwrap(), None);
        store.mark_posted(id, 4).unwrap();
        assert_eq!(store.posted_transaction(id).unwrap(), Some(4));

        assert!(matches!(
            store.mark_posted(id, 5).unwrap_err(),
            StoreError::AlreadyPosted {
                purchase: p,
                transaction: 4,
            } if p == id
        ));
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut store = MemoryStore::new();
        let id = store.save_purchase(purchase()).unwrap();
        let mut posting = Posting::default();
        posting.movements.push(inbound(1, "1.0", 100));
        posting.rows.push(LedgerRow::debit(
            1,
            date(1),
            Account::new(1330, "ETH-Main"),
            Money::from_minor(100),
            "PUR-1",
        ));
        store.commit_posting(posting).unwrap();
        store.mark_posted(id, 1).unwrap();

        let snapshot = serde_json::to_string(&store).unwrap();
        // quantities ride along in base-16
        assert!(snapshot.contains("de0b6b3a7640000"));

        let restored: MemoryStore = serde_json::from_str(&snapshot).unwrap();
        assert_eq!(restored.next_transaction_id().unwrap(), 2);
        assert_eq!(restored.movements_for_item(1).unwrap().len(), 1);
        assert_eq!(restored.posted_transaction(id).unwrap(), Some(1));
        assert_eq!(restored.purchase(id).unwrap().amount, Money::from_minor(100));
    }
}
