//! Persistence boundary for coincount.
//!
//! The booking engines are pure; everything that touches stored state goes
//! through the two traits here. [`LedgerStore`] owns the append-only side
//! of the books (inventory movements and ledger rows), [`PurchaseStore`]
//! owns purchase documents and their posted markers.
//!
//! [`MemoryStore`] is the bundled implementation: everything in memory,
//! serializable as a single snapshot. A database-backed store would
//! implement the same traits.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod memory;

pub use memory::MemoryStore;

use coincount_core::{InventoryMovement, Posting, Purchase};
use thiserror::Error;

/// Errors from a store operation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No purchase exists with the given id.
    #[error("purchase {0} not found")]
    PurchaseNotFound(u64),

    /// The purchase was already posted, under the given transaction id.
    /// Posting is exactly-once; the caller should surface the existing
    /// transaction instead of posting again.
    #[error("purchase {purchase} already posted as transaction {transaction}")]
    AlreadyPosted {
        /// The purchase that was posted before.
        purchase: u64,
        /// The transaction group it produced.
        transaction: u64,
    },
}

/// The append-only side of the books: movements and ledger rows.
pub trait LedgerStore {
    /// Allocate the next transaction group id: one greater than the highest
    /// id on any stored row, or 1 for an empty ledger.
    fn next_transaction_id(&self) -> Result<u64, StoreError>;

    /// Append a posting's movements and rows atomically. Returns the ids
    /// assigned to the stored movements, in input order.
    fn commit_posting(&mut self, posting: Posting) -> Result<Vec<u64>, StoreError>;

    /// All movements for an item, oldest first. Ties on date keep
    /// insertion order, which is what FIFO matching relies on.
    fn movements_for_item(&self, item_id: u32) -> Result<Vec<InventoryMovement>, StoreError>;
}

/// Purchase documents and their posted markers.
pub trait PurchaseStore {
    /// Save a purchase, assigning it a fresh id. Returns the id.
    fn save_purchase(&mut self, purchase: Purchase) -> Result<u64, StoreError>;

    /// Fetch a purchase by id.
    fn purchase(&self, id: u64) -> Result<Purchase, StoreError>;

    /// Record that a purchase was posted as the given transaction group.
    /// Fails with [`StoreError::AlreadyPosted`] if a marker already exists.
    fn mark_posted(&mut self, purchase_id: u64, transaction_id: u64) -> Result<(), StoreError>;

    /// The transaction group a purchase was posted as, if any.
    fn posted_transaction(&self, purchase_id: u64) -> Result<Option<u64>, StoreError>;
}
