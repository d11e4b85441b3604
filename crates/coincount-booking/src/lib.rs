//! Booking engines for coincount.
//!
//! Two pure, synchronous transformations over core types:
//!
//! - [`calc_cost`] - FIFO cost-basis matching: given an item's chronological
//!   movement history and a disposal quantity, compute the average unit cost
//!   attributable to that quantity, oldest acquisition lots first.
//! - [`PostingEngine`] / [`post_purchase`] - turn a purchase into inventory
//!   movements plus one balanced group of ledger rows.
//!
//! Neither performs I/O; persistence and id allocation live behind the store
//! boundary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod fifo;
mod posting;

pub use fifo::{calc_cost, CostError};
pub use posting::{post_purchase, PayoutConfig, PostingEngine};
