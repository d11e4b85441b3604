//! Command-line bookkeeping for a crypto treasury.
//!
//! The `coincount` binary keeps a single JSON journal file as its book of
//! record and exposes the booking engines over it:
//!
//! - `coincount payout`: record a mining reward as a purchase
//! - `coincount post`: post a saved purchase to the ledger
//! - `coincount cost`: FIFO cost basis for a disposal quantity
//! - `coincount rows`: list posted ledger rows
//!
//! # Example Usage
//!
//! ```bash
//! coincount payout 2024-01-05 0.35 10200
//! coincount post 1
//! coincount cost 0.35
//! coincount rows
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cmd;
pub mod journal;
