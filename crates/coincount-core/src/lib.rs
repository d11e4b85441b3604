//! Core types for coincount
//!
//! This crate provides the fundamental types for a single-asset double-entry
//! ledger:
//!
//! - [`Quantity`] - An 18-decimal fixed-point asset quantity
//! - [`Money`] - A signed count of minor currency units
//! - [`units`] - Conversion and rounding between the two
//! - [`Account`], [`Item`], [`Vendor`], [`Chart`] - Immutable reference data
//! - [`InventoryMovement`] - One acquisition or disposal of the asset
//! - [`LedgerRow`], [`Posting`] - General-ledger rows and the atomic bundle
//! - [`Purchase`], [`LineItem`] - The business event that gets posted
//!
//! # Example
//!
//! ```
//! use coincount_core::{units, Money, Quantity};
//!
//! let qty: Quantity = "0.35".parse().unwrap();
//! let rate = Money::from_minor(10_200);
//!
//! // Extended cost of 0.35 units at 10200 minor units each
//! let extended = units::multiply_round_up(qty, rate);
//! assert_eq!(extended, Money::from_minor(3_570));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod chart;
pub mod ledger;
pub mod money;
pub mod movement;
pub mod purchase;
pub mod quantity;
pub mod units;

pub use chart::{Account, Chart, Item, Vendor};
pub use ledger::{LedgerRow, Posting};
pub use money::Money;
pub use movement::InventoryMovement;
pub use purchase::{LineItem, Purchase};
pub use quantity::{ParseQuantityError, Quantity};
pub use units::UnitsError;

// Re-export the date type used throughout.
pub use chrono::NaiveDate;
