//! Reference data: accounts, items, vendors, and the chart that owns them.
//!
//! A [`Chart`] is an immutable configuration value loaded once at startup
//! (either the built-in [`Chart::standard`] or deserialized from config) and
//! passed by reference wherever reference data is needed. Nothing in the
//! engines mutates it.

use serde::{Deserialize, Serialize};

/// A general-ledger account: numeric id plus display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Account {
    /// Account number.
    pub id: u32,
    /// Display name.
    pub name: String,
}

impl Account {
    /// Create an account.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A tracked inventory item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Item id.
    pub id: u32,
    /// Display name.
    pub name: String,
}

impl Item {
    /// Create an item.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A vendor purchases are recorded against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vendor {
    /// Vendor id.
    pub id: u32,
    /// Display name.
    pub name: String,
}

impl Vendor {
    /// Create a vendor.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Well-known ids in the standard chart.
pub mod standard_ids {
    /// The ETH-Main inventory account.
    pub const ETH_MAIN: u32 = 1330;
    /// The electric-bill payable account.
    pub const ELECTRIC_BILL: u32 = 2350;
    /// The tracked Ether item.
    pub const ETHER: u32 = 1;
    /// The electric utility vendor.
    pub const ELECTRIC_COMPANY: u32 = 1;
}

/// The chart of accounts plus item and vendor tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chart {
    /// All general-ledger accounts.
    pub accounts: Vec<Account>,
    /// All tracked items.
    pub items: Vec<Item>,
    /// All vendors.
    pub vendors: Vec<Vendor>,
}

impl Chart {
    /// The built-in chart for a single-asset Ether mining ledger.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            accounts: vec![
                Account::new(1020, "Visa Card"),
                Account::new(1021, "Gemini USD"),
                Account::new(1031, "ETH-Coinbase"),
                Account::new(1032, "ETH-Gemini"),
                Account::new(standard_ids::ETH_MAIN, "ETH-Main"),
                Account::new(1510, "ENS Domains"),
                Account::new(standard_ids::ELECTRIC_BILL, "Electric Bill"),
                Account::new(4010, "Revenue ETH"),
                Account::new(5010, "Cost of ETH Sold"),
                Account::new(5800, "Eth Adjustments"),
                Account::new(6200, "Ethereum Transaction Fee"),
                Account::new(6201, "Coinbase Fee"),
                Account::new(6202, "Gemini Fee"),
                Account::new(7900, "Gain/Loss Asset Sales"),
            ],
            items: vec![Item::new(standard_ids::ETHER, "Ether")],
            vendors: vec![
                Vendor::new(standard_ids::ELECTRIC_COMPANY, "Electric Company"),
                Vendor::new(3, "ENS Registrar"),
                Vendor::new(4, "Coinbase"),
                Vendor::new(5, "Gemini"),
            ],
        }
    }

    /// Look up an account by id.
    #[must_use]
    pub fn account(&self, id: u32) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    /// Look up an item by id.
    #[must_use]
    pub fn item(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Look up a vendor by id.
    #[must_use]
    pub fn vendor(&self, id: u32) -> Option<&Vendor> {
        self.vendors.iter().find(|v| v.id == id)
    }
}
