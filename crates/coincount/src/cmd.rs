//! Command implementations for the coincount binary.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use coincount_booking::{calc_cost, post_purchase, PayoutConfig, PostingEngine};
use coincount_core::chart::{standard_ids, Chart};
use coincount_core::{Money, Quantity};
use coincount_store::{LedgerStore, PurchaseStore};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

use crate::journal;

/// Inventory bookkeeping for a crypto treasury.
#[derive(Debug, Parser)]
#[command(name = "coincount", version, about)]
pub struct Cli {
    /// Path to the journal file
    #[arg(long, value_name = "FILE", default_value = "ledger.json")]
    pub ledger: PathBuf,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// The available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Record a mining reward as a purchase from the electric utility
    Payout {
        /// Reward date
        date: NaiveDate,
        /// Units received
        qty: Quantity,
        /// Electricity cost per unit, in minor currency units
        rate: i64,
    },
    /// Post a saved purchase to the ledger
    Post {
        /// Purchase id
        purchase: u64,
    },
    /// FIFO cost basis for disposing a quantity
    Cost {
        /// Units to price
        qty: Quantity,
    },
    /// List posted ledger rows
    Rows {
        /// Restrict to one transaction group
        transaction: Option<u64>,
    },
}

/// Build the mining-payout configuration from the standard chart.
fn payout_config(chart: &Chart) -> Result<PayoutConfig> {
    let lookup = "standard chart is missing a payout account";
    Ok(PayoutConfig {
        vendor: chart
            .vendor(standard_ids::ELECTRIC_COMPANY)
            .context(lookup)?
            .clone(),
        payable_account: chart
            .account(standard_ids::ELECTRIC_BILL)
            .context(lookup)?
            .clone(),
        item: chart.item(standard_ids::ETHER).context(lookup)?.clone(),
        inventory_account: chart.account(standard_ids::ETH_MAIN).context(lookup)?.clone(),
    })
}

/// Execute the parsed command against the journal file.
pub fn run(cli: &Cli) -> Result<()> {
    let mut store = journal::load(&cli.ledger)?;

    match cli.command {
        Command::Payout { date, qty, rate } => {
            let chart = Chart::standard();
            let engine = PostingEngine::new(payout_config(&chart)?);
            let purchase = engine.mining_payout(date, qty, Money::from_minor(rate));
            let amount = purchase.amount;
            let id = store.save_purchase(purchase)?;
            journal::save(&cli.ledger, &store)?;
            println!("saved purchase {id}: {qty} units, {amount} payable");
        }
        Command::Post { purchase } => {
            if let Some(transaction) = store.posted_transaction(purchase)? {
                anyhow::bail!("purchase {purchase} already posted as transaction {transaction}");
            }
            let document = store.purchase(purchase)?;
            let transaction = store.next_transaction_id()?;
            let posting = post_purchase(document.date, &document, transaction);
            let rows = posting.rows.len();
            store.commit_posting(posting)?;
            store.mark_posted(purchase, transaction)?;
            journal::save(&cli.ledger, &store)?;
            println!("posted purchase {purchase} as transaction {transaction} ({rows} rows)");
        }
        Command::Cost { qty } => {
            let movements = store.movements_for_item(standard_ids::ETHER)?;
            let unit_cost = calc_cost(&movements, qty)?;
            let total = coincount_core::units::multiply_round_up(qty, unit_cost);
            println!("{qty} units @ {unit_cost} = {total}");
        }
        Command::Rows { transaction } => {
            let rows: Vec<&coincount_core::LedgerRow> = match transaction {
                Some(id) => store.rows_for_transaction(id),
                None => store.rows().iter().collect(),
            };
            for row in rows {
                println!(
                    "{:>6}  {}  {:>6}  {:>12}  {:>12}  {}",
                    row.id, row.date, row.account.id, row.debit, row.credit, row.memo
                );
            }
        }
    }

    Ok(())
}

/// Main entry point for the coincount binary.
pub fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(ledger: PathBuf, command: Command) -> Cli {
        Cli {
            ledger,
            verbose: false,
            command,
        }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn qty(text: &str) -> Quantity {
        Quantity::from_decimal_str(text).unwrap()
    }

    #[test]
    fn test_payout_then_post_then_cost() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = dir.path().join("ledger.json");

        run(&cli(
            ledger.clone(),
            Command::Payout {
                date: date(5),
                qty: qty("0.35"),
                rate: 10_200,
            },
        ))
        .unwrap();

        run(&cli(ledger.clone(), Command::Post { purchase: 1 })).unwrap();

        let store = journal::load(&ledger).unwrap();
        assert_eq!(store.posted_transaction(1).unwrap(), Some(1));
        assert_eq!(store.rows().len(), 2);
        assert_eq!(store.movements_for_item(standard_ids::ETHER).unwrap().len(), 1);

        // the sole lot prices any disposal at its electricity rate
        run(&cli(ledger, Command::Cost { qty: qty("0.1") })).unwrap();
    }

    #[test]
    fn test_posting_twice_fails() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = dir.path().join("ledger.json");

        run(&cli(
            ledger.clone(),
            Command::Payout {
                date: date(5),
                qty: qty("1.0"),
                rate: 100,
            },
        ))
        .unwrap();
        run(&cli(ledger.clone(), Command::Post { purchase: 1 })).unwrap();

        let err = run(&cli(ledger, Command::Post { purchase: 1 })).unwrap_err();
        assert!(err.to_string().contains("already posted"));
    }

    #[test]
    fn test_posting_unknown_purchase_fails() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = dir.path().join("ledger.json");
        assert!(run(&cli(ledger, Command::Post { purchase: 9 })).is_err());
    }
}
