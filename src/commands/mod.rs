//! Command handlers for the shopbook CLI.
//!
//! This module contains implementations for all CLI subcommands. Each
//! handler loads the ledger, performs one operation, and returns an [`Out`]
//! describing what happened.

mod debt;
mod init;
mod item;
mod report;
mod sale;
mod txn;

use crate::storage::CsvStorage;
use crate::store::Ledger;
use crate::{Config, Result};
use serde::Serialize;
use std::fmt::Debug;
use tracing::{debug, info};

/// Opens the ledger backed by the CSV files in the configured data
/// directory.
pub(crate) fn open_ledger(config: &Config) -> Result<Ledger<CsvStorage>> {
    let storage = CsvStorage::new(config.inventory_path(), config.transactions_path());
    Ledger::open(storage)
}

pub use debt::{debt_clear, debt_list, Debtor};
pub use init::init;
pub use item::{item_add, item_delete, item_list};
pub use report::{report_daily, report_summary, DailyReport};
pub use sale::sale_record;
pub use txn::{txn_delete, txn_list};

/// The output of a command: a human-readable message plus, optionally,
/// structured data for anything that wants to consume the result as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// A message that can be printed to the user regarding the outcome of
    /// the command execution.
    message: String,

    /// Any structured data that needs to be output from the call.
    structure: Option<T>,
}

impl<T, S> From<S> for Out<T>
where
    T: Debug + Clone + Serialize,
    S: Into<String>,
{
    fn from(value: S) -> Self {
        Out::new_message(value)
    }
}

impl<T> Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// Create a new `Out` object that has `Some(structure)`.
    pub fn new<S>(message: S, structure: T) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: Some(structure),
        }
    }

    /// Create a new `Out` object that has `None` for `structure`.
    pub fn new_message<S>(message: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: None,
        }
    }

    /// Get the `message`.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the structured data stored in `structure`.
    pub fn structure(&self) -> Option<&T> {
        self.structure.as_ref()
    }

    /// Print the message to `info!` and the structured data (if it exists)
    /// as JSON to `debug!`.
    pub fn print(&self) {
        info!("{}", self.message);
        if let Some(structure) = self.structure() {
            if let Ok(json) = serde_json::to_string_pretty(structure) {
                debug!("Command output:\n\n{json}\n\n");
            }
        }
    }
}
