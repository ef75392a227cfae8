//! The persistence boundary.
//!
//! The ledger persists its full state after every mutation and reads it back
//! in full at startup. `Storage` is the seam; `CsvStorage` is the production
//! implementation, writing the two flat CSV files that live in the data
//! directory.

use crate::model::{InventoryItem, Transaction};
use crate::Result;
use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Loads and saves the two ledger collections.
///
/// There is no incremental write: `save` overwrites everything. A crash
/// between an in-memory mutation and `save` loses that operation.
pub trait Storage {
    fn load(&self) -> Result<(Vec<InventoryItem>, Vec<Transaction>)>;
    fn save(&self, inventory: &[InventoryItem], transactions: &[Transaction]) -> Result<()>;
}

/// CSV-file storage: `inventory.csv` and `transactions.csv`.
#[derive(Debug, Clone)]
pub struct CsvStorage {
    inventory_path: PathBuf,
    transactions_path: PathBuf,
}

impl CsvStorage {
    pub fn new(inventory_path: impl Into<PathBuf>, transactions_path: impl Into<PathBuf>) -> Self {
        Self {
            inventory_path: inventory_path.into(),
            transactions_path: transactions_path.into(),
        }
    }

    pub fn inventory_path(&self) -> &Path {
        &self.inventory_path
    }

    pub fn transactions_path(&self) -> &Path {
        &self.transactions_path
    }
}

impl Storage for CsvStorage {
    fn load(&self) -> Result<(Vec<InventoryItem>, Vec<Transaction>)> {
        let inventory = read_csv(&self.inventory_path)?;
        let transactions = read_csv(&self.transactions_path)?;
        Ok((inventory, transactions))
    }

    fn save(&self, inventory: &[InventoryItem], transactions: &[Transaction]) -> Result<()> {
        write_csv(&self.inventory_path, inventory)?;
        write_csv(&self.transactions_path, transactions)
    }
}

/// Reads all records from a CSV file. A missing file is an empty collection,
/// not an error.
fn read_csv<T>(path: &Path) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    if !path.is_file() {
        return Ok(Vec::new());
    }
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Unable to open {}", path.display()))?;
    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: T =
            result.with_context(|| format!("Malformed record in {}", path.display()))?;
        records.push(record);
    }
    Ok(records)
}

/// Overwrites `path` with the given records. An empty collection produces
/// an empty file, which loads back as an empty collection.
fn write_csv<T>(path: &Path, records: &[T]) -> Result<()>
where
    T: Serialize,
{
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Unable to write {}", path.display()))?;
    for record in records {
        writer
            .serialize(record)
            .with_context(|| format!("Unable to serialize record to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("Unable to flush {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PaymentMode;
    use crate::Amount;
    use tempfile::TempDir;

    fn storage_in(dir: &TempDir) -> CsvStorage {
        CsvStorage::new(
            dir.path().join("inventory.csv"),
            dir.path().join("transactions.csv"),
        )
    }

    #[test]
    fn test_load_missing_files_yields_empty_collections() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        let (inventory, transactions) = storage.load().unwrap();
        assert!(inventory.is_empty());
        assert!(transactions.is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);

        let inventory = vec![InventoryItem::new("Widget", 20, Amount::from(5))];
        let transactions = vec![
            Transaction::purchase("Widget", 20, Amount::from(100)),
            Transaction::sale("Widget", 5, Amount::from(10), "Alice", PaymentMode::Debt),
        ];

        storage.save(&inventory, &transactions).unwrap();
        let (loaded_inventory, loaded_transactions) = storage.load().unwrap();

        assert_eq!(inventory, loaded_inventory);
        assert_eq!(transactions, loaded_transactions);
    }

    #[test]
    fn test_save_empty_round_trips_as_empty() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        storage.save(&[], &[]).unwrap();

        assert!(storage.inventory_path().is_file());
        assert!(storage.transactions_path().is_file());
        let (inventory, transactions) = storage.load().unwrap();
        assert!(inventory.is_empty());
        assert!(transactions.is_empty());
    }

    #[test]
    fn test_transaction_headers_match_data_files() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        storage
            .save(&[], &[Transaction::purchase("Widget", 1, Amount::from(10))])
            .unwrap();

        let text = std::fs::read_to_string(storage.transactions_path()).unwrap();
        assert!(text
            .starts_with("Date,Type,Item,Quantity,Price,Customer Name,Payment Mode,Expense"));
    }

    #[test]
    fn test_save_overwrites_previous_contents() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);

        let first = vec![InventoryItem::new("Widget", 20, Amount::from(5))];
        storage.save(&first, &[]).unwrap();
        let second = vec![InventoryItem::new("Gadget", 3, Amount::from(7))];
        storage.save(&second, &[]).unwrap();

        let (loaded, _) = storage.load().unwrap();
        assert_eq!(loaded, second);
    }

    #[test]
    fn test_malformed_row_is_an_error() {
        let dir = TempDir::new().unwrap();
        let storage = storage_in(&dir);
        std::fs::write(
            storage.inventory_path(),
            "Item,Quantity,Cost Per Unit,Selling Price\nWidget,not-a-number,5,0\n",
        )
        .unwrap();
        assert!(storage.load().is_err());
    }
}
