//! The record types held by the ledger: inventory items and transactions.

mod item;
mod transaction;

pub use item::InventoryItem;
pub use transaction::{PaymentMode, Transaction, TxnKind};
