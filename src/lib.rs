mod amount;
pub mod args;
pub mod commands;
mod config;
mod error;
pub mod metrics;
pub mod model;
mod storage;
mod store;
mod utils;

pub use amount::Amount;
pub use config::Config;
pub use error::Error;
pub use error::Result;
pub use model::{InventoryItem, PaymentMode, Transaction, TxnKind};
pub use storage::{CsvStorage, Storage};
pub use store::Ledger;
