use crate::args::TxnDeleteArgs;
use crate::commands::{open_ledger, Out};
use crate::model::Transaction;
use crate::{Config, Result};

/// Lists all transactions with the indexes used by `txn delete`.
pub fn txn_list(config: &Config) -> Result<Out<Vec<Transaction>>> {
    let ledger = open_ledger(config)?;
    let transactions = ledger.transactions().to_vec();

    let mut message = format!("{} transaction(s)", transactions.len());
    for (index, txn) in transactions.iter().enumerate() {
        message.push_str(&format!(
            "\n  [{index}] {} {} '{}' x{} @ {}{}{}",
            txn.date().format("%Y-%m-%d"),
            txn.kind(),
            txn.item(),
            txn.quantity(),
            txn.price().grouped(),
            if txn.expense().is_zero() {
                String::new()
            } else {
                format!(", expense {}", txn.expense().grouped())
            },
            if txn.customer().is_empty() {
                String::new()
            } else {
                format!(", customer {}", txn.customer())
            },
        ));
    }

    Ok(Out::new(message, transactions))
}

/// Deletes the transaction at the given index, reversing its stock effect.
pub fn txn_delete(config: &Config, args: &TxnDeleteArgs) -> Result<Out<Transaction>> {
    let mut ledger = open_ledger(config)?;
    let removed = ledger.delete_transaction(args.index())?;
    Ok(Out::new(
        format!(
            "Deleted {} transaction [{}] for '{}' and reversed its stock effect",
            removed.kind(),
            args.index(),
            removed.item(),
        ),
        removed,
    ))
}
