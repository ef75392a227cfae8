//! Derived financial metrics.
//!
//! Everything here is a pure function over the transaction log (plus the
//! inventory for low-stock checks). Nothing is cached: every call recomputes
//! from scratch, and empty collections yield zeros and empty series rather
//! than errors.

use crate::model::{InventoryItem, PaymentMode, Transaction, TxnKind};
use crate::Amount;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Items with fewer than this many units in stock are flagged by default.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 50;

/// The headline financial figures.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Summary {
    pub total_sales: Amount,
    pub total_purchase_cost: Amount,
    pub total_expenses: Amount,
    pub gross_profit: Amount,
    pub net_capital: Amount,
    /// `None` when the initial capital is zero, since the variation is
    /// undefined in that case.
    pub capital_variation_pct: Option<Amount>,
}

impl Summary {
    /// Computes all headline figures from the transaction log and the
    /// configured initial capital.
    pub fn compute(transactions: &[Transaction], initial_capital: Amount) -> Self {
        let total_sales = total_sales(transactions);
        let total_purchase_cost = total_purchase_cost(transactions);
        let total_expenses = total_expenses(transactions);
        let gross_profit = total_sales - total_purchase_cost - total_expenses;
        let net_capital = initial_capital + gross_profit;
        let capital_variation_pct = if initial_capital.is_zero() {
            None
        } else {
            let pct = (net_capital.value() - initial_capital.value())
                / initial_capital.value()
                * Decimal::from(100);
            Some(Amount::new(pct))
        };
        Self {
            total_sales,
            total_purchase_cost,
            total_expenses,
            gross_profit,
            net_capital,
            capital_variation_pct,
        }
    }
}

/// Realized revenue: sales that were actually paid for, plus settled debt
/// payments. Debt-mode sales are outstanding receivables and are excluded
/// until a DebtPayment row realizes them (at quantity 1 by convention).
pub fn total_sales(transactions: &[Transaction]) -> Amount {
    transactions
        .iter()
        .filter(|t| {
            matches!(t.kind(), TxnKind::Sale | TxnKind::DebtPayment)
                && t.payment() != PaymentMode::Debt
        })
        .map(Transaction::line_total)
        .sum()
}

/// Sum of `quantity * price` over Purchase rows.
///
/// Purchase rows always carry a zero price (the cost lives in `expense`),
/// so this is structurally zero. It is kept as a distinct term of the gross
/// profit formula for fidelity with the data model.
pub fn total_purchase_cost(transactions: &[Transaction]) -> Amount {
    transactions
        .iter()
        .filter(|t| t.kind() == TxnKind::Purchase)
        .map(Transaction::line_total)
        .sum()
}

/// Sum of the expense column over all rows.
pub fn total_expenses(transactions: &[Transaction]) -> Amount {
    transactions.iter().map(Transaction::expense).sum()
}

/// Sale prices summed per calendar day, ordered by date.
pub fn daily_sales_series(transactions: &[Transaction]) -> Vec<(NaiveDate, Amount)> {
    daily_series(
        transactions
            .iter()
            .filter(|t| t.kind() == TxnKind::Sale)
            .map(|t| (t.date().date_naive(), t.price())),
    )
}

/// Expenses summed per calendar day, ordered by date. Days that sum to zero
/// are omitted.
pub fn daily_expense_series(transactions: &[Transaction]) -> Vec<(NaiveDate, Amount)> {
    daily_series(
        transactions
            .iter()
            .filter(|t| !t.expense().is_zero())
            .map(|t| (t.date().date_naive(), t.expense())),
    )
}

/// Outstanding debt accumulation per calendar day, ordered by date.
pub fn daily_debt_series(transactions: &[Transaction]) -> Vec<(NaiveDate, Amount)> {
    daily_series(
        transactions
            .iter()
            .filter(|t| t.is_outstanding_debt())
            .map(|t| (t.date().date_naive(), t.price())),
    )
}

fn daily_series(rows: impl Iterator<Item = (NaiveDate, Amount)>) -> Vec<(NaiveDate, Amount)> {
    let mut by_date: BTreeMap<NaiveDate, Amount> = BTreeMap::new();
    for (date, amount) in rows {
        *by_date.entry(date).or_default() += amount;
    }
    by_date.into_iter().collect()
}

/// Items whose stock level has fallen below `threshold`.
pub fn low_stock_items(inventory: &[InventoryItem], threshold: i64) -> Vec<&InventoryItem> {
    inventory
        .iter()
        .filter(|i| i.quantity() < threshold)
        .collect()
}

/// Customers with outstanding debt sales, sorted by name.
pub fn debtors(transactions: &[Transaction]) -> Vec<String> {
    transactions
        .iter()
        .filter(|t| t.is_outstanding_debt())
        .map(|t| t.customer().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Total outstanding debt, optionally scoped to one customer.
pub fn outstanding_debt(transactions: &[Transaction], customer: Option<&str>) -> Amount {
    transactions
        .iter()
        .filter(|t| t.is_outstanding_debt())
        .filter(|t| customer.map_or(true, |c| t.customer() == c))
        .map(|t| t.price())
        .sum()
}
