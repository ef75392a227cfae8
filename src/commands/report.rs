use crate::commands::{open_ledger, Out};
use crate::metrics::{self, Summary};
use crate::{Amount, Config, Result};
use chrono::NaiveDate;
use serde::Serialize;

/// Computes and formats the headline financial figures.
pub fn report_summary(config: &Config) -> Result<Out<Summary>> {
    let ledger = open_ledger(config)?;
    let summary = Summary::compute(ledger.transactions(), config.initial_capital());

    let variation = match summary.capital_variation_pct {
        Some(pct) => format!("{}%", pct.grouped()),
        None => "undefined (initial capital is zero)".to_string(),
    };
    let message = format!(
        "Total Sales:       {}\n\
         Total Expenses:    {}\n\
         Gross Profit:      {}\n\
         Net Capital:       {}\n\
         Capital Variation: {}",
        summary.total_sales.grouped(),
        summary.total_expenses.grouped(),
        summary.gross_profit.grouped(),
        summary.net_capital.grouped(),
        variation,
    );

    Ok(Out::new(message, summary))
}

/// The three daily series: sales, expenses, and debt accumulation.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct DailyReport {
    pub sales: Vec<(NaiveDate, Amount)>,
    pub expenses: Vec<(NaiveDate, Amount)>,
    pub debt: Vec<(NaiveDate, Amount)>,
}

/// Computes the daily sales/expense/debt series.
pub fn report_daily(config: &Config) -> Result<Out<DailyReport>> {
    let ledger = open_ledger(config)?;
    let transactions = ledger.transactions();

    let report = DailyReport {
        sales: metrics::daily_sales_series(transactions),
        expenses: metrics::daily_expense_series(transactions),
        debt: metrics::daily_debt_series(transactions),
    };

    let mut message = String::from("Daily Sales:");
    append_series(&mut message, &report.sales);
    message.push_str("\nDaily Expenses:");
    append_series(&mut message, &report.expenses);
    message.push_str("\nDaily Debt Accumulation:");
    append_series(&mut message, &report.debt);

    Ok(Out::new(message, report))
}

fn append_series(message: &mut String, series: &[(NaiveDate, Amount)]) {
    if series.is_empty() {
        message.push_str("\n  (none)");
        return;
    }
    for (date, amount) in series {
        message.push_str(&format!("\n  {date}: {}", amount.grouped()));
    }
}
