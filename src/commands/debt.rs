use crate::args::{DebtClearArgs, DebtListArgs};
use crate::commands::{open_ledger, Out};
use crate::metrics;
use crate::{Amount, Config, Result};
use serde::Serialize;

/// One debtor and the amount they owe.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Debtor {
    pub customer: String,
    pub outstanding: Amount,
}

/// Lists debtors and their outstanding amounts.
pub fn debt_list(config: &Config, args: &DebtListArgs) -> Result<Out<Vec<Debtor>>> {
    let ledger = open_ledger(config)?;
    let transactions = ledger.transactions();

    let debtors: Vec<Debtor> = match args.customer() {
        Some(customer) => vec![Debtor {
            customer: customer.to_string(),
            outstanding: metrics::outstanding_debt(transactions, Some(customer)),
        }],
        None => metrics::debtors(transactions)
            .into_iter()
            .map(|customer| {
                let outstanding = metrics::outstanding_debt(transactions, Some(&customer));
                Debtor {
                    customer,
                    outstanding,
                }
            })
            .collect(),
    };

    let total = metrics::outstanding_debt(transactions, args.customer());
    let mut message = format!("Outstanding debt: {}", total.grouped());
    for debtor in &debtors {
        message.push_str(&format!(
            "\n  {}: {}",
            debtor.customer,
            debtor.outstanding.grouped()
        ));
    }

    Ok(Out::new(message, debtors))
}

/// Settles all of a customer's outstanding debt sales.
pub fn debt_clear(config: &Config, args: &DebtClearArgs) -> Result<Out<()>> {
    let mut ledger = open_ledger(config)?;
    let settled = ledger.clear_debt(args.customer())?;
    Ok(Out::new_message(format!(
        "Cleared {} of debt for '{}'",
        settled.grouped(),
        args.customer(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{ItemAddArgs, SaleRecordArgs};
    use crate::commands::{item_add, sale_record};
    use crate::model::PaymentMode;
    use tempfile::TempDir;

    fn config_with_debts(dir: &TempDir) -> Config {
        let config = Config::create(dir.path().join("books"), Amount::from(20000)).unwrap();
        item_add(&config, &ItemAddArgs::new("Widget", Amount::from(100), 20)).unwrap();
        sale_record(
            &config,
            &SaleRecordArgs::new("Widget", 2, Amount::from(30), "Bob", PaymentMode::Debt),
        )
        .unwrap();
        sale_record(
            &config,
            &SaleRecordArgs::new("Widget", 1, Amount::from(45), "Bob", PaymentMode::Debt),
        )
        .unwrap();
        sale_record(
            &config,
            &SaleRecordArgs::new("Widget", 1, Amount::from(10), "Carol", PaymentMode::Debt),
        )
        .unwrap();
        config
    }

    #[test]
    fn test_debt_list_all() {
        let dir = TempDir::new().unwrap();
        let config = config_with_debts(&dir);

        let out = debt_list(&config, &DebtListArgs::new(None)).unwrap();
        let debtors = out.structure().unwrap();
        assert_eq!(debtors.len(), 2);
        assert_eq!(debtors[0].customer, "Bob");
        assert_eq!(debtors[0].outstanding, Amount::from(75));
        assert_eq!(debtors[1].customer, "Carol");
        assert_eq!(debtors[1].outstanding, Amount::from(10));
    }

    #[test]
    fn test_debt_clear_settles_customer() {
        let dir = TempDir::new().unwrap();
        let config = config_with_debts(&dir);

        let out = debt_clear(&config, &DebtClearArgs::new("Bob")).unwrap();
        assert!(out.message().contains("75.00"));

        let listed = debt_list(&config, &DebtListArgs::new(Some("Bob".to_string()))).unwrap();
        assert!(listed.structure().unwrap()[0].outstanding.is_zero());
    }

    #[test]
    fn test_debt_clear_without_debt_fails() {
        let dir = TempDir::new().unwrap();
        let config = Config::create(dir.path().join("books"), Amount::from(20000)).unwrap();
        assert!(debt_clear(&config, &DebtClearArgs::new("Bob")).is_err());
    }
}
