//! The ledger store: owns the inventory and transaction collections and
//! keeps them mutually consistent under add/delete operations.
//!
//! Every mutation persists the full state through the [`Storage`]
//! collaborator before returning. If persistence fails the error is
//! surfaced to the caller -- the in-memory state has already changed at
//! that point, so silently swallowing the failure would lose the write.

use crate::model::{InventoryItem, PaymentMode, Transaction, TxnKind};
use crate::storage::Storage;
use crate::{Amount, Result};
use anyhow::{bail, Context};

/// The in-memory ledger, loaded in full from storage at startup.
///
/// The store owns both collections exclusively; readers get slices, and all
/// mutation goes through the operations below.
#[derive(Debug)]
pub struct Ledger<S: Storage> {
    inventory: Vec<InventoryItem>,
    transactions: Vec<Transaction>,
    storage: S,
}

impl<S: Storage> Ledger<S> {
    /// Loads the ledger from storage. Missing data files mean an empty
    /// ledger, not an error.
    pub fn open(storage: S) -> Result<Self> {
        let (inventory, transactions) =
            storage.load().context("Unable to load the ledger data")?;
        Ok(Self {
            inventory,
            transactions,
            storage,
        })
    }

    pub fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Finds an inventory item by name.
    pub fn find_item(&self, name: &str) -> Option<&InventoryItem> {
        self.inventory.iter().find(|i| i.name() == name)
    }

    /// Records a purchase: restocks `name` if it exists, otherwise creates
    /// it with a cost per unit derived from the purchase (`total_cost /
    /// units`, or zero when `units` is zero). Always appends a Purchase
    /// transaction carrying the total cost as its expense.
    ///
    /// Returns the quantity now in stock.
    pub fn add_or_restock(&mut self, name: &str, total_cost: Amount, units: i64) -> Result<i64> {
        if name.trim().is_empty() {
            bail!("An item name is required");
        }

        let quantity = match self.inventory.iter_mut().find(|i| i.name() == name) {
            Some(item) => {
                item.adjust_quantity(units);
                item.quantity()
            }
            None => {
                let cost_per_unit = if units == 0 {
                    Amount::ZERO
                } else {
                    Amount::new(total_cost.value() / rust_decimal::Decimal::from(units))
                };
                self.inventory
                    .push(InventoryItem::new(name, units, cost_per_unit));
                units
            }
        };

        self.transactions
            .push(Transaction::purchase(name, units, total_cost));
        self.persist()?;
        Ok(quantity)
    }

    /// Deletes an item and cascades deletion of its Purchase transactions.
    ///
    /// This is destructive, not a reversal: no quantities are adjusted, and
    /// Sale transactions referencing the name are left in place. That
    /// asymmetry with [`Ledger::delete_transaction`] is deliberate --
    /// deleting a whole item erases its purchase history, while deleting a
    /// single transaction undoes its stock effect.
    ///
    /// Returns the number of cascaded Purchase transactions.
    pub fn delete_item(&mut self, name: &str) -> Result<usize> {
        let Some(position) = self.inventory.iter().position(|i| i.name() == name) else {
            bail!("No item named '{name}' exists");
        };
        self.inventory.remove(position);

        let before = self.transactions.len();
        self.transactions
            .retain(|t| !(t.kind() == TxnKind::Purchase && t.item() == name));
        let cascaded = before - self.transactions.len();

        self.persist()?;
        Ok(cascaded)
    }

    /// Records a sale of `quantity` units of `item` at `price` each and
    /// decrements the stock level.
    ///
    /// The decrement is unconditional: overselling drives the quantity
    /// negative rather than failing. A Debt-mode sale is an outstanding
    /// receivable until [`Ledger::clear_debt`] settles it.
    ///
    /// Returns the quantity remaining in stock.
    pub fn record_sale(
        &mut self,
        item: &str,
        quantity: i64,
        price: Amount,
        customer: &str,
        payment: PaymentMode,
    ) -> Result<i64> {
        let Some(stocked) = self.inventory.iter_mut().find(|i| i.name() == item) else {
            bail!("No item named '{item}' exists");
        };
        stocked.adjust_quantity(-quantity);
        let remaining = stocked.quantity();

        self.transactions
            .push(Transaction::sale(item, quantity, price, customer, payment));
        self.persist()?;
        Ok(remaining)
    }

    /// Deletes the transaction at `index` and reverses its inventory
    /// effect: a deleted Sale restores stock, a deleted Purchase removes
    /// it. Debt payments have no stock effect. If the referenced item no
    /// longer exists, the reversal is a silent no-op.
    ///
    /// Returns the removed transaction.
    pub fn delete_transaction(&mut self, index: usize) -> Result<Transaction> {
        if index >= self.transactions.len() {
            bail!(
                "Transaction index {index} is out of range (the ledger has {} transactions)",
                self.transactions.len()
            );
        }
        let removed = self.transactions.remove(index);

        let delta = match removed.kind() {
            TxnKind::Sale => removed.quantity(),
            TxnKind::Purchase => -removed.quantity(),
            TxnKind::DebtPayment => 0,
        };
        if delta != 0 {
            if let Some(item) = self
                .inventory
                .iter_mut()
                .find(|i| i.name() == removed.item())
            {
                item.adjust_quantity(delta);
            }
        }

        self.persist()?;
        Ok(removed)
    }

    /// Settles all of `customer`'s outstanding debt sales: appends a single
    /// DebtPayment transaction for the summed amount and removes the
    /// original Debt-mode Sale rows.
    ///
    /// The per-sale item and quantity detail is collapsed irreversibly;
    /// only the monetary total survives in the ledger.
    ///
    /// Returns the settled amount.
    pub fn clear_debt(&mut self, customer: &str) -> Result<Amount> {
        let debts: Vec<&Transaction> = self
            .transactions
            .iter()
            .filter(|t| t.is_outstanding_debt() && t.customer() == customer)
            .collect();
        if debts.is_empty() {
            bail!("'{customer}' has no outstanding debt");
        }
        let total: Amount = debts.iter().map(|t| t.price()).sum();

        self.transactions
            .push(Transaction::debt_payment(customer, total));
        self.transactions
            .retain(|t| !(t.is_outstanding_debt() && t.customer() == customer));

        self.persist()?;
        Ok(total)
    }

    fn persist(&self) -> Result<()> {
        self.storage
            .save(&self.inventory, &self.transactions)
            .context("Unable to persist the ledger")
    }
}
