use crate::Amount;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of a ledger row.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum TxnKind {
    /// Stock bought into inventory. The purchase cost lives in `expense`.
    Purchase,
    /// Stock sold to a customer at a unit price.
    #[default]
    Sale,
    /// Settlement of a customer's accumulated debt sales as one aggregate
    /// amount.
    #[serde(rename = "Debt Payment")]
    DebtPayment,
}

serde_plain::derive_display_from_serialize!(TxnKind);
serde_plain::derive_fromstr_from_deserialize!(TxnKind);

/// How a sale was paid for.
#[derive(
    Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum PaymentMode {
    Full,
    Partial,
    /// The customer owes the amount; the sale is excluded from realized
    /// revenue until the debt is cleared.
    Debt,
    /// Not a sale (purchases persist an empty payment mode column).
    #[serde(rename = "")]
    #[default]
    #[value(skip)]
    Unspecified,
}

serde_plain::derive_display_from_serialize!(PaymentMode);
serde_plain::derive_fromstr_from_deserialize!(PaymentMode);

/// A single ledger row.
///
/// The serde renames match the column headers of `transactions.csv`. Note
/// that for `Purchase` rows the `price` field is vestigial: it is always
/// zero, and the actual purchase cost is carried by `expense`. Both fields
/// are kept, with their distinct roles, for compatibility with existing
/// data files.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "Date")]
    date: DateTime<Utc>,

    #[serde(rename = "Type")]
    kind: TxnKind,

    #[serde(rename = "Item")]
    item: String,

    #[serde(rename = "Quantity")]
    quantity: i64,

    /// Unit price for sales, the cleared total for debt payments, always
    /// zero for purchases.
    #[serde(rename = "Price")]
    price: Amount,

    #[serde(rename = "Customer Name")]
    customer: String,

    #[serde(rename = "Payment Mode")]
    payment: PaymentMode,

    /// Non-zero only for purchases.
    #[serde(rename = "Expense")]
    expense: Amount,
}

/// The item name recorded on debt payment rows, which reference no real
/// inventory item.
pub(crate) const DEBT_PAYMENT_ITEM: &str = "Debt Payment";

impl Transaction {
    /// A purchase row: `units` added to stock at a total cost of `expense`.
    pub fn purchase(item: impl Into<String>, units: i64, expense: Amount) -> Self {
        Self {
            date: Utc::now(),
            kind: TxnKind::Purchase,
            item: item.into(),
            quantity: units,
            price: Amount::ZERO,
            customer: String::new(),
            payment: PaymentMode::Unspecified,
            expense,
        }
    }

    /// A sale row: `quantity` units at `price` each.
    pub fn sale(
        item: impl Into<String>,
        quantity: i64,
        price: Amount,
        customer: impl Into<String>,
        payment: PaymentMode,
    ) -> Self {
        Self {
            date: Utc::now(),
            kind: TxnKind::Sale,
            item: item.into(),
            quantity,
            price,
            customer: customer.into(),
            payment,
            expense: Amount::ZERO,
        }
    }

    /// A debt payment row settling `total` for `customer`. Quantity is 1 by
    /// convention so that `quantity * price` equals the settled amount.
    pub fn debt_payment(customer: impl Into<String>, total: Amount) -> Self {
        Self {
            date: Utc::now(),
            kind: TxnKind::DebtPayment,
            item: DEBT_PAYMENT_ITEM.to_string(),
            quantity: 1,
            price: total,
            customer: customer.into(),
            payment: PaymentMode::Full,
            expense: Amount::ZERO,
        }
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn kind(&self) -> TxnKind {
        self.kind
    }

    pub fn item(&self) -> &str {
        &self.item
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn price(&self) -> Amount {
        self.price
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn payment(&self) -> PaymentMode {
        self.payment
    }

    pub fn expense(&self) -> Amount {
        self.expense
    }

    /// `quantity * price` for this row.
    pub fn line_total(&self) -> Amount {
        self.price.times(self.quantity)
    }

    /// True for a sale that has not been paid for yet.
    pub fn is_outstanding_debt(&self) -> bool {
        self.kind == TxnKind::Sale && self.payment == PaymentMode::Debt
    }

    #[cfg(test)]
    pub(crate) fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }
}
