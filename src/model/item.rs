use crate::Amount;
use serde::{Deserialize, Serialize};

/// A single stocked item.
///
/// The `name` is the unique key; transactions reference it by value rather
/// than through an enforced foreign key. `quantity` is conceptually
/// non-negative but the ledger does not guard sales against overselling, so
/// negative stock is representable.
///
/// The serde renames match the column headers of `inventory.csv`.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(rename = "Item")]
    name: String,

    #[serde(rename = "Quantity")]
    quantity: i64,

    #[serde(rename = "Cost Per Unit")]
    cost_per_unit: Amount,

    #[serde(rename = "Selling Price")]
    selling_price: Amount,
}

impl InventoryItem {
    /// Creates a freshly stocked item. The selling price starts at zero and
    /// is not set by any purchase.
    pub fn new(name: impl Into<String>, quantity: i64, cost_per_unit: Amount) -> Self {
        Self {
            name: name.into(),
            quantity,
            cost_per_unit,
            selling_price: Amount::ZERO,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn cost_per_unit(&self) -> Amount {
        self.cost_per_unit
    }

    pub fn selling_price(&self) -> Amount {
        self.selling_price
    }

    /// Adjusts the stock level by `delta`, which may be negative.
    pub(crate) fn adjust_quantity(&mut self, delta: i64) {
        self.quantity += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_new_item_has_zero_selling_price() {
        let item = InventoryItem::new("Widget", 20, Amount::from_str("5").unwrap());
        assert_eq!(item.name(), "Widget");
        assert_eq!(item.quantity(), 20);
        assert!(item.selling_price().is_zero());
    }

    #[test]
    fn test_adjust_quantity_can_go_negative() {
        let mut item = InventoryItem::new("Widget", 2, Amount::ZERO);
        item.adjust_quantity(-5);
        assert_eq!(item.quantity(), -3);
    }

    #[test]
    fn test_csv_headers() {
        let item = InventoryItem::new("Widget", 20, Amount::from(5));
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(&item).unwrap();
        let bytes = writer.into_inner().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("Item,Quantity,Cost Per Unit,Selling Price\n"));
    }
}
