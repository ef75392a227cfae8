use crate::args::{ItemAddArgs, ItemDeleteArgs, ItemListArgs};
use crate::commands::{open_ledger, Out};
use crate::metrics;
use crate::model::InventoryItem;
use crate::{Config, Result};

/// Stocks an item in, creating it on first purchase.
pub fn item_add(config: &Config, args: &ItemAddArgs) -> Result<Out<()>> {
    let mut ledger = open_ledger(config)?;
    let quantity = ledger.add_or_restock(args.name(), args.cost(), args.units())?;
    Ok(Out::new_message(format!(
        "Stocked {} unit(s) of '{}' for {}; now {} in stock",
        args.units(),
        args.name(),
        args.cost().grouped(),
        quantity,
    )))
}

/// Deletes an item along with its purchase history.
pub fn item_delete(config: &Config, args: &ItemDeleteArgs) -> Result<Out<()>> {
    let mut ledger = open_ledger(config)?;
    let cascaded = ledger.delete_item(args.name())?;
    Ok(Out::new_message(format!(
        "Deleted '{}' and {} purchase transaction(s)",
        args.name(),
        cascaded,
    )))
}

/// Lists the inventory, or just the low-stock items.
pub fn item_list(config: &Config, args: &ItemListArgs) -> Result<Out<Vec<InventoryItem>>> {
    let ledger = open_ledger(config)?;

    let items: Vec<InventoryItem> = if args.low_stock() {
        metrics::low_stock_items(ledger.inventory(), args.threshold())
            .into_iter()
            .cloned()
            .collect()
    } else {
        ledger.inventory().to_vec()
    };

    let mut message = if args.low_stock() {
        format!(
            "{} item(s) below the low-stock threshold of {}",
            items.len(),
            args.threshold()
        )
    } else {
        format!("{} item(s) in stock", items.len())
    };
    for item in &items {
        message.push_str(&format!(
            "\n  {}: {} in stock, cost/unit {}",
            item.name(),
            item.quantity(),
            item.cost_per_unit().grouped(),
        ));
    }

    Ok(Out::new(message, items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Amount;
    use tempfile::TempDir;

    fn test_config(dir: &TempDir) -> Config {
        Config::create(dir.path().join("books"), Amount::from(20000)).unwrap()
    }

    #[test]
    fn test_item_add_then_list() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);

        let out = item_add(&config, &ItemAddArgs::new("Widget", Amount::from(100), 20)).unwrap();
        assert!(out.message().contains("now 20 in stock"));

        let listed = item_list(&config, &ItemListArgs::new(false, 50)).unwrap();
        let items = listed.structure().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name(), "Widget");
    }

    #[test]
    fn test_item_list_low_stock_only() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);
        item_add(&config, &ItemAddArgs::new("Widget", Amount::from(100), 20)).unwrap();
        item_add(&config, &ItemAddArgs::new("Gadget", Amount::from(100), 80)).unwrap();

        let listed = item_list(&config, &ItemListArgs::new(true, 50)).unwrap();
        let items = listed.structure().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name(), "Widget");
    }

    #[test]
    fn test_item_delete() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);
        item_add(&config, &ItemAddArgs::new("Widget", Amount::from(100), 20)).unwrap();

        let out = item_delete(&config, &ItemDeleteArgs::new("Widget")).unwrap();
        assert!(out.message().contains("1 purchase transaction"));

        let listed = item_list(&config, &ItemListArgs::new(false, 50)).unwrap();
        assert!(listed.structure().unwrap().is_empty());
    }
}
