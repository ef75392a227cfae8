//! These structs provide the CLI interface for the shopbook CLI.

use crate::model::PaymentMode;
use crate::Amount;
use clap::{Parser, Subcommand};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

/// shopbook: bookkeeping for a small retail shop.
///
/// The program keeps an inventory of stocked items and a ledger of
/// purchase, sale and debt transactions in two CSV files, and derives the
/// shop's financial picture from them: total sales, expenses, gross profit,
/// net capital and outstanding customer debt.
///
/// Run `shopbook init` once to create the data directory, then record
/// purchases with `shopbook item add`, sales with `shopbook sale record`,
/// and read the books with `shopbook report`.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(common: Common, command: Command) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create the data directory and initialize the configuration file.
    ///
    /// This is the first command you should run. Decide what directory you
    /// want to keep the books in and pass it as --home (default:
    /// $HOME/shopbook), and state the capital the business is starting
    /// with. The initial capital is fixed from then on; net capital and
    /// capital variation are computed against it.
    Init(InitArgs),

    /// Manage inventory: stock items in, delete them, list stock levels.
    Item(ItemArgs),

    /// Record sales.
    Sale(SaleArgs),

    /// Inspect the transaction log or delete a transaction by index.
    Txn(TxnArgs),

    /// Track and settle customer debt.
    Debt(DebtArgs),

    /// Financial reports: headline figures and daily series.
    Report(ReportArgs),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The directory where shopbook data and configuration is held.
    /// Defaults to ~/shopbook
    #[arg(long, env = "SHOPBOOK_HOME", default_value_t = default_home())]
    home: DisplayPath,
}

impl Common {
    pub fn new(log_level: LevelFilter, home: PathBuf) -> Self {
        Self {
            log_level,
            home: home.into(),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn home(&self) -> &DisplayPath {
        &self.home
    }
}

/// Args for the `shopbook init` command.
#[derive(Debug, Parser, Clone)]
pub struct InitArgs {
    /// The capital the business starts with, e.g. 20000.
    #[arg(long, default_value = "20000")]
    initial_capital: Amount,
}

impl InitArgs {
    pub fn new(initial_capital: Amount) -> Self {
        Self { initial_capital }
    }

    pub fn initial_capital(&self) -> Amount {
        self.initial_capital
    }
}

#[derive(Debug, Parser, Clone)]
pub struct ItemArgs {
    #[command(subcommand)]
    command: ItemSubcommand,
}

impl ItemArgs {
    pub fn command(&self) -> &ItemSubcommand {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum ItemSubcommand {
    /// Stock an item in. Creates the item on first purchase, restocks it on
    /// subsequent purchases, and always records a Purchase transaction
    /// carrying the total cost as an expense.
    Add(ItemAddArgs),

    /// Delete an item and its Purchase transactions.
    ///
    /// This is destructive rather than a reversal: stock history is erased,
    /// and Sale transactions that reference the item name are kept.
    Delete(ItemDeleteArgs),

    /// List the inventory, optionally only items running low on stock.
    List(ItemListArgs),
}

/// Args for `shopbook item add`.
#[derive(Debug, Parser, Clone)]
pub struct ItemAddArgs {
    /// The item name. Must not be blank; this is the unique key the ledger
    /// tracks the item by.
    name: String,

    /// The total amount paid for this purchase, e.g. 100 for 20 units
    /// bought at 5 each.
    #[arg(long)]
    cost: Amount,

    /// The number of units purchased.
    #[arg(long)]
    units: i64,
}

impl ItemAddArgs {
    pub fn new(name: impl Into<String>, cost: Amount, units: i64) -> Self {
        Self {
            name: name.into(),
            cost,
            units,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cost(&self) -> Amount {
        self.cost
    }

    pub fn units(&self) -> i64 {
        self.units
    }
}

/// Args for `shopbook item delete`.
#[derive(Debug, Parser, Clone)]
pub struct ItemDeleteArgs {
    /// The name of the item to delete.
    name: String,
}

impl ItemDeleteArgs {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Args for `shopbook item list`.
#[derive(Debug, Parser, Clone)]
pub struct ItemListArgs {
    /// Only show items whose stock has fallen below the threshold.
    #[arg(long)]
    low_stock: bool,

    /// The low-stock threshold.
    #[arg(long, default_value_t = crate::metrics::DEFAULT_LOW_STOCK_THRESHOLD)]
    threshold: i64,
}

impl ItemListArgs {
    pub fn new(low_stock: bool, threshold: i64) -> Self {
        Self {
            low_stock,
            threshold,
        }
    }

    pub fn low_stock(&self) -> bool {
        self.low_stock
    }

    pub fn threshold(&self) -> i64 {
        self.threshold
    }
}

#[derive(Debug, Parser, Clone)]
pub struct SaleArgs {
    #[command(subcommand)]
    command: SaleSubcommand,
}

impl SaleArgs {
    pub fn command(&self) -> &SaleSubcommand {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum SaleSubcommand {
    /// Record a sale. Stock is decremented unconditionally, even below
    /// zero; a sale recorded with --payment debt stays out of realized
    /// revenue until the customer's debt is cleared.
    Record(SaleRecordArgs),
}

/// Args for `shopbook sale record`.
#[derive(Debug, Parser, Clone)]
pub struct SaleRecordArgs {
    /// The name of the item sold.
    item: String,

    /// The number of units sold.
    #[arg(long)]
    quantity: i64,

    /// The price per unit.
    #[arg(long)]
    price: Amount,

    /// The customer's name.
    #[arg(long, default_value = "")]
    customer: String,

    /// How the sale was paid for.
    #[arg(long, value_enum)]
    payment: PaymentMode,
}

impl SaleRecordArgs {
    pub fn new(
        item: impl Into<String>,
        quantity: i64,
        price: Amount,
        customer: impl Into<String>,
        payment: PaymentMode,
    ) -> Self {
        Self {
            item: item.into(),
            quantity,
            price,
            customer: customer.into(),
            payment,
        }
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
}

#[derive(Debug, Parser, Clone)]
pub struct TxnArgs {
    #[command(subcommand)]
    command: TxnSubcommand,
}

impl TxnArgs {
    pub fn command(&self) -> &TxnSubcommand {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum TxnSubcommand {
    /// List all transactions with their indexes.
    List,

    /// Delete the transaction at an index (as shown by `txn list`) and
    /// reverse its stock effect: a deleted sale restores stock, a deleted
    /// purchase removes it.
    Delete(TxnDeleteArgs),
}

/// Args for `shopbook txn delete`.
#[derive(Debug, Parser, Clone)]
pub struct TxnDeleteArgs {
    /// The zero-based index of the transaction to delete.
    index: usize,
}

impl TxnDeleteArgs {
    pub fn new(index: usize) -> Self {
        Self { index }
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

#[derive(Debug, Parser, Clone)]
pub struct DebtArgs {
    #[command(subcommand)]
    command: DebtSubcommand,
}

impl DebtArgs {
    pub fn command(&self) -> &DebtSubcommand {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum DebtSubcommand {
    /// List debtors and their outstanding amounts.
    List(DebtListArgs),

    /// Settle all of a customer's outstanding debt sales as one debt
    /// payment. The individual debt rows are replaced by a single
    /// aggregate row; only the monetary total survives.
    Clear(DebtClearArgs),
}

/// Args for `shopbook debt list`.
#[derive(Debug, Parser, Clone)]
pub struct DebtListArgs {
    /// Only show this customer's outstanding debt.
    #[arg(long)]
    customer: Option<String>,
}

impl DebtListArgs {
    pub fn new(customer: Option<String>) -> Self {
        Self { customer }
    }

    pub fn customer(&self) -> Option<&str> {
        self.customer.as_deref()
    }
}

/// Args for `shopbook debt clear`.
#[derive(Debug, Parser, Clone)]
pub struct DebtClearArgs {
    /// The customer whose debt is being settled.
    customer: String,
}

impl DebtClearArgs {
    pub fn new(customer: impl Into<String>) -> Self {
        Self {
            customer: customer.into(),
        }
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }
}

#[derive(Debug, Parser, Clone)]
pub struct ReportArgs {
    #[command(subcommand)]
    command: ReportSubcommand,
}

impl ReportArgs {
    pub fn command(&self) -> &ReportSubcommand {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum ReportSubcommand {
    /// The headline figures: total sales, expenses, gross profit, net
    /// capital and capital variation.
    Summary,

    /// Daily sales, expense and debt-accumulation series.
    Daily,
}

fn default_home() -> DisplayPath {
    DisplayPath(match dirs::home_dir() {
        Some(home) => home.join("shopbook"),
        None => {
            error!(
                "There was an error when trying to get your home directory. You can get around \
                this by providing --home or SHOPBOOK_HOME instead of relying on the default \
                shopbook home directory. If you continue using the program right now, you may \
                have problems!",
            );
            PathBuf::from("shopbook")
        }
    })
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl From<PathBuf> for DisplayPath {
    fn from(value: PathBuf) -> Self {
        DisplayPath(value)
    }
}

impl Deref for DisplayPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for DisplayPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn new(path: PathBuf) -> Self {
        Self(path)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_item_add() {
        let args = Args::try_parse_from([
            "shopbook", "item", "add", "Widget", "--cost", "100", "--units", "20",
        ])
        .unwrap();
        match args.command() {
            Command::Item(item) => match item.command() {
                ItemSubcommand::Add(add) => {
                    assert_eq!(add.name(), "Widget");
                    assert_eq!(add.cost(), Amount::from(100));
                    assert_eq!(add.units(), 20);
                }
                other => panic!("expected item add, got {other:?}"),
            },
            other => panic!("expected item command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_sale_record() {
        let args = Args::try_parse_from([
            "shopbook", "sale", "record", "Widget", "--quantity", "5", "--price", "10",
            "--customer", "Alice", "--payment", "debt",
        ])
        .unwrap();
        match args.command() {
            Command::Sale(sale) => {
                let SaleSubcommand::Record(record) = sale.command();
                assert_eq!(record.item(), "Widget");
                assert_eq!(record.quantity(), 5);
                assert_eq!(record.payment(), PaymentMode::Debt);
            }
            other => panic!("expected sale command, got {other:?}"),
        }
    }

    #[test]
    fn test_payment_mode_unspecified_not_accepted() {
        // Purchases persist an empty payment mode, but the CLI only accepts
        // the three real modes.
        let result = Args::try_parse_from([
            "shopbook", "sale", "record", "Widget", "--quantity", "1", "--price", "10",
            "--payment", "unspecified",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_report_and_home_flag() {
        let args =
            Args::try_parse_from(["shopbook", "--home", "/tmp/books", "report", "summary"])
                .unwrap();
        assert_eq!(args.common().home().path(), Path::new("/tmp/books"));
        assert!(matches!(
            args.command(),
            Command::Report(r) if matches!(r.command(), ReportSubcommand::Summary)
        ));
    }
}
