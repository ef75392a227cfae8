use clap::Parser;
use shopbook::args::{
    Args, Command, DebtSubcommand, ItemSubcommand, ReportSubcommand, SaleSubcommand, TxnSubcommand,
};
use shopbook::{commands, Config, Result};
use std::process::ExitCode;
use tracing::{debug, error, trace};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();
    let log_level = args.common().log_level();
    init_logger(log_level);
    debug!("Log level set to {}", log_level.to_string().to_lowercase());

    match main_inner(args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e}");
            ExitCode::FAILURE
        }
    }
}

pub fn main_inner(args: Args) -> Result<()> {
    trace!("{args:?}");
    let home = args.common().home().path();

    // Route to appropriate command handler
    let _: () = match args.command() {
        Command::Init(init_args) => {
            commands::init(home, init_args.initial_capital())?.print()
        }

        Command::Item(item_args) => {
            let config = Config::load(home)?;
            match item_args.command() {
                ItemSubcommand::Add(args) => commands::item_add(&config, args)?.print(),
                ItemSubcommand::Delete(args) => commands::item_delete(&config, args)?.print(),
                ItemSubcommand::List(args) => commands::item_list(&config, args)?.print(),
            }
        }

        Command::Sale(sale_args) => {
            let config = Config::load(home)?;
            match sale_args.command() {
                SaleSubcommand::Record(args) => commands::sale_record(&config, args)?.print(),
            }
        }

        Command::Txn(txn_args) => {
            let config = Config::load(home)?;
            match txn_args.command() {
                TxnSubcommand::List => commands::txn_list(&config)?.print(),
                TxnSubcommand::Delete(args) => commands::txn_delete(&config, args)?.print(),
            }
        }

        Command::Debt(debt_args) => {
            let config = Config::load(home)?;
            match debt_args.command() {
                DebtSubcommand::List(args) => commands::debt_list(&config, args)?.print(),
                DebtSubcommand::Clear(args) => commands::debt_clear(&config, args)?.print(),
            }
        }

        Command::Report(report_args) => {
            let config = Config::load(home)?;
            match report_args.command() {
                ReportSubcommand::Summary => commands::report_summary(&config)?.print(),
                ReportSubcommand::Daily => commands::report_daily(&config)?.print(),
            }
        }
    };
    Ok(())
}

/// Initializes the tracing subscriber.
pub fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => {
            // RUST_LOG exists; use it.
            EnvFilter::from_default_env()
        }
        None => {
            // RUST_LOG does not exist; use default log level for this crate only.
            EnvFilter::new(format!(
                "{}={},{}={}",
                env!("CARGO_CRATE_NAME"),
                level,
                env!("CARGO_BIN_NAME"),
                level
            ))
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
