use crate::args::SaleRecordArgs;
use crate::commands::{open_ledger, Out};
use crate::model::PaymentMode;
use crate::{Config, Result};

/// Records a sale and decrements the stock level.
pub fn sale_record(config: &Config, args: &SaleRecordArgs) -> Result<Out<()>> {
    let mut ledger = open_ledger(config)?;
    let remaining = ledger.record_sale(
        args.item(),
        args.quantity(),
        args.price(),
        args.customer(),
        args.payment(),
    )?;

    let total = args.price().times(args.quantity());
    let mut message = format!(
        "Sold {} unit(s) of '{}' for {}; {} left in stock",
        args.quantity(),
        args.item(),
        total.grouped(),
        remaining,
    );
    if args.payment() == PaymentMode::Debt {
        message.push_str(&format!(
            " ('{}' owes this amount until the debt is cleared)",
            args.customer()
        ));
    }
    Ok(Out::new_message(message))
}
