use checkout::application::checkout::{pay_by_credit, run_checkout};
use checkout::interfaces::receipt_writer::{ReceiptFormat, ReceiptWriter};
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Also settle the order with a credit card after the wallet payment
    #[arg(long)]
    with_credit: bool,

    /// Print the settled order after the total
    #[arg(long, value_enum)]
    receipt: Option<ReceiptFormat>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    // The total is printed before any payment runs.
    let mut order = run_checkout(&mut io::stdout()).into_diagnostic()?;
    if cli.with_credit {
        pay_by_credit(&mut order).into_diagnostic()?;
    }
    info!(status = %order.status(), "checkout finished");

    if let Some(format) = cli.receipt {
        let stdout = io::stdout();
        let mut writer = ReceiptWriter::new(stdout.lock());
        writer.write_receipt(&order, format).into_diagnostic()?;
    }

    Ok(())
}
