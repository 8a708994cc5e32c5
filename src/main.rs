use anyhow::Result;
use clap::Parser;

use till_audit::cli::{handle_command, Commands};
use till_audit::config::{AuditPaths, Settings};
use till_audit::storage::Storage;

#[derive(Parser)]
#[command(
    name = "till",
    version,
    about = "Terminal-based cash register audit ledger",
    long_about = "till-audit records cash register reconciliation events: the cash \
                  physically counted at a checkout terminal versus the total reported \
                  by the electronic-payment (TEF) channel. Each audit is classified as \
                  a shortage, an overage, or balanced, and the history can be filtered \
                  by date, exported to a spreadsheet, and pruned."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = AuditPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths)?;
    storage.load_all()?;

    handle_command(&storage, &settings, cli.command)?;
    Ok(())
}
