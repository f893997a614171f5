use std::error::Error;
use std::fs::File;
use std::path::PathBuf;

use clap::Parser;
use log::info;
use rust_decimal::Decimal;

use atm_core::account::{Account, Pin};

mod error;
mod shell;
mod terminal;

use shell::Shell;
use terminal::TerminalPrompt;

/// A single-account ATM simulator
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// The PIN of the account
    #[clap(long, default_value_t = 2728)]
    pub(crate) pin: u32,
    /// The opening balance of the account
    #[clap(long, default_value = "2000.00")]
    pub(crate) initial_balance: Decimal,
    /// Write the session's transactions to this file as CSV on exit
    #[clap(long)]
    pub(crate) statement: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let account = Account::new(cli.initial_balance, Pin::new(cli.pin)?)?;
    let mut shell = Shell::new(TerminalPrompt);
    let account = shell.run(account)?;

    if let Some(path) = cli.statement {
        account.write_statement(File::create(&path)?)?;
        info!("Wrote statement to {}", path.display());
    }

    Ok(())
}
