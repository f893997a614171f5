use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtmError {
    #[error("CSV Error")]
    CsvError(#[from] csv::Error),
    #[error("I/O Error")]
    IoError(#[from] io::Error),
    #[error("Deposits and withdrawals must be positive amounts")]
    InvalidAmount,
    #[error("Insufficient Funds")]
    InsufficientFunds,
    #[error("The balance would overflow")]
    Overflow,
    #[error("A PIN has at most 4 digits")]
    MalformedPin,
    #[error("The session is locked")]
    Locked,
}
