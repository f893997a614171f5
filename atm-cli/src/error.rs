use thiserror::Error;

use atm_core::error::AtmError;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("ATM Error: {0}")]
    Atm(#[from] AtmError),
    #[error("Terminal Error")]
    Terminal(#[from] dialoguer::Error),
}
