use std::fmt;
use std::str::FromStr;

use log::{info, warn};
use rust_decimal::Decimal;

use atm_core::account::Account;
use atm_core::error::AtmError;
use atm_core::session::Session;
use atm_core::transaction::{EntryKind, Transact};

use crate::error::ShellError;

const TITLE: &str = "ATM Interface";

/// Amounts typed at the ATM are whole cents
const MAX_FRACTION_DIGITS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    EnterPin,
    CheckBalance,
    Deposit,
    Withdraw,
    History,
    Exit,
}

const LOCKED_ACTIONS: &[Action] = &[Action::EnterPin, Action::Exit];
const UNLOCKED_ACTIONS: &[Action] = &[
    Action::CheckBalance,
    Action::Deposit,
    Action::Withdraw,
    Action::History,
    Action::Exit,
];

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Action::EnterPin => "Enter PIN",
            Action::CheckBalance => "Check Balance",
            Action::Deposit => "Deposit Funds",
            Action::Withdraw => "Withdraw Funds",
            Action::History => "View Transaction History",
            Action::Exit => "Exit",
        };
        f.write_str(label)
    }
}

/// Collects input from the user and shows them results
pub trait Prompt {
    /// Returns `None` when the user backs out of the menu
    fn select(&mut self, title: &str, actions: &[Action]) -> Result<Option<Action>, ShellError>;

    /// Returns `None` when the user cancels the entry. Submitted text, even empty, is `Some`.
    fn input(&mut self, message: &str, secret: bool) -> Result<Option<String>, ShellError>;

    fn notify(&mut self, message: &str) -> Result<(), ShellError>;
}

pub struct Shell<P: Prompt> {
    prompt: P,
}

/// PINs are digits only, no sign or whitespace inside
fn parse_pin(text: &str) -> Option<u32> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Plain decimal text: an optional sign, digits, then optionally `.` and up to two digits
fn parse_amount(text: &str) -> Option<Decimal> {
    let text = text.trim();
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((_, "")) => return None,
        Some((whole, fraction)) => (whole, fraction),
        None => (unsigned, ""),
    };
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if whole.is_empty()
        || !all_digits(whole)
        || !all_digits(fraction)
        || fraction.len() > MAX_FRACTION_DIGITS
    {
        return None;
    }
    let amount = Decimal::from_str(unsigned).ok()?;
    Some(if negative { -amount } else { amount })
}

impl<P: Prompt> Shell<P> {
    pub fn new(prompt: P) -> Self {
        Shell { prompt }
    }

    /// Runs the ATM until the user exits, then hands the account back.
    pub fn run(&mut self, account: Account) -> Result<Account, ShellError> {
        let mut session = Session::new(account);
        loop {
            match self.prompt.select(TITLE, LOCKED_ACTIONS)? {
                Some(Action::EnterPin) => {
                    let pin = match self.prompt.input("Enter your PIN", true)? {
                        Some(text) => parse_pin(&text),
                        None => continue,
                    };
                    let pin = match pin {
                        Some(pin) => pin,
                        None => {
                            self.prompt
                                .notify("Invalid PIN format. Please enter numeric digits.")?;
                            continue;
                        }
                    };
                    session = match session.unlock(pin) {
                        Ok(unlocked) => {
                            info!("Session unlocked");
                            return self.serve(unlocked);
                        }
                        Err(locked) => {
                            warn!("Rejected PIN attempt");
                            self.prompt.notify("Incorrect PIN. Please try again.")?;
                            locked
                        }
                    };
                }
                _ => return self.exit(session),
            }
        }
    }

    fn serve(&mut self, mut session: Session<true>) -> Result<Account, ShellError> {
        loop {
            match self.prompt.select(TITLE, UNLOCKED_ACTIONS)? {
                Some(Action::CheckBalance) => {
                    let message = format!("Your account balance: ${}", session.balance());
                    self.prompt.notify(&message)?;
                }
                Some(Action::Deposit) => self.transact(&mut session, EntryKind::Deposit)?,
                Some(Action::Withdraw) => self.transact(&mut session, EntryKind::Withdrawal)?,
                Some(Action::History) => self.prompt.notify(&session.history_report())?,
                _ => return self.exit(session),
            }
        }
    }

    fn transact(&mut self, session: &mut Session<true>, kind: EntryKind) -> Result<(), ShellError> {
        let label = kind.to_string().to_lowercase();
        let text = match self
            .prompt
            .input(&format!("Enter the {} amount", label), false)?
        {
            Some(text) => text,
            None => return Ok(()),
        };
        let amount = match parse_amount(&text) {
            Some(amount) => amount,
            None => {
                return self
                    .prompt
                    .notify("Invalid amount format. Please enter a numeric value.")
            }
        };

        let res = match kind {
            EntryKind::Deposit => session.deposit(amount),
            EntryKind::Withdrawal => session.withdraw(amount),
        };
        match res {
            Ok(balance) => self
                .prompt
                .notify(&format!("{} successful. New balance: ${}", kind, balance)),
            Err(AtmError::InvalidAmount) => {
                warn!("Rejected {} of {}", label, amount);
                self.prompt.notify(&format!("Invalid {} amount.", label))
            }
            Err(AtmError::InsufficientFunds) => {
                warn!("Rejected {} of {}: insufficient funds", label, amount);
                self.prompt.notify("Insufficient balance.")
            }
            Err(AtmError::Overflow) => {
                warn!("Rejected {} of {}: balance overflow", label, amount);
                self.prompt.notify(&format!("The {} amount is too large.", label))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn exit<const IS_UNLOCKED: bool>(
        &mut self,
        session: Session<IS_UNLOCKED>,
    ) -> Result<Account, ShellError> {
        self.prompt.notify("Thank you for using the ATM!")?;
        Ok(session.into_account())
    }
}
