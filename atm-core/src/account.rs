use std::io;

use csv::WriterBuilder;
use log::debug;
use rust_decimal::Decimal;

use crate::error::AtmError;
use crate::transaction::{to_currency, Amount, EntryKind, LedgerEntry, Transact};

/// Number of digits in a [Pin]
pub const PIN_LENGTH: u32 = 4;

/// Numeric credential of an [Account], fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin(u32);

/// Money held by an [Account]. Never negative.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Balance(Decimal);

#[derive(Debug)]
pub struct Account {
    pub(crate) balance: Balance,
    pin: Pin,
    pub(crate) history: Vec<LedgerEntry>,
}

impl Pin {
    /// # Errors
    /// Errors when `value` has more than [`PIN_LENGTH`] digits
    pub fn new(value: u32) -> Result<Self, AtmError> {
        if value < 10_u32.pow(PIN_LENGTH) {
            Ok(Pin(value))
        } else {
            Err(AtmError::MalformedPin)
        }
    }
}

impl Balance {
    pub(crate) fn new(decimal: Decimal) -> Result<Self, AtmError> {
        if decimal < Decimal::ZERO {
            return Err(AtmError::InvalidAmount);
        }
        Ok(Balance(to_currency(decimal)))
    }

    pub(crate) fn value(self) -> Decimal {
        self.0
    }

    /// Keeps `result` only if no digits were rounded away. `Decimal` arithmetic drops
    /// scale instead of failing when the exact value needs more than 28 digits.
    fn exact(self, result: Option<Decimal>, amount: Amount) -> Result<Balance, AtmError> {
        let scale = self.0.scale().max(amount.value().scale());
        result
            .filter(|r| r.scale() == scale)
            .map(Balance)
            .ok_or(AtmError::Overflow)
    }

    pub(crate) fn checked_add(self, amount: Amount) -> Result<Balance, AtmError> {
        self.exact(self.0.checked_add(amount.value()), amount)
    }

    /// Errors when `amount` is > `self`, since the balance would become negative
    pub(crate) fn checked_sub(self, amount: Amount) -> Result<Balance, AtmError> {
        if self.0 >= amount.value() {
            self.exact(self.0.checked_sub(amount.value()), amount)
        } else {
            Err(AtmError::InsufficientFunds)
        }
    }
}

impl Account {
    /// # Errors
    /// Errors when `initial_balance` is negative
    pub fn new(initial_balance: Decimal, pin: Pin) -> Result<Self, AtmError> {
        Ok(Account {
            balance: Balance::new(initial_balance)?,
            pin,
            history: Vec::new(),
        })
    }

    #[must_use]
    pub fn verify_pin(&self, candidate: u32) -> bool {
        self.pin.0 == candidate
    }

    #[must_use]
    pub fn balance(&self) -> Decimal {
        self.balance.value()
    }

    /// Completed transactions, oldest first
    #[must_use]
    pub fn history(&self) -> &[LedgerEntry] {
        &self.history
    }

    #[must_use]
    pub fn history_report(&self) -> String {
        let mut report = String::from("Transaction History:\n");
        for entry in &self.history {
            report.push_str(&entry.to_string());
            report.push('\n');
        }
        report
    }

    /// Writes the history as CSV with a `type,amount` header. Nothing is written
    /// for an empty history.
    ///
    /// # Errors
    /// Errors when the underlying writer fails
    pub fn write_statement<W: io::Write>(&self, writer: W) -> Result<(), AtmError> {
        let mut writer = WriterBuilder::new().from_writer(writer);
        for entry in &self.history {
            writer.serialize(entry)?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl Transact for Account {
    fn deposit(&mut self, amount: Decimal) -> Result<Decimal, AtmError> {
        let amount = Amount::try_from(amount)?;
        self.balance = self.balance.checked_add(amount)?;
        self.history
            .push(LedgerEntry::new(EntryKind::Deposit, amount));
        debug!("Deposited {}, balance is now {}", amount, self.balance.value());
        Ok(self.balance.value())
    }

    fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, AtmError> {
        let amount = Amount::try_from(amount)?;
        self.balance = self.balance.checked_sub(amount)?;
        self.history
            .push(LedgerEntry::new(EntryKind::Withdrawal, amount));
        debug!("Withdrew {}, balance is now {}", amount, self.balance.value());
        Ok(self.balance.value())
    }
}
