use std::convert::TryFrom;
use std::fmt;

use rust_decimal::prelude::*;
use serde::Serialize;

use crate::error::AtmError;

/// Currency values are shown with at least this many decimal places
pub const CURRENCY_SCALE: u32 = 2;

/// Pads `decimal` to at least [`CURRENCY_SCALE`] places so whole amounts render as `500.00`.
/// Finer amounts keep their own scale.
pub(crate) fn to_currency(mut decimal: Decimal) -> Decimal {
    if decimal.scale() < CURRENCY_SCALE {
        decimal.rescale(CURRENCY_SCALE);
    }
    decimal
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Deposit,
    Withdrawal,
}

/// A strictly positive amount of money
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(Decimal);

/// One completed deposit or withdrawal in an [Account](crate::account::Account)'s history
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct LedgerEntry {
    #[serde(rename = "type")]
    kind: EntryKind,
    amount: Amount,
}

pub trait Transact {
    /// Returns the balance after the deposit.
    ///
    /// # Errors
    /// Errors when `amount` is not positive, or when the new balance cannot be
    /// represented exactly
    fn deposit(&mut self, amount: Decimal) -> Result<Decimal, AtmError>;

    /// Returns the balance after the withdrawal.
    ///
    /// # Errors
    /// Errors when `amount` is not positive, or when it is greater than the
    /// current balance
    fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, AtmError>;
}

impl TryFrom<Decimal> for Amount {
    type Error = AtmError;
    fn try_from(decimal: Decimal) -> Result<Self, Self::Error> {
        if decimal > Decimal::ZERO {
            Ok(Amount(to_currency(decimal)))
        } else {
            Err(AtmError::InvalidAmount)
        }
    }
}

impl Amount {
    #[must_use]
    pub fn value(self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Deposit => f.write_str("Deposit"),
            EntryKind::Withdrawal => f.write_str("Withdrawal"),
        }
    }
}

impl LedgerEntry {
    pub(crate) fn new(kind: EntryKind, amount: Amount) -> Self {
        LedgerEntry { kind, amount }
    }

    #[must_use]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    #[must_use]
    pub fn amount(&self) -> Amount {
        self.amount
    }
}

impl fmt::Display for LedgerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of ${}", self.kind, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_try_from() {
        assert!(Amount::try_from(Decimal::new(-1111, 3)).is_err());
        assert!(Amount::try_from(Decimal::ZERO).is_err());
        assert!(Amount::try_from(Decimal::new(-500, 0)).is_err());

        let amount = Amount::try_from(Decimal::new(1050, 2)).unwrap();
        assert_eq!(amount.value(), Decimal::new(1050, 2));

        // sub-cent amounts are kept exactly
        let amount = Amount::try_from(Decimal::new(1001, 3)).unwrap();
        assert_eq!(amount.value(), Decimal::new(1001, 3));
        let amount = Amount::try_from(Decimal::new(1, 28)).unwrap();
        assert_eq!(amount.value(), Decimal::new(1, 28));
    }

    #[test]
    fn test_amount_display() {
        let amount = Amount::try_from(Decimal::from(500)).unwrap();
        assert_eq!(amount.to_string(), "500.00");
        let amount = Amount::try_from(Decimal::new(25, 1)).unwrap();
        assert_eq!(amount.to_string(), "2.50");
        let amount = Amount::try_from(Decimal::new(5, 3)).unwrap();
        assert_eq!(amount.to_string(), "0.005");
    }

    #[test]
    fn test_ledger_entry_display() {
        let amount = Amount::try_from(Decimal::from(500)).unwrap();
        let entry = LedgerEntry::new(EntryKind::Deposit, amount);
        assert_eq!(entry.to_string(), "Deposit of $500.00");
        assert_eq!(entry.kind(), EntryKind::Deposit);
        assert_eq!(entry.amount(), amount);

        let amount = Amount::try_from(Decimal::new(100_075, 2)).unwrap();
        let entry = LedgerEntry::new(EntryKind::Withdrawal, amount);
        assert_eq!(entry.to_string(), "Withdrawal of $1000.75");
    }
}
