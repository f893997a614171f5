use std::convert::From;

use rust_decimal::Decimal;

use crate::account::Account;
use crate::error::AtmError;
use crate::transaction::{LedgerEntry, Transact};

/// Access to an [Account] gated by its PIN.
///
/// A `Session<false>` is locked: the only thing it can do is attempt to [unlock](Session::unlock).
/// Balance, history and transactions are only reachable through a `Session<true>`.
#[derive(Debug)]
pub struct Session<const IS_UNLOCKED: bool> {
    account: Account,
}

impl<const IS_UNLOCKED: bool> Session<IS_UNLOCKED> {
    #[must_use]
    pub fn into_account(self) -> Account {
        self.account
    }
}

impl From<Session<true>> for Session<false> {
    fn from(session: Session<true>) -> Self {
        Session {
            account: session.account,
        }
    }
}

impl Session<false> {
    #[must_use]
    pub fn new(account: Account) -> Self {
        Session { account }
    }

    /// # Errors
    /// Hands the locked session back when `candidate` is not the account's PIN
    pub fn unlock(self, candidate: u32) -> Result<Session<true>, Session<false>> {
        if self.account.verify_pin(candidate) {
            Ok(Session {
                account: self.account,
            })
        } else {
            Err(self)
        }
    }
}

impl Session<true> {
    #[must_use]
    pub fn balance(&self) -> Decimal {
        self.account.balance()
    }

    #[must_use]
    pub fn history(&self) -> &[LedgerEntry] {
        self.account.history()
    }

    #[must_use]
    pub fn history_report(&self) -> String {
        self.account.history_report()
    }
}

impl Transact for Session<true> {
    fn deposit(&mut self, amount: Decimal) -> Result<Decimal, AtmError> {
        self.account.deposit(amount)
    }

    fn withdraw(&mut self, amount: Decimal) -> Result<Decimal, AtmError> {
        self.account.withdraw(amount)
    }
}

impl Transact for Session<false> {
    fn deposit(&mut self, _amount: Decimal) -> Result<Decimal, AtmError> {
        Err(AtmError::Locked)
    }

    fn withdraw(&mut self, _amount: Decimal) -> Result<Decimal, AtmError> {
        Err(AtmError::Locked)
    }
}
