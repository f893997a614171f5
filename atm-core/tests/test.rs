use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

use atm_core::account::{Account, Pin};
use atm_core::error::AtmError;
use atm_core::session::Session;
use atm_core::transaction::{EntryKind, Transact};

fn make_account() -> Account {
    Account::new(Decimal::from(2000), Pin::new(2728).unwrap()).unwrap()
}

fn entries(account: &Account) -> Vec<(EntryKind, Decimal)> {
    account
        .history()
        .iter()
        .map(|entry| (entry.kind(), entry.amount().value()))
        .collect()
}

#[test]
fn test_deposit_then_withdraw() {
    let mut account = make_account();
    assert!(account.verify_pin(2728));

    assert_eq!(account.deposit(Decimal::from(500)).unwrap(), Decimal::from(2500));
    assert_eq!(entries(&account), vec![(EntryKind::Deposit, Decimal::from(500))]);

    assert!(account.withdraw(Decimal::from(3000)).is_err());
    assert_eq!(account.balance(), Decimal::from(2500));
    assert_eq!(account.history().len(), 1);

    assert_eq!(account.withdraw(Decimal::from(1000)).unwrap(), Decimal::from(1500));
    assert_eq!(
        entries(&account),
        vec![
            (EntryKind::Deposit, Decimal::from(500)),
            (EntryKind::Withdrawal, Decimal::from(1000)),
        ]
    );
}

#[test]
fn test_wrong_pin() {
    let mut account = make_account();
    account.deposit(Decimal::from(500)).unwrap();
    assert!(!account.verify_pin(1111));
    assert_eq!(account.balance(), Decimal::from(2500));
    assert_eq!(account.history().len(), 1);
}

#[test]
fn test_negative_deposit() {
    let mut account = make_account();
    let res = account.deposit(Decimal::from(-5));
    assert!(matches!(res, Err(AtmError::InvalidAmount)));
    assert_eq!(account.balance(), Decimal::from(2000));
    assert!(account.history().is_empty());
}

#[test]
fn test_sub_cent_deposit() {
    let mut account = make_account();
    let res = account.deposit(Decimal::new(5, 3));
    assert_eq!(res.unwrap(), Decimal::new(2_000_005, 3));
    assert_eq!(entries(&account), vec![(EntryKind::Deposit, Decimal::new(5, 3))]);
}

#[test]
fn test_session_round_trip() {
    let session = Session::new(make_account());
    let session = session.unlock(1111).unwrap_err();
    let mut session = session.unlock(2728).unwrap();
    session.deposit(Decimal::new(1234, 2)).unwrap();
    let account = session.into_account();
    assert_eq!(account.balance(), Decimal::new(201_234, 2));

    let mut out = Vec::new();
    account.write_statement(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "type,amount\ndeposit,12.34\n");
}

#[test]
fn test_random_operations_keep_invariants() {
    let mut rng = StdRng::seed_from_u64(2728);
    let mut account = make_account();
    let mut successes = 0;

    for _ in 0..5_000 {
        // amounts anywhere from whole units down to hundredths of a cent
        let scale = rng.gen_range(0..=4);
        let amount = Decimal::new(rng.gen_range(-500_000_i64..=1_500_000), scale);
        let before = account.balance();
        let len = account.history().len();

        if rng.gen_bool(0.5) {
            match account.deposit(amount) {
                Ok(balance) => {
                    assert!(amount > Decimal::ZERO);
                    assert_eq!(balance, before + amount);
                    let last = account.history().last().unwrap();
                    assert_eq!(last.kind(), EntryKind::Deposit);
                    assert_eq!(last.amount().value(), amount);
                    successes += 1;
                }
                Err(e) => {
                    assert!(amount <= Decimal::ZERO);
                    assert!(matches!(e, AtmError::InvalidAmount));
                    assert_eq!(account.balance(), before);
                    assert_eq!(account.history().len(), len);
                }
            }
        } else {
            match account.withdraw(amount) {
                Ok(balance) => {
                    assert!(amount > Decimal::ZERO && amount <= before);
                    assert_eq!(balance, before - amount);
                    let last = account.history().last().unwrap();
                    assert_eq!(last.kind(), EntryKind::Withdrawal);
                    assert_eq!(last.amount().value(), amount);
                    successes += 1;
                }
                Err(AtmError::InvalidAmount) => {
                    assert!(amount <= Decimal::ZERO);
                    assert_eq!(account.balance(), before);
                    assert_eq!(account.history().len(), len);
                }
                Err(AtmError::InsufficientFunds) => {
                    assert!(amount > before);
                    assert_eq!(account.balance(), before);
                    assert_eq!(account.history().len(), len);
                }
                Err(e) => panic!("unexpected error: {}", e),
            }
        }

        assert!(account.balance() >= Decimal::ZERO);
        assert!(account.verify_pin(2728));
        assert_eq!(account.history().len(), successes);
    }
}
