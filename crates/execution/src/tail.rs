// Path: crates/execution/src/tail.rs
//! The common post-execution tail every executor runs after its own
//! effects: debit the sender, bump its nonce, normalize it, write it back.

use ticketchain_keeper::AccountKeeper;
use ticketchain_state::StateAccess;
use ticketchain_types::decimal::Decimal;
use ticketchain_types::entities::Account;
use ticketchain_types::error::TransactionError;
use ticketchain_types::ids::Address;

/// Debits `debit` from `account.balance`, bumps its nonce, and normalizes
/// it via `Account::clean`. Does not write the account back — callers still
/// hold `account` by value in case they need to layer further mutations
/// (e.g. a stake entry) before the final write.
pub fn finalize_sender(account: &mut Account, debit: &Decimal) -> Result<(), TransactionError> {
    let balance = account.balance.checked_sub(debit).ok_or_else(|| TransactionError::InsufficientBalance {
        needed: debit.to_string(),
        available: account.balance.to_string(),
    })?;
    account.balance = balance;
    account.nonce += 1;
    account.clean();
    Ok(())
}

/// `finalize_sender` plus the write-back through `accounts`. The shape every
/// executor that only touches the sender account reaches for.
pub fn finalize_and_write_sender<S: StateAccess>(
    state: &mut S,
    accounts: &AccountKeeper,
    sender: &Address,
    account: &mut Account,
    debit: &Decimal,
) -> Result<(), TransactionError> {
    finalize_sender(account, debit)?;
    accounts.update(state, sender, account)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticketchain_types::entities::{StakeEntry, TicketKind};

    #[test]
    fn debits_bumps_nonce_and_cleans() {
        let mut account = Account { balance: Decimal::from(100u64), nonce: 4, ..Account::default() };
        account.stakes.insert(TicketKind::Host, vec![StakeEntry { value: Decimal::zero(), unbond_height: 0 }]);

        finalize_sender(&mut account, &Decimal::from(10u64)).unwrap();

        assert_eq!(account.balance, Decimal::from(90u64));
        assert_eq!(account.nonce, 5);
        assert!(account.stakes.is_empty());
    }

    #[test]
    fn rejects_a_debit_larger_than_balance() {
        let mut account = Account { balance: Decimal::from(1u64), ..Account::default() };
        assert!(finalize_sender(&mut account, &Decimal::from(2u64)).is_err());
    }
}
