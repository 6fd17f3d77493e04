// Path: crates/tx/src/system/nonce.rs
//! Core, non-optional system logic for transaction nonce management.

use crate::Transaction;
use ticketchain_keeper::AccountKeeper;
use ticketchain_state::StateAccess;
use ticketchain_types::error::TransactionError;
use ticketchain_types::ids::Address;

/// Strictly asserts that `tx.nonce` is exactly `account.nonce + 1` (
/// `NonceMismatch`).
pub fn assert_next_nonce<S: StateAccess>(
    state: &S,
    accounts: &AccountKeeper,
    sender: &Address,
    tx: &Transaction,
) -> Result<(), TransactionError> {
    let account = accounts.get(state, sender)?;
    let expected = account.nonce + 1;
    if tx.nonce != expected {
        return Err(TransactionError::NonceMismatch { expected, got: tx.nonce });
    }
    Ok(())
}
