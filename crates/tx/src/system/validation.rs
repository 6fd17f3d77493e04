// Path: crates/tx/src/system/validation.rs
//! Core, non-optional system logic for transaction signature and balance
//! validation.

use crate::body::TxBody;
use crate::Transaction;
use ticketchain_keeper::AccountKeeper;
use ticketchain_state::StateAccess;
use ticketchain_types::error::TransactionError;
use ticketchain_types::ids::Address;

/// Pure cryptographic verification; no state access. Fails with
/// [`TransactionError::VerificationFailed`].
pub fn verify_stateless_signature(tx: &Transaction) -> Result<(), TransactionError> {
    tx.verify_signature()
}

/// The amount this transaction's common post-execution tail will debit from
/// the sender: `fee`, plus `value` for the kinds that move value out of the
/// sender's spendable balance up front.
pub fn required_amount(tx: &Transaction) -> ticketchain_types::decimal::Decimal {
    let value = match &tx.body {
        TxBody::CoinTransfer { value, .. }
        | TxBody::ValidatorTicket { value, .. }
        | TxBody::HostTicket { value, .. }
        | TxBody::RepoCreate { value, .. }
        | TxBody::NamespaceAcquire { value, .. } => value.clone(),
        TxBody::UnbondHostTicket { .. }
        | TxBody::SetDelegatorCommission { .. }
        | TxBody::RegisterPushKey { .. }
        | TxBody::Push { .. } => ticketchain_types::decimal::Decimal::zero(),
    };
    value.checked_add(&tx.fee)
}

/// Stateful check that the sender's spendable balance covers
/// [`required_amount`]. Fails with [`TransactionError::InsufficientBalance`]
/// (raised by `PrepareExec`).
pub fn assert_sufficient_balance<S: StateAccess>(
    state: &S,
    accounts: &AccountKeeper,
    sender: &Address,
    tx: &Transaction,
) -> Result<(), TransactionError> {
    let account = accounts.get(state, sender)?;
    let needed = required_amount(tx);
    if account.spendable_balance().checked_sub(&needed).is_none() {
        return Err(TransactionError::InsufficientBalance {
            needed: needed.to_string(),
            available: account.spendable_balance().to_string(),
        });
    }
    Ok(())
}
