// Path: crates/execution/src/executors/repo_create.rs
//! `RepoCreate` executor: credit the repository's synthetic
//! balance with `value`, initialize it with the sender as creator-owner,
//! debit `value + fee` from the sender.

use crate::context::ExecCtx;
use crate::tail;
use ticketchain_state::StateAccess;
use ticketchain_tx::{body::TxBody, Transaction, TxKind};
use ticketchain_types::entities::{RepoConfig, Repository};

/// Whether this executor admits `kind`.
pub fn can_exec(kind: TxKind) -> bool {
    matches!(kind, TxKind::RepoCreate)
}
use ticketchain_types::error::TransactionError;
use ticketchain_types::ids::Address;

pub fn exec<S: StateAccess>(
    state: &mut S,
    ctx: &ExecCtx<'_>,
    sender: &Address,
    tx: &Transaction,
) -> Result<(), TransactionError> {
    let TxBody::RepoCreate { name, value, config } = &tx.body else {
        unreachable!("dispatch guarantees body matches kind");
    };

    let mut sender_account = ctx.accounts.get(state, sender)?;
    let debit = value.checked_add(&tx.fee);
    tail::finalize_and_write_sender(state, ctx.accounts, sender, &mut sender_account, &debit)?;

    let overrides = config.clone().unwrap_or_default();
    let mut repo = Repository::new_with_creator(sender.clone(), ctx.height, overrides);
    repo.balance = repo.balance.checked_add(value);
    ctx.repos.update(state, name, &repo)?;

    Ok(())
}
