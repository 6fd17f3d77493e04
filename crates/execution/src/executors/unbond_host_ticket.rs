// Path: crates/execution/src/executors/unbond_host_ticket.rs
//! `UnbondHostTicket` executor: look up the
//! ticket, start its thaw, debit the flat fee.

use crate::context::ExecCtx;
use crate::tail;
use ticketchain_state::StateAccess;
use ticketchain_tx::{body::TxBody, Transaction, TxKind};
use ticketchain_types::entities::{StakeEntry, TicketKind};

/// Whether this executor admits `kind`.
pub fn can_exec(kind: TxKind) -> bool {
    matches!(kind, TxKind::UnbondHostTicket)
}
use ticketchain_types::error::TransactionError;
use ticketchain_types::ids::Address;

pub fn exec<S: StateAccess>(
    state: &mut S,
    ctx: &ExecCtx<'_>,
    sender: &Address,
    tx: &Transaction,
) -> Result<(), TransactionError> {
    let TxBody::UnbondHostTicket { ticket_hash } = &tx.body else {
        unreachable!("dispatch guarantees body matches kind");
    };

    // NotFound if the ticket was never indexed.
    let ticket = ctx.tickets.get_by_hash(state, ticket_hash)?;
    let new_unbond_height = ctx.height + 1 + ctx.params.host_thaw_period;

    let mut sender_account = ctx.accounts.get(state, sender)?;
    let entries = sender_account.stakes.entry(TicketKind::Host).or_default();
    match entries.iter_mut().find(|e| e.unbond_height == 0 && e.value == ticket.value) {
        Some(entry) => entry.unbond_height = new_unbond_height,
        None => entries.push(StakeEntry { value: ticket.value, unbond_height: new_unbond_height }),
    }

    tail::finalize_and_write_sender(state, ctx.accounts, sender, &mut sender_account, &tx.fee)?;
    Ok(())
}
