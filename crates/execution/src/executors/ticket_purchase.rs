// Path: crates/execution/src/executors/ticket_purchase.rs
//! `ValidatorTicket`/`HostTicket` executors: debit `value + fee`
//! from the sender, then index the purchase through the ticket manager.

use crate::context::ExecCtx;
use crate::tail;
use ticketchain_state::StateAccess;
use ticketchain_ticket::TicketPurchase;
use ticketchain_tx::{body::TxBody, Transaction, TxKind};
use ticketchain_types::entities::TicketKind;

/// Whether this executor admits `kind` — both validator and host ticket
/// purchases share one executor.
pub fn can_exec(kind: TxKind) -> bool {
    matches!(kind, TxKind::ValidatorTicket | TxKind::HostTicket)
}
use ticketchain_types::error::TransactionError;
use ticketchain_types::ids::Address;

pub fn exec<S: StateAccess>(
    state: &mut S,
    ctx: &ExecCtx<'_>,
    sender: &Address,
    tx: &Transaction,
) -> Result<(), TransactionError> {
    let (kind, value, delegate, bls_pub_key) = match &tx.body {
        TxBody::ValidatorTicket { value, delegate } => (TicketKind::Validator, value.clone(), *delegate, None),
        TxBody::HostTicket { value, delegate, bls_pub_key } => {
            (TicketKind::Host, value.clone(), *delegate, *bls_pub_key)
        }
        _ => unreachable!("dispatch guarantees body matches kind"),
    };

    let mut sender_account = ctx.accounts.get(state, sender)?;
    let debit = value.checked_add(&tx.fee);
    tail::finalize_and_write_sender(state, ctx.accounts, sender, &mut sender_account, &debit)?;

    let purchase = TicketPurchase {
        kind,
        hash: tx.hash(),
        sender_pub_key: tx.sender_pub_key,
        bls_pub_key,
        value,
        delegate,
    };
    ctx.tickets.index(state, &purchase, ctx.height, ctx.tx_index, ctx.params)?;

    Ok(())
}
