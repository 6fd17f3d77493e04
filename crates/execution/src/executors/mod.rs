// Path: crates/execution/src/executors/mod.rs
//! One executor module per transaction kind, plus the dispatch
//! the orchestrator uses to find the admitting executor for a decoded
//! transaction ("the orchestrator dispatches by asking each
//! registered executor whether it can handle the type; the first match
//! wins").
//!
//! `Push` carries no executor here: repository hosting is an out-of-scope
//! external collaborator. `ticketchain-tx`'s wire codec already
//! decodes and fee-meters it; a host process wiring in the git-hosting
//! collaborator is expected to dispatch it separately.

/// `CoinTransfer`.
pub mod coin_transfer;
/// `NamespaceAcquire`.
pub mod namespace_acquire;
/// `RegisterPushKey`.
pub mod register_push_key;
/// `RepoCreate`.
pub mod repo_create;
/// `SetDelegatorCommission`.
pub mod set_delegator_commission;
/// `ValidatorTicket`/`HostTicket`.
pub mod ticket_purchase;
/// `UnbondHostTicket`.
pub mod unbond_host_ticket;

use crate::context::ExecCtx;
use ticketchain_state::StateAccess;
use ticketchain_tx::{Transaction, TxKind};
use ticketchain_types::error::TransactionError;
use ticketchain_types::ids::Address;

type ExecFn<S> = fn(&mut S, &ExecCtx<'_>, &Address, &Transaction) -> Result<(), TransactionError>;

/// Walks the registered executors in order and returns the first whose
/// `can_exec` admits `kind`, or `None` if no executor claims it.
fn dispatch<S: StateAccess>(kind: TxKind) -> Option<ExecFn<S>> {
    let registrations: [(fn(TxKind) -> bool, ExecFn<S>); 7] = [
        (coin_transfer::can_exec, coin_transfer::exec),
        (ticket_purchase::can_exec, ticket_purchase::exec),
        (unbond_host_ticket::can_exec, unbond_host_ticket::exec),
        (set_delegator_commission::can_exec, set_delegator_commission::exec),
        (repo_create::can_exec, repo_create::exec),
        (namespace_acquire::can_exec, namespace_acquire::exec),
        (register_push_key::can_exec, register_push_key::exec),
    ];
    registrations.into_iter().find(|(can_exec, _)| can_exec(kind)).map(|(_, exec)| exec)
}

/// Dispatches `tx` to its admitting executor and runs it, or fails with
/// [`TransactionError::Unsupported`] if no executor claims its kind — the
/// only taxonomy member this applies to today is `Push`.
pub fn exec<S: StateAccess>(
    state: &mut S,
    ctx: &ExecCtx<'_>,
    sender: &Address,
    tx: &Transaction,
) -> Result<(), TransactionError> {
    let kind = tx.kind();
    let exec_fn = dispatch::<S>(kind).ok_or_else(|| TransactionError::Unsupported(format!("{kind:?}")))?;
    exec_fn(state, ctx, sender, tx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticketchain_keeper::{AccountKeeper, NamespaceKeeper, PushKeyKeeper, RepoKeeper, SystemKeeper, ValidatorKeeper};
    use ticketchain_state::IavlTree;
    use ticketchain_ticket::TicketManager;
    use ticketchain_types::config::ChainParams;
    use ticketchain_types::decimal::Decimal;
    use ticketchain_types::entities::Account;
    use ticketchain_types::ids::TxHash;

    #[test]
    fn push_has_no_admitting_executor() {
        let mut tree = IavlTree::new();
        let accounts = AccountKeeper::new();
        let sender = Address::from("os1alice");
        accounts.update(&mut tree, &sender, &Account { balance: Decimal::from(10u64), ..Account::default() }).unwrap();

        let repos = RepoKeeper::new();
        let namespaces = NamespaceKeeper::new();
        let system = SystemKeeper::new();
        let tickets = TicketManager::new();
        let validators = ValidatorKeeper::new();
        let push_keys = PushKeyKeeper::new();
        let params = ChainParams::default();
        let ctx = ExecCtx {
            accounts: &accounts,
            repos: &repos,
            namespaces: &namespaces,
            system: &system,
            validators: &validators,
            tickets: &tickets,
            push_keys: &push_keys,
            params: &params,
            height: 1,
            tx_index: 0,
        };

        let tx = Transaction {
            sender_pub_key: [1u8; 32],
            nonce: 1,
            fee: Decimal::from(1u64),
            body: ticketchain_tx::body::TxBody::Push {
                repo: "my-repo".to_string(),
                reference: "refs/heads/main".to_string(),
                payload: vec![],
            },
            signature: [0u8; 64],
        };

        let err = exec(&mut tree, &ctx, &sender, &tx).unwrap_err();
        assert!(matches!(err, TransactionError::Unsupported(_)));
    }

    #[test]
    fn coin_transfer_dispatches_to_its_executor() {
        let mut tree = IavlTree::new();
        let accounts = AccountKeeper::new();
        let sender = Address::from("os1alice");
        accounts.update(&mut tree, &sender, &Account { balance: Decimal::from(100u64), ..Account::default() }).unwrap();

        let repos = RepoKeeper::new();
        let namespaces = NamespaceKeeper::new();
        let system = SystemKeeper::new();
        let tickets = TicketManager::new();
        let validators = ValidatorKeeper::new();
        let push_keys = PushKeyKeeper::new();
        let params = ChainParams::default();
        let ctx = ExecCtx {
            accounts: &accounts,
            repos: &repos,
            namespaces: &namespaces,
            system: &system,
            validators: &validators,
            tickets: &tickets,
            push_keys: &push_keys,
            params: &params,
            height: 1,
            tx_index: 0,
        };

        let tx = Transaction {
            sender_pub_key: [1u8; 32],
            nonce: 1,
            fee: Decimal::from(1u64),
            body: ticketchain_tx::body::TxBody::CoinTransfer { to: Address::from("os1bob"), value: Decimal::from(10u64) },
            signature: [0u8; 64],
        };

        exec(&mut tree, &ctx, &sender, &tx).unwrap();
        assert_eq!(accounts.get(&tree, &Address::from("os1bob")).unwrap().balance, Decimal::from(10u64));
        let _ = TxHash([0u8; 32]);
    }
}
