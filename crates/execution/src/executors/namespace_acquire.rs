// Path: crates/execution/src/executors/namespace_acquire.rs
//! `NamespaceAcquire` executor: debit the sender
//! `value + fee`, credit the treasury with `value`, and set the namespace's
//! owner and expiry fields.

use crate::context::ExecCtx;
use crate::tail;
use ticketchain_state::StateAccess;
use ticketchain_tx::{body::TxBody, Transaction, TxKind};
use ticketchain_types::error::TransactionError;
use ticketchain_types::ids::Address;

/// Whether this executor admits `kind`.
pub fn can_exec(kind: TxKind) -> bool {
    matches!(kind, TxKind::NamespaceAcquire)
}

pub fn exec<S: StateAccess>(
    state: &mut S,
    ctx: &ExecCtx<'_>,
    sender: &Address,
    tx: &Transaction,
) -> Result<(), TransactionError> {
    let TxBody::NamespaceAcquire { name, value, transfer_to } = &tx.body else {
        unreachable!("dispatch guarantees body matches kind");
    };

    let mut sender_account = ctx.accounts.get(state, sender)?;
    let debit = value.checked_add(&tx.fee);
    tail::finalize_and_write_sender(state, ctx.accounts, sender, &mut sender_account, &debit)?;

    let mut treasury_account = ctx.accounts.get(state, &ctx.params.treasury_address)?;
    treasury_account.balance = treasury_account.balance.checked_add(value);
    treasury_account.clean();
    ctx.accounts.update(state, &ctx.params.treasury_address, &treasury_account)?;

    // An empty `transfer_to` retains the sender as owner — Open
    // Question, resolved in DESIGN.md.
    let owner = transfer_to.clone().unwrap_or_else(|| sender.clone());
    let expires_at = ctx.height + ctx.params.namespace_ttl;
    let grace_end_at = expires_at + ctx.params.namespace_grace_dur;

    let mut ns = ctx.namespaces.get(state, name)?;
    ns.owner = owner;
    ns.expires_at = expires_at;
    ns.grace_end_at = grace_end_at;
    ctx.namespaces.update(state, name, &ns)?;

    Ok(())
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

    #[test]
    fn acquire_debits_sender_credits_treasury_and_sets_expiry() {
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
        let params = ChainParams {
            namespace_ttl: 10,
            namespace_grace_dur: 5,
            treasury_address: Address::from("os1treasury"),
            ..ChainParams::default()
        };
        let ctx = ExecCtx {
            accounts: &accounts,
            repos: &repos,
            namespaces: &namespaces,
            system: &system,
            validators: &validators,
            tickets: &tickets,
            push_keys: &push_keys,
            params: &params,
            height: 100,
            tx_index: 0,
        };

        let tx = Transaction {
            sender_pub_key: [1u8; 32],
            nonce: 1,
            fee: Decimal::from(1u64),
            body: TxBody::NamespaceAcquire { name: "example".to_string(), value: Decimal::from(5u64), transfer_to: None },
            signature: [0u8; 64],
        };

        exec(&mut tree, &ctx, &sender, &tx).unwrap();

        let updated_sender = accounts.get(&tree, &sender).unwrap();
        assert_eq!(updated_sender.balance, Decimal::from(94u64));
        assert_eq!(updated_sender.nonce, 1);
        assert_eq!(accounts.get(&tree, &Address::from("os1treasury")).unwrap().balance, Decimal::from(5u64));

        let ns = namespaces.get(&tree, "example").unwrap();
        assert_eq!(ns.owner, sender);
        assert_eq!(ns.expires_at, 110);
        assert_eq!(ns.grace_end_at, 115);
    }

    #[test]
    fn transfer_to_overrides_the_sender_as_owner() {
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

        let recipient = Address::from("os1bob");
        let tx = Transaction {
            sender_pub_key: [1u8; 32],
            nonce: 1,
            fee: Decimal::from(1u64),
            body: TxBody::NamespaceAcquire {
                name: "example".to_string(),
                value: Decimal::from(5u64),
                transfer_to: Some(recipient.clone()),
            },
            signature: [0u8; 64],
        };

        exec(&mut tree, &ctx, &sender, &tx).unwrap();
        assert_eq!(namespaces.get(&tree, "example").unwrap().owner, recipient);
    }
}
