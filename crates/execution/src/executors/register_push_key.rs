// Path: crates/execution/src/executors/register_push_key.rs
//! `RegisterPushKey` executor: record the pusher public key
//! under the sender's push-key namespace, debit the flat fee.

use crate::context::ExecCtx;
use crate::tail;
use ticketchain_state::StateAccess;
use ticketchain_tx::{body::TxBody, Transaction, TxKind};
use ticketchain_types::error::TransactionError;
use ticketchain_types::ids::Address;

/// Whether this executor admits `kind`.
pub fn can_exec(kind: TxKind) -> bool {
    matches!(kind, TxKind::RegisterPushKey)
}

pub fn exec<S: StateAccess>(
    state: &mut S,
    ctx: &ExecCtx<'_>,
    sender: &Address,
    tx: &Transaction,
) -> Result<(), TransactionError> {
    let TxBody::RegisterPushKey { index, push_pub_key } = &tx.body else {
        unreachable!("dispatch guarantees body matches kind");
    };

    ctx.push_keys.register(state, sender, *index, *push_pub_key)?;

    let mut sender_account = ctx.accounts.get(state, sender)?;
    tail::finalize_and_write_sender(state, ctx.accounts, sender, &mut sender_account, &tx.fee)?;
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
    fn registers_push_key_and_debits_fee() {
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
            body: TxBody::RegisterPushKey { index: 0, push_pub_key: [9u8; 32] },
            signature: [0u8; 64],
        };

        exec(&mut tree, &ctx, &sender, &tx).unwrap();

        assert_eq!(push_keys.get(&tree, &sender, 0).unwrap().push_pub_key, [9u8; 32]);
        let updated = accounts.get(&tree, &sender).unwrap();
        assert_eq!(updated.balance, Decimal::from(9u64));
        assert_eq!(updated.nonce, 1);
    }

    #[test]
    fn distinct_indices_register_independently() {
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

        let first = Transaction {
            sender_pub_key: [1u8; 32],
            nonce: 1,
            fee: Decimal::from(1u64),
            body: TxBody::RegisterPushKey { index: 0, push_pub_key: [1u8; 32] },
            signature: [0u8; 64],
        };
        exec(&mut tree, &ctx, &sender, &first).unwrap();

        let second = Transaction {
            sender_pub_key: [1u8; 32],
            nonce: 2,
            fee: Decimal::from(1u64),
            body: TxBody::RegisterPushKey { index: 1, push_pub_key: [2u8; 32] },
            signature: [0u8; 64],
        };
        exec(&mut tree, &ctx, &sender, &second).unwrap();

        assert_eq!(push_keys.get(&tree, &sender, 0).unwrap().push_pub_key, [1u8; 32]);
        assert_eq!(push_keys.get(&tree, &sender, 1).unwrap().push_pub_key, [2u8; 32]);
    }
}
