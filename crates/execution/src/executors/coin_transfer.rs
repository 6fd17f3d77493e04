// Path: crates/execution/src/executors/coin_transfer.rs
//! `CoinTransfer` executor: move `value` from sender to
//! recipient, debit `value + fee` from the sender.

use crate::context::ExecCtx;
use crate::tail;
use ticketchain_state::StateAccess;
use ticketchain_tx::{body::TxBody, Transaction, TxKind};
use ticketchain_types::ids::Address;

/// Whether this executor admits `kind`.
pub fn can_exec(kind: TxKind) -> bool {
    matches!(kind, TxKind::CoinTransfer)
}

pub fn exec<S: StateAccess>(
    state: &mut S,
    ctx: &ExecCtx<'_>,
    sender: &Address,
    tx: &Transaction,
) -> Result<(), ticketchain_types::error::TransactionError> {
    let TxBody::CoinTransfer { to, value } = &tx.body else {
        unreachable!("dispatch guarantees body matches kind");
    };

    let mut sender_account = ctx.accounts.get(state, sender)?;
    let debit = value.checked_add(&tx.fee);
    tail::finalize_and_write_sender(state, ctx.accounts, sender, &mut sender_account, &debit)?;

    let mut recipient_account = ctx.accounts.get(state, to)?;
    recipient_account.balance = recipient_account.balance.checked_add(value);
    recipient_account.clean();
    ctx.accounts.update(state, to, &recipient_account)?;

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
    fn moves_value_and_debits_fee_from_sender() {
        let mut tree = IavlTree::new();
        let accounts = AccountKeeper::new();
        let sender = Address::from("os1alice");
        let recipient = Address::from("os1bob");
        accounts.update(&mut tree, &sender, &Account { balance: Decimal::from(100u64), ..Account::default() }).unwrap();

        let repos = RepoKeeper::new();
        let namespaces = NamespaceKeeper::new();
        let system = SystemKeeper::new();
        let tickets = TicketManager::new();
        let params = ChainParams::default();
        let validators = ValidatorKeeper::new();
        let push_keys = PushKeyKeeper::new();
        let ctx = ExecCtx { accounts: &accounts, repos: &repos, namespaces: &namespaces, system: &system, validators: &validators, tickets: &tickets, push_keys: &push_keys, params: &params, height: 1, tx_index: 0 };

        let tx = Transaction {
            sender_pub_key: [1u8; 32],
            nonce: 1,
            fee: Decimal::from(1u64),
            body: TxBody::CoinTransfer { to: recipient.clone(), value: Decimal::from(10u64) },
            signature: [0u8; 64],
        };

        exec(&mut tree, &ctx, &sender, &tx).unwrap();

        assert_eq!(accounts.get(&tree, &sender).unwrap().balance, Decimal::from(89u64));
        assert_eq!(accounts.get(&tree, &sender).unwrap().nonce, 1);
        assert_eq!(accounts.get(&tree, &recipient).unwrap().balance, Decimal::from(10u64));
    }
}
