// Path: crates/execution/src/executors/set_delegator_commission.rs
//! `SetDelegatorCommission` executor: write the new commission
//! percentage, debit the flat fee.

use crate::context::ExecCtx;
use crate::tail;
use ticketchain_state::StateAccess;
use ticketchain_tx::{body::TxBody, Transaction, TxKind};
use ticketchain_types::error::TransactionError;

/// Whether this executor admits `kind`.
pub fn can_exec(kind: TxKind) -> bool {
    matches!(kind, TxKind::SetDelegatorCommission)
}
use ticketchain_types::ids::Address;

pub fn exec<S: StateAccess>(
    state: &mut S,
    ctx: &ExecCtx<'_>,
    sender: &Address,
    tx: &Transaction,
) -> Result<(), TransactionError> {
    let TxBody::SetDelegatorCommission { commission } = &tx.body else {
        unreachable!("dispatch guarantees body matches kind");
    };

    let mut sender_account = ctx.accounts.get(state, sender)?;
    sender_account.delegator_commission = *commission;
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
    fn writes_new_commission_and_debits_fee() {
        let mut tree = IavlTree::new();
        let accounts = AccountKeeper::new();
        let sender = Address::from("os1alice");
        accounts.update(&mut tree, &sender, &Account { balance: Decimal::from(10u64), ..Account::default() }).unwrap();

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
            body: TxBody::SetDelegatorCommission { commission: 12.5 },
            signature: [0u8; 64],
        };

        exec(&mut tree, &ctx, &sender, &tx).unwrap();

        let updated = accounts.get(&tree, &sender).unwrap();
        assert_eq!(updated.delegator_commission, 12.5);
        assert_eq!(updated.balance, Decimal::from(9u64));
    }
}
