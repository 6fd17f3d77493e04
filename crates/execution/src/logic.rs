// Path: crates/execution/src/logic.rs
//! The per-block orchestrator: validates and dispatches each
//! committed transaction, applies end-of-block validator-set updates, and
//! advances the state tree to the next committed version.
//!
//! A transaction that fails execution is recorded as a failed outcome and
//! the block continues; a failure in the surrounding state
//! machinery (the tree, the validator index, the system keeper) aborts the
//! whole block instead. [`ticketchain_types::error::ChainError`] already
//! encodes exactly that split.

use crate::context::ExecCtx;
use crate::executors;
use ticketchain_keeper::{AccountKeeper, NamespaceKeeper, PushKeyKeeper, RepoKeeper, SystemKeeper, ValidatorKeeper};
use ticketchain_state::{StateAccess, StateManager};
use ticketchain_telemetry::{executor_metrics, time::Timer};
use ticketchain_ticket::TicketManager;
use ticketchain_tx::system::{nonce, validation};
use ticketchain_tx::Transaction;
use ticketchain_types::config::ChainParams;
use ticketchain_types::entities::{BlockInfo, Validator};
use ticketchain_types::error::{ChainError, ErrorCode, TransactionError};
use ticketchain_types::ids::{Address, TxHash};

/// The outcome of a single transaction within an applied block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxOutcome {
    /// Hash of the transaction this outcome belongs to.
    pub tx_hash: TxHash,
    /// `None` on success; the error's display string otherwise.
    pub error: Option<String>,
}

/// The result of applying one block's worth of transactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockResult {
    /// Height just committed.
    pub height: u64,
    /// App hash of the state tree after this block's writes.
    pub app_hash: [u8; 32],
    /// Per-transaction outcomes, in submission order.
    pub outcomes: Vec<TxOutcome>,
}

/// Owns every keeper plus the ticket manager and chain parameters, and
/// drives a block's transactions through prepare/execute/commit.
///
/// Unlike a validator-set scheduler that runs transactions across worker
/// threads against a shared multi-version store, this orchestrator applies
/// one block's transactions sequentially against a single mutable state
/// handle: ticket-governed blocks are small enough that a single write
/// guard per block is simpler to reason about and costs nothing observable
/// in practice.
pub struct Logic {
    /// Account balances, nonces, and stake entries.
    pub accounts: AccountKeeper,
    /// Repository registrations.
    pub repos: RepoKeeper,
    /// Namespace ownership and expiry.
    pub namespaces: NamespaceKeeper,
    /// Chain-wide singletons (last committed block info).
    pub system: SystemKeeper,
    /// Height-indexed validator sets.
    pub validators: ValidatorKeeper,
    /// Ticket lifecycle index.
    pub tickets: TicketManager,
    /// Registered pusher public keys.
    pub push_keys: PushKeyKeeper,
    /// Chain-wide tunable parameters.
    pub params: ChainParams,
}

impl Default for Logic {
    fn default() -> Self {
        Self::new(ChainParams::default())
    }
}

impl Logic {
    /// Builds a fresh orchestrator over empty keepers, governed by `params`.
    pub fn new(params: ChainParams) -> Self {
        Self {
            accounts: AccountKeeper::new(),
            repos: RepoKeeper::new(),
            namespaces: NamespaceKeeper::new(),
            system: SystemKeeper::new(),
            validators: ValidatorKeeper::new(),
            tickets: TicketManager::new(),
            push_keys: PushKeyKeeper::new(),
            params,
        }
    }

    /// `PrepareExec`: stateless signature check, then the
    /// stateful nonce and balance checks, in that order. Returns the
    /// sender's derived address for the caller to thread into the
    /// executor's context.
    pub fn prepare_exec<S: StateAccess>(&self, state: &S, tx: &Transaction) -> Result<Address, TransactionError> {
        validation::verify_stateless_signature(tx)?;
        let sender = ticketchain_crypto::identity::user_address(&tx.sender_pub_key).map_err(TransactionError::Crypto)?;
        nonce::assert_next_nonce(state, &self.accounts, &sender, tx)?;
        validation::assert_sufficient_balance(state, &self.accounts, &sender, tx)?;
        Ok(sender)
    }

    /// Applies one block's transactions in order, then the end-of-block
    /// validator-set update, then commits the new tree version and records
    /// the resulting [`BlockInfo`].
    ///
    /// A transaction whose `prepare_exec` or executor fails is recorded in
    /// its [`TxOutcome`] and the loop continues to the next transaction; any
    /// error from the tree, validator keeper, or system keeper aborts the
    /// whole block via [`ChainError`].
    pub fn apply_block<S: StateAccess + StateManager>(
        &self,
        state: &mut S,
        height: u64,
        block_hash: [u8; 32],
        proposer_address: Address,
        txs: &[Transaction],
        validator_updates: &[Validator],
    ) -> Result<BlockResult, ChainError> {
        let sink = executor_metrics();
        let _timer = Timer::new(sink);
        state.begin_block_writes(height);

        let mut outcomes = Vec::with_capacity(txs.len());
        for (index, tx) in txs.iter().enumerate() {
            let tx_hash = tx.hash();
            let tx_index = index as u32;
            let kind_label = format!("{:?}", tx.kind());

            let result = (|| -> Result<(), TransactionError> {
                let sender = self.prepare_exec(state, tx)?;
                let ctx = ExecCtx {
                    accounts: &self.accounts,
                    repos: &self.repos,
                    namespaces: &self.namespaces,
                    system: &self.system,
                    validators: &self.validators,
                    tickets: &self.tickets,
                    push_keys: &self.push_keys,
                    params: &self.params,
                    height,
                    tx_index,
                };
                executors::exec(state, &ctx, &sender, tx)
            })();

            if let Err(err) = &result {
                sink.inc_exec_error(&kind_label, err.code());
            }
            outcomes.push(TxOutcome { tx_hash, error: result.err().map(|e| e.to_string()) });
        }

        if !validator_updates.is_empty() {
            self.validators.index(state, height, validator_updates)?;
        }

        let app_hash = state.commit_version(height)?;
        let last_app_hash = self.system.get_last_block_info(state)?.app_hash;
        self.system.save_block_info(
            state,
            &BlockInfo { height, app_hash, last_app_hash, hash: block_hash, proposer_address },
        )?;

        Ok(BlockResult { height, app_hash, outcomes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticketchain_state::IavlTree;
    use ticketchain_types::decimal::Decimal;
    use ticketchain_types::entities::Account;
    use ticketchain_crypto::sign::eddsa::Ed25519KeyPair;
    use ticketchain_tx::body::TxBody;

    fn signed_transfer(seed: u64, nonce: u64, to: Address, value: Decimal, fee: Decimal) -> (Transaction, Address) {
        let keypair = Ed25519KeyPair::generate_from_seed(seed).unwrap();
        let sender = ticketchain_crypto::identity::user_address(&keypair.public_key_bytes()).unwrap();
        let mut tx = Transaction {
            sender_pub_key: keypair.public_key_bytes(),
            nonce,
            fee,
            body: TxBody::CoinTransfer { to, value },
            signature: [0u8; 64],
        };
        tx.sign(&keypair).unwrap();
        (tx, sender)
    }

    #[test]
    fn apply_block_commits_a_successful_transfer_and_advances_height() {
        let mut tree = IavlTree::new();
        let logic = Logic::new(ChainParams::default());
        let (tx, sender) = signed_transfer(7, 1, Address::from("os1bob"), Decimal::from(10u64), Decimal::from(1u64));
        logic.accounts.update(&mut tree, &sender, &Account { balance: Decimal::from(100u64), ..Account::default() }).unwrap();

        let result = logic.apply_block(&mut tree, 1, [1u8; 32], sender.clone(), &[tx], &[]).unwrap();

        assert_eq!(result.height, 1);
        assert_eq!(result.outcomes.len(), 1);
        assert!(result.outcomes[0].error.is_none());
        assert_eq!(logic.accounts.get(&tree, &sender).unwrap().balance, Decimal::from(89u64));
        assert_eq!(logic.accounts.get(&tree, &Address::from("os1bob")).unwrap().balance, Decimal::from(10u64));
        assert_eq!(logic.system.get_last_block_info(&tree).unwrap().height, 1);
    }

    #[test]
    fn a_failing_transaction_is_recorded_but_does_not_abort_the_block() {
        let mut tree = IavlTree::new();
        let logic = Logic::new(ChainParams::default());
        let (tx, sender) = signed_transfer(8, 5, Address::from("os1bob"), Decimal::from(10u64), Decimal::from(1u64));
        logic.accounts.update(&mut tree, &sender, &Account { balance: Decimal::from(100u64), nonce: 0, ..Account::default() }).unwrap();

        let result = logic.apply_block(&mut tree, 1, [2u8; 32], sender.clone(), &[tx], &[]).unwrap();

        assert_eq!(result.outcomes.len(), 1);
        assert!(result.outcomes[0].error.is_some());
        assert_eq!(logic.accounts.get(&tree, &sender).unwrap().balance, Decimal::from(100u64));
        assert_eq!(logic.system.get_last_block_info(&tree).unwrap().height, 1);
    }
}
