// Path: crates/ticket/src/manager.rs
//! The ticket manager: indexing, top-N aggregation, value sums,
//! and the lifecycle-composing queries built on top of `ticketchain-keeper`'s
//! ticket store.

use crate::lifecycle::{is_active, is_live};
use std::collections::HashMap;
use ticketchain_keeper::{AccountKeeper, QueryOptions, SystemKeeper, TicketStore};
use ticketchain_state::StateAccess;
use ticketchain_types::config::ChainParams;
use ticketchain_types::decimal::Decimal;
use ticketchain_types::entities::{Ticket, TicketKind};
use ticketchain_types::error::TicketError;
use ticketchain_types::ids::TxHash;

/// The fields of a ticket-purchase transaction the ticket manager needs to
/// index a new ticket. Kept independent of `ticketchain-tx`'s wire types so
/// the manager has no dependency on the transaction crate; the
/// validator/host ticket executors build one of these from the decoded
/// transaction they are executing.
pub struct TicketPurchase {
    /// Validator or host.
    pub kind: TicketKind,
    /// Hash of the purchasing transaction.
    pub hash: TxHash,
    /// Raw Ed25519 public key of the transaction's sender.
    pub sender_pub_key: [u8; 32],
    /// BLS public key, host tickets only.
    pub bls_pub_key: Option<[u8; 48]>,
    /// Staked amount.
    pub value: Decimal,
    /// If set, the ticket is delegated to this public key instead of the
    /// sender's own.
    pub delegate: Option<[u8; 32]>,
}

/// One proposer's aggregated power, as returned by
/// [`TicketManager::get_top_validators`]/[`TicketManager::get_top_hosts`].
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedTicket {
    /// The proposer public key this power is aggregated under.
    pub proposer_pub_key: [u8; 32],
    /// Sum of every matching ticket's value.
    pub power: Decimal,
}

/// Indexes, ages, ranks, and queries stake tickets.
///
/// Depends on the ticket store (persistence), the account keeper (reading
/// the proposer's current commission at index time), and the system keeper
/// (resolving "current height" when a query's `maturity_height` is `0`).
#[derive(Default)]
pub struct TicketManager {
    store: TicketStore,
    accounts: AccountKeeper,
    system: SystemKeeper,
}

impl TicketManager {
    /// Builds a ticket manager over its collaborators.
    pub fn new() -> Self {
        Self { store: TicketStore::new(), accounts: AccountKeeper::new(), system: SystemKeeper::new() }
    }

    fn resolve_height<S: StateAccess>(&self, state: &S, maturity_height: u64) -> Result<u64, TicketError> {
        if maturity_height != 0 {
            return Ok(maturity_height);
        }
        Ok(self.system.get_last_block_info(state)?.height)
    }

    /// Indexes a newly purchased ticket at `height`, intra-block position
    /// `tx_index`. Delegated tickets capture the delegate's current
    /// commission rate as a value copy, deliberately decoupled from the
    /// account's future commission changes.
    pub fn index<S: StateAccess>(
        &self,
        state: &mut S,
        input: &TicketPurchase,
        height: u64,
        tx_index: u32,
        params: &ChainParams,
    ) -> Result<Ticket, TicketError> {
        let mut proposer_pub_key = input.sender_pub_key;
        let mut delegator = None;
        let mut commission_rate = 0.0;

        if let Some(delegate) = input.delegate.filter(|d| *d != [0u8; 32]) {
            proposer_pub_key = delegate;
            let sender_addr = ticketchain_crypto::identity::user_address(&input.sender_pub_key)
                .map_err(|e| TicketError::DecodeFailure(e.to_string()))?;
            delegator = Some(sender_addr);
            let delegate_addr = ticketchain_crypto::identity::user_address(&delegate)
                .map_err(|e| TicketError::DecodeFailure(e.to_string()))?;
            let delegate_account = self.accounts.get(state, &delegate_addr)?;
            commission_rate = delegate_account.delegator_commission;
        }

        let mature_by = height + params.min_mature_dur;
        let expire_by = match input.kind {
            TicketKind::Validator => mature_by + params.max_active_dur,
            TicketKind::Host => 0,
        };

        let ticket = Ticket {
            kind: input.kind,
            hash: input.hash,
            proposer_pub_key,
            bls_pub_key: input.bls_pub_key,
            delegator,
            value: input.value.clone(),
            commission_rate,
            height,
            index: tx_index,
            mature_by,
            expire_by,
        };
        self.store.add(state, &ticket)?;
        Ok(ticket)
    }

    fn get_top<S: StateAccess>(
        &self,
        state: &S,
        kind: TicketKind,
        limit: usize,
        height: u64,
    ) -> Result<Vec<SelectedTicket>, TicketError> {
        let tickets = self.store.query(state, |t| t.kind == kind && is_active(t, height), QueryOptions::default())?;

        // Aggregate in encounter order so ties break by insertion order,
        // then stable-sort descending by power.
        let mut order: Vec<[u8; 32]> = Vec::new();
        let mut power_by_proposer: HashMap<[u8; 32], Decimal> = HashMap::new();
        for ticket in tickets {
            power_by_proposer
                .entry(ticket.proposer_pub_key)
                .and_modify(|power| *power = power.checked_add(&ticket.value))
                .or_insert_with(|| {
                    order.push(ticket.proposer_pub_key);
                    ticket.value.clone()
                });
        }

        let mut selected: Vec<SelectedTicket> = order
            .into_iter()
            .filter_map(|pk| power_by_proposer.get(&pk).map(|power| SelectedTicket { proposer_pub_key: pk, power: power.clone() }))
            .collect();
        selected.sort_by(|a, b| b.power.cmp(&a.power));
        if limit > 0 {
            selected.truncate(limit);
        }
        Ok(selected)
    }

    /// Top validator proposers by aggregated power, active at `height`.
    /// `limit == 0` returns every selected proposer.
    pub fn get_top_validators<S: StateAccess>(
        &self,
        state: &S,
        limit: usize,
        height: u64,
    ) -> Result<Vec<SelectedTicket>, TicketError> {
        self.get_top(state, TicketKind::Validator, limit, height)
    }

    /// Top host proposers by aggregated power, active at `height`.
    /// `limit == 0` returns every selected proposer.
    pub fn get_top_hosts<S: StateAccess>(
        &self,
        state: &S,
        limit: usize,
        height: u64,
    ) -> Result<Vec<SelectedTicket>, TicketError> {
        self.get_top(state, TicketKind::Host, limit, height)
    }

    fn sum_value<S, P>(&self, state: &S, maturity_height: u64, pred: P) -> Result<Decimal, TicketError>
    where
        S: StateAccess,
        P: Fn(&Ticket) -> bool,
    {
        let height = self.resolve_height(state, maturity_height)?;
        let tickets = self.store.query(state, |t| is_live(t, height) && pred(t), QueryOptions::default())?;
        Ok(tickets.iter().fold(Decimal::zero(), |acc, t| acc.checked_add(&t.value)))
    }

    /// Sum of every live ticket's value, regardless of proposer.
    pub fn value_of_all_tickets<S: StateAccess>(&self, state: &S, maturity_height: u64) -> Result<Decimal, TicketError> {
        self.sum_value(state, maturity_height, |_| true)
    }

    /// Sum of live tickets (delegated or not) naming `proposer_pub_key`.
    pub fn value_of_tickets<S: StateAccess>(
        &self,
        state: &S,
        proposer_pub_key: &[u8; 32],
        maturity_height: u64,
    ) -> Result<Decimal, TicketError> {
        self.sum_value(state, maturity_height, |t| t.proposer_pub_key == *proposer_pub_key)
    }

    /// Sum of live, self-owned (non-delegated) tickets naming `proposer_pub_key`.
    pub fn value_of_non_delegated_tickets<S: StateAccess>(
        &self,
        state: &S,
        proposer_pub_key: &[u8; 32],
        maturity_height: u64,
    ) -> Result<Decimal, TicketError> {
        self.sum_value(state, maturity_height, |t| {
            t.proposer_pub_key == *proposer_pub_key && t.delegator.is_none()
        })
    }

    /// Sum of live, delegated tickets naming `proposer_pub_key`.
    pub fn value_of_delegated_tickets<S: StateAccess>(
        &self,
        state: &S,
        proposer_pub_key: &[u8; 32],
        maturity_height: u64,
    ) -> Result<Decimal, TicketError> {
        self.sum_value(state, maturity_height, |t| {
            t.proposer_pub_key == *proposer_pub_key && t.delegator.is_some()
        })
    }

    /// Live tickets where `proposer_pub_key` is the proposer, or where the
    /// ticket's delegator address equals `addr(proposer_pub_key)`.
    pub fn get_unexpired_tickets<S: StateAccess>(
        &self,
        state: &S,
        proposer_pub_key: &[u8; 32],
        maturity_height: u64,
    ) -> Result<Vec<Ticket>, TicketError> {
        let height = self.resolve_height(state, maturity_height)?;
        let addr = ticketchain_crypto::identity::user_address(proposer_pub_key)
            .map_err(|e| TicketError::DecodeFailure(e.to_string()))?;
        self.store.query(
            state,
            |t| is_live(t, height) && (t.proposer_pub_key == *proposer_pub_key || t.delegator.as_ref() == Some(&addr)),
            QueryOptions::default(),
        )
    }

    /// Replaces a ticket's `expire_by`, used by the host-unbond executor's
    /// maturity-extension path and by any future governance expiry change.
    pub fn update_expire_by<S: StateAccess>(
        &self,
        state: &mut S,
        hash: &TxHash,
        new_expire_by: u64,
    ) -> Result<(), TicketError> {
        self.store.update_one(state, |t| t.hash == *hash, |t| t.expire_by = new_expire_by)
    }

    /// Removes the ticket indexed under `hash`.
    pub fn remove<S: StateAccess>(&self, state: &mut S, hash: &TxHash) -> Result<(), TicketError> {
        self.store.remove_by_hash(state, hash)
    }

    /// Looks up a ticket by hash, failing with `TicketError::NotFound` if
    /// absent — unlike the bare-default keeper reads, the ticket manager
    /// surfaces an explicit not-found error.
    pub fn get_by_hash<S: StateAccess>(&self, state: &S, hash: &TxHash) -> Result<Ticket, TicketError> {
        self.store
            .get_by_hash(state, hash)?
            .ok_or_else(|| TicketError::NotFound(hash.to_string()))
    }

    /// Number of active validator tickets at `height`.
    pub fn count_active_validator_tickets<S: StateAccess>(&self, state: &S, height: u64) -> Result<usize, TicketError> {
        self.store.count(state, |t| t.kind == TicketKind::Validator && is_active(t, height))
    }
}
