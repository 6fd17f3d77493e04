// Path: crates/execution/src/context.rs
//! The context bag threaded into every executor: keepers and chain
//! parameters passed explicitly, never reached through a module-level
//! singleton.

use ticketchain_keeper::{AccountKeeper, NamespaceKeeper, PushKeyKeeper, RepoKeeper, SystemKeeper, ValidatorKeeper};
use ticketchain_ticket::TicketManager;
use ticketchain_types::config::ChainParams;

/// The keepers and chain parameters an executor needs, plus the block
/// position it is running at. Built once per block by [`crate::Logic`] and
/// borrowed by every transaction's executor.
pub struct ExecCtx<'a> {
    /// Account CRUD.
    pub accounts: &'a AccountKeeper,
    /// Repository CRUD.
    pub repos: &'a RepoKeeper,
    /// Namespace CRUD.
    pub namespaces: &'a NamespaceKeeper,
    /// Chain-wide singletons (`BlockInfo`).
    pub system: &'a SystemKeeper,
    /// Height-indexed validator sets (consumed by the orchestrator's
    /// end-of-block step; part of the context bag's keeper
    /// interface even though no single-transaction executor touches it).
    pub validators: &'a ValidatorKeeper,
    /// Ticket indexing, aggregation, and lifecycle queries.
    pub tickets: &'a TicketManager,
    /// Registered pusher public keys.
    pub push_keys: &'a PushKeyKeeper,
    /// Chain-wide tunables (maturity windows, thaw period, namespace TTL, treasury address).
    pub params: &'a ChainParams,
    /// Height of the block currently being applied.
    pub height: u64,
    /// This transaction's position within the block.
    pub tx_index: u32,
}
