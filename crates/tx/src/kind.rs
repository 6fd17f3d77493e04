// Path: crates/tx/src/kind.rs
//! The transaction type-code taxonomy.

use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// The canonical transaction type set. The SCALE discriminant doubles as
/// the wire `type` code.
#[derive(Encode, Decode, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TxKind {
    /// Native coin move.
    CoinTransfer,
    /// Purchase validator stake.
    ValidatorTicket,
    /// Purchase host stake.
    HostTicket,
    /// Start host-stake thaw.
    UnbondHostTicket,
    /// Update commission percentage.
    SetDelegatorCommission,
    /// Create a repository.
    RepoCreate,
    /// Acquire a namespace.
    NamespaceAcquire,
    /// Register a pusher public key.
    RegisterPushKey,
    /// Wrap a pushed repository update.
    Push,
}
