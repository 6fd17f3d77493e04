// Path: crates/tx/src/body.rs
//! Per-kind transaction payloads.

use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};
use ticketchain_types::decimal::Decimal;
use ticketchain_types::entities::RepoConfig;
use ticketchain_types::ids::{Address, TxHash};

/// The fields unique to each transaction kind. The enum discriminant is the
/// wire `type` code; `Transaction::kind()` projects it back to a [`crate::kind::TxKind`].
#[derive(Encode, Decode, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum TxBody {
    /// Move `value` from the sender to `to`.
    CoinTransfer {
        /// Recipient address.
        to: Address,
        /// Amount moved.
        value: Decimal,
    },
    /// Purchase a validator ticket.
    ValidatorTicket {
        /// Staked amount.
        value: Decimal,
        /// Delegate to this public key instead of the sender's own, if set.
        delegate: Option<[u8; 32]>,
    },
    /// Purchase a host ticket.
    HostTicket {
        /// Staked amount.
        value: Decimal,
        /// Delegate to this public key instead of the sender's own, if set.
        delegate: Option<[u8; 32]>,
        /// BLS public key backing this host's storage proofs.
        bls_pub_key: Option<[u8; 48]>,
    },
    /// Begin thawing a host ticket's stake.
    UnbondHostTicket {
        /// Hash of the ticket to unbond.
        ticket_hash: TxHash,
    },
    /// Update the sender's delegator commission rate.
    SetDelegatorCommission {
        /// New commission percentage (0-100).
        commission: f64,
    },
    /// Create a new repository.
    RepoCreate {
        /// Repository name.
        name: String,
        /// Amount credited to the repository's synthetic balance.
        value: Decimal,
        /// Governance overrides merged over the default config; `None` uses
        /// every default.
        config: Option<RepoConfig>,
    },
    /// Acquire a namespace.
    NamespaceAcquire {
        /// Namespace name.
        name: String,
        /// Amount paid to the treasury.
        value: Decimal,
        /// Address to assign as owner; `None` retains the sender.
        transfer_to: Option<Address>,
    },
    /// Register a pusher public key under the sender's push-key namespace.
    RegisterPushKey {
        /// The push-key index this registration occupies.
        index: u32,
        /// Raw Ed25519 public key being registered.
        push_pub_key: [u8; 32],
    },
    /// Wrap a pushed repository update. Repository hosting itself is an
    /// out-of-scope external collaborator; this variant only
    /// carries the fields needed to decode and fee-meter the transaction.
    Push {
        /// Target repository name.
        repo: String,
        /// Target reference name.
        reference: String,
        /// Opaque pushed-object payload, interpreted by the (out-of-scope)
        /// git-hosting collaborator.
        payload: Vec<u8>,
    },
}

impl TxBody {
    /// Projects this body to its type code.
    pub fn kind(&self) -> crate::kind::TxKind {
        use crate::kind::TxKind;
        match self {
            TxBody::CoinTransfer { .. } => TxKind::CoinTransfer,
            TxBody::ValidatorTicket { .. } => TxKind::ValidatorTicket,
            TxBody::HostTicket { .. } => TxKind::HostTicket,
            TxBody::UnbondHostTicket { .. } => TxKind::UnbondHostTicket,
            TxBody::SetDelegatorCommission { .. } => TxKind::SetDelegatorCommission,
            TxBody::RepoCreate { .. } => TxKind::RepoCreate,
            TxBody::NamespaceAcquire { .. } => TxKind::NamespaceAcquire,
            TxBody::RegisterPushKey { .. } => TxKind::RegisterPushKey,
            TxBody::Push { .. } => TxKind::Push,
        }
    }
}
