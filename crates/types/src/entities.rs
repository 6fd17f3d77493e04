// Path: crates/types/src/entities.rs
//! State entities: Account, Repository, Namespace, Ticket, BlockInfo, Validator.
//!
//! All entities derive the canonical SCALE codec (`codec::to_bytes_canonical`)
//! and `serde`. Map-valued fields use `BTreeMap` so the SCALE field-order
//! encoding is also key-sorted, satisfying the sorted-map-keys requirement.

use crate::decimal::Decimal;
use crate::ids::{Address, TxHash};
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The two ticket categories a stake entry, or a ticket itself, can belong to.
#[derive(Encode, Decode, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum TicketKind {
    /// Confers eligibility for block-proposer selection.
    Validator,
    /// Confers eligibility for storage-host selection.
    Host,
}

/// One staked value with an optional unbond height.
///
/// `unbond_height == 0` means the stake is still fully bonded; a non-zero
/// value is the height at which it thaws back into spendable balance.
#[derive(Encode, Decode, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct StakeEntry {
    /// The staked amount.
    pub value: Decimal,
    /// Height at which this entry thaws, or `0` if not yet unbonding.
    pub unbond_height: u64,
}

/// A user or validator account.
///
/// Created implicitly on first write; never deleted — an absent account
/// keeper-reads as [`Account::default`].
#[derive(Encode, Decode, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Account {
    /// Total balance, including amounts currently staked.
    pub balance: Decimal,
    /// Monotonically increasing transaction counter; strictly increases by
    /// one per successful transaction sent from this account.
    pub nonce: u64,
    /// Staked entries by category.
    pub stakes: BTreeMap<TicketKind, Vec<StakeEntry>>,
    /// Commission percentage (0–100) this account charges delegators. Stored
    /// as a float: not summed into consensus-critical totals, so float drift
    /// is harmless.
    pub delegator_commission: f64,
}

impl Default for Account {
    fn default() -> Self {
        Self {
            balance: Decimal::zero(),
            nonce: 0,
            stakes: BTreeMap::new(),
            delegator_commission: 0.0,
        }
    }
}

impl Account {
    /// Spendable balance: `balance - Σ(active stake values)`, where "active"
    /// means not yet thawed (`unbond_height == 0`).
    pub fn spendable_balance(&self) -> Decimal {
        let staked = self
            .stakes
            .values()
            .flatten()
            .filter(|e| e.unbond_height == 0)
            .fold(Decimal::zero(), |acc, e| acc.checked_add(&e.value));
        self.balance.checked_sub(&staked).unwrap_or_else(Decimal::zero)
    }

    /// Drops zeroed stake entries and empty categories. Called by every
    /// executor's post-execution tail before the account is written back.
    pub fn clean(&mut self) {
        for entries in self.stakes.values_mut() {
            entries.retain(|e| !e.value.is_zero());
        }
        self.stakes.retain(|_, entries| !entries.is_empty());
    }
}

/// A reference (branch/tag) tracked by a repository.
#[derive(Encode, Decode, Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct RepoReference {
    /// Push nonce for this reference, incremented on every accepted push.
    pub nonce: u64,
}

/// One member of a repository's owner set.
#[derive(Encode, Decode, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RepoOwner {
    /// Whether this owner created the repository.
    pub creator: bool,
    /// Height at which this owner joined.
    pub joined_at: u64,
    /// Whether this owner holds veto power over proposals.
    pub veto: bool,
}

/// A governance proposal raised against a repository.
#[derive(Encode, Decode, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RepoProposal {
    /// Address that created the proposal.
    pub creator: Address,
    /// Height at which voting ends.
    pub end_at: u64,
    /// Accumulated yes votes (by proposer power).
    pub yes: Decimal,
    /// Accumulated no votes.
    pub no: Decimal,
    /// Whether any owner has vetoed.
    pub vetoed: bool,
}

/// Tally method used to decide a repository proposal.
#[derive(Encode, Decode, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TallyMethod {
    /// One vote per owner, regardless of stake.
    OneOwnerOneVote,
    /// Votes weighted by proposer power.
    ProposerPower,
}

/// Governance parameters for a repository, with sane defaults merged on
/// create.
#[derive(Encode, Decode, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RepoConfig {
    /// Addresses permitted to raise proposals; empty means any owner.
    pub proposee: Vec<Address>,
    /// Proposal voting duration, in blocks.
    pub duration: u64,
    /// How votes are tallied.
    pub tally_method: TallyMethod,
    /// Minimum participation required for a proposal to be decided.
    pub quorum: f64,
    /// Fraction of participating votes required to pass.
    pub threshold: f64,
    /// Fraction of owners required to sustain a veto.
    pub veto_quorum: f64,
    /// Flat fee required to raise a proposal.
    pub fee: Decimal,
    /// Whether the proposal fee is refunded when the proposal passes.
    pub refund_on_accept: bool,
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self {
            proposee: Vec::new(),
            duration: 14_400,
            tally_method: TallyMethod::ProposerPower,
            quorum: 50.0,
            threshold: 50.0,
            veto_quorum: 33.0,
            fee: Decimal::zero(),
            refund_on_accept: true,
        }
    }
}

/// A git-hosted repository's on-chain metadata.
#[derive(Encode, Decode, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Repository {
    /// Synthetic balance credited by repo-create and held for governance
    /// payouts.
    pub balance: Decimal,
    /// Tracked refs, keyed by name.
    pub references: BTreeMap<String, RepoReference>,
    /// Owner set, keyed by address.
    pub owners: BTreeMap<Address, RepoOwner>,
    /// Open and resolved proposals, keyed by proposal id.
    pub proposals: BTreeMap<String, RepoProposal>,
    /// Governance configuration.
    pub config: RepoConfig,
}

impl Default for Repository {
    fn default() -> Self {
        Self {
            balance: Decimal::zero(),
            references: BTreeMap::new(),
            owners: BTreeMap::new(),
            proposals: BTreeMap::new(),
            config: RepoConfig::default(),
        }
    }
}

impl Repository {
    /// Initializes a freshly created repository with `creator` as its sole
    /// owner and `overrides` merged over the default config.
    pub fn new_with_creator(creator: Address, height: u64, overrides: RepoConfig) -> Self {
        let mut owners = BTreeMap::new();
        owners.insert(
            creator,
            RepoOwner {
                creator: true,
                joined_at: height,
                veto: true,
            },
        );
        Self {
            owners,
            config: overrides,
            ..Default::default()
        }
    }
}

/// A namespace acquired via a namespace-acquire transaction.
#[derive(Encode, Decode, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Namespace {
    /// Owning address (or repository name, stored as the same string form).
    pub owner: Address,
    /// Height after which an expired namespace may be reclaimed by anyone.
    pub grace_end_at: u64,
    /// Height at which the namespace expires.
    pub expires_at: u64,
    /// Subname to target-URI mappings.
    pub domains: BTreeMap<String, String>,
}

impl Default for Namespace {
    fn default() -> Self {
        Self {
            owner: Address::from(""),
            grace_end_at: 0,
            expires_at: 0,
            domains: BTreeMap::new(),
        }
    }
}

/// A pusher public key registered under an account's push-key namespace.
#[derive(Encode, Decode, Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct PushKey {
    /// Raw Ed25519 public key being registered.
    pub push_pub_key: [u8; 32],
}

/// A stake ticket created by a ticket-purchase transaction.
#[derive(Encode, Decode, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Ticket {
    /// Validator or host.
    pub kind: TicketKind,
    /// Hash of the transaction that created this ticket; unique.
    pub hash: TxHash,
    /// The public key the ticket empowers (the delegate, if any, else the
    /// sender).
    pub proposer_pub_key: [u8; 32],
    /// BLS public key, host tickets only.
    pub bls_pub_key: Option<[u8; 48]>,
    /// Address that paid for this ticket when it is delegated; empty when
    /// the ticket is self-owned.
    pub delegator: Option<Address>,
    /// Staked amount.
    pub value: Decimal,
    /// Commission rate locked at index time for delegated tickets.
    pub commission_rate: f64,
    /// Height at which this ticket was indexed.
    pub height: u64,
    /// Intra-block position at indexing time.
    pub index: u32,
    /// Height at which the ticket becomes mature.
    pub mature_by: u64,
    /// Height at which the ticket expires; `0` means never (host tickets).
    pub expire_by: u64,
}

/// Metadata for one committed block.
#[derive(Encode, Decode, Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct BlockInfo {
    /// Committed height.
    pub height: u64,
    /// State tree app hash after this block's transactions were applied.
    pub app_hash: [u8; 32],
    /// App hash of the previous block.
    pub last_app_hash: [u8; 32],
    /// Hash of the block itself, as supplied by consensus.
    pub hash: [u8; 32],
    /// Address of the block's proposer.
    pub proposer_address: Address,
}

/// One entry of a height-indexed validator set.
#[derive(Encode, Decode, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Validator {
    /// The validator's raw Ed25519 public key.
    pub public_key: [u8; 32],
    /// Voting power, aggregated from the validator's tickets.
    pub power: Decimal,
    /// Hash of the ticket this validator entry derives from.
    pub ticket_id: TxHash,
}
