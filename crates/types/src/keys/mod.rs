// Path: crates/types/src/keys/mod.rs
//! Defines constants for well-known state key prefixes.
//!
//! Each keeper owns exactly one of these prefixes. Using these constants
//! prevents typos and keeps prefix boundaries non-overlapping, so no lock
//! is required between keepers.

/// Separator byte used inside composite keys (ticket and validator keys).
pub const SEP: u8 = b':';

/// Key prefix for account entities, keyed by address.
pub const ACCOUNT_KEY_PREFIX: &[u8] = b"acc:";
/// Key prefix for repository entities, keyed by repo name.
pub const REPO_KEY_PREFIX: &[u8] = b"rep:";
/// Key prefix for namespace entities, keyed by namespace name.
pub const NAMESPACE_KEY_PREFIX: &[u8] = b"ns:";
/// Key prefix for ticket entities; composite-keyed by
/// `tkt:<sep><hash><sep><be-height><sep><be-index>`.
pub const TICKET_KEY_PREFIX: &[u8] = b"tkt:";
/// Key prefix for validator-set snapshots, composite-keyed by `val:<be-height>`.
pub const VALIDATOR_KEY_PREFIX: &[u8] = b"val:";
/// Key prefix for system/chain-wide singletons (block info, params).
pub const SYSTEM_KEY_PREFIX: &[u8] = b"sys:";

/// The state key for the most recently committed `BlockInfo`.
pub const SYSTEM_LAST_BLOCK_INFO_KEY: &[u8] = b"sys:block::last";

/// Builds the state key for a `BlockInfo` record at a specific height.
pub fn block_info_key(height: u64) -> Vec<u8> {
    [SYSTEM_KEY_PREFIX, b"block::", &height.to_be_bytes()].concat()
}

/// Builds the state key for a push-key registration under the owning
/// account's namespace.
pub fn push_key_key(owner: &[u8], push_key_index: u32) -> Vec<u8> {
    [
        ACCOUNT_KEY_PREFIX,
        b"pushkey:",
        owner,
        &[SEP],
        &push_key_index.to_be_bytes(),
    ]
    .concat()
}

/// Builds the composite ticket-store key: `tkt:<sep><hash><sep><be-height><sep><be-index>`.
///
/// Big-endian integers keep lexicographic byte order equal to numeric order,
/// so a prefix scan over `tkt:<sep><hash>` yields every ticket for that hash
/// already ordered by height then index, and a full prefix scan over `tkt:`
/// yields every ticket height-ordered.
pub fn ticket_key(hash: &[u8; 32], height: u64, index: u32) -> Vec<u8> {
    let mut key = Vec::with_capacity(TICKET_KEY_PREFIX.len() + 1 + 32 + 1 + 8 + 1 + 4);
    key.extend_from_slice(TICKET_KEY_PREFIX);
    key.push(SEP);
    key.extend_from_slice(hash);
    key.push(SEP);
    key.extend_from_slice(&height.to_be_bytes());
    key.push(SEP);
    key.extend_from_slice(&index.to_be_bytes());
    key
}

/// Builds the prefix used to scan for a ticket by hash, ignoring height/index.
pub fn ticket_hash_prefix(hash: &[u8; 32]) -> Vec<u8> {
    let mut key = Vec::with_capacity(TICKET_KEY_PREFIX.len() + 1 + 32 + 1);
    key.extend_from_slice(TICKET_KEY_PREFIX);
    key.push(SEP);
    key.extend_from_slice(hash);
    key.push(SEP);
    key
}

/// Builds the composite validator-set key for a given height.
pub fn validator_key(height: u64) -> Vec<u8> {
    [VALIDATOR_KEY_PREFIX, &height.to_be_bytes()].concat()
}
