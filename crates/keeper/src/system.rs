// Path: crates/keeper/src/system.rs
//! The system keeper: chain-wide singletons — `BlockInfo` at the last
//! committed height, and `BlockInfo` by height.

use crate::generic::Keeper;
use ticketchain_state::StateAccess;
use ticketchain_types::entities::BlockInfo;
use ticketchain_types::error::StateError;
use ticketchain_types::keys::{block_info_key, SYSTEM_LAST_BLOCK_INFO_KEY};

/// Reads/writes the chain-wide `BlockInfo` singleton and its per-height
/// history.
pub struct SystemKeeper {
    by_height: Keeper<BlockInfo>,
}

impl Default for SystemKeeper {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemKeeper {
    /// Builds the system keeper. `by_height` reuses the generic keeper with
    /// an empty prefix since `block_info_key` already encodes the full
    /// per-height key under `sys:block::`.
    pub fn new() -> Self {
        Self { by_height: Keeper::new(b"") }
    }

    /// Returns the most recently saved `BlockInfo`, or `BlockInfo::default()`
    /// (height 0) before the first block commits.
    pub fn get_last_block_info<S: StateAccess>(&self, state: &S) -> Result<BlockInfo, StateError> {
        self.by_height.get(state, SYSTEM_LAST_BLOCK_INFO_KEY)
    }

    /// Returns the `BlockInfo` committed at exactly `height`, or the bare
    /// default if no block was ever recorded at that height.
    pub fn get_block_info<S: StateAccess>(&self, state: &S, height: u64) -> Result<BlockInfo, StateError> {
        self.by_height.get(state, &block_info_key(height))
    }

    /// Persists `info` both as the latest-block pointer and under its own
    /// height, so `GetLastBlockInfo` is O(1) while `GetBlockInfo(h)` stays
    /// available for any committed height.
    pub fn save_block_info<S: StateAccess>(&self, state: &mut S, info: &BlockInfo) -> Result<(), StateError> {
        self.by_height.update(state, SYSTEM_LAST_BLOCK_INFO_KEY, info)?;
        self.by_height.update(state, &block_info_key(info.height), info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticketchain_state::IavlTree;
    use ticketchain_types::ids::Address;

    fn sample(height: u64) -> BlockInfo {
        BlockInfo {
            height,
            app_hash: [height as u8; 32],
            last_app_hash: [0u8; 32],
            hash: [1u8; 32],
            proposer_address: Address::from("os1proposer"),
        }
    }

    #[test]
    fn miss_returns_bare_default() {
        let tree = IavlTree::new();
        let keeper = SystemKeeper::new();
        assert_eq!(keeper.get_last_block_info(&tree).unwrap(), BlockInfo::default());
    }

    #[test]
    fn save_updates_both_last_and_by_height() {
        let mut tree = IavlTree::new();
        let keeper = SystemKeeper::new();
        keeper.save_block_info(&mut tree, &sample(5)).unwrap();
        assert_eq!(keeper.get_last_block_info(&tree).unwrap(), sample(5));
        assert_eq!(keeper.get_block_info(&tree, 5).unwrap(), sample(5));
    }

    #[test]
    fn last_block_info_is_overwritten_by_a_newer_save() {
        let mut tree = IavlTree::new();
        let keeper = SystemKeeper::new();
        keeper.save_block_info(&mut tree, &sample(5)).unwrap();
        keeper.save_block_info(&mut tree, &sample(6)).unwrap();
        assert_eq!(keeper.get_last_block_info(&tree).unwrap(), sample(6));
        assert_eq!(keeper.get_block_info(&tree, 5).unwrap(), sample(5));
    }
}
