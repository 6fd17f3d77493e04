// Path: crates/storage/src/mem_store.rs
use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::StorageError;
use crate::node_store::{NodeHash, NodeStore};

/// An in-memory [`NodeStore`] used by unit tests and ephemeral chains (e.g.
/// genesis construction before the first commit to disk).
#[derive(Default)]
pub struct MemNodeStore {
    nodes: RwLock<HashMap<NodeHash, Vec<u8>>>,
    roots: RwLock<HashMap<u64, NodeHash>>,
}

impl MemNodeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NodeStore for MemNodeStore {
    fn get_node(&self, hash: &NodeHash) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.nodes.read().expect("mem store poisoned").get(hash).cloned())
    }

    fn put_nodes(&self, nodes: &[(NodeHash, Vec<u8>)]) -> Result<(), StorageError> {
        let mut guard = self.nodes.write().expect("mem store poisoned");
        for (hash, bytes) in nodes {
            guard.entry(*hash).or_insert_with(|| bytes.clone());
        }
        Ok(())
    }

    fn get_root(&self, height: u64) -> Result<Option<NodeHash>, StorageError> {
        Ok(self.roots.read().expect("mem store poisoned").get(&height).copied())
    }

    fn put_root(&self, height: u64, root: NodeHash) -> Result<(), StorageError> {
        self.roots.write().expect("mem store poisoned").insert(height, root);
        Ok(())
    }

    fn latest_height(&self) -> Result<Option<u64>, StorageError> {
        Ok(self.roots.read().expect("mem store poisoned").keys().max().copied())
    }
}
