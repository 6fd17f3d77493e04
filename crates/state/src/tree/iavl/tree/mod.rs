// Path: crates/state/src/tree/iavl/tree/mod.rs

//! The core `IavlTree` implementation. Store-aware and lazy-loading
//! (demand-faulting): children are referenced by hash, and nodes are
//! fetched from an in-memory cache or the attached [`NodeStore`] on demand
//! during traversal.

use super::indices::Indices;
use super::node::{IAVLNode, NodeHash, EMPTY_HASH};
use crate::access::{StateAccess, StateManager, StateScanIter};
use std::cmp::{max, Ordering};
use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::sync::Arc;
use ticketchain_storage::NodeStore;
use ticketchain_types::error::StateError;
use ticketchain_types::prelude::OptionExt;

/// Calculates the lexicographical successor of a byte slice.
/// Returns `None` if the slice is all `0xFF` bytes, as there is no successor.
fn lexicographical_successor(bytes: &[u8]) -> Option<Vec<u8>> {
    if bytes.is_empty() {
        return None;
    }
    let mut successor = bytes.to_vec();
    for i in (0..successor.len()).rev() {
        if let Some(byte) = successor.get_mut(i) {
            if *byte != 0xFF {
                *byte = byte.wrapping_add(1);
                successor.truncate(i + 1);
                return Some(successor);
            }
        }
    }
    None
}

/// A versioned, authenticated AVL tree, store-aware and lazy-loading.
#[derive(Clone, Default)]
pub struct IavlTree {
    /// The hash of the root node. This is the primary handle to the tree's state.
    root_hash: Option<NodeHash>,
    /// Cache for decoded nodes from the store or newly created nodes for the current version.
    node_cache: HashMap<NodeHash, Arc<IAVLNode>>,
    current_height: u64,
    indices: Indices,
    /// Key-value cache for the latest version, for fast lookups on recently modified data.
    kv_cache: HashMap<Vec<u8>, Vec<u8>>,
    store: Option<Arc<dyn NodeStore>>,
}

impl Debug for IavlTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IavlTree")
            .field("root_hash", &self.root_hash.map(hex::encode))
            .field("node_cache_len", &self.node_cache.len())
            .field("current_height", &self.current_height)
            .field("kv_cache_len", &self.kv_cache.len())
            .field("store_is_some", &self.store.is_some())
            .finish()
    }
}

impl IavlTree {
    /// Creates a new, empty tree with no attached store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a tree rooted at the latest committed version recorded by `store`.
    pub fn open(store: Arc<dyn NodeStore>) -> Result<Self, StateError> {
        let mut tree = Self::new();
        let latest = store
            .latest_height()
            .map_err(|e| StateError::Backend(e.to_string()))?;
        tree.store = Some(store);
        if let Some(height) = latest {
            let root = tree
                .store
                .as_ref()
                .required(StateError::Backend("store vanished".into()))?
                .get_root(height)
                .map_err(|e| StateError::Backend(e.to_string()))?;
            tree.root_hash = root.filter(|h| *h != EMPTY_HASH);
            tree.current_height = height;
            if let Some(root_hash) = tree.root_hash {
                tree.indices.versions_by_height.insert(height, root_hash);
                *tree.indices.root_refcount.entry(root_hash).or_insert(0) += 1;
            }
        }
        Ok(tree)
    }

    /// Returns a read-only snapshot of this tree as it stood at a previously
    /// committed `height`. The snapshot shares the same node cache and
    /// backing store, so historical nodes still resident in `node_cache`
    /// resolve without a store round-trip; nodes already pruned from the
    /// cache are faulted in from `store` on demand.
    ///
    /// Used by keepers to answer `Get(id, atHeight)` reads without
    /// re-opening a fresh store handle per historical query.
    pub fn at_height(&self, height: u64) -> Result<Self, StateError> {
        let root_hash = match self.indices.versions_by_height.get(&height) {
            Some(hash) => Some(*hash),
            None => match &self.store {
                Some(store) => store
                    .get_root(height)
                    .map_err(|e| StateError::Backend(e.to_string()))?
                    .filter(|h| *h != EMPTY_HASH),
                None => {
                    return Err(StateError::NotFound(format!(
                        "no committed version at height {height}"
                    )))
                }
            },
        };
        Ok(Self {
            root_hash,
            node_cache: self.node_cache.clone(),
            current_height: height,
            indices: self.indices.clone(),
            kv_cache: HashMap::new(),
            store: self.store.clone(),
        })
    }

    /// A recursive helper for `prefix_scan` to traverse the tree and collect all key-value pairs
    /// that fall within a given lexicographical range `[start, end)`.
    fn collect_prefix_range(
        &self,
        node_hash_opt: Option<NodeHash>,
        start: &[u8],
        end_opt: Option<&[u8]>,
        prefix: &[u8],
        out: &mut Vec<(Vec<u8>, Vec<u8>)>,
    ) -> Result<(), StateError> {
        let Some(node_hash) = node_hash_opt else {
            return Ok(());
        };

        let Some(node) = self.get_node(node_hash)? else {
            return Ok(());
        };

        if node.is_leaf() {
            let k = node.key.as_slice();
            if k >= start && end_opt.map_or(true, |end| k < end) && k.starts_with(prefix) {
                out.push((node.key.clone(), node.value.clone()));
            }
            return Ok(());
        }

        let split_key = node.key.as_slice();

        if start <= split_key {
            self.collect_prefix_range(node.left_hash, start, end_opt, prefix, out)?;
        }

        match end_opt {
            Some(end) if end <= split_key => {}
            _ => {
                self.collect_prefix_range(node.right_hash, start, end_opt, prefix, out)?;
            }
        }

        Ok(())
    }

    /// The core lazy-loading method. Fetches a node by its hash, consulting the cache first,
    /// then falling back to the persistent store.
    fn get_node(&self, hash: NodeHash) -> Result<Option<Arc<IAVLNode>>, StateError> {
        if hash == EMPTY_HASH {
            return Ok(None);
        }
        if let Some(node) = self.node_cache.get(&hash) {
            return Ok(Some(node.clone()));
        }
        if let Some(store) = &self.store {
            if let Some(bytes) = store
                .get_node(&hash)
                .map_err(|e| StateError::Backend(e.to_string()))?
            {
                let decoded = super::encode::decode_node(&bytes)
                    .ok_or(StateError::DecodeFailure("invalid node encoding in store".into()))?;
                let node = IAVLNode::from_decoded(decoded)?;
                return Ok(Some(Arc::new(node)));
            }
        }
        Ok(None)
    }

    fn node_height(&self, hash_opt: Option<NodeHash>) -> Result<i32, StateError> {
        Ok(hash_opt
            .and_then(|h| self.get_node(h).transpose())
            .transpose()?
            .map_or(-1, |n| n.height))
    }

    fn node_size(&self, hash_opt: Option<NodeHash>) -> Result<u64, StateError> {
        Ok(hash_opt
            .and_then(|h| self.get_node(h).transpose())
            .transpose()?
            .map_or(0, |n| n.size))
    }

    /// Find the node with the maximum key in the subtree rooted at `hash`.
    fn find_max(&self, hash: NodeHash) -> Result<Arc<IAVLNode>, StateError> {
        let mut node = self.get_node(hash)?.required(StateError::NotFound("tree node not found".into()))?;
        while let Some(right_hash) = node.right_hash {
            node = self.get_node(right_hash)?.required(StateError::NotFound("tree node not found".into()))?;
        }
        Ok(node)
    }

    /// Find the node with the minimum key in the subtree rooted at `hash`.
    fn find_min(&self, hash: NodeHash) -> Result<Arc<IAVLNode>, StateError> {
        let mut node = self.get_node(hash)?.required(StateError::NotFound("tree node not found".into()))?;
        while let Some(left_hash) = node.left_hash {
            node = self.get_node(left_hash)?.required(StateError::NotFound("tree node not found".into()))?;
        }
        Ok(node)
    }

    fn create_inner_node(
        &mut self,
        left_hash: Option<NodeHash>,
        right_hash: Option<NodeHash>,
    ) -> Result<NodeHash, StateError> {
        let key = if let Some(lh) = left_hash {
            self.find_max(lh)?.key.clone()
        } else {
            Vec::new()
        };
        let height = 1 + max(self.node_height(left_hash)?, self.node_height(right_hash)?);
        let size = 1 + self.node_size(left_hash)? + self.node_size(right_hash)?;
        let mut node = IAVLNode {
            key,
            value: Vec::new(),
            version: self.current_height,
            height,
            size,
            hash: EMPTY_HASH,
            left_hash,
            right_hash,
        };
        node.hash = node.compute_hash()?;
        let hash = node.hash;
        self.node_cache.insert(hash, Arc::new(node));
        Ok(hash)
    }

    fn get_recursive(
        &self,
        node_hash_opt: Option<NodeHash>,
        key: &[u8],
    ) -> Result<Option<Vec<u8>>, StateError> {
        let Some(node_hash) = node_hash_opt else {
            return Ok(None);
        };
        let Some(node) = self.get_node(node_hash)? else {
            return Ok(None);
        };

        if node.is_leaf() {
            if key == node.key.as_slice() {
                Ok(Some(node.value.clone()))
            } else {
                Ok(None)
            }
        } else if key <= node.key.as_slice() {
            self.get_recursive(node.left_hash, key)
        } else {
            self.get_recursive(node.right_hash, key)
        }
    }

    fn insert_recursive(
        &mut self,
        node_hash_opt: Option<NodeHash>,
        key: &[u8],
        value: &[u8],
    ) -> Result<NodeHash, StateError> {
        let Some(node_hash) = node_hash_opt else {
            let new_leaf = IAVLNode::new_leaf(key.to_vec(), value.to_vec(), self.current_height)?;
            let new_hash = new_leaf.hash;
            self.node_cache.insert(new_hash, Arc::new(new_leaf));
            return Ok(new_hash);
        };

        let node = self.get_node(node_hash)?.required(StateError::NotFound("tree node not found".into()))?;

        if node.is_leaf() {
            match key.cmp(&node.key) {
                Ordering::Equal => {
                    let new_leaf =
                        IAVLNode::new_leaf(key.to_vec(), value.to_vec(), self.current_height)?;
                    let new_hash = new_leaf.hash;
                    self.node_cache.insert(new_hash, Arc::new(new_leaf));
                    Ok(new_hash)
                }
                Ordering::Less => {
                    let new_leaf =
                        IAVLNode::new_leaf(key.to_vec(), value.to_vec(), self.current_height)?;
                    self.node_cache.insert(new_leaf.hash, Arc::new(new_leaf.clone()));
                    self.create_inner_node(Some(new_leaf.hash), Some(node.hash))
                }
                Ordering::Greater => {
                    let new_leaf =
                        IAVLNode::new_leaf(key.to_vec(), value.to_vec(), self.current_height)?;
                    self.node_cache.insert(new_leaf.hash, Arc::new(new_leaf.clone()));
                    self.create_inner_node(Some(node.hash), Some(new_leaf.hash))
                }
            }
        } else {
            let (new_left, new_right) = if key <= node.key.as_slice() {
                (
                    Some(self.insert_recursive(node.left_hash, key, value)?),
                    node.right_hash,
                )
            } else {
                (
                    node.left_hash,
                    Some(self.insert_recursive(node.right_hash, key, value)?),
                )
            };
            let new_node_hash = self.create_inner_node(new_left, new_right)?;
            self.balance(new_node_hash)
        }
    }

    fn remove_recursive(
        &mut self,
        node_hash_opt: Option<NodeHash>,
        key: &[u8],
    ) -> Result<Option<NodeHash>, StateError> {
        let Some(node_hash) = node_hash_opt else {
            return Ok(None);
        };
        let node = self.get_node(node_hash)?.required(StateError::NotFound("tree node not found".into()))?;

        match key.cmp(&node.key) {
            Ordering::Less if !node.is_leaf() => {
                let new_left = self.remove_recursive(node.left_hash, key)?;
                if new_left == node.left_hash {
                    return Ok(Some(node_hash));
                }
                let new_node_hash = self.create_inner_node(new_left, node.right_hash)?;
                self.balance(new_node_hash).map(Some)
            }
            Ordering::Greater if !node.is_leaf() => {
                let new_right = self.remove_recursive(node.right_hash, key)?;
                if new_right == node.right_hash {
                    return Ok(Some(node_hash));
                }
                let new_node_hash = self.create_inner_node(node.left_hash, new_right)?;
                self.balance(new_node_hash).map(Some)
            }
            Ordering::Equal => {
                if node.is_leaf() {
                    Ok(None)
                } else {
                    match (node.left_hash, node.right_hash) {
                        (Some(left), None) => Ok(Some(left)),
                        (None, Some(right)) => Ok(Some(right)),
                        (Some(left), Some(right)) => {
                            let successor = self.find_min(right)?;
                            let new_right =
                                self.remove_recursive(Some(right), &successor.key)?;

                            let new_height = 1
                                + max(self.node_height(Some(left))?, self.node_height(new_right)?);
                            let new_size =
                                1 + self.node_size(Some(left))? + self.node_size(new_right)?;
                            let mut new_node = IAVLNode {
                                key: successor.key.clone(),
                                value: successor.value.clone(),
                                version: self.current_height,
                                height: new_height,
                                size: new_size,
                                hash: EMPTY_HASH,
                                left_hash: Some(left),
                                right_hash: new_right,
                            };
                            new_node.hash = new_node.compute_hash()?;
                            let new_hash = new_node.hash;
                            self.node_cache.insert(new_hash, Arc::new(new_node));
                            self.balance(new_hash).map(Some)
                        }
                        (None, None) => Ok(None),
                    }
                }
            }
            _ => Ok(Some(node_hash)),
        }
    }

    fn balance(&mut self, node_hash: NodeHash) -> Result<NodeHash, StateError> {
        let node = self.get_node(node_hash)?.required(StateError::NotFound("tree node not found".into()))?;
        let bf = self.node_height(node.right_hash)? - self.node_height(node.left_hash)?;

        if bf > 1 {
            let right_node = node
                .right_hash
                .and_then(|h| self.get_node(h).ok().flatten())
                .required(StateError::NotFound("tree node not found".into()))?;
            if self.node_height(right_node.right_hash)? - self.node_height(right_node.left_hash)? < 0 {
                let new_right_hash = self.rotate_right(right_node.hash)?;
                let new_root_hash = self.create_inner_node(node.left_hash, Some(new_right_hash))?;
                return self.rotate_left(new_root_hash);
            }
            return self.rotate_left(node.hash);
        }
        if bf < -1 {
            let left_node = node
                .left_hash
                .and_then(|h| self.get_node(h).ok().flatten())
                .required(StateError::NotFound("tree node not found".into()))?;
            if self.node_height(left_node.right_hash)? - self.node_height(left_node.left_hash)? > 0 {
                let new_left_hash = self.rotate_left(left_node.hash)?;
                let new_root_hash = self.create_inner_node(Some(new_left_hash), node.right_hash)?;
                return self.rotate_right(new_root_hash);
            }
            return self.rotate_right(node.hash);
        }
        Ok(node_hash)
    }

    fn rotate_left(&mut self, node_hash: NodeHash) -> Result<NodeHash, StateError> {
        let node = self.get_node(node_hash)?.required(StateError::NotFound("tree node not found".into()))?;
        let r_hash = node.right_hash.required(StateError::NotFound("tree node not found".into()))?;
        let r_node = self.get_node(r_hash)?.required(StateError::NotFound("tree node not found".into()))?;
        let new_left_hash = self.create_inner_node(node.left_hash, r_node.left_hash)?;
        self.create_inner_node(Some(new_left_hash), r_node.right_hash)
    }

    fn rotate_right(&mut self, node_hash: NodeHash) -> Result<NodeHash, StateError> {
        let node = self.get_node(node_hash)?.required(StateError::NotFound("tree node not found".into()))?;
        let l_hash = node.left_hash.required(StateError::NotFound("tree node not found".into()))?;
        let l_node = self.get_node(l_hash)?.required(StateError::NotFound("tree node not found".into()))?;
        let new_right_hash = self.create_inner_node(l_node.right_hash, node.right_hash)?;
        self.create_inner_node(l_node.left_hash, Some(new_right_hash))
    }
}

impl StateAccess for IavlTree {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StateError> {
        if let Some(value) = self.kv_cache.get(key) {
            return Ok(Some(value.clone()));
        }
        self.get_recursive(self.root_hash, key)
    }

    fn insert(&mut self, key: &[u8], value: &[u8]) -> Result<(), StateError> {
        self.root_hash = Some(self.insert_recursive(self.root_hash, key, value)?);
        self.kv_cache.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), StateError> {
        self.root_hash = self.remove_recursive(self.root_hash, key)?;
        self.kv_cache.remove(key);
        Ok(())
    }

    fn prefix_scan(&self, prefix: &[u8]) -> Result<StateScanIter<'_>, StateError> {
        let mut committed_kvs = Vec::new();

        let start = prefix.to_vec();
        let end_opt_vec = lexicographical_successor(prefix);
        let end_opt = end_opt_vec.as_deref();

        self.collect_prefix_range(self.root_hash, &start, end_opt, prefix, &mut committed_kvs)?;

        let mut merged: BTreeMap<Vec<u8>, Vec<u8>> = committed_kvs.into_iter().collect();
        for (k, v) in &self.kv_cache {
            if k.starts_with(prefix) {
                merged.insert(k.clone(), v.clone());
            }
        }

        let iter = merged.into_iter().map(|(k, v)| Ok((Arc::from(k), Arc::from(v))));
        Ok(Box::new(iter))
    }
}

impl StateManager for IavlTree {
    fn attach_store(&mut self, store: Arc<dyn NodeStore>) {
        self.store = Some(store);
    }

    fn begin_block_writes(&mut self, height: u64) {
        self.current_height = height;
    }

    fn commit_version(&mut self, height: u64) -> Result<[u8; 32], StateError> {
        self.current_height = height;
        let root_hash = self.root_hash.unwrap_or(EMPTY_HASH);

        // Only drop the in-memory caches once every new node has actually
        // been persisted; without a store they remain the only copy.
        if let Some(store) = &self.store {
            let batch: Vec<(NodeHash, Vec<u8>)> = self
                .node_cache
                .iter()
                .map(|(hash, node)| super::encode::encode_node_canonical(node).map(|b| (*hash, b)))
                .collect::<Result<_, StateError>>()?;
            store
                .put_nodes(&batch)
                .map_err(|e| StateError::Backend(e.to_string()))?;
            store
                .put_root(height, root_hash)
                .map_err(|e| StateError::Backend(e.to_string()))?;
            self.node_cache.clear();
            self.kv_cache.clear();
        }

        if let Some(previous_root_for_height) =
            self.indices.versions_by_height.insert(height, root_hash)
        {
            if previous_root_for_height != root_hash {
                self.indices.decrement_refcount(previous_root_for_height);
            }
        }
        *self.indices.root_refcount.entry(root_hash).or_insert(0) += 1;

        Ok(root_hash)
    }

    fn app_hash(&self) -> [u8; 32] {
        self.root_hash.unwrap_or(EMPTY_HASH)
    }
}

impl crate::access::HistoricalStateAccess for IavlTree {
    fn at_height(&self, height: u64) -> Result<Self, StateError> {
        IavlTree::at_height(self, height)
    }
}

#[cfg(test)]
mod tests;
