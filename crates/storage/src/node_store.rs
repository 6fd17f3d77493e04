// Path: crates/storage/src/node_store.rs
use crate::error::StorageError;

/// The content-address of an encoded tree node: a Blake2b/SHA-256-family digest
/// computed by `ticketchain-state` over the node's canonical encoding.
pub type NodeHash = [u8; 32];

/// A transactional, content-addressed node store plus a height-indexed root
/// pointer, backing the authenticated state tree.
///
/// Implementations must guarantee that a successful [`NodeStore::put_nodes`]
/// followed by [`NodeStore::put_root`] for the same batch is durable before
/// either call returns: the tree never observes a root pointing at nodes that
/// did not make it to disk.
pub trait NodeStore: Send + Sync {
    /// Fetches the encoded bytes of a single node by its hash, if present.
    fn get_node(&self, hash: &NodeHash) -> Result<Option<Vec<u8>>, StorageError>;

    /// Persists a batch of freshly created nodes. Existing entries for a hash
    /// already present are left untouched (nodes are immutable once written).
    fn put_nodes(&self, nodes: &[(NodeHash, Vec<u8>)]) -> Result<(), StorageError>;

    /// Looks up the tree root recorded for `height`.
    fn get_root(&self, height: u64) -> Result<Option<NodeHash>, StorageError>;

    /// Records the tree root for `height`, committing a new version.
    fn put_root(&self, height: u64, root: NodeHash) -> Result<(), StorageError>;

    /// Returns the highest height with a recorded root, if any version has
    /// ever been committed.
    fn latest_height(&self) -> Result<Option<u64>, StorageError>;
}
