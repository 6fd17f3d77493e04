// Path: crates/state/src/access.rs
use std::sync::Arc;

use ticketchain_storage::NodeStore;
use ticketchain_types::error::StateError;

/// A lazily-evaluated, sorted iterator over `(key, value)` pairs yielded by
/// [`StateAccess::prefix_scan`].
pub type StateScanIter<'a> =
    Box<dyn Iterator<Item = Result<(Arc<[u8]>, Arc<[u8]>), StateError>> + 'a>;

/// Read/write access to a flat byte-keyed namespace of the state tree.
///
/// Keepers never touch the tree directly — every entity read/write in
/// `ticketchain-keeper` goes through this trait, so swapping the tree
/// implementation (or wrapping it for namespacing/tracing) never touches
/// caller code.
pub trait StateAccess {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StateError>;

    fn insert(&mut self, key: &[u8], value: &[u8]) -> Result<(), StateError>;

    fn delete(&mut self, key: &[u8]) -> Result<(), StateError>;

    /// Iterates all keys starting with `prefix` in ascending lexicographic
    /// order, merging any pending (uncommitted) writes over the last
    /// committed version.
    fn prefix_scan(&self, prefix: &[u8]) -> Result<StateScanIter<'_>, StateError>;

    fn batch_set(&mut self, updates: &[(Vec<u8>, Vec<u8>)]) -> Result<(), StateError> {
        for (key, value) in updates {
            self.insert(key, value)?;
        }
        Ok(())
    }

    fn batch_get(&self, keys: &[Vec<u8>]) -> Result<Vec<Option<Vec<u8>>>, StateError> {
        keys.iter().map(|key| self.get(key)).collect()
    }

    fn batch_apply(
        &mut self,
        inserts: &[(Vec<u8>, Vec<u8>)],
        deletes: &[Vec<u8>],
    ) -> Result<(), StateError> {
        for key in deletes {
            self.delete(key)?;
        }
        for (key, value) in inserts {
            self.insert(key, value)?;
        }
        Ok(())
    }
}

/// Versioning and persistence control over a [`StateAccess`] implementation.
pub trait StateManager: StateAccess {
    /// Attaches the backing node store used to fault in nodes lazily and to
    /// persist newly created nodes at commit time.
    fn attach_store(&mut self, store: Arc<dyn NodeStore>);

    /// Marks the start of a new block's writes at `height`.
    fn begin_block_writes(&mut self, height: u64);

    /// Commits the accumulated writes as a new version at `height`, persists
    /// the new nodes to the store, and returns the resulting app hash.
    fn commit_version(&mut self, height: u64) -> Result<[u8; 32], StateError>;

    /// The app hash of the tree as of its last committed version.
    fn app_hash(&self) -> [u8; 32];
}

/// Implemented by state accessors that can produce a read-only snapshot of
/// themselves as of a previously committed height.
///
/// Backs keeper reads of the form `Get(id [, atHeight])`; generic over
/// the trait (rather than hard-coded to `IavlTree`) so keeper code does
/// not need to know which tree implementation backs it.
pub trait HistoricalStateAccess: StateAccess + Sized {
    /// Returns a snapshot of this accessor as it stood at `height`, or
    /// `StateError::NotFound` if no version was ever committed at `height`.
    fn at_height(&self, height: u64) -> Result<Self, StateError>;
}
