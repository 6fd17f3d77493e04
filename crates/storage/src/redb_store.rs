// Path: crates/storage/src/redb_store.rs
use std::path::Path;

use redb::{Database, ReadableTable, TableDefinition};

use crate::error::StorageError;
use crate::node_store::{NodeHash, NodeStore};
use crate::metrics;

const NODES: TableDefinition<&[u8], &[u8]> = TableDefinition::new("nodes");
const ROOTS: TableDefinition<&[u8], &[u8]> = TableDefinition::new("roots");

/// A [`NodeStore`] backed by an embedded `redb` database: one table for
/// content-addressed node blobs, one for the height-to-root index.
///
/// Both tables are created eagerly on open so that later reads never race a
/// lazily-created table.
pub struct RedbNodeStore {
    db: Database,
}

impl RedbNodeStore {
    /// Opens (creating if absent) a redb database at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let db = Database::create(path)?;
        let txn = db.begin_write()?;
        {
            txn.open_table(NODES)?;
            txn.open_table(ROOTS)?;
        }
        txn.commit()?;
        Ok(Self { db })
    }
}

impl NodeStore for RedbNodeStore {
    fn get_node(&self, hash: &NodeHash) -> Result<Option<Vec<u8>>, StorageError> {
        let txn = self.db.begin_read()?;
        let table = txn.open_table(NODES)?;
        Ok(table.get(hash.as_slice())?.map(|guard| guard.value().to_vec()))
    }

    fn put_nodes(&self, nodes: &[(NodeHash, Vec<u8>)]) -> Result<(), StorageError> {
        let txn = self.db.begin_write()?;
        let mut written_bytes = 0u64;
        {
            let mut table = txn.open_table(NODES)?;
            for (hash, bytes) in nodes {
                if table.get(hash.as_slice())?.is_none() {
                    table.insert(hash.as_slice(), bytes.as_slice())?;
                    written_bytes += bytes.len() as u64;
                }
            }
        }
        txn.commit()?;
        metrics::metrics().inc_nodes_written(nodes.len() as u64);
        metrics::metrics().inc_bytes_written_total(written_bytes);
        Ok(())
    }

    fn get_root(&self, height: u64) -> Result<Option<NodeHash>, StorageError> {
        let txn = self.db.begin_read()?;
        let table = txn.open_table(ROOTS)?;
        let key = height.to_be_bytes();
        match table.get(key.as_slice())? {
            Some(guard) => {
                let bytes = guard.value();
                let hash: NodeHash = bytes
                    .try_into()
                    .map_err(|_| StorageError::Corrupt(format!("root@{height}")))?;
                Ok(Some(hash))
            }
            None => Ok(None),
        }
    }

    fn put_root(&self, height: u64, root: NodeHash) -> Result<(), StorageError> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(ROOTS)?;
            table.insert(height.to_be_bytes().as_slice(), root.as_slice())?;
        }
        txn.commit()?;
        metrics::metrics().set_committed_height(height);
        Ok(())
    }

    fn latest_height(&self) -> Result<Option<u64>, StorageError> {
        let txn = self.db.begin_read()?;
        let table = txn.open_table(ROOTS)?;
        match table.iter()?.next_back() {
            Some(entry) => {
                let (key, _) = entry?;
                let bytes = key.value();
                let height_bytes: [u8; 8] = bytes
                    .try_into()
                    .map_err(|_| StorageError::Corrupt("root index key".to_string()))?;
                Ok(Some(u64::from_be_bytes(height_bytes)))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node_store::test_support::roundtrip_smoke;
    use std::sync::atomic::{AtomicU64, Ordering};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    fn temp_db_path() -> std::path::PathBuf {
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        std::env::temp_dir().join(format!(
            "ticketchain-storage-test-{}-{}.redb",
            std::process::id(),
            n
        ))
    }

    #[test]
    fn satisfies_node_store_contract() {
        let path = temp_db_path();
        let store = RedbNodeStore::open(&path).unwrap();
        roundtrip_smoke(&store);
        drop(store);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn reopen_preserves_committed_state() {
        let path = temp_db_path();
        {
            let store = RedbNodeStore::open(&path).unwrap();
            store.put_nodes(&[([9u8; 32], b"persisted".to_vec())]).unwrap();
            store.put_root(5, [9u8; 32]).unwrap();
        }
        {
            let store = RedbNodeStore::open(&path).unwrap();
            assert_eq!(store.latest_height().unwrap(), Some(5));
            assert_eq!(store.get_node(&[9u8; 32]).unwrap(), Some(b"persisted".to_vec()));
        }
        let _ = std::fs::remove_file(&path);
    }
}
