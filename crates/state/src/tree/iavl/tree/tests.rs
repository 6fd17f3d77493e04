// Path: crates/state/src/tree/iavl/tree/tests.rs
use super::*;
use ticketchain_storage::MemNodeStore;

fn kv(k: &str, v: &str) -> (Vec<u8>, Vec<u8>) {
    (k.as_bytes().to_vec(), v.as_bytes().to_vec())
}

#[test]
fn get_returns_none_for_missing_key() {
    let tree = IavlTree::new();
    assert_eq!(tree.get(b"missing").unwrap(), None);
}

#[test]
fn insert_then_get_roundtrips() {
    let mut tree = IavlTree::new();
    tree.insert(b"acc:alice", b"100").unwrap();
    assert_eq!(tree.get(b"acc:alice").unwrap(), Some(b"100".to_vec()));
}

#[test]
fn insert_overwrites_existing_value() {
    let mut tree = IavlTree::new();
    tree.insert(b"acc:alice", b"100").unwrap();
    tree.insert(b"acc:alice", b"200").unwrap();
    assert_eq!(tree.get(b"acc:alice").unwrap(), Some(b"200".to_vec()));
}

#[test]
fn delete_removes_key() {
    let mut tree = IavlTree::new();
    tree.insert(b"acc:alice", b"100").unwrap();
    tree.delete(b"acc:alice").unwrap();
    assert_eq!(tree.get(b"acc:alice").unwrap(), None);
}

#[test]
fn prefix_scan_returns_only_matching_keys_sorted() {
    let mut tree = IavlTree::new();
    for (k, v) in [
        kv("acc:bob", "2"),
        kv("acc:alice", "1"),
        kv("rep:repo1", "x"),
        kv("acc:carol", "3"),
    ] {
        tree.insert(&k, &v).unwrap();
    }
    let results: Vec<_> = tree
        .prefix_scan(b"acc:")
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    let keys: Vec<Vec<u8>> = results.iter().map(|(k, _): &(Arc<[u8]>, Arc<[u8]>)| k.to_vec()).collect();
    assert_eq!(
        keys,
        vec![b"acc:alice".to_vec(), b"acc:bob".to_vec(), b"acc:carol".to_vec()]
    );
}

#[test]
fn commit_version_is_deterministic_across_insertion_order() {
    let mut tree_a = IavlTree::new();
    tree_a.insert(b"a", b"1").unwrap();
    tree_a.insert(b"b", b"2").unwrap();
    tree_a.insert(b"c", b"3").unwrap();
    let root_a = tree_a.commit_version(1).unwrap();

    let mut tree_b = IavlTree::new();
    tree_b.insert(b"c", b"3").unwrap();
    tree_b.insert(b"a", b"1").unwrap();
    tree_b.insert(b"b", b"2").unwrap();
    let root_b = tree_b.commit_version(1).unwrap();

    assert_eq!(root_a, root_b);
}

#[test]
fn app_hash_changes_when_a_value_changes() {
    let mut tree = IavlTree::new();
    tree.insert(b"a", b"1").unwrap();
    let root_before = tree.commit_version(1).unwrap();
    tree.insert(b"a", b"2").unwrap();
    let root_after = tree.commit_version(2).unwrap();
    assert_ne!(root_before, root_after);
}

#[test]
fn reopening_from_store_restores_committed_state() {
    use std::sync::Arc as StdArc;
    let store: StdArc<dyn ticketchain_storage::NodeStore> = StdArc::new(MemNodeStore::new());

    let mut tree = IavlTree::new();
    tree.attach_store(store.clone());
    tree.insert(b"acc:alice", b"100").unwrap();
    tree.insert(b"acc:bob", b"50").unwrap();
    let committed_root = tree.commit_version(1).unwrap();

    let reopened = IavlTree::open(store).unwrap();
    assert_eq!(reopened.app_hash(), committed_root);
    assert_eq!(reopened.get(b"acc:alice").unwrap(), Some(b"100".to_vec()));
    assert_eq!(reopened.get(b"acc:bob").unwrap(), Some(b"50".to_vec()));
}

#[test]
fn at_height_reads_a_prior_version_after_later_writes() {
    let mut tree = IavlTree::new();
    tree.insert(b"acc:alice", b"100").unwrap();
    tree.commit_version(1).unwrap();

    tree.insert(b"acc:alice", b"200").unwrap();
    tree.commit_version(2).unwrap();

    let snapshot = tree.at_height(1).unwrap();
    assert_eq!(snapshot.get(b"acc:alice").unwrap(), Some(b"100".to_vec()));
    assert_eq!(tree.get(b"acc:alice").unwrap(), Some(b"200".to_vec()));
}

#[test]
fn delete_then_reinsert_restores_a_stable_root() {
    let mut tree = IavlTree::new();
    tree.insert(b"a", b"1").unwrap();
    tree.insert(b"b", b"2").unwrap();
    let root_before = tree.commit_version(1).unwrap();

    tree.delete(b"b").unwrap();
    tree.insert(b"b", b"2").unwrap();
    let root_after = tree.commit_version(2).unwrap();

    assert_eq!(root_before, root_after);
}
