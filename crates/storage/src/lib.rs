// Path: crates/storage/src/lib.rs
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

//! Pure-Rust persistent storage for the authenticated state tree.
//!
//! This crate exposes [`NodeStore`], a transactional, content-addressed
//! byte store plus a height-indexed root pointer, and two implementations:
//! [`mem_store::MemNodeStore`] for tests and ephemeral chains, and
//! [`redb_store::RedbNodeStore`] for durable on-disk persistence.

pub mod error;
pub mod mem_store;
pub mod metrics;
pub mod node_store;
pub mod redb_store;

pub use error::StorageError;
pub use mem_store::MemNodeStore;
pub use node_store::{NodeHash, NodeStore};
pub use redb_store::RedbNodeStore;
