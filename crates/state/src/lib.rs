// Path: crates/state/src/lib.rs
//! # Ticketchain State Crate Lints
//!
//! This crate enforces a strict set of lints to ensure high-quality,
//! panic-free, and well-documented code. Panics are disallowed in non-test
//! code to promote robust error handling.
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

//! # Ticketchain State
//!
//! Defines [`access::StateAccess`]/[`access::StateManager`], the flat
//! byte-keyed read/write contract the keeper layer is built on, and
//! [`tree::iavl::IavlTree`], the versioned, authenticated tree that
//! implements it over a `ticketchain-storage::NodeStore`.

pub mod access;
pub mod tree;

pub use access::{HistoricalStateAccess, StateAccess, StateManager, StateScanIter};
pub use tree::iavl::IavlTree;
