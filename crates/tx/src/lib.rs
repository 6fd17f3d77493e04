// Path: crates/tx/src/lib.rs
//! # Ticketchain Tx Crate Lints
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

//! # Ticketchain Tx
//!
//! The transaction taxonomy, its canonical wire codec, the
//! Blake2b-256 signing domain, and the non-optional system
//! checks (nonce, signature, balance) every executor relies on.

/// Per-kind transaction payloads.
pub mod body;
/// The transaction type-code taxonomy.
pub mod kind;
/// Non-optional nonce and signature/balance validation, shared by every
/// executor's `PrepareExec` step.
pub mod system;
/// The signed transaction wire record.
pub mod transaction;

pub use body::TxBody;
pub use kind::TxKind;
pub use transaction::Transaction;
