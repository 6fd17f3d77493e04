// Path: crates/execution/src/lib.rs
//! # Ticketchain Execution Crate Lints
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

//! # Ticketchain Execution
//!
//! The per-kind transaction executors and the per-block
//! orchestrator: together these turn a proposed block's
//! transactions into the next committed state tree version.

/// The context bag threaded into every executor.
pub mod context;
/// One module per transaction kind, plus the dispatch table.
pub mod executors;
/// The per-block orchestrator.
pub mod logic;
/// The common post-execution tail shared by every executor.
pub mod tail;

pub use context::ExecCtx;
pub use logic::{BlockResult, Logic, TxOutcome};
