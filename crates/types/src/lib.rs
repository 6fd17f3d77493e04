// Path: crates/types/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]

//! # Ticketchain Types
//!
//! This crate is the foundational library for the ticket-governed
//! proof-of-stake core, containing all core data structures, the canonical
//! codec, the error taxonomy, and chain parameters.
//!
//! ## Architectural Role
//!
//! As the base crate, `ticketchain-types` has minimal dependencies and is
//! itself a dependency for almost every other crate in the workspace. This
//! prevents circular dependencies and provides a stable, canonical
//! definition for shared types like `Account`, `Ticket`, `Address`, and the
//! error enums.

/// The maximum size in bytes for a value read from state during block
/// execution.
pub const MAX_STATE_VALUE_BYTES: usize = 256 * 1024;
/// The maximum size in bytes for an authenticated proof read from state.
pub const MAX_STATE_PROOF_BYTES: usize = 512 * 1024;

/// A top-level, crate-wide `Result` type alias with a default error type.
pub type Result<T, E = crate::error::ChainError> = std::result::Result<T, E>;

/// The canonical, deterministic binary codec for consensus-critical state.
pub mod codec;
/// Chain-wide tunables (`ChainParams`).
pub mod config;
/// Arbitrary-precision decimal values for monetary amounts.
pub mod decimal;
/// State entities: `Account`, `Repository`, `Namespace`, `Ticket`,
/// `BlockInfo`, `Validator`.
pub mod entities;
/// The unified set of error types used across the core.
pub mod error;
/// Canonical identifiers: `Address`, `AddressHash`, `TxHash`.
pub mod ids;
/// Constants for well-known state key prefixes.
pub mod keys;
/// A prelude containing useful extension traits like `OptionExt`.
pub mod prelude;
