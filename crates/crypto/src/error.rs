// Path: crates/crypto/src/error.rs
//! Local error types for the `ticketchain-crypto` crate.

// Re-export the canonical error type from the base types crate.
pub use ticketchain_types::error::CryptoError;
