// Path: crates/crypto/src/lib.rs
//! # Ticketchain Crypto Crate Lints
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
        clippy::indexing_slicing
    )
)]
//! # Ticketchain Cryptography
//!
//! Ed25519 identity (keypairs, signing, bech32/base58 address codecs) plus
//! BLS and VRF key-seed derivation for host tickets.

/// Hash function implementations (SHA-256/512, RIPEMD-160) used by the
/// address-derivation pipeline.
pub mod algorithms;
/// Bech32 user/push address derivation and base58 key encoding.
pub mod identity;
/// The canonical error type, re-exported from `ticketchain-types`.
pub mod error;
/// Ed25519 and BLS signing primitives.
pub mod sign;
/// VRF key-seed derivation.
pub mod vrf;
