// Path: crates/crypto/src/sign/mod.rs

/// BLS12-381 key derivation, used for the host-ticket `blsPubKey` field.
pub mod bls;
/// Ed25519 keypair generation, signing, and verification.
pub mod eddsa;
