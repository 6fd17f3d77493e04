// Path: crates/crypto/src/identity/mod.rs
//! Bech32 address derivation and base58 key encoding.

use crate::algorithms::hash::ripemd160;
use crate::error::CryptoError;
use bech32::{FromBase32, ToBase32, Variant};
use ticketchain_types::ids::{Address, AddressHash};

/// Human-readable part for a user account address.
pub const USER_ADDRESS_HRP: &str = "os";
/// Human-readable part for a push-key identity address.
pub const PUSH_ADDRESS_HRP: &str = "pk";

/// Version byte prefixed to a base58-encoded public key.
pub const PUBLIC_KEY_VERSION: u8 = 0x5c;
/// Version byte prefixed to a base58-encoded private key.
pub const PRIVATE_KEY_VERSION: u8 = 0xa8;

/// RIPEMD-160 of a raw 32-byte Ed25519 public key; the data part of every
/// bech32 address.
pub fn address_hash(raw_public_key: &[u8; 32]) -> AddressHash {
    AddressHash(ripemd160(raw_public_key))
}

/// Derives the bech32 user address (`os1...`) for a raw public key.
pub fn user_address(raw_public_key: &[u8; 32]) -> Result<Address, CryptoError> {
    encode_address(USER_ADDRESS_HRP, &address_hash(raw_public_key))
}

/// Derives the bech32 push-key address (`pk1...`) for a raw public key.
pub fn push_address(raw_public_key: &[u8; 32]) -> Result<Address, CryptoError> {
    encode_address(PUSH_ADDRESS_HRP, &address_hash(raw_public_key))
}

fn encode_address(hrp: &str, hash: &AddressHash) -> Result<Address, CryptoError> {
    bech32::encode(hrp, hash.as_bytes().to_base32(), Variant::Bech32)
        .map(Address::from)
        .map_err(|e| CryptoError::InvalidFormat(format!("bech32 encode failed: {e}")))
}

/// Decodes a bech32 address, verifying its human-readable part and that its
/// data part is exactly 20 bytes. Empty string, wrong HRP, and wrong length
/// each fail with a distinct named error.
pub fn decode_address(addr: &str, expected_hrp: &str) -> Result<AddressHash, CryptoError> {
    if addr.is_empty() {
        return Err(CryptoError::InvalidFormat("empty address".to_string()));
    }
    let (hrp, data, variant) = bech32::decode(addr)
        .map_err(|e| CryptoError::InvalidFormat(format!("unparsable bech32: {e}")))?;
    if hrp != expected_hrp {
        return Err(CryptoError::InvalidFormat(format!(
            "wrong HRP: expected {expected_hrp}, got {hrp}"
        )));
    }
    if variant != Variant::Bech32 {
        return Err(CryptoError::InvalidFormat("wrong bech32 variant".to_string()));
    }
    let raw = Vec::<u8>::from_base32(&data)
        .map_err(|e| CryptoError::InvalidFormat(format!("bad base32 data: {e}")))?;
    if raw.len() != 20 {
        return Err(CryptoError::InvalidFormat(format!(
            "address data part must be 20 bytes, got {}",
            raw.len()
        )));
    }
    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&raw);
    Ok(AddressHash(bytes))
}

/// Returns `Ok(())` if `addr` is a well-formed user address, else the named
/// validation error.
pub fn is_valid_user_addr(addr: &str) -> Result<(), CryptoError> {
    decode_address(addr, USER_ADDRESS_HRP).map(|_| ())
}

/// Returns `Ok(())` if `addr` is a well-formed push address.
pub fn is_valid_push_addr(addr: &str) -> Result<(), CryptoError> {
    decode_address(addr, PUSH_ADDRESS_HRP).map(|_| ())
}

/// Base58-encodes a public key with its version byte prefix.
pub fn encode_public_key_base58(raw_public_key: &[u8; 32]) -> String {
    let mut buf = Vec::with_capacity(33);
    buf.push(PUBLIC_KEY_VERSION);
    buf.extend_from_slice(raw_public_key);
    bs58::encode(buf).into_string()
}

/// Decodes a base58 public key, rejecting any version byte other than
/// [`PUBLIC_KEY_VERSION`].
pub fn decode_public_key_base58(encoded: &str) -> Result<[u8; 32], CryptoError> {
    let raw = bs58::decode(encoded)
        .into_vec()
        .map_err(|e| CryptoError::InvalidFormat(format!("bad base58: {e}")))?;
    if raw.len() != 33 {
        return Err(CryptoError::InvalidFormat(format!(
            "expected 33 bytes (version + 32-byte key), got {}",
            raw.len()
        )));
    }
    let (version, rest) = raw
        .split_first()
        .ok_or_else(|| CryptoError::InvalidFormat("empty key bytes".to_string()))?;
    if *version != PUBLIC_KEY_VERSION {
        return Err(CryptoError::InvalidFormat(format!(
            "wrong public key version byte: {version:#x}"
        )));
    }
    let mut key = [0u8; 32];
    key.copy_from_slice(rest);
    Ok(key)
}

/// Base58-encodes a private key's 64-byte expanded form with its version
/// byte prefix.
pub fn encode_private_key_base58(expanded: &[u8; 64]) -> String {
    let mut buf = Vec::with_capacity(65);
    buf.push(PRIVATE_KEY_VERSION);
    buf.extend_from_slice(expanded);
    bs58::encode(buf).into_string()
}

/// Decodes a base58 private key, rejecting any version byte other than
/// [`PRIVATE_KEY_VERSION`].
pub fn decode_private_key_base58(encoded: &str) -> Result<[u8; 64], CryptoError> {
    let raw = bs58::decode(encoded)
        .into_vec()
        .map_err(|e| CryptoError::InvalidFormat(format!("bad base58: {e}")))?;
    if raw.len() != 65 {
        return Err(CryptoError::InvalidFormat(format!(
            "expected 65 bytes (version + 64-byte key), got {}",
            raw.len()
        )));
    }
    let (version, rest) = raw
        .split_first()
        .ok_or_else(|| CryptoError::InvalidFormat("empty key bytes".to_string()))?;
    if *version != PRIVATE_KEY_VERSION {
        return Err(CryptoError::InvalidFormat(format!(
            "wrong private key version byte: {version:#x}"
        )));
    }
    let mut key = [0u8; 64];
    key.copy_from_slice(rest);
    Ok(key)
}
