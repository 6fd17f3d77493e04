// Path: crates/crypto/src/algorithms/hash/mod.rs
//! Cryptographic hash functions used by the identity layer.

use crate::error::CryptoError;
use dcrypt::algorithms::hash::sha2::{Sha256 as DcryptSha256, Sha512 as DcryptSha512};
use dcrypt::algorithms::hash::HashFunction as DcryptHashFunction;
use dcrypt::algorithms::ByteSerializable;
use ripemd::{Digest, Ripemd160};

/// Hash function trait, mirroring the shape of `dcrypt`'s own so RIPEMD-160
/// (not provided by `dcrypt`) composes uniformly with the SHA family.
pub trait HashFunction {
    /// Hash a message and return the digest.
    fn hash(&self, message: &[u8]) -> Result<Vec<u8>, CryptoError>;

    /// The digest size in bytes.
    fn digest_size(&self) -> usize;

    /// The name of the hash function.
    fn name(&self) -> &str;
}

/// SHA-256 hash function implementation using `dcrypt`.
#[derive(Default, Clone)]
pub struct Sha256Hash;

impl HashFunction for Sha256Hash {
    fn hash(&self, message: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let digest = DcryptSha256::digest(message).map_err(dcrypt::Error::from)?;
        Ok(digest.to_bytes())
    }

    fn digest_size(&self) -> usize {
        32
    }

    fn name(&self) -> &str {
        "SHA-256"
    }
}

/// SHA-512 hash function implementation using `dcrypt`.
#[derive(Default, Clone)]
pub struct Sha512Hash;

impl HashFunction for Sha512Hash {
    fn hash(&self, message: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let digest = DcryptSha512::digest(message).map_err(dcrypt::Error::from)?;
        Ok(digest.to_bytes())
    }

    fn digest_size(&self) -> usize {
        64
    }

    fn name(&self) -> &str {
        "SHA-512"
    }
}

/// RIPEMD-160 hash function, used to derive the 20-byte address hash from a
/// raw Ed25519 public key.
#[derive(Default, Clone)]
pub struct Ripemd160Hash;

impl HashFunction for Ripemd160Hash {
    fn hash(&self, message: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let mut hasher = Ripemd160::new();
        hasher.update(message);
        Ok(hasher.finalize().to_vec())
    }

    fn digest_size(&self) -> usize {
        20
    }

    fn name(&self) -> &str {
        "RIPEMD-160"
    }
}

/// Hashes a public key with RIPEMD-160, the data part of every bech32
/// address.
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    let mut hasher = Ripemd160::new();
    hasher.update(data);
    let out = hasher.finalize();
    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&out);
    bytes
}

/// Hashes data with SHA-256, returning a fixed 32-byte digest.
pub fn sha256<T: AsRef<[u8]>>(data: T) -> Result<[u8; 32], CryptoError> {
    let hasher = Sha256Hash;
    let digest = hasher.hash(data.as_ref())?;
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    Ok(out)
}

/// Hashes data with SHA-512, returning a fixed 64-byte digest.
pub fn sha512<T: AsRef<[u8]>>(data: T) -> Result<[u8; 64], CryptoError> {
    let hasher = Sha512Hash;
    let digest = hasher.hash(data.as_ref())?;
    let mut out = [0u8; 64];
    out.copy_from_slice(&digest);
    Ok(out)
}
