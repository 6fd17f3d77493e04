// Path: crates/crypto/src/sign/eddsa/mod.rs
//! Ed25519 keypair generation, signing, and verification using `dcrypt`.

use crate::error::CryptoError;
use dcrypt::api::Signature as SignatureTrait;
use dcrypt::sign::eddsa;
use rand::rngs::OsRng;

/// An Ed25519 keypair.
#[derive(Clone)]
pub struct Ed25519KeyPair {
    public_key: eddsa::Ed25519PublicKey,
    secret_key: eddsa::Ed25519SecretKey,
}

/// A raw Ed25519 signature (64 bytes).
pub struct Ed25519Signature(eddsa::Ed25519Signature);

impl Ed25519KeyPair {
    /// Generates a new keypair from a secure random source.
    pub fn generate() -> Result<Self, CryptoError> {
        let mut rng = OsRng;
        let (public_key, secret_key) =
            eddsa::Ed25519::keypair(&mut rng).map_err(CryptoError::from)?;
        Ok(Self { public_key, secret_key })
    }

    /// Generates a deterministic keypair from a `u64` seed, for tests and
    /// for any caller that needs the same seed to always yield the same
    /// derived keys and addresses.
    ///
    /// The seed is the integer's big-endian 32-byte canonical encoding, fed
    /// straight into Ed25519 seed expansion — not an RNG expansion of it.
    /// Routing this through `StdRng`/`OsRng`-style generic RNG expansion
    /// would make the derived key depend on the RNG's internal stream
    /// rather than the seed integer's own bytes, which is what callers
    /// (and golden-value tests pinned to a given seed) rely on.
    pub fn generate_from_seed(seed: u64) -> Result<Self, CryptoError> {
        let mut seed_bytes = [0u8; 32];
        seed_bytes[24..].copy_from_slice(&seed.to_be_bytes());
        Self::from_seed_bytes(&seed_bytes)
    }

    /// Reconstructs a keypair from a 32-byte seed.
    pub fn from_seed_bytes(seed: &[u8; 32]) -> Result<Self, CryptoError> {
        let secret_key = eddsa::Ed25519SecretKey::from_seed(seed).map_err(CryptoError::from)?;
        let public_key = secret_key.public_key().map_err(CryptoError::from)?;
        Ok(Self { public_key, secret_key })
    }

    /// The raw 32-byte public key.
    pub fn public_key_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out.copy_from_slice(self.public_key.to_bytes().as_ref());
        out
    }

    /// The 32-byte seed backing the private key.
    pub fn seed(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out.copy_from_slice(self.secret_key.seed());
        out
    }

    /// The 64-byte expanded private key form (`seed || public key`), the
    /// representation that gets base58-encoded for export.
    pub fn expanded_private_key(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        let (left, right) = out.split_at_mut(32);
        left.copy_from_slice(&self.seed());
        right.copy_from_slice(&self.public_key_bytes());
        out
    }

    /// Signs a message, producing a 64-byte raw signature.
    pub fn sign(&self, message: &[u8]) -> Result<Ed25519Signature, CryptoError> {
        let signature = eddsa::Ed25519::sign(message, &self.secret_key).map_err(CryptoError::from)?;
        Ok(Ed25519Signature(signature))
    }

    /// Verifies a message against this keypair's public key.
    pub fn verify(&self, message: &[u8], signature: &Ed25519Signature) -> Result<(), CryptoError> {
        verify(&self.public_key_bytes(), message, signature)
    }
}

/// Verifies a raw signature against a raw 32-byte public key. Returns
/// [`CryptoError::VerificationFailed`] on mismatch, never a panic.
pub fn verify(
    raw_public_key: &[u8; 32],
    message: &[u8],
    signature: &Ed25519Signature,
) -> Result<(), CryptoError> {
    let public_key =
        eddsa::Ed25519PublicKey::from_bytes(raw_public_key).map_err(CryptoError::from)?;
    eddsa::Ed25519::verify(message, &signature.0, &public_key)
        .map_err(|_| CryptoError::VerificationFailed)
}

impl Ed25519Signature {
    /// The raw 64 signature bytes. Returns an error if the signature is not
    /// exactly 64 bytes,
    pub fn to_bytes(&self) -> Result<[u8; 64], CryptoError> {
        let raw = self.0.to_bytes();
        if raw.as_ref().len() != 64 {
            return Err(CryptoError::InvalidFormat(
                "signature must be 64 bytes".to_string(),
            ));
        }
        let mut out = [0u8; 64];
        out.copy_from_slice(raw.as_ref());
        Ok(out)
    }

    /// Parses a raw 64-byte signature.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() != 64 {
            return Err(CryptoError::InvalidFormat(format!(
                "signature must be 64 bytes, got {}",
                bytes.len()
            )));
        }
        eddsa::Ed25519Signature::from_bytes(bytes)
            .map(Ed25519Signature)
            .map_err(CryptoError::from)
    }
}

/// Derives a 32-byte seed suitable for a BLS key from an Ed25519 private
/// key's seed: the BLS key is seeded from the first 32 bytes of the private
/// key. For an Ed25519 key the seed itself already is those 32 bytes.
pub fn bls_seed_from_private_key(keypair: &Ed25519KeyPair) -> [u8; 32] {
    keypair.seed()
}

/// Derives a 64-byte seed suitable for a VRF key from an Ed25519 private
/// key's full expanded form: the VRF key is seeded from the full 64 bytes.
pub fn vrf_seed_from_private_key(keypair: &Ed25519KeyPair) -> [u8; 64] {
    keypair.expanded_private_key()
}

#[cfg(test)]
mod tests;
