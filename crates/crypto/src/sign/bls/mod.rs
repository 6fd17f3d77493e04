// Path: crates/crypto/src/sign/bls/mod.rs
//! BLS12-381 key derivation for the host-ticket `blsPubKey` field.
//!
//! Conforms to a BLS variant using hash-to-scalar for compatibility:
//! signatures in G1, public keys in G2, hashing via `Scalar::hash_to_field`.

use crate::error::CryptoError;
use dcrypt::algorithms::ec::bls12_381::{
    pairing, Bls12_381Scalar as Scalar, G1Affine, G1Projective, G2Affine, G2Projective,
};

const BLS_DST: &[u8] = b"BLS_SIG_BLS12381G1_XMD:SHA-256_SSWU_RO_NUL_";
const BLS_KEYGEN_DST: &[u8] = b"TICKETCHAIN-BLS-KEYGEN";

/// A BLS12-381 keypair.
#[derive(Clone)]
pub struct BlsKeyPair {
    public_key: BlsPublicKey,
    secret_key: BlsPrivateKey,
}

/// A compressed G2 BLS public key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlsPublicKey(G2Affine);

/// A BLS secret scalar.
#[derive(Clone)]
pub struct BlsPrivateKey(Scalar);

/// A compressed G1 BLS signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlsSignature(G1Affine);

impl BlsKeyPair {
    /// Derives a BLS keypair from the 32-byte seed carried by an Ed25519
    /// private key. The same seed always yields the same keypair.
    pub fn from_seed(seed: &[u8; 32]) -> Result<Self, CryptoError> {
        let secret = Scalar::hash_to_field(seed, BLS_KEYGEN_DST)
            .map_err(|e| CryptoError::Primitive(format!("BLS keygen failed: {e:?}")))?;
        let public = G2Affine::from(G2Projective::generator() * secret);
        Ok(Self {
            public_key: BlsPublicKey(public),
            secret_key: BlsPrivateKey(secret),
        })
    }

    /// This keypair's public key.
    pub fn public_key(&self) -> BlsPublicKey {
        self.public_key.clone()
    }

    /// Signs a message.
    pub fn sign(&self, message: &[u8]) -> Result<BlsSignature, CryptoError> {
        self.secret_key.sign(message)
    }
}

impl BlsPublicKey {
    /// Verifies a signature against this public key via the pairing check
    /// `e(sig, g2) == e(H(m), pk)`.
    pub fn verify(&self, message: &[u8], signature: &BlsSignature) -> Result<(), CryptoError> {
        let msg_scalar = Scalar::hash_to_field(message, BLS_DST)
            .map_err(|e| CryptoError::Primitive(format!("hash-to-field failed: {e:?}")))?;
        let msg_point = G1Affine::from(G1Projective::generator() * msg_scalar);

        let lhs = pairing(&signature.0, &G2Affine::generator());
        let rhs = pairing(&msg_point, &self.0);

        if lhs == rhs {
            Ok(())
        } else {
            Err(CryptoError::VerificationFailed)
        }
    }

    /// The compressed 96-byte G2 point.
    pub fn to_bytes(&self) -> [u8; 96] {
        let compressed = self.0.to_compressed();
        let mut out = [0u8; 96];
        out.copy_from_slice(compressed.as_ref());
        out
    }

    /// Parses a compressed 96-byte G2 point.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() != 96 {
            return Err(CryptoError::InvalidFormat(format!(
                "BLS public key must be 96 bytes, got {}",
                bytes.len()
            )));
        }
        let mut arr = [0u8; 96];
        arr.copy_from_slice(bytes);
        let point = G2Affine::from_compressed(&arr)
            .into_option()
            .ok_or_else(|| CryptoError::InvalidFormat("invalid G2 point".to_string()))?;
        Ok(Self(point))
    }
}

impl BlsPrivateKey {
    fn sign(&self, message: &[u8]) -> Result<BlsSignature, CryptoError> {
        let msg_scalar = Scalar::hash_to_field(message, BLS_DST)
            .map_err(|e| CryptoError::Primitive(format!("hash-to-field failed: {e:?}")))?;
        let msg_point = G1Projective::generator() * msg_scalar;
        let sig = msg_point * self.0;
        Ok(BlsSignature(G1Affine::from(sig)))
    }
}

impl BlsSignature {
    /// The compressed 48-byte G1 point.
    pub fn to_bytes(&self) -> [u8; 48] {
        let compressed = self.0.to_compressed();
        let mut out = [0u8; 48];
        out.copy_from_slice(compressed.as_ref());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_and_verify_roundtrip() {
        let keypair = BlsKeyPair::from_seed(&[7u8; 32]).expect("keygen");
        let message = b"hostTicket:purchase";
        let signature = keypair.sign(message).expect("sign");
        assert!(keypair.public_key().verify(message, &signature).is_ok());
    }

    #[test]
    fn wrong_message_fails_verification() {
        let keypair = BlsKeyPair::from_seed(&[7u8; 32]).expect("keygen");
        let signature = keypair.sign(b"right").expect("sign");
        assert!(keypair.public_key().verify(b"wrong", &signature).is_err());
    }

    #[test]
    fn same_seed_yields_same_public_key() {
        let a = BlsKeyPair::from_seed(&[1u8; 32]).expect("keygen");
        let b = BlsKeyPair::from_seed(&[1u8; 32]).expect("keygen");
        assert_eq!(a.public_key(), b.public_key());
    }

    #[test]
    fn public_key_roundtrips_through_bytes() {
        let keypair = BlsKeyPair::from_seed(&[3u8; 32]).expect("keygen");
        let bytes = keypair.public_key().to_bytes();
        let restored = BlsPublicKey::from_bytes(&bytes).expect("parse");
        assert_eq!(keypair.public_key(), restored);
    }
}
