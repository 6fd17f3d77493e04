// Path: crates/tx/src/transaction.rs
//! The signed transaction wire record.

use crate::body::TxBody;
use crate::kind::TxKind;
use blake2::Blake2b;
use blake2::Digest;
use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};
use ticketchain_crypto::sign::eddsa::{self, Ed25519KeyPair, Ed25519Signature};
use ticketchain_types::codec::{from_bytes_canonical, to_bytes_canonical};
use ticketchain_types::decimal::Decimal;
use ticketchain_types::error::TransactionError;
use ticketchain_types::ids::TxHash;

type Blake2b256 = Blake2b<blake2::digest::consts::U32>;

/// A fully-formed, signed transaction.
///
/// Field order: type code (projected from `body`), then sender/nonce/fee
/// header fields, then the per-kind body, then the signature. `signature`
/// is always exactly 64 bytes once signed; a not-yet-signed transaction
/// carries the all-zero placeholder.
#[derive(Encode, Decode, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Transaction {
    /// Raw Ed25519 public key of the sender.
    pub sender_pub_key: [u8; 32],
    /// Expected to equal `account.nonce + 1`.
    pub nonce: u64,
    /// Flat fee charged regardless of kind.
    pub fee: Decimal,
    /// The per-kind payload.
    pub body: TxBody,
    /// Raw 64-byte Ed25519 signature over [`Transaction::signing_bytes`].
    pub signature: [u8; 64],
}

impl Transaction {
    /// This transaction's type code.
    pub fn kind(&self) -> TxKind {
        self.body.kind()
    }

    /// The canonical encoding of this transaction with `signature` emptied —
    /// the domain the signer actually commits to.
    pub fn signing_bytes(&self) -> Vec<u8> {
        let mut unsigned = self.clone();
        unsigned.signature = [0u8; 64];
        unsigned.encode()
    }

    /// Blake2b-256 over [`Transaction::signing_bytes`] — stable regardless
    /// of which (single, valid) signature is attached, so it is safe to use
    /// as the ticket store's unique ticket identifier.
    pub fn hash(&self) -> TxHash {
        let mut hasher = Blake2b256::new();
        hasher.update(self.signing_bytes());
        let digest = hasher.finalize();
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&digest);
        TxHash(bytes)
    }

    /// Signs `self` in place with `keypair`, whose public key must equal
    /// `sender_pub_key`.
    pub fn sign(&mut self, keypair: &Ed25519KeyPair) -> Result<(), TransactionError> {
        let signature = keypair
            .sign(&self.signing_bytes())
            .map_err(TransactionError::Crypto)?;
        self.signature = signature.to_bytes().map_err(TransactionError::Crypto)?;
        Ok(())
    }

    /// Verifies `signature` against `sender_pub_key` over [`Transaction::signing_bytes`].
    /// Fails with [`TransactionError::VerificationFailed`] if the signature
    /// does not verify — a transaction whose `to` field is altered after
    /// signing fails verification.
    pub fn verify_signature(&self) -> Result<(), TransactionError> {
        let signature = Ed25519Signature::from_bytes(&self.signature)
            .map_err(|_| TransactionError::VerificationFailed)?;
        eddsa::verify(&self.sender_pub_key, &self.signing_bytes(), &signature)
            .map_err(|_| TransactionError::VerificationFailed)
    }

    /// Decodes a wire-format transaction.
    pub fn decode(bytes: &[u8]) -> Result<Self, TransactionError> {
        from_bytes_canonical(bytes).map_err(TransactionError::DecodeFailure)
    }

    /// Encodes this transaction to its wire form.
    pub fn encode_to_bytes(&self) -> Result<Vec<u8>, TransactionError> {
        to_bytes_canonical(self).map_err(TransactionError::DecodeFailure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticketchain_types::ids::Address;

    fn signed_transfer(keypair: &Ed25519KeyPair, to: &str, value: u64) -> Transaction {
        let mut tx = Transaction {
            sender_pub_key: keypair.public_key_bytes(),
            nonce: 1,
            fee: Decimal::from(1u64),
            body: TxBody::CoinTransfer { to: Address::from(to), value: Decimal::from(value) },
            signature: [0u8; 64],
        };
        tx.sign(keypair).unwrap();
        tx
    }

    #[test]
    fn well_formed_signature_verifies() {
        let keypair = Ed25519KeyPair::generate_from_seed(1).unwrap();
        let tx = signed_transfer(&keypair, "os1bob", 10);
        assert!(tx.verify_signature().is_ok());
    }

    #[test]
    fn tampering_with_a_signed_field_fails_verification() {
        let keypair = Ed25519KeyPair::generate_from_seed(1).unwrap();
        let mut tx = signed_transfer(&keypair, "os1bob", 10);
        tx.body = TxBody::CoinTransfer { to: Address::from("os1eve"), value: Decimal::from(10u64) };
        assert!(tx.verify_signature().is_err());
    }

    #[test]
    fn hash_is_stable_across_encode_decode_roundtrip() {
        let keypair = Ed25519KeyPair::generate_from_seed(1).unwrap();
        let tx = signed_transfer(&keypair, "os1bob", 10);
        let bytes = tx.encode_to_bytes().unwrap();
        let back = Transaction::decode(&bytes).unwrap();
        assert_eq!(tx.hash(), back.hash());
    }

    #[test]
    fn decode_rejects_garbage_bytes() {
        assert!(Transaction::decode(&[0xff, 0x01]).is_err());
    }
}
