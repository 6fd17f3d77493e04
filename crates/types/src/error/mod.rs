// Path: crates/types/src/error/mod.rs
//! Core error taxonomy for the ticket-governed state-transition core.

use thiserror::Error;

/// A trait for assigning a stable, machine-readable string code to an error.
pub trait ErrorCode {
    /// Returns the unique, stable string identifier for this error variant.
    fn code(&self) -> &'static str;
}

/// Errors surfaced by the cryptographic identity layer (keys, signatures, addresses).
#[derive(Error, Debug)]
pub enum CryptoError {
    /// A bech32 or base58 address string could not be parsed, had the wrong
    /// human-readable part, the wrong version byte, or the wrong data length.
    #[error("invalid address format: {0}")]
    InvalidFormat(String),
    /// A signature failed to verify against the declared signer public key.
    #[error("signature verification failed")]
    VerificationFailed,
    /// The underlying `dcrypt` primitive rejected the operation.
    #[error("cryptographic primitive error: {0}")]
    Primitive(String),
}

impl ErrorCode for CryptoError {
    fn code(&self) -> &'static str {
        match self {
            Self::InvalidFormat(_) => "INVALID_FORMAT",
            Self::VerificationFailed => "VERIFICATION_FAILED",
            Self::Primitive(_) => "CRYPTO_PRIMITIVE_ERROR",
        }
    }
}

impl From<dcrypt::Error> for CryptoError {
    fn from(e: dcrypt::Error) -> Self {
        CryptoError::Primitive(e.to_string())
    }
}

/// Errors surfaced by the versioned state tree and its keepers.
#[derive(Error, Debug)]
pub enum StateError {
    /// The requested entity is absent at the requested (or latest) version.
    #[error("not found: {0}")]
    NotFound(String),
    /// A state value could not be decoded into its declared entity type.
    #[error("decode failure: {0}")]
    DecodeFailure(String),
    /// The underlying transactional byte store reported a fault; the whole
    /// batch containing this operation must be aborted.
    #[error("state backend error: {0}")]
    Backend(String),
}

impl ErrorCode for StateError {
    fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::DecodeFailure(_) => "DECODE_FAILURE",
            Self::Backend(_) => "STATE_BACKEND_ERROR",
        }
    }
}

impl From<parity_scale_codec::Error> for StateError {
    fn from(e: parity_scale_codec::Error) -> Self {
        StateError::DecodeFailure(e.to_string())
    }
}

/// Errors surfaced by the ticket store and ticket manager.
#[derive(Error, Debug)]
pub enum TicketError {
    /// No ticket is indexed under the given hash.
    #[error("ticket not found: {0}")]
    NotFound(String),
    /// A ticket's stored bytes could not be decoded.
    #[error("ticket decode failure: {0}")]
    DecodeFailure(String),
    /// An error propagated from the underlying state tree.
    #[error("state error: {0}")]
    State(#[from] StateError),
}

impl ErrorCode for TicketError {
    fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::DecodeFailure(_) => "DECODE_FAILURE",
            Self::State(e) => e.code(),
        }
    }
}

/// Errors surfaced while decoding, validating, or executing a transaction.
#[derive(Error, Debug)]
pub enum TransactionError {
    /// The wire bytes could not be decoded into the declared transaction type.
    #[error("decode failure: {0}")]
    DecodeFailure(String),
    /// The declared type code is not a member of the transaction taxonomy.
    #[error("unsupported transaction type: {0}")]
    Unsupported(String),
    /// The signature does not verify against the declared sender public key.
    #[error("signature verification failed")]
    VerificationFailed,
    /// The sender's spendable balance is less than `value + fee`.
    #[error("insufficient balance: need {needed}, have {available}")]
    InsufficientBalance {
        /// Amount required (`value + fee`), as a decimal string.
        needed: String,
        /// Spendable balance actually available, as a decimal string.
        available: String,
    },
    /// The transaction nonce is not exactly `account.nonce + 1`.
    #[error("nonce mismatch: expected {expected}, got {got}")]
    NonceMismatch {
        /// The nonce the orchestrator expected (`account.nonce + 1`).
        expected: u64,
        /// The nonce carried by the transaction.
        got: u64,
    },
    /// A referenced ticket, repository, or namespace does not exist.
    #[error("not found: {0}")]
    NotFound(String),
    /// The transaction's address or key fields failed format validation.
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    /// An error originating from the cryptographic identity layer.
    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),
    /// An error originating from the state tree.
    #[error("state error: {0}")]
    State(#[from] StateError),
    /// An error originating from the ticket manager.
    #[error("ticket error: {0}")]
    Ticket(#[from] TicketError),
}

impl ErrorCode for TransactionError {
    fn code(&self) -> &'static str {
        match self {
            Self::DecodeFailure(_) => "DECODE_FAILURE",
            Self::Unsupported(_) => "UNSUPPORTED",
            Self::VerificationFailed => "VERIFICATION_FAILED",
            Self::InsufficientBalance { .. } => "INSUFFICIENT_BALANCE",
            Self::NonceMismatch { .. } => "NONCE_MISMATCH",
            Self::NotFound(_) => "NOT_FOUND",
            Self::InvalidFormat(_) => "INVALID_FORMAT",
            Self::Crypto(e) => e.code(),
            Self::State(e) => e.code(),
            Self::Ticket(e) => e.code(),
        }
    }
}

/// Top-level error composing every domain error the orchestrator can observe
/// while applying a block.
#[derive(Error, Debug)]
pub enum ChainError {
    /// An error while processing a single transaction. The orchestrator
    /// records this in the block's per-transaction result log rather than
    /// aborting the batch.
    #[error("transaction error: {0}")]
    Transaction(#[from] TransactionError),
    /// A storage-level fault in the keeper layer itself; the whole batch
    /// aborts when this is returned.
    #[error("state error: {0}")]
    State(#[from] StateError),
}

impl ErrorCode for ChainError {
    fn code(&self) -> &'static str {
        match self {
            Self::Transaction(e) => e.code(),
            Self::State(e) => e.code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonce_mismatch_code_is_stable() {
        let err = TransactionError::NonceMismatch { expected: 2, got: 1 };
        assert_eq!(err.code(), "NONCE_MISMATCH");
    }

    #[test]
    fn nested_crypto_error_code_propagates() {
        let err: TransactionError = CryptoError::VerificationFailed.into();
        assert_eq!(err.code(), "VERIFICATION_FAILED");
    }

    #[test]
    fn chain_error_wraps_transaction_code() {
        let err: ChainError = TransactionError::Unsupported("99".into()).into();
        assert_eq!(err.code(), "UNSUPPORTED");
    }
}
