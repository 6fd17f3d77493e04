// Path: crates/crypto/src/vrf.rs
//! VRF key-seed derivation: a VRF key is seeded from the full 64-byte
//! expanded private key. Full VRF evaluation and proof verification are
//! owned by the consensus engine, an external collaborator; this crate
//! supplies just the deterministic seed it consumes.

/// A 64-byte seed for a VRF keypair, derived from an Ed25519 private key's
/// expanded form. Same seed always yields the same derived key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VrfSeed([u8; 64]);

impl VrfSeed {
    /// Wraps a 64-byte expanded private key as a VRF seed.
    pub fn new(expanded_private_key: [u8; 64]) -> Self {
        Self(expanded_private_key)
    }

    /// The raw 64 seed bytes.
    pub fn as_bytes(&self) -> &[u8; 64] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sign::eddsa::{vrf_seed_from_private_key, Ed25519KeyPair};

    #[test]
    fn same_seed_yields_same_vrf_seed() {
        let a = Ed25519KeyPair::generate_from_seed(5).expect("keygen");
        let b = Ed25519KeyPair::generate_from_seed(5).expect("keygen");
        let vrf_a = VrfSeed::new(vrf_seed_from_private_key(&a));
        let vrf_b = VrfSeed::new(vrf_seed_from_private_key(&b));
        assert_eq!(vrf_a, vrf_b);
    }
}
