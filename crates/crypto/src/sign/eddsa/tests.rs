// Path: crates/crypto/src/sign/eddsa/tests.rs
use super::*;
use crate::identity::{push_address, user_address};

#[test]
fn sign_then_verify_succeeds() {
    let keypair = Ed25519KeyPair::generate().expect("keygen");
    let message = b"coinTransfer:sender->recipient:5";
    let signature = keypair.sign(message).expect("sign");
    assert!(keypair.verify(message, &signature).is_ok());
}

#[test]
fn tampering_after_signing_fails_verification() {
    let keypair = Ed25519KeyPair::generate().expect("keygen");
    let signature = keypair.sign(b"to=alice").expect("sign");
    assert!(keypair.verify(b"to=bob", &signature).is_err());
}

#[test]
fn same_seed_yields_same_keypair() {
    let a = Ed25519KeyPair::generate_from_seed(1).expect("keygen");
    let b = Ed25519KeyPair::generate_from_seed(1).expect("keygen");
    assert_eq!(a.public_key_bytes(), b.public_key_bytes());
    assert_eq!(a.seed(), b.seed());
}

#[test]
fn different_seeds_yield_different_keypairs() {
    let a = Ed25519KeyPair::generate_from_seed(1).expect("keygen");
    let b = Ed25519KeyPair::generate_from_seed(2).expect("keygen");
    assert_ne!(a.public_key_bytes(), b.public_key_bytes());
}

#[test]
fn seed_one_derives_the_pinned_golden_addresses() {
    // generate_from_seed(1) is a fixed point: the user and push addresses it
    // derives must never drift across releases, since anything anchored to
    // them (genesis allocations, fixtures in other crates) is keyed by the
    // literal address string. Re-pin this value deliberately if
    // generate_from_seed's byte layout ever changes.
    let keypair = Ed25519KeyPair::generate_from_seed(1).expect("keygen");
    let raw_public_key = keypair.public_key_bytes();

    let user = user_address(&raw_public_key).expect("user address");
    let push = push_address(&raw_public_key).expect("push address");

    assert_eq!(user.as_ref(), "os1lu6wg3uj8v7j2zuc8jdt7g6ukf5dl68c8epg85");
    assert_eq!(push.as_ref(), "pk1lu6wg3uj8v7j2zuc8jdt7g6ukf5dl68c80f9pa");
}

#[test]
fn seed_roundtrips_through_key_reconstruction() {
    let original = Ed25519KeyPair::generate_from_seed(42).expect("keygen");
    let restored = Ed25519KeyPair::from_seed_bytes(&original.seed()).expect("restore");
    assert_eq!(original.public_key_bytes(), restored.public_key_bytes());
}

#[test]
fn signature_must_be_64_bytes() {
    assert!(Ed25519Signature::from_bytes(&[0u8; 32]).is_err());
}
