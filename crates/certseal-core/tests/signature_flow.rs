//! signature_flow.rs
//!
//! End-to-end signature behavior over freshly generated RSA key pairs:
//! build payload, sign, encode the certificate string, decode, verify.

use std::sync::OnceLock;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use sha2::{Digest, Sha256};

use certseal_core::keys::{self, KeyPair, KeyPairOptions};
use certseal_core::payload;
use certseal_core::sign;
use certseal_core::token;
use certseal_core::verify::{self, TokenEncoding};

fn key_pair() -> &'static KeyPair {
    static PAIR: OnceLock<KeyPair> = OnceLock::new();
    PAIR.get_or_init(|| keys::generate_key_pair(&KeyPairOptions::default()).unwrap())
}

fn other_key_pair() -> &'static KeyPair {
    static PAIR: OnceLock<KeyPair> = OnceLock::new();
    PAIR.get_or_init(|| keys::generate_key_pair(&KeyPairOptions::default()).unwrap())
}

#[test]
fn sign_verify_round_trip() {
    let pair = key_pair();
    let payload =
        payload::build_payload(&["Jane Doe", "A1B2C3", "Rust Bootcamp", "2024-06-01"]);

    let token = sign::sign(&payload, &pair.private_key_pem).unwrap();
    assert!(verify::verify(&payload, &token, &pair.public_key_pem));
}

#[test]
fn tampered_payload_fails_verification() {
    let pair = key_pair();
    let token = sign::sign("Jane Doe:A1B2C3", &pair.private_key_pem).unwrap();
    assert!(!verify::verify("Jane Doe:A1B2C4", &token, &pair.public_key_pem));
    assert!(!verify::verify("jane doe:A1B2C3", &token, &pair.public_key_pem));
}

#[test]
fn unrelated_key_fails_verification() {
    let pair = key_pair();
    let other = other_key_pair();
    let token = sign::sign("Jane Doe:A1B2C3", &pair.private_key_pem).unwrap();
    assert!(!verify::verify("Jane Doe:A1B2C3", &token, &other.public_key_pem));
}

#[test]
fn malformed_inputs_are_false_not_panics() {
    let pair = key_pair();
    assert!(!verify::verify("Jane Doe:A1B2C3", "not-a-valid-token!!", &pair.public_key_pem));
    assert!(!verify::verify("Jane Doe:A1B2C3", "AAAA", "-----BEGIN PUBLIC KEY-----\ngarbage\n-----END PUBLIC KEY-----\n"));
    assert!(!verify::verify("", "", ""));
}

// The full producer/consumer path for one certificate: subject "Jane Doe",
// code "A1B2C3", certificate string carried in a QR payload.
#[test]
fn certificate_string_round_trip() {
    let pair = key_pair();
    let fields = ["Jane Doe", "A1B2C3"];

    let payload = payload::build_payload(&fields);
    assert_eq!(payload, "Jane Doe:A1B2C3");

    let token = sign::sign(&payload, &pair.private_key_pem).unwrap();
    let certificate = token::encode(&fields, &token);
    assert_eq!(certificate, format!("Jane Doe:A1B2C3:{token}"));

    let decoded = token::decode(&certificate).unwrap();
    assert_eq!(decoded.fields, vec!["Jane Doe", "A1B2C3"]);
    assert_eq!(decoded.token, token);
    assert_eq!(decoded.signable_payload(), payload);

    assert!(verify::verify(
        &decoded.signable_payload(),
        &decoded.token,
        &pair.public_key_pem
    ));
}

// Historical artifacts: hex token, signature computed over the ASCII hex
// SHA-256 digest of the payload rather than the payload itself.
#[test]
fn legacy_hex_token_verifies_only_via_legacy_encoding() {
    let pair = key_pair();
    let payload = "Jane Doe:A1B2C3";

    let prehashed = hex::encode(Sha256::digest(payload.as_bytes()));
    let current_token = sign::sign(&prehashed, &pair.private_key_pem).unwrap();
    let raw = URL_SAFE_NO_PAD.decode(&current_token).unwrap();
    let legacy_token = hex::encode(raw);

    assert!(verify::verify_with_encoding(
        payload,
        &legacy_token,
        &pair.public_key_pem,
        TokenEncoding::LegacyHex
    ));
    assert!(!verify::verify(payload, &legacy_token, &pair.public_key_pem));
}
