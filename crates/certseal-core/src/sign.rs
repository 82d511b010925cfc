//! RSA-SHA256 payload signing.
//!
//! Signatures are RSA PKCS#1 v1.5 over the payload's UTF-8 bytes. The
//! payload is not pre-hashed by the caller; hashing happens exactly once,
//! inside the signing primitive. Tokens are URL-safe base64 without
//! padding, safe to embed in a colon-delimited certificate string and in
//! QR payloads.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs1v15::SigningKey;
use rsa::signature::{SignatureEncoding, Signer};
use rsa::RsaPrivateKey;
use sha2::Sha256;

use crate::errors::{CertsealError, CertsealResult};

/// Sign a canonical payload with a PKCS#1 PEM private key.
///
/// Empty payload or key is `InvalidArgument`; an unreadable key or a
/// backend rejection is `Signing`. Failures always surface as errors.
pub fn sign(payload: &str, private_key_pem: &str) -> CertsealResult<String> {
    if payload.is_empty() {
        return Err(CertsealError::invalid_argument("payload is empty"));
    }
    if private_key_pem.trim().is_empty() {
        return Err(CertsealError::invalid_argument("private key pem is empty"));
    }

    let key = signing_key_from_pem(private_key_pem)?;
    sign_with_key(payload, &key)
}

/// Parse a PKCS#1 PEM private key into a reusable signing key.
pub(crate) fn signing_key_from_pem(pem: &str) -> CertsealResult<SigningKey<Sha256>> {
    let private_key = RsaPrivateKey::from_pkcs1_pem(pem)
        .map_err(|e| CertsealError::signing(format!("unreadable private key pem: {e}")))?;
    Ok(SigningKey::new(private_key))
}

/// Sign with an already-parsed key. Batch signing parses once and loops here.
pub(crate) fn sign_with_key(payload: &str, key: &SigningKey<Sha256>) -> CertsealResult<String> {
    let signature = key
        .try_sign(payload.as_bytes())
        .map_err(|e| CertsealError::signing(format!("rsa signing failed: {e}")))?;
    Ok(URL_SAFE_NO_PAD.encode(signature.to_bytes()))
}
