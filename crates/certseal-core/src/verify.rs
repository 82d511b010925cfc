//! Boolean signature verification.
//!
//! Verification answers one question: was this exact payload signed by the
//! holder of the private key matching this public key. The answer is a
//! `bool`, never an error. Empty inputs, unreadable keys, undecodable
//! tokens, and mismatched payloads all collapse to `false`; distinguishing
//! configuration problems from forgery is the invoking layer's job, before
//! it calls in (see [`crate::keys::validate_public_key_pem`]).
//!
//! Two token encodings exist. `Base64Url` is the current scheme: the
//! signature is computed over the raw payload bytes. `LegacyHex` accepts
//! historical artifacts whose signature was computed over the ASCII hex
//! SHA-256 digest of the payload and then hex-encoded. Nothing is
//! auto-detected; callers name the encoding explicitly.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use rsa::pkcs1v15::{Signature, VerifyingKey};
use rsa::pkcs8::DecodePublicKey;
use rsa::signature::Verifier;
use rsa::RsaPublicKey;
use sha2::{Digest, Sha256};

use crate::errors::{CertsealError, CertsealResult};

/// Signature token encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenEncoding {
    /// URL-safe base64 without padding, signature over raw payload bytes.
    Base64Url,
    /// Hex token, signature over the ASCII hex SHA-256 digest of the payload.
    LegacyHex,
}

impl TokenEncoding {
    pub fn parse(s: &str) -> CertsealResult<Self> {
        match s {
            "base64url" => Ok(Self::Base64Url),
            "legacy-hex" => Ok(Self::LegacyHex),
            _ => Err(CertsealError::invalid_argument(format!(
                "unsupported token encoding: {s}"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Base64Url => "base64url",
            Self::LegacyHex => "legacy-hex",
        }
    }
}

/// Verify a token in the current encoding.
pub fn verify(payload: &str, token: &str, public_key_pem: &str) -> bool {
    verify_with_encoding(payload, token, public_key_pem, TokenEncoding::Base64Url)
}

/// Verify a token in an explicitly named encoding.
///
/// Returns `true` only for a definitively valid signature over exactly this
/// payload by exactly this key. Never panics, never returns an error.
pub fn verify_with_encoding(
    payload: &str,
    token: &str,
    public_key_pem: &str,
    encoding: TokenEncoding,
) -> bool {
    if payload.is_empty() || token.is_empty() || public_key_pem.trim().is_empty() {
        return false;
    }

    let Ok(public_key) = RsaPublicKey::from_public_key_pem(public_key_pem) else {
        return false;
    };
    let key = VerifyingKey::<Sha256>::new(public_key);

    let raw = match encoding {
        TokenEncoding::Base64Url => URL_SAFE_NO_PAD.decode(token).ok(),
        TokenEncoding::LegacyHex => hex::decode(token).ok(),
    };
    let Some(raw) = raw else {
        return false;
    };
    let Ok(signature) = Signature::try_from(raw.as_slice()) else {
        return false;
    };

    match encoding {
        TokenEncoding::Base64Url => key.verify(payload.as_bytes(), &signature).is_ok(),
        TokenEncoding::LegacyHex => {
            let prehashed = hex::encode(Sha256::digest(payload.as_bytes()));
            key.verify(prehashed.as_bytes(), &signature).is_ok()
        }
    }
}
