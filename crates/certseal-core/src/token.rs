//! Certificate signature string codec.
//!
//! The wire format carried in QR payloads is the visible fields and the
//! signature token joined with `:`, token always last:
//!
//! ```text
//! field_1:field_2:...:field_n:token
//! ```
//!
//! The field count is producer/consumer convention, so decoding splits on
//! the delimiter and takes the LAST segment as the token; everything before
//! it is the fields in original order. Re-joining the fields reconstructs
//! exactly the signed payload.

use serde::Serialize;

use crate::errors::{CertsealError, CertsealResult};
use crate::payload::{build_payload, DELIMITER};

/// A parsed certificate signature string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedToken {
    /// Visible fields in original order. Empty for a bare token.
    pub fields: Vec<String>,
    /// Trailing signature token.
    pub token: String,
}

impl DecodedToken {
    /// Rebuild the payload the signature was computed over.
    pub fn signable_payload(&self) -> String {
        build_payload(&self.fields)
    }
}

/// Join fields and token into a certificate signature string.
///
/// With no fields the result is the bare token.
pub fn encode<S: AsRef<str>>(fields: &[S], token: &str) -> String {
    if fields.is_empty() {
        return token.to_string();
    }
    let mut out = build_payload(fields);
    out.push(DELIMITER);
    out.push_str(token);
    out
}

/// Split a certificate signature string into fields and token.
///
/// Errors only on the two malformed shapes: empty input, and an empty
/// trailing segment (the delimiter is never legally the last character).
pub fn decode(input: &str) -> CertsealResult<DecodedToken> {
    if input.is_empty() {
        return Err(CertsealError::invalid_argument(
            "certificate signature string is empty",
        ));
    }

    let mut segments: Vec<&str> = input.split(DELIMITER).collect();
    let token = match segments.pop() {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => {
            return Err(CertsealError::invalid_argument(
                "certificate signature string ends without a token",
            ))
        }
    };

    Ok(DecodedToken {
        fields: segments.into_iter().map(str::to_string).collect(),
        token,
    })
}
