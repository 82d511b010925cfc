//! Canonical payload construction for CERTSEAL.
//!
//! The signable payload is the ordered certificate fields joined with `:`.
//!
//! Rules:
//! - segments appear in caller order, every one included
//! - identical segments in identical order yield identical bytes
//! - no escaping is performed; a delimiter inside a segment makes the
//!   payload ambiguous on the parsing side
//!
//! [`build_payload`] keeps the historical infallible contract.
//! [`build_payload_checked`] is the stricter variant for producers that
//! would rather fail than emit an ambiguous payload.

use crate::errors::{CertsealError, CertsealResult};

/// Reserved segment delimiter.
pub const DELIMITER: char = ':';

/// Join ordered field segments into the signable payload.
///
/// Never fails. Empty segments and embedded delimiters pass through
/// unchanged; use [`build_payload_checked`] to reject them.
pub fn build_payload<S: AsRef<str>>(segments: &[S]) -> String {
    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            out.push(DELIMITER);
        }
        out.push_str(segment.as_ref());
    }
    out
}

/// Join ordered field segments, rejecting shapes the codec cannot
/// unambiguously reverse.
///
/// Errors:
/// - `InvalidArgument` for an empty segment list or an empty segment
/// - `FieldFormat` for a segment containing the reserved delimiter
pub fn build_payload_checked<S: AsRef<str>>(segments: &[S]) -> CertsealResult<String> {
    if segments.is_empty() {
        return Err(CertsealError::invalid_argument(
            "payload requires at least one segment",
        ));
    }

    for (i, segment) in segments.iter().enumerate() {
        let segment = segment.as_ref();
        if segment.is_empty() {
            return Err(CertsealError::invalid_argument(format!(
                "payload segment {i} is empty"
            )));
        }
        if segment.contains(DELIMITER) {
            return Err(CertsealError::field_format(format!(
                "payload segment {i} contains reserved delimiter '{DELIMITER}'"
            )));
        }
    }

    Ok(build_payload(segments))
}
