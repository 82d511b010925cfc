//! certseal-core
//!
//! Core primitives for CERTSEAL:
//! - RSA key pair generation (PKCS#1 private / SPKI public PEM)
//! - Canonical colon-delimited payload construction
//! - RSA-SHA256 (PKCS#1 v1.5) signing with URL-safe base64 tokens
//! - Boolean signature verification, current and legacy token encodings
//! - Certificate signature string encoding/decoding
//! - Batch row signing with per-row failure isolation
//!
//! The crate performs no filesystem, network, or terminal I/O. Key material
//! is exchanged as PEM text; callers own storage and transport.

pub mod batch;
pub mod code;
pub mod errors;
pub mod keys;
pub mod payload;
pub mod sign;
pub mod token;
pub mod verify;

pub use crate::errors::{CertsealError, CertsealResult};

/// Convenience re-exports.
pub mod prelude {
    pub use crate::batch::{sign_rows, BatchReport, RowFailure, SignedCertificate};
    pub use crate::code::{CodeGenerator, RandomCodeGenerator, SequenceCodeGenerator};
    pub use crate::keys::{generate_key_pair, KeyPair, KeyPairOptions};
    pub use crate::payload::{build_payload, build_payload_checked, DELIMITER};
    pub use crate::sign::sign;
    pub use crate::token::{decode, encode, DecodedToken};
    pub use crate::verify::{verify, verify_with_encoding, TokenEncoding};
    pub use crate::{CertsealError, CertsealResult};
}
