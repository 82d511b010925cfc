//! Batch row signing.
//!
//! One private key signs many certificate rows, one fresh unique code per
//! row. Consumers are the CLI (`certseal batch ...`) and any data layer
//! that already holds structured rows; parsing row files is their job,
//! this module only signs.
//!
//! Per row the sequence is strictly build, sign, encode, over the segments
//! `subject : code : remaining fields...`. Rows are independent: a failed
//! row is reported and never aborts the others. With the `parallel`
//! feature rows run on a rayon worker pool; output order and row indices
//! are preserved either way.
//!
//! Configuration failures (empty or unreadable private key) fail the whole
//! call before any row work, so callers can tell "could not run" from "ran
//! and some rows failed".

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use rsa::pkcs1v15::SigningKey;
use serde::Serialize;
use sha2::Sha256;

use crate::code::CodeGenerator;
use crate::errors::{CertsealError, CertsealResult};
use crate::payload;
use crate::sign;
use crate::token;

/// One successfully signed row.
#[derive(Debug, Clone, Serialize)]
pub struct SignedCertificate {
    /// Original row index.
    pub row: usize,
    /// Signed field segments, unique code included.
    pub fields: Vec<String>,
    /// Unique code assigned to this certificate.
    pub code: String,
    /// Canonical payload the signature was computed over.
    pub payload: String,
    /// URL-safe base64 signature token.
    pub token: String,
    /// Full certificate signature string (payload plus trailing token).
    pub certificate_string: String,
}

/// One failed row.
#[derive(Debug, Clone, Serialize)]
pub struct RowFailure {
    /// Original row index.
    pub row: usize,
    /// Human-readable reason.
    pub reason: String,
}

/// Outcome of a batch signing run.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub signed: Vec<SignedCertificate>,
    pub failures: Vec<RowFailure>,
}

impl BatchReport {
    pub fn all_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

struct RowJob<'a> {
    index: usize,
    fields: &'a [String],
    code: String,
}

impl RowJob<'_> {
    fn sign(self, key: &SigningKey<Sha256>) -> Result<SignedCertificate, RowFailure> {
        let RowJob {
            index,
            fields,
            code,
        } = self;

        let Some((subject, rest)) = fields.split_first() else {
            return Err(RowFailure {
                row: index,
                reason: "row has no fields".to_string(),
            });
        };

        let mut segments = Vec::with_capacity(fields.len() + 1);
        segments.push(subject.clone());
        segments.push(code.clone());
        segments.extend(rest.iter().cloned());

        let built = payload::build_payload_checked(&segments);
        let payload = match built {
            Ok(p) => p,
            Err(e) => {
                return Err(RowFailure {
                    row: index,
                    reason: e.to_string(),
                })
            }
        };

        let token = match sign::sign_with_key(&payload, key) {
            Ok(t) => t,
            Err(e) => {
                return Err(RowFailure {
                    row: index,
                    reason: e.to_string(),
                })
            }
        };

        let certificate_string = token::encode(&segments, &token);

        Ok(SignedCertificate {
            row: index,
            fields: segments,
            code,
            payload,
            token,
            certificate_string,
        })
    }
}

#[cfg(feature = "parallel")]
fn run_rows(
    jobs: Vec<RowJob<'_>>,
    key: &SigningKey<Sha256>,
) -> Vec<Result<SignedCertificate, RowFailure>> {
    jobs.into_par_iter().map(|job| job.sign(key)).collect()
}

#[cfg(not(feature = "parallel"))]
fn run_rows(
    jobs: Vec<RowJob<'_>>,
    key: &SigningKey<Sha256>,
) -> Vec<Result<SignedCertificate, RowFailure>> {
    jobs.into_iter().map(|job| job.sign(key)).collect()
}

/// Sign every row with one key, drawing one code per row.
///
/// Codes are drawn up front in row order, so a deterministic generator
/// yields a deterministic batch regardless of execution order.
pub fn sign_rows<G: CodeGenerator>(
    rows: &[Vec<String>],
    private_key_pem: &str,
    codes: &mut G,
) -> CertsealResult<BatchReport> {
    if private_key_pem.trim().is_empty() {
        return Err(CertsealError::invalid_argument("private key pem is empty"));
    }
    let key = sign::signing_key_from_pem(private_key_pem)?;

    let jobs: Vec<RowJob<'_>> = rows
        .iter()
        .enumerate()
        .map(|(index, fields)| RowJob {
            index,
            fields,
            code: codes.next_code(),
        })
        .collect();

    let mut signed = Vec::new();
    let mut failures = Vec::new();
    for result in run_rows(jobs, &key) {
        match result {
            Ok(cert) => signed.push(cert),
            Err(failure) => failures.push(failure),
        }
    }

    Ok(BatchReport { signed, failures })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::SequenceCodeGenerator;
    use crate::keys::test_key_pair;
    use crate::verify;
    use assert_matches::assert_matches;

    fn two_rows() -> Vec<Vec<String>> {
        vec![
            vec!["Alice Example".to_string(), "Rust Bootcamp".to_string()],
            vec!["Bob Example".to_string(), "Rust Bootcamp".to_string()],
        ]
    }

    #[test]
    fn signs_rows_with_codes_in_row_order() {
        let pair = test_key_pair();
        let mut codes =
            SequenceCodeGenerator::new(vec!["CODE01".to_string(), "CODE02".to_string()]).unwrap();

        let report = sign_rows(&two_rows(), &pair.private_key_pem, &mut codes).unwrap();
        assert!(report.all_ok());
        assert_eq!(report.signed.len(), 2);

        assert_eq!(report.signed[0].row, 0);
        assert_eq!(report.signed[0].code, "CODE01");
        assert_eq!(report.signed[0].payload, "Alice Example:CODE01:Rust Bootcamp");
        assert_eq!(report.signed[1].code, "CODE02");

        for cert in &report.signed {
            assert!(verify::verify(&cert.payload, &cert.token, &pair.public_key_pem));
            assert_eq!(
                cert.certificate_string,
                format!("{}:{}", cert.payload, cert.token)
            );
        }
    }

    #[test]
    fn row_without_fields_fails_alone() {
        let pair = test_key_pair();
        let rows = vec![
            vec!["Alice Example".to_string(), "Rust Bootcamp".to_string()],
            Vec::new(),
        ];
        let mut codes = SequenceCodeGenerator::new(vec!["CODE01".to_string()]).unwrap();

        let report = sign_rows(&rows, &pair.private_key_pem, &mut codes).unwrap();
        assert_eq!(report.signed.len(), 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].row, 1);
        assert!(report.failures[0].reason.contains("no fields"));
    }

    #[test]
    fn unusable_key_fails_before_row_work() {
        let mut codes = SequenceCodeGenerator::new(vec!["CODE01".to_string()]).unwrap();

        let err = sign_rows(&two_rows(), "", &mut codes).unwrap_err();
        assert_matches!(err, CertsealError::InvalidArgument(_));

        let err = sign_rows(&two_rows(), "not a pem", &mut codes).unwrap_err();
        assert_matches!(err, CertsealError::Signing(_));
    }

    #[test]
    fn empty_rows_is_empty_report() {
        let pair = test_key_pair();
        let mut codes = SequenceCodeGenerator::new(vec!["CODE01".to_string()]).unwrap();

        let report = sign_rows(&[], &pair.private_key_pem, &mut codes).unwrap();
        assert!(report.all_ok());
        assert!(report.signed.is_empty());
    }

    #[test]
    fn report_serializes_for_outer_layers() {
        let pair = test_key_pair();
        let mut codes = SequenceCodeGenerator::new(vec!["CODE01".to_string()]).unwrap();
        let report = sign_rows(&two_rows(), &pair.private_key_pem, &mut codes).unwrap();

        let value = serde_json::to_value(&report).unwrap();
        assert!(value["signed"].is_array());
        assert!(value["failures"].is_array());
        assert_eq!(value["signed"][0]["code"], "CODE01");
    }
}
