//! Unique code generation.
//!
//! Every certificate carries a short code drawn from `[A-Z0-9]`. It is a
//! nonce against identical signatures for structurally identical
//! certificates, not a security value. Generation sits behind a trait so
//! batch runs can be replayed with a deterministic source.

use rand::Rng;

use crate::errors::{CertsealError, CertsealResult};

/// Alphabet the original code format draws from.
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Default code length.
pub const CODE_LEN: usize = 6;

/// A source of per-certificate unique codes.
pub trait CodeGenerator {
    fn next_code(&mut self) -> String;
}

/// Production generator: uniform random draws from [`CODE_ALPHABET`].
#[derive(Debug, Clone)]
pub struct RandomCodeGenerator {
    len: usize,
}

impl RandomCodeGenerator {
    pub fn new() -> Self {
        Self { len: CODE_LEN }
    }

    pub fn with_len(len: usize) -> Self {
        Self { len }
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn next_code(&mut self) -> String {
        let mut rng = rand::thread_rng();
        (0..self.len)
            .map(|_| {
                let i = rng.gen_range(0..CODE_ALPHABET.len());
                CODE_ALPHABET[i] as char
            })
            .collect()
    }
}

/// Deterministic generator cycling through a fixed list, for replayable runs.
#[derive(Debug, Clone)]
pub struct SequenceCodeGenerator {
    codes: Vec<String>,
    next: usize,
}

impl SequenceCodeGenerator {
    pub fn new(codes: Vec<String>) -> CertsealResult<Self> {
        if codes.is_empty() {
            return Err(CertsealError::invalid_argument(
                "sequence generator requires at least one code",
            ));
        }
        Ok(Self { codes, next: 0 })
    }
}

impl CodeGenerator for SequenceCodeGenerator {
    fn next_code(&mut self) -> String {
        let code = self.codes[self.next % self.codes.len()].clone();
        self.next += 1;
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn random_codes_have_expected_shape() {
        let mut codes = RandomCodeGenerator::new();
        for _ in 0..50 {
            let code = codes.next_code();
            assert_eq!(code.len(), CODE_LEN);
            assert!(code.bytes().all(|b| CODE_ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn random_code_length_is_configurable() {
        let mut codes = RandomCodeGenerator::with_len(10);
        assert_eq!(codes.next_code().len(), 10);
    }

    #[test]
    fn sequence_generator_cycles() {
        let mut codes =
            SequenceCodeGenerator::new(vec!["AAAAA1".to_string(), "AAAAA2".to_string()]).unwrap();
        assert_eq!(codes.next_code(), "AAAAA1");
        assert_eq!(codes.next_code(), "AAAAA2");
        assert_eq!(codes.next_code(), "AAAAA1");
    }

    #[test]
    fn sequence_generator_rejects_empty_list() {
        let err = SequenceCodeGenerator::new(Vec::new()).unwrap_err();
        assert_matches!(err, CertsealError::InvalidArgument(_));
    }
}
