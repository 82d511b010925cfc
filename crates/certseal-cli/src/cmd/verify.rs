use std::io::Write;

use anyhow::{bail, Result};
use serde::Serialize;
use termcolor::{Color, ColorSpec, WriteColor};

use certseal_core::keys::validate_public_key_pem;
use certseal_core::token;
use certseal_core::verify::{verify_with_encoding, TokenEncoding};

use crate::io::input;
use crate::output;

#[derive(Debug, Serialize)]
pub struct VerifyOut {
    pub valid: bool,
    pub payload: String,
    pub encoding: String,
}

/// Configuration problems (unreadable key, undecodable certificate string,
/// unknown encoding) are reported as errors before verification runs; the
/// verdict itself is data, and the command exits 0 either way.
pub fn run(
    key_path: &str,
    payload_arg: Option<&str>,
    signature_arg: Option<&str>,
    certificate_arg: Option<&str>,
    encoding_arg: &str,
) -> Result<()> {
    let public_key_pem = input::read_text_file(key_path)?;
    validate_public_key_pem(&public_key_pem)?;
    let encoding = TokenEncoding::parse(encoding_arg)?;

    let (payload, token) = match (payload_arg, signature_arg, certificate_arg) {
        (Some(p), Some(s), None) => (p.to_string(), s.to_string()),
        (None, None, Some(c)) => {
            let decoded = token::decode(c)?;
            (decoded.signable_payload(), decoded.token)
        }
        _ => bail!("provide --payload with --signature, or --certificate"),
    };

    let valid = verify_with_encoding(&payload, &token, &public_key_pem, encoding);

    if output::is_json() {
        output::print(&VerifyOut {
            valid,
            payload,
            encoding: encoding.as_str().to_string(),
        })?;
    } else {
        print_verdict(valid, &payload)?;
    }
    Ok(())
}

fn print_verdict(valid: bool, payload: &str) -> Result<()> {
    let mut out = output::stdout();

    let mut spec = ColorSpec::new();
    spec.set_fg(Some(if valid { Color::Green } else { Color::Red }))
        .set_bold(true);
    out.set_color(&spec)?;
    write!(out, "{}", if valid { "valid" } else { "invalid" })?;
    out.reset()?;
    writeln!(out, "  {payload}")?;
    Ok(())
}
