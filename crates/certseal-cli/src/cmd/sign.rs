use anyhow::{bail, Result};
use serde::Serialize;

use certseal_core::code::{CodeGenerator, RandomCodeGenerator};
use certseal_core::payload::build_payload_checked;
use certseal_core::{sign, token};

use crate::io::input;
use crate::output;

#[derive(Debug, Serialize)]
pub struct SignOut {
    pub payload: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub token: String,
    pub certificate: String,
}

pub fn run(
    key_path: &str,
    payload_arg: Option<&str>,
    fields: &[String],
    code_arg: Option<&str>,
) -> Result<()> {
    let private_key_pem = input::read_text_file(key_path)?;
    certseal_core::keys::validate_private_key_pem(&private_key_pem)?;

    let (payload, code) = match payload_arg {
        Some(p) => (p.to_string(), None),
        None => {
            if fields.is_empty() {
                bail!("provide --payload or at least one --field");
            }
            let code = match code_arg {
                Some(c) => c.to_string(),
                None => RandomCodeGenerator::new().next_code(),
            };

            let mut segments = Vec::with_capacity(fields.len() + 1);
            segments.push(fields[0].clone());
            segments.push(code.clone());
            segments.extend(fields[1..].iter().cloned());

            (build_payload_checked(&segments)?, Some(code))
        }
    };

    let token = sign::sign(&payload, &private_key_pem)?;
    let certificate = token::encode(&[payload.as_str()], &token);

    let out = SignOut {
        payload,
        code,
        token,
        certificate,
    };
    if output::is_json() {
        output::print(&out)?;
    } else {
        print_text(&out);
    }
    Ok(())
}

fn print_text(out: &SignOut) {
    println!("payload: {}", out.payload);
    if let Some(code) = &out.code {
        println!("code: {code}");
    }
    println!("token: {}", out.token);
    println!("certificate: {}", out.certificate);
}
