use anyhow::Result;
use serde::Serialize;

use certseal_core::token;

use crate::output;

#[derive(Debug, Serialize)]
pub struct DecodeOut {
    pub fields: Vec<String>,
    pub payload: String,
    pub token: String,
}

pub fn run(certificate: &str) -> Result<()> {
    let decoded = token::decode(certificate)?;
    let payload = decoded.signable_payload();

    let out = DecodeOut {
        fields: decoded.fields,
        payload,
        token: decoded.token,
    };
    if output::is_json() {
        output::print(&out)?;
    } else {
        print_text(&out);
    }
    Ok(())
}

fn print_text(out: &DecodeOut) {
    for (i, field) in out.fields.iter().enumerate() {
        println!("field {i}: {field}");
    }
    println!("payload: {}", out.payload);
    println!("token: {}", out.token);
}
