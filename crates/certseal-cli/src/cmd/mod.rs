use anyhow::Result;

use crate::args::{Cli, Command};

mod batch;
mod decode;
mod keygen;
mod sign;
mod verify;

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Keygen { bits, out } => keygen::run(bits, out.as_deref()),
        Command::Sign {
            key,
            payload,
            field,
            code,
        } => sign::run(&key, payload.as_deref(), &field, code.as_deref()),
        Command::Verify {
            key,
            payload,
            signature,
            certificate,
            encoding,
        } => verify::run(
            &key,
            payload.as_deref(),
            signature.as_deref(),
            certificate.as_deref(),
            &encoding,
        ),
        Command::Decode { certificate } => decode::run(&certificate),
        Command::Batch { key, rows, out } => batch::run(&key, &rows, out.as_deref()),
    }
}
