use clap::{Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(name = "certseal", version, about = "CERTSEAL CLI")]
pub struct Cli {
    /// Emit JSON output on stdout.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate an RSA key pair (PKCS#1 private / SPKI public PEM).
    Keygen {
        /// RSA modulus size in bits (2048 minimum).
        #[arg(long, default_value_t = 2048)]
        bits: usize,

        /// Write private.pem and public.pem under this directory instead of
        /// printing the PEM text.
        #[arg(long)]
        out: Option<String>,
    },

    /// Sign a certificate payload with a private key.
    Sign {
        /// Path to the PKCS#1 PEM private key.
        #[arg(long)]
        key: String,

        /// Exact payload string to sign.
        #[arg(long, conflicts_with = "field")]
        payload: Option<String>,

        /// Ordered certificate field (repeatable). A unique code is inserted
        /// after the first field.
        #[arg(long)]
        field: Vec<String>,

        /// Unique code to embed (generated when omitted).
        #[arg(long, requires = "field")]
        code: Option<String>,
    },

    /// Verify a signature against a public key.
    Verify {
        /// Path to the SPKI PEM public key.
        #[arg(long)]
        key: String,

        /// Payload that was signed.
        #[arg(long, requires = "signature", conflicts_with = "certificate")]
        payload: Option<String>,

        /// Signature token produced for --payload.
        #[arg(long, requires = "payload")]
        signature: Option<String>,

        /// Full certificate signature string (fields with trailing token).
        #[arg(long)]
        certificate: Option<String>,

        /// Token encoding: base64url | legacy-hex.
        #[arg(long, default_value = "base64url")]
        encoding: String,
    },

    /// Split a certificate signature string into fields and token.
    Decode {
        /// Certificate signature string.
        certificate: String,
    },

    /// Sign many rows from a JSON file with one key.
    Batch {
        /// Path to the PKCS#1 PEM private key.
        #[arg(long)]
        key: String,

        /// JSON file holding an array of string arrays, one per certificate.
        #[arg(long)]
        rows: String,

        /// Also write the full report to this file as JSON.
        #[arg(long)]
        out: Option<String>,
    },
}
