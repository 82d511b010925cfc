use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use certseal_core::keys::{generate_key_pair, KeyPairOptions};

use crate::io::export;
use crate::output;

#[derive(Debug, Serialize)]
pub struct KeygenOut {
    pub bits: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key_pem: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key_pem: Option<String>,
}

pub fn run(bits: usize, out_dir: Option<&str>) -> Result<()> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb.set_message(format!("generating rsa {bits} key pair"));

    let pair = generate_key_pair(&KeyPairOptions { modulus_bits: bits })?;
    pb.finish_and_clear();

    let out = match out_dir {
        Some(dir) => {
            let (private_path, public_path) = export::write_key_pair(dir, &pair)?;
            KeygenOut {
                bits,
                private_key_path: Some(private_path.display().to_string()),
                public_key_path: Some(public_path.display().to_string()),
                private_key_pem: None,
                public_key_pem: None,
            }
        }
        None => KeygenOut {
            bits,
            private_key_path: None,
            public_key_path: None,
            private_key_pem: Some(pair.private_key_pem),
            public_key_pem: Some(pair.public_key_pem),
        },
    };

    if output::is_json() {
        output::print(&out)?;
    } else {
        print_text(&out);
    }
    Ok(())
}

fn print_text(out: &KeygenOut) {
    if let (Some(private), Some(public)) = (&out.private_key_path, &out.public_key_path) {
        println!("private key: {private}");
        println!("public key: {public}");
        return;
    }
    // PEM blocks carry their own trailing newline.
    if let Some(pem) = &out.private_key_pem {
        print!("{pem}");
    }
    if let Some(pem) = &out.public_key_pem {
        print!("{pem}");
    }
}
