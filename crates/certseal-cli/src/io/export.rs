use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use certseal_core::keys::KeyPair;

/// Write a generated key pair under `dir` as `private.pem` / `public.pem`.
pub fn write_key_pair<P: AsRef<Path>>(dir: P, pair: &KeyPair) -> Result<(PathBuf, PathBuf)> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let private_path = dir.join("private.pem");
    let public_path = dir.join("public.pem");

    fs::write(&private_path, pair.private_key_pem.as_bytes())
        .with_context(|| format!("failed to write {}", private_path.display()))?;
    fs::write(&public_path, pair.public_key_pem.as_bytes())
        .with_context(|| format!("failed to write {}", public_path.display()))?;

    Ok((private_path, public_path))
}

/// Write a serializable report as pretty JSON.
pub fn write_json<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
