//! `update-signing sign` — sign an update archive.

use std::path::Path;

use anyhow::Context;
use update_signing_keys::UpdateSignature;
use update_signing_keys::keys;
use update_signing_keys::signer;

pub fn run(key_file: &Path, file: &Path, json: bool) -> anyhow::Result<()> {
    let sig = sign_file(key_file, file)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&sig)?);
    } else {
        println!("{sig}");
    }

    Ok(())
}

/// Load the secret at `key_file` and sign the contents of `file`.
pub(crate) fn sign_file(key_file: &Path, file: &Path) -> anyhow::Result<UpdateSignature> {
    // Load the signing key
    let pair = keys::load_key_pair(key_file).with_context(|| format!("loading secret {}", key_file.display()))?;

    let data = std::fs::read(file).with_context(|| format!("reading {}", file.display()))?;
    tracing::info!(file = %file.display(), bytes = data.len(), "signing");

    Ok(signer::sign_bytes(&data, &pair)?)
}
