//! `update-signing verify` — check an update archive's signature.

use std::path::Path;

use anyhow::Context;
use update_signing_keys::UpdateSignature;
use update_signing_keys::verifier;

pub fn run(public_key: &str, file: &Path, signature: &str, length: Option<u64>) -> anyhow::Result<()> {
    let data = std::fs::read(file).with_context(|| format!("reading {}", file.display()))?;

    println!("Verifying {} ({} bytes)...", file.display(), data.len());

    let sig = UpdateSignature {
        ed_signature: signature.to_string(),
        length: length.unwrap_or(data.len() as u64),
    };
    verifier::verify_bytes(&data, public_key, &sig)?;

    println!("✓ Signature valid");

    Ok(())
}
