//! `update-signing public-key` — show the public half of a stored secret.

use std::path::Path;

use anyhow::Context;
use update_signing_keys::SecretFormat;
use update_signing_keys::keys;
use update_signing_keys::secret;

pub fn run(key_file: &Path) -> anyhow::Result<()> {
    let (pubkey, format) = describe(key_file)?;

    println!("{pubkey}");
    println!("  Format: {format}");
    if format == SecretFormat::OldHashedSeed {
        tracing::warn!("secret uses the legacy expanded-key format");
    }

    Ok(())
}

/// Load the secret at `key_file` and return its base64 public key and detected format.
pub(crate) fn describe(key_file: &Path) -> anyhow::Result<(String, SecretFormat)> {
    let raw = secret::load_secret(key_file).with_context(|| format!("loading secret {}", key_file.display()))?;
    let format = SecretFormat::classify(&raw);
    let pair = keys::decode_key_pair(&raw).context("decoding secret")?;

    Ok((pair.public_key_base64(), format))
}
