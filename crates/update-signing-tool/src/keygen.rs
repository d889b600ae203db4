//! `update-signing generate-key` — create a new signing secret.

use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use update_signing_keys::keys;

pub fn run(output: Option<&Path>) -> anyhow::Result<()> {
    let out_path = output
        .map(Path::to_path_buf)
        .or_else(default_key_path)
        .context("unable to locate the user config directory; pass --output")?;
    let pubkey = write_new_key(&out_path)?;

    println!("✓ Generated Ed25519 signing secret");
    println!("  Secret: {}", out_path.display());
    println!("  Public key: {pubkey}");
    println!();
    println!("  Keep the secret safe! Embed only the public key in your app.");

    Ok(())
}

/// Write a fresh seed to `path` and return its base64 public key.
pub(crate) fn write_new_key(path: &Path) -> anyhow::Result<String> {
    // Don't overwrite existing keys
    if path.exists() {
        anyhow::bail!("secret already exists at {}. Remove it first or use --output.", path.display());
    }

    let seed = keys::generate_seed();
    let pair = keys::decode_key_pair(seed.as_slice())?;
    keys::save_secret(path, seed.as_slice()).with_context(|| format!("writing secret to {}", path.display()))?;

    Ok(pair.public_key_base64())
}

/// Default path for the signing secret.
///
/// > `<user config dir>/update-signing/ed25519-secret`
///
/// `None` only when the user's home directory cannot be determined.
fn default_key_path() -> Option<PathBuf> {
    directories_next::BaseDirs::new().map(|dirs| {
        let mut buf = dirs.config_dir().to_path_buf();
        buf.extend(["update-signing", "ed25519-secret"]);
        buf
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_loadable_secret() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secret");

        let pubkey = write_new_key(&path).unwrap();
        let pair = keys::load_key_pair(&path).unwrap();
        assert_eq!(pair.public_key_base64(), pubkey);
    }

    #[test]
    fn default_path_lives_under_tool_directory() {
        if let Some(path) = default_key_path() {
            assert!(path.ends_with(Path::new("update-signing").join("ed25519-secret")), "{}", path.display());
        }
    }

    #[test]
    fn refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secret");
        std::fs::write(&path, "existing").unwrap();

        assert!(write_new_key(&path).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "existing");
    }
}
