//! Loading stored secrets from disk.
//!
//! Secrets are stored as base64 text, usually with a trailing newline. The
//! loader reads the whole file, checks that it is UTF-8, and trims the
//! surrounding whitespace. Turning the text into raw secret bytes is a
//! separate step ([`decode_secret_base64`]) so callers holding the text
//! some other way (an exported keychain blob, an environment variable) can
//! share it.

use std::io;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use zeroize::Zeroizing;

use crate::error::SecretError;

/// Read every byte of the file at `path`.
///
/// Works with process-substitution paths such as `/dev/fd/63`. An empty
/// read counts as a failure since no secret can be zero bytes long.
pub fn read_all_bytes(path: &Path) -> Result<Zeroizing<Vec<u8>>, SecretError> {
    let data = Zeroizing::new(std::fs::read(path).map_err(|source| SecretError::UnableToReadData {
        path: path.to_path_buf(),
        source,
    })?);
    if data.is_empty() {
        return Err(SecretError::UnableToReadData {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::UnexpectedEof, "no data"),
        });
    }
    tracing::debug!(path = %path.display(), bytes = data.len(), "read secret file");
    Ok(data)
}

/// Read a base64 secret string from a file, trimming whitespace and newlines.
///
/// Invalid UTF-8 is reported by position only; the file contents never end up in the error.
pub fn load_secret_text(path: &Path) -> Result<Zeroizing<String>, SecretError> {
    let data = read_all_bytes(path)?;
    let text = std::str::from_utf8(&data)?;
    Ok(Zeroizing::new(text.trim().to_string()))
}

/// Decode base64 secret text into raw secret bytes.
pub fn decode_secret_base64(text: &str) -> Result<Zeroizing<Vec<u8>>, SecretError> {
    Ok(Zeroizing::new(STANDARD.decode(text.trim())?))
}

/// Encode raw secret bytes as base64 text for storage.
pub fn encode_secret_base64(secret: &[u8]) -> Zeroizing<String> {
    Zeroizing::new(STANDARD.encode(secret))
}

/// Read and base64-decode the secret stored at `path`.
pub fn load_secret(path: &Path) -> Result<Zeroizing<Vec<u8>>, SecretError> {
    let text = load_secret_text(path)?;
    decode_secret_base64(&text)
}
