//! Error types for secret loading, key decoding and signing.

use std::path::PathBuf;

/// Errors from loading, decoding and using an EdDSA signing secret.
#[derive(Debug, thiserror::Error)]
pub enum SecretError {
    /// The secret file could not be read, or reading it produced no bytes.
    #[error("unable to read EdDSA private key data from {}: {source}", path.display())]
    UnableToReadData {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The secret file is not valid UTF-8 text.
    #[error("unable to read EdDSA private key data as UTF-8 string: {0}")]
    UnableToDecodeAsUtf8(#[from] std::str::Utf8Error),

    /// The decoded secret is neither a 32-byte seed nor a 96-byte legacy key.
    #[error("unrecognized secret format: expected 32 or 96 bytes, got {len}")]
    UnrecognizedSecretFormat { len: usize },

    /// The secret or signature text is not valid base64.
    #[error("invalid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    /// The public key bytes are not a valid Ed25519 point.
    #[error("invalid public key: {0}")]
    InvalidPublicKey(#[from] ed25519_dalek::SignatureError),

    /// The private key does not belong to the stored public key.
    #[error("private key does not match public key")]
    KeyPairMismatch,

    /// The public key bytes have wrong length (expected 32).
    #[error("invalid public key length: expected 32 bytes, got {0}")]
    InvalidPublicKeyLength(usize),

    /// The signature bytes have wrong length (expected 64).
    #[error("invalid signature length: expected 64 bytes, got {0}")]
    InvalidSignatureLength(usize),

    /// The signed length does not match the data being verified.
    #[error("length mismatch: signature covers {expected} bytes, data has {actual}")]
    LengthMismatch { expected: u64, actual: u64 },

    /// The signature did not verify against the public key.
    #[error("signature verification failed")]
    VerificationFailed,

    /// File I/O error while writing a secret.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
