//! Ed25519 key decoding and generation.
//!
//! A stored secret comes in one of two encodings:
//!
//! - newer keys store the 32-byte Ed25519 seed;
//! - older keys store the 64-byte expanded private key followed by the 32-byte public key.
//!
//! Both decode to the same [`KeyPair`] shape, with the private half in expanded form, so
//! signing code does not care which tool version produced the secret.

use std::fmt;
use std::io::Write;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use ed25519_dalek::SigningKey;
use sha2::Digest;
use sha2::Sha512;
use zeroize::Zeroize;
use zeroize::ZeroizeOnDrop;
use zeroize::Zeroizing;

use crate::error::SecretError;
use crate::secret;

/// Length of an Ed25519 seed.
pub const SEED_LENGTH: usize = 32;
/// Length of an expanded Ed25519 private key (clamped scalar followed by hash prefix).
pub const PRIVATE_KEY_LENGTH: usize = 64;
/// Length of an Ed25519 public key.
pub const PUBLIC_KEY_LENGTH: usize = 32;
/// Length of a legacy secret: expanded private key followed by public key.
pub const LEGACY_SECRET_LENGTH: usize = PRIVATE_KEY_LENGTH + PUBLIC_KEY_LENGTH;

/// Encoding of a stored secret, determined by its length alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretFormat {
    /// A 32-byte seed.
    RegularSeed,
    /// A 96-byte expanded private key and public key.
    OldHashedSeed,
    /// Any other length.
    Unrecognized,
}

impl SecretFormat {
    /// Classify a raw secret by its byte length.
    pub fn classify(secret: &[u8]) -> Self {
        match secret.len() {
            SEED_LENGTH => Self::RegularSeed,
            LEGACY_SECRET_LENGTH => Self::OldHashedSeed,
            _ => Self::Unrecognized,
        }
    }
}

impl fmt::Display for SecretFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::RegularSeed => "seed",
            Self::OldHashedSeed => "legacy expanded key",
            Self::Unrecognized => "unrecognized",
        };
        f.write_str(name)
    }
}

/// An Ed25519 key pair with the private key in 64-byte expanded form.
///
/// The private half is wiped when the pair is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeyPair {
    private_key: [u8; PRIVATE_KEY_LENGTH],
    #[zeroize(skip)]
    public_key: [u8; PUBLIC_KEY_LENGTH],
}

impl KeyPair {
    /// Assemble a key pair from an expanded private key and its public key.
    pub fn from_parts(private_key: [u8; PRIVATE_KEY_LENGTH], public_key: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        Self { private_key, public_key }
    }

    /// The expanded private key.
    pub fn private_key(&self) -> &[u8; PRIVATE_KEY_LENGTH] {
        &self.private_key
    }

    /// The public key.
    pub fn public_key(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.public_key
    }

    /// The public key as base64, the form update feeds embed.
    pub fn public_key_base64(&self) -> String {
        STANDARD.encode(self.public_key)
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("private_key", &"<redacted>")
            .field("public_key", &self.public_key_base64())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Key pair generation from a seed
// ---------------------------------------------------------------------------

/// Derives a key pair from a 32-byte seed.
pub trait KeyPairGenerator {
    /// Deterministically derive the expanded private key and public key for `seed`.
    fn generate_key_pair(&self, seed: &[u8; SEED_LENGTH]) -> KeyPair;
}

/// Standard Ed25519 key expansion.
///
/// The private key is `SHA-512(seed)` with the lower half clamped, matching the
/// layout legacy secrets were stored in.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519Generator;

impl KeyPairGenerator for Ed25519Generator {
    fn generate_key_pair(&self, seed: &[u8; SEED_LENGTH]) -> KeyPair {
        let mut private_key = [0u8; PRIVATE_KEY_LENGTH];
        private_key.copy_from_slice(&Sha512::digest(seed));
        private_key[0] &= 0b1111_1000;
        private_key[31] &= 0b0111_1111;
        private_key[31] |= 0b0100_0000;

        let public_key = SigningKey::from_bytes(seed).verifying_key().to_bytes();
        KeyPair::from_parts(private_key, public_key)
    }
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Decodes stored secrets into key pairs.
#[derive(Debug, Clone, Default)]
pub struct KeyDecoder<G = Ed25519Generator> {
    generator: G,
}

impl<G: KeyPairGenerator> KeyDecoder<G> {
    /// Create a decoder that derives seed-based keys with `generator`.
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Decode a raw (already base64-decoded) secret into a key pair.
    ///
    /// Seeds are expanded through the generator; legacy secrets are split as-is.
    /// Returns [`SecretError::UnrecognizedSecretFormat`] for any other length.
    pub fn decode(&self, secret: &[u8]) -> Result<KeyPair, SecretError> {
        let format = SecretFormat::classify(secret);
        tracing::debug!(%format, len = secret.len(), "classified secret");

        match format {
            SecretFormat::RegularSeed => {
                let mut seed = Zeroizing::new([0u8; SEED_LENGTH]);
                seed.copy_from_slice(secret);
                Ok(self.generator.generate_key_pair(&seed))
            }
            SecretFormat::OldHashedSeed => {
                let (private, public) = secret.split_at(PRIVATE_KEY_LENGTH);
                let mut private_key = [0u8; PRIVATE_KEY_LENGTH];
                private_key.copy_from_slice(private);
                let mut public_key = [0u8; PUBLIC_KEY_LENGTH];
                public_key.copy_from_slice(public);
                Ok(KeyPair::from_parts(private_key, public_key))
            }
            SecretFormat::Unrecognized => Err(SecretError::UnrecognizedSecretFormat { len: secret.len() }),
        }
    }
}

/// Classify a raw secret by its byte length.
pub fn classify(secret: &[u8]) -> SecretFormat {
    SecretFormat::classify(secret)
}

/// Decode a raw secret with the standard Ed25519 generator.
pub fn decode_key_pair(secret: &[u8]) -> Result<KeyPair, SecretError> {
    KeyDecoder::new(Ed25519Generator).decode(secret)
}

/// Load, base64-decode and decode the secret stored at `path`.
pub fn load_key_pair(path: &Path) -> Result<KeyPair, SecretError> {
    let secret = secret::load_secret(path)?;
    decode_key_pair(&secret)
}

// ---------------------------------------------------------------------------
// New secrets
// ---------------------------------------------------------------------------

/// Generate a fresh random seed.
pub fn generate_seed() -> Zeroizing<[u8; SEED_LENGTH]> {
    Zeroizing::new(SigningKey::generate(&mut rand_core::OsRng).to_bytes())
}

/// Save a secret to a file as base64 text.
///
/// Sets file permissions to 0o600 on Unix.
pub fn save_secret(path: &Path, secret: &[u8]) -> Result<(), SecretError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let text = secret::encode_secret_base64(secret);
    let mut file = std::fs::File::create(path)?;
    file.write_all(text.as_bytes())?;
    file.write_all(b"\n")?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
    }

    Ok(())
}
