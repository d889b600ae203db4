//! Ed25519 signing secrets for software updates.
//!
//! A signing secret is stored as base64 text. Once decoded it is either a
//! 32-byte seed (current format) or a 96-byte expanded private key followed by
//! the public key (written by older tool versions). [`keys::decode_key_pair`]
//! turns either into a [`KeyPair`] whose private half is always the 64-byte
//! expanded key.
//!
//! # Signing
//!
//! ```
//! use update_signing_keys::{keys, signer, verifier};
//!
//! let pair = keys::decode_key_pair(&[0u8; 32]).unwrap();
//! let archive = b"update archive";
//! let sig = signer::sign_bytes(archive, &pair).unwrap();
//! assert!(verifier::verify_bytes(archive, &pair.public_key_base64(), &sig).is_ok());
//! ```
//!
//! # Loading
//!
//! [`secret::load_secret_text`] reads and trims the stored text,
//! [`secret::decode_secret_base64`] turns it into raw bytes, and
//! [`keys::load_key_pair`] does both plus decoding.

pub mod error;
pub mod keys;
pub mod secret;
pub mod signature;
pub mod signer;
pub mod verifier;

pub use error::SecretError;
pub use keys::KeyPair;
pub use keys::SecretFormat;
pub use signature::UpdateSignature;
