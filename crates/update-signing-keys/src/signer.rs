//! Signing update archives with a decoded key pair.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use ed25519_dalek::VerifyingKey;
use ed25519_dalek::hazmat::ExpandedSecretKey;
use ed25519_dalek::hazmat::raw_sign;
use sha2::Sha512;

use crate::error::SecretError;
use crate::keys::KeyPair;
use crate::signature::UpdateSignature;

/// Sign `data` with the expanded private key of `key_pair`.
///
/// Signing goes through the expanded key directly, so seed-derived and legacy
/// secrets holding the same key produce the same signature. The fresh
/// signature is checked against the stored public key before it is returned,
/// which catches legacy secrets whose two halves do not belong together.
pub fn sign_bytes(data: &[u8], key_pair: &KeyPair) -> Result<UpdateSignature, SecretError> {
    let verifying_key = VerifyingKey::from_bytes(key_pair.public_key())?;
    let expanded = ExpandedSecretKey::from_bytes(key_pair.private_key());
    let signature = raw_sign::<Sha512>(&expanded, data, &verifying_key);

    verifying_key.verify_strict(data, &signature).map_err(|_| SecretError::KeyPairMismatch)?;
    tracing::debug!(length = data.len(), "signed update data");

    Ok(UpdateSignature {
        ed_signature: STANDARD.encode(signature.to_bytes()),
        length: data.len() as u64,
    })
}
