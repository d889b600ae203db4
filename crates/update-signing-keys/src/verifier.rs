//! Update signature verification.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use ed25519_dalek::Signature;
use ed25519_dalek::VerifyingKey;

use crate::error::SecretError;
use crate::keys::PUBLIC_KEY_LENGTH;
use crate::signature::UpdateSignature;

/// Verify an update signature against the archive bytes.
///
/// Steps:
/// 1. Check the signed length matches `data`
/// 2. Decode the base64 public key and signature
/// 3. Verify the Ed25519 signature over the raw bytes
pub fn verify_bytes(data: &[u8], public_key: &str, sig: &UpdateSignature) -> Result<(), SecretError> {
    // Step 1: Check length matches
    let actual = data.len() as u64;
    if actual != sig.length {
        return Err(SecretError::LengthMismatch {
            expected: sig.length,
            actual,
        });
    }

    // Step 2: Decode public key and signature
    let pubkey_bytes = STANDARD.decode(public_key.trim())?;
    let pubkey_array: [u8; PUBLIC_KEY_LENGTH] = pubkey_bytes
        .as_slice()
        .try_into()
        .map_err(|_| SecretError::InvalidPublicKeyLength(pubkey_bytes.len()))?;
    let verifying_key = VerifyingKey::from_bytes(&pubkey_array)?;

    let sig_bytes = STANDARD.decode(sig.ed_signature.trim())?;
    let sig_array: [u8; 64] =
        sig_bytes.as_slice().try_into().map_err(|_| SecretError::InvalidSignatureLength(sig_bytes.len()))?;
    let ed_sig = Signature::from_bytes(&sig_array);

    // Step 3: Verify
    verifying_key.verify_strict(data, &ed_sig).map_err(|_| SecretError::VerificationFailed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::decode_key_pair;
    use crate::signer::sign_bytes;

    #[test]
    fn sign_then_verify_roundtrip() {
        let pair = decode_key_pair(&[3u8; 32]).unwrap();
        let data = b"valid update archive";
        let sig = sign_bytes(data, &pair).unwrap();
        assert!(verify_bytes(data, &pair.public_key_base64(), &sig).is_ok());
    }

    #[test]
    fn reference_vector_verifies() {
        let sig = UpdateSignature {
            ed_signature: "5VZDAMNgrHKQhuLMgG6CioSHfx645dl02HPgZSJJAVVfuIIVkKM7rMYeOXAc+bRr0lv18FlbviRlUUFDjnoQCw=="
                .into(),
            length: 0,
        };
        assert!(verify_bytes(b"", "11qYAYKxCrfVS/7TyWQHOg7hcvPapiMlrwIaaPcHURo=", &sig).is_ok());
    }

    #[test]
    fn tampered_bytes_fail() {
        let pair = decode_key_pair(&[3u8; 32]).unwrap();
        let sig = sign_bytes(b"original content", &pair).unwrap();

        let err = verify_bytes(b"tampered content", &pair.public_key_base64(), &sig).unwrap_err();
        assert!(matches!(err, SecretError::VerificationFailed));
    }

    #[test]
    fn wrong_key_fails() {
        let pair1 = decode_key_pair(&[1u8; 32]).unwrap();
        let pair2 = decode_key_pair(&[2u8; 32]).unwrap();
        let data = b"signed by pair1";
        let sig = sign_bytes(data, &pair1).unwrap();

        let err = verify_bytes(data, &pair2.public_key_base64(), &sig).unwrap_err();
        assert!(matches!(err, SecretError::VerificationFailed));
    }

    #[test]
    fn length_mismatch_fails_before_crypto() {
        let sig = UpdateSignature {
            ed_signature: "not even base64!".into(),
            length: 10,
        };
        let err = verify_bytes(b"x", "also not base64!", &sig).unwrap_err();
        assert!(matches!(err, SecretError::LengthMismatch { expected: 10, actual: 1 }));
    }

    #[test]
    fn invalid_base64_pubkey() {
        let sig = UpdateSignature {
            ed_signature: STANDARD.encode([0u8; 64]),
            length: 1,
        };
        let err = verify_bytes(b"x", "not-valid-base64!", &sig).unwrap_err();
        assert!(matches!(err, SecretError::InvalidBase64(_)));
    }

    #[test]
    fn wrong_length_pubkey() {
        let sig = UpdateSignature {
            ed_signature: STANDARD.encode([0u8; 64]),
            length: 1,
        };
        let err = verify_bytes(b"x", &STANDARD.encode([0u8; 16]), &sig).unwrap_err();
        assert!(matches!(err, SecretError::InvalidPublicKeyLength(16)));
    }

    #[test]
    fn wrong_length_signature() {
        let pair = decode_key_pair(&[3u8; 32]).unwrap();
        let sig = UpdateSignature {
            ed_signature: STANDARD.encode([0u8; 32]),
            length: 1,
        };
        let err = verify_bytes(b"x", &pair.public_key_base64(), &sig).unwrap_err();
        assert!(matches!(err, SecretError::InvalidSignatureLength(32)));
    }
}
