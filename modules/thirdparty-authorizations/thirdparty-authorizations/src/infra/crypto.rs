//! Ed25519 signature verification.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as Base64;
use ed25519_dalek::{Signature, VerifyingKey};
use thirdparty_authorizations_sdk::SignatureVerifier;

/// Verifies base64 Ed25519 signatures over the UTF-8 bytes of a challenge.
///
/// `credential_payload` holds the base64 32-byte public key; `value` holds
/// the base64 64-byte signature. Any decoding failure is a failed check.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519SignatureVerifier;

impl Ed25519SignatureVerifier {
    fn try_verify(challenge: &str, value: &str, credential_payload: &str) -> Option<()> {
        let key = decode_public_key(credential_payload)?;
        let signature_bytes = Base64.decode(value.trim()).ok()?;
        let signature = Signature::from_slice(&signature_bytes).ok()?;
        key.verify_strict(challenge.as_bytes(), &signature).ok()
    }
}

impl SignatureVerifier for Ed25519SignatureVerifier {
    fn verify(&self, challenge: &str, value: &str, credential_payload: &str) -> bool {
        let verified = Self::try_verify(challenge, value, credential_payload).is_some();
        if !verified {
            tracing::debug!("Ed25519 signature check failed");
        }
        verified
    }
}

fn decode_public_key(encoded: &str) -> Option<VerifyingKey> {
    let bytes = Base64.decode(encoded.trim()).ok()?;
    let key_bytes: [u8; 32] = bytes.as_slice().try_into().ok()?;
    VerifyingKey::from_bytes(&key_bytes).ok()
}
