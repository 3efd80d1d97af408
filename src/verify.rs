//! Ed25519 signature verification for inbound interactions
//!
//! Discord signs `timestamp || raw_body` and sends the signature and
//! timestamp as headers. Verification must run over the exact bytes that
//! arrived on the wire; a re-serialized body is not guaranteed to reproduce
//! the signed payload.

use anyhow::Context as _;
use ed25519_dalek::{Signature, Verifier as _, VerifyingKey};

/// Parse a hex-encoded ed25519 public key into a verifying key
///
/// Called once at startup; request handling only ever sees the parsed key.
pub fn parse_public_key(hex_key: &str) -> anyhow::Result<VerifyingKey> {
    let bytes = hex::decode(hex_key).context("Decoding public key hex")?;
    let arr: [u8; 32] = bytes
        .try_into()
        .ok()
        .context("Public key must be 32 bytes")?;
    VerifyingKey::from_bytes(&arr).context("Parsing ed25519 public key")
}

/// Verify a request signature against the raw body bytes
///
/// Any malformed input (bad hex, wrong signature length) is a verification
/// failure, never an error or panic.
pub fn verify_signature(
    key: &VerifyingKey,
    signature_hex: &str,
    timestamp: &str,
    body: &[u8],
) -> bool {
    let Ok(sig_bytes) = hex::decode(signature_hex) else {
        return false;
    };
    let Ok(signature) = Signature::from_slice(&sig_bytes) else {
        return false;
    };

    let mut signed = Vec::with_capacity(timestamp.len() + body.len());
    signed.extend_from_slice(timestamp.as_bytes());
    signed.extend_from_slice(body);

    key.verify(&signed, &signature).is_ok()
}
