//! HMAC-SHA256 request signing for webhooks that verify their callers.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::TransportError;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the body signature.
pub const SIGNATURE_HEADER: &str = "x-helix-signature-256";

/// Compute the header value `sha256=<hex>` for `body` under `secret`.
pub fn sign_body(secret: &str, body: &[u8]) -> Result<String, TransportError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|_| TransportError::Signing("invalid HMAC key length".to_string()))?;
    mac.update(body);
    Ok(format!("sha256={}", hex::encode(mac.finalize().into_bytes())))
}

/// Check a `sha256=<hex>` header value against `body`.
#[cfg(test)]
pub(crate) fn verify_signature(secret: &str, body: &[u8], header: &str) -> bool {
    let Some(expected) = header
        .strip_prefix("sha256=")
        .and_then(|hex_sig| hex::decode(hex_sig).ok())
    else {
        return false;
    };
    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(body);
    mac.verify_slice(&expected).is_ok()
}
