use std::time::{SystemTime, UNIX_EPOCH};

use hmac::{Hmac, Mac};
use sha2::Sha256;

/// Header the receiver reads the signature from.
pub const STRIPE_SIGNATURE_HEADER: &str = "Stripe-Signature";

/// Compute the `v1` signature over `"<timestamp>.<payload>"`, hex encoded.
pub fn compute_signature(secret: &[u8], timestamp: u64, payload: &[u8]) -> String {
    let signed = [timestamp.to_string().as_bytes(), &b"."[..], payload].concat();

    let mut mac = Hmac::<Sha256>::new_from_slice(secret)
        .unwrap_or_else(|_| Hmac::<Sha256>::new_from_slice(b"default").expect("hmac"));
    mac.update(&signed);
    hex::encode(mac.finalize().into_bytes())
}

/// Full `Stripe-Signature` header value: `t=<timestamp>,v1=<signature>`.
pub fn signature_header(secret: &[u8], timestamp: u64, payload: &[u8]) -> String {
    format!(
        "t={},v1={}",
        timestamp,
        compute_signature(secret, timestamp, payload)
    )
}

pub(crate) fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_has_timestamp_and_v1_scheme() {
        let header = signature_header(b"whsec_test", 1_700_000_000, br#"{"id":1}"#);
        let (t, v1) = header.split_once(',').unwrap();
        assert_eq!(t, "t=1700000000");
        let sig = v1.strip_prefix("v1=").unwrap();
        assert_eq!(sig.len(), 64);
        assert!(sig.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn signature_matches_manual_hmac() {
        let payload = br#"{"type":"checkout.session.completed"}"#;
        let mut mac = Hmac::<Sha256>::new_from_slice(b"whsec_test").unwrap();
        mac.update(b"1700000000.");
        mac.update(payload);
        let expected = hex::encode(mac.finalize().into_bytes());

        assert_eq!(compute_signature(b"whsec_test", 1_700_000_000, payload), expected);
    }

    #[test]
    fn signature_depends_on_timestamp_and_secret() {
        let payload = b"{}";
        let base = compute_signature(b"a", 1, payload);
        assert_ne!(base, compute_signature(b"a", 2, payload));
        assert_ne!(base, compute_signature(b"b", 1, payload));
    }
}
