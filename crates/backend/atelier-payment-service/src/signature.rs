//! Payment confirmation signatures.
//!
//! The gateway signs its checkout callback as
//! `HMAC-SHA256(key_secret, "{order_id}|{payment_id}")`, lowercase hex. A
//! forged confirmation fails this check; nothing else about the callback is
//! trusted.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compute the expected signature for a payment confirmation.
pub fn payment_signature(secret: &str, order_id: &str, payment_id: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC-SHA256 accepts keys of any length");
    mac.update(order_id.as_bytes());
    mac.update(b"|");
    mac.update(payment_id.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Check a claimed signature against the expected one.
///
/// Fails closed on an empty secret: callers are expected to have reported a
/// configuration error before getting here, but an unconfigured secret must
/// never validate anything. The comparison is constant-time over the digest
/// bytes.
pub fn verify_payment_signature(
    secret: &str,
    order_id: &str,
    payment_id: &str,
    claimed: &str,
) -> bool {
    if secret.is_empty() {
        return false;
    }
    let expected = payment_signature(secret, order_id, payment_id);
    constant_time_eq(expected.as_bytes(), claimed.as_bytes())
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (&x, &y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test_key_secret";
    const ORDER_ID: &str = "order_9A33XWu170gUtm";
    const PAYMENT_ID: &str = "pay_29QQoUBi66xm2f";

    #[test]
    fn known_vector() {
        assert_eq!(
            payment_signature(SECRET, ORDER_ID, PAYMENT_ID),
            "05a90d99a226250bdd07dcbec806d936d0ac974af71513b19a36466e7f5eb3a3"
        );
    }

    #[test]
    fn round_trip_verifies() {
        let sig = payment_signature(SECRET, ORDER_ID, PAYMENT_ID);
        assert!(verify_payment_signature(SECRET, ORDER_ID, PAYMENT_ID, &sig));
    }

    #[test]
    fn any_single_character_change_fails() {
        let sig = payment_signature(SECRET, ORDER_ID, PAYMENT_ID);
        for i in 0..sig.len() {
            let mut bytes = sig.clone().into_bytes();
            bytes[i] = if bytes[i] == b'0' { b'1' } else { b'0' };
            let tampered = String::from_utf8(bytes).unwrap();
            assert!(
                !verify_payment_signature(SECRET, ORDER_ID, PAYMENT_ID, &tampered),
                "tampered signature accepted at position {i}"
            );
        }
    }

    #[test]
    fn truncated_signature_fails() {
        let sig = payment_signature(SECRET, ORDER_ID, PAYMENT_ID);
        assert!(!verify_payment_signature(SECRET, ORDER_ID, PAYMENT_ID, &sig[..sig.len() - 1]));
        assert!(!verify_payment_signature(SECRET, ORDER_ID, PAYMENT_ID, ""));
    }

    #[test]
    fn empty_secret_fails_closed() {
        // Even the digest a zero-length key would produce is rejected.
        let empty_key_digest = "82fce506c6caa7d8bd0acd8d0e988bf70137e09e6a9b6d9a8c510f786672f515";
        assert!(!verify_payment_signature("", ORDER_ID, PAYMENT_ID, empty_key_digest));
    }

    #[test]
    fn signature_is_deterministic_lowercase_hex() {
        let a = payment_signature(SECRET, ORDER_ID, PAYMENT_ID);
        let b = payment_signature(SECRET, ORDER_ID, PAYMENT_ID);
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn constant_time_eq_basics() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"ab"));
        assert!(constant_time_eq(b"", b""));
    }
}
