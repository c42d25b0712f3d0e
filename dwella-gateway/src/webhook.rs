//! Webhook signature verification for both providers.
//!
//! Paystack signs the raw request body with HMAC-SHA512 under the account
//! secret key (`x-paystack-signature`); Flutterwave uses HMAC-SHA256
//! (`verif-hash`). Both send the signature hex-encoded.

use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha512};

/// Checks a Paystack webhook signature against the raw payload.
pub fn verify_paystack_signature(payload: &[u8], signature: &str, secret: &str) -> bool {
    let Ok(sig_bytes) = hex::decode(signature) else {
        return false;
    };
    let Ok(mut mac) = Hmac::<Sha512>::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(payload);
    mac.verify_slice(&sig_bytes).is_ok()
}

/// Checks a Flutterwave webhook signature against the raw payload.
pub fn verify_flutterwave_signature(payload: &[u8], signature: &str, secret: &str) -> bool {
    let Ok(sig_bytes) = hex::decode(signature) else {
        return false;
    };
    let Ok(mut mac) = Hmac::<Sha256>::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(payload);
    mac.verify_slice(&sig_bytes).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign_sha512(payload: &[u8], secret: &str) -> String {
        let mut mac = Hmac::<Sha512>::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(payload);
        hex::encode(mac.finalize().into_bytes())
    }

    fn sign_sha256(payload: &[u8], secret: &str) -> String {
        let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(payload);
        hex::encode(mac.finalize().into_bytes())
    }

    #[test]
    fn test_paystack_signature_round_trip() {
        let payload = br#"{"event":"charge.success","data":{"reference":"DT12345678ABCD"}}"#;
        let signature = sign_sha512(payload, "sk_test_secret");

        assert!(verify_paystack_signature(payload, &signature, "sk_test_secret"));
        assert!(!verify_paystack_signature(payload, &signature, "wrong_secret"));
    }

    #[test]
    fn test_flutterwave_signature_round_trip() {
        let payload = br#"{"event":"charge.completed","data":{"tx_ref":"DT_DT12345678ABCD_1"}}"#;
        let signature = sign_sha256(payload, "flw_test_secret");

        assert!(verify_flutterwave_signature(payload, &signature, "flw_test_secret"));
        assert!(!verify_flutterwave_signature(payload, &signature, "flw_other_secret"));
    }

    #[test]
    fn test_tampered_payload_is_rejected() {
        let payload = br#"{"event":"charge.success"}"#;
        let signature = sign_sha512(payload, "sk_test_secret");

        assert!(!verify_paystack_signature(b"{\"event\":\"charge.failed\"}", &signature, "sk_test_secret"));
    }

    #[test]
    fn test_garbage_signature_is_rejected() {
        assert!(!verify_paystack_signature(b"{}", "not-hex!", "sk_test_secret"));
    }
}
