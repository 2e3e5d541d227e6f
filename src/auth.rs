//! Request signing for the platform wallet API.
//!
//! Private endpoints require three headers on every request:
//! `X-Api-Key`, `X-Nonce`, and `X-Signature`, where the signature is
//! `Base64(HMAC-SHA256(secret, "METHOD\npath\nnonce"))`. The nonce must
//! be strictly increasing per key.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use base64::prelude::*;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::Result;

/// Tracks the last nonce issued so every call returns a strictly
/// increasing value even when the wall-clock hasn't advanced.
///
/// Uses nanosecond resolution in a `u64`, which overflows around year 2554.
static LAST_NONCE: AtomicU64 = AtomicU64::new(0);

/// Returns a strictly monotonically-increasing nonce with nanosecond resolution.
///
/// Uses the wall-clock as the baseline but guarantees that successive calls
/// always return a value larger than the previous one, even when the clock
/// resolution is too coarse or the clock jumps backwards.
pub fn next_nonce() -> u64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    let mut prev = LAST_NONCE.load(Ordering::Relaxed);
    loop {
        let nonce = now.max(prev + 1);
        match LAST_NONCE.compare_exchange_weak(prev, nonce, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return nonce,
            Err(actual) => prev = actual,
        }
    }
}

/// Computes the `X-Signature` header value for a request.
///
/// Algorithm: `Base64(HMAC-SHA256(secret, "METHOD\npath\nnonce"))`.
///
/// # Errors
///
/// Returns a [`DompetError`](crate::DompetError) if the secret cannot
/// be used as an HMAC key.
pub fn sign(api_secret: &str, method: &str, path: &str, nonce: u64) -> Result<String> {
    let mut mac = Hmac::<Sha256>::new_from_slice(api_secret.as_bytes())
        .map_err(|e| crate::DompetError::Config(format!("invalid HMAC key: {e}")))?;
    mac.update(format!("{method}\n{path}\n{nonce}").as_bytes());
    let result = mac.finalize().into_bytes();

    Ok(BASE64_STANDARD.encode(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_produces_deterministic_output() {
        let nonce = 1_000_000_000_000u64;

        let sig1 = sign("merchant-secret", "GET", "/wallet/balance", nonce).unwrap();
        let sig2 = sign("merchant-secret", "GET", "/wallet/balance", nonce).unwrap();
        assert_eq!(sig1, sig2);

        // Verify the output is valid base64.
        assert!(BASE64_STANDARD.decode(&sig1).is_ok());
    }

    #[test]
    fn sign_varies_with_nonce() {
        let sig1 = sign("merchant-secret", "GET", "/wallet/balance", 1).unwrap();
        let sig2 = sign("merchant-secret", "GET", "/wallet/balance", 2).unwrap();
        assert_ne!(sig1, sig2);
    }

    #[test]
    fn sign_varies_with_path() {
        let sig1 = sign("merchant-secret", "GET", "/wallet/balance", 7).unwrap();
        let sig2 = sign("merchant-secret", "GET", "/wallet/mutations", 7).unwrap();
        assert_ne!(sig1, sig2);
    }

    #[test]
    fn next_nonce_is_strictly_monotonic() {
        let mut prev = next_nonce();
        for _ in 0..1_000 {
            let current = next_nonce();
            assert!(
                current > prev,
                "nonce did not increase: {prev} -> {current}"
            );
            prev = current;
        }
    }
}
