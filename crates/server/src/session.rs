//! Signed, expiring admin session tokens.
//!
//! A token is `{expires}.{nonce}.{tag}` where `expires` is a unix timestamp,
//! `nonce` is 16 random bytes and `tag` is HMAC-SHA256 over `{expires}.{nonce}`.
//! Both binary parts are base64url without padding.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Utc};
use rand::RngCore;
use ring::hmac;

const NONCE_LEN: usize = 16;

pub struct SessionKeys {
    key: hmac::Key,
    ttl_secs: i64,
}

impl SessionKeys {
    pub fn new(secret: &[u8], ttl_secs: i64) -> Self {
        Self {
            key: hmac::Key::new(hmac::HMAC_SHA256, secret),
            ttl_secs,
        }
    }

    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    pub fn issue(&self, now: DateTime<Utc>) -> String {
        let mut nonce = [0u8; NONCE_LEN];
        rand::rngs::OsRng.fill_bytes(&mut nonce);

        let payload = format!(
            "{}.{}",
            now.timestamp() + self.ttl_secs,
            URL_SAFE_NO_PAD.encode(nonce)
        );
        let tag = hmac::sign(&self.key, payload.as_bytes());
        format!("{}.{}", payload, URL_SAFE_NO_PAD.encode(tag.as_ref()))
    }

    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> bool {
        self.expiry(token)
            .map(|expires| expires > now.timestamp())
            .unwrap_or(false)
    }

    /// Returns the expiry of a token whose signature checks out.
    fn expiry(&self, token: &str) -> Option<i64> {
        let (payload, tag) = token.rsplit_once('.')?;
        let (expires, nonce) = payload.split_once('.')?;

        let nonce = URL_SAFE_NO_PAD.decode(nonce).ok()?;
        if nonce.len() != NONCE_LEN {
            return None;
        }
        let tag = URL_SAFE_NO_PAD.decode(tag).ok()?;
        hmac::verify(&self.key, payload.as_bytes(), &tag).ok()?;

        expires.parse().ok()
    }

    /// Constant-time comparison of a submitted password with the configured one.
    pub fn password_matches(&self, submitted: &str, expected: &str) -> bool {
        let expected_tag = hmac::sign(&self.key, expected.as_bytes());
        hmac::verify(&self.key, submitted.as_bytes(), expected_tag.as_ref()).is_ok()
    }
}
