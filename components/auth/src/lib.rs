//! Stateless signed identity tokens.
//!
//! A token is `base64url(payload) "." base64url(mac)` where the payload is a
//! small JSON document carrying the user id and an expiry, and the MAC is
//! HMAC-SHA256 over the payload bytes with a process-wide secret. Verification
//! needs no database lookup; the MAC check happens before the expiry check so
//! forged tokens never influence timing.

use std::fmt;

use base64::engine::{general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

pub type UserId = Uuid;

#[derive(Debug, thiserror::Error)]
pub enum AuthTokenError {
    #[error("Malformed Token")]
    Malformed,

    #[error("Decode Error: {0}")]
    DecodeError(#[from] base64::DecodeError),

    #[error("Invalid Signature")]
    InvalidSignature,

    #[error("Expired Token")]
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
struct TokenPayload {
    /// Subject, the user this token authenticates as.
    sub: UserId,

    /// Expiry as unix seconds.
    exp: i64,
}

/// Signs and verifies identity tokens with a fixed secret loaded at startup.
#[derive(Clone)]
pub struct TokenKey(HmacSha256);

impl fmt::Debug for TokenKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("TokenKey")
    }
}

impl TokenKey {
    pub fn new(secret: &[u8]) -> TokenKey {
        // new_from_slice only fails for unusable key lengths, which HMAC
        // does not have
        TokenKey(HmacSha256::new_from_slice(secret).unwrap())
    }

    fn mac(&self, payload: &[u8]) -> HmacSha256 {
        let mut mac = self.0.clone();
        mac.update(payload);
        mac
    }

    /// Produces a signed token asserting `user_id` until `expires`.
    pub fn issue(&self, user_id: UserId, expires: DateTime<Utc>) -> String {
        let payload = serde_json::to_vec(&TokenPayload {
            sub: user_id,
            exp: expires.timestamp(),
        })
        .expect("token payload is always serializable");

        let sig = self.mac(&payload).finalize().into_bytes();

        let mut token = URL_SAFE_NO_PAD.encode(&payload);
        token.push('.');
        URL_SAFE_NO_PAD.encode_string(sig, &mut token);
        token
    }

    /// Checks signature and expiry, returning the embedded user id.
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<UserId, AuthTokenError> {
        let (payload, sig) = token.split_once('.').ok_or(AuthTokenError::Malformed)?;

        let payload = URL_SAFE_NO_PAD.decode(payload)?;
        let sig = URL_SAFE_NO_PAD.decode(sig)?;

        // constant-time comparison within the Mac impl
        self.mac(&payload)
            .verify_slice(&sig)
            .map_err(|_| AuthTokenError::InvalidSignature)?;

        let payload: TokenPayload =
            serde_json::from_slice(&payload).map_err(|_| AuthTokenError::Malformed)?;

        if payload.exp <= now.timestamp() {
            return Err(AuthTokenError::Expired);
        }

        Ok(payload.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn key() -> TokenKey {
        TokenKey::new(b"an adequately long testing secret")
    }

    #[test]
    fn round_trip() {
        let key = key();
        let now = Utc::now();
        let user_id = Uuid::new_v4();

        let token = key.issue(user_id, now + TimeDelta::hours(1));

        assert_eq!(key.verify(&token, now).unwrap(), user_id);
    }

    #[test]
    fn token_asserts_exactly_one_identity() {
        let key = key();
        let now = Utc::now();

        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        let token = key.issue(a, now + TimeDelta::hours(1));
        let verified = key.verify(&token, now).unwrap();

        assert_eq!(verified, a);
        assert_ne!(verified, b);
    }

    #[test]
    fn expired_tokens_are_rejected() {
        let key = key();
        let now = Utc::now();

        let token = key.issue(Uuid::new_v4(), now - TimeDelta::seconds(1));

        assert!(matches!(key.verify(&token, now), Err(AuthTokenError::Expired)));

        // expiry boundary itself counts as expired
        let token = key.issue(Uuid::new_v4(), now);
        assert!(matches!(key.verify(&token, now), Err(AuthTokenError::Expired)));
    }

    #[test]
    fn tampered_payloads_are_rejected() {
        let key = key();
        let now = Utc::now();

        let token = key.issue(Uuid::new_v4(), now + TimeDelta::hours(1));

        let (payload, sig) = token.split_once('.').unwrap();

        let mut forged = URL_SAFE_NO_PAD.decode(payload).unwrap();
        forged[10] ^= 1;

        let forged = format!("{}.{sig}", URL_SAFE_NO_PAD.encode(forged));

        assert!(matches!(
            key.verify(&forged, now),
            Err(AuthTokenError::InvalidSignature)
        ));
    }

    #[test]
    fn wrong_key_is_rejected() {
        let now = Utc::now();
        let token = key().issue(Uuid::new_v4(), now + TimeDelta::hours(1));

        let other = TokenKey::new(b"a different secret entirely here");

        assert!(matches!(
            other.verify(&token, now),
            Err(AuthTokenError::InvalidSignature)
        ));
    }

    #[test]
    fn garbage_is_malformed_not_a_panic() {
        let key = key();
        let now = Utc::now();

        assert!(key.verify("", now).is_err());
        assert!(key.verify("no-dot-here", now).is_err());
        assert!(key.verify("!!!.???", now).is_err());
    }
}
