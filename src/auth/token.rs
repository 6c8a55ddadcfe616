use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::Result;

/// JWT claims of an access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// The user id, as a decimal string
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Signing and verification keys for access tokens
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl std::fmt::Debug for TokenKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenKeys")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenKeys {
    /// HS256 keys derived from `secret`; tokens live for `ttl`
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation: Validation::default(),
            ttl,
        }
    }

    /// Issue an access token for `user_id`
    pub fn issue(&self, user_id: i32) -> Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// The user id carried by `token`, if it is well formed, correctly
    /// signed and not expired
    pub fn verify(&self, token: &str) -> Option<i32> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation).ok()?;
        data.claims.sub.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_then_verify() {
        let keys = TokenKeys::new(b"secret", Duration::hours(1));
        let token = keys.issue(42).unwrap();
        assert_eq!(keys.verify(&token), Some(42));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = TokenKeys::new(b"secret", Duration::hours(1))
            .issue(7)
            .unwrap();
        let other = TokenKeys::new(b"other", Duration::hours(1));
        assert_eq!(other.verify(&token), None);
    }

    #[test]
    fn expired_token_is_rejected() {
        let keys = TokenKeys::new(b"secret", Duration::hours(-2));
        let token = keys.issue(7).unwrap();
        assert_eq!(keys.verify(&token), None);
    }

    #[test]
    fn garbage_is_rejected() {
        let keys = TokenKeys::new(b"secret", Duration::hours(1));
        assert_eq!(keys.verify("not.a.token"), None);
    }
}
