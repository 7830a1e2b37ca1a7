//! JWT token generation and validation
//!
//! Tokens carry the user's id and display name and expire after the
//! configured lifetime. Keys are pre-computed once at startup.

use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// User display name
    pub name: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

/// Pre-computed JWT keys for efficient token operations
/// These are expensive to create, so we cache them in AppState
#[derive(Clone)]
pub struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    /// Create new JWT keys from secret
    /// This should be called once at startup
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }

    pub fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}

/// JWT service for token operations
///
/// Uses pre-computed keys to avoid expensive key derivation on every
/// request. Keys are wrapped in Arc for cheap cloning.
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    token_expiry_secs: i64,
}

impl JwtService {
    /// Create a new JWT service with pre-computed keys
    ///
    /// Call this once at application startup and store in AppState.
    pub fn new(secret: &str, token_expiry_secs: i64) -> Self {
        Self {
            keys: JwtKeys::new(secret),
            token_expiry_secs,
        }
    }

    /// Sign a token asserting the given user's identity
    pub fn sign(&self, user_id: Uuid, name: &str) -> Result<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.token_expiry_secs);

        let claims = Claims {
            sub: user_id.to_string(),
            name: name.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, self.keys.encoding())
            .map_err(|e| anyhow::anyhow!("Failed to sign token: {}", e))
    }

    /// Verify a token and return its claims
    #[inline]
    pub fn verify(&self, token: &str) -> Result<Claims> {
        let token_data = decode::<Claims>(token, self.keys.decoding(), &Validation::default())
            .map_err(|e| anyhow::anyhow!("Invalid token: {}", e))?;

        Ok(token_data.claims)
    }

    /// Token lifetime in seconds
    #[inline]
    pub fn token_expiry_secs(&self) -> i64 {
        self.token_expiry_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new("test-secret", 3600)
    }

    #[test]
    fn test_sign_and_verify_round_trip() {
        let service = create_test_service();
        let user_id = Uuid::new_v4();

        let token = service.sign(user_id, "Ada").unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.name, "Ada");
    }

    #[test]
    fn test_invalid_token_rejected() {
        let service = create_test_service();
        let result = service.verify("invalid.token.here");

        assert!(result.is_err());
    }

    #[test]
    fn test_token_from_other_secret_rejected() {
        let service = create_test_service();
        let other = JwtService::new("different-secret", 3600);
        let user_id = Uuid::new_v4();

        let token = other.sign(user_id, "Ada").unwrap();
        assert!(service.verify(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = JwtService::new("test-secret", -3600);
        let user_id = Uuid::new_v4();

        let token = service.sign(user_id, "Ada").unwrap();
        assert!(service.verify(&token).is_err());
    }

    #[test]
    fn test_service_is_clone_cheap() {
        let service = create_test_service();
        let _cloned = service.clone(); // Should be cheap due to Arc
    }
}
