use super::config::JwtConfig;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session token time-to-live: 1 hour
pub const TOKEN_TTL: i64 = 3600;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String, // Subject (user ID)
    pub exp: i64,    // Expiration time
    pub iat: i64,    // Issued at
}

impl JwtClaims {
    /// Parse the subject back into the user id it was issued for.
    pub fn user_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.sub).ok()
    }
}

/// Stateless HS256 JWT signer/verifier.
///
/// Tokens embed the user id as the subject and expire after [`TOKEN_TTL`]
/// seconds. There is no server-side session state; verification is purely
/// signature + expiry.
#[derive(Clone)]
pub struct JwtAuth {
    secret: String,
}

impl JwtAuth {
    /// Create a new JWT auth instance from explicit configuration.
    ///
    /// # Example
    /// ```ignore
    /// use axum_helpers::{JwtAuth, JwtConfig};
    /// use core_config::FromEnv;
    ///
    /// let config = JwtConfig::from_env()?;
    /// let jwt_auth = JwtAuth::new(&config);
    /// ```
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            secret: config.secret.clone(),
        }
    }

    /// Create a session token (1 hour) for the given user.
    pub fn create_token(&self, user_id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
        self.create_token_with_ttl(user_id, TOKEN_TTL)
    }

    fn create_token_with_ttl(
        &self,
        user_id: Uuid,
        ttl_seconds: i64,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: user_id.to_string(),
            exp: (now + Duration::seconds(ttl_seconds)).timestamp(),
            iat: now.timestamp(),
        };

        let header = Header {
            alg: jsonwebtoken::Algorithm::HS256,
            ..Default::default()
        };

        encode(
            &header,
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
    }

    /// Verify token signature and expiry, and decode the claims.
    pub fn verify_token(&self, token: &str) -> Result<JwtClaims, jsonwebtoken::errors::Error> {
        let token_data = decode::<JwtClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> JwtAuth {
        JwtAuth::new(&JwtConfig::new("test-secret-that-is-long-enough-123456"))
    }

    #[test]
    fn test_token_round_trip() {
        let auth = auth();
        let user_id = Uuid::now_v7();

        let token = auth.create_token(user_id).unwrap();
        let claims = auth.verify_token(&token).unwrap();

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.user_id(), Some(user_id));
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL);
    }

    #[test]
    fn test_expired_token_rejected() {
        let auth = auth();
        let token = auth
            .create_token_with_ttl(Uuid::now_v7(), -120)
            .unwrap();

        let result = auth.verify_token(&token);
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let signer = auth();
        let verifier = JwtAuth::new(&JwtConfig::new("another-secret-that-is-long-enough-42"));

        let token = signer.create_token(Uuid::now_v7()).unwrap();
        assert!(verifier.verify_token(&token).is_err());
    }

    #[test]
    fn test_malformed_token_rejected() {
        let auth = auth();
        assert!(auth.verify_token("not-a-jwt").is_err());
    }
}
