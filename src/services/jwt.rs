//! Issues and verifies the signed, time-limited identity tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::{
    config::JwtConfig,
    error::{ApiError, ApiResult},
};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,  // Subject (user id)
    pub email: String,
    pub role: String,
    pub iat: usize,
    pub exp: usize,
}

impl Claims {
    pub fn user_id(&self) -> ApiResult<i32> {
        // The subject is minted from a user id by `issue_token`; anything
        // else means the token was not ours.
        self.sub.parse::<i32>().map_err(|_| ApiError::InvalidToken)
    }
}

/// Stateless token service around a single process-wide secret. There is no
/// revocation list; claims stay valid until expiry.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry: u64,
}

impl JwtService {
    pub fn new(config: JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            token_expiry: config.token_expiry,
        }
    }

    pub fn issue_token(&self, user_id: i32, email: &str, role: &str) -> ApiResult<String> {
        let now = Utc::now();
        let expires_at = now + Duration::seconds(self.token_expiry as i64);

        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            iat: now.timestamp() as usize,
            exp: expires_at.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| ApiError::InternalError(format!("Token encoding error: {}", e)))
    }

    /// Purely cryptographic/structural verification; no store lookup.
    pub fn verify_token(&self, token: &str) -> ApiResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => ApiError::TokenExpired,
                _ => ApiError::InvalidToken,
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_service() -> JwtService {
        JwtService::new(JwtConfig {
            secret: "test-secret".to_string(),
            token_expiry: 86400,
        })
    }

    #[test]
    fn token_round_trips_claims() {
        let service = test_service();
        let token = service
            .issue_token(42, "ana@example.com", "admin")
            .unwrap();

        let claims = service.verify_token(&token).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.user_id().unwrap(), 42);
        assert_eq!(claims.email, "ana@example.com");
        assert_eq!(claims.role, "admin");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn expired_token_fails_verification() {
        let service = test_service();

        // Issued more than 24 hours in the past.
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "1".to_string(),
            email: "ana@example.com".to_string(),
            role: "user".to_string(),
            iat: (now - 2 * 86400) as usize,
            exp: (now - 86400) as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(matches!(
            service.verify_token(&token),
            Err(ApiError::TokenExpired)
        ));
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let service = test_service();
        let other = JwtService::new(JwtConfig {
            secret: "another-secret".to_string(),
            token_expiry: 86400,
        });

        let token = other.issue_token(1, "ana@example.com", "user").unwrap();
        assert!(matches!(
            service.verify_token(&token),
            Err(ApiError::InvalidToken)
        ));
    }

    #[test]
    fn malformed_token_is_rejected() {
        let service = test_service();
        assert!(matches!(
            service.verify_token("not-a-token"),
            Err(ApiError::InvalidToken)
        ));
    }

    #[test]
    fn non_numeric_subject_is_rejected() {
        let claims = Claims {
            sub: "abc".to_string(),
            email: "ana@example.com".to_string(),
            role: "user".to_string(),
            iat: 0,
            exp: 0,
        };
        assert!(matches!(claims.user_id(), Err(ApiError::InvalidToken)));
    }
}
