//! JWT Authentication Middleware
//!
//! Extracts and validates JWT tokens from requests. The token subject is the
//! caller's account address: it becomes the creator of content the caller
//! registers.

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequestParts, State},
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::models::content::AccountAddress;
use crate::infrastructure::driven_adapters::config::AppConfig;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::{ErrorDetail, ErrorResponse};

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account address)
    pub sub: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

/// Authenticated caller extracted from JWT
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount {
    pub address: AccountAddress,
}

/// JWT authentication extractor
pub struct JwtAuth(pub AuthenticatedAccount);

/// Error type for authentication failures
pub struct AuthError {
    message: String,
}

impl AuthError {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: ErrorDetail {
                code: "UNAUTHORIZED".to_string(),
                message: self.message,
                details: None,
            },
            request_id: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for JwtAuth
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get config from request extensions
        let config = parts
            .extensions
            .get::<Arc<AppConfig>>()
            .ok_or_else(|| AuthError::new("Configuration not available"))?
            .clone();

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| AuthError::new("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AuthError::new("Invalid Authorization header format"))?;

        // Explicit algorithm prevents algorithm confusion
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 60;

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(config.jwt.secret.expose_secret().as_bytes()),
            &validation,
        )
        .map_err(|err| {
            tracing::debug!(error = %err, "JWT validation failed");
            AuthError::new("Invalid or expired token")
        })?;

        let address = AccountAddress::parse(&token_data.claims.sub)
            .map_err(|_| AuthError::new("Token subject is not a valid account address"))?;

        Ok(JwtAuth(AuthenticatedAccount { address }))
    }
}

/// Middleware layer that adds config to request extensions for JWT validation
pub async fn add_config_extension(
    State(state): State<AppState>,
    mut request: axum::http::Request<axum::body::Body>,
    next: axum::middleware::Next,
) -> Response {
    request.extensions_mut().insert(state.config.clone());
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::driven_adapters::config::{DatabaseConfig, JwtConfig, ServerConfig};
    use crate::shared::secret::SecretString;
    use axum::http::Request;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "auth-unit-test-secret-with-at-least-32-chars";

    fn config() -> Arc<AppConfig> {
        Arc::new(AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                allowed_origins: vec![],
            },
            database: DatabaseConfig {
                url: "postgres://unused".to_string(),
                max_connections: 1,
                min_connections: 1,
            },
            jwt: JwtConfig {
                secret: SecretString::new(SECRET),
                expires_in_secs: 3600,
            },
            rate_limit: Default::default(),
            log: Default::default(),
            registry: Default::default(),
            deployment: Default::default(),
        })
    }

    fn token(claims: &serde_json::Value) -> String {
        encode(&Header::default(), claims, &EncodingKey::from_secret(SECRET.as_bytes())).unwrap()
    }

    async fn extract(token: &str) -> Result<AuthenticatedAccount, String> {
        let (mut parts, ()) = Request::builder()
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .body(())
            .unwrap()
            .into_parts();
        parts.extensions.insert(config());

        JwtAuth::from_request_parts(&mut parts, &())
            .await
            .map(|JwtAuth(account)| account)
            .map_err(|err| err.message)
    }

    #[tokio::test]
    async fn test_subject_becomes_lowercased_account() {
        let now = chrono::Utc::now().timestamp();
        let token = token(&serde_json::json!({
            "sub": "0xF39FD6E51AAD88F6F4CE6AB8827279CFFFB92266",
            "iat": now,
            "exp": now + 600,
        }));

        let account = extract(&token).await.unwrap();

        assert_eq!(account.address.as_str(), "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266");
    }

    #[tokio::test]
    async fn test_extra_claims_are_ignored() {
        let now = chrono::Utc::now().timestamp();
        let token = token(&serde_json::json!({
            "sub": "0x70997970c51812dc3a010c7d01b50e0d17dc79c8",
            "role": "admin",
            "iat": now,
            "exp": now + 600,
        }));

        assert!(extract(&token).await.is_ok());
    }

    #[tokio::test]
    async fn test_non_address_subject_is_rejected() {
        let now = chrono::Utc::now().timestamp();
        let token = token(&serde_json::json!({ "sub": "user-42", "iat": now, "exp": now + 600 }));

        assert_eq!(
            extract(&token).await.unwrap_err(),
            "Token subject is not a valid account address"
        );
    }
}
