//! Local validation of Cognito-issued session tokens.
//!
//! The user pool's JWKS public key is fetched out of band; with it in hand,
//! the user behind a token can be resolved without a provider round-trip.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AuthError;

/// Claims carried by a pool's access and id tokens.
#[derive(Debug, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub iss: String,
    pub token_use: String,
    pub exp: u64,
    pub iat: u64,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub preferred_username: Option<String>,
}

impl SessionClaims {
    /// The authenticated user's id.
    pub fn user_id(&self) -> Result<Uuid, AuthError> {
        Ok(Uuid::parse_str(&self.sub)?)
    }
}

/// The issuer URL Cognito stamps on every token minted by a pool.
pub fn issuer(user_pool_id: &str, region: &str) -> String {
    format!("https://cognito-idp.{region}.amazonaws.com/{user_pool_id}")
}

/// Validate a token against the pool's public key and return its claims.
///
/// Checks the RS256 signature, expiry, and issuer, and that the token is an
/// access or id token rather than a refresh token. Expiry maps to
/// [`AuthError::TokenExpired`] so callers can prompt a refresh instead of a
/// fresh sign-in.
pub fn validate_token(
    token: &str,
    decoding_key: &DecodingKey,
    user_pool_id: &str,
    region: &str,
) -> Result<SessionClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_issuer(&[issuer(user_pool_id, region)]);
    validation.validate_exp = true;

    let data =
        decode::<SessionClaims>(token, decoding_key, &validation).map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::Jwt(e),
        })?;

    match data.claims.token_use.as_str() {
        "access" | "id" => Ok(data.claims),
        other => Err(AuthError::InvalidToken(format!(
            "unexpected token_use: {other}"
        ))),
    }
}
