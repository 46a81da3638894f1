//! The explicit session context.
//!
//! Every authenticated operation takes a [`Session`] value rather than
//! reading ambient global auth state; private views gate on [`require`].

use aws_sdk_cognitoidentityprovider::Client;
use jsonwebtoken::DecodingKey;
use uuid::Uuid;

use goaltrack_auth::error::AuthError;
use goaltrack_auth::flows::{self, Tokens};
use goaltrack_auth::jwt;

use crate::error::AppError;

/// An authenticated identity plus the tokens that back it.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: Uuid,
    pub tokens: Tokens,
}

impl Session {
    /// Resolve the identity behind freshly issued tokens by asking the
    /// provider. The fallback when no pool key is configured.
    pub async fn establish(client: &Client, tokens: Tokens) -> Result<Self, AuthError> {
        let user = flows::get_user(client, &tokens.access_token).await?;
        Ok(Self {
            user_id: user.id,
            tokens,
        })
    }

    /// Resolve the identity by validating the id token against the pool's
    /// public key, without a provider round-trip.
    pub fn from_id_token(
        tokens: Tokens,
        key: &DecodingKey,
        user_pool_id: &str,
        region: &str,
    ) -> Result<Self, AuthError> {
        let claims = jwt::validate_token(&tokens.id_token, key, user_pool_id, region)?;
        Ok(Self {
            user_id: claims.user_id()?,
            tokens,
        })
    }
}

/// Gate for private views. An absent session is an auth error, which the
/// presentation layer turns into a redirect to sign-in.
pub fn require(session: Option<&Session>) -> Result<&Session, AppError> {
    session.ok_or(AppError::Auth(AuthError::MissingSession))
}
