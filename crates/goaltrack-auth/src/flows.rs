use std::collections::HashMap;

use aws_sdk_cognitoidentityprovider::Client;
use aws_sdk_cognitoidentityprovider::types::{AttributeType, AuthFlowType};
use tracing::info;
use uuid::Uuid;

use goaltrack_core::validate;

use crate::error::AuthError;

/// The session tokens issued on successful authentication.
#[derive(Debug, Clone)]
pub struct Tokens {
    pub access_token: String,
    pub id_token: String,
    pub refresh_token: String,
}

/// The identity behind an access token, as reported by the provider.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub email: Option<String>,
    pub username: Option<String>,
}

/// Register a new identity, attaching the case-folded username as the
/// `preferred_username` attribute. Returns the new user's id.
///
/// The caller is responsible for writing the matching profile record; if
/// that write fails afterwards, the identity stays behind without a profile.
pub async fn sign_up(
    client: &Client,
    user_pool_client_id: &str,
    email: &str,
    password: &str,
    username: &str,
) -> Result<Uuid, AuthError> {
    let username = validate::fold_username(username);
    info!(username = username.as_str(), "signing up");

    let email_attr = AttributeType::builder()
        .name("email")
        .value(email)
        .build()
        .map_err(|e| AuthError::SignUpFailed(e.to_string()))?;
    let username_attr = AttributeType::builder()
        .name("preferred_username")
        .value(&username)
        .build()
        .map_err(|e| AuthError::SignUpFailed(e.to_string()))?;

    let resp = client
        .sign_up()
        .client_id(user_pool_client_id)
        .username(email)
        .password(password)
        .user_attributes(email_attr)
        .user_attributes(username_attr)
        .send()
        .await
        .map_err(|e| AuthError::SignUpFailed(e.into_service_error().to_string()))?;

    Ok(Uuid::parse_str(resp.user_sub())?)
}

/// Initiate username/password authentication with Cognito.
pub async fn initiate_auth(
    client: &Client,
    user_pool_client_id: &str,
    email: &str,
    password: &str,
) -> Result<Tokens, AuthError> {
    info!(email = email, "initiating auth");

    let mut auth_params = HashMap::new();
    auth_params.insert("USERNAME".to_string(), email.to_string());
    auth_params.insert("PASSWORD".to_string(), password.to_string());

    let resp = client
        .initiate_auth()
        .auth_flow(AuthFlowType::UserPasswordAuth)
        .client_id(user_pool_client_id)
        .set_auth_parameters(Some(auth_params))
        .send()
        .await
        .map_err(|e| AuthError::Cognito(e.into_service_error().to_string()))?;

    if let Some(result) = resp.authentication_result() {
        Ok(Tokens {
            access_token: result.access_token().unwrap_or_default().to_string(),
            id_token: result.id_token().unwrap_or_default().to_string(),
            refresh_token: result.refresh_token().unwrap_or_default().to_string(),
        })
    } else {
        Err(AuthError::AuthFailed(
            "provider returned no tokens".to_string(),
        ))
    }
}

/// Refresh tokens using a refresh token.
pub async fn refresh_auth(
    client: &Client,
    user_pool_client_id: &str,
    refresh_token: &str,
) -> Result<Tokens, AuthError> {
    let mut auth_params = HashMap::new();
    auth_params.insert("REFRESH_TOKEN".to_string(), refresh_token.to_string());

    let resp = client
        .initiate_auth()
        .auth_flow(AuthFlowType::RefreshTokenAuth)
        .client_id(user_pool_client_id)
        .set_auth_parameters(Some(auth_params))
        .send()
        .await
        .map_err(|e| AuthError::Cognito(e.into_service_error().to_string()))?;

    if let Some(result) = resp.authentication_result() {
        Ok(Tokens {
            access_token: result.access_token().unwrap_or_default().to_string(),
            id_token: result.id_token().unwrap_or_default().to_string(),
            // Refresh token may not be returned on refresh
            refresh_token: result.refresh_token().unwrap_or(refresh_token).to_string(),
        })
    } else {
        Err(AuthError::AuthFailed("refresh failed".to_string()))
    }
}

/// Invalidate every session of the user behind `access_token`.
pub async fn sign_out(client: &Client, access_token: &str) -> Result<(), AuthError> {
    client
        .global_sign_out()
        .access_token(access_token)
        .send()
        .await
        .map_err(|e| AuthError::Cognito(e.into_service_error().to_string()))?;

    Ok(())
}

/// Look up the user behind an access token. A revoked or expired token
/// reads as a missing session.
pub async fn get_user(client: &Client, access_token: &str) -> Result<AuthenticatedUser, AuthError> {
    let resp = client
        .get_user()
        .access_token(access_token)
        .send()
        .await
        .map_err(|e| {
            let err = e.into_service_error();
            if err.is_not_authorized_exception() {
                AuthError::MissingSession
            } else {
                AuthError::Cognito(err.to_string())
            }
        })?;

    let mut sub = None;
    let mut email = None;
    let mut username = None;
    for attr in resp.user_attributes() {
        match attr.name() {
            "sub" => sub = attr.value().map(str::to_string),
            "email" => email = attr.value().map(str::to_string),
            "preferred_username" => username = attr.value().map(str::to_string),
            _ => {}
        }
    }

    let sub = sub.ok_or_else(|| AuthError::Cognito("user has no sub attribute".to_string()))?;
    Ok(AuthenticatedUser {
        id: Uuid::parse_str(&sub)?,
        email,
        username,
    })
}
