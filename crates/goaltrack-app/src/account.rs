//! Sign-up, sign-in, and sign-out.

use jiff::Timestamp;
use tracing::{info, warn};

use goaltrack_core::models::Profile;
use goaltrack_core::validate;
use goaltrack_store::error::StoreError;
use goaltrack_store::profiles;

use crate::error::AppError;
use crate::session::Session;
use crate::state::AppState;

#[derive(Debug, Clone)]
pub struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Create an account: validate, claim the username, register the identity,
/// write the profile, then authenticate.
///
/// The early `username_taken` read gives a friendly error but can race with
/// a concurrent sign-up; the conditional username claim inside
/// `create_profile` is what actually decides the winner. If the profile
/// write fails after the identity was registered, the identity stays behind
/// without a profile — accepted, not compensated.
pub async fn sign_up(state: &AppState, request: &SignUpRequest) -> Result<Session, AppError> {
    let username = validate::username(&request.username)?;

    if profiles::username_taken(&state.s3, &state.config.bucket, &username).await? {
        return Err(AppError::Conflict { username });
    }

    let user_id = goaltrack_auth::flows::sign_up(
        &state.cognito,
        &state.config.user_pool_client_id,
        &request.email,
        &request.password,
        &username,
    )
    .await?;

    let now = Timestamp::now();
    let profile = Profile {
        id: user_id,
        username: username.clone(),
        email: request.email.clone(),
        created_at: now,
        updated_at: now,
    };

    match profiles::create_profile(&state.s3, &state.config.bucket, &profile).await {
        Ok(()) => {}
        Err(StoreError::AlreadyExists { .. }) => {
            warn!(
                username = username.as_str(),
                "username claimed between check and create"
            );
            return Err(AppError::Conflict { username });
        }
        Err(e) => return Err(e.into()),
    }

    info!(username = username.as_str(), "account created");
    sign_in(state, &request.email, &request.password).await
}

/// Authenticate with credentials and establish a session, validating the
/// issued id token locally when the pool key is configured.
pub async fn sign_in(state: &AppState, email: &str, password: &str) -> Result<Session, AppError> {
    let tokens = goaltrack_auth::flows::initiate_auth(
        &state.cognito,
        &state.config.user_pool_client_id,
        email,
        password,
    )
    .await?;

    let session = match &state.id_token_key {
        Some(key) => Session::from_id_token(
            tokens,
            key,
            &state.config.user_pool_id,
            &state.config.region,
        )?,
        None => Session::establish(&state.cognito, tokens).await?,
    };
    Ok(session)
}

/// Invalidate the session at the provider. The caller drops its `Session`
/// value afterwards.
pub async fn sign_out(state: &AppState, session: &Session) -> Result<(), AppError> {
    goaltrack_auth::flows::sign_out(&state.cognito, &session.tokens.access_token).await?;
    Ok(())
}
