use jsonwebtoken::DecodingKey;

use crate::config::AppConfig;
use crate::error::AppError;

/// Shared clients and configuration, built once and threaded through every
/// flow.
pub struct AppState {
    pub cognito: aws_sdk_cognitoidentityprovider::Client,
    pub s3: aws_sdk_s3::Client,
    pub config: AppConfig,
    /// The user pool's JWKS public key, fetched out of band. When present,
    /// sessions are established by validating the id token locally instead
    /// of a provider round-trip.
    pub id_token_key: Option<DecodingKey>,
}

impl AppState {
    /// Build clients for the configured region.
    pub async fn new(config: AppConfig) -> Self {
        let cognito = goaltrack_auth::client::build_client_with_region(&config.region).await;
        let s3 = goaltrack_store::client::build_client_with_region(&config.region).await;
        Self {
            cognito,
            s3,
            config,
            id_token_key: None,
        }
    }

    pub async fn from_env() -> Result<Self, AppError> {
        Ok(Self::new(AppConfig::from_env()?).await)
    }

    pub fn with_id_token_key(mut self, key: DecodingKey) -> Self {
        self.id_token_key = Some(key);
        self
    }
}
