use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Deployment configuration for the hosted backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub region: String,
    /// Bucket holding the `profiles/`, `usernames/`, and `goals/` records.
    pub bucket: String,
    pub user_pool_id: String,
    pub user_pool_client_id: String,
}

impl AppConfig {
    /// Read configuration from `GOALTRACK_*` environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            region: require_env("GOALTRACK_REGION")?,
            bucket: require_env("GOALTRACK_BUCKET")?,
            user_pool_id: require_env("GOALTRACK_USER_POOL_ID")?,
            user_pool_client_id: require_env("GOALTRACK_USER_POOL_CLIENT_ID")?,
        })
    }
}

fn require_env(name: &str) -> Result<String, AppError> {
    std::env::var(name).map_err(|_| AppError::Config(format!("missing environment variable {name}")))
}
