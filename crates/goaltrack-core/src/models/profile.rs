use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// A user's public identity, created atomically with the identity-provider
/// account at sign-up. The username is canonical (case-folded) and never
/// changes; there is no rename or account-deletion flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Profile {
    /// Assigned by the identity provider (the Cognito `sub`).
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}
