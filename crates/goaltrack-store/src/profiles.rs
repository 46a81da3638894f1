//! The `profiles` collection and its username index.

use aws_sdk_s3::Client;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use goaltrack_core::keys;
use goaltrack_core::models::Profile;

use crate::error::StoreError;
use crate::records;

/// Payload of a `usernames/{username}.json` index object.
#[derive(Debug, Serialize, Deserialize)]
pub struct UsernameIndex {
    pub user_id: Uuid,
}

/// Whether a username (any casing) is already claimed.
pub async fn username_taken(
    client: &Client,
    bucket: &str,
    username: &str,
) -> Result<bool, StoreError> {
    match records::load_record::<UsernameIndex>(client, bucket, &keys::username_index(username))
        .await
    {
        Ok(_) => Ok(true),
        Err(StoreError::NotFound { .. }) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Create a profile, claiming its username first.
///
/// The username claim is a conditional create: if another sign-up claimed
/// the same case-folded name in the meantime, this fails with
/// `StoreError::AlreadyExists` and no profile record is written.
pub async fn create_profile(
    client: &Client,
    bucket: &str,
    profile: &Profile,
) -> Result<(), StoreError> {
    let index = UsernameIndex {
        user_id: profile.id,
    };
    records::create_record(
        client,
        bucket,
        &keys::username_index(&profile.username),
        &index,
    )
    .await?;
    records::save_record(client, bucket, &keys::profile(profile.id), profile).await?;

    info!(username = profile.username.as_str(), "profile created");
    Ok(())
}

/// Load a profile by id.
pub async fn get_profile(client: &Client, bucket: &str, id: Uuid) -> Result<Profile, StoreError> {
    records::load_record(client, bucket, &keys::profile(id)).await
}

/// Case-insensitive lookup by username, via the index object.
pub async fn find_profile_by_username(
    client: &Client,
    bucket: &str,
    username: &str,
) -> Result<Profile, StoreError> {
    let index: UsernameIndex =
        records::load_record(client, bucket, &keys::username_index(username)).await?;
    get_profile(client, bucket, index.user_id).await
}
