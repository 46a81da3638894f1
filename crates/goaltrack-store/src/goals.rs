//! The `goals` collection: one JSON record per goal, keyed under the
//! owner's prefix.

use aws_sdk_s3::Client;
use tracing::info;
use uuid::Uuid;

use goaltrack_core::keys;
use goaltrack_core::models::Goal;

use crate::error::StoreError;
use crate::objects;
use crate::records;

/// Store a goal record, for both insert and update. Updates are plain
/// replacement puts: concurrent writers race last-write-wins, with no
/// optimistic-concurrency token.
pub async fn save_goal(client: &Client, bucket: &str, goal: &Goal) -> Result<(), StoreError> {
    records::save_record(client, bucket, &keys::goal(goal.user_id, goal.id), goal).await
}

/// Load one goal. A goal id under another user's prefix reads as not found,
/// which is what keeps mutations owner-only.
pub async fn get_goal(
    client: &Client,
    bucket: &str,
    user_id: Uuid,
    goal_id: Uuid,
) -> Result<Goal, StoreError> {
    records::load_record(client, bucket, &keys::goal(user_id, goal_id)).await
}

/// List a user's goals for one year, newest first.
pub async fn list_goals(
    client: &Client,
    bucket: &str,
    user_id: Uuid,
    year: i16,
) -> Result<Vec<Goal>, StoreError> {
    let goal_keys = objects::list_objects(client, bucket, &keys::goals_prefix(user_id)).await?;

    let mut goals = Vec::with_capacity(goal_keys.len());
    for key in &goal_keys {
        let goal: Goal = records::load_record(client, bucket, key).await?;
        if goal.year == year {
            goals.push(goal);
        }
    }
    goals.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    Ok(goals)
}

/// Delete a goal permanently. Terminal; there is no undo.
pub async fn delete_goal(
    client: &Client,
    bucket: &str,
    user_id: Uuid,
    goal_id: Uuid,
) -> Result<(), StoreError> {
    objects::delete_object(client, bucket, &keys::goal(user_id, goal_id)).await?;
    info!(goal_id = %goal_id, "goal deleted");
    Ok(())
}
