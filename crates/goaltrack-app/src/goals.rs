//! Goal mutations. Every operation is scoped to the session owner's key
//! prefix, so another user's goal id simply reads as not found.

use jiff::Timestamp;
use tracing::info;
use uuid::Uuid;

use goaltrack_core::clock;
use goaltrack_core::models::{Goal, GoalKind};
use goaltrack_store::error::StoreError;
use goaltrack_store::goals as store;

use crate::error::AppError;
use crate::session::Session;
use crate::state::AppState;

/// Create a goal for the current year in its initial state.
pub async fn create_goal(
    state: &AppState,
    session: &Session,
    title: &str,
    kind: GoalKind,
) -> Result<Goal, AppError> {
    let now = Timestamp::now();
    let goal = Goal::new(session.user_id, title, kind, clock::current_year(now), now)?;
    store::save_goal(&state.s3, &state.config.bucket, &goal).await?;

    info!(goal_id = %goal.id, "goal created");
    Ok(goal)
}

/// Flip a one-time goal between complete and incomplete.
pub async fn toggle_goal(
    state: &AppState,
    session: &Session,
    goal_id: Uuid,
) -> Result<Goal, AppError> {
    let mut goal = load_owned(state, session, goal_id).await?;
    goal.toggle(Timestamp::now())?;
    store::save_goal(&state.s3, &state.config.bucket, &goal).await?;
    Ok(goal)
}

/// Set a progress goal's percentage. Out-of-range input is rejected before
/// anything is written.
pub async fn set_goal_progress(
    state: &AppState,
    session: &Session,
    goal_id: Uuid,
    progress: i64,
) -> Result<Goal, AppError> {
    let mut goal = load_owned(state, session, goal_id).await?;
    goal.set_progress(progress, Timestamp::now())?;
    // Last-write-wins: a concurrent update to the same goal may be dropped.
    store::save_goal(&state.s3, &state.config.bucket, &goal).await?;
    Ok(goal)
}

/// Delete a goal permanently.
pub async fn delete_goal(
    state: &AppState,
    session: &Session,
    goal_id: Uuid,
) -> Result<(), AppError> {
    // Load first so a bogus id surfaces as not-found rather than a silent
    // no-op delete.
    load_owned(state, session, goal_id).await?;
    store::delete_goal(&state.s3, &state.config.bucket, session.user_id, goal_id).await?;
    Ok(())
}

async fn load_owned(
    state: &AppState,
    session: &Session,
    goal_id: Uuid,
) -> Result<Goal, AppError> {
    match store::get_goal(&state.s3, &state.config.bucket, session.user_id, goal_id).await {
        Ok(goal) => Ok(goal),
        Err(StoreError::NotFound { .. }) => Err(AppError::NotFound(format!("goal {goal_id}"))),
        Err(e) => Err(e.into()),
    }
}
