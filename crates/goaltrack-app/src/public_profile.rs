//! The public read-only profile page, keyed by username.

use jiff::Timestamp;
use serde::Serialize;

use goaltrack_core::aggregate::{self, GoalSummary};
use goaltrack_core::{clock, validate};
use goaltrack_core::models::Goal;
use goaltrack_store::error::StoreError;
use goaltrack_store::{goals, profiles};

use crate::error::AppError;
use crate::state::AppState;

/// What the public page shows: no email, no profile id beyond what the
/// goals themselves carry.
#[derive(Debug, Clone, Serialize)]
pub struct PublicProfileView {
    pub username: String,
    pub year: i16,
    pub goals: Vec<Goal>,
    pub summary: GoalSummary,
}

/// Case-insensitive lookup; an unknown username is a not-found outcome.
///
/// Uses the same year filter and the same `summarize` as the dashboard, so
/// the public numbers always match the owner's.
pub async fn public_profile(state: &AppState, username: &str) -> Result<PublicProfileView, AppError> {
    let bucket = &state.config.bucket;
    let folded = validate::fold_username(username);

    let profile = match profiles::find_profile_by_username(&state.s3, bucket, &folded).await {
        Ok(profile) => profile,
        Err(StoreError::NotFound { .. }) => {
            return Err(AppError::NotFound(format!("no profile named {folded}")));
        }
        Err(e) => return Err(e.into()),
    };

    let year = clock::current_year(Timestamp::now());
    let goals = goals::list_goals(&state.s3, bucket, profile.id, year).await?;
    let summary = aggregate::summarize(&goals);

    Ok(PublicProfileView {
        username: profile.username,
        year,
        goals,
        summary,
    })
}
