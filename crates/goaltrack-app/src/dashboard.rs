//! The owner's private dashboard read.

use jiff::Timestamp;
use serde::Serialize;

use goaltrack_core::aggregate::{self, GoalSummary};
use goaltrack_core::clock;
use goaltrack_core::models::{Goal, Profile};
use goaltrack_store::error::StoreError;
use goaltrack_store::{goals, profiles};

use crate::error::AppError;
use crate::session::Session;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub profile: Profile,
    pub year: i16,
    /// Current-year goals, newest first.
    pub goals: Vec<Goal>,
    pub summary: GoalSummary,
}

/// Load the signed-in user's profile, current-year goals, and summary.
pub async fn dashboard(state: &AppState, session: &Session) -> Result<DashboardView, AppError> {
    let bucket = &state.config.bucket;

    let profile = match profiles::get_profile(&state.s3, bucket, session.user_id).await {
        Ok(profile) => profile,
        // An identity without a profile: the sign-up gap documented in
        // account::sign_up.
        Err(StoreError::NotFound { .. }) => {
            return Err(AppError::NotFound("profile for signed-in user".to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    let year = clock::current_year(Timestamp::now());
    let goals = goals::list_goals(&state.s3, bucket, session.user_id, year).await?;
    let summary = aggregate::summarize(&goals);

    Ok(DashboardView {
        profile,
        year,
        goals,
        summary,
    })
}
