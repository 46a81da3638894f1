//! Summary statistics over a goal collection.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::Goal;

/// Derived statistics shown on the dashboard and the public profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GoalSummary {
    pub total: usize,
    pub completed: usize,
    /// Mean of per-goal progress, rounded half-up; 0 for an empty
    /// collection. Always in `[0, 100]`.
    pub overall_progress: u8,
}

/// Derive summary statistics from a goal collection.
///
/// Pure function of the slice. The private dashboard and the public profile
/// both call this over the same current-year filter, so the two views always
/// agree.
pub fn summarize(goals: &[Goal]) -> GoalSummary {
    let total = goals.len();
    let completed = goals.iter().filter(|g| g.is_completed()).count();
    let overall_progress = if total == 0 {
        0
    } else {
        let sum: u32 = goals.iter().map(|g| u32::from(g.progress())).sum();
        // Half-up rounding. Progress is non-negative, so `round` (half away
        // from zero) is the same rule.
        (f64::from(sum) / total as f64).round() as u8
    };
    GoalSummary {
        total,
        completed,
        overall_progress,
    }
}
