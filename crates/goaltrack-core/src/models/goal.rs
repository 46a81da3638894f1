use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::validate;

/// The two kinds of goal a user can create. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum GoalKind {
    OneTime,
    Progress,
}

/// Goal state, tagged by kind. A one-time goal is binary; a progress goal
/// carries a 0–100 percentage with completion derived from it. Keeping the
/// tag on the state makes the inconsistent combinations of `progress` and
/// `is_completed` unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalState {
    OneTime { is_completed: bool },
    Progress { progress: u8 },
}

/// A yearly goal owned by exactly one profile.
///
/// Serializes as the flat [`GoalRecord`] row; deserialization rejects
/// records whose stored `progress`/`is_completed` pair disagrees with the
/// goal's kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "GoalRecord", try_from = "GoalRecord")]
pub struct Goal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    /// The applicable calendar year, fixed at creation.
    pub year: i16,
    pub state: GoalState,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl Goal {
    /// Create a goal in its initial state: zero progress, not completed.
    pub fn new(
        user_id: Uuid,
        title: &str,
        kind: GoalKind,
        year: i16,
        now: jiff::Timestamp,
    ) -> Result<Self, ValidationError> {
        validate::title(title)?;
        let state = match kind {
            GoalKind::OneTime => GoalState::OneTime {
                is_completed: false,
            },
            GoalKind::Progress => GoalState::Progress { progress: 0 },
        };
        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            title: title.trim().to_string(),
            year,
            state,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn kind(&self) -> GoalKind {
        match self.state {
            GoalState::OneTime { .. } => GoalKind::OneTime,
            GoalState::Progress { .. } => GoalKind::Progress,
        }
    }

    /// Completion percentage in `[0, 100]`. For one-time goals this is
    /// exactly 0 or 100.
    pub fn progress(&self) -> u8 {
        match self.state {
            GoalState::OneTime { is_completed } => {
                if is_completed {
                    100
                } else {
                    0
                }
            }
            GoalState::Progress { progress } => progress,
        }
    }

    pub fn is_completed(&self) -> bool {
        match self.state {
            GoalState::OneTime { is_completed } => is_completed,
            GoalState::Progress { progress } => progress >= 100,
        }
    }

    /// Flip a one-time goal between complete and incomplete. Progress goals
    /// have no direct completion toggle; completion is derived from the
    /// percentage alone.
    pub fn toggle(&mut self, now: jiff::Timestamp) -> Result<(), ValidationError> {
        match &mut self.state {
            GoalState::OneTime { is_completed } => {
                *is_completed = !*is_completed;
                self.updated_at = now;
                Ok(())
            }
            GoalState::Progress { .. } => Err(ValidationError::NotAOneTimeGoal),
        }
    }

    /// Set a progress goal's percentage. Out-of-range values are rejected,
    /// not clamped, so caller bugs surface early. Completion is recomputed
    /// as `progress >= 100`.
    pub fn set_progress(
        &mut self,
        progress: i64,
        now: jiff::Timestamp,
    ) -> Result<(), ValidationError> {
        match &mut self.state {
            GoalState::Progress { progress: current } => {
                let value = u8::try_from(progress)
                    .ok()
                    .filter(|v| *v <= 100)
                    .ok_or(ValidationError::ProgressOutOfRange(progress))?;
                *current = value;
                self.updated_at = now;
                Ok(())
            }
            GoalState::OneTime { .. } => Err(ValidationError::NotAProgressGoal),
        }
    }
}

/// The flat row shape stored in the record store and served to the
/// frontend: a `goal_type` column plus explicit `progress` and
/// `is_completed` columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GoalRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub goal_type: GoalKind,
    pub progress: u8,
    pub is_completed: bool,
    pub year: i16,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

impl From<Goal> for GoalRecord {
    fn from(goal: Goal) -> Self {
        Self {
            goal_type: goal.kind(),
            progress: goal.progress(),
            is_completed: goal.is_completed(),
            id: goal.id,
            user_id: goal.user_id,
            title: goal.title,
            year: goal.year,
            created_at: goal.created_at,
            updated_at: goal.updated_at,
        }
    }
}

impl TryFrom<GoalRecord> for Goal {
    type Error = ValidationError;

    fn try_from(record: GoalRecord) -> Result<Self, Self::Error> {
        let state = match record.goal_type {
            GoalKind::OneTime => match (record.progress, record.is_completed) {
                (0, false) => GoalState::OneTime {
                    is_completed: false,
                },
                (100, true) => GoalState::OneTime { is_completed: true },
                (progress, is_completed) => {
                    return Err(ValidationError::InconsistentRecord(format!(
                        "one_time goal with progress={progress}, is_completed={is_completed}"
                    )));
                }
            },
            GoalKind::Progress => {
                if record.progress > 100 {
                    return Err(ValidationError::InconsistentRecord(format!(
                        "progress={} out of range",
                        record.progress
                    )));
                }
                if record.is_completed != (record.progress >= 100) {
                    return Err(ValidationError::InconsistentRecord(format!(
                        "progress goal with progress={}, is_completed={}",
                        record.progress, record.is_completed
                    )));
                }
                GoalState::Progress {
                    progress: record.progress,
                }
            }
        };
        Ok(Self {
            id: record.id,
            user_id: record.user_id,
            title: record.title,
            year: record.year,
            state,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}
