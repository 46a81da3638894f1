pub mod goal;
pub mod profile;

pub use goal::{Goal, GoalKind, GoalRecord, GoalState};
pub use profile::Profile;
