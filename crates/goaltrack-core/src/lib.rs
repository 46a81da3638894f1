//! goaltrack-core
//!
//! Pure domain types, the goal state machine, aggregation, the year-progress
//! clock, and record key conventions. No AWS SDK dependency — this is the
//! shared vocabulary of the goaltrack system.

pub mod aggregate;
pub mod clock;
pub mod error;
pub mod keys;
pub mod models;
pub mod validate;
