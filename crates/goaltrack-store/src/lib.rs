//! goaltrack-store
//!
//! Record-store operations over S3 JSON objects: one record per object,
//! two collections (`profiles/`, `goals/`) plus the username index that
//! enforces case-insensitive uniqueness.

pub mod client;
pub mod error;
pub mod goals;
pub mod objects;
pub mod profiles;
pub mod records;
