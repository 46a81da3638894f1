//! goaltrack-app
//!
//! The service layer behind every route: session context, account flows,
//! dashboard and public-profile reads, and goal mutations. A presentation
//! layer sits on top of this crate; nothing here renders anything.

pub mod account;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod goals;
pub mod public_profile;
pub mod session;
pub mod state;
