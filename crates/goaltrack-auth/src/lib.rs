//! goaltrack-auth
//!
//! Cognito identity-provider integration: sign-up with a username
//! attribute, credential authentication, sign-out, and current-user lookup.

pub mod client;
pub mod error;
pub mod flows;
pub mod jwt;
