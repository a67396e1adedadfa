//! Request middleware.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`rate_limit`] -- Per-client fixed-window rate limiting.

pub mod auth;
pub mod rate_limit;
