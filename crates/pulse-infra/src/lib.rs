//! # Pulse Infrastructure
//!
//! Concrete implementations of the ports defined in `pulse-core`.
//!
//! ## Feature Flags
//!
//! - `auth` (default) - JWT + Argon2 authentication

pub mod store;

#[cfg(feature = "auth")]
pub mod auth;

pub use store::InMemoryUserStore;

#[cfg(feature = "auth")]
pub use auth::{Argon2PasswordService, JwtTokenService};
