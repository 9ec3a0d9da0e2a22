//! Authentication adapters: Argon2 password hashing and JWT tokens.

mod jwt;
mod password;

pub use jwt::{JwtConfig, JwtTokenService};
pub use password::Argon2PasswordService;
