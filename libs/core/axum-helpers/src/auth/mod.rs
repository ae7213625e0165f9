//! Stateless JWT authentication.

pub mod config;
pub mod jwt;
pub mod middleware;

pub use config::JwtConfig;
pub use jwt::{JwtAuth, JwtClaims, TOKEN_TTL};
pub use middleware::jwt_auth_middleware;
