// Service exports
pub mod auth;
pub mod cache;
pub mod postgres;

pub use auth::{AuthError, AuthUser, Claims, JwtValidator};
pub use cache::{CacheManager, CacheKey, CacheError};
pub use postgres::{PostgresClient, PostgresError};
