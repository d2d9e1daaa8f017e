// Route exports
pub mod health;
pub mod matchmaking;
pub mod profiles;

use actix_web::web;
use std::sync::Arc;
use crate::config::MatchingSettings;
use crate::core::Matcher;
use crate::error::ApiError;
use crate::models::{Profile, User};
use crate::services::{AuthUser, CacheManager, PostgresClient};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<CacheManager>,
    pub postgres: Arc<PostgresClient>,
    pub matcher: Matcher,
    pub limits: MatchingSettings,
}

impl AppState {
    /// Load the authenticated user and make sure they may use the service
    pub async fn active_user(&self, auth: &AuthUser) -> Result<User, ApiError> {
        let user = self
            .postgres
            .get_user(auth.user_id)
            .await?
            .ok_or_else(|| ApiError::Unauthorized("Could not validate credentials".to_string()))?;

        if !user.is_active {
            return Err(ApiError::BadRequest("Inactive user".to_string()));
        }

        Ok(user)
    }

    /// Load the requester's profile; matchmaking needs one to exist
    pub async fn require_profile(&self, user_id: i64) -> Result<Profile, ApiError> {
        self.postgres
            .get_profile(user_id)
            .await?
            .ok_or_else(|| ApiError::BadRequest("Please complete your profile first".to_string()))
    }
}

/// Resolve a requested result limit against its default and upper bound
pub fn resolve_limit(requested: Option<u16>, default: u16, max: u16) -> Result<usize, ApiError> {
    let limit = requested.unwrap_or(default);
    if limit == 0 || limit > max {
        return Err(ApiError::BadRequest(format!(
            "limit must be between 1 and {}",
            max
        )));
    }
    Ok(limit as usize)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(health::configure)
            .configure(matchmaking::configure)
            .configure(profiles::configure),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_limit_defaults() {
        assert_eq!(resolve_limit(None, 10, 100).unwrap(), 10);
        assert_eq!(resolve_limit(Some(25), 10, 100).unwrap(), 25);
    }

    #[test]
    fn test_resolve_limit_bounds() {
        assert!(resolve_limit(Some(0), 10, 100).is_err());
        assert!(resolve_limit(Some(21), 5, 20).is_err());
        assert_eq!(resolve_limit(Some(20), 5, 20).unwrap(), 20);
    }
}
