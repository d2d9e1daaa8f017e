//! Hackmates Matcher - teammate matchmaking service for the Hackmates platform
//!
//! This library ranks candidate teammates for a user by weighted compatibility
//! (skill overlap, preferred skills, experience proximity and profile
//! completeness) and exposes the ranking over an HTTP API.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{calculate_profile_score, popular_skills, Matcher, MatchError, ScoringWeights};
pub use error::ApiError;
pub use models::{Candidate, FindMatchesRequest, MatchPreferences, MatchResponse, Profile, UserMatch};
