use serde::{Deserialize, Serialize};
use crate::models::domain::{MatchPreferences, SkillFrequency, UserMatch};

/// Response for the matchmaking endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub matches: Vec<UserMatch>,
    pub total_matches: usize,
    pub preferences_used: MatchPreferences,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Popular skills across the platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillRecommendationsResponse {
    pub skills: Vec<String>,
    pub frequencies: Vec<SkillFrequency>,
}

impl From<Vec<SkillFrequency>> for SkillRecommendationsResponse {
    fn from(frequencies: Vec<SkillFrequency>) -> Self {
        Self {
            skills: frequencies.iter().map(|f| f.skill.clone()).collect(),
            frequencies,
        }
    }
}
