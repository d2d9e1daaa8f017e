// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{User, Profile, Candidate, MatchPreferences, UserMatch, Hackathon, SkillFrequency};
pub use requests::{FindMatchesRequest, LimitQuery, UpdateProfileRequest};
pub use responses::{MatchResponse, HealthResponse, ErrorResponse, SkillRecommendationsResponse};
