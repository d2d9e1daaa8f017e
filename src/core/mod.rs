// Core algorithm exports
pub mod completeness;
pub mod experience;
pub mod filters;
pub mod matcher;
pub mod recommendations;
pub mod scoring;

pub use completeness::calculate_profile_score;
pub use experience::{ExperienceLevel, experience_ordinal};
pub use filters::{is_eligible_candidate, matches_location};
pub use matcher::{Matcher, MatchError, MatchResult, DEFAULT_MATCH_LIMIT};
pub use recommendations::{popular_skills, RECOMMENDED_SKILLS_LIMIT};
pub use scoring::{calculate_breakdown, ScoreBreakdown, ScoringWeights, INCLUSION_THRESHOLD};
