use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Default experience level for freshly created profiles
pub const DEFAULT_EXPERIENCE_LEVEL: &str = "beginner";

/// Default availability for freshly created profiles
pub const DEFAULT_AVAILABILITY: &str = "weekends";

/// Default team size used by profiles and preferences
pub const DEFAULT_TEAM_SIZE: i32 = 4;

/// Registered platform user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool { true }

/// Hackathon-facing user profile
///
/// `skills` is `None` when the column was never written, which is distinct
/// from an empty list. The scorer refuses to run for a requester whose
/// skills are `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub portfolio_url: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default = "default_experience_level")]
    pub experience_level: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub preferred_roles: Vec<String>,
    #[serde(default = "default_availability")]
    pub availability: String,
    #[serde(default)]
    pub team_size_preference: Option<i32>,
    #[serde(default, skip_serializing)]
    pub resume_text: Option<String>,
    #[serde(default)]
    pub profile_score: f64,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

fn default_experience_level() -> String { DEFAULT_EXPERIENCE_LEVEL.to_string() }
fn default_availability() -> String { DEFAULT_AVAILABILITY.to_string() }

impl Profile {
    /// An empty profile as created on first access
    pub fn new(user_id: i64) -> Self {
        Self {
            id: 0,
            user_id,
            bio: None,
            location: None,
            github_url: None,
            linkedin_url: None,
            portfolio_url: None,
            skills: Some(Vec::new()),
            experience_level: default_experience_level(),
            interests: Vec::new(),
            preferred_roles: Vec::new(),
            availability: default_availability(),
            team_size_preference: Some(DEFAULT_TEAM_SIZE),
            resume_text: None,
            profile_score: 0.0,
            created_at: None,
            updated_at: None,
        }
    }

    /// Skills as a set of borrowed strings; absent skills yield an empty set
    pub fn skill_set(&self) -> HashSet<&str> {
        self.skills
            .iter()
            .flatten()
            .map(String::as_str)
            .collect()
    }

    /// True when at least one skill is recorded
    pub fn has_skills(&self) -> bool {
        self.skills.as_ref().is_some_and(|skills| !skills.is_empty())
    }
}

/// A user from the candidate pool together with their profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub user_id: i64,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub profile: Profile,
}

/// Request-scoped matchmaking preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchPreferences {
    #[serde(default)]
    pub hackathon_id: Option<i64>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    #[serde(default)]
    pub experience_level: Option<String>,
    #[serde(default)]
    pub location_preference: Option<String>,
    #[serde(default = "default_team_size")]
    pub team_size: i32,
}

fn default_team_size() -> i32 { DEFAULT_TEAM_SIZE }

impl Default for MatchPreferences {
    fn default() -> Self {
        Self {
            hackathon_id: None,
            preferred_skills: Vec::new(),
            experience_level: None,
            location_preference: None,
            team_size: DEFAULT_TEAM_SIZE,
        }
    }
}

impl MatchPreferences {
    /// Experience level filter, ignoring blank values
    pub fn experience_filter(&self) -> Option<&str> {
        self.experience_level.as_deref().filter(|level| !level.is_empty())
    }

    /// Location substring filter, ignoring blank values
    pub fn location_filter(&self) -> Option<&str> {
        self.location_preference.as_deref().filter(|location| !location.is_empty())
    }

    pub fn preferred_skill_set(&self) -> HashSet<&str> {
        self.preferred_skills.iter().map(String::as_str).collect()
    }

    /// Preferences for a quick match, derived from the requester's own profile
    ///
    /// The first `skill_count` skills become preferred skills and the search
    /// is restricted to the requester's experience level.
    pub fn from_profile(profile: &Profile, skill_count: usize) -> Self {
        Self {
            hackathon_id: None,
            preferred_skills: profile
                .skills
                .iter()
                .flatten()
                .take(skill_count)
                .cloned()
                .collect(),
            experience_level: Some(profile.experience_level.clone()),
            location_preference: None,
            team_size: profile.team_size_preference.unwrap_or(DEFAULT_TEAM_SIZE),
        }
    }

    /// Preferences for teammates suited to a hackathon
    ///
    /// Preferred skills are the requester's skills followed by the hackathon
    /// themes, without duplicates.
    pub fn for_hackathon(profile: &Profile, hackathon: &Hackathon) -> Self {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut preferred_skills = Vec::new();
        for skill in profile.skills.iter().flatten().chain(hackathon.themes.iter()) {
            if seen.insert(skill.as_str()) {
                preferred_skills.push(skill.clone());
            }
        }

        Self {
            hackathon_id: Some(hackathon.id),
            preferred_skills,
            experience_level: Some(profile.experience_level.clone()),
            location_preference: None,
            team_size: hackathon.max_team_size,
        }
    }
}

/// Scored teammate suggestion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserMatch {
    pub user_id: i64,
    pub username: String,
    pub full_name: Option<String>,
    pub skills: Vec<String>,
    pub experience_level: String,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub github_url: Option<String>,
    pub compatibility_score: f64,
    pub matching_skills: Vec<String>,
    pub profile_score: f64,
}

/// Hackathon listing, read only in this service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hackathon {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub themes: Vec<String>,
    #[serde(default = "default_team_size")]
    pub max_team_size: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// Frequency of one skill across all profiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillFrequency {
    pub skill: String,
    pub count: u64,
}
