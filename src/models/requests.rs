use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{MatchPreferences, Profile, DEFAULT_TEAM_SIZE};

/// Request to find teammates
///
/// Carries the match preferences plus an optional result limit.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[serde(default)]
    pub hackathon_id: Option<i64>,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub preferred_skills: Vec<String>,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub experience_level: Option<String>,
    #[serde(default)]
    #[validate(length(max = 255))]
    pub location_preference: Option<String>,
    #[serde(default = "default_team_size")]
    #[validate(range(min = 1, max = 20))]
    pub team_size: i32,
    #[serde(default)]
    pub limit: Option<u16>,
}

fn default_team_size() -> i32 {
    DEFAULT_TEAM_SIZE
}

impl FindMatchesRequest {
    pub fn preferences(&self) -> MatchPreferences {
        MatchPreferences {
            hackathon_id: self.hackathon_id,
            preferred_skills: self.preferred_skills.clone(),
            experience_level: self.experience_level.clone(),
            location_preference: self.location_preference.clone(),
            team_size: self.team_size,
        }
    }
}

/// `?limit=` query parameter shared by the GET matchmaking routes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LimitQuery {
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Partial profile update; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 2000))]
    pub bio: Option<String>,
    #[validate(length(max = 255))]
    pub location: Option<String>,
    #[validate(length(max = 255))]
    pub github_url: Option<String>,
    #[validate(length(max = 255))]
    pub linkedin_url: Option<String>,
    #[validate(length(max = 255))]
    pub portfolio_url: Option<String>,
    #[validate(length(max = 100))]
    pub skills: Option<Vec<String>>,
    pub experience_level: Option<String>,
    #[validate(length(max = 100))]
    pub interests: Option<Vec<String>>,
    #[validate(length(max = 20))]
    pub preferred_roles: Option<Vec<String>>,
    #[validate(length(max = 50))]
    pub availability: Option<String>,
    #[validate(range(min = 1, max = 20))]
    pub team_size_preference: Option<i32>,
}

impl UpdateProfileRequest {
    /// Copy every provided field onto the profile
    pub fn apply(self, profile: &mut Profile) {
        if let Some(bio) = self.bio {
            profile.bio = Some(bio);
        }
        if let Some(location) = self.location {
            profile.location = Some(location);
        }
        if let Some(github_url) = self.github_url {
            profile.github_url = Some(github_url);
        }
        if let Some(linkedin_url) = self.linkedin_url {
            profile.linkedin_url = Some(linkedin_url);
        }
        if let Some(portfolio_url) = self.portfolio_url {
            profile.portfolio_url = Some(portfolio_url);
        }
        if let Some(skills) = self.skills {
            profile.skills = Some(skills);
        }
        if let Some(experience_level) = self.experience_level {
            profile.experience_level = experience_level;
        }
        if let Some(interests) = self.interests {
            profile.interests = interests;
        }
        if let Some(preferred_roles) = self.preferred_roles {
            profile.preferred_roles = preferred_roles;
        }
        if let Some(availability) = self.availability {
            profile.availability = availability;
        }
        if let Some(team_size) = self.team_size_preference {
            profile.team_size_preference = Some(team_size);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_request_defaults() {
        let req: FindMatchesRequest = serde_json::from_str(r#"{"preferred_skills": ["Rust"]}"#).unwrap();
        assert_eq!(req.team_size, 4);
        assert_eq!(req.limit, None);
        assert!(req.validate().is_ok());

        let preferences = req.preferences();
        assert_eq!(preferences.preferred_skills, vec!["Rust"]);
        assert_eq!(preferences.experience_level, None);
    }

    #[test]
    fn test_find_request_rejects_bad_team_size() {
        let req: FindMatchesRequest = serde_json::from_str(r#"{"team_size": 0}"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_only_touches_provided_fields() {
        let mut profile = Profile::new(3);
        profile.bio = Some("existing".to_string());

        let update = UpdateProfileRequest {
            skills: Some(vec!["Python".to_string()]),
            experience_level: Some("advanced".to_string()),
            ..Default::default()
        };
        update.apply(&mut profile);

        assert_eq!(profile.bio.as_deref(), Some("existing"));
        assert_eq!(profile.skills, Some(vec!["Python".to_string()]));
        assert_eq!(profile.experience_level, "advanced");
        assert_eq!(profile.availability, "weekends");
    }

    #[test]
    fn test_update_validation_limits() {
        let update = UpdateProfileRequest {
            team_size_preference: Some(50),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }
}
