use crate::models::{Candidate, MatchPreferences};

/// Check whether a candidate belongs to the pool scored for `requester_id`
///
/// This is the authoritative pool filter: storage may pre-filter, but every
/// candidate goes through here before scoring.
#[inline]
pub fn is_eligible_candidate(
    candidate: &Candidate,
    requester_id: i64,
    preferences: &MatchPreferences,
) -> bool {
    // Never match the requester with themselves
    if candidate.user_id == requester_id {
        return false;
    }

    if !candidate.is_active {
        return false;
    }

    // Profiles with no skills cannot be compared
    if !candidate.profile.has_skills() {
        return false;
    }

    if let Some(level) = preferences.experience_filter() {
        if candidate.profile.experience_level != level {
            return false;
        }
    }

    if let Some(location) = preferences.location_filter() {
        if !matches_location(candidate.profile.location.as_deref(), location) {
            return false;
        }
    }

    true
}

/// Case-insensitive substring match; a missing location never matches
#[inline]
pub fn matches_location(location: Option<&str>, wanted: &str) -> bool {
    match location {
        Some(location) => location.to_lowercase().contains(&wanted.to_lowercase()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Profile;

    fn create_candidate(user_id: i64, skills: &[&str], level: &str, location: Option<&str>) -> Candidate {
        let mut profile = Profile::new(user_id);
        profile.skills = Some(skills.iter().map(|s| s.to_string()).collect());
        profile.experience_level = level.to_string();
        profile.location = location.map(str::to_string);

        Candidate {
            user_id,
            username: format!("user{}", user_id),
            full_name: None,
            is_active: true,
            profile,
        }
    }

    #[test]
    fn test_requester_excluded() {
        let candidate = create_candidate(1, &["Rust"], "beginner", None);
        assert!(!is_eligible_candidate(&candidate, 1, &MatchPreferences::default()));
        assert!(is_eligible_candidate(&candidate, 2, &MatchPreferences::default()));
    }

    #[test]
    fn test_inactive_user_filtered() {
        let mut candidate = create_candidate(2, &["Rust"], "beginner", None);
        candidate.is_active = false;
        assert!(!is_eligible_candidate(&candidate, 1, &MatchPreferences::default()));
    }

    #[test]
    fn test_empty_or_missing_skills_filtered() {
        let empty = create_candidate(2, &[], "beginner", None);
        assert!(!is_eligible_candidate(&empty, 1, &MatchPreferences::default()));

        let mut missing = create_candidate(3, &[], "beginner", None);
        missing.profile.skills = None;
        assert!(!is_eligible_candidate(&missing, 1, &MatchPreferences::default()));
    }

    #[test]
    fn test_experience_filter_is_exact() {
        let candidate = create_candidate(2, &["Rust"], "intermediate", None);
        let mut preferences = MatchPreferences {
            experience_level: Some("intermediate".to_string()),
            ..Default::default()
        };
        assert!(is_eligible_candidate(&candidate, 1, &preferences));

        preferences.experience_level = Some("Intermediate".to_string());
        assert!(!is_eligible_candidate(&candidate, 1, &preferences));
    }

    #[test]
    fn test_location_filter_case_insensitive_substring() {
        let candidate = create_candidate(2, &["Rust"], "beginner", Some("San Francisco, CA"));
        let preferences = MatchPreferences {
            location_preference: Some("francisco".to_string()),
            ..Default::default()
        };
        assert!(is_eligible_candidate(&candidate, 1, &preferences));

        let elsewhere = MatchPreferences {
            location_preference: Some("Berlin".to_string()),
            ..Default::default()
        };
        assert!(!is_eligible_candidate(&candidate, 1, &elsewhere));
    }

    #[test]
    fn test_location_filter_excludes_missing_location() {
        assert!(!matches_location(None, "Berlin"));
        assert!(matches_location(Some("BERLIN"), "berlin"));
    }
}
