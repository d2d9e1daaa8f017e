use crate::models::domain::{Profile, DEFAULT_AVAILABILITY, DEFAULT_EXPERIENCE_LEVEL};

/// Upper bound of the completeness score
pub const MAX_PROFILE_SCORE: f64 = 100.0;

/// Calculate how complete a profile is (0-100)
///
/// Points:
/// - basic info: bio 10, location 5, GitHub 10, LinkedIn 5
/// - skills 20, non-beginner experience 10, interests 10
/// - preferred roles 10, non-default availability 5, team size 5
/// - resume 10
pub fn calculate_profile_score(profile: &Profile) -> f64 {
    let mut score = 0.0;

    if is_filled(&profile.bio) {
        score += 10.0;
    }
    if is_filled(&profile.location) {
        score += 5.0;
    }
    if is_filled(&profile.github_url) {
        score += 10.0;
    }
    if is_filled(&profile.linkedin_url) {
        score += 5.0;
    }

    if profile.has_skills() {
        score += 20.0;
    }
    if profile.experience_level != DEFAULT_EXPERIENCE_LEVEL {
        score += 10.0;
    }
    if !profile.interests.is_empty() {
        score += 10.0;
    }

    if !profile.preferred_roles.is_empty() {
        score += 10.0;
    }
    if profile.availability != DEFAULT_AVAILABILITY {
        score += 5.0;
    }
    if profile.team_size_preference.is_some_and(|size| size != 0) {
        score += 5.0;
    }

    if is_filled(&profile.resume_text) {
        score += 10.0;
    }

    f64::min(score, MAX_PROFILE_SCORE)
}

#[inline]
fn is_filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}
