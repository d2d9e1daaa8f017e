use std::cmp::Ordering;
use std::collections::HashSet;
use thiserror::Error;
use crate::models::{Candidate, MatchPreferences, Profile, UserMatch};
use crate::core::{
    filters::is_eligible_candidate,
    scoring::{calculate_breakdown, to_compatibility_score, ScoringWeights, INCLUSION_THRESHOLD},
};

/// Number of matches returned when the caller does not ask for a limit
pub const DEFAULT_MATCH_LIMIT: usize = 10;

/// Errors raised by the matching pipeline
#[derive(Debug, Error, PartialEq)]
pub enum MatchError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<UserMatch>,
    pub total_candidates: usize,
    pub eligible_candidates: usize,
}

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Candidate pool filter
/// 2. Compatibility scoring
/// 3. Threshold cut, ranking and truncation
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new() -> Self {
        Self {
            weights: ScoringWeights::COMPATIBILITY,
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Rank candidate teammates for `requester`
    ///
    /// # Arguments
    /// * `requester` - Profile of the user asking for teammates
    /// * `preferences` - Request-scoped preferences
    /// * `candidates` - Candidate pool as read from storage
    /// * `limit` - Maximum number of matches to return
    ///
    /// # Errors
    /// `MatchError::InvalidInput` when the requester has no skill list at all.
    /// An empty skill list is valid and simply contributes nothing.
    pub fn find_matches(
        &self,
        requester: &Profile,
        preferences: &MatchPreferences,
        candidates: Vec<Candidate>,
        limit: usize,
    ) -> Result<MatchResult, MatchError> {
        let current_skills: HashSet<&str> = requester
            .skills
            .as_ref()
            .ok_or_else(|| {
                MatchError::InvalidInput(format!(
                    "skills are missing for user {}",
                    requester.user_id
                ))
            })?
            .iter()
            .map(String::as_str)
            .collect();
        let preferred_skills = preferences.preferred_skill_set();

        let total_candidates = candidates.len();
        let mut eligible_candidates = 0;

        let mut matches: Vec<UserMatch> = candidates
            .into_iter()
            // Stage 1: pool filter
            .filter(|candidate| is_eligible_candidate(candidate, requester.user_id, preferences))
            .inspect(|_| eligible_candidates += 1)
            // Stage 2 & 3: score and apply the threshold on the raw sum
            .filter_map(|candidate| {
                let breakdown = calculate_breakdown(
                    &current_skills,
                    &requester.experience_level,
                    &preferred_skills,
                    &candidate.profile,
                );
                let raw_score = breakdown.weighted_sum(&self.weights);

                if raw_score <= INCLUSION_THRESHOLD {
                    return None;
                }

                let mut matching_skills: Vec<String> = candidate
                    .profile
                    .skill_set()
                    .intersection(&current_skills)
                    .map(|skill| skill.to_string())
                    .collect();
                matching_skills.sort();

                let profile = candidate.profile;
                Some(UserMatch {
                    user_id: candidate.user_id,
                    username: candidate.username,
                    full_name: candidate.full_name,
                    skills: profile.skills.unwrap_or_default(),
                    experience_level: profile.experience_level,
                    location: profile.location,
                    bio: profile.bio,
                    github_url: profile.github_url,
                    compatibility_score: to_compatibility_score(raw_score),
                    matching_skills,
                    profile_score: profile.profile_score,
                })
            })
            .collect();

        // Sort by score (descending); equal scores fall back to user id so
        // repeated requests return the same order
        matches.sort_by(|a, b| {
            b.compatibility_score
                .partial_cmp(&a.compatibility_score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.user_id.cmp(&b.user_id))
        });

        matches.truncate(limit);

        Ok(MatchResult {
            matches,
            total_candidates,
            eligible_candidates,
        })
    }
}
