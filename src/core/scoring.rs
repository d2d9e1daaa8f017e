use std::collections::HashSet;
use crate::core::experience::experience_ordinal;
use crate::models::Profile;

/// Candidates must beat this weighted sum (on the 0-1 scale) to be returned
pub const INCLUSION_THRESHOLD: f64 = 0.1;

/// Fixed weights of the compatibility formula
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub skills: f64,
    pub preferred_skills: f64,
    pub experience: f64,
    pub completeness: f64,
}

impl ScoringWeights {
    pub const COMPATIBILITY: ScoringWeights = ScoringWeights {
        skills: 0.40,
        preferred_skills: 0.30,
        experience: 0.20,
        completeness: 0.10,
    };

    pub fn sum(&self) -> f64 {
        self.skills + self.preferred_skills + self.experience + self.completeness
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::COMPATIBILITY
    }
}

/// The four sub-scores of one candidate, each in 0-1
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub skills: f64,
    pub preferred_skills: f64,
    pub experience: f64,
    pub completeness: f64,
}

impl ScoreBreakdown {
    /// Unrounded weighted sum on the 0-1 scale
    pub fn weighted_sum(&self, weights: &ScoringWeights) -> f64 {
        self.skills * weights.skills
            + self.preferred_skills * weights.preferred_skills
            + self.experience * weights.experience
            + self.completeness * weights.completeness
    }
}

/// Score a candidate profile against the requester
///
/// Scoring formula:
/// score = (
///     skill_overlap * 0.40 +       # shared skills, normalised by the larger set
///     preferred_overlap * 0.30 +   # share of preferred skills the candidate has
///     experience * 0.20 +          # closeness of experience levels
///     completeness * 0.10          # candidate profile completeness
/// )
pub fn calculate_breakdown(
    current_skills: &HashSet<&str>,
    current_experience: &str,
    preferred_skills: &HashSet<&str>,
    candidate: &Profile,
) -> ScoreBreakdown {
    let candidate_skills = candidate.skill_set();

    ScoreBreakdown {
        skills: skill_overlap_score(current_skills, &candidate_skills),
        preferred_skills: preferred_skill_score(preferred_skills, &candidate_skills),
        experience: experience_proximity_score(current_experience, &candidate.experience_level),
        completeness: completeness_score(candidate.profile_score),
    }
}

/// |C ∩ U| / max(|C|, |U|), or 0 when the requester has no skills
#[inline]
pub fn skill_overlap_score(current: &HashSet<&str>, candidate: &HashSet<&str>) -> f64 {
    if current.is_empty() {
        return 0.0;
    }

    let overlap = current.intersection(candidate).count();
    overlap as f64 / current.len().max(candidate.len()) as f64
}

/// |P ∩ U| / |P|, or 0 when no skills are preferred
#[inline]
pub fn preferred_skill_score(preferred: &HashSet<&str>, candidate: &HashSet<&str>) -> f64 {
    if preferred.is_empty() {
        return 0.0;
    }

    let overlap = preferred.intersection(candidate).count();
    overlap as f64 / preferred.len() as f64
}

/// 1.0 for equal levels, 0.5 one level apart, 0.0 for beginner vs advanced
#[inline]
pub fn experience_proximity_score(current: &str, candidate: &str) -> f64 {
    let current = experience_ordinal(current) as f64;
    let candidate = experience_ordinal(candidate) as f64;

    1.0 - (current - candidate).abs() / 2.0
}

/// Stored 0-100 completeness mapped to 0-1
#[inline]
pub fn completeness_score(profile_score: f64) -> f64 {
    if !profile_score.is_finite() {
        return 0.0;
    }

    profile_score.clamp(0.0, 100.0) / 100.0
}

/// Scale a weighted sum to 0-100 with two-decimal rounding
#[inline]
pub fn to_compatibility_score(weighted_sum: f64) -> f64 {
    let scaled = (weighted_sum * 100.0).clamp(0.0, 100.0);
    (scaled * 100.0).round() / 100.0
}
