use serde::{Deserialize, Serialize};

/// Ordinal used for unknown or missing experience levels
pub const DEFAULT_EXPERIENCE_ORDINAL: u8 = 1;

/// Experience levels a profile can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 3] = [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Advanced,
    ];

    /// Parse a stored level. Matching is exact, as levels are stored lowercase.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "beginner" => Some(ExperienceLevel::Beginner),
            "intermediate" => Some(ExperienceLevel::Intermediate),
            "advanced" => Some(ExperienceLevel::Advanced),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Advanced => "advanced",
        }
    }

    pub fn ordinal(&self) -> u8 {
        match self {
            ExperienceLevel::Beginner => 1,
            ExperienceLevel::Intermediate => 2,
            ExperienceLevel::Advanced => 3,
        }
    }
}

/// Ordinal for a stored level string, falling back to beginner
#[inline]
pub fn experience_ordinal(value: &str) -> u8 {
    ExperienceLevel::parse(value)
        .map(|level| level.ordinal())
        .unwrap_or(DEFAULT_EXPERIENCE_ORDINAL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_levels() {
        for level in ExperienceLevel::ALL {
            assert_eq!(ExperienceLevel::parse(level.as_str()), Some(level));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(ExperienceLevel::parse("Advanced"), None);
        assert_eq!(ExperienceLevel::parse("expert"), None);
    }

    #[test]
    fn test_unknown_levels_default_to_beginner_ordinal() {
        assert_eq!(experience_ordinal("intermediate"), 2);
        assert_eq!(experience_ordinal("advanced"), 3);
        assert_eq!(experience_ordinal("expert"), 1);
        assert_eq!(experience_ordinal(""), 1);
    }
}
