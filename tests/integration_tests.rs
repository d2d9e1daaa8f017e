// Integration tests for Hackmates Matcher

use hackmates_matcher::core::{Matcher, DEFAULT_MATCH_LIMIT};
use hackmates_matcher::models::{Candidate, Hackathon, MatchPreferences, Profile};

const SKILLS: &[&str] = &[
    "Python", "React", "Node", "Rust", "Go", "Figma", "SQL", "Docker", "AI/ML", "Solidity",
];
const LEVELS: &[&str] = &["beginner", "intermediate", "advanced"];
const CITIES: &[&str] = &["Berlin", "Munich", "Lisbon", "Remote"];

fn create_requester(skills: &[&str], level: &str) -> Profile {
    let mut profile = Profile::new(0);
    profile.skills = Some(skills.iter().map(|s| s.to_string()).collect());
    profile.experience_level = level.to_string();
    profile
}

/// Deterministic mixed pool: varied skills, levels, cities and completeness
fn create_pool(size: usize) -> Vec<Candidate> {
    (1..=size)
        .map(|i| {
            let mut profile = Profile::new(i as i64);
            let skill_count = if i % 9 == 0 { 0 } else { 1 + i % 3 };
            profile.skills = Some(
                (0..skill_count)
                    .map(|k| SKILLS[(i * 7 + k * 3) % SKILLS.len()].to_string())
                    .collect(),
            );
            profile.experience_level = LEVELS[i % LEVELS.len()].to_string();
            profile.location = Some(CITIES[i % CITIES.len()].to_string());
            profile.profile_score = ((i * 13) % 101) as f64;

            Candidate {
                user_id: i as i64,
                username: format!("hacker{}", i),
                full_name: Some(format!("Hacker {}", i)),
                is_active: i % 11 != 0,
                profile,
            }
        })
        .collect()
}

#[test]
fn test_end_to_end_matching_properties() {
    let requester = create_requester(&["Python", "React", "SQL"], "intermediate");
    let preferences = MatchPreferences {
        preferred_skills: vec!["Figma".into(), "Rust".into()],
        ..Default::default()
    };
    let pool = create_pool(300);
    let pool_ids: Vec<i64> = pool.iter().map(|c| c.user_id).collect();

    let result = Matcher::new()
        .find_matches(&requester, &preferences, pool, 50)
        .unwrap();

    assert!(!result.matches.is_empty());
    assert!(result.matches.len() <= 50);
    assert_eq!(result.total_candidates, 300);
    assert!(result.eligible_candidates < 300);

    for m in &result.matches {
        assert!(pool_ids.contains(&m.user_id));
        assert!((0.0..=100.0).contains(&m.compatibility_score));
        assert!(m.compatibility_score > 10.0);
        assert!(!m.skills.is_empty());
        for skill in &m.matching_skills {
            assert!(m.skills.contains(skill));
            assert!(requester.skills.as_ref().unwrap().contains(skill));
        }
    }

    for pair in result.matches.windows(2) {
        assert!(pair[0].compatibility_score >= pair[1].compatibility_score);
    }
}

#[test]
fn test_inactive_and_requester_never_returned() {
    let mut pool = create_pool(120);
    // Requester also appears in the pool
    let mut own = pool[0].clone();
    own.user_id = 0;
    own.profile.user_id = 0;
    pool.push(own);

    let requester = create_requester(&["Python", "Go"], "advanced");
    let result = Matcher::new()
        .find_matches(&requester, &MatchPreferences::default(), pool, 200)
        .unwrap();

    for m in &result.matches {
        assert_ne!(m.user_id, 0);
        assert_ne!(m.user_id % 11, 0);
    }
}

#[test]
fn test_filters_restrict_pool() {
    let requester = create_requester(&["Python"], "intermediate");
    let preferences = MatchPreferences {
        experience_level: Some("advanced".into()),
        location_preference: Some("ber".into()),
        ..Default::default()
    };

    let result = Matcher::new()
        .find_matches(&requester, &preferences, create_pool(200), 200)
        .unwrap();

    assert!(!result.matches.is_empty());
    for m in &result.matches {
        assert_eq!(m.experience_level, "advanced");
        assert_eq!(m.location.as_deref(), Some("Berlin"));
    }
}

#[test]
fn test_default_limit_truncates() {
    let requester = create_requester(&["Python", "React"], "intermediate");
    let result = Matcher::new()
        .find_matches(&requester, &MatchPreferences::default(), create_pool(500), DEFAULT_MATCH_LIMIT)
        .unwrap();

    assert_eq!(result.matches.len(), DEFAULT_MATCH_LIMIT);
}

#[test]
fn test_repeated_runs_are_identical() {
    let requester = create_requester(&["Rust", "Docker"], "beginner");
    let matcher = Matcher::new();

    let first: Vec<(i64, f64)> = matcher
        .find_matches(&requester, &MatchPreferences::default(), create_pool(250), 30)
        .unwrap()
        .matches
        .iter()
        .map(|m| (m.user_id, m.compatibility_score))
        .collect();
    let second: Vec<(i64, f64)> = matcher
        .find_matches(&requester, &MatchPreferences::default(), create_pool(250), 30)
        .unwrap()
        .matches
        .iter()
        .map(|m| (m.user_id, m.compatibility_score))
        .collect();

    assert_eq!(first, second);
}

#[test]
fn test_hackathon_preferences_pipeline() {
    let requester = create_requester(&["Python"], "intermediate");
    let hackathon = Hackathon {
        id: 3,
        title: "ChainJam".into(),
        themes: vec!["Solidity".into(), "AI/ML".into()],
        max_team_size: 5,
        is_active: true,
    };
    let preferences = MatchPreferences::for_hackathon(&requester, &hackathon);

    let result = Matcher::new()
        .find_matches(&requester, &preferences, create_pool(200), 10)
        .unwrap();

    for m in &result.matches {
        assert_eq!(m.experience_level, "intermediate");
    }
}

#[test]
fn test_empty_pool() {
    let requester = create_requester(&["Python"], "beginner");
    let result = Matcher::new()
        .find_matches(&requester, &MatchPreferences::default(), Vec::new(), 10)
        .unwrap();

    assert!(result.matches.is_empty());
    assert_eq!(result.total_candidates, 0);
}
