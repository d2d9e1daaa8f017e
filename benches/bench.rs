// Criterion benchmarks for Hackmates Matcher

use std::collections::HashSet;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hackmates_matcher::core::{calculate_breakdown, is_eligible_candidate, popular_skills, Matcher};
use hackmates_matcher::models::{Candidate, MatchPreferences, Profile};

const SKILLS: &[&str] = &[
    "Python", "React", "Node", "Rust", "Go", "Figma", "SQL", "Docker", "AI/ML", "Solidity",
];
const LEVELS: &[&str] = &["beginner", "intermediate", "advanced"];

fn create_candidate(id: usize) -> Candidate {
    let mut profile = Profile::new(id as i64 + 1);
    profile.skills = Some(
        (0..1 + id % 4)
            .map(|k| SKILLS[(id * 7 + k * 3) % SKILLS.len()].to_string())
            .collect(),
    );
    profile.experience_level = LEVELS[id % LEVELS.len()].to_string();
    profile.location = Some(if id % 2 == 0 { "Berlin" } else { "Lisbon" }.to_string());
    profile.profile_score = (id % 100) as f64;

    Candidate {
        user_id: id as i64 + 1,
        username: format!("hacker{}", id),
        full_name: None,
        is_active: true,
        profile,
    }
}

fn create_requester() -> Profile {
    let mut profile = Profile::new(0);
    profile.skills = Some(vec!["Python".into(), "React".into(), "SQL".into()]);
    profile.experience_level = "intermediate".to_string();
    profile
}

fn create_preferences() -> MatchPreferences {
    MatchPreferences {
        preferred_skills: vec!["Figma".into(), "Rust".into()],
        ..Default::default()
    }
}

fn bench_score_breakdown(c: &mut Criterion) {
    let requester = create_requester();
    let current: HashSet<&str> = requester.skill_set();
    let preferences = create_preferences();
    let preferred = preferences.preferred_skill_set();
    let candidate = create_candidate(42);

    c.bench_function("score_breakdown", |b| {
        b.iter(|| {
            calculate_breakdown(
                black_box(&current),
                black_box(&requester.experience_level),
                black_box(&preferred),
                black_box(&candidate.profile),
            )
        });
    });
}

fn bench_matching(c: &mut Criterion) {
    let matcher = Matcher::new();
    let requester = create_requester();
    let preferences = create_preferences();

    let mut group = c.benchmark_group("matching");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<Candidate> = (0..*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("find_matches", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    matcher.find_matches(
                        black_box(&requester),
                        black_box(&preferences),
                        black_box(candidates.clone()),
                        black_box(20),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_pool_filter(c: &mut Criterion) {
    let preferences = MatchPreferences {
        experience_level: Some("intermediate".into()),
        location_preference: Some("berlin".into()),
        ..Default::default()
    };
    let candidates: Vec<Candidate> = (0..100).map(create_candidate).collect();

    c.bench_function("pool_filter_100_candidates", |b| {
        b.iter(|| {
            let filtered: Vec<_> = candidates
                .iter()
                .filter(|candidate| is_eligible_candidate(candidate, 0, &preferences))
                .collect();

            black_box(filtered)
        });
    });
}

fn bench_popular_skills(c: &mut Criterion) {
    let lists: Vec<Vec<String>> = (0..1000)
        .map(|id| create_candidate(id).profile.skills.unwrap_or_default())
        .collect();

    c.bench_function("popular_skills_1000_profiles", |b| {
        b.iter(|| popular_skills(black_box(lists.iter().map(Vec::as_slice)), 20));
    });
}

criterion_group!(
    benches,
    bench_score_breakdown,
    bench_matching,
    bench_pool_filter,
    bench_popular_skills
);

criterion_main!(benches);
