use std::collections::HashMap;
use crate::models::SkillFrequency;

/// Number of skills suggested to users
pub const RECOMMENDED_SKILLS_LIMIT: usize = 20;

/// Count skill occurrences across profiles and return the most common ones
///
/// Every occurrence counts, so a skill listed twice on one profile counts
/// twice. Equal counts are ordered by skill name.
pub fn popular_skills<'a, I>(skill_lists: I, limit: usize) -> Vec<SkillFrequency>
where
    I: IntoIterator<Item = &'a [String]>,
{
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for skills in skill_lists {
        for skill in skills {
            *counts.entry(skill.as_str()).or_insert(0) += 1;
        }
    }

    let mut frequencies: Vec<SkillFrequency> = counts
        .into_iter()
        .map(|(skill, count)| SkillFrequency {
            skill: skill.to_string(),
            count,
        })
        .collect();

    frequencies.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.skill.cmp(&b.skill)));
    frequencies.truncate(limit);

    frequencies
}
