use crate::skill::SkillSet;
use itertools::Itertools;
use serde::Serialize;

/// Skill lists at least this long collapse into "first + `+N`".
pub const TRUNCATION_THRESHOLD: usize = 3;

const SKILL_TOOLTIP: &str = "Skill";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeKind {
    Skill,
    /// The collapsed "+N" badge.
    More,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillBadge {
    pub kind: BadgeKind,
    pub text: String,
    pub tooltip: Option<String>,
}

impl SkillBadge {
    fn skill(text: impl Into<String>, tooltip: bool) -> Self {
        Self {
            kind: BadgeKind::Skill,
            text: text.into(),
            tooltip: tooltip.then(|| SKILL_TOOLTIP.to_string()),
        }
    }

    fn more(remaining: &[String]) -> Self {
        Self {
            kind: BadgeKind::More,
            text: format!("+{}", remaining.len()),
            tooltip: Some(remaining.iter().join("\n")),
        }
    }
}

/// Badges for a node's stored skill assignment.
///
/// One value renders as `Skill: <value>` unless the tooltip preference is on,
/// in which case it renders bare. Two values always render bare. Three or more
/// render the first value plus a "+N" badge whose tooltip lists the rest, one per line.
pub fn node_skill_badges(stored: &str, skill_badge_tooltip: bool) -> Vec<SkillBadge> {
    let skills = SkillSet::split(stored);
    match skills.values() {
        [] => Vec::new(),
        [single] => {
            let text = if skill_badge_tooltip {
                single.clone()
            } else {
                format!("Skill: {single}")
            };
            vec![SkillBadge::skill(text, skill_badge_tooltip)]
        }
        values => truncated(values, skill_badge_tooltip),
    }
}

/// Badges for a plain list of skills, using the same truncation rule without any prefix.
pub fn list_badges(values: &[String]) -> Vec<SkillBadge> {
    truncated(values, false)
}

fn truncated(values: &[String], tooltip: bool) -> Vec<SkillBadge> {
    if values.len() >= TRUNCATION_THRESHOLD {
        vec![
            SkillBadge::skill(values[0].clone(), tooltip),
            SkillBadge::more(&values[1..]),
        ]
    } else {
        values
            .iter()
            .map(|v| SkillBadge::skill(v.clone(), tooltip))
            .collect()
    }
}
