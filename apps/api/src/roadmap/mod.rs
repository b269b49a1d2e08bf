//! Learning roadmaps: week-indexed study plans.
//!
//! Week labels are derived from position, so a `Roadmap` is always keyed
//! "Week 1".."Week N" with no gaps. It serializes as an ordered JSON object.

pub mod handlers;

use serde::{ser::SerializeMap, Serialize, Serializer};
use tracing::debug;

use crate::lexicon::resources_for;

/// Number of weeks produced by the baseline generator.
pub const BASELINE_WEEKS: usize = 4;
/// Maximum resources attached to a single week.
pub const MAX_RESOURCES_PER_WEEK: usize = 3;
/// Substituted when the generator receives no skills.
pub const DEFAULT_SKILL: &str = "Professional Development";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekPlan {
    pub topic: String,
    pub resources: Vec<String>,
}

impl WeekPlan {
    pub fn new(topic: impl Into<String>, resources: &[&str]) -> Self {
        Self {
            topic: topic.into(),
            resources: resources
                .iter()
                .take(MAX_RESOURCES_PER_WEEK)
                .map(|r| r.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roadmap {
    weeks: Vec<WeekPlan>,
}

impl Roadmap {
    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    pub fn first(&self) -> Option<&WeekPlan> {
        self.weeks.first()
    }

    /// Appends a week; it is labelled `Week {len + 1}`.
    pub fn push_week(&mut self, week: WeekPlan) {
        self.weeks.push(week);
    }

    /// `(label, plan)` pairs in week order.
    pub fn weeks(&self) -> impl Iterator<Item = (String, &WeekPlan)> {
        self.weeks
            .iter()
            .enumerate()
            .map(|(i, plan)| (week_label(i), plan))
    }

    /// `**Week N:** topic` lines, used by chat replies.
    pub fn topic_lines(&self) -> String {
        self.weeks()
            .map(|(label, plan)| format!("**{label}:** {}", plan.topic))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Serialize for Roadmap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.weeks.len()))?;
        for (label, plan) in self.weeks() {
            map.serialize_entry(&label, plan)?;
        }
        map.end()
    }
}

/// Label for a 0-based week index.
pub fn week_label(index: usize) -> String {
    format!("Week {}", index + 1)
}

/// Builds the baseline 4-week plan, cycling through `skills_to_learn`.
///
/// Week `i` studies `skills[i % len]`. Topics follow the week position
/// (Fundamentals, Practice, Advanced, Integration & Review) while `i` is below
/// the number of skills; later weeks become "Review & Practice". Resources come
/// from the lexicon by exact label, else the generic list. `goal` is carried for
/// logging only.
pub fn generate_roadmap(skills_to_learn: &[String], goal: &str) -> Roadmap {
    let fallback = [DEFAULT_SKILL.to_string()];
    let skills: &[String] = if skills_to_learn.is_empty() {
        &fallback
    } else {
        skills_to_learn
    };

    let mut roadmap = Roadmap::default();
    for i in 0..BASELINE_WEEKS {
        let skill = &skills[i % skills.len()];

        let topic = if i >= skills.len() {
            "Review & Practice".to_string()
        } else {
            match i {
                0 => format!("{skill} Fundamentals"),
                1 => format!("{skill} Practice"),
                2 => format!("Advanced {skill}"),
                _ => "Integration & Review".to_string(),
            }
        };

        roadmap.push_week(WeekPlan::new(topic, resources_for(skill)));
    }

    debug!(
        "Generated {}-week roadmap for goal '{}' over {} skill(s)",
        roadmap.len(),
        goal,
        skills.len()
    );
    roadmap
}
