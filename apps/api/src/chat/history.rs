//! Trailing chat history supplied by the caller with each turn.

use serde::{Deserialize, Serialize};

/// How many trailing turns feed topic recency.
pub const TOPIC_WINDOW: usize = 6;

/// Speaker of a history turn. Unknown or missing roles land in `Other` and
/// only ever count as "not the assistant".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
    System,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    #[serde(default)]
    pub role: ChatRole,
    #[serde(default)]
    pub content: String,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Conversation topics inferred from keyword presence in recent turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Resume,
    Interview,
    Skills,
    Salary,
    JobSearch,
}

const TOPIC_MARKERS: &[(Topic, &[&str])] = &[
    (Topic::Resume, &["resume", "cv"]),
    (Topic::Interview, &["interview"]),
    (Topic::Skills, &["skill", "learn"]),
    (Topic::Salary, &["salary", "negotiate"]),
    (Topic::JobSearch, &["job", "apply"]),
];

/// Topics mentioned in the last `TOPIC_WINDOW` turns, either role.
/// One entry per (turn, topic) hit, oldest first.
pub fn recent_topics(history: &[ChatTurn]) -> Vec<Topic> {
    let start = history.len().saturating_sub(TOPIC_WINDOW);
    let mut topics = Vec::new();

    for turn in &history[start..] {
        let content = turn.content.to_lowercase();
        for (topic, markers) in TOPIC_MARKERS {
            if markers.iter().any(|m| content.contains(m)) {
                topics.push(*topic);
            }
        }
    }

    topics
}

/// Content of the most recent assistant turn, searching the full history.
pub fn last_assistant_message(history: &[ChatTurn]) -> Option<&str> {
    history
        .iter()
        .rev()
        .find(|turn| turn.role == ChatRole::Assistant)
        .map(|turn| turn.content.as_str())
}
