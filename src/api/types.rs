use serde::{Deserialize, Serialize};

/// A Shortcut workspace member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    #[serde(default)]
    pub id: Option<String>,
    pub profile: MemberProfile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberProfile {
    #[serde(default)]
    pub email_address: Option<String>,
    pub mention_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub deactivated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryType {
    Feature,
    Bug,
    Chore,
    #[serde(other)]
    Other,
}

impl StoryType {
    /// Style class for the type badge.
    pub fn badge_class(&self) -> &'static str {
        match self {
            StoryType::Feature => "badge-feature",
            StoryType::Bug => "badge-bug",
            StoryType::Chore => "badge-chore",
            StoryType::Other => "badge-other",
        }
    }

    pub fn label(&self) -> Option<&'static str> {
        match self {
            StoryType::Feature => Some("Feature"),
            StoryType::Bug => Some("Bug"),
            StoryType::Chore => Some("Chore"),
            StoryType::Other => None,
        }
    }
}

/// A Shortcut story, read-only for one render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: u64,
    pub name: String,
    pub app_url: String,
    pub story_type: StoryType,
    #[serde(default)]
    pub started: bool,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub archived: bool,
}

impl Story {
    /// Stories that are neither completed nor archived.
    pub fn is_active(&self) -> bool {
        !self.completed && !self.archived
    }

    pub fn status_label(&self) -> &'static str {
        if self.started {
            "In progress"
        } else {
            "Not started"
        }
    }
}

/// Envelope returned by `GET /search/stories`.
#[derive(Debug, Clone, Deserialize)]
pub struct StorySearchResponse {
    pub data: Vec<Story>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub total: Option<u64>,
}
