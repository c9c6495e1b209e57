//! Todo models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Todo progress
///
/// Any status may be set through a full update; only `complete` is a
/// dedicated transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TodoStatus {
    #[default]
    Incomplete,
    Working,
    Complete,
}

impl TodoStatus {
    pub const ALL: [TodoStatus; 3] = [
        TodoStatus::Incomplete,
        TodoStatus::Working,
        TodoStatus::Complete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::Incomplete => "Incomplete",
            TodoStatus::Working => "Working",
            TodoStatus::Complete => "Complete",
        }
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TodoStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TodoStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Invalid todo status: {}", s))
    }
}

/// Todo record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
    pub status: TodoStatus,
    /// Creating user; never reassigned
    pub owner: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated todo fields
#[derive(Debug, Clone, PartialEq)]
pub struct TodoDraft {
    pub title: String,
    pub description: Option<String>,
    pub status: Option<TodoStatus>,
}

impl Todo {
    /// Build a new record owned by `owner`
    pub fn new(owner: Uuid, draft: TodoDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            status: draft.status.unwrap_or_default(),
            owner,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the editable fields; an absent status keeps the current one
    pub fn apply(&mut self, draft: TodoDraft) {
        self.title = draft.title;
        self.description = draft.description;
        if let Some(status) = draft.status {
            self.status = status;
        }
        self.touch();
    }

    /// Mark as complete; completing a complete todo is a no-op on status
    pub fn complete(&mut self) {
        self.status = TodoStatus::Complete;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
