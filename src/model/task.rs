use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::category::Category;

/// An active task. Which quadrant it belongs to is implicit from the
/// collection that holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable id assigned at creation (`<unix-millis>-<seq>`)
    pub id: String,
    /// Display name. Data files written by early versions stored this as `text`.
    #[serde(alias = "text")]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Label names, deduplicated, first-seen order
    #[serde(default)]
    pub labels: Vec<String>,
    /// Dense rank within the owning quadrant (0 = top). Files that predate
    /// this field load as 0 and are renumbered from array order on startup.
    #[serde(default)]
    pub priority: usize,
}

/// A completed task. Keeps its former quadrant as a historical tag and
/// no longer carries a priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedTask {
    pub id: String,
    #[serde(alias = "text")]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub labels: Vec<String>,
    /// Quadrant the task was in when it was completed
    pub category: Category,
    pub completed_at: DateTime<Utc>,
}

impl Task {
    /// Consume the active record into its completed form. There is no way
    /// back, so a task is never active and completed at the same time.
    pub fn into_completed(self, category: Category, completed_at: DateTime<Utc>) -> CompletedTask {
        CompletedTask {
            id: self.id,
            name: self.name,
            description: self.description,
            created_at: self.created_at,
            due_date: self.due_date,
            labels: self.labels,
            category,
            completed_at,
        }
    }
}
