use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::task::{CompletedTask, Task};

/// The four active-task collections. One named field per quadrant so the
/// serialized document always carries exactly the four fixed keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Quadrants {
    #[serde(default)]
    pub urgent_important: Vec<Task>,
    #[serde(default)]
    pub not_urgent_important: Vec<Task>,
    #[serde(default)]
    pub urgent_not_important: Vec<Task>,
    #[serde(default)]
    pub not_urgent_not_important: Vec<Task>,
}

impl Quadrants {
    /// Tasks in a quadrant, in priority order
    pub fn get(&self, category: Category) -> &[Task] {
        match category {
            Category::UrgentImportant => &self.urgent_important,
            Category::NotUrgentImportant => &self.not_urgent_important,
            Category::UrgentNotImportant => &self.urgent_not_important,
            Category::NotUrgentNotImportant => &self.not_urgent_not_important,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut Vec<Task> {
        match category {
            Category::UrgentImportant => &mut self.urgent_important,
            Category::NotUrgentImportant => &mut self.not_urgent_important,
            Category::UrgentNotImportant => &mut self.urgent_not_important,
            Category::NotUrgentNotImportant => &mut self.not_urgent_not_important,
        }
    }
}

/// Everything the data file holds: active tasks per quadrant, the completed
/// collection, and the label-color registry (insertion order preserved).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreState {
    #[serde(default)]
    pub tasks: Quadrants,
    #[serde(default)]
    pub completed_tasks: Vec<CompletedTask>,
    #[serde(default)]
    pub label_colors: IndexMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_defaults() {
        let state: StoreState = serde_json::from_str("{}").unwrap();
        for category in Category::ALL {
            assert!(state.tasks.get(category).is_empty());
        }
        assert!(state.completed_tasks.is_empty());
        assert!(state.label_colors.is_empty());
    }

    #[test]
    fn test_serialized_document_carries_all_four_keys() {
        let json = serde_json::to_value(StoreState::default()).unwrap();
        for category in Category::ALL {
            assert!(json["tasks"].get(category.key()).is_some());
        }
        assert!(json.get("completed_tasks").is_some());
        assert!(json.get("label_colors").is_some());
    }

    #[test]
    fn test_get_and_get_mut_address_the_same_bucket() {
        use chrono::Utc;

        let mut quadrants = Quadrants::default();
        for (i, category) in Category::ALL.into_iter().enumerate() {
            quadrants.get_mut(category).push(Task {
                id: format!("{}-0", i),
                name: category.key().to_string(),
                description: String::new(),
                created_at: Utc::now(),
                due_date: None,
                labels: vec![],
                priority: 0,
            });
        }
        for category in Category::ALL {
            assert_eq!(quadrants.get(category).len(), 1);
            assert_eq!(quadrants.get(category)[0].name, category.key());
        }
    }
}
