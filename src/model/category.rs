use serde::{Deserialize, Serialize};

/// One of the four fixed Eisenhower quadrants an active task lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    UrgentImportant,
    NotUrgentImportant,
    UrgentNotImportant,
    NotUrgentNotImportant,
}

impl Category {
    /// All quadrants in display order: do-first, schedule, delegate, eliminate.
    pub const ALL: [Category; 4] = [
        Category::UrgentImportant,
        Category::NotUrgentImportant,
        Category::UrgentNotImportant,
        Category::NotUrgentNotImportant,
    ];

    /// The key used in the data file and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Category::UrgentImportant => "urgent_important",
            Category::NotUrgentImportant => "not_urgent_important",
            Category::UrgentNotImportant => "urgent_not_important",
            Category::NotUrgentNotImportant => "not_urgent_not_important",
        }
    }

    /// Parse a quadrant key
    pub fn from_key(s: &str) -> Option<Category> {
        match s {
            "urgent_important" => Some(Category::UrgentImportant),
            "not_urgent_important" => Some(Category::NotUrgentImportant),
            "urgent_not_important" => Some(Category::UrgentNotImportant),
            "not_urgent_not_important" => Some(Category::NotUrgentNotImportant),
            _ => None,
        }
    }

    /// Human heading for the quadrant
    pub fn title(self) -> &'static str {
        match self {
            Category::UrgentImportant => "Do First",
            Category::NotUrgentImportant => "Schedule",
            Category::UrgentNotImportant => "Delegate",
            Category::NotUrgentNotImportant => "Eliminate",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
