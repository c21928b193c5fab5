use std::collections::HashSet;

use chrono::{Local, NaiveDate};

use crate::model::task::Task;

/// Tasks whose label set intersects `active`. An empty filter passes the
/// input through unchanged.
pub fn filter_by_labels<'a>(tasks: &'a [Task], active: &HashSet<String>) -> Vec<&'a Task> {
    if active.is_empty() {
        return tasks.iter().collect();
    }
    tasks
        .iter()
        .filter(|t| t.labels.iter().any(|l| active.contains(l)))
        .collect()
}

/// A task is overdue once its due date is strictly in the past. Evaluated
/// against the current local date on every call.
pub fn is_overdue(due_date: Option<NaiveDate>) -> bool {
    matches!(due_date, Some(due) if due < Local::now().date_naive())
}

/// Days from today until the due date (negative once overdue), or None for
/// tasks without one.
pub fn days_until_due(due_date: Option<NaiveDate>) -> Option<i64> {
    due_date.map(|due| (due - Local::now().date_naive()).num_days())
}
