use colored::Colorize;
use indexmap::IndexMap;

use crate::model::category::Category;
use crate::model::task::{CompletedTask, Task};
use crate::ops::filter;

/// Parse a quadrant key from the command line
pub fn parse_category(s: &str) -> Result<Category, String> {
    Category::from_key(s).ok_or_else(|| {
        format!(
            "unknown quadrant '{}' (expected: {})",
            s,
            Category::ALL
                .iter()
                .map(|c| c.key())
                .collect::<Vec<_>>()
                .join(", ")
        )
    })
}

/// Parse a YYYY-MM-DD due date from the command line
pub fn parse_due(s: &str) -> Result<chrono::NaiveDate, String> {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("invalid due date '{}' (expected YYYY-MM-DD)", s))
}

/// Parse a hex color string like "#FF4444" into RGB components
fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Render a label in its registry color
pub fn paint_label(name: &str, color: &str) -> String {
    match parse_hex_color(color) {
        Some((r, g, b)) => format!("#{}", name).truecolor(r, g, b).to_string(),
        None => format!("#{}", name),
    }
}

/// Format a quadrant listing header
pub fn format_quadrant_header(category: Category) -> String {
    format!("== {} ({}) ==", category.title(), category.key())
}

/// Format a single active task as a one-line summary
pub fn format_task_line(task: &Task, colors: &IndexMap<String, String>) -> String {
    let mut line = format!("  {}. {}", task.priority, task.name);

    if let Some(days) = filter::days_until_due(task.due_date) {
        let due = task.due_date.map(|d| d.to_string()).unwrap_or_default();
        let marker = if filter::is_overdue(task.due_date) {
            format!("(due {}, {}d overdue)", due, -days).red().to_string()
        } else {
            format!("(due {}, in {}d)", due, days)
        };
        line.push_str(&format!("  {}", marker));
    }

    for label in &task.labels {
        let color = colors.get(label).map(String::as_str).unwrap_or("");
        line.push_str(&format!(" {}", paint_label(label, color)));
    }
    line
}

/// Format a completed task as a one-line summary
pub fn format_completed_line(task: &CompletedTask) -> String {
    format!(
        "  {} — {} (completed {})",
        task.name,
        task.category.title(),
        task.completed_at.format("%Y-%m-%d %H:%M"),
    )
}
