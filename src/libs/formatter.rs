//! Text formatting helpers for terminal output.
//!
//! Everything here is pure string manipulation so the rendering in
//! [`crate::libs::view`] stays a thin layer over `println!` and prettytable.
//!
//! ## Examples
//!
//! ```rust
//! use okr::libs::formatter::{preview, trend_bar};
//!
//! assert_eq!(preview("short", 50), "short");
//! assert_eq!(trend_bar(5, 10, 4), "▓▓░░");
//! ```

use crate::api::models::{TaskTree, TimeRange};
use anyhow::{anyhow, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Layouts accepted by [`parse_datetime`] besides RFC 3339.
const DATETIME_FORMATS: [&str; 4] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

pub fn format_date(instant: &DateTime<Utc>) -> String {
    instant.format(DATE_FORMAT).to_string()
}

pub fn format_datetime(instant: &DateTime<Utc>) -> String {
    instant.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// `2024-10-01 ~ 2024-12-31`
pub fn format_range(range: &TimeRange) -> String {
    format!("{} ~ {}", format_date(&range.start), format_date(&range.end))
}

/// First `max_chars` characters of `content`, with `...` appended when cut.
pub fn preview(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        return content.to_string();
    }
    let cut: String = content.chars().take(max_chars).collect();
    format!("{}...", cut)
}

/// Abbreviated identifier for table columns.
pub fn short_id(id: &str) -> String {
    if id.chars().count() <= 8 {
        return id.to_string();
    }
    format!("{}...", id.chars().take(8).collect::<String>())
}

/// Horizontal bar of `width` cells, filled in proportion to `score / max_score`.
pub fn trend_bar(score: i64, max_score: i64, width: usize) -> String {
    let filled = if max_score > 0 {
        ((score.max(0) as f64 / max_score as f64) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);
    format!("{}{}", "▓".repeat(filled), "░".repeat(width - filled))
}

/// Renders task trees as indented lines with status icons.
pub fn task_tree_lines(trees: &[TaskTree]) -> Vec<String> {
    let mut lines = Vec::new();
    for tree in trees {
        lines.push(format!("{} {}", tree.task.status.icon(), tree.task.title));
        push_children(&tree.children, "", &mut lines);
    }
    lines
}

fn push_children(children: &[TaskTree], prefix: &str, lines: &mut Vec<String>) {
    for (idx, child) in children.iter().enumerate() {
        let last = idx + 1 == children.len();
        let branch = if last { "└── " } else { "├── " };
        lines.push(format!("{}{}{} {}", prefix, branch, child.task.status.icon(), child.task.title));
        let next_prefix = format!("{}{}", prefix, if last { "    " } else { "│   " });
        push_children(&child.children, &next_prefix, lines);
    }
}

/// Parses user supplied dates such as `2025-07-15`, `2025-07-15 09:30` or RFC 3339.
///
/// A bare date is read as midnight.
pub fn parse_datetime(input: &str) -> Result<NaiveDateTime> {
    let input = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input, DATE_FORMAT) {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(datetime);
        }
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(input) {
        return Ok(datetime.naive_utc());
    }
    Err(anyhow!("Invalid date '{}', expected YYYY-MM-DD or YYYY-MM-DD HH:MM[:SS]", input))
}
