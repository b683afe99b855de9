//! Data transfer types of the OKR API.
//!
//! Every response is wrapped in an [`ApiResponse`] envelope whose `data`
//! field carries the payload. Task types share the [`TimeScale`] vocabulary
//! (`day`, `week`, `month`, `quarter`, `year`).

use crate::libs::time_ref::{TimeInterval, TimeScale};
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Lowest and highest score a task may carry.
pub const SCORE_RANGE: (i32, i32) = (0, 10);

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Serialize, Deserialize, ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "⏳",
            TaskStatus::InProgress => "🔄",
            TaskStatus::Completed => "✅",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EntryType {
    PlanStart,
    Reflection,
    Summary,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::PlanStart => "plan-start",
            EntryType::Reflection => "reflection",
            EntryType::Summary => "summary",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub task_type: TimeScale,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: TaskStatus,
    #[serde(default)]
    pub score: Option<i32>,
    #[serde(default)]
    pub parent_id: Option<String>,
    pub user_id: String,
    #[serde(default)]
    pub tags: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A task together with its sub-tasks, as returned by the plan view.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TaskTree {
    #[serde(flatten)]
    pub task: Task,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub children: Vec<TaskTree>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct JournalEntry {
    pub id: String,
    pub content: String,
    pub time_reference: String,
    pub time_scale: TimeScale,
    pub entry_type: EntryType,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl From<TimeInterval> for TimeRange {
    /// Stamps the wall-clock interval as UTC, the way the server stores task periods.
    fn from(interval: TimeInterval) -> Self {
        TimeRange {
            start: interval.start.and_utc(),
            end: interval.end.and_utc(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PlanStats {
    pub total_tasks: i64,
    pub completed_tasks: i64,
    pub in_progress_tasks: i64,
    pub pending_tasks: i64,
    pub total_score: i64,
    pub completed_score: i64,
}

impl PlanStats {
    /// Share of `count` in the total task count, in percent.
    pub fn percent(&self, count: i64) -> f64 {
        if self.total_tasks <= 0 {
            return 0.0;
        }
        count as f64 / self.total_tasks as f64 * 100.0
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlanResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tasks: Vec<TaskTree>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub journals: Vec<JournalEntry>,
    pub time_range: TimeRange,
    #[serde(default)]
    pub stats: PlanStats,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrendSummary {
    pub total_score: i64,
    pub total_tasks: i64,
    pub average_score: f64,
    pub average_task_count: f64,
    pub max_score: i64,
    pub max_tasks: i64,
    pub min_score: i64,
    pub min_tasks: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScoreTrendResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub labels: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub scores: Vec<i64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub counts: Vec<i64>,
    /// Kept as a plain string; the server does not always send a known scale.
    pub scale: String,
    pub time_ref: String,
    pub time_range: TimeRange,
    #[serde(default)]
    pub summary: Option<TrendSummary>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TaskRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub task_type: TimeScale,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

impl TaskRequest {
    /// A pending, unscored task spanning `range`.
    pub fn for_range(title: &str, description: Option<String>, task_type: TimeScale, range: TimeRange) -> Self {
        TaskRequest {
            title: title.to_string(),
            description,
            task_type,
            start_date: range.start,
            end_date: range.end,
            status: TaskStatus::Pending,
            score: None,
            parent_id: None,
            tags: None,
        }
    }
}

impl From<&Task> for TaskRequest {
    fn from(task: &Task) -> Self {
        TaskRequest {
            title: task.title.clone(),
            description: task.description.clone(),
            task_type: task.task_type,
            start_date: task.start_date,
            end_date: task.end_date,
            status: task.status,
            score: task.score,
            parent_id: task.parent_id.clone(),
            tags: task.tags.clone(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct JournalRequest {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_reference: Option<String>,
    pub time_scale: TimeScale,
    pub entry_type: EntryType,
}

impl From<&JournalEntry> for JournalRequest {
    fn from(entry: &JournalEntry) -> Self {
        JournalRequest {
            content: entry.content.clone(),
            time_reference: Some(entry.time_reference.clone()),
            time_scale: entry.time_scale,
            entry_type: entry.entry_type,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

#[derive(Serialize, Debug, Clone, Copy)]
pub struct ScoreUpdate {
    pub score: i32,
}

/// Response envelope shared by every endpoint.
#[derive(Deserialize, Debug, Clone)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: Option<bool>,
    /// Missing or `null` on some empty results.
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body returned with non-2xx statuses.
#[derive(Deserialize, Debug, Clone)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct TaskList {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tasks: Vec<Task>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct JournalList {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub journals: Vec<JournalEntry>,
}

/// Optional filters for `GET /tasks`.
#[derive(Debug, Clone, Default)]
pub struct TaskQuery {
    pub task_type: Option<TimeScale>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub status: Option<TaskStatus>,
    pub page: u32,
    pub page_size: u32,
}

impl TaskQuery {
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("page", self.page.max(1).to_string()), ("page_size", self.page_size.to_string())];
        if let Some(task_type) = self.task_type {
            params.push(("type", task_type.to_string()));
        }
        if let Some(start) = self.start_date {
            params.push(("start_date", start.to_rfc3339()));
        }
        if let Some(end) = self.end_date {
            params.push(("end_date", end.to_rfc3339()));
        }
        if let Some(status) = self.status {
            params.push(("status", status.to_string()));
        }
        params
    }
}

/// Optional filters for `GET /journals`.
#[derive(Debug, Clone, Default)]
pub struct JournalQuery {
    pub time_scale: Option<TimeScale>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub page: u32,
    pub page_size: u32,
}

impl JournalQuery {
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("page", self.page.max(1).to_string()), ("page_size", self.page_size.to_string())];
        if let Some(scale) = self.time_scale {
            params.push(("time_scale", scale.to_string()));
        }
        if let Some(start) = self.start_time {
            params.push(("start_time", start.to_rfc3339()));
        }
        if let Some(end) = self.end_time {
            params.push(("end_time", end.to_rfc3339()));
        }
        params
    }
}
