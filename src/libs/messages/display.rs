//! Text of every [`Message`] variant.
//!
//! Keeping all wording in one match makes it easy to review the tone of the
//! CLI output and to spot messages that are no longer used.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === AUTH MESSAGES ===
            Message::LoginSuccess(username) => format!("Logged in as {}", username),
            Message::LoggedOut => "Logged out".to_string(),
            Message::PromptUsername => "Username".to_string(),
            Message::PromptPassword => "Password".to_string(),

            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task created: {}", id),
            Message::TaskPeriod(range) => format!("Period: {}", range),
            Message::TaskUpdated => "Task updated successfully".to_string(),
            Message::TaskCompleted(title) => format!("Task completed: {}", title),
            Message::TaskDeleted => "Task deleted successfully".to_string(),
            Message::ScoreUpdated(score) => format!("Score set to {}", score),
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),

            // === JOURNAL MESSAGES ===
            Message::JournalCreated(id) => format!("Journal entry created: {}", id),
            Message::JournalUpdated => "Journal entry updated successfully".to_string(),
            Message::JournalDeleted => "Journal entry deleted successfully".to_string(),
            Message::NoJournalsFound => "No journal entries found".to_string(),
            Message::ConfirmDeleteJournal(id) => format!("Delete journal entry {}?", id),
            Message::PromptJournalContent => "Journal entry".to_string(),

            // === PLAN MESSAGES ===
            Message::PlanViewTitle(range) => format!("Plan for {}", range),
            Message::StatsOverview => "Overview".to_string(),
            Message::NoTasksInPeriod => "No tasks in this period".to_string(),
            Message::TaskTreeHeader => "Tasks".to_string(),
            Message::NoJournalsInPeriod => "No journal entries in this period".to_string(),
            Message::RelatedJournals(count) => format!("Journal entries ({})", count),
            Message::MoreJournals(count) => format!("... and {} more", count),

            // === STATS MESSAGES ===
            Message::ScoreTrendTitle(range) => format!("Score trend for {}", range),
            Message::TrendSummaryHeader => "Summary".to_string(),
            Message::NoTrendSummary => "No summary available".to_string(),
            Message::TrendChartHeader => "Trend:".to_string(),
            Message::TrendPoint(score, count) => format!("{} points ({} tasks)", score, count),

            // === CONFIG MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration deleted, defaults apply".to_string(),
            Message::ConfigModuleServer => "Server".to_string(),
            Message::ConfigModuleDisplay => "Display".to_string(),
            Message::PromptSelectModules => "Select the settings to configure".to_string(),
            Message::PromptServerApiUrl => "API base URL".to_string(),
            Message::PromptServerTimeout => "Request timeout in seconds".to_string(),
            Message::PromptPageSize => "Items per page".to_string(),
            Message::PromptJournalPreview => "Journal entries shown in plan views".to_string(),
        };

        write!(f, "{}", text)
    }
}
