use super::formatter::{format_date, format_datetime, format_range, preview, short_id, task_tree_lines, trend_bar};
use crate::api::models::{JournalEntry, PlanResponse, ScoreTrendResponse, Task, User};
use crate::libs::messages::Message;
use anyhow::Result;
use prettytable::{row, Table};

const PREVIEW_CHARS: usize = 50;
const BAR_WIDTH: usize = 20;

pub struct View {}

impl View {
    pub fn user(user: &User) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["FIELD", "VALUE"]);
        table.add_row(row!["ID", user.id]);
        table.add_row(row!["USERNAME", user.username]);
        table.add_row(row!["EMAIL", user.email]);
        table.add_row(row!["CREATED", format_datetime(&user.created_at)]);
        table.printstd();

        Ok(())
    }

    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "TYPE", "STATUS", "SCORE", "START", "END"]);
        for task in tasks {
            let score = match task.score {
                Some(score) => score.to_string(),
                None => "-".to_string(),
            };
            table.add_row(row![
                short_id(&task.id),
                task.title,
                task.task_type,
                task.status,
                score,
                task.start_date.format("%m-%d"),
                task.end_date.format("%m-%d")
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn journals(journals: &[JournalEntry]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "CONTENT", "SCALE", "REFERENCE", "TYPE", "CREATED"]);
        for journal in journals {
            table.add_row(row![
                short_id(&journal.id),
                preview(&journal.content, PREVIEW_CHARS),
                journal.time_scale,
                journal.time_reference,
                journal.entry_type,
                journal.created_at.format("%m-%d %H:%M")
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn plan(plan: &PlanResponse, journal_preview: usize) -> Result<()> {
        let title = Message::PlanViewTitle(format_range(&plan.time_range)).to_string();
        println!("\n📋 {}", title);
        println!("{}", "━".repeat(title.chars().count() + 3));

        let stats = &plan.stats;
        println!("\n📊 {}", Message::StatsOverview);
        let mut table = Table::new();
        table.add_row(row!["TOTAL", stats.total_tasks, ""]);
        if stats.total_tasks > 0 {
            table.add_row(row![
                "COMPLETED",
                stats.completed_tasks,
                format!("{:.1}%", stats.percent(stats.completed_tasks))
            ]);
            table.add_row(row![
                "IN PROGRESS",
                stats.in_progress_tasks,
                format!("{:.1}%", stats.percent(stats.in_progress_tasks))
            ]);
            table.add_row(row![
                "PENDING",
                stats.pending_tasks,
                format!("{:.1}%", stats.percent(stats.pending_tasks))
            ]);
        }
        table.add_row(row!["SCORE", stats.total_score, format!("completed {}", stats.completed_score)]);
        table.printstd();

        if plan.tasks.is_empty() {
            println!("\n{}", Message::NoTasksInPeriod);
        } else {
            println!("\n🌳 {}", Message::TaskTreeHeader);
            for line in task_tree_lines(&plan.tasks) {
                println!("{}", line);
            }
        }

        if plan.journals.is_empty() {
            println!("\n{}", Message::NoJournalsInPeriod);
        } else {
            println!("\n📝 {}", Message::RelatedJournals(plan.journals.len()));
            for journal in plan.journals.iter().take(journal_preview) {
                println!("• {}: {}", format_date(&journal.created_at), preview(&journal.content, PREVIEW_CHARS));
            }
            if plan.journals.len() > journal_preview {
                println!("{}", Message::MoreJournals(plan.journals.len() - journal_preview));
            }
        }

        Ok(())
    }

    pub fn score_trend(trend: &ScoreTrendResponse) -> Result<()> {
        let title = Message::ScoreTrendTitle(format_range(&trend.time_range)).to_string();
        println!("\n📈 {}", title);
        println!("{}", "━".repeat(title.chars().count() + 3));

        println!("\n📊 {}", Message::TrendSummaryHeader);
        match &trend.summary {
            Some(summary) => {
                let mut table = Table::new();
                table.add_row(row!["TOTAL SCORE", summary.total_score]);
                table.add_row(row!["TOTAL TASKS", summary.total_tasks]);
                table.add_row(row!["AVERAGE SCORE", format!("{:.2}", summary.average_score)]);
                table.add_row(row!["AVERAGE TASKS", format!("{:.2}", summary.average_task_count)]);
                table.add_row(row!["MAX SCORE", summary.max_score]);
                table.add_row(row!["MIN SCORE", summary.min_score]);
                table.printstd();
            }
            None => println!("{}", Message::NoTrendSummary),
        }

        if !trend.labels.is_empty() && !trend.scores.is_empty() {
            let max_score = trend.scores.iter().copied().max().unwrap_or(0);
            println!("\n{}", Message::TrendChartHeader);
            for ((label, score), count) in trend.labels.iter().zip(&trend.scores).zip(&trend.counts) {
                println!("{} {} {}", label, trend_bar(*score, max_score, BAR_WIDTH), Message::TrendPoint(*score, *count));
            }
        }

        Ok(())
    }
}
