use super::client;
use crate::{
    api::models::{Task, TaskQuery, TaskRequest, TaskStatus, TimeRange},
    libs::{
        formatter::{format_range, parse_datetime},
        messages::Message,
        time_ref::{self, TimeScale},
        view::View,
    },
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommand,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// List tasks
    List {
        /// Only tasks of this type
        #[arg(short, long = "type", value_enum)]
        task_type: Option<TimeScale>,
        /// Only tasks on this day (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<NaiveDate>,
        #[arg(short, long, value_enum)]
        status: Option<TaskStatus>,
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// Create a task for an explicit period
    Create {
        #[arg(short, long)]
        title: String,
        #[arg(short, long = "desc")]
        description: Option<String>,
        #[arg(long = "type", value_enum, default_value = "day")]
        task_type: TimeScale,
        /// Period reference; overrides the start and end dates
        #[arg(long = "time-ref", conflicts_with_all = ["start_date", "end_date"])]
        time_ref: Option<String>,
        /// Defaults to now
        #[arg(long)]
        start_date: Option<String>,
        /// Defaults to the end of the period containing the start
        #[arg(long)]
        end_date: Option<String>,
        #[arg(long)]
        score: Option<i32>,
        /// Shortcut for the current week
        #[arg(long, group = "quick")]
        quick_week: bool,
        /// Shortcut for the current month
        #[arg(long, group = "quick")]
        quick_month: bool,
        /// Shortcut for the current quarter
        #[arg(long, group = "quick")]
        quick_quarter: bool,
        /// Shortcut for the current year
        #[arg(long, group = "quick")]
        quick_year: bool,
    },
    /// Create a task for today
    Today {
        title: String,
        #[arg(short, long = "desc")]
        description: Option<String>,
    },
    /// Create a task for a week, the current one by default
    Week {
        title: String,
        #[arg(short, long = "desc")]
        description: Option<String>,
        #[arg(short, long, requires = "week")]
        year: Option<i32>,
        #[arg(short, long, requires = "year")]
        week: Option<u32>,
    },
    /// Create a task for a month, the current one by default
    Month {
        title: String,
        #[arg(short, long = "desc")]
        description: Option<String>,
        #[arg(short, long, requires = "month")]
        year: Option<i32>,
        #[arg(short, long, requires = "year")]
        month: Option<u32>,
    },
    /// Create a task for a quarter, the current one by default
    Quarter {
        title: String,
        #[arg(short, long = "desc")]
        description: Option<String>,
        #[arg(short, long, requires = "quarter")]
        year: Option<i32>,
        #[arg(short, long, requires = "year")]
        quarter: Option<u32>,
    },
    /// Create a task for the current year
    Year {
        title: String,
        #[arg(short, long = "desc")]
        description: Option<String>,
    },
    /// Update fields of a task
    Update {
        id: String,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long = "desc")]
        description: Option<String>,
        #[arg(short, long, value_enum)]
        status: Option<TaskStatus>,
    },
    /// Mark a task completed
    Done { id: String },
    /// Set the score of a task
    Score { id: String, score: i32 },
    /// List the sub-tasks of a task
    Children { id: String },
    /// Delete a task
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn cmd(args: TaskArgs) -> Result<()> {
    match args.command {
        TaskCommand::List {
            task_type,
            date,
            status,
            page,
        } => handle_list(task_type, date, status, page).await,
        TaskCommand::Create {
            title,
            description,
            task_type,
            time_ref,
            start_date,
            end_date,
            score,
            quick_week,
            quick_month,
            quick_quarter,
            quick_year,
        } => {
            let quick = [
                (quick_week, TimeScale::Week),
                (quick_month, TimeScale::Month),
                (quick_quarter, TimeScale::Quarter),
                (quick_year, TimeScale::Year),
            ]
            .into_iter()
            .find_map(|(set, scale)| set.then_some(scale));
            match quick {
                Some(scale) => {
                    let (_, client) = client()?;
                    let task = client.create_current_task(scale, &title, description, score).await?;
                    report_created(&task);
                    Ok(())
                }
                None => {
                    let period = Period {
                        task_type,
                        time_ref,
                        start_date,
                        end_date,
                    };
                    handle_create(title, description, period, score).await
                }
            }
        }
        TaskCommand::Today { title, description } => handle_current(TimeScale::Day, title, description).await,
        TaskCommand::Week {
            title,
            description,
            year,
            week,
        } => match (year, week) {
            (Some(year), Some(week)) => {
                let (_, client) = client()?;
                let task = client.create_week_task(&title, year, week, description).await?;
                report_created(&task);
                Ok(())
            }
            _ => handle_current(TimeScale::Week, title, description).await,
        },
        TaskCommand::Month {
            title,
            description,
            year,
            month,
        } => match (year, month) {
            (Some(year), Some(month)) => {
                let (_, client) = client()?;
                let task = client.create_month_task(&title, year, month, description).await?;
                report_created(&task);
                Ok(())
            }
            _ => handle_current(TimeScale::Month, title, description).await,
        },
        TaskCommand::Quarter {
            title,
            description,
            year,
            quarter,
        } => match (year, quarter) {
            (Some(year), Some(quarter)) => {
                let (_, client) = client()?;
                let task = client.create_quarter_task(&title, year, quarter, description).await?;
                report_created(&task);
                Ok(())
            }
            _ => handle_current(TimeScale::Quarter, title, description).await,
        },
        TaskCommand::Year { title, description } => handle_current(TimeScale::Year, title, description).await,
        TaskCommand::Update {
            id,
            title,
            description,
            status,
        } => handle_update(id, title, description, status).await,
        TaskCommand::Done { id } => {
            let (_, client) = client()?;
            let task = client.complete_task(&id).await?;
            msg_success!(Message::TaskCompleted(task.title));
            Ok(())
        }
        TaskCommand::Score { id, score } => {
            let (_, client) = client()?;
            client.update_task_score(&id, score).await?;
            msg_success!(Message::ScoreUpdated(score));
            Ok(())
        }
        TaskCommand::Children { id } => {
            let (_, client) = client()?;
            let children = client.task_children(&id).await?;
            if children.is_empty() {
                msg_info!(Message::NoTasksFound);
                return Ok(());
            }
            View::tasks(&children)
        }
        TaskCommand::Delete { id, yes } => handle_delete(id, yes).await,
    }
}

fn report_created(task: &Task) {
    let range = TimeRange {
        start: task.start_date,
        end: task.end_date,
    };
    msg_success!(Message::TaskCreated(task.id.clone()));
    msg_print!(Message::TaskPeriod(format_range(&range)));
}

async fn handle_list(
    task_type: Option<TimeScale>,
    date: Option<NaiveDate>,
    status: Option<TaskStatus>,
    page: u32,
) -> Result<()> {
    let (config, client) = client()?;
    let day = date.map(|date| TimeRange::from(time_ref::day_interval(date)));
    let query = TaskQuery {
        task_type,
        start_date: day.map(|range| range.start),
        end_date: day.map(|range| range.end),
        status,
        page,
        page_size: config.display().page_size,
    };

    let tasks = client.tasks(&query).await?;
    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }
    View::tasks(&tasks)
}

async fn handle_current(scale: TimeScale, title: String, description: Option<String>) -> Result<()> {
    let (_, client) = client()?;
    let task = client.create_current_task(scale, &title, description, None).await?;
    report_created(&task);
    Ok(())
}

/// Period of an explicit `task create`.
struct Period {
    task_type: TimeScale,
    time_ref: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
}

async fn handle_create(title: String, description: Option<String>, period: Period, score: Option<i32>) -> Result<()> {
    let (_, client) = client()?;
    let interval = match period.time_ref {
        Some(reference) => time_ref::resolve(&reference, period.task_type)?,
        None => {
            let start = match period.start_date {
                Some(input) => parse_datetime(&input)?,
                None => client.now(),
            };
            let end = period.end_date.as_deref().map(parse_datetime).transpose()?;
            time_ref::span_from(period.task_type, start, end)?
        }
    };

    let request = TaskRequest {
        score,
        ..TaskRequest::for_range(&title, description, period.task_type, TimeRange::from(interval))
    };
    let task = client.create_task(&request).await?;
    report_created(&task);
    Ok(())
}

async fn handle_update(
    id: String,
    title: Option<String>,
    description: Option<String>,
    status: Option<TaskStatus>,
) -> Result<()> {
    let (_, client) = client()?;
    let task = client.task(&id).await?;
    let mut request = TaskRequest::from(&task);
    if let Some(title) = title {
        request.title = title;
    }
    if description.is_some() {
        request.description = description;
    }
    if let Some(status) = status {
        request.status = status;
    }

    client.update_task(&id, &request).await?;
    msg_success!(Message::TaskUpdated);
    Ok(())
}

async fn handle_delete(id: String, yes: bool) -> Result<()> {
    let (_, client) = client()?;
    if !yes {
        let task = client.task(&id).await?;
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.title).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            return Ok(());
        }
    }

    client.delete_task(&id).await?;
    msg_success!(Message::TaskDeleted);
    Ok(())
}
