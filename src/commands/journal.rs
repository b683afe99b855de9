use super::client;
use crate::{
    api::models::{EntryType, JournalEntry, JournalQuery, JournalRequest, TimeRange},
    libs::{
        messages::Message,
        time_ref::{self, TimeScale},
        view::View,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

#[derive(Debug, Args)]
pub struct JournalArgs {
    #[command(subcommand)]
    command: JournalCommand,
}

#[derive(Debug, Subcommand)]
enum JournalCommand {
    /// List journal entries
    List {
        #[arg(short, long, value_enum)]
        scale: Option<TimeScale>,
        /// Only entries written on this day (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<NaiveDate>,
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// Write a journal entry
    Create {
        /// Entry text, prompted for when omitted
        #[arg(short, long)]
        content: Option<String>,
        #[arg(short, long, value_enum, default_value = "day")]
        scale: TimeScale,
        /// Period the entry belongs to, the current one by default
        #[arg(short, long = "time-ref")]
        time_ref: Option<String>,
        #[arg(short = 'e', long = "type", value_enum, default_value = "reflection")]
        entry_type: EntryType,
    },
    /// Edit a journal entry
    Edit {
        id: String,
        #[arg(short, long)]
        content: Option<String>,
        #[arg(short = 'e', long = "type", value_enum)]
        entry_type: Option<EntryType>,
    },
    /// Delete a journal entry
    Delete {
        id: String,
        #[arg(short, long)]
        yes: bool,
    },
    /// Entries written for one period
    ByTime {
        #[arg(short, long, value_enum)]
        scale: TimeScale,
        #[arg(short, long = "time-ref")]
        time_ref: String,
    },
}

pub async fn cmd(args: JournalArgs) -> Result<()> {
    match args.command {
        JournalCommand::List { scale, date, page } => {
            let (config, client) = client()?;
            let day = date.map(|date| TimeRange::from(time_ref::day_interval(date)));
            let query = JournalQuery {
                time_scale: scale,
                start_time: day.map(|range| range.start),
                end_time: day.map(|range| range.end),
                page,
                page_size: config.display().page_size,
            };
            let journals = client.journals(&query).await?;
            show(&journals)
        }
        JournalCommand::Create {
            content,
            scale,
            time_ref,
            entry_type,
        } => {
            let content = match content {
                Some(content) => content,
                None => prompt_content(None)?,
            };
            let (_, client) = client()?;
            let request = JournalRequest {
                content,
                time_reference: Some(time_ref.unwrap_or_else(|| client.current_reference(scale))),
                time_scale: scale,
                entry_type,
            };
            let journal = client.create_journal(&request).await?;
            msg_success!(Message::JournalCreated(journal.id));
            Ok(())
        }
        JournalCommand::Edit {
            id,
            content,
            entry_type,
        } => {
            let (_, client) = client()?;
            let journal = client.journal(&id).await?;
            let mut request = JournalRequest::from(&journal);
            request.content = match content {
                Some(content) => content,
                None => prompt_content(Some(journal.content.clone()))?,
            };
            if let Some(entry_type) = entry_type {
                request.entry_type = entry_type;
            }
            client.update_journal(&id, &request).await?;
            msg_success!(Message::JournalUpdated);
            Ok(())
        }
        JournalCommand::Delete { id, yes } => {
            if !yes {
                let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::ConfirmDeleteJournal(id.clone()).to_string())
                    .default(false)
                    .interact()?;
                if !confirmed {
                    return Ok(());
                }
            }
            let (_, client) = client()?;
            client.delete_journal(&id).await?;
            msg_success!(Message::JournalDeleted);
            Ok(())
        }
        JournalCommand::ByTime { scale, time_ref } => {
            let (_, client) = client()?;
            let journals = client.journals_by_time(&time_ref, scale).await?;
            show(&journals)
        }
    }
}

fn show(journals: &[JournalEntry]) -> Result<()> {
    if journals.is_empty() {
        msg_info!(Message::NoJournalsFound);
        return Ok(());
    }
    View::journals(journals)
}

fn prompt_content(current: Option<String>) -> Result<String> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme).with_prompt(Message::PromptJournalContent.to_string());
    if let Some(current) = current {
        input = input.default(current);
    }
    Ok(input.interact_text()?)
}
