use super::client;
use crate::libs::{time_ref::TimeScale, view::View};
use anyhow::Result;
use chrono::Datelike;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct StatsArgs {
    #[command(subcommand)]
    command: StatsCommand,
}

#[derive(Debug, Subcommand)]
enum StatsCommand {
    /// Score trend for an explicit period
    Trend {
        /// Time scale of the reference
        #[arg(short, long, value_enum)]
        scale: TimeScale,
        /// Period reference such as 2025-Q3, 2025-07 or 2025-W28
        #[arg(short, long = "time-ref")]
        time_ref: String,
    },
    /// Score trend for today
    Today,
    /// Score trend for the current week
    Week,
    /// Score trend for the current month
    Month,
    /// Score trend for the current quarter
    Quarter,
    /// Score trend for the current year
    Year,
    /// Score trend across a quarter
    QuarterlyTrend {
        #[arg(short, long)]
        year: Option<i32>,
        #[arg(short, long)]
        quarter: u32,
    },
    /// Score trend across a month
    MonthlyTrend {
        #[arg(short, long)]
        year: Option<i32>,
        #[arg(short, long)]
        month: u32,
    },
}

pub async fn cmd(args: StatsArgs) -> Result<()> {
    let (_, client) = client()?;
    let this_year = client.now().year();

    let trend = match args.command {
        StatsCommand::Trend { scale, time_ref } => client.score_trend(scale, &time_ref).await?,
        StatsCommand::Today => client.current_score_trend(TimeScale::Day).await?,
        StatsCommand::Week => client.current_score_trend(TimeScale::Week).await?,
        StatsCommand::Month => client.current_score_trend(TimeScale::Month).await?,
        StatsCommand::Quarter => client.current_score_trend(TimeScale::Quarter).await?,
        StatsCommand::Year => client.current_score_trend(TimeScale::Year).await?,
        StatsCommand::QuarterlyTrend { year, quarter } => {
            client.quarterly_score_trend(year.unwrap_or(this_year), quarter).await?
        }
        StatsCommand::MonthlyTrend { year, month } => {
            client.monthly_score_trend(year.unwrap_or(this_year), month).await?
        }
    };

    View::score_trend(&trend)
}
