use super::client;
use crate::libs::{time_ref::TimeScale, view::View};
use anyhow::Result;
use chrono::Datelike;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct PlanArgs {
    #[command(subcommand)]
    command: PlanCommand,
}

#[derive(Debug, Subcommand)]
enum PlanCommand {
    /// Plan for an explicit period
    View {
        /// Time scale of the reference
        #[arg(short, long, value_enum)]
        scale: TimeScale,
        /// Period reference such as 2025-Q3, 2025-07 or 2025-W28
        #[arg(short, long = "time-ref")]
        time_ref: String,
    },
    /// Plan for today
    Today,
    /// Plan for the current week
    Week,
    /// Plan for the current month
    Month,
    /// Plan for the current quarter
    Quarter,
    /// Plan for the current year
    Year,
    /// Plan for a quarter of a year
    Quarterly {
        /// Year, defaults to the current one
        #[arg(short, long)]
        year: Option<i32>,
        /// Quarter number 1-4
        #[arg(short, long)]
        quarter: u32,
    },
    /// Plan for a month of a year
    Monthly {
        /// Year, defaults to the current one
        #[arg(short, long)]
        year: Option<i32>,
        /// Month number 1-12
        #[arg(short, long)]
        month: u32,
    },
}

pub async fn cmd(args: PlanArgs) -> Result<()> {
    let (config, client) = client()?;
    let this_year = client.now().year();

    let plan = match args.command {
        PlanCommand::View { scale, time_ref } => client.plan_view(scale, &time_ref).await?,
        PlanCommand::Today => client.current_plan_view(TimeScale::Day).await?,
        PlanCommand::Week => client.current_plan_view(TimeScale::Week).await?,
        PlanCommand::Month => client.current_plan_view(TimeScale::Month).await?,
        PlanCommand::Quarter => client.current_plan_view(TimeScale::Quarter).await?,
        PlanCommand::Year => client.current_plan_view(TimeScale::Year).await?,
        PlanCommand::Quarterly { year, quarter } => {
            client.plan_view_for_quarter(year.unwrap_or(this_year), quarter).await?
        }
        PlanCommand::Monthly { year, month } => client.plan_view_for_month(year.unwrap_or(this_year), month).await?,
    };

    View::plan(&plan, config.display().journal_preview)
}
