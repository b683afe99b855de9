pub mod init;
pub mod journal;
pub mod login;
pub mod logout;
pub mod me;
pub mod plan;
pub mod stats;
pub mod task;

use crate::api::OkrClient;
use crate::libs::config::Config;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Log in to the OKR server")]
    Login(login::LoginArgs),
    #[command(about = "Log out and forget the stored token")]
    Logout,
    #[command(about = "Show the current user")]
    Me,
    #[command(about = "Plan views by period", arg_required_else_help = true)]
    Plan(plan::PlanArgs),
    #[command(about = "Score trend statistics", arg_required_else_help = true)]
    Stats(stats::StatsArgs),
    #[command(about = "Manage tasks", arg_required_else_help = true)]
    Task(task::TaskArgs),
    #[command(about = "Manage journal entries", arg_required_else_help = true)]
    Journal(journal::JournalArgs),
}

#[derive(Debug, Parser)]
#[command(name = "okr", author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Login(args) => login::cmd(args).await,
            Commands::Logout => logout::cmd().await,
            Commands::Me => me::cmd().await,
            Commands::Plan(args) => plan::cmd(args).await,
            Commands::Stats(args) => stats::cmd(args).await,
            Commands::Task(args) => task::cmd(args).await,
            Commands::Journal(args) => journal::cmd(args).await,
        }
    }
}

/// Loads the configuration and builds an API client from it.
pub(crate) fn client() -> Result<(Config, OkrClient)> {
    let config = Config::read()?;
    let client = OkrClient::new(&config)?;
    Ok((config, client))
}
