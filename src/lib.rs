//! # okr - OKR planning client
//!
//! Command-line client and SDK for an OKR tracking service. Tasks, journal
//! entries, plan views and score trends are all addressed by compact time
//! references such as `2025`, `2025-Q3`, `2025-07`, `2025-W28` or
//! `2025-07-15`.
//!
//! ## Features
//!
//! - **Time references**: validation and resolution of period tokens into
//!   concrete intervals, see [`libs::time_ref`]
//! - **API client**: typed access to tasks, journals, plans and statistics,
//!   see [`api::OkrClient`]
//! - **CLI**: `okr plan`, `okr stats`, `okr task` and `okr journal` commands
//!
//! ## Usage
//!
//! ```rust,no_run
//! use okr::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
