//! OKR API client.
//!
//! Provides the typed SDK for the remote OKR tracker: authentication, tasks,
//! journal entries, plan views and score trends.
//!
//! ## Features
//!
//! - **Session**: bearer token persisted encrypted in the data directory
//! - **Time references**: plan and trend queries take `(scale, reference)`
//!   pairs validated locally before any request is sent
//! - **Convenience methods**: "this week"/"this quarter" shortcuts and
//!   `(year, n)` helpers built on [`crate::libs::time_ref`]
//!
//! ## Usage
//!
//! ```rust,no_run
//! use okr::api::OkrClient;
//! use okr::libs::{config::Config, time_ref::TimeScale};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let client = OkrClient::new(&Config::read()?)?;
//! let plan = client.plan_view(TimeScale::Quarter, "2024-Q4").await?;
//! println!("{} tasks", plan.stats.total_tasks);
//! # Ok(())
//! # }
//! ```

use crate::libs::secret::Secret;
use anyhow::Result;

pub mod error;
pub mod models;
pub mod okr;

pub use error::ApiError;
pub use okr::OkrClient;

/// Token persistence shared by API clients.
///
/// Implementors only name the file; reading, writing and clearing the
/// encrypted token are provided.
pub trait Session {
    /// File name of the encrypted token inside the data directory.
    fn token_file(&self) -> &str;

    fn secret(&self) -> Secret {
        Secret::new(self.token_file())
    }

    /// Stored token, or `None` when absent or unreadable.
    fn load_token(&self) -> Option<String> {
        self.secret().read().ok().filter(|token| !token.is_empty())
    }

    fn store_token(&self, token: &str) -> Result<()> {
        self.secret().write(token)
    }

    fn clear_token(&self) -> Result<()> {
        self.secret().delete()
    }
}
