//! Configuration management for the okr client.
//!
//! The configuration is a small JSON document stored in the application data
//! directory. Every section is optional so a fresh install works without any
//! setup: the API base URL falls back to `OKR_API_BASE_URL` and then to
//! [`DEFAULT_API_URL`].
//!
//! ## Sections
//!
//! - **Server**: base URL of the OKR API and the request timeout
//! - **Display**: page size for list commands and how many journal previews
//!   the plan view shows
//!
//! ## Usage
//!
//! ```rust,no_run
//! use okr::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("API: {}", config.api_url());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment variable that overrides the configured API base URL.
pub const API_URL_ENV: &str = "OKR_API_BASE_URL";

pub const DEFAULT_API_URL: &str = "http://localhost:8081/api";

/// A configurable section offered by the `init` wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Base URL of the OKR API, e.g. `https://okr.example.com/api`.
    pub api_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

fn default_timeout() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: default_timeout(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DisplayConfig {
    /// Number of items requested by `task list` and `journal list`.
    pub page_size: u32,
    /// Maximum number of journal entries previewed in the plan view.
    pub journal_preview: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            page_size: 20,
            journal_preview: 5,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayConfig>,
}

impl Config {
    /// Reads the configuration file, returning defaults when none exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        msg_debug!(format!("reading configuration from {}", config_file_path.display()));
        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn delete() -> Result<()> {
        DataStorage::new().remove(CONFIG_FILE_NAME)
    }

    /// Effective API base URL: environment override, then config, then default.
    pub fn api_url(&self) -> String {
        if let Ok(url) = env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                return url.trim().to_string();
            }
        }
        self.server
            .as_ref()
            .map(|server| server.api_url.clone())
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    pub fn timeout(&self) -> u64 {
        self.server.as_ref().map(|server| server.timeout).unwrap_or_else(default_timeout)
    }

    pub fn display(&self) -> DisplayConfig {
        self.display.clone().unwrap_or_default()
    }

    /// Runs the interactive setup wizard, starting from the saved values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "server".to_string(),
                name: Message::ConfigModuleServer.to_string(),
            },
            ConfigModule {
                key: "display".to_string(),
                name: Message::ConfigModuleDisplay.to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "server" => {
                    let default = config.server.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleServer);
                    config.server = Some(ServerConfig {
                        api_url: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptServerApiUrl.to_string())
                            .default(default.api_url)
                            .interact_text()?,
                        timeout: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptServerTimeout.to_string())
                            .default(default.timeout)
                            .interact_text()?,
                    });
                }
                "display" => {
                    let default = config.display.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleDisplay);
                    config.display = Some(DisplayConfig {
                        page_size: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptPageSize.to_string())
                            .default(default.page_size)
                            .interact_text()?,
                        journal_preview: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptJournalPreview.to_string())
                            .default(default.journal_preview)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
