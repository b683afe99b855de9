//! Per-user application data directory.
//!
//! Configuration and the encrypted auth token live here:
//! - **Windows**: `%LOCALAPPDATA%\luna-dial\okr`
//! - **macOS**: `~/Library/Application Support/luna-dial/okr`
//! - **Linux**: `~/.local/share/luna-dial/okr`

use anyhow::Result;
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::{Path, PathBuf};

pub const VENDOR_NAME: &str = "luna-dial";
pub const APP_NAME: &str = "okr";

#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };
        let base_path = Path::new(&base_path).join(VENDOR_NAME).join(APP_NAME);

        Self { base_path }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of `file_name` inside the data directory, creating the directory on first use.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }

    /// Removes `file_name` if present. A missing file is not an error.
    pub fn remove(&self, file_name: &str) -> Result<()> {
        let path = self.base_path.join(file_name);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
