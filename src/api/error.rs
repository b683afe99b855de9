//! Error types for OKR API operations.

use crate::libs::time_ref::TimeRefError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The server answered with an error message.
    #[error("API error: {0}")]
    Api(String),

    /// The server answered with an error status and no readable message.
    #[error("HTTP error: {0}")]
    Http(reqwest::StatusCode),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Not logged in, run `okr login` first")]
    NotLoggedIn,

    #[error("Score must be between {min} and {max}, got {score}")]
    InvalidScore { score: i32, min: i32, max: i32 },

    #[error("Failed to load plan view: {0}")]
    PlanView(String),

    #[error("Failed to load score trend: {0}")]
    ScoreTrend(String),

    #[error("Failed to create task: {0}")]
    TaskCreation(String),

    #[error(transparent)]
    TimeRef(#[from] TimeRefError),

    #[error("Token storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;
