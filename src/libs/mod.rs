//! Core library modules of the okr client.
//!
//! - **Time references**: [`time_ref`] and the injectable [`clock`]
//! - **Infrastructure**: configuration, data directory, encrypted secrets,
//!   logging and user messages
//! - **Presentation**: text formatting and terminal tables

pub mod clock;
pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod logger;
pub mod messages;
pub mod secret;
pub mod time_ref;
pub mod view;
