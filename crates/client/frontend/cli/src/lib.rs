//! Line-oriented terminal frontend for bowling score entry.
//!
//! This crate implements the `client_frontend_core::Frontend` trait with a
//! prompt-driven command loop on stdin/stdout.
//!
//! # Architecture
//!
//! CliFrontend is a pure UI layer that:
//! - Receives a GameSession for entry and storage access
//! - Does NOT choose the repository
//! - Prints session events as they arrive through a channel

mod app;
mod command;
mod config;
mod dates;
mod input;
pub mod logging;

pub use app::{CliApp, CliFrontend};
pub use command::{Command, CommandKind, InvalidCommand};
pub use config::CliConfig;
pub use dates::parse_date;
pub use input::Console;

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
