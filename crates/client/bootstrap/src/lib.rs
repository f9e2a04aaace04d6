//! Shared bootstrap utilities for client front-ends.
//!
//! Provides configuration loading, platform directories, and session setup
//! that can be reused by CLI, UI, or other front-end crates.
pub mod builder;
pub mod config;
pub mod dirs;

pub use builder::{RuntimeBuilder, RuntimeSetup};
pub use config::{RuntimeConfig, StorageKind};
