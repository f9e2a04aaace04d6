//! Cross-frontend primitives for presenting bowling games.
//!
//! Houses configuration, score formatting, and the translation of session
//! events into user-facing messages that both the CLI and future graphical
//! clients can reuse.
pub mod config;
pub mod event;
pub mod format;
pub mod frontend;
pub mod message;

pub use config::FrontendConfig;
pub use event::describe_event;
pub use frontend::Frontend;
pub use message::{MessageEntry, MessageLevel};
