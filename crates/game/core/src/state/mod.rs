//! Game data model.
//!
//! The canonical stored form of a game is the flat [`ThrowLog`]. Frame views
//! ([`FrameKind`], [`FrameThrows`]) are derived from it on demand, and
//! [`EntryState`] tracks where live entry currently is.

mod entry;
mod frame;
mod throw_log;

pub use entry::{BonusFlags, EntryState};
pub use frame::{FrameKind, FrameThrows};
pub use throw_log::ThrowLog;
