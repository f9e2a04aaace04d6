//! Session events and their observers.
//!
//! A running session reports what happened to each input through a
//! [`SessionObserver`], so a front end can redraw its scoreboard without the
//! session knowing how it is displayed.

mod observer;
mod types;

pub use observer::{NullObserver, RecordingObserver, SessionObserver};
pub use types::{SessionEvent, Topic};
