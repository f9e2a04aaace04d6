//! Bowling legality rules.
//!
//! - [`throw`]: turns a user token into a pin count for the rack in front of
//!   the bowler
//! - [`frame`]: checks a fully specified frame, used when correcting a
//!   previously recorded frame
//! - [`error`]: rejection reasons for both

pub mod error;
pub mod frame;
pub mod throw;

pub use error::{FrameError, ThrowParseError};
pub use frame::{FrameCorrection, is_valid_frame, parse_correction, verify_frame};
pub use throw::parse_throw;
