//! Ten-pin bowling rules, entry state machine, and scoring.
//!
//! `bowling-core` defines the canonical rules and exposes pure APIs that the
//! runtime, front ends, and offline tools share. Live entry flows through
//! [`engine::GameEngine`]; stored games are scored with [`scoring`].
//!
//! - [`rules`]: throw token parsing and full-frame validation
//! - [`engine`]: frame/throw/pins state machine for live entry
//! - [`scoring`]: frame scores and running totals from a throw-log
//! - [`state`]: throw-log and entry state data model
//!
//! # Example
//!
//! ```
//! use bowling_core::{GameEngine, ThrowOutcome};
//!
//! let mut engine = GameEngine::start();
//! for token in ["5", "/", "x", "3", "4"] {
//!     engine.submit_throw(token).unwrap();
//! }
//!
//! let card = engine.scorecard();
//! assert_eq!(card.running_totals[..3], [Some(20), Some(37), Some(44)]);
//! assert!(matches!(engine.submit_throw("11").unwrap(), ThrowOutcome::Invalid(_)));
//! ```
pub mod config;
pub mod engine;
pub mod error;
pub mod rules;
pub mod scoring;
pub mod state;

pub use config::GameConfig;
pub use engine::{
    CorrectionError, EngineError, EntryCommand, GameEngine, GameStatus, ThrowOutcome,
};
pub use error::{ErrorSeverity, GameError};
pub use rules::{
    FrameCorrection, FrameError, ThrowParseError, is_valid_frame, parse_correction, parse_throw,
    verify_frame,
};
pub use scoring::{
    FrameScores, IncompleteScore, RunningTotals, Scorecard, frame_scores, running_totals,
    scorecard,
};
pub use state::{BonusFlags, EntryState, FrameKind, FrameThrows, ThrowLog};
