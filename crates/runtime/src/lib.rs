//! Session orchestration and persistence for bowling score entry.
//!
//! This crate wires the pure scoring core to the outside world: repositories
//! store games, input providers feed user lines, and observers receive what
//! happened. Front ends embed [`GameSession`] to enter games and use [`edit`]
//! to work with games already stored.
//!
//! Modules are organized by responsibility:
//! - [`session`] drives the entry engine for one game
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] reports session progress to observers
//! - [`repository`] persists game records
pub mod api;
pub mod edit;
pub mod events;
pub mod repository;
pub mod session;

pub use api::{InputFn, InputProvider, Prompt, Result, RuntimeError, ScriptedInput};
pub use events::{NullObserver, RecordingObserver, SessionEvent, SessionObserver, Topic};
pub use repository::{
    FileGameRepository, GameKey, GameRecord, GameRepository, InMemoryGameRepository,
    RepositoryError,
};
pub use session::{GameSession, SessionOutcome};
