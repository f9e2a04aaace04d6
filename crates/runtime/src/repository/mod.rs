//! Repository layer for bowled games.
//!
//! Repositories are the persistence collaborator of the scoring core: they
//! accept a throw-log keyed by date and game number plus its running totals.

mod error;
mod file;
mod memory;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use file::FileGameRepository;
pub use memory::InMemoryGameRepository;
pub use traits::GameRepository;
pub use types::{GameKey, GameRecord};
