//! Trait describing a runnable client front-end.
use anyhow::Result;
use runtime::GameSession;

/// Frontend abstraction for UI layers.
///
/// Frontends talk to storage only through the [`GameSession`] they are
/// given and the repository it exposes. They do not choose the repository.
///
/// # Implementations
///
/// - `CliFrontend`: line-oriented terminal UI
///
/// # Example Implementation
///
/// ```no_run
/// use anyhow::Result;
/// use client_frontend_core::Frontend;
/// use runtime::{GameSession, NullObserver, ScriptedInput};
///
/// struct ReplayFrontend;
///
/// impl Frontend for ReplayFrontend {
///     fn run(&mut self, session: GameSession) -> Result<()> {
///         let today = chrono::Local::now().date_naive();
///         let mut input = ScriptedInput::new(["x"; 12]);
///         session.play(today, &mut input, &mut NullObserver)?;
///         Ok(())
///     }
/// }
/// ```
pub trait Frontend: Send {
    /// Run the frontend until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error, such as a
    /// broken terminal or an unreadable repository.
    fn run(&mut self, session: GameSession) -> Result<()>;
}
