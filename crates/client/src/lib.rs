//! Top-level client orchestrating the session and frontend layers.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ GameSession (entry engine + repository)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! The binary is the composition root: it loads configuration, picks the
//! repository through `client-bootstrap`, and injects both layers here.

mod builder;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use anyhow::Result;
use runtime::GameSession;

/// Top-level client container.
pub struct Client {
    session: GameSession,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Transfers control to the frontend until the user quits.
    pub fn run(self) -> Result<()> {
        let mut frontend = self.frontend;
        frontend.run(self.session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use runtime::{GameRepository, InMemoryGameRepository, NullObserver, ScriptedInput};

    struct ScriptedFrontend {
        played: Arc<Mutex<Option<u16>>>,
    }

    impl Frontend for ScriptedFrontend {
        fn run(&mut self, session: GameSession) -> Result<()> {
            let date = chrono::NaiveDate::from_ymd_opt(2023, 1, 25).unwrap();
            let mut input = ScriptedInput::new(["9", "/"].repeat(10).into_iter().chain(["9"]));
            let outcome = session.play(date, &mut input, &mut NullObserver)?;
            if let runtime::SessionOutcome::Completed(record) = outcome {
                *self.played.lock().unwrap() = record.final_score();
            }
            Ok(())
        }
    }

    #[test]
    fn build_requires_both_layers() {
        assert!(Client::builder().build().is_err());

        let repository = Arc::new(InMemoryGameRepository::new());
        assert!(
            Client::builder()
                .session(GameSession::new(repository))
                .build()
                .is_err()
        );
    }

    #[test]
    fn run_hands_session_to_frontend() {
        let repository = Arc::new(InMemoryGameRepository::new());
        let played = Arc::new(Mutex::new(None));

        Client::builder()
            .session(GameSession::new(repository.clone()))
            .frontend(ScriptedFrontend {
                played: played.clone(),
            })
            .build()
            .unwrap()
            .run()
            .unwrap();

        assert_eq!(*played.lock().unwrap(), Some(190));
        let date = chrono::NaiveDate::from_ymd_opt(2023, 1, 25).unwrap();
        assert_eq!(repository.games_played(date).unwrap(), 1);
    }
}
