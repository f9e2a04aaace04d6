//! Builds the repository and session used by front-ends.
use std::sync::Arc;

use anyhow::{Context, Result};
use runtime::{FileGameRepository, GameRepository, GameSession, InMemoryGameRepository};

use crate::config::{RuntimeConfig, StorageKind};

/// Builder that assembles storage and the game session for clients.
#[derive(Default)]
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    repository: Option<Arc<dyn GameRepository>>,
}

impl RuntimeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide a custom repository instead of the configured storage.
    pub fn repository(mut self, repository: Arc<dyn GameRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    pub fn build(self) -> Result<RuntimeSetup> {
        let repository = match self.repository {
            Some(repository) => repository,
            None => open_repository(&self.config)?,
        };

        Ok(RuntimeSetup {
            session: GameSession::new(repository.clone()),
            repository,
            config: self.config,
        })
    }
}

fn open_repository(config: &RuntimeConfig) -> Result<Arc<dyn GameRepository>> {
    match config.storage {
        StorageKind::File => {
            let dir = config.games_dir();
            let repository = FileGameRepository::new(&dir)
                .with_context(|| format!("Failed to open game directory {}", dir.display()))?;
            tracing::info!("Storing games in {}", dir.display());
            Ok(Arc::new(repository))
        }
        StorageKind::Memory => {
            tracing::info!("Storing games in memory; nothing will be saved");
            Ok(Arc::new(InMemoryGameRepository::new()))
        }
    }
}

pub struct RuntimeSetup {
    pub config: RuntimeConfig,
    pub repository: Arc<dyn GameRepository>,
    pub session: GameSession,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_storage_creates_games_directory() {
        let dir = TempDir::new().unwrap();
        let config = RuntimeConfig {
            data_dir: Some(dir.path().to_path_buf()),
            ..RuntimeConfig::default()
        };

        let setup = RuntimeBuilder::new().config(config).build().unwrap();

        assert!(dir.path().join("games").is_dir());
        assert!(Arc::ptr_eq(setup.session.repository(), &setup.repository));
    }

    #[test]
    fn injected_repository_wins() {
        let repository: Arc<dyn GameRepository> = Arc::new(InMemoryGameRepository::new());
        let setup = RuntimeBuilder::new()
            .repository(repository.clone())
            .build()
            .unwrap();
        assert!(Arc::ptr_eq(&setup.repository, &repository));
    }
}
