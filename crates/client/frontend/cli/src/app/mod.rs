//! Command loop tying the session and the console together.
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use client_frontend_core::format::{banner, game_table};
use client_frontend_core::{Frontend, FrontendConfig};
use runtime::edit::{correct_game, delete_game, find_games, load_game};
use runtime::{GameKey, GameRepository, GameSession, RuntimeError, SessionOutcome};

use crate::command::Command;
use crate::config::CliConfig;
use crate::input::Console;

mod help;
mod observer;

use observer::ConsoleObserver;

/// Terminal frontend reading commands from stdin.
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }
}

impl Frontend for CliFrontend {
    fn run(&mut self, session: GameSession) -> Result<()> {
        let mut app = CliApp::new(
            session,
            self.frontend_config.clone(),
            self.cli_config.clone(),
            io::stdin().lock(),
            io::stdout(),
        );
        app.run()
    }
}

/// The command loop over any line reader and writer.
pub struct CliApp<R, W> {
    session: GameSession,
    console: Console<R, W>,
    observer: ConsoleObserver,
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl<R: BufRead, W: Write> CliApp<R, W> {
    pub fn new(
        session: GameSession,
        frontend_config: FrontendConfig,
        cli_config: CliConfig,
        reader: R,
        writer: W,
    ) -> Self {
        let (console, tx) = Console::new(reader, writer);
        let observer = ConsoleObserver::new(tx, &frontend_config, &cli_config);
        Self {
            session,
            console,
            observer,
            frontend_config,
            cli_config,
        }
    }

    /// Runs until `q` or end of input.
    pub fn run(&mut self) -> Result<()> {
        tracing::info!("CLI frontend starting");
        self.console.print(banner(
            "Bowling Score Tracking",
            self.frontend_config.banner_width,
            '=',
        ))?;

        while let Some(line) = self.console.read_line(&self.cli_config.prompt)? {
            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(error) => {
                    tracing::debug!("Rejected command '{}'", line.trim());
                    self.console.print(error)?;
                    continue;
                }
            };

            if command == Command::Quit {
                self.console.print("Quitting bowling data interface...")?;
                break;
            }
            self.execute(command)?;
        }

        tracing::info!("CLI frontend stopped");
        Ok(())
    }

    pub fn into_writer(self) -> W {
        self.console.into_writer()
    }

    fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::New { date } => self.new_game(date.unwrap_or_else(today)),
            Command::Modify { key } => self.modify_game(key),
            Command::Print { date, game } => self.print_games(date.unwrap_or_else(today), game),
            Command::Delete { key } => self.delete_game(key),
            Command::Help { topic } => {
                self.console
                    .print(help::help_text(topic, self.frontend_config.banner_width))?;
                Ok(())
            }
            Command::Quit => Ok(()),
        }
    }

    fn repository(&self) -> Arc<dyn GameRepository> {
        self.session.repository().clone()
    }

    fn new_game(&mut self, date: NaiveDate) -> Result<()> {
        let outcome = self
            .session
            .play(date, &mut self.console, &mut self.observer)?;
        self.console.flush_messages()?;

        if let SessionOutcome::Completed(record) = outcome {
            self.console
                .print(game_table(&[record], &self.frontend_config))?;
        }
        Ok(())
    }

    fn modify_game(&mut self, key: GameKey) -> Result<()> {
        let repository = self.repository();
        let record = match load_game(repository.as_ref(), key) {
            Ok(record) => record,
            Err(error) => return self.report(error),
        };

        self.console
            .print(game_table(&[record], &self.frontend_config))?;
        self.console.print(
            "Modify> 'Frame Throw_1 Throw_2' or 'Frame Throw_1 Throw_2 Throw_3' (q to go back)",
        )?;

        while let Some(line) = self.console.read_line("Modify")? {
            if line.trim().eq_ignore_ascii_case("q") {
                break;
            }
            match correct_game(repository.as_ref(), key, &line) {
                Ok(record) => {
                    self.console
                        .print(game_table(&[record], &self.frontend_config))?;
                    break;
                }
                Err(RuntimeError::InvalidCorrection(error)) => {
                    tracing::warn!("Rejected correction '{}': {}", line.trim(), error);
                    self.console
                        .print(format!("Invalid Input: '{}' ({error})", line.trim()))?;
                }
                Err(error) => return self.report(error),
            }
        }
        Ok(())
    }

    fn print_games(&mut self, date: NaiveDate, game: Option<u32>) -> Result<()> {
        let records = match find_games(self.repository().as_ref(), date, game) {
            Ok(records) => records,
            Err(error) => return self.report(error),
        };

        if records.is_empty() {
            let date = date.format(&self.frontend_config.date_format);
            self.console.print(format!("No games played on {date}"))?;
        } else {
            self.console
                .print(game_table(&records, &self.frontend_config))?;
        }
        Ok(())
    }

    fn delete_game(&mut self, key: GameKey) -> Result<()> {
        match delete_game(self.repository().as_ref(), key) {
            Ok(()) => {
                let date = key.date.format(&self.frontend_config.date_format);
                self.console
                    .print(format!("Deleted game {} on {date}", key.game))?;
                Ok(())
            }
            Err(error) => self.report(error),
        }
    }

    /// Prints user-caused errors and keeps going; anything else is fatal.
    fn report(&mut self, error: RuntimeError) -> Result<()> {
        if error.is_user_error() {
            self.console.print(&error)?;
            Ok(())
        } else {
            Err(error.into())
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
