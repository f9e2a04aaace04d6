//! Commands accepted at the top-level prompt.

use chrono::NaiveDate;
use runtime::GameKey;
use thiserror::Error;

use crate::dates::parse_date;

/// The letter that starts each command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter)]
pub enum CommandKind {
    #[strum(serialize = "n")]
    New,
    #[strum(serialize = "m")]
    Modify,
    #[strum(serialize = "p")]
    Print,
    #[strum(serialize = "d")]
    Delete,
    #[strum(serialize = "q")]
    Quit,
    #[strum(serialize = "?")]
    Help,
}

impl CommandKind {
    pub const fn summary(self) -> &'static str {
        match self {
            Self::New => "new game",
            Self::Modify => "modify game",
            Self::Print => "print game",
            Self::Delete => "delete game",
            Self::Quit => "quit",
            Self::Help => "print this menu",
        }
    }

    pub const fn usage(self) -> &'static str {
        match self {
            Self::New => "n <date optional>",
            Self::Modify => "m <date> <game>",
            Self::Print => "p <date optional> <game optional>",
            Self::Delete => "d <date> <game>",
            Self::Quit => "q",
            Self::Help => "? <cmd optional>",
        }
    }
}

/// A parsed top-level command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Enter a new game; today when no date is given.
    New { date: Option<NaiveDate> },
    /// Correct frames of a stored game.
    Modify { key: GameKey },
    /// Print the games of a date, or a single game.
    Print {
        date: Option<NaiveDate>,
        game: Option<u32>,
    },
    Delete { key: GameKey },
    Help { topic: Option<CommandKind> },
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Invalid Input: '{line}'")]
pub struct InvalidCommand {
    pub line: String,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, InvalidCommand> {
        let invalid = || InvalidCommand {
            line: line.trim().to_string(),
        };

        let mut tokens = line.split_whitespace();
        let kind: CommandKind = tokens
            .next()
            .and_then(|token| token.parse().ok())
            .ok_or_else(invalid)?;
        let args: Vec<&str> = tokens.collect();

        let date = |token: &str| parse_date(token).ok_or_else(invalid);
        let game = |token: &str| {
            token
                .parse::<u32>()
                .ok()
                .filter(|game| *game > 0)
                .ok_or_else(invalid)
        };

        let command = match (kind, args.as_slice()) {
            (CommandKind::Quit, _) => Self::Quit,
            (CommandKind::Help, args) => Self::Help {
                topic: args.first().and_then(|topic| topic.parse().ok()),
            },
            (CommandKind::New, []) => Self::New { date: None },
            (CommandKind::New, [day]) => Self::New {
                date: Some(date(day)?),
            },
            (CommandKind::Modify, [day, number]) => Self::Modify {
                key: GameKey::new(date(day)?, game(number)?),
            },
            (CommandKind::Print, []) => Self::Print {
                date: None,
                game: None,
            },
            (CommandKind::Print, [day]) => Self::Print {
                date: Some(date(day)?),
                game: None,
            },
            (CommandKind::Print, [day, number]) => Self::Print {
                date: Some(date(day)?),
                game: Some(game(number)?),
            },
            (CommandKind::Delete, [day, number]) => Self::Delete {
                key: GameKey::new(date(day)?, game(number)?),
            },
            _ => return Err(invalid()),
        };

        Ok(command)
    }
}
