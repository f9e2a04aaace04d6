//! CLI-specific configuration for the terminal frontend.
use std::env;

/// CLI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend client configuration.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Prompt shown before each command (`> ` is appended).
    pub prompt: String,
    /// Print the scoreboard after every completed frame.
    pub show_scoreboard: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            prompt: "Bowling (? for help)".to_string(),
            show_scoreboard: true,
        }
    }
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `BOWLING_PROMPT` - Command prompt text (default: `Bowling (? for help)`)
    /// - `BOWLING_SHOW_SCOREBOARD` - Print the scoreboard after each frame (default: true)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(prompt) = env::var("BOWLING_PROMPT")
            && !prompt.trim().is_empty()
        {
            config.prompt = prompt;
        }

        if let Some(show) = read_env_bool("BOWLING_SHOW_SCOREBOARD") {
            config.show_scoreboard = show;
        }

        config
    }
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
