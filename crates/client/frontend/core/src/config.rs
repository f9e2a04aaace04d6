//! Frontend configuration structures and loaders.
//!
//! This module contains display settings that are shared across different
//! frontend implementations (CLI, GUI, etc.).

use std::env;
use std::fmt::Write;

use chrono::NaiveDate;

/// Frontend-specific configuration.
#[derive(Clone, Debug)]
pub struct FrontendConfig {
    /// Width that banners are centered in.
    pub banner_width: usize,
    /// `chrono` format string used when showing game dates.
    pub date_format: String,
    /// Settings that were rejected while loading, for logging once a
    /// subscriber is installed.
    pub warnings: Vec<String>,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            banner_width: 60,
            date_format: "%m/%d/%y".to_string(),
            warnings: Vec::new(),
        }
    }
}

impl FrontendConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BOWLING_BANNER_WIDTH` - Banner width in columns (default: 60)
    /// - `BOWLING_DATE_FORMAT` - Date format for printed games (default: `%m/%d/%y`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(width) = read_env::<usize>("BOWLING_BANNER_WIDTH") {
            config.banner_width = width.max(20);
        }

        if let Ok(format) = env::var("BOWLING_DATE_FORMAT") {
            config = config.with_date_format(format);
        }

        config
    }

    /// Uses `format` for dates if it can render a calendar date, otherwise
    /// keeps the current format and records a warning.
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        let format = format.into();
        if is_valid_date_format(&format) {
            self.date_format = format;
        } else {
            self.warnings.push(format!(
                "Invalid BOWLING_DATE_FORMAT '{format}'; using '{}'",
                self.date_format
            ));
        }
        self
    }
}

/// Whether `format` renders a [`NaiveDate`] without error.
///
/// Unknown specifiers and time fields (`%H`, `%S`, ...) both fail here, so
/// they are caught before any date is printed.
pub fn is_valid_date_format(format: &str) -> bool {
    if format.trim().is_empty() {
        return false;
    }
    let Some(sample) = NaiveDate::from_ymd_opt(2023, 1, 25) else {
        return false;
    };
    let mut rendered = String::new();
    write!(rendered, "{}", sample.format(format)).is_ok()
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
