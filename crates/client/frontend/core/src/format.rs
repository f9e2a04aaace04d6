//! Text rendering of scorecards and stored games.
//!
//! Marks follow the usual score-sheet conventions: `x` strike, `/` spare,
//! `-` no pins, digits otherwise. Running totals that cannot be computed yet
//! render as `---`.

use bowling_core::{GameConfig, RunningTotals, ThrowLog};
use runtime::GameRecord;

use crate::config::FrontendConfig;

const FRAME_CELL: usize = 6;
const LAST_FRAME_CELL: usize = 9;

/// Centers ` text ` in `width` columns, padding with `fill`.
pub fn banner(text: &str, width: usize, fill: char) -> String {
    let text = format!(" {text} ");
    let len = text.chars().count();
    if len >= width {
        return text;
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    let mut line = String::with_capacity(width);
    line.extend(std::iter::repeat_n(fill, left));
    line.push_str(&text);
    line.extend(std::iter::repeat_n(fill, right));
    line
}

/// Score-sheet marks for the throws recorded in `frame`.
pub fn frame_marks(log: &ThrowLog, frame: u8) -> Vec<char> {
    let mut marks = Vec::new();
    let mut fresh = true;
    let mut standing = GameConfig::PINS;

    for pins in log.frame_throws(frame) {
        let mark = if fresh && pins == GameConfig::PINS {
            'x'
        } else if !fresh && pins == standing {
            fresh = true;
            standing = GameConfig::PINS;
            '/'
        } else {
            if fresh {
                fresh = false;
                standing = standing.saturating_sub(pins);
            } else {
                fresh = true;
                standing = GameConfig::PINS;
            }
            match pins {
                0 => '-',
                pins => char::from_digit(u32::from(pins), 10).unwrap_or('?'),
            }
        };
        marks.push(mark);
    }

    marks
}

fn frame_cell(log: &ThrowLog, frame: u8) -> String {
    let marks: Vec<String> = frame_marks(log, frame)
        .into_iter()
        .map(String::from)
        .collect();
    let width = if frame == GameConfig::LAST_FRAME {
        LAST_FRAME_CELL
    } else {
        FRAME_CELL
    };
    format!("{:<width$}", marks.join("  "))
}

fn frames_section(log: &ThrowLog) -> String {
    (1..=GameConfig::FRAMES)
        .map(|frame| frame_cell(log, frame))
        .collect()
}

fn totals_section(totals: &RunningTotals) -> String {
    totals
        .iter()
        .map(|total| match total {
            Some(total) => format!("{total:>3}"),
            None => "---".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Marks and running totals for one game, without date or game number.
pub fn scoreboard(log: &ThrowLog, totals: &RunningTotals) -> String {
    format!("| {}| {}", frames_section(log), totals_section(totals))
}

/// Column header matching [`game_row`].
pub fn game_table_header() -> String {
    let frames: String = (1..=GameConfig::FRAMES)
        .map(|frame| {
            if frame == GameConfig::LAST_FRAME {
                format!("{frame:<width$}", width = LAST_FRAME_CELL)
            } else {
                format!("{frame:<width$}", width = FRAME_CELL)
            }
        })
        .collect();
    let totals = (1..=GameConfig::FRAMES)
        .map(|frame| format!("{frame:>3}"))
        .collect::<Vec<_>>()
        .join(" ");
    format!("{:8} {:4} {:4} | {frames}| {totals}", "Date", "Game", "Scre")
}

/// One printed row per stored game.
pub fn game_row(record: &GameRecord, config: &FrontendConfig) -> String {
    let score = record
        .final_score()
        .map(|score| score.to_string())
        .unwrap_or_default();
    format!(
        "{:8} {:>4} {:>4} {}",
        record.key.date.format(&config.date_format),
        record.key.game,
        score,
        scoreboard(&record.throws, &record.totals)
    )
}

/// Header, rule, and one row per game.
pub fn game_table(records: &[GameRecord], config: &FrontendConfig) -> String {
    let header = game_table_header();
    let mut lines = vec![header.clone(), "=".repeat(header.len())];
    lines.extend(records.iter().map(|record| game_row(record, config)));
    lines.join("\n")
}
