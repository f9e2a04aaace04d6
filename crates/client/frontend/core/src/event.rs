//! Translation of session events into user-facing messages.
use runtime::SessionEvent;

use crate::config::FrontendConfig;
use crate::format::{banner, scoreboard};
use crate::message::MessageEntry;

/// Messages a frontend should show for `event`, in display order.
///
/// Accepted throws produce nothing; the next prompt already shows progress.
pub fn describe_event(event: &SessionEvent, config: &FrontendConfig) -> Vec<MessageEntry> {
    match event {
        SessionEvent::GameStarted { key } => {
            let title = format!(
                "Date: {}, Game Number: {}",
                key.date.format(&config.date_format),
                key.game
            );
            vec![MessageEntry::info(banner(&title, config.banner_width, '='))]
        }
        SessionEvent::ThrowAccepted { .. } => Vec::new(),
        SessionEvent::ThrowRejected { input, error } => {
            vec![MessageEntry::warning(format!(
                "Invalid Input: '{}' ({error})",
                input.trim()
            ))]
        }
        SessionEvent::FrameCompleted {
            throws, scorecard, ..
        } => vec![MessageEntry::info(scoreboard(
            throws,
            &scorecard.running_totals,
        ))],
        SessionEvent::CorrectionApplied {
            frame,
            throws,
            scorecard,
        } => vec![
            MessageEntry::info(format!("Frame {frame} updated")),
            MessageEntry::info(scoreboard(throws, &scorecard.running_totals)),
        ],
        SessionEvent::CorrectionRejected { input, error } => {
            vec![MessageEntry::warning(format!(
                "Invalid Input: '{}' ({error})",
                input.trim()
            ))]
        }
        SessionEvent::GameCompleted { record } => {
            let score = record
                .final_score()
                .map(|score| score.to_string())
                .unwrap_or_else(|| "---".to_string());
            vec![MessageEntry::info(format!("Game Complete: {score}"))]
        }
        SessionEvent::GameAborted { .. } => vec![MessageEntry::info("Game Incomplete")],
    }
}
