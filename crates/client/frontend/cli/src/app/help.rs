//! Help menu text.

use client_frontend_core::format::banner;
use strum::IntoEnumIterator;

use crate::command::CommandKind;

/// Help for one command, or the command menu when `topic` is `None`.
///
/// The menu banner spans `width` columns, a command's banner half of that.
pub fn help_text(topic: Option<CommandKind>, width: usize) -> String {
    let Some(kind) = topic else {
        let mut lines = vec![banner("Interface Commands", width, '=')];
        lines.extend(
            CommandKind::iter().map(|kind| format!("{kind:1} | {}", kind.summary())),
        );
        lines.push("Call '? <cmd>' for help with specific commands".to_string());
        return lines.join("\n");
    };

    let description = match kind {
        CommandKind::New => {
            "Creates a new game on the given date, or today if no date is provided."
        }
        CommandKind::Modify => {
            "Corrects one frame of an existing game. Enter 'Frame Throw_1 Throw_2', or \
             'Frame Throw_1 Throw_2 Throw_3' for the last frame. Write a strike as '10 0'."
        }
        CommandKind::Print => "Prints every game on the given date (default today), or one game.",
        CommandKind::Delete => "Deletes the game on the given date.",
        CommandKind::Quit => "Quits the bowling interface.",
        CommandKind::Help => "Prints the command menu, or help for one command.",
    };

    [
        banner(kind.summary(), width / 2, '='),
        description.to_string(),
        format!("Usage: '{}'", kind.usage()),
        "Dates: m/d/yy, m/d/yyyy or yyyy-mm-dd".to_string(),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_lists_every_command() {
        let menu = help_text(None, 60);
        assert!(menu.contains("n | new game"));
        assert!(menu.contains("? | print this menu"));
        assert_eq!(menu.lines().count(), 8);
    }

    #[test]
    fn topic_help_shows_usage() {
        assert!(help_text(Some(CommandKind::Delete), 60).contains("Usage: 'd <date> <game>'"));
    }

    #[test]
    fn banners_follow_configured_width() {
        let menu = help_text(None, 40);
        assert_eq!(menu.lines().next().unwrap().chars().count(), 40);

        let topic = help_text(Some(CommandKind::Quit), 40);
        assert_eq!(topic.lines().next().unwrap().chars().count(), 20);
    }
}
