use std::sync::mpsc::Sender;

use client_frontend_core::{FrontendConfig, MessageEntry, describe_event};
use runtime::{SessionEvent, SessionObserver};

use crate::config::CliConfig;

/// Forwards rendered session events to the console.
pub struct ConsoleObserver {
    tx: Sender<MessageEntry>,
    frontend: FrontendConfig,
    show_scoreboard: bool,
}

impl ConsoleObserver {
    pub fn new(
        tx: Sender<MessageEntry>,
        frontend: &FrontendConfig,
        cli: &CliConfig,
    ) -> Self {
        Self {
            tx,
            frontend: frontend.clone(),
            show_scoreboard: cli.show_scoreboard,
        }
    }
}

impl SessionObserver for ConsoleObserver {
    fn on_event(&mut self, event: &SessionEvent) {
        if !self.show_scoreboard && matches!(event, SessionEvent::FrameCompleted { .. }) {
            return;
        }
        for message in describe_event(event, &self.frontend) {
            if self.tx.send(message).is_err() {
                tracing::debug!("Console closed; dropping session output");
                return;
            }
        }
    }
}
