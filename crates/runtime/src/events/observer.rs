//! Observers receive session events synchronously, in order.

use super::types::{SessionEvent, Topic};

/// Receives every event a session emits.
pub trait SessionObserver {
    fn on_event(&mut self, event: &SessionEvent);
}

/// Discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl SessionObserver for NullObserver {
    fn on_event(&mut self, _event: &SessionEvent) {}
}

/// Keeps every event for later inspection.
#[derive(Clone, Debug, Default)]
pub struct RecordingObserver {
    events: Vec<SessionEvent>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SessionEvent] {
        &self.events
    }

    /// Events belonging to `topic`, in emission order.
    pub fn on_topic(&self, topic: Topic) -> impl Iterator<Item = &SessionEvent> {
        self.events
            .iter()
            .filter(move |event| event.topic() == topic)
    }

    pub fn into_events(self) -> Vec<SessionEvent> {
        self.events
    }
}

impl SessionObserver for RecordingObserver {
    fn on_event(&mut self, event: &SessionEvent) {
        self.events.push(event.clone());
    }
}

impl<O: SessionObserver + ?Sized> SessionObserver for &mut O {
    fn on_event(&mut self, event: &SessionEvent) {
        (**self).on_event(event);
    }
}
