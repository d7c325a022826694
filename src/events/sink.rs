//! Event sinks.
//!
//! The engine reports events synchronously to a `&mut dyn EventSink`.
//! Sinks must return promptly and cannot influence play.

use log::info;

use super::event::GameEvent;

/// One-way notification sink.
pub trait EventSink {
    fn report(&mut self, event: &GameEvent);
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn report(&mut self, _event: &GameEvent) {}
}

/// Forwards events to the `log` facade at info level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn report(&mut self, event: &GameEvent) {
        info!("{event}");
    }
}

/// Records events in order.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }
}

impl EventSink for EventLog {
    fn report(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

impl<F: FnMut(&GameEvent)> EventSink for F {
    fn report(&mut self, event: &GameEvent) {
        self(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    fn skipped(seat: u8) -> GameEvent {
        GameEvent::TurnSkipped {
            player: PlayerId::new(seat),
        }
    }

    #[test]
    fn test_event_log_records_in_order() {
        let mut log = EventLog::new();
        log.report(&skipped(0));
        log.report(&skipped(1));

        assert_eq!(log.len(), 2);
        assert_eq!(log.events()[1], skipped(1));

        let drained: Vec<_> = log.drain().collect();
        assert_eq!(drained, vec![skipped(0), skipped(1)]);
        assert!(log.is_empty());
    }

    #[test]
    fn test_closure_sink() {
        let mut count = 0;
        {
            let mut sink = |_: &GameEvent| count += 1;
            let sink: &mut dyn EventSink = &mut sink;
            sink.report(&skipped(0));
            sink.report(&skipped(0));
        }
        assert_eq!(count, 2);
    }
}
