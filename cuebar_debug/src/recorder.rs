// Copyright 2026 the Cuebar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and keeps every event, in
//! arrival order, as a [`RecordedEvent`].

use cuebar_core::trace::{ActionEvent, BoundEvent, SeekEvent, SkippedEvent, TraceSink};

/// One recorded trace event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RecordedEvent {
    /// See [`TraceSink::on_bound`].
    Bound(BoundEvent),
    /// See [`TraceSink::on_skipped`].
    Skipped(SkippedEvent),
    /// See [`TraceSink::on_action`].
    Action(ActionEvent),
    /// See [`TraceSink::on_seek`].
    Seek(SeekEvent),
}

/// A [`TraceSink`] that stores events in a `Vec`.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }

    /// Discards all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl TraceSink for RecorderSink {
    fn on_bound(&mut self, e: &BoundEvent) {
        self.events.push(RecordedEvent::Bound(*e));
    }

    fn on_skipped(&mut self, e: &SkippedEvent) {
        self.events.push(RecordedEvent::Skipped(*e));
    }

    fn on_action(&mut self, e: &ActionEvent) {
        self.events.push(RecordedEvent::Action(*e));
    }

    fn on_seek(&mut self, e: &SeekEvent) {
        self.events.push(RecordedEvent::Seek(*e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cuebar_core::comparison::ComparisonSync;
    use cuebar_core::media::Media;
    use cuebar_core::trace::{ActionKind, ComponentId, ComponentKind, Tracer};
    use std::cell::Cell;

    struct StubVideo {
        time: Cell<f64>,
        paused: Cell<bool>,
        rate: Cell<f64>,
    }

    impl StubVideo {
        fn new() -> Self {
            Self {
                time: Cell::new(0.0),
                paused: Cell::new(true),
                rate: Cell::new(1.0),
            }
        }
    }

    impl Media for StubVideo {
        fn current_time(&self) -> f64 {
            self.time.get()
        }
        fn set_current_time(&self, seconds: f64) {
            self.time.set(seconds);
        }
        fn duration(&self) -> f64 {
            40.0
        }
        fn paused(&self) -> bool {
            self.paused.get()
        }
        fn play(&self) {
            self.paused.set(false);
        }
        fn pause(&self) {
            self.paused.set(true);
        }
        fn playback_rate(&self) -> f64 {
            self.rate.get()
        }
        fn set_playback_rate(&self, rate: f64) {
            self.rate.set(rate);
        }
    }

    #[test]
    fn records_controller_events_in_order() {
        let id = ComponentId::new(ComponentKind::Comparison, 0);
        let sync = ComparisonSync::new(id, StubVideo::new(), StubVideo::new(), 0.5);
        let mut recorder = RecorderSink::new();
        {
            let mut tracer = Tracer::new(&mut recorder);
            let _ = sync.toggle(&mut tracer);
            let _ = sync.seek_to_percent(25.0, &mut tracer);
            let _ = sync.ended(&mut tracer);
        }

        let kinds: Vec<&str> = recorder
            .events()
            .iter()
            .map(|e| match e {
                RecordedEvent::Action(a) => a.action.as_str(),
                RecordedEvent::Seek(_) => "seek",
                RecordedEvent::Bound(_) => "bound",
                RecordedEvent::Skipped(_) => "skipped",
            })
            .collect();
        assert_eq!(kinds, ["play", "seek", "pause", "ended"]);

        let RecordedEvent::Seek(seek) = recorder.events()[1] else {
            panic!("expected a seek event");
        };
        assert_eq!(seek.target, 10.0);

        let RecordedEvent::Action(ended) = recorder.events()[3] else {
            panic!("expected an action event");
        };
        assert_eq!(ended.action, ActionKind::Ended);
        assert_eq!(ended.media_time, 0.0);
    }
}
