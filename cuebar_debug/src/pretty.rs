// Copyright 2026 the Cuebar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use cuebar_core::trace::{ActionEvent, BoundEvent, ComponentId, SeekEvent, SkippedEvent, TraceSink};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns the writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn label(id: ComponentId) -> String {
    format!("{}#{}", id.kind.as_str(), id.index)
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_bound(&mut self, e: &BoundEvent) {
        let _ = writeln!(self.writer, "[bound] {}", label(e.component));
    }

    fn on_skipped(&mut self, e: &SkippedEvent) {
        let _ = writeln!(
            self.writer,
            "[skip] {} reason={}",
            label(e.component),
            e.reason.as_str()
        );
    }

    fn on_action(&mut self, e: &ActionEvent) {
        let _ = writeln!(
            self.writer,
            "[action] {} {} t={:.3}s rate={:.2}x",
            label(e.component),
            e.action.as_str(),
            e.media_time,
            e.playback_rate
        );
    }

    fn on_seek(&mut self, e: &SeekEvent) {
        let _ = writeln!(
            self.writer,
            "[seek] {} {:.1}% -> {:.3}s",
            label(e.component),
            e.percent,
            e.target
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cuebar_core::trace::{ActionKind, ComponentKind, SkipReason};

    fn render(f: impl FnOnce(&mut PrettyPrintSink<Vec<u8>>)) -> String {
        let mut sink = PrettyPrintSink::with_writer(Vec::new());
        f(&mut sink);
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn one_line_per_event() {
        let id = ComponentId::new(ComponentKind::Controls, 2);
        let out = render(|sink| {
            sink.on_bound(&BoundEvent { component: id });
            sink.on_action(&ActionEvent {
                component: id,
                action: ActionKind::Fast,
                media_time: 12.5,
                playback_rate: 1.25,
            });
            sink.on_seek(&SeekEvent {
                component: id,
                percent: 50.0,
                target: 30.0,
            });
            sink.on_skipped(&SkippedEvent {
                component: ComponentId::new(ComponentKind::PhaseTimeline, 0),
                reason: SkipReason::MissingVideo,
            });
        });

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            [
                "[bound] controls#2",
                "[action] controls#2 fast t=12.500s rate=1.25x",
                "[seek] controls#2 50.0% -> 30.000s",
                "[skip] phase#0 reason=missing-video",
            ]
        );
    }
}
