// Copyright 2026 the Cuebar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of recorded events.
//!
//! [`export`] writes the events collected by a
//! [`RecorderSink`](super::recorder::RecorderSink) as a JSON array, one object
//! per event, suitable for diffing between sessions or loading in a notebook.

use std::io::{self, Write};

use serde_json::{Value, json};

use cuebar_core::trace::ComponentId;

use crate::recorder::RecordedEvent;

/// Converts one event to its JSON object.
#[must_use]
pub fn to_value(event: &RecordedEvent) -> Value {
    match event {
        RecordedEvent::Bound(e) => json!({
            "event": "bound",
            "component": component(e.component),
        }),
        RecordedEvent::Skipped(e) => json!({
            "event": "skipped",
            "component": component(e.component),
            "reason": e.reason.as_str(),
        }),
        RecordedEvent::Action(e) => json!({
            "event": "action",
            "component": component(e.component),
            "action": e.action.as_str(),
            "media_time": finite(e.media_time),
            "playback_rate": finite(e.playback_rate),
        }),
        RecordedEvent::Seek(e) => json!({
            "event": "seek",
            "component": component(e.component),
            "percent": finite(e.percent),
            "target": finite(e.target),
        }),
    }
}

/// Writes `events` as a pretty-printed JSON array.
pub fn export(events: &[RecordedEvent], writer: &mut dyn Write) -> io::Result<()> {
    let array = Value::Array(events.iter().map(to_value).collect());
    serde_json::to_writer_pretty(&mut *writer, &array)?;
    writeln!(writer)
}

fn component(id: ComponentId) -> Value {
    json!({ "kind": id.kind.as_str(), "index": id.index })
}

// JSON has no NaN/Infinity.
fn finite(v: f64) -> Value {
    if v.is_finite() { json!(v) } else { Value::Null }
}
