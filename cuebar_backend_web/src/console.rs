// Copyright 2026 the Cuebar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser-console trace output.

use alloc::format;
use alloc::string::String;

use cuebar_core::trace::{ActionEvent, BoundEvent, SeekEvent, SkippedEvent, TraceSink};
use wasm_bindgen::JsValue;

/// Writes one `console.debug` line per trace event.
///
/// Skips are written with `console.warn` so a page with broken markup is easy
/// to spot in devtools.
#[derive(Clone, Debug)]
pub struct ConsoleSink {
    prefix: String,
}

impl ConsoleSink {
    /// Creates a sink with the `[cuebar]` prefix.
    #[must_use]
    pub fn new() -> Self {
        Self::with_prefix("[cuebar]")
    }

    /// Creates a sink prefixing every line with `prefix`.
    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn debug(&self, line: &str) {
        web_sys::console::debug_1(&JsValue::from_str(&format!("{} {line}", self.prefix)));
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl TraceSink for ConsoleSink {
    fn on_bound(&mut self, e: &BoundEvent) {
        self.debug(&format!(
            "bound {}#{}",
            e.component.kind.as_str(),
            e.component.index
        ));
    }

    fn on_skipped(&mut self, e: &SkippedEvent) {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "{} skipped {}#{}: {}",
            self.prefix,
            e.component.kind.as_str(),
            e.component.index,
            e.reason.as_str()
        )));
    }

    fn on_action(&mut self, e: &ActionEvent) {
        self.debug(&format!(
            "{}#{} {} t={:.3}s rate={:.2}",
            e.component.kind.as_str(),
            e.component.index,
            e.action.as_str(),
            e.media_time,
            e.playback_rate
        ));
    }

    fn on_seek(&mut self, e: &SeekEvent) {
        self.debug(&format!(
            "{}#{} seek {:.1}% -> {:.3}s",
            e.component.kind.as_str(),
            e.component.index,
            e.percent,
            e.target
        ));
    }
}
