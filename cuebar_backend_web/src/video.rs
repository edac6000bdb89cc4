// Copyright 2026 the Cuebar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! [`Media`] implementation for `<video>` elements.

use cuebar_core::media::Media;
use web_sys::HtmlVideoElement;

/// A `<video>` element driven by a cuebar controller.
#[derive(Clone, Debug)]
pub struct Video {
    element: HtmlVideoElement,
}

impl Video {
    /// Wraps `element`.
    #[must_use]
    pub fn new(element: HtmlVideoElement) -> Self {
        Self { element }
    }

    /// Returns the wrapped element, e.g. to attach listeners.
    #[must_use]
    pub fn element(&self) -> &HtmlVideoElement {
        &self.element
    }
}

impl Media for Video {
    fn current_time(&self) -> f64 {
        self.element.current_time()
    }

    fn set_current_time(&self, seconds: f64) {
        self.element.set_current_time(seconds);
    }

    fn duration(&self) -> f64 {
        self.element.duration()
    }

    fn paused(&self) -> bool {
        self.element.paused()
    }

    fn play(&self) {
        // The returned promise rejects on autoplay-policy refusal; the paused
        // flag already reflects the outcome.
        let _ = self.element.play();
    }

    fn pause(&self) {
        let _ = self.element.pause();
    }

    fn playback_rate(&self) -> f64 {
        self.element.playback_rate()
    }

    fn set_playback_rate(&self, rate: f64) {
        self.element.set_playback_rate(rate);
    }
}
