// Copyright 2026 the Cuebar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory media double for controller tests.

use core::cell::Cell;

use crate::media::Media;

/// A video whose state lives in cells. `play`/`pause` flip `paused`
/// synchronously, matching the HTML media element.
#[derive(Debug)]
pub(crate) struct FakeVideo {
    pub(crate) time: Cell<f64>,
    pub(crate) duration: Cell<f64>,
    pub(crate) paused: Cell<bool>,
    pub(crate) rate: Cell<f64>,
    pub(crate) play_calls: Cell<u32>,
}

impl FakeVideo {
    pub(crate) fn new(duration: f64) -> Self {
        Self {
            time: Cell::new(0.0),
            duration: Cell::new(duration),
            paused: Cell::new(true),
            rate: Cell::new(1.0),
            play_calls: Cell::new(0),
        }
    }

    pub(crate) fn unloaded() -> Self {
        Self::new(f64::NAN)
    }
}

impl Media for FakeVideo {
    fn current_time(&self) -> f64 {
        self.time.get()
    }

    fn set_current_time(&self, seconds: f64) {
        self.time.set(seconds);
    }

    fn duration(&self) -> f64 {
        self.duration.get()
    }

    fn paused(&self) -> bool {
        self.paused.get()
    }

    fn play(&self) {
        self.play_calls.set(self.play_calls.get() + 1);
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
