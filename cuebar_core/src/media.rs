// Copyright 2026 the Cuebar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Media contract for backend integrations.
//!
//! Controllers never touch a platform video type directly. A backend wraps its
//! native element (e.g. `HtmlVideoElement`) and implements [`Media`]; tests use
//! an in-memory fake.
//!
//! Methods take `&self`: native media elements are handles with interior
//! mutability, and the same element is shared by several event closures.

/// A seekable, rate-adjustable media element.
pub trait Media {
    /// Current playback position in seconds.
    fn current_time(&self) -> f64;

    /// Seeks to `seconds`. The seek completes asynchronously.
    fn set_current_time(&self, seconds: f64);

    /// Total duration in seconds; `NaN` until metadata is available.
    fn duration(&self) -> f64;

    /// Returns `true` while playback is paused.
    fn paused(&self) -> bool;

    /// Starts playback. Fire-and-forget: buffering and autoplay policy are the
    /// platform's concern.
    fn play(&self);

    /// Pauses playback.
    fn pause(&self);

    /// Current playback-rate multiplier (1.0 = normal speed).
    fn playback_rate(&self) -> f64;

    /// Sets the playback-rate multiplier.
    fn set_playback_rate(&self, rate: f64);
}

impl<M: Media + ?Sized> Media for &M {
    fn current_time(&self) -> f64 {
        (**self).current_time()
    }

    fn set_current_time(&self, seconds: f64) {
        (**self).set_current_time(seconds);
    }

    fn duration(&self) -> f64 {
        (**self).duration()
    }

    fn paused(&self) -> bool {
        (**self).paused()
    }

    fn play(&self) {
        (**self).play();
    }

    fn pause(&self) {
        (**self).pause();
    }

    fn playback_rate(&self) -> f64 {
        (**self).playback_rate()
    }

    fn set_playback_rate(&self, rate: f64) {
        (**self).set_playback_rate(rate);
    }
}
