// Copyright 2026 the Cuebar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounded multiplicative playback-rate stepping.

/// Bounds and step factor for the slow/fast/restart buttons.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RateLimits {
    /// Slowest rate a "slow" step may reach.
    pub min: f64,
    /// Fastest rate a "fast" step may reach.
    pub max: f64,
    /// Multiplier applied by "slow"; "fast" divides by it. Must be in `(0, 1)`.
    pub step: f64,
    /// Rate restored by "restart".
    pub reset: f64,
}

impl RateLimits {
    /// Limits used by the page's player control bars.
    #[must_use]
    pub const fn player() -> Self {
        Self {
            min: 0.25,
            max: 4.0,
            step: 0.8,
            reset: 1.0,
        }
    }

    /// Returns the next slower rate, floored at [`min`](Self::min).
    #[must_use]
    pub fn slower(&self, rate: f64) -> f64 {
        (self.sanitize(rate) * self.step).max(self.min)
    }

    /// Returns the next faster rate, capped at [`max`](Self::max).
    #[must_use]
    pub fn faster(&self, rate: f64) -> f64 {
        (self.sanitize(rate) / self.step).min(self.max)
    }

    // A media element can report 0 or NaN while detached; restart from reset.
    fn sanitize(&self, rate: f64) -> f64 {
        if rate.is_finite() && rate > 0.0 {
            rate
        } else {
            self.reset
        }
    }
}

impl Default for RateLimits {
    fn default() -> Self {
        Self::player()
    }
}
