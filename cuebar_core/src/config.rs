// Copyright 2026 the Cuebar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binding configuration.

use crate::markup::Selectors;
use crate::rate::RateLimits;

/// Everything a backend needs to bind the page behaviours.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BindConfig {
    /// Selectors used to find components and their parts.
    pub selectors: Selectors,
    /// Bounds for the control bars' slow/fast/restart buttons.
    pub rate_limits: RateLimits,
    /// Playback rate both comparison videos start at.
    pub comparison_rate: f64,
}

impl BindConfig {
    /// Configuration matching the page's markup and stylesheet.
    #[must_use]
    pub const fn page() -> Self {
        Self {
            selectors: Selectors::page(),
            rate_limits: RateLimits::player(),
            comparison_rate: 0.5,
        }
    }
}

impl Default for BindConfig {
    fn default() -> Self {
        Self::page()
    }
}
