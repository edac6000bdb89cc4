// Copyright 2026 the Cuebar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Class names, attributes and icon markup the page relies on.
//!
//! The page's markup is the only interface between the content and the
//! behaviours: a component binds to whatever matches these selectors.

/// CSS custom property holding a scrub bar's fill percentage.
pub const PROGRESS_PROPERTY: &str = "--progress";

/// Attribute holding a phase segment's start percentage.
pub const SEGMENT_START_ATTR: &str = "data-start";

/// Attribute holding a tooltip's text.
pub const TOOLTIP_ATTR: &str = "data-tooltip";

/// Class given to generated tooltip nodes.
pub const TOOLTIP_CLASS: &str = "metric-tooltip";

/// Class toggled on a tooltip node while its trigger is hovered.
pub const TOOLTIP_VISIBLE_CLASS: &str = "visible";

/// Selectors for every element a component looks up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selectors {
    /// Root of a dual-video comparison.
    pub comparison: &'static str,
    /// Primary (leading) video inside a comparison.
    pub comparison_primary: &'static str,
    /// Follower video inside a comparison.
    pub comparison_follower: &'static str,
    /// Shared seek bar of a comparison.
    pub comparison_seek: &'static str,
    /// Shared play/pause button of a comparison.
    pub comparison_play: &'static str,
    /// `MM:SS / MM:SS` display of a comparison.
    pub comparison_time: &'static str,

    /// Root of a per-video control bar.
    pub controls: &'static str,
    /// Card enclosing a control bar or phase bar and its video.
    pub video_card: &'static str,
    /// Video element looked up inside a card.
    pub video: &'static str,
    /// Play/pause button of a control bar.
    pub controls_play: &'static str,
    /// "Slower" button.
    pub controls_slow: &'static str,
    /// "Faster" button.
    pub controls_fast: &'static str,
    /// "Restart" button.
    pub controls_restart: &'static str,
    /// Playback-rate label.
    pub controls_speed: &'static str,
    /// Scrub bar.
    pub controls_scrub: &'static str,
    /// Elapsed-time label.
    pub controls_elapsed: &'static str,

    /// Root of a phase timeline.
    pub phase_bar: &'static str,
    /// Clickable segment inside a phase timeline.
    pub phase_segment: &'static str,
    /// Position indicator inside a phase timeline.
    pub phase_indicator: &'static str,

    /// Elements that get a hover tooltip.
    pub tooltip_trigger: &'static str,
}

impl Selectors {
    /// Selectors matching the page's stylesheet.
    #[must_use]
    pub const fn page() -> Self {
        Self {
            comparison: ".video-comparison",
            comparison_primary: ".comp-video-a video",
            comparison_follower: ".comp-video-b video",
            comparison_seek: ".comp-seek",
            comparison_play: ".comp-play",
            comparison_time: ".comp-time",

            controls: ".video-player-controls",
            video_card: ".timeline-video-card",
            video: "video",
            controls_play: ".vpc-play",
            controls_slow: ".vpc-slow",
            controls_fast: ".vpc-fast",
            controls_restart: ".vpc-restart",
            controls_speed: ".vpc-speed",
            controls_scrub: ".vpc-scrub",
            controls_elapsed: ".vpc-elapsed",

            phase_bar: ".phase-bar",
            phase_segment: ".phase-segment",
            phase_indicator: ".phase-indicator",

            tooltip_trigger: "[data-tooltip]",
        }
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self::page()
    }
}

/// Glyph shown on a play/pause toggle.
///
/// The icon names the action the button performs next: `Pause` while media
/// plays, `Play` while it is paused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayIcon {
    /// Media is paused; clicking starts it.
    Play,
    /// Media is playing; clicking pauses it.
    Pause,
}

impl PlayIcon {
    /// Icon for a media element whose native paused flag is `paused`.
    #[must_use]
    pub const fn for_paused(paused: bool) -> Self {
        if paused { Self::Play } else { Self::Pause }
    }

    /// Icon-font markup placed inside the button.
    #[must_use]
    pub const fn markup(self) -> &'static str {
        match self {
            Self::Play => r#"<i class="fa-solid fa-play"></i>"#,
            Self::Pause => r#"<i class="fa-solid fa-pause"></i>"#,
        }
    }
}
