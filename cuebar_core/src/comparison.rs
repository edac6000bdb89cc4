// Copyright 2026 the Cuebar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Synchronized dual-video comparison.
//!
//! A [`ComparisonSync`] drives a *primary* and a *follower* video from one
//! play button and one seek bar. Only the primary's events update the UI; the
//! follower mirrors every play, pause and seek.
//!
//! Whether the pair is playing is read from the primary's native paused flag,
//! so the toggle can never disagree with what the media is actually doing.

use crate::markup::PlayIcon;
use crate::media::Media;
use crate::progress::{ScrubFrame, clamp_percent, compute_progress, compute_seek_target};
use crate::timecode::format_clock_pair;
use crate::trace::{ActionEvent, ActionKind, ComponentId, SeekEvent, Tracer};

/// UI state to apply after the primary video ends.
#[derive(Clone, Debug, PartialEq)]
pub struct EndedReset {
    /// Icon for the play button.
    pub icon: PlayIcon,
    /// Seek bar and time display, rewound to zero.
    pub frame: ScrubFrame,
}

/// Two videos played, paused and seeked in lockstep.
#[derive(Debug)]
pub struct ComparisonSync<M> {
    id: ComponentId,
    primary: M,
    follower: M,
}

impl<M: Media> ComparisonSync<M> {
    /// Binds `primary` and `follower` and sets both to `rate`.
    pub fn new(id: ComponentId, primary: M, follower: M, rate: f64) -> Self {
        primary.set_playback_rate(rate);
        follower.set_playback_rate(rate);
        Self {
            id,
            primary,
            follower,
        }
    }

    /// Returns the instance id used in trace events.
    #[must_use]
    pub fn id(&self) -> ComponentId {
        self.id
    }

    /// Returns the video whose events drive the UI.
    #[must_use]
    pub fn primary(&self) -> &M {
        &self.primary
    }

    /// Returns the passive follower video.
    #[must_use]
    pub fn follower(&self) -> &M {
        &self.follower
    }

    /// Returns `true` while the primary video is playing.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        !self.primary.paused()
    }

    /// Starts both videos.
    pub fn play(&self, tracer: &mut Tracer<'_>) -> PlayIcon {
        self.primary.play();
        self.follower.play();
        self.emit(tracer, ActionKind::Play);
        PlayIcon::Pause
    }

    /// Pauses both videos.
    pub fn pause(&self, tracer: &mut Tracer<'_>) -> PlayIcon {
        self.primary.pause();
        self.follower.pause();
        self.emit(tracer, ActionKind::Pause);
        PlayIcon::Play
    }

    /// Plays if the primary is paused, pauses otherwise.
    pub fn toggle(&self, tracer: &mut Tracer<'_>) -> PlayIcon {
        if self.is_playing() {
            self.pause(tracer)
        } else {
            self.play(tracer)
        }
    }

    /// Seek bar and `MM:SS / MM:SS` label for the primary's current position.
    #[must_use]
    pub fn time_update(&self) -> ScrubFrame {
        let current = self.primary.current_time();
        let duration = self.primary.duration();
        ScrubFrame {
            percent: compute_progress(current, duration),
            label: format_clock_pair(current, duration),
        }
    }

    /// Seeks both videos to `percent` of the primary's duration.
    ///
    /// Returns the clamped percent for the bar's fill.
    pub fn seek_to_percent(&self, percent: f64, tracer: &mut Tracer<'_>) -> f64 {
        let percent = clamp_percent(percent);
        let target = compute_seek_target(percent, self.primary.duration());
        self.primary.set_current_time(target);
        self.follower.set_current_time(target);
        tracer.seek(&SeekEvent {
            component: self.id,
            percent,
            target,
        });
        percent
    }

    /// Handles the primary's `ended` event: pause and rewind both videos.
    pub fn ended(&self, tracer: &mut Tracer<'_>) -> EndedReset {
        let icon = self.pause(tracer);
        self.primary.set_current_time(0.0);
        self.follower.set_current_time(0.0);
        self.emit(tracer, ActionKind::Ended);
        EndedReset {
            icon,
            frame: ScrubFrame {
                percent: 0.0,
                label: format_clock_pair(0.0, self.primary.duration()),
            },
        }
    }

    fn emit(&self, tracer: &mut Tracer<'_>, action: ActionKind) {
        tracer.action(&ActionEvent {
            component: self.id,
            action,
            media_time: self.primary.current_time(),
            playback_rate: self.primary.playback_rate(),
        });
    }
}
