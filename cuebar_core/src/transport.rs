// Copyright 2026 the Cuebar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-video transport controls: play/pause, slow, fast, restart and scrub.
//!
//! Every rate-changing action also resumes playback, so the returned
//! [`RateChange`] always carries [`PlayIcon::Pause`].

use alloc::string::String;

use crate::markup::PlayIcon;
use crate::media::Media;
use crate::progress::{ScrubFrame, clamp_percent, compute_progress, compute_seek_target};
use crate::rate::RateLimits;
use crate::timecode::{format_clock, format_rate};
use crate::trace::{ActionEvent, ActionKind, ComponentId, SeekEvent, Tracer};

/// UI state to apply after a slow, fast or restart action.
#[derive(Clone, Debug, PartialEq)]
pub struct RateChange {
    /// New playback rate.
    pub rate: f64,
    /// Speed label, e.g. `1.25x`.
    pub label: String,
    /// Icon for the play button.
    pub icon: PlayIcon,
}

/// Transport controls bound to a single video.
#[derive(Debug)]
pub struct Transport<M> {
    id: ComponentId,
    media: M,
    limits: RateLimits,
}

impl<M: Media> Transport<M> {
    /// Binds controls to `media`.
    pub fn new(id: ComponentId, media: M, limits: RateLimits) -> Self {
        Self { id, media, limits }
    }

    /// Returns the instance id used in trace events.
    #[must_use]
    pub fn id(&self) -> ComponentId {
        self.id
    }

    /// Returns the bound video.
    #[must_use]
    pub fn media(&self) -> &M {
        &self.media
    }

    /// Label for the current playback rate.
    #[must_use]
    pub fn speed_label(&self) -> String {
        format_rate(self.media.playback_rate())
    }

    /// Plays if paused, pauses otherwise, based on the native paused flag.
    pub fn toggle(&self, tracer: &mut Tracer<'_>) -> PlayIcon {
        let action = if self.media.paused() {
            self.media.play();
            ActionKind::Play
        } else {
            self.media.pause();
            ActionKind::Pause
        };
        self.emit(tracer, action);
        PlayIcon::for_paused(action == ActionKind::Pause)
    }

    /// Steps the rate down and resumes playback.
    pub fn slow(&self, tracer: &mut Tracer<'_>) -> RateChange {
        let rate = self.limits.slower(self.media.playback_rate());
        self.apply_rate(rate, ActionKind::Slow, tracer)
    }

    /// Steps the rate up and resumes playback.
    pub fn fast(&self, tracer: &mut Tracer<'_>) -> RateChange {
        let rate = self.limits.faster(self.media.playback_rate());
        self.apply_rate(rate, ActionKind::Fast, tracer)
    }

    /// Rewinds to zero, restores the reset rate and resumes playback.
    pub fn restart(&self, tracer: &mut Tracer<'_>) -> RateChange {
        self.media.set_current_time(0.0);
        self.apply_rate(self.limits.reset, ActionKind::Restart, tracer)
    }

    /// Scrub bar and `MM:SS` elapsed label for the current position.
    #[must_use]
    pub fn time_update(&self) -> ScrubFrame {
        let current = self.media.current_time();
        ScrubFrame {
            percent: compute_progress(current, self.media.duration()),
            label: format_clock(current),
        }
    }

    /// Seeks to `percent` of the duration. Returns the clamped percent.
    pub fn scrub_to_percent(&self, percent: f64, tracer: &mut Tracer<'_>) -> f64 {
        let percent = clamp_percent(percent);
        let target = compute_seek_target(percent, self.media.duration());
        self.media.set_current_time(target);
        tracer.seek(&SeekEvent {
            component: self.id,
            percent,
            target,
        });
        percent
    }

    fn apply_rate(&self, rate: f64, action: ActionKind, tracer: &mut Tracer<'_>) -> RateChange {
        self.media.set_playback_rate(rate);
        self.media.play();
        self.emit(tracer, action);
        RateChange {
            rate,
            label: format_rate(rate),
            icon: PlayIcon::Pause,
        }
    }

    fn emit(&self, tracer: &mut Tracer<'_>, action: ActionKind) {
        tracer.action(&ActionEvent {
            component: self.id,
            action,
            media_time: self.media.current_time(),
            playback_rate: self.media.playback_rate(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeVideo;
    use crate::trace::ComponentKind;

    fn controls(duration: f64) -> Transport<FakeVideo> {
        Transport::new(
            ComponentId::new(ComponentKind::Controls, 0),
            FakeVideo::new(duration),
            RateLimits::player(),
        )
    }

    #[test]
    fn toggle_reads_native_state() {
        let t = controls(60.0);
        let mut tracer = Tracer::none();
        assert_eq!(t.toggle(&mut tracer), PlayIcon::Pause);
        assert!(!t.media().paused.get());
        assert_eq!(t.toggle(&mut tracer), PlayIcon::Play);
        assert!(t.media().paused.get());
    }

    #[test]
    fn initial_label_reflects_rate() {
        let t = controls(60.0);
        assert_eq!(t.speed_label(), "1.00x");
        t.media().rate.set(0.5);
        assert_eq!(t.speed_label(), "0.50x");
    }

    #[test]
    fn slow_steps_down_and_resumes() {
        let t = controls(60.0);
        let mut tracer = Tracer::none();
        let change = t.slow(&mut tracer);
        assert!((change.rate - 0.8).abs() < 1e-12);
        assert_eq!(change.label, "0.80x");
        assert_eq!(change.icon, PlayIcon::Pause);
        assert!(!t.media().paused.get());
    }

    #[test]
    fn slow_is_floored() {
        let t = controls(60.0);
        let mut tracer = Tracer::none();
        let mut last = t.slow(&mut tracer);
        for _ in 0..20 {
            last = t.slow(&mut tracer);
            assert!(last.rate >= 0.25);
        }
        assert_eq!(last.rate, 0.25);
        assert_eq!(last.label, "0.25x");
    }

    #[test]
    fn fast_is_capped() {
        let t = controls(60.0);
        let mut tracer = Tracer::none();
        let rates = [1.25, 1.5625, 1.953_125, 2.441_406_25, 3.051_757_812_5, 3.814_697_265_625, 4.0];
        for want in rates {
            let change = t.fast(&mut tracer);
            assert!((change.rate - want).abs() < 1e-12, "{} != {want}", change.rate);
            assert_eq!(change.label, format_rate(want));
        }
        assert_eq!(t.speed_label(), "4.00x");
        assert_eq!(t.fast(&mut tracer).rate, 4.0);
    }

    #[test]
    fn restart_resets_time_and_rate() {
        let t = controls(60.0);
        let mut tracer = Tracer::none();
        for _ in 0..3 {
            let _ = t.fast(&mut tracer);
        }
        t.media().time.set(42.0);
        t.media().paused.set(true);

        let change = t.restart(&mut tracer);
        assert_eq!(change.rate, 1.0);
        assert_eq!(change.label, "1.00x");
        assert_eq!(t.media().time.get(), 0.0);
        assert_eq!(t.media().rate.get(), 1.0);
        assert!(!t.media().paused.get());
    }

    #[test]
    fn scrub_half_of_sixty_is_thirty() {
        let t = controls(60.0);
        let mut tracer = Tracer::none();
        assert_eq!(t.scrub_to_percent(50.0, &mut tracer), 50.0);
        assert_eq!(t.media().time.get(), 30.0);
    }

    #[test]
    fn time_update_shows_elapsed_only() {
        let t = controls(200.0);
        t.media().time.set(75.0);
        let frame = t.time_update();
        assert_eq!(frame.percent, 37.5);
        assert_eq!(frame.label, "01:15");
    }

    #[test]
    fn time_update_without_duration_is_zero() {
        let t = Transport::new(
            ComponentId::new(ComponentKind::Controls, 1),
            FakeVideo::unloaded(),
            RateLimits::player(),
        );
        t.media().time.set(3.0);
        let frame = t.time_update();
        assert_eq!(frame.percent, 0.0);
        assert_eq!(frame.label, "00:03");
    }
}
