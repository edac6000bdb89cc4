// Copyright 2026 the Cuebar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clickable phase timeline over a video.

use crate::markup::PlayIcon;
use crate::media::Media;
use crate::progress::{compute_progress, is_known_duration, segment_seek_time};
use crate::trace::{ActionEvent, ActionKind, ComponentId, Tracer};

/// Phase segments and a position indicator bound to one video.
#[derive(Debug)]
pub struct PhaseTimeline<M> {
    id: ComponentId,
    media: M,
}

impl<M: Media> PhaseTimeline<M> {
    /// Binds a timeline to `media`.
    pub fn new(id: ComponentId, media: M) -> Self {
        Self { id, media }
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

    /// Jumps to a segment starting at `start_percent` and plays.
    ///
    /// Always returns [`PlayIcon::Pause`] for a play button sharing the card.
    pub fn jump_to(&self, start_percent: f64, tracer: &mut Tracer<'_>) -> PlayIcon {
        let target = segment_seek_time(start_percent, self.media.duration());
        self.media.set_current_time(target);
        self.media.play();
        tracer.action(&ActionEvent {
            component: self.id,
            action: ActionKind::SegmentJump,
            media_time: target,
            playback_rate: self.media.playback_rate(),
        });
        PlayIcon::Pause
    }

    /// Indicator offset in percent, or `None` while the duration is unknown.
    #[must_use]
    pub fn indicator_offset(&self) -> Option<f64> {
        let duration = self.media.duration();
        is_known_duration(duration).then(|| compute_progress(self.media.current_time(), duration))
    }
}
