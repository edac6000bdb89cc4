// Copyright 2026 the Cuebar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for page behaviours.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! binding code and controllers call as things happen. All method bodies
//! default to no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which page behaviour an event belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// Synchronized dual-video comparison.
    Comparison,
    /// Per-video transport control bar.
    Controls,
    /// Clickable phase timeline.
    PhaseTimeline,
    /// Hover tooltip.
    Tooltip,
}

impl ComponentKind {
    /// Short lowercase name for log lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Comparison => "comparison",
            Self::Controls => "controls",
            Self::PhaseTimeline => "phase",
            Self::Tooltip => "tooltip",
        }
    }
}

/// Why a component instance (or one of its parts) was not bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// The primary or only video could not be found.
    MissingVideo,
    /// The follower video of a comparison could not be found.
    MissingFollower,
    /// Neither an enclosing card nor a parent element exists.
    MissingContainer,
    /// A phase segment has no parseable start percentage.
    InvalidSegmentStart,
}

impl SkipReason {
    /// Short name for log lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingVideo => "missing-video",
            Self::MissingFollower => "missing-follower",
            Self::MissingContainer => "missing-container",
            Self::InvalidSegmentStart => "invalid-segment-start",
        }
    }
}

/// A user-visible action performed by a controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Playback started.
    Play,
    /// Playback paused.
    Pause,
    /// Rate stepped down.
    Slow,
    /// Rate stepped up.
    Fast,
    /// Time and rate reset, playback started.
    Restart,
    /// Primary media reached its end and everything was rewound.
    Ended,
    /// A phase segment was clicked.
    SegmentJump,
    /// A tooltip became visible.
    ShowTooltip,
    /// A tooltip was hidden.
    HideTooltip,
}

impl ActionKind {
    /// Short lowercase name for log lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Slow => "slow",
            Self::Fast => "fast",
            Self::Restart => "restart",
            Self::Ended => "ended",
            Self::SegmentJump => "segment-jump",
            Self::ShowTooltip => "show-tooltip",
            Self::HideTooltip => "hide-tooltip",
        }
    }
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Identifies one bound component instance.
///
/// `index` is the instance's position among all elements matching its root
/// selector, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ComponentId {
    /// Behaviour kind.
    pub kind: ComponentKind,
    /// Position in document order.
    pub index: u32,
}

impl ComponentId {
    /// Creates an id.
    #[must_use]
    pub const fn new(kind: ComponentKind, index: u32) -> Self {
        Self { kind, index }
    }
}

/// Emitted when a component instance has been bound.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundEvent {
    /// Which instance.
    pub component: ComponentId,
}

/// Emitted when a component instance, or a part of it, is skipped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkippedEvent {
    /// Which instance.
    pub component: ComponentId,
    /// Why it was skipped.
    pub reason: SkipReason,
}

/// Emitted after a controller performs an action.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActionEvent {
    /// Which instance.
    pub component: ComponentId,
    /// What happened.
    pub action: ActionKind,
    /// Media position after the action, in seconds.
    pub media_time: f64,
    /// Playback rate after the action.
    pub playback_rate: f64,
}

/// Emitted when a scrub or seek bar moves the media.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeekEvent {
    /// Which instance.
    pub component: ComponentId,
    /// Requested position, clamped to `[0, 100]`.
    pub percent: f64,
    /// Resulting media time in seconds.
    pub target: f64,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from binding code and controllers.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a component instance is bound.
    fn on_bound(&mut self, e: &BoundEvent) {
        _ = e;
    }

    /// Called when a component instance or part is skipped.
    fn on_skipped(&mut self, e: &SkippedEvent) {
        _ = e;
    }

    /// Called after a controller action.
    fn on_action(&mut self, e: &ActionEvent) {
        _ = e;
    }

    /// Called after a seek.
    fn on_seek(&mut self, e: &SeekEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`BoundEvent`].
    #[inline]
    pub fn bound(&mut self, e: &BoundEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_bound(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SkippedEvent`].
    #[inline]
    pub fn skipped(&mut self, e: &SkippedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_skipped(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`ActionEvent`].
    #[inline]
    pub fn action(&mut self, e: &ActionEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_action(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`SeekEvent`].
    #[inline]
    pub fn seek(&mut self, e: &SeekEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_seek(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

#[cfg(all(test, feature = "trace"))]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counting {
        bound: u32,
        skipped: u32,
        actions: u32,
        seeks: u32,
    }

    impl TraceSink for Counting {
        fn on_bound(&mut self, _: &BoundEvent) {
            self.bound += 1;
        }

        fn on_skipped(&mut self, _: &SkippedEvent) {
            self.skipped += 1;
        }

        fn on_action(&mut self, _: &ActionEvent) {
            self.actions += 1;
        }

        fn on_seek(&mut self, _: &SeekEvent) {
            self.seeks += 1;
        }
    }

    #[test]
    fn tracer_dispatches_to_sink() {
        let id = ComponentId::new(ComponentKind::Controls, 0);
        let mut sink = Counting::default();
        {
            let mut tracer = Tracer::new(&mut sink);
            tracer.bound(&BoundEvent { component: id });
            tracer.skipped(&SkippedEvent {
                component: id,
                reason: SkipReason::MissingVideo,
            });
            tracer.seek(&SeekEvent {
                component: id,
                percent: 10.0,
                target: 1.0,
            });
        }
        assert_eq!(
            (sink.bound, sink.skipped, sink.actions, sink.seeks),
            (1, 1, 0, 1),
            "one event per call"
        );
    }

    #[test]
    fn none_tracer_is_silent() {
        let mut tracer = Tracer::none();
        tracer.action(&ActionEvent {
            component: ComponentId::new(ComponentKind::Tooltip, 3),
            action: ActionKind::ShowTooltip,
            media_time: 0.0,
            playback_rate: 1.0,
        });
    }
}
