// Copyright 2026 the Cuebar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Playback math, controllers and trace events for cuebar page interactivity.
//!
//! `cuebar_core` holds everything the page behaviours compute, independent of
//! the browser. It is `no_std` compatible (with `alloc`). Controllers talk to
//! media through the [`Media`](media::Media) trait and return small view
//! updates that a backend applies to its own widget tree.
//!
//! # Architecture
//!
//! ```text
//!   DOM event (click / input / timeupdate / ended)
//!       │
//!       ▼
//!   Controller (ComparisonSync, Transport, PhaseTimeline, TooltipState)
//!       │  mutates            │  returns
//!       ▼                     ▼
//!   Media (native video)   view update (PlayIcon, ScrubFrame, label)
//!                             │
//!                             ▼
//!                      backend applies to DOM
//! ```
//!
//! **[`progress`]**: Percent/time conversions. Never yields NaN: unknown
//! durations map to zero progress and zero seek targets.
//!
//! **[`timecode`]**: `MM:SS` clocks and `1.25x` rate labels.
//!
//! **[`rate`]**: Bounded multiplicative slow/fast stepping.
//!
//! **[`media`]**: The [`Media`](media::Media) trait backends implement for
//! their native video element.
//!
//! **[`markup`]**: Class names, attributes and icon markup the page relies on.
//!
//! **[`config`]**: [`BindConfig`](config::BindConfig) bundling selectors and
//! rate limits.
//!
//! **[`comparison`]**, **[`transport`]**, **[`phase`]**, **[`tooltip`]**: One
//! controller per page behaviour.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types, with
//! a zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod comparison;
pub mod config;
pub mod markup;
pub mod media;
pub mod phase;
pub mod progress;
pub mod rate;
pub mod timecode;
pub mod tooltip;
pub mod trace;
pub mod transport;

#[cfg(test)]
mod test_support;
