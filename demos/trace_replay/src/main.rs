// Copyright 2026 the Cuebar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted viewing session that exercises the controllers and the trace
//! pipeline without a browser.
//!
//! Simulated videos stand in for `<video>` elements. Every trace event goes to
//! both a [`PrettyPrintSink`] on stdout and a [`RecorderSink`]; the recording
//! is then exported as JSON (default path: `cuebar-trace.json`, or the first
//! argument).

use std::cell::Cell;
use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write as _};
use std::path::PathBuf;

use anyhow::{Context, Result};
use cuebar_core::comparison::ComparisonSync;
use cuebar_core::config::BindConfig;
use cuebar_core::media::Media;
use cuebar_core::phase::PhaseTimeline;
use cuebar_core::tooltip::TooltipState;
use cuebar_core::trace::{
    ActionEvent, BoundEvent, ComponentId, ComponentKind, SeekEvent, SkipReason, SkippedEvent,
    TraceSink, Tracer,
};
use cuebar_core::transport::Transport;
use cuebar_debug::pretty::PrettyPrintSink;
use cuebar_debug::recorder::RecorderSink;

/// Simulated wall-clock step between `timeupdate`s, in seconds.
const TICK: f64 = 0.25;
const MAX_TICKS: u32 = 1_000;

/// A video that advances only when ticked.
#[derive(Debug)]
struct SimVideo {
    time: Cell<f64>,
    duration: f64,
    paused: Cell<bool>,
    rate: Cell<f64>,
}

impl SimVideo {
    fn new(duration: f64) -> Self {
        Self {
            time: Cell::new(0.0),
            duration,
            paused: Cell::new(true),
            rate: Cell::new(1.0),
        }
    }

    /// Advances playback by `dt` wall-clock seconds. Returns `true` on reaching the end.
    fn advance(&self, dt: f64) -> bool {
        if self.paused.get() {
            return false;
        }
        let time = (self.time.get() + dt * self.rate.get()).min(self.duration);
        self.time.set(time);
        if time >= self.duration {
            // Native media pauses itself at the end.
            self.paused.set(true);
            return true;
        }
        false
    }
}

impl Media for SimVideo {
    fn current_time(&self) -> f64 {
        self.time.get()
    }
    fn set_current_time(&self, seconds: f64) {
        self.time.set(seconds.clamp(0.0, self.duration));
    }
    fn duration(&self) -> f64 {
        self.duration
    }
    fn paused(&self) -> bool {
        self.paused.get()
    }
    fn play(&self) {
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

/// Forwards every event to the printer and the recorder.
#[derive(Debug)]
struct Tee {
    pretty: PrettyPrintSink,
    recorder: RecorderSink,
}

impl TraceSink for Tee {
    fn on_bound(&mut self, e: &BoundEvent) {
        self.pretty.on_bound(e);
        self.recorder.on_bound(e);
    }

    fn on_skipped(&mut self, e: &SkippedEvent) {
        self.pretty.on_skipped(e);
        self.recorder.on_skipped(e);
    }

    fn on_action(&mut self, e: &ActionEvent) {
        self.pretty.on_action(e);
        self.recorder.on_action(e);
    }

    fn on_seek(&mut self, e: &SeekEvent) {
        self.pretty.on_seek(e);
        self.recorder.on_seek(e);
    }
}

fn main() -> Result<()> {
    let path = env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("cuebar-trace.json"), PathBuf::from);
    let config = BindConfig::page();

    let mut sink = Tee {
        pretty: PrettyPrintSink::new(Box::new(io::stdout())),
        recorder: RecorderSink::new(),
    };

    // -- binding -----------------------------------------------------------
    let comparison = ComparisonSync::new(
        ComponentId::new(ComponentKind::Comparison, 0),
        SimVideo::new(12.0),
        SimVideo::new(12.0),
        config.comparison_rate,
    );
    let lecture = SimVideo::new(60.0);
    let controls = Transport::new(
        ComponentId::new(ComponentKind::Controls, 0),
        &lecture,
        config.rate_limits,
    );
    let phases = PhaseTimeline::new(ComponentId::new(ComponentKind::PhaseTimeline, 0), &lecture);
    let mut tooltip = TooltipState::new(
        ComponentId::new(ComponentKind::Tooltip, 0),
        "Frames decoded per second",
    );

    for component in [comparison.id(), controls.id(), phases.id(), tooltip.id()] {
        sink.on_bound(&BoundEvent { component });
    }
    // A second timeline whose card has no video.
    sink.on_skipped(&SkippedEvent {
        component: ComponentId::new(ComponentKind::PhaseTimeline, 1),
        reason: SkipReason::MissingVideo,
    });

    // -- comparison: play, seek ahead, run to the end ----------------------
    let icon = comparison.toggle(&mut Tracer::new(&mut sink));
    println!("  comparison button: {}", icon.markup());
    for tick in 1..=MAX_TICKS {
        let ended = comparison.primary().advance(TICK);
        comparison.follower().advance(TICK);
        if ended {
            let reset = comparison.ended(&mut Tracer::new(&mut sink));
            println!(
                "  comparison reset: {} bar={} button: {}",
                reset.frame.label,
                reset.frame.progress_css(),
                reset.icon.markup()
            );
            break;
        }
        if tick == 16 {
            comparison.seek_to_percent(75.0, &mut Tracer::new(&mut sink));
        }
        if tick % 8 == 0 {
            let frame = comparison.time_update();
            println!("  comparison: {} bar={}", frame.label, frame.progress_css());
        }
    }

    // -- control bar -------------------------------------------------------
    println!("  speed: {}", controls.speed_label());
    for _ in 0..2 {
        let change = controls.fast(&mut Tracer::new(&mut sink));
        println!("  speed: {}", change.label);
    }
    run(&lecture, 20);
    let frame = controls.time_update();
    println!("  controls: {} bar={}", frame.label, frame.progress_css());

    let change = controls.slow(&mut Tracer::new(&mut sink));
    println!("  speed: {}", change.label);
    controls.scrub_to_percent(50.0, &mut Tracer::new(&mut sink));

    // -- phase timeline and tooltip ----------------------------------------
    phases.jump_to(25.0, &mut Tracer::new(&mut sink));
    run(&lecture, 4);
    if let Some(offset) = phases.indicator_offset() {
        println!("  indicator: left={offset:.2}%");
    }

    tooltip.enter(&mut Tracer::new(&mut sink));
    // Re-entering an already visible tooltip emits nothing.
    tooltip.enter(&mut Tracer::new(&mut sink));
    tooltip.leave(&mut Tracer::new(&mut sink));

    let change = controls.restart(&mut Tracer::new(&mut sink));
    println!("  speed: {}", change.label);
    let icon = controls.toggle(&mut Tracer::new(&mut sink));
    println!("  controls button: {}", icon.markup());

    // -- export ------------------------------------------------------------
    let file = File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    cuebar_debug::json::export(sink.recorder.events(), &mut writer)
        .with_context(|| format!("failed to write {}", path.display()))?;
    writer.flush()?;

    println!(
        "Wrote {} ({} events)",
        path.display(),
        sink.recorder.events().len()
    );
    Ok(())
}

fn run(video: &SimVideo, ticks: u32) {
    for _ in 0..ticks {
        if video.advance(TICK) {
            break;
        }
    }
}
