// Copyright 2026 the Cuebar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser backend for cuebar.
//!
//! This crate binds the page behaviours from `cuebar_core` to live DOM:
//!
//! - [`bind`] / [`bind_with`]: single pass over a root element that wires every
//!   comparison player, control bar, phase timeline and tooltip trigger.
//! - [`Video`]: [`Media`](cuebar_core::media::Media) for `<video>` elements.
//! - [`ConsoleSink`]: trace sink writing to the browser console.
//!
//! Binding is explicit: call [`bind`] once after the view tree exists (for a
//! static page, from the wasm start function). Elements added later are not
//! picked up.

#![no_std]

extern crate alloc;

mod comparison;
mod console;
mod controls;
mod dom;
mod phase;
mod tooltip;
mod video;

pub use console::ConsoleSink;
pub use video::Video;

use alloc::rc::Rc;
use core::cell::RefCell;

use cuebar_core::config::BindConfig;
use cuebar_core::trace::{
    BoundEvent, ComponentId, ComponentKind, NoopSink, SkipReason, SkippedEvent, TraceSink, Tracer,
};
use wasm_bindgen::JsValue;
use web_sys::Element;

/// Trace sink shared by every event closure.
pub type SharedSink = Rc<RefCell<dyn TraceSink>>;

/// Outcome of binding one component instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Binding {
    Bound,
    Skipped(SkipReason),
}

/// Bound/skipped counts for one component kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    /// Instances with listeners attached.
    pub bound: u32,
    /// Instances left alone because a required element was missing.
    pub skipped: u32,
}

/// Summary of a [`bind`] pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BindReport {
    /// Dual-video comparison players.
    pub comparisons: Tally,
    /// Per-video control bars.
    pub controls: Tally,
    /// Phase timelines.
    pub phase_bars: Tally,
    /// Tooltip triggers.
    pub tooltips: Tally,
}

impl BindReport {
    /// Total number of bound instances across all kinds.
    #[must_use]
    pub fn total_bound(&self) -> u32 {
        self.comparisons.bound + self.controls.bound + self.phase_bars.bound + self.tooltips.bound
    }

    /// Total number of skipped instances across all kinds.
    #[must_use]
    pub fn total_skipped(&self) -> u32 {
        self.comparisons.skipped
            + self.controls.skipped
            + self.phase_bars.skipped
            + self.tooltips.skipped
    }

    fn tally_mut(&mut self, kind: ComponentKind) -> &mut Tally {
        match kind {
            ComponentKind::Comparison => &mut self.comparisons,
            ComponentKind::Controls => &mut self.controls,
            ComponentKind::PhaseTimeline => &mut self.phase_bars,
            ComponentKind::Tooltip => &mut self.tooltips,
        }
    }

    fn record(&mut self, id: ComponentId, binding: Binding, tracer: &mut Tracer<'_>) {
        let tally = self.tally_mut(id.kind);
        match binding {
            Binding::Bound => {
                tally.bound += 1;
                tracer.bound(&BoundEvent { component: id });
            }
            Binding::Skipped(reason) => {
                tally.skipped += 1;
                tracer.skipped(&SkippedEvent {
                    component: id,
                    reason,
                });
            }
        }
    }
}

/// Binds every behaviour below `root` with the page configuration and no
/// tracing.
pub fn bind(root: &Element) -> Result<BindReport, JsValue> {
    bind_with(root, &BindConfig::page(), Rc::new(RefCell::new(NoopSink)))
}

/// Binds every behaviour below the current document's root element.
pub fn bind_document() -> Result<BindReport, JsValue> {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
        .ok_or_else(|| JsValue::from_str("cuebar: no document element to bind"))?;
    bind(&root)
}

/// Binds every behaviour below `root`, reporting to `sink`.
///
/// DOM failures while attaching listeners are propagated; missing optional
/// elements are not errors and show up as skips in the [`BindReport`].
pub fn bind_with(
    root: &Element,
    config: &BindConfig,
    sink: SharedSink,
) -> Result<BindReport, JsValue> {
    let s = &config.selectors;
    let mut report = BindReport::default();

    bind_each(
        root,
        s.comparison,
        ComponentKind::Comparison,
        &sink,
        &mut report,
        |el, id| comparison::bind_one(el, id, config, &sink),
    )?;
    bind_each(
        root,
        s.controls,
        ComponentKind::Controls,
        &sink,
        &mut report,
        |el, id| controls::bind_one(el, id, config, &sink),
    )?;
    bind_each(
        root,
        s.phase_bar,
        ComponentKind::PhaseTimeline,
        &sink,
        &mut report,
        |el, id| phase::bind_one(el, id, config, &sink),
    )?;
    bind_each(
        root,
        s.tooltip_trigger,
        ComponentKind::Tooltip,
        &sink,
        &mut report,
        |el, id| tooltip::bind_one(el, id, &sink),
    )?;

    Ok(report)
}

fn bind_each(
    root: &Element,
    selector: &str,
    kind: ComponentKind,
    sink: &SharedSink,
    report: &mut BindReport,
    mut bind_one: impl FnMut(&Element, ComponentId) -> Result<Binding, JsValue>,
) -> Result<(), JsValue> {
    for (index, el) in (0_u32..).zip(dom::query_all(root, selector)?) {
        let id = ComponentId::new(kind, index);
        let binding = bind_one(&el, id)?;
        with_tracer(sink, |tracer| report.record(id, binding, tracer));
    }
    Ok(())
}

/// Runs `f` with a tracer over `sink`.
///
/// If the sink is already borrowed (an event fired from inside another
/// handler's trace call), the event is dropped rather than panicking.
pub(crate) fn with_tracer<R>(sink: &SharedSink, f: impl FnOnce(&mut Tracer<'_>) -> R) -> R {
    match sink.try_borrow_mut() {
        Ok(mut guard) => f(&mut Tracer::new(&mut *guard)),
        Err(_) => f(&mut Tracer::none()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts_per_kind() {
        let mut report = BindReport::default();
        let mut tracer = Tracer::none();
        report.record(
            ComponentId::new(ComponentKind::Comparison, 0),
            Binding::Bound,
            &mut tracer,
        );
        report.record(
            ComponentId::new(ComponentKind::Controls, 0),
            Binding::Skipped(SkipReason::MissingVideo),
            &mut tracer,
        );
        report.record(
            ComponentId::new(ComponentKind::Tooltip, 0),
            Binding::Bound,
            &mut tracer,
        );
        report.record(
            ComponentId::new(ComponentKind::Tooltip, 1),
            Binding::Bound,
            &mut tracer,
        );

        assert_eq!(report.comparisons, Tally { bound: 1, skipped: 0 });
        assert_eq!(report.controls, Tally { bound: 0, skipped: 1 });
        assert_eq!(report.tooltips.bound, 2);
        assert_eq!(report.total_bound(), 3);
        assert_eq!(report.total_skipped(), 1);
    }

    #[test]
    fn busy_sink_does_not_panic() {
        let sink: SharedSink = Rc::new(RefCell::new(NoopSink));
        let _guard = sink.borrow_mut();
        let ran = with_tracer(&sink, |_| true);
        assert!(ran);
    }
}
