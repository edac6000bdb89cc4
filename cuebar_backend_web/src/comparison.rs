// Copyright 2026 the Cuebar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binds `.video-comparison` containers.

use alloc::rc::Rc;

use cuebar_core::comparison::ComparisonSync;
use cuebar_core::config::BindConfig;
use cuebar_core::trace::{ComponentId, SkipReason};
use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlVideoElement};

use crate::dom::{listen, query, set_fill, set_icon, set_scrub, set_text};
use crate::video::Video;
use crate::{Binding, SharedSink, with_tracer};

pub(crate) fn bind_one(
    comp: &Element,
    id: ComponentId,
    config: &BindConfig,
    sink: &SharedSink,
) -> Result<Binding, JsValue> {
    let s = &config.selectors;
    let Some(primary) = query::<HtmlVideoElement>(comp, s.comparison_primary)? else {
        return Ok(Binding::Skipped(SkipReason::MissingVideo));
    };
    let Some(follower) = query::<HtmlVideoElement>(comp, s.comparison_follower)? else {
        return Ok(Binding::Skipped(SkipReason::MissingFollower));
    };
    let seek = query::<HtmlInputElement>(comp, s.comparison_seek)?;
    let play = query::<HtmlElement>(comp, s.comparison_play)?;
    let time = query::<HtmlElement>(comp, s.comparison_time)?;

    let sync = Rc::new(ComparisonSync::new(
        id,
        Video::new(primary.clone()),
        Video::new(follower),
        config.comparison_rate,
    ));

    if let Some(button) = play.clone() {
        let sync = Rc::clone(&sync);
        let sink = Rc::clone(sink);
        let target = button.clone();
        listen(&target, "click", move |_| {
            let icon = with_tracer(&sink, |tracer| sync.toggle(tracer));
            set_icon(&button, icon);
        })?;
    }

    if seek.is_some() || time.is_some() {
        let sync = Rc::clone(&sync);
        let seek = seek.clone();
        let time = time.clone();
        listen(&primary, "timeupdate", move |_| {
            let frame = sync.time_update();
            if let Some(bar) = &seek {
                set_scrub(bar, frame.percent);
            }
            if let Some(label) = &time {
                set_text(label, &frame.label);
            }
        })?;
    }

    if let Some(bar) = seek.clone() {
        let sync = Rc::clone(&sync);
        let sink = Rc::clone(sink);
        let target = bar.clone();
        listen(&target, "input", move |_| {
            let requested = bar.value_as_number();
            let percent = with_tracer(&sink, |tracer| sync.seek_to_percent(requested, tracer));
            set_fill(&bar, percent);
        })?;
    }

    let sink = Rc::clone(sink);
    listen(&primary, "ended", move |_| {
        let reset = with_tracer(&sink, |tracer| sync.ended(tracer));
        if let Some(button) = &play {
            set_icon(button, reset.icon);
        }
        if let Some(bar) = &seek {
            set_scrub(bar, reset.frame.percent);
        }
        if let Some(label) = &time {
            set_text(label, &reset.frame.label);
        }
    })?;

    Ok(Binding::Bound)
}
