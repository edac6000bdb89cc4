// Copyright 2026 the Cuebar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binds `.phase-bar` timelines.

use alloc::rc::Rc;

use cuebar_core::config::BindConfig;
use cuebar_core::markup::SEGMENT_START_ATTR;
use cuebar_core::phase::PhaseTimeline;
use cuebar_core::progress::{parse_percent, progress_css};
use cuebar_core::trace::{ComponentId, SkipReason, SkippedEvent};
use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlElement, HtmlVideoElement};

use crate::dom::{card_for, listen, query, query_all, set_icon};
use crate::video::Video;
use crate::{Binding, SharedSink, with_tracer};

pub(crate) fn bind_one(
    bar: &Element,
    id: ComponentId,
    config: &BindConfig,
    sink: &SharedSink,
) -> Result<Binding, JsValue> {
    let s = &config.selectors;
    let Some(card) = card_for(bar, s.video_card)? else {
        return Ok(Binding::Skipped(SkipReason::MissingContainer));
    };
    let Some(video) = query::<HtmlVideoElement>(&card, s.video)? else {
        return Ok(Binding::Skipped(SkipReason::MissingVideo));
    };

    let timeline = Rc::new(PhaseTimeline::new(id, Video::new(video.clone())));
    let play_selector = s.controls_play;

    for segment in query_all(bar, s.phase_segment)? {
        let start = segment
            .get_attribute(SEGMENT_START_ATTR)
            .as_deref()
            .and_then(parse_percent);
        let Some(start) = start else {
            with_tracer(sink, |tracer| {
                tracer.skipped(&SkippedEvent {
                    component: id,
                    reason: SkipReason::InvalidSegmentStart,
                });
            });
            continue;
        };

        let timeline = Rc::clone(&timeline);
        let sink = Rc::clone(sink);
        let card = card.clone();
        listen(&segment, "click", move |_| {
            let icon = with_tracer(&sink, |tracer| timeline.jump_to(start, tracer));
            // Looked up per click: the control bar may be bound after us.
            if let Ok(Some(button)) = query::<HtmlElement>(&card, play_selector) {
                set_icon(&button, icon);
            }
        })?;
    }

    if let Some(indicator) = query::<HtmlElement>(bar, s.phase_indicator)? {
        listen(&video, "timeupdate", move |_| {
            if let Some(percent) = timeline.indicator_offset() {
                let _ = indicator.style().set_property("left", &progress_css(percent));
            }
        })?;
    }

    Ok(Binding::Bound)
}
