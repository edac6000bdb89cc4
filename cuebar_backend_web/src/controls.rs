// Copyright 2026 the Cuebar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binds `.video-player-controls` bars.
//!
//! Every button and display is optional; only the ones present get wired.

use alloc::rc::Rc;

use cuebar_core::config::BindConfig;
use cuebar_core::trace::{ComponentId, SkipReason, Tracer};
use cuebar_core::transport::{RateChange, Transport};
use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlVideoElement};

use crate::dom::{card_for, listen, query, set_fill, set_icon, set_scrub, set_text};
use crate::video::Video;
use crate::{Binding, SharedSink, with_tracer};

#[derive(Clone, Copy)]
enum Step {
    Slow,
    Fast,
    Restart,
}

impl Step {
    fn apply(self, transport: &Transport<Video>, tracer: &mut Tracer<'_>) -> RateChange {
        match self {
            Self::Slow => transport.slow(tracer),
            Self::Fast => transport.fast(tracer),
            Self::Restart => transport.restart(tracer),
        }
    }
}

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

    let play = query::<HtmlElement>(bar, s.controls_play)?;
    let speed = query::<HtmlElement>(bar, s.controls_speed)?;
    let scrub = query::<HtmlInputElement>(bar, s.controls_scrub)?;
    let elapsed = query::<HtmlElement>(bar, s.controls_elapsed)?;

    let transport = Rc::new(Transport::new(
        id,
        Video::new(video.clone()),
        config.rate_limits,
    ));

    if let Some(button) = play.clone() {
        let transport = Rc::clone(&transport);
        let sink = Rc::clone(sink);
        let target = button.clone();
        listen(&target, "click", move |_| {
            let icon = with_tracer(&sink, |tracer| transport.toggle(tracer));
            set_icon(&button, icon);
        })?;
    }

    for (selector, step) in [
        (s.controls_slow, Step::Slow),
        (s.controls_fast, Step::Fast),
        (s.controls_restart, Step::Restart),
    ] {
        let Some(button) = query::<HtmlElement>(bar, selector)? else {
            continue;
        };
        let transport = Rc::clone(&transport);
        let sink = Rc::clone(sink);
        let play = play.clone();
        let speed = speed.clone();
        listen(&button, "click", move |_| {
            let change = with_tracer(&sink, |tracer| step.apply(&transport, tracer));
            if let Some(button) = &play {
                set_icon(button, change.icon);
            }
            if let Some(label) = &speed {
                set_text(label, &change.label);
            }
        })?;
    }

    if scrub.is_some() || elapsed.is_some() {
        let transport = Rc::clone(&transport);
        let scrub = scrub.clone();
        listen(&video, "timeupdate", move |_| {
            let frame = transport.time_update();
            if let Some(bar) = &scrub {
                set_scrub(bar, frame.percent);
            }
            if let Some(label) = &elapsed {
                set_text(label, &frame.label);
            }
        })?;
    }

    if let Some(bar) = scrub {
        let transport = Rc::clone(&transport);
        let sink = Rc::clone(sink);
        let target = bar.clone();
        listen(&target, "input", move |_| {
            let requested = bar.value_as_number();
            let percent = with_tracer(&sink, |tracer| transport.scrub_to_percent(requested, tracer));
            set_fill(&bar, percent);
        })?;
    }

    if let Some(label) = &speed {
        set_text(label, &transport.speed_label());
    }

    Ok(Binding::Bound)
}
