// Copyright 2026 the Cuebar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binds `[data-tooltip]` triggers.

use alloc::rc::Rc;
use core::cell::RefCell;

use cuebar_core::markup::{TOOLTIP_ATTR, TOOLTIP_CLASS, TOOLTIP_VISIBLE_CLASS};
use cuebar_core::tooltip::TooltipState;
use cuebar_core::trace::ComponentId;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};

use crate::dom::listen;
use crate::{Binding, SharedSink, with_tracer};

pub(crate) fn bind_one(
    trigger: &Element,
    id: ComponentId,
    sink: &SharedSink,
) -> Result<Binding, JsValue> {
    let state = TooltipState::new(id, trigger.get_attribute(TOOLTIP_ATTR).unwrap_or_default());

    let document = trigger
        .owner_document()
        .ok_or_else(|| JsValue::from_str("tooltip trigger has no owner document"))?;
    let tip: HtmlElement = document.create_element("div")?.unchecked_into();
    tip.set_class_name(TOOLTIP_CLASS);
    tip.set_text_content(Some(state.text()));
    if let Some(trigger) = trigger.dyn_ref::<HtmlElement>() {
        trigger.style().set_property("position", "relative")?;
    }
    trigger.append_child(&tip)?;

    let state = Rc::new(RefCell::new(state));
    for (event, show) in [("mouseenter", true), ("mouseleave", false)] {
        let state = Rc::clone(&state);
        let sink = Rc::clone(sink);
        let tip = tip.clone();
        listen(trigger, event, move |_| {
            let visible = with_tracer(&sink, |tracer| {
                let mut state = state.borrow_mut();
                if show {
                    state.enter(tracer)
                } else {
                    state.leave(tracer)
                }
            });
            let _ = tip
                .class_list()
                .toggle_with_force(TOOLTIP_VISIBLE_CLASS, visible);
        })?;
    }

    Ok(Binding::Bound)
}
