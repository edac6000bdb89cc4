// Copyright 2026 the Cuebar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small DOM helpers shared by the component binders.

use alloc::boxed::Box;
use alloc::vec::Vec;

use cuebar_core::markup::{PROGRESS_PROPERTY, PlayIcon};
use cuebar_core::progress::progress_css;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, EventTarget, HtmlElement, HtmlInputElement};

/// First descendant of `scope` matching `selector`, if it has type `T`.
pub(crate) fn query<T: JsCast>(scope: &Element, selector: &str) -> Result<Option<T>, JsValue> {
    Ok(scope
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<T>().ok()))
}

/// All descendant elements of `scope` matching `selector`, in document order.
pub(crate) fn query_all(scope: &Element, selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = scope.query_selector_all(selector)?;
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(el) = list.get(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            out.push(el);
        }
    }
    Ok(out)
}

/// The enclosing video card of `el`, or its parent when there is none.
pub(crate) fn card_for(el: &Element, card_selector: &str) -> Result<Option<Element>, JsValue> {
    Ok(el.closest(card_selector)?.or_else(|| el.parent_element()))
}

/// Registers `handler` for `event` on `target` for the lifetime of the page.
///
/// The closure is leaked: bound components live as long as the document.
pub(crate) fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Replaces a toggle button's glyph.
pub(crate) fn set_icon(button: &HtmlElement, icon: PlayIcon) {
    button.set_inner_html(icon.markup());
}

pub(crate) fn set_text(el: &HtmlElement, text: &str) {
    el.set_text_content(Some(text));
}

/// Sets only the bar's fill, leaving the slider where the user dragged it.
pub(crate) fn set_fill(bar: &HtmlInputElement, percent: f64) {
    let _ = bar
        .style()
        .set_property(PROGRESS_PROPERTY, &progress_css(percent));
}

/// Moves the slider and its fill to `percent`.
pub(crate) fn set_scrub(bar: &HtmlInputElement, percent: f64) {
    bar.set_value_as_number(percent);
    set_fill(bar, percent);
}
