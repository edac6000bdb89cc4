// Copyright 2026 the Cuebar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static page wired up by cuebar.
//!
//! `index.html` carries one of each behaviour: a synchronized comparison, a
//! video card with a control bar and a phase timeline, and a few tooltip
//! triggers. The start function binds them all and logs every trace event to
//! the browser console.
//!
//! Build with: `wasm-pack build --target web demos/web_page`
//! Then serve `demos/web_page/` and open `index.html`.

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::format;
use alloc::rc::Rc;
use core::cell::RefCell;

use cuebar_backend_web::{ConsoleSink, bind_with};
use cuebar_core::config::BindConfig;
use wasm_bindgen::prelude::*;

/// Entry point: binds the page and logs a summary.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() -> Result<(), JsValue> {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
        .ok_or_else(|| JsValue::from_str("no document element"))?;

    let sink = Rc::new(RefCell::new(ConsoleSink::with_prefix("[web_page]")));
    let report = bind_with(&root, &BindConfig::page(), sink)?;

    web_sys::console::log_1(&JsValue::from_str(&format!(
        "[web_page] bound {} component(s), skipped {}",
        report.total_bound(),
        report.total_skipped()
    )));
    Ok(())
}
