// Copyright 2026 the Reveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Theme entry point for the Reveil interaction layer.
//!
//! The theme enqueues the generated module in the footer. On start it waits
//! for `DOMContentLoaded` if the document is still parsing, then installs
//! every effect with the theme's configuration and keeps the listeners for
//! the page's lifetime.
//!
//! Build with: `wasm-pack build --target web reveil_theme`
//! Enable console diagnostics with `--features trace`.

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::rc::Rc;
use core::cell::RefCell;

use reveil_backend_web::{ConsoleSink, SharedSink};
use reveil_core::config::EffectConfig;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::Event;

/// Entry point: installs the layer now, or once the DOM is parsed.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() -> Result<(), JsValue> {
    let (_window, document) = reveil_backend_web::window_and_document()?;

    if document.ready_state() != "loading" {
        return start();
    }

    let on_ready: Closure<dyn FnMut(Event)> = Closure::once(move |_event: Event| {
        if let Err(err) = start() {
            web_sys::console::error_1(&err);
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
    on_ready.forget();
    Ok(())
}

fn start() -> Result<(), JsValue> {
    let sink: Option<SharedSink> = if cfg!(feature = "trace") {
        Some(Rc::new(RefCell::new(ConsoleSink::new())))
    } else {
        None
    };

    let listeners = reveil_backend_web::install(&EffectConfig::theme(), sink.as_ref())?;
    // Listeners stay registered until the page unloads.
    core::mem::forget(listeners);
    Ok(())
}
