// Copyright 2026 the Reveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for the Reveil interaction layer.
//!
//! This crate binds the capability traits of `reveil_core` to browser APIs:
//!
//! - [`DomTarget`]: a live DOM element as a [`StyleTarget`]
//! - [`IntersectionWatcher`]: `IntersectionObserver` as a [`VisibilityWatcher`]
//! - [`RafScheduler`]: one-shot `requestAnimationFrame` as a [`FrameScheduler`]
//! - [`ConsoleSink`]: trace events as `console.debug` lines
//!
//! Each effect has its own `attach_*` function returning the [`Listeners`]
//! it registered; [`install`] attaches every enabled effect at once.
//!
//! [`StyleTarget`]: reveil_core::element::StyleTarget
//! [`VisibilityWatcher`]: reveil_core::element::VisibilityWatcher
//! [`FrameScheduler`]: reveil_core::element::FrameScheduler

#![no_std]

extern crate alloc;

mod console;
mod dom;
mod listeners;
mod media;
mod observer;
mod parallax;
mod pointer;
mod raf;
mod reveal;

pub use console::ConsoleSink;
pub use dom::{DomTarget, query_all};
pub use listeners::Listeners;
pub use media::{VideoTarget, attach_hero_video};
pub use observer::IntersectionWatcher;
pub use parallax::attach_parallax;
pub use pointer::{attach_magnetic, attach_tilt};
pub use raf::RafScheduler;
pub use reveal::{attach_reveal, viewport_class};

use alloc::rc::Rc;
use core::cell::RefCell;

use reveil_core::config::{EffectConfig, Selectors};
use reveil_core::trace::{TraceSink, Tracer};
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

/// A trace sink shared by every listener closure.
pub type SharedSink = Rc<RefCell<dyn TraceSink>>;

/// Runs `f` with a tracer over `sink`, or a discarding tracer if there is
/// none.
pub(crate) fn with_tracer<R>(sink: Option<&SharedSink>, f: impl FnOnce(&mut Tracer<'_>) -> R) -> R {
    match sink {
        Some(sink) => {
            let mut guard = sink.borrow_mut();
            f(&mut Tracer::new(&mut *guard))
        }
        None => f(&mut Tracer::none()),
    }
}

/// Returns the global `window` and its `document`.
pub fn window_and_document() -> Result<(Window, Document), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;
    Ok((window, document))
}

/// Adds the page-loaded class to `<body>`. A document without a body is left
/// alone.
pub fn mark_page_loaded(document: &Document, selectors: &Selectors) -> Result<(), JsValue> {
    if let Some(body) = document.body() {
        body.class_list().add_1(selectors.page_loaded_class)?;
    }
    Ok(())
}

/// Marks the page loaded and attaches every effect enabled in `config`.
///
/// The returned [`Listeners`] detach everything when dropped; keep it alive
/// for as long as the effects should run.
pub fn install(config: &EffectConfig, sink: Option<&SharedSink>) -> Result<Listeners, JsValue> {
    let (window, document) = window_and_document()?;
    mark_page_loaded(&document, &config.selectors)?;

    let mut all = Listeners::new();
    if config.enabled.reveal {
        all.extend(attach_reveal(&window, &document, config, sink)?);
    }
    if config.enabled.magnetic {
        all.extend(attach_magnetic(&document, config, sink)?);
    }
    if config.enabled.parallax {
        all.extend(attach_parallax(&window, &document, config, sink)?);
    }
    if config.enabled.tilt {
        all.extend(attach_tilt(&document, config, sink)?);
    }
    if config.enabled.hero_video {
        all.extend(attach_hero_video(&document, config, sink)?);
    }
    Ok(all)
}
