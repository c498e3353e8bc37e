// Copyright 2026 the Reveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reveal-on-intersection binding.

use alloc::boxed::Box;
use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use core::cell::RefCell;

use js_sys::Array;
use reveil_core::config::{EffectConfig, RevealConfig};
use reveil_core::reveal::{RevealController, ViewportClass};
use reveil_core::trace::{EffectAttachedEvent, EffectKind};
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, IntersectionObserver, Window};

use crate::dom::query_all;
use crate::listeners::Listeners;
use crate::observer::{IntersectionWatcher, entries_from};
use crate::{SharedSink, with_tracer};

/// Classifies the current viewport with `matchMedia`, falling back to
/// `innerWidth` where media queries are unavailable.
#[must_use]
pub fn viewport_class(window: &Window, config: &RevealConfig) -> ViewportClass {
    match window.match_media(&max_width_query(config.mobile_breakpoint_px)) {
        Ok(Some(list)) if list.matches() => ViewportClass::Mobile,
        Ok(Some(_)) => ViewportClass::Desktop,
        _ => {
            let width = window
                .inner_width()
                .ok()
                .and_then(|w| w.as_f64())
                .unwrap_or(f64::INFINITY);
            ViewportClass::from_width(width, config.mobile_breakpoint_px)
        }
    }
}

/// The media query matching viewports at most `breakpoint_px` wide.
fn max_width_query(breakpoint_px: f64) -> String {
    format!("(max-width: {breakpoint_px}px)")
}

/// Tags, staggers, and observes every reveal candidate.
pub fn attach_reveal(
    window: &Window,
    document: &Document,
    config: &EffectConfig,
    sink: Option<&SharedSink>,
) -> Result<Listeners, JsValue> {
    let targets = query_all(document, config.selectors.reveal)?;
    let controller = Rc::new(RefCell::new(RevealController::new(
        config.reveal,
        &config.selectors,
    )));

    let on_entries = {
        let controller = Rc::clone(&controller);
        let sink = sink.cloned();
        Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let mut watcher = IntersectionWatcher::from_observer(observer);
            let entries = entries_from(&entries);
            with_tracer(sink.as_ref(), |tracer| {
                controller
                    .borrow_mut()
                    .on_entries(entries, &mut watcher, tracer);
            });
        }) as Box<dyn FnMut(Array, IntersectionObserver)>)
    };

    let mut watcher = IntersectionWatcher::new(config.reveal.threshold, &on_entries)?;
    let viewport = viewport_class(window, &config.reveal);
    with_tracer(sink, |tracer| {
        controller
            .borrow_mut()
            .prepare(&targets, viewport, &mut watcher, tracer);
        tracer.effect_attached(&EffectAttachedEvent {
            effect: EffectKind::Reveal,
            elements: targets.len(),
        });
    });

    let mut listeners = Listeners::new();
    listeners.keep_observer(watcher.observer().clone(), on_entries);
    Ok(listeners)
}
