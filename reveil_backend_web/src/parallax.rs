// Copyright 2026 the Reveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll parallax binding.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;

use reveil_core::config::EffectConfig;
use reveil_core::parallax::Parallax;
use reveil_core::trace::{EffectAttachedEvent, EffectKind};
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event, Window};

use crate::dom::{DomTarget, query_all};
use crate::listeners::Listeners;
use crate::raf::RafScheduler;
use crate::{SharedSink, with_tracer};

type ParallaxState = Rc<RefCell<Parallax<DomTarget, RafScheduler>>>;

/// Tracks every matching image and recomputes their offsets at most once per
/// animation frame while the window scrolls.
pub fn attach_parallax(
    window: &Window,
    document: &Document,
    config: &EffectConfig,
    sink: Option<&SharedSink>,
) -> Result<Listeners, JsValue> {
    let targets = query_all(document, config.selectors.parallax)?;
    let count = targets.len();
    let scheduler = RafScheduler::new();
    let state: ParallaxState = Rc::new(RefCell::new(Parallax::new(
        config.parallax,
        targets,
        scheduler.clone(),
    )));

    {
        let state = Rc::clone(&state);
        let window = window.clone();
        let sink = sink.cloned();
        scheduler.set_callback(move |_timestamp_ms| {
            let viewport_height = window
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or(0.0);
            with_tracer(sink.as_ref(), |tracer| {
                state.borrow_mut().on_frame(viewport_height, tracer);
            });
        });
    }

    let on_scroll = {
        let state = Rc::clone(&state);
        let window = window.clone();
        let sink = sink.cloned();
        Closure::wrap(Box::new(move |_event: Event| {
            let scroll_y = window.scroll_y().unwrap_or(0.0);
            with_tracer(sink.as_ref(), |tracer| {
                state.borrow_mut().on_scroll(scroll_y, tracer);
            });
        }) as Box<dyn FnMut(_)>)
    };

    let mut listeners = Listeners::new();
    listeners.listen(window, "scroll", on_scroll)?;
    listeners.keep_scheduler(scheduler);

    with_tracer(sink, |tracer| {
        tracer.effect_attached(&EffectAttachedEvent {
            effect: EffectKind::Parallax,
            elements: count,
        });
    });
    Ok(listeners)
}
