// Copyright 2026 the Reveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer-reactive bindings: magnetic buttons and tilt cards.

use alloc::boxed::Box;

use kurbo::Point;
use reveil_core::config::EffectConfig;
use reveil_core::magnetic::MagneticHover;
use reveil_core::tilt::TiltCard;
use reveil_core::trace::{EffectAttachedEvent, EffectKind};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Document, Event, MouseEvent};

use crate::dom::{DomTarget, query_all};
use crate::listeners::Listeners;
use crate::{SharedSink, with_tracer};

/// Attaches the magnetic hover to every matching button.
pub fn attach_magnetic(
    document: &Document,
    config: &EffectConfig,
    sink: Option<&SharedSink>,
) -> Result<Listeners, JsValue> {
    let hover = MagneticHover::new(config.magnetic);
    attach_pointer(
        document,
        config.selectors.magnetic,
        EffectKind::Magnetic,
        sink,
        move |target, pointer| hover.on_move(target, pointer),
        move |target| hover.on_leave(target),
    )
}

/// Attaches the 3-D tilt to every matching card.
pub fn attach_tilt(
    document: &Document,
    config: &EffectConfig,
    sink: Option<&SharedSink>,
) -> Result<Listeners, JsValue> {
    let tilt = TiltCard::new(config.tilt);
    attach_pointer(
        document,
        config.selectors.tilt,
        EffectKind::Tilt,
        sink,
        move |target, pointer| tilt.on_move(target, pointer),
        move |target| tilt.on_leave(target),
    )
}

fn attach_pointer<M, L>(
    document: &Document,
    selector: &str,
    effect: EffectKind,
    sink: Option<&SharedSink>,
    on_move: M,
    on_leave: L,
) -> Result<Listeners, JsValue>
where
    M: Fn(&DomTarget, Point) + Copy + 'static,
    L: Fn(&DomTarget) + Copy + 'static,
{
    let targets = query_all(document, selector)?;
    let mut listeners = Listeners::new();

    for target in &targets {
        let moved = {
            let target = target.clone();
            Closure::wrap(Box::new(move |event: Event| {
                if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                    let pointer = Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y()));
                    on_move(&target, pointer);
                }
            }) as Box<dyn FnMut(_)>)
        };
        listeners.listen(target.element(), "mousemove", moved)?;

        let left = {
            let target = target.clone();
            Closure::wrap(Box::new(move |_event: Event| {
                on_leave(&target);
            }) as Box<dyn FnMut(_)>)
        };
        listeners.listen(target.element(), "mouseleave", left)?;
    }

    with_tracer(sink, |tracer| {
        tracer.effect_attached(&EffectAttachedEvent {
            effect,
            elements: targets.len(),
        });
    });
    Ok(listeners)
}
