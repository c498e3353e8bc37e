// Copyright 2026 the Reveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ownership of registered browser callbacks.
//!
//! A JS closure must outlive its registration. [`Listeners`] keeps every
//! closure an effect registered, together with what it was registered on, and
//! unregisters all of them when dropped. Forgetting a `Listeners` keeps the
//! effects running for the page's lifetime.

use alloc::vec::Vec;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Event, EventTarget, IntersectionObserver};

use crate::raf::RafScheduler;

/// Event listener closure type.
pub(crate) type EventClosure = Closure<dyn FnMut(Event)>;

/// `IntersectionObserver` callback closure type.
pub(crate) type ObserverClosure = Closure<dyn FnMut(Array, IntersectionObserver)>;

struct EventRegistration {
    target: EventTarget,
    event: &'static str,
    closure: EventClosure,
}

struct ObserverRegistration {
    observer: IntersectionObserver,
    _closure: ObserverClosure,
}

/// Callbacks registered by one or more effects.
#[derive(Default)]
pub struct Listeners {
    events: Vec<EventRegistration>,
    observers: Vec<ObserverRegistration>,
    schedulers: Vec<RafScheduler>,
}

impl core::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Listeners")
            .field("events", &self.events.len())
            .field("observers", &self.observers.len())
            .field("schedulers", &self.schedulers.len())
            .finish()
    }
}

impl Listeners {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `closure` for `event` on `target` and keeps it.
    pub(crate) fn listen(
        &mut self,
        target: &EventTarget,
        event: &'static str,
        closure: EventClosure,
    ) -> Result<(), JsValue> {
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        self.events.push(EventRegistration {
            target: target.clone(),
            event,
            closure,
        });
        Ok(())
    }

    /// Keeps an observer and its callback; the observer is disconnected on
    /// drop.
    pub(crate) fn keep_observer(&mut self, observer: IntersectionObserver, closure: ObserverClosure) {
        self.observers.push(ObserverRegistration {
            observer,
            _closure: closure,
        });
    }

    /// Keeps a frame scheduler; its pending frame is cancelled and its
    /// callback released on drop.
    pub(crate) fn keep_scheduler(&mut self, scheduler: RafScheduler) {
        self.schedulers.push(scheduler);
    }

    /// Moves every registration from `other` into `self`.
    pub fn extend(&mut self, mut other: Self) {
        self.events.append(&mut other.events);
        self.observers.append(&mut other.observers);
        self.schedulers.append(&mut other.schedulers);
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        for reg in self.events.drain(..) {
            let _ = reg
                .target
                .remove_event_listener_with_callback(reg.event, reg.closure.as_ref().unchecked_ref());
        }
        for reg in self.observers.drain(..) {
            reg.observer.disconnect();
        }
        for scheduler in self.schedulers.drain(..) {
            // The frame callback holds the effect state, which holds the
            // scheduler; releasing the callback breaks that cycle.
            scheduler.clear();
        }
    }
}
