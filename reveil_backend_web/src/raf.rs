// Copyright 2026 the Reveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot `requestAnimationFrame` scheduling.
//!
//! [`RafScheduler`] arms a single callback for the next animation frame each
//! time [`request_frame`](FrameScheduler::request_frame) is called. Unlike a
//! continuous loop it never re-registers itself: the effect decides when the
//! next frame is needed, which is what lets the parallax coalesce a burst of
//! scroll events into one pass.

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use core::cell::{Cell, RefCell};

use reveil_core::element::FrameScheduler;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

// Direct global bindings instead of `web_sys::Window` methods, so no Window
// lookup happens on every scroll event.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &JsValue) -> i32;

    #[wasm_bindgen(js_name = "cancelAnimationFrame")]
    fn cancel_animation_frame(id: i32);
}

type RafClosure = Closure<dyn FnMut(f64)>;

struct RafInner {
    /// The JS closure handed to `requestAnimationFrame`, set by
    /// [`RafScheduler::set_callback`].
    closure: RefCell<Option<RafClosure>>,

    /// ID of the armed frame, if one is pending.
    raf_id: Cell<Option<i32>>,
}

/// A [`FrameScheduler`] backed by `requestAnimationFrame`.
///
/// Clones share one callback and one pending frame. Call
/// [`set_callback`](Self::set_callback) before the first request; requests
/// made without a callback are dropped.
#[derive(Clone)]
pub struct RafScheduler {
    inner: Rc<RafInner>,
}

impl Default for RafScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl RafScheduler {
    /// Creates a scheduler with no callback.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RafInner {
                closure: RefCell::new(None),
                raf_id: Cell::new(None),
            }),
        }
    }

    /// Sets the callback run on each armed frame. It receives the frame's
    /// `DOMHighResTimeStamp` in milliseconds.
    pub fn set_callback(&self, mut callback: impl FnMut(f64) + 'static) {
        let inner: Weak<RafInner> = Rc::downgrade(&self.inner);
        let closure = Closure::wrap(Box::new(move |timestamp_ms: f64| {
            if let Some(inner) = inner.upgrade() {
                inner.raf_id.set(None);
            }
            callback(timestamp_ms);
        }) as Box<dyn FnMut(f64)>);
        *self.inner.closure.borrow_mut() = Some(closure);
    }

    /// Cancels the armed frame, if any.
    pub fn cancel(&self) {
        if let Some(id) = self.inner.raf_id.take() {
            cancel_animation_frame(id);
        }
    }

    /// Cancels the armed frame and releases the callback.
    pub fn clear(&self) {
        self.cancel();
        self.inner.closure.borrow_mut().take();
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) {
        if let Some(ref closure) = *self.inner.closure.borrow() {
            let id = request_animation_frame(closure.as_ref().unchecked_ref());
            self.inner.raf_id.set(Some(id));
        }
    }
}

impl core::fmt::Debug for RafScheduler {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RafScheduler")
            .field("pending", &self.inner.raf_id.get().is_some())
            .finish_non_exhaustive()
    }
}
