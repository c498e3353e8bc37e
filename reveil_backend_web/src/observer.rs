// Copyright 2026 the Reveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `IntersectionObserver` as a visibility watcher.

use alloc::vec::Vec;

use js_sys::Array;
use reveil_core::element::{VisibilityEntry, VisibilityWatcher, max_visible_ratio};
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom::DomTarget;
use crate::listeners::ObserverClosure;

/// A [`VisibilityWatcher`] over a browser `IntersectionObserver`.
///
/// The browser delivers an initial entry for each newly observed element,
/// which is what reveals content that is already on screen at load.
#[derive(Clone, Debug)]
pub struct IntersectionWatcher {
    observer: IntersectionObserver,
}

impl IntersectionWatcher {
    /// Creates an observer rooted at the viewport with no margin, notifying
    /// at `threshold`.
    pub fn new(threshold: f64, callback: &ObserverClosure) -> Result<Self, JsValue> {
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        init.set_root_margin("0px");
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        Ok(Self { observer })
    }

    /// Wraps the observer handed to an observer callback.
    #[must_use]
    pub fn from_observer(observer: IntersectionObserver) -> Self {
        Self { observer }
    }

    /// Returns the underlying observer.
    #[must_use]
    pub fn observer(&self) -> &IntersectionObserver {
        &self.observer
    }
}

impl VisibilityWatcher for IntersectionWatcher {
    type Target = DomTarget;

    fn observe(&mut self, target: &DomTarget) {
        self.observer.observe(target.element());
    }

    fn unobserve(&mut self, target: &DomTarget) {
        self.observer.unobserve(target.element());
    }
}

/// Converts the callback's entry array into visibility entries.
///
/// Missing root bounds (a cross-origin root) report a reachable ratio of
/// `0.0`, so any intersection counts for those entries.
pub(crate) fn entries_from(array: &Array) -> Vec<VisibilityEntry<DomTarget>> {
    array
        .iter()
        .filter_map(|v| v.dyn_into::<IntersectionObserverEntry>().ok())
        .map(|entry| {
            let root_height = entry.root_bounds().map_or(0.0, |r| r.height());
            VisibilityEntry {
                target: DomTarget::new(entry.target()),
                is_intersecting: entry.is_intersecting(),
                intersection_ratio: entry.intersection_ratio(),
                reachable_ratio: max_visible_ratio(
                    entry.bounding_client_rect().height(),
                    root_height,
                ),
            }
        })
        .collect()
}
