// Copyright 2026 the Reveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic fakes for the Reveil capability traits.
//!
//! - [`FakeElement`]: a shared element handle with an inline style map, a
//!   class list, and a settable bounding rect.
//! - [`FakeWatcher`]: an `IntersectionObserver` stand-in that computes
//!   visibility from element rects against a scrollable viewport.
//! - [`ManualFrames`]: a frame scheduler that only counts requests; the test
//!   decides when the frame runs.
//! - [`RecordingSink`]: a trace sink that keeps every event.

#![no_std]

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::rc::Rc;
use alloc::string::{String, ToString as _};
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use kurbo::Rect;
use reveil_core::element::{
    FrameScheduler, StyleTarget, VisibilityEntry, VisibilityWatcher, max_visible_ratio,
};
use reveil_core::hero::Playback;
use reveil_core::trace::{
    EffectAttachedEvent, FrameRequestedEvent, ParallaxFrameEvent, RevealPreparedEvent,
    RevealedEvent, TraceSink,
};

// ---------------------------------------------------------------------------
// FakeElement
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct ElementState {
    rect: Cell<Rect>,
    styles: RefCell<BTreeMap<String, String>>,
    classes: RefCell<Vec<String>>,
    class_adds: RefCell<BTreeMap<String, u32>>,
    style_writes: Cell<u32>,
    pauses: Cell<u32>,
}

/// A shared element handle. Clones refer to the same element.
#[derive(Clone, Debug, Default)]
pub struct FakeElement {
    state: Rc<ElementState>,
}

impl PartialEq for FakeElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl Eq for FakeElement {}

impl FakeElement {
    /// Creates an element occupying `rect` in document coordinates.
    #[must_use]
    pub fn with_rect(rect: Rect) -> Self {
        let el = Self::default();
        el.state.rect.set(rect);
        el
    }

    /// Moves the element.
    pub fn set_rect(&self, rect: Rect) {
        self.state.rect.set(rect);
    }

    /// Returns the element's rect.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.state.rect.get()
    }

    /// Returns the inline value of `property`, if set.
    #[must_use]
    pub fn style(&self, property: &str) -> Option<String> {
        self.state.styles.borrow().get(property).cloned()
    }

    /// Number of inline style writes so far.
    #[must_use]
    pub fn style_writes(&self) -> u32 {
        self.state.style_writes.get()
    }

    /// Number of times `class` was actually added (absent → present).
    #[must_use]
    pub fn class_adds(&self, class: &str) -> u32 {
        self.state
            .class_adds
            .borrow()
            .get(class)
            .copied()
            .unwrap_or(0)
    }

    /// Number of times [`Playback::pause`] was called.
    #[must_use]
    pub fn pauses(&self) -> u32 {
        self.state.pauses.get()
    }
}

impl StyleTarget for FakeElement {
    fn set_style(&self, property: &str, value: &str) {
        self.state
            .styles
            .borrow_mut()
            .insert(property.to_string(), value.to_string());
        self.state.style_writes.set(self.state.style_writes.get() + 1);
    }

    fn remove_style(&self, property: &str) {
        self.state.styles.borrow_mut().remove(property);
    }

    fn add_class(&self, class: &str) {
        if self.has_class(class) {
            return;
        }
        self.state.classes.borrow_mut().push(class.to_string());
        *self
            .state
            .class_adds
            .borrow_mut()
            .entry(class.to_string())
            .or_insert(0) += 1;
    }

    fn has_class(&self, class: &str) -> bool {
        self.state.classes.borrow().iter().any(|c| c == class)
    }

    fn bounding_rect(&self) -> Rect {
        self.state.rect.get()
    }
}

impl Playback for FakeElement {
    fn pause(&self) {
        self.state.pauses.set(self.state.pauses.get() + 1);
    }
}

/// Returns the visible fraction of `rect` within `0..viewport_height`.
#[must_use]
pub fn visible_ratio(rect: Rect, viewport_height: f64) -> f64 {
    let height = rect.height();
    if height <= 0.0 {
        return 0.0;
    }
    let visible = rect.y1.min(viewport_height) - rect.y0.max(0.0);
    (visible.max(0.0) / height).min(1.0)
}

// ---------------------------------------------------------------------------
// FakeWatcher
// ---------------------------------------------------------------------------

/// An `IntersectionObserver` stand-in.
///
/// Element rects are in document coordinates; [`scroll_to`](Self::scroll_to)
/// shifts the viewport. Like the browser, an initial entry is queued for each
/// element as soon as it is observed. Later entries are queued whenever an
/// element crosses the threshold or starts or stops intersecting at all.
#[derive(Debug)]
pub struct FakeWatcher {
    threshold: f64,
    viewport_height: f64,
    scroll_y: f64,
    observed: Vec<(FakeElement, Seen)>,
    queue: Vec<VisibilityEntry<FakeElement>>,
    observe_calls: u32,
}

impl FakeWatcher {
    /// Creates a watcher with the given threshold and viewport height.
    #[must_use]
    pub fn new(threshold: f64, viewport_height: f64) -> Self {
        Self {
            threshold,
            viewport_height,
            scroll_y: 0.0,
            observed: Vec::new(),
            queue: Vec::new(),
            observe_calls: 0,
        }
    }

    /// Scrolls the viewport and queues entries for every element whose
    /// threshold side or intersection state changed.
    pub fn scroll_to(&mut self, scroll_y: f64) {
        self.scroll_y = scroll_y;
        let mut changed = Vec::new();
        for (el, seen) in &mut self.observed {
            let ratio = ratio_at(el, scroll_y, self.viewport_height);
            let now = Seen::at(ratio, self.threshold);
            if now != *seen {
                *seen = now;
                changed.push(entry_for(el, ratio, self.viewport_height));
            }
        }
        self.queue.extend(changed);
    }

    /// Drains the queued entries.
    pub fn take_entries(&mut self) -> Vec<VisibilityEntry<FakeElement>> {
        core::mem::take(&mut self.queue)
    }

    /// Returns `true` if `el` is currently observed.
    #[must_use]
    pub fn is_observed(&self, el: &FakeElement) -> bool {
        self.observed.iter().any(|(o, _)| o == el)
    }

    /// Number of elements currently observed.
    #[must_use]
    pub fn observed_len(&self) -> usize {
        self.observed.len()
    }

    /// Total calls to [`VisibilityWatcher::observe`].
    #[must_use]
    pub fn observe_calls(&self) -> u32 {
        self.observe_calls
    }
}

fn ratio_at(el: &FakeElement, scroll_y: f64, viewport_height: f64) -> f64 {
    let rect = el.rect();
    let on_screen = Rect::new(rect.x0, rect.y0 - scroll_y, rect.x1, rect.y1 - scroll_y);
    visible_ratio(on_screen, viewport_height)
}

/// What the watcher last reported for an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Seen {
    above_threshold: bool,
    intersecting: bool,
}

impl Seen {
    fn at(ratio: f64, threshold: f64) -> Self {
        Self {
            above_threshold: ratio >= threshold,
            intersecting: ratio > 0.0,
        }
    }
}

fn entry_for(
    el: &FakeElement,
    ratio: f64,
    viewport_height: f64,
) -> VisibilityEntry<FakeElement> {
    VisibilityEntry {
        target: el.clone(),
        is_intersecting: ratio > 0.0,
        intersection_ratio: ratio,
        reachable_ratio: max_visible_ratio(el.rect().height(), viewport_height),
    }
}

impl VisibilityWatcher for FakeWatcher {
    type Target = FakeElement;

    fn observe(&mut self, target: &FakeElement) {
        self.observe_calls += 1;
        if self.is_observed(target) {
            return;
        }
        let ratio = ratio_at(target, self.scroll_y, self.viewport_height);
        self.observed
            .push((target.clone(), Seen::at(ratio, self.threshold)));
        self.queue
            .push(entry_for(target, ratio, self.viewport_height));
    }

    fn unobserve(&mut self, target: &FakeElement) {
        self.observed.retain(|(o, _)| o != target);
    }
}

// ---------------------------------------------------------------------------
// ManualFrames
// ---------------------------------------------------------------------------

/// A frame scheduler that counts requests. Clones share the count.
#[derive(Clone, Debug, Default)]
pub struct ManualFrames {
    requests: Rc<Cell<u32>>,
}

impl ManualFrames {
    /// Creates a scheduler with no requests.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total frames requested so far.
    #[must_use]
    pub fn requests(&self) -> u32 {
        self.requests.get()
    }
}

impl FrameScheduler for ManualFrames {
    fn request_frame(&mut self) {
        self.requests.set(self.requests.get() + 1);
    }
}

// ---------------------------------------------------------------------------
// RecordingSink
// ---------------------------------------------------------------------------

/// One event captured by [`RecordingSink`].
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedEvent {
    /// [`TraceSink::on_effect_attached`].
    EffectAttached(EffectAttachedEvent),
    /// [`TraceSink::on_reveal_prepared`].
    RevealPrepared(RevealPreparedEvent),
    /// [`TraceSink::on_revealed`].
    Revealed(RevealedEvent),
    /// [`TraceSink::on_frame_requested`].
    FrameRequested(FrameRequestedEvent),
    /// [`TraceSink::on_parallax_frame`].
    ParallaxFrame(ParallaxFrameEvent),
    /// [`TraceSink::on_hero_frozen`].
    HeroFrozen,
}

/// A [`TraceSink`] that keeps every event in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    /// Events in arrival order.
    pub events: Vec<RecordedEvent>,
}

impl RecordingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts events matching `pred`.
    #[must_use]
    pub fn count(&self, pred: impl Fn(&RecordedEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl TraceSink for RecordingSink {
    fn on_effect_attached(&mut self, e: &EffectAttachedEvent) {
        self.events.push(RecordedEvent::EffectAttached(*e));
    }

    fn on_reveal_prepared(&mut self, e: &RevealPreparedEvent) {
        self.events.push(RecordedEvent::RevealPrepared(*e));
    }

    fn on_revealed(&mut self, e: &RevealedEvent) {
        self.events.push(RecordedEvent::Revealed(*e));
    }

    fn on_frame_requested(&mut self, e: &FrameRequestedEvent) {
        self.events.push(RecordedEvent::FrameRequested(*e));
    }

    fn on_parallax_frame(&mut self, e: &ParallaxFrameEvent) {
        self.events.push(RecordedEvent::ParallaxFrame(*e));
    }

    fn on_hero_frozen(&mut self) {
        self.events.push(RecordedEvent::HeroFrozen);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_ratio_clips_to_viewport() {
        assert_eq!(visible_ratio(Rect::new(0.0, 0.0, 10.0, 100.0), 800.0), 1.0);
        assert_eq!(visible_ratio(Rect::new(0.0, 750.0, 10.0, 850.0), 800.0), 0.5);
        assert_eq!(visible_ratio(Rect::new(0.0, 900.0, 10.0, 1000.0), 800.0), 0.0);
        assert_eq!(visible_ratio(Rect::new(0.0, 5.0, 10.0, 5.0), 800.0), 0.0);
    }

    #[test]
    fn observe_queues_initial_entry() {
        let mut w = FakeWatcher::new(0.15, 800.0);
        let on = FakeElement::with_rect(Rect::new(0.0, 100.0, 10.0, 200.0));
        let off = FakeElement::with_rect(Rect::new(0.0, 2000.0, 10.0, 2100.0));
        w.observe(&on);
        w.observe(&off);
        let entries = w.take_entries();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].is_intersecting);
        assert!(!entries[1].is_intersecting);
        assert!(w.take_entries().is_empty());
    }

    #[test]
    fn scroll_queues_only_crossings() {
        let mut w = FakeWatcher::new(0.15, 800.0);
        let el = FakeElement::with_rect(Rect::new(0.0, 1000.0, 10.0, 1100.0));
        w.observe(&el);
        let _ = w.take_entries();
        w.scroll_to(100.0);
        assert!(w.take_entries().is_empty());
        w.scroll_to(400.0);
        assert_eq!(w.take_entries().len(), 1);
    }

    #[test]
    fn touching_the_edge_queues_an_entry_below_threshold() {
        let mut w = FakeWatcher::new(0.15, 800.0);
        let el = FakeElement::with_rect(Rect::new(0.0, 1000.0, 10.0, 1100.0));
        w.observe(&el);
        let _ = w.take_entries();

        w.scroll_to(210.0);
        let edge = w.take_entries();
        assert_eq!(edge.len(), 1);
        assert!(edge[0].is_intersecting);
        assert!((edge[0].intersection_ratio - 0.1).abs() < 1e-9);
        assert_eq!(edge[0].reachable_ratio, 1.0);

        w.scroll_to(260.0);
        assert_eq!(w.take_entries().len(), 1);
    }

    #[test]
    fn element_clones_share_state() {
        let a = FakeElement::default();
        let b = a.clone();
        a.add_class("x");
        a.add_class("x");
        assert!(b.has_class("x"));
        assert_eq!(b.class_adds("x"), 1);
        assert_eq!(a, b);
        assert_ne!(a, FakeElement::default());
    }
}
