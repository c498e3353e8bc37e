// Copyright 2026 the Reveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability seams between the effect rules and the host page.
//!
//! The effects never hold a browser handle. They see elements through
//! [`StyleTarget`], learn about visibility through [`VisibilityWatcher`]
//! (backed by `IntersectionObserver` on the web), and defer work through
//! [`FrameScheduler`] (backed by `requestAnimationFrame`). Tests substitute
//! deterministic fakes for all three.

use kurbo::Rect;

/// A page element whose inline style and class list the effects write.
///
/// Methods take `&self`: host elements are shared handles with interior
/// state, and several listeners may hold the same element.
pub trait StyleTarget {
    /// Sets an inline style property.
    fn set_style(&self, property: &str, value: &str);

    /// Removes an inline style property, restoring the stylesheet value.
    fn remove_style(&self, property: &str);

    /// Adds a class. Adding a present class is a no-op.
    fn add_class(&self, class: &str);

    /// Returns `true` if the element carries `class`.
    fn has_class(&self, class: &str) -> bool;

    /// Returns the element's border box in viewport coordinates (CSS px).
    fn bounding_rect(&self) -> Rect;
}

/// One visibility notification delivered by a [`VisibilityWatcher`].
#[derive(Clone, Debug)]
pub struct VisibilityEntry<T> {
    /// The element whose visibility changed.
    pub target: T,
    /// Whether the element intersects the viewport at all.
    pub is_intersecting: bool,
    /// Visible fraction of the element, `0.0..=1.0`.
    pub intersection_ratio: f64,
    /// The largest ratio the element can reach in this root; see
    /// [`max_visible_ratio`]. Below `1.0` for elements taller than the root.
    pub reachable_ratio: f64,
}

/// The largest visible fraction an element of `target_height` can reach in a
/// root of `root_height`.
///
/// Zero-height elements report `1.0`, as `IntersectionObserver` does for
/// them. A non-positive root height means the root is unknown and yields
/// `0.0`.
#[must_use]
pub fn max_visible_ratio(target_height: f64, root_height: f64) -> f64 {
    if target_height <= 0.0 {
        1.0
    } else if root_height <= 0.0 {
        0.0
    } else {
        (root_height / target_height).min(1.0)
    }
}

/// Registers elements for visibility notifications.
///
/// Implementations must deliver an initial entry for every element as soon as
/// it is observed, so elements already on screen at startup are reported
/// without any scrolling.
pub trait VisibilityWatcher {
    /// The element handle this watcher tracks.
    type Target;

    /// Starts watching `target`.
    fn observe(&mut self, target: &Self::Target);

    /// Stops watching `target`. Unknown targets are ignored.
    fn unobserve(&mut self, target: &Self::Target);
}

/// Requests a single deferred callback before the next rendered frame.
///
/// The owner of the scheduler is responsible for routing the callback back to
/// whatever requested it; the scheduler only arms it.
pub trait FrameScheduler {
    /// Arms one callback for the next frame.
    fn request_frame(&mut self);
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for &mut S {
    fn request_frame(&mut self) {
        (**self).request_frame();
    }
}
