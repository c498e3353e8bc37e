// Copyright 2026 the Reveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll parallax with per-frame coalescing.
//!
//! Scroll events only record the latest position and, if nothing is pending,
//! arm one frame through the [`FrameScheduler`]. The recomputation runs in
//! that frame callback, so any number of scroll events between two frames
//! produce exactly one pass over the tracked images.
//!
//! A pass writes `translate3d(0, top × factor px, 0)` to every image that
//! intersects the viewport and leaves the rest untouched; they stay tracked
//! and are picked up on the first frame they enter.
//!
//! All state lives in the [`Parallax`] instance, so independent scroll
//! containers can each own one without sharing a pending flag.

use alloc::string::ToString as _;
use alloc::vec::Vec;
use kurbo::Rect;

use crate::config::ParallaxConfig;
use crate::css::{CssTransform, property};
use crate::element::{FrameScheduler, StyleTarget};
use crate::trace::{FrameRequestedEvent, ParallaxFrameEvent, Tracer};

/// Result of one recomputation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParallaxPass {
    /// Targets whose transform was written.
    pub updated: usize,
    /// Targets outside the viewport, left untouched.
    pub skipped: usize,
}

/// Returns `true` if `rect` overlaps a viewport of the given height.
#[must_use]
pub fn in_viewport(rect: Rect, viewport_height: f64) -> bool {
    rect.y0 < viewport_height && rect.y1 > 0.0
}

/// Returns the vertical offset for an element whose top edge is at `top`.
#[must_use]
pub fn parallax_offset(top: f64, factor: f64) -> f64 {
    top * factor
}

/// Parallax controller for one scroll container.
#[derive(Debug)]
pub struct Parallax<T, S> {
    config: ParallaxConfig,
    targets: Vec<T>,
    scheduler: S,
    last_scroll_y: f64,
    pending: bool,
    frames: u64,
}

impl<T: StyleTarget, S: FrameScheduler> Parallax<T, S> {
    /// Creates a controller tracking `targets`.
    #[must_use]
    pub fn new(config: ParallaxConfig, targets: Vec<T>, scheduler: S) -> Self {
        Self {
            config,
            targets,
            scheduler,
            last_scroll_y: 0.0,
            pending: false,
            frames: 0,
        }
    }

    /// The tracked targets.
    #[must_use]
    pub fn targets(&self) -> &[T] {
        &self.targets
    }

    /// Latest scroll position recorded by [`on_scroll`](Self::on_scroll).
    #[must_use]
    pub fn last_scroll_y(&self) -> f64 {
        self.last_scroll_y
    }

    /// Returns `true` while a frame is armed and has not yet run.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Number of recomputations run so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Returns the scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Records a scroll position and arms a frame if none is pending.
    pub fn on_scroll(&mut self, scroll_y: f64, tracer: &mut Tracer<'_>) {
        self.last_scroll_y = scroll_y;
        if self.pending {
            return;
        }
        self.pending = true;
        self.scheduler.request_frame();
        tracer.frame_requested(&FrameRequestedEvent { scroll_y });
    }

    /// Runs the armed recomputation against a viewport of the given height.
    pub fn on_frame(&mut self, viewport_height: f64, tracer: &mut Tracer<'_>) -> ParallaxPass {
        self.pending = false;

        let mut pass = ParallaxPass::default();
        for target in &self.targets {
            let rect = target.bounding_rect();
            if !in_viewport(rect, viewport_height) {
                pass.skipped += 1;
                continue;
            }
            let transform = CssTransform::TranslateY3d {
                dy: parallax_offset(rect.y0, self.config.factor),
            };
            target.set_style(property::TRANSFORM, &transform.to_string());
            pass.updated += 1;
        }

        tracer.parallax_frame(&ParallaxFrameEvent {
            frame_index: self.frames,
            scroll_y: self.last_scroll_y,
            updated: pass.updated,
            skipped: pass.skipped,
        });
        self.frames += 1;
        pass
    }
}
