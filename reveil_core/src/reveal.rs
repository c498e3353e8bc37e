// Copyright 2026 the Reveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reveal-on-intersection.
//!
//! At startup every candidate is tagged and given a transition delay, then
//! registered with one shared [`VisibilityWatcher`]. The first time a
//! candidate is at least [`RevealConfig::threshold`] visible it receives the
//! revealed class (the stylesheet runs the actual transition) and is dropped
//! from the watcher. The transition is one-way: nothing ever removes the
//! revealed class. A candidate taller than the viewport can never reach the
//! threshold, so it is revealed as soon as it intersects at all.
//!
//! On desktop viewports the delay cascades in groups of
//! [`RevealConfig::stagger_width`]: `(index % width) × step` seconds. On
//! mobile viewports every candidate fades with no delay.

use crate::config::{RevealConfig, Selectors};
use crate::css::{self, property};
use crate::element::{StyleTarget, VisibilityEntry, VisibilityWatcher};
use crate::trace::{RevealPreparedEvent, RevealedEvent, Tracer};

/// Slack allowed when comparing a reported intersection ratio to the
/// threshold. Observers report the ratio at the crossing, which can land a
/// rounding step below it.
const RATIO_EPSILON: f64 = 1e-3;

/// Device class used to choose between staggered and fade-only reveals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewportClass {
    /// Narrow viewport: opacity-only transition, no stagger.
    Mobile,
    /// Wide viewport: staggered slide-in.
    Desktop,
}

impl ViewportClass {
    /// Classifies a viewport width in CSS px. Widths up to and including
    /// `breakpoint` are [`Mobile`](Self::Mobile).
    #[must_use]
    pub fn from_width(width: f64, breakpoint: f64) -> Self {
        if width <= breakpoint {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    /// Returns a short label for log lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Desktop => "desktop",
        }
    }
}

/// Returns the transition delay in seconds for the candidate at `index`.
#[must_use]
pub fn stagger_delay(index: usize, viewport: ViewportClass, config: &RevealConfig) -> f64 {
    match viewport {
        ViewportClass::Mobile => 0.0,
        ViewportClass::Desktop => {
            let slot = index % config.stagger_width.max(1);
            slot as f64 * config.stagger_step_secs
        }
    }
}

/// Drives the reveal effect for one page.
#[derive(Clone, Debug)]
pub struct RevealController {
    config: RevealConfig,
    candidate_class: &'static str,
    fade_only_class: &'static str,
    revealed_class: &'static str,
    revealed: usize,
}

impl RevealController {
    /// Creates a controller using the class names from `selectors`.
    #[must_use]
    pub fn new(config: RevealConfig, selectors: &Selectors) -> Self {
        Self {
            config,
            candidate_class: selectors.candidate_class,
            fade_only_class: selectors.fade_only_class,
            revealed_class: selectors.revealed_class,
            revealed: 0,
        }
    }

    /// Returns the reveal configuration.
    #[must_use]
    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Number of candidates revealed so far.
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    /// Classifies a viewport width against the configured breakpoint.
    #[must_use]
    pub fn classify(&self, width: f64) -> ViewportClass {
        ViewportClass::from_width(width, self.config.mobile_breakpoint_px)
    }

    /// Tags `targets` as candidates, assigns their delays in order, and
    /// registers each with `watcher`.
    pub fn prepare<T, W>(
        &mut self,
        targets: &[T],
        viewport: ViewportClass,
        watcher: &mut W,
        tracer: &mut Tracer<'_>,
    ) where
        T: StyleTarget,
        W: VisibilityWatcher<Target = T> + ?Sized,
    {
        for (index, target) in targets.iter().enumerate() {
            if !target.has_class(self.candidate_class) {
                target.add_class(self.candidate_class);
            }
            if viewport == ViewportClass::Mobile {
                target.add_class(self.fade_only_class);
            }
            let delay = stagger_delay(index, viewport, &self.config);
            target.set_style(property::TRANSITION_DELAY, &css::seconds(delay));
        }

        for target in targets {
            watcher.observe(target);
        }

        tracer.reveal_prepared(&RevealPreparedEvent {
            candidates: targets.len(),
            viewport,
        });
    }

    /// Handles a batch of visibility notifications.
    ///
    /// Each sufficiently visible candidate is revealed and unobserved. A
    /// candidate that is already revealed is only unobserved, so it never
    /// transitions twice. Returns the number newly revealed.
    pub fn on_entries<T, W, I>(
        &mut self,
        entries: I,
        watcher: &mut W,
        tracer: &mut Tracer<'_>,
    ) -> usize
    where
        T: StyleTarget,
        W: VisibilityWatcher<Target = T> + ?Sized,
        I: IntoIterator<Item = VisibilityEntry<T>>,
    {
        let mut newly = 0;
        for entry in entries {
            if !self.is_visible(&entry) {
                continue;
            }
            let target = &entry.target;
            if !target.has_class(self.revealed_class) {
                target.add_class(self.revealed_class);
                self.revealed += 1;
                newly += 1;
                tracer.revealed(&RevealedEvent {
                    revealed_total: self.revealed,
                });
            }
            watcher.unobserve(target);
        }
        newly
    }

    /// An entry counts once the element is at least `threshold` visible. An
    /// element too tall to ever reach the threshold counts as soon as it
    /// intersects, since the watcher sends no further entries for it.
    fn is_visible<T>(&self, entry: &VisibilityEntry<T>) -> bool {
        let threshold = self.config.threshold;
        entry.is_intersecting
            && (entry.intersection_ratio + RATIO_EPSILON >= threshold
                || entry.reachable_ratio < threshold)
    }
}
