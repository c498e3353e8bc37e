// Copyright 2026 the Reveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostics for the interaction layer.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! effect controllers call as they work. All method bodies default to no-ops,
//! so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.

use crate::reveal::ViewportClass;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which effect an event concerns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EffectKind {
    /// Reveal-on-intersection.
    Reveal,
    /// Magnetic button hover.
    Magnetic,
    /// Scroll parallax.
    Parallax,
    /// 3-D card tilt.
    Tilt,
    /// Hero video freeze.
    HeroVideo,
}

impl EffectKind {
    /// Returns a short label for log lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reveal => "reveal",
            Self::Magnetic => "magnetic",
            Self::Parallax => "parallax",
            Self::Tilt => "tilt",
            Self::HeroVideo => "hero-video",
        }
    }
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when an effect has bound its listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectAttachedEvent {
    /// Which effect.
    pub effect: EffectKind,
    /// How many elements matched its selector.
    pub elements: usize,
}

/// Emitted once reveal candidates are tagged and observed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealPreparedEvent {
    /// Number of candidates registered with the watcher.
    pub candidates: usize,
    /// Device class that decided stagger vs. fade-only.
    pub viewport: ViewportClass,
}

/// Emitted each time a candidate is revealed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealedEvent {
    /// Total revealed so far, including this one.
    pub revealed_total: usize,
}

/// Emitted when a scroll event arms a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameRequestedEvent {
    /// Scroll position that armed the frame.
    pub scroll_y: f64,
}

/// Emitted after one parallax recomputation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxFrameEvent {
    /// Monotonic recomputation counter.
    pub frame_index: u64,
    /// Latest scroll position at recomputation time.
    pub scroll_y: f64,
    /// Targets whose transform was written.
    pub updated: usize,
    /// Targets outside the viewport.
    pub skipped: usize,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the effect controllers.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when an effect has bound its listeners.
    fn on_effect_attached(&mut self, e: &EffectAttachedEvent) {
        _ = e;
    }

    /// Called once reveal candidates are prepared.
    fn on_reveal_prepared(&mut self, e: &RevealPreparedEvent) {
        _ = e;
    }

    /// Called when a candidate is revealed.
    fn on_revealed(&mut self, e: &RevealedEvent) {
        _ = e;
    }

    /// Called when a scroll event arms a parallax frame.
    fn on_frame_requested(&mut self, e: &FrameRequestedEvent) {
        _ = e;
    }

    /// Called after a parallax recomputation.
    fn on_parallax_frame(&mut self, e: &ParallaxFrameEvent) {
        _ = e;
    }

    /// Called when the hero video is paused on its last frame.
    fn on_hero_frozen(&mut self) {}
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits an [`EffectAttachedEvent`].
    #[inline]
    pub fn effect_attached(&mut self, e: &EffectAttachedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_effect_attached(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`RevealPreparedEvent`].
    #[inline]
    pub fn reveal_prepared(&mut self, e: &RevealPreparedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_reveal_prepared(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`RevealedEvent`].
    #[inline]
    pub fn revealed(&mut self, e: &RevealedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_revealed(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`FrameRequestedEvent`].
    #[inline]
    pub fn frame_requested(&mut self, e: &FrameRequestedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_frame_requested(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ParallaxFrameEvent`].
    #[inline]
    pub fn parallax_frame(&mut self, e: &ParallaxFrameEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_parallax_frame(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a hero-frozen event.
    #[inline]
    pub fn hero_frozen(&mut self) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_hero_frozen();
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_effect_attached(&EffectAttachedEvent {
            effect: EffectKind::Tilt,
            elements: 3,
        });
        sink.on_revealed(&RevealedEvent { revealed_total: 1 });
        sink.on_hero_frozen();
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.frame_requested(&FrameRequestedEvent { scroll_y: 10.0 });
        tracer.hero_frozen();
    }

    #[test]
    fn effect_labels() {
        assert_eq!(EffectKind::HeroVideo.as_str(), "hero-video");
        assert_eq!(EffectKind::Parallax.as_str(), "parallax");
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct CountingSink {
            revealed: Vec<usize>,
        }
        impl TraceSink for CountingSink {
            fn on_revealed(&mut self, e: &RevealedEvent) {
                self.revealed.push(e.revealed_total);
            }
        }

        let mut sink = CountingSink {
            revealed: Vec::new(),
        };
        let mut tracer = Tracer::new(&mut sink);
        tracer.revealed(&RevealedEvent { revealed_total: 4 });
        // Access sink after tracer is dropped.
        drop(tracer);
        assert_eq!(sink.revealed, &[4]);
    }
}
