// Copyright 2026 the Reveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hero background video freeze.
//!
//! When the hero video reaches its end it is paused explicitly, holding the
//! final frame instead of looping or blanking.

use crate::trace::Tracer;

/// A media element that can be paused.
pub trait Playback {
    /// Pauses playback at the current position.
    fn pause(&self);
}

/// Freeze-on-end behavior for the hero video.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeroVideo;

impl HeroVideo {
    /// Handles the video's `ended` event.
    pub fn on_ended<V: Playback + ?Sized>(&self, video: &V, tracer: &mut Tracer<'_>) {
        video.pause();
        tracer.hero_frozen();
    }
}
