// Copyright 2026 the Reveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output on the browser console.
//!
//! [`ConsoleSink`] implements [`TraceSink`] and writes one `console.debug`
//! line per event, prefixed so the layer's output can be filtered in devtools.

use alloc::format;
use alloc::string::String;

use reveil_core::trace::{
    EffectAttachedEvent, FrameRequestedEvent, ParallaxFrameEvent, RevealPreparedEvent,
    RevealedEvent, TraceSink,
};
use wasm_bindgen::JsValue;

/// Writes one `console.debug` line per trace event.
#[derive(Clone, Debug)]
pub struct ConsoleSink {
    prefix: &'static str,
    frames: bool,
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleSink {
    /// Creates a sink with the `[reveil]` prefix. Per-frame parallax events
    /// are omitted; see [`with_frames`](Self::with_frames).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            prefix: "[reveil]",
            frames: false,
        }
    }

    /// Also log every scroll-armed frame and parallax pass.
    #[must_use]
    pub const fn with_frames(mut self, frames: bool) -> Self {
        self.frames = frames;
        self
    }

    fn line(&self, body: String) {
        web_sys::console::debug_1(&JsValue::from_str(&format!("{} {body}", self.prefix)));
    }
}

impl TraceSink for ConsoleSink {
    fn on_effect_attached(&mut self, e: &EffectAttachedEvent) {
        self.line(format!("attach {} elements={}", e.effect.as_str(), e.elements));
    }

    fn on_reveal_prepared(&mut self, e: &RevealPreparedEvent) {
        self.line(format!(
            "reveal prepared candidates={} viewport={}",
            e.candidates,
            e.viewport.as_str()
        ));
    }

    fn on_revealed(&mut self, e: &RevealedEvent) {
        self.line(format!("revealed total={}", e.revealed_total));
    }

    fn on_frame_requested(&mut self, e: &FrameRequestedEvent) {
        if self.frames {
            self.line(format!("frame armed scroll_y={:.1}", e.scroll_y));
        }
    }

    fn on_parallax_frame(&mut self, e: &ParallaxFrameEvent) {
        if self.frames {
            self.line(format!(
                "parallax #{} scroll_y={:.1} updated={} skipped={}",
                e.frame_index, e.scroll_y, e.updated, e.skipped
            ));
        }
    }

    fn on_hero_frozen(&mut self) {
        self.line(String::from("hero video frozen on last frame"));
    }
}
