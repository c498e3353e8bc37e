// Copyright 2026 the Reveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hero video binding.

use alloc::boxed::Box;

use reveil_core::config::EffectConfig;
use reveil_core::hero::{HeroVideo, Playback};
use reveil_core::trace::{EffectAttachedEvent, EffectKind};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Document, Event, HtmlMediaElement};

use crate::listeners::Listeners;
use crate::{SharedSink, with_tracer};

/// A media element the hero effect can pause.
#[derive(Clone, Debug)]
pub struct VideoTarget(HtmlMediaElement);

impl VideoTarget {
    /// Wraps a media element.
    #[must_use]
    pub fn new(media: HtmlMediaElement) -> Self {
        Self(media)
    }
}

impl Playback for VideoTarget {
    fn pause(&self) {
        let _ = self.0.pause();
    }
}

/// Freezes the hero video on its last frame. Without a matching video this
/// registers nothing.
pub fn attach_hero_video(
    document: &Document,
    config: &EffectConfig,
    sink: Option<&SharedSink>,
) -> Result<Listeners, JsValue> {
    let mut listeners = Listeners::new();
    let video = document
        .query_selector(config.selectors.hero_video)?
        .and_then(|el| el.dyn_into::<HtmlMediaElement>().ok());

    let found = usize::from(video.is_some());
    if let Some(media) = video {
        let target = VideoTarget::new(media.clone());
        let sink = sink.cloned();
        let on_ended = Closure::wrap(Box::new(move |_event: Event| {
            with_tracer(sink.as_ref(), |tracer| HeroVideo.on_ended(&target, tracer));
        }) as Box<dyn FnMut(_)>);
        listeners.listen(&media, "ended", on_ended)?;
    }

    with_tracer(sink, |tracer| {
        tracer.effect_attached(&EffectAttachedEvent {
            effect: EffectKind::HeroVideo,
            elements: found,
        });
    });
    Ok(listeners)
}
