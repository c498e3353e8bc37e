// Copyright 2026 the Reveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end behavior of the effects against the fakes.

use kurbo::{Point, Rect};
use reveil_core::config::{EffectConfig, ParallaxConfig, RevealConfig, Selectors};
use reveil_core::css::CssTransform;
use reveil_core::element::StyleTarget as _;
use reveil_core::hero::HeroVideo;
use reveil_core::magnetic::MagneticHover;
use reveil_core::parallax::Parallax;
use reveil_core::reveal::{RevealController, ViewportClass};
use reveil_core::tilt::TiltCard;
use reveil_core::trace::Tracer;
use reveil_test_harness::{FakeElement, FakeWatcher, ManualFrames, RecordedEvent, RecordingSink};

const VIEWPORT_H: f64 = 800.0;

fn column(i: usize) -> FakeElement {
    // 300px tall blocks stacked down the page.
    let y = i as f64 * 400.0;
    FakeElement::with_rect(Rect::new(0.0, y, 600.0, y + 300.0))
}

fn reveal_controller() -> RevealController {
    RevealController::new(RevealConfig::theme(), &Selectors::theme())
}

#[test]
fn desktop_stagger_follows_dom_order() {
    let els: Vec<FakeElement> = (0..9).map(column).collect();
    let mut watcher = FakeWatcher::new(0.15, VIEWPORT_H);
    let mut rc = reveal_controller();
    let viewport = rc.classify(1280.0);
    rc.prepare(&els, viewport, &mut watcher, &mut Tracer::none());

    let step = RevealConfig::theme().stagger_step_secs;
    for (n, el) in els.iter().enumerate() {
        let expected = (n % 4) as f64 * step;
        assert_eq!(
            el.style("transition-delay"),
            Some(format!("{expected}s")),
            "element {n}"
        );
        assert!(!el.has_class("fse-fade-only"));
        assert!(el.has_class("fse-reveal-item"));
    }
}

#[test]
fn mobile_is_fade_only_without_delay() {
    let els: Vec<FakeElement> = (0..6).map(column).collect();
    let mut watcher = FakeWatcher::new(0.15, VIEWPORT_H);
    let mut rc = reveal_controller();
    let viewport = rc.classify(768.0);
    assert_eq!(viewport, ViewportClass::Mobile);
    rc.prepare(&els, viewport, &mut watcher, &mut Tracer::none());

    for el in &els {
        assert_eq!(el.style("transition-delay").as_deref(), Some("0s"));
        assert!(el.has_class("fse-fade-only"));
    }
}

#[test]
fn visible_at_load_reveals_without_scrolling() {
    let els: Vec<FakeElement> = (0..5).map(column).collect();
    let mut watcher = FakeWatcher::new(0.15, VIEWPORT_H);
    let mut rc = reveal_controller();
    rc.prepare(&els, ViewportClass::Desktop, &mut watcher, &mut Tracer::none());

    let entries = watcher.take_entries();
    rc.on_entries(entries, &mut watcher, &mut Tracer::none());

    // Blocks at 0 and 400 are fully on screen; 800 starts at the fold.
    assert!(els[0].has_class("is-revealed"));
    assert!(els[1].has_class("is-revealed"));
    assert!(!els[2].has_class("is-revealed"));
    assert!(!watcher.is_observed(&els[0]));
    assert!(watcher.is_observed(&els[2]));
    assert_eq!(watcher.observed_len(), 3);
}

#[test]
fn reveal_is_one_way_across_repeated_crossings() {
    let els: Vec<FakeElement> = (0..8).map(column).collect();
    let mut watcher = FakeWatcher::new(0.15, VIEWPORT_H);
    let mut rc = reveal_controller();
    let mut sink = RecordingSink::new();
    rc.prepare(&els, ViewportClass::Desktop, &mut watcher, &mut Tracer::new(&mut sink));

    let mut drain = |watcher: &mut FakeWatcher, rc: &mut RevealController| {
        let entries = watcher.take_entries();
        rc.on_entries(entries, watcher, &mut Tracer::new(&mut sink));
    };

    drain(&mut watcher, &mut rc);
    for pass in 0..4 {
        for y in [0.0, 1200.0, 1900.0, 2600.0, 600.0, 0.0] {
            watcher.scroll_to(y + f64::from(pass));
            drain(&mut watcher, &mut rc);
        }
    }

    for el in &els {
        assert!(el.has_class("is-revealed"));
        assert_eq!(el.class_adds("is-revealed"), 1);
        assert!(!watcher.is_observed(el));
    }
    assert_eq!(rc.revealed_count(), els.len());
    assert_eq!(
        sink.count(|e| matches!(e, RecordedEvent::Revealed(_))),
        els.len()
    );
}

#[test]
fn block_taller_than_viewport_is_revealed() {
    // Never more than 800 / 6000 visible, below the 15% threshold.
    let tall = FakeElement::with_rect(Rect::new(0.0, 0.0, 600.0, 6000.0));
    let below = FakeElement::with_rect(Rect::new(0.0, 7000.0, 600.0, 13000.0));
    let mut watcher = FakeWatcher::new(0.15, VIEWPORT_H);
    let mut rc = reveal_controller();
    rc.prepare(
        &[tall.clone(), below.clone()],
        ViewportClass::Mobile,
        &mut watcher,
        &mut Tracer::none(),
    );

    let entries = watcher.take_entries();
    rc.on_entries(entries, &mut watcher, &mut Tracer::none());
    assert!(tall.has_class("is-revealed"));
    assert!(!watcher.is_observed(&tall));
    assert!(!below.has_class("is-revealed"));

    let mut y = 0.0;
    while y <= 13000.0 {
        watcher.scroll_to(y);
        let entries = watcher.take_entries();
        rc.on_entries(entries, &mut watcher, &mut Tracer::none());
        y += 50.0;
    }
    assert!(below.has_class("is-revealed"));
    assert_eq!(below.class_adds("is-revealed"), 1);
    assert_eq!(watcher.observed_len(), 0);
}

#[test]
fn edge_entry_waits_for_threshold_then_reveals_once() {
    let el = column(3);
    let mut watcher = FakeWatcher::new(0.15, VIEWPORT_H);
    let mut rc = reveal_controller();
    let mut sink = RecordingSink::new();
    rc.prepare(
        core::slice::from_ref(&el),
        ViewportClass::Desktop,
        &mut watcher,
        &mut Tracer::new(&mut sink),
    );
    let entries = watcher.take_entries();
    rc.on_entries(entries, &mut watcher, &mut Tracer::new(&mut sink));

    // Block spans 1200..1500: 10% on screen, then 50%.
    watcher.scroll_to(430.0);
    let edge = watcher.take_entries();
    assert_eq!(edge.len(), 1);
    assert!(edge[0].is_intersecting);
    rc.on_entries(edge, &mut watcher, &mut Tracer::new(&mut sink));
    assert!(!el.has_class("is-revealed"));
    assert!(watcher.is_observed(&el));

    watcher.scroll_to(550.0);
    let entries = watcher.take_entries();
    rc.on_entries(entries, &mut watcher, &mut Tracer::new(&mut sink));
    watcher.scroll_to(700.0);
    let entries = watcher.take_entries();
    rc.on_entries(entries, &mut watcher, &mut Tracer::new(&mut sink));

    assert!(el.has_class("is-revealed"));
    assert_eq!(el.class_adds("is-revealed"), 1);
    assert_eq!(sink.count(|e| matches!(e, RecordedEvent::Revealed(_))), 1);
}

#[test]
fn magnetic_centre_and_corner() {
    let btn = FakeElement::with_rect(Rect::new(40.0, 20.0, 200.0, 68.0));
    let hover = MagneticHover::default();

    hover.on_move(&btn, btn.rect().center());
    assert_eq!(
        btn.style("transform").as_deref(),
        Some("translate(0px, 0px) scale(1.05)")
    );

    let rect = btn.rect();
    let t = hover.transform_at(Point::new(rect.x0, rect.y0), rect);
    assert_eq!(
        t,
        CssTransform::TranslateScale {
            dx: -rect.width() / 2.0 * 0.2,
            dy: -rect.height() / 2.0 * 0.2,
            scale: 1.05,
        }
    );
}

#[test]
fn leave_restores_identity() {
    let btn = FakeElement::with_rect(Rect::new(0.0, 0.0, 120.0, 40.0));
    let card = FakeElement::with_rect(Rect::new(0.0, 100.0, 300.0, 500.0));
    let hover = MagneticHover::default();
    let tilt = TiltCard::default();

    hover.on_move(&btn, Point::new(5.0, 5.0));
    tilt.on_move(&card, Point::new(290.0, 110.0));
    assert!(card.style("transition").is_some());

    hover.on_leave(&btn);
    tilt.on_leave(&card);

    assert_eq!(
        btn.style("transform"),
        Some(CssTransform::MAGNETIC_REST.to_string())
    );
    assert_eq!(
        card.style("transform").as_deref(),
        Some("perspective(1000px) rotateX(0deg) rotateY(0deg) scale3d(1, 1, 1)")
    );
    assert_eq!(card.style("transition"), None);
}

#[test]
fn tilt_edges_reach_max_rotation() {
    let card = FakeElement::with_rect(Rect::new(0.0, 0.0, 200.0, 200.0));
    let tilt = TiltCard::default();
    let rect = card.rect();

    // Right edge, vertically centred: normalized (1, 0).
    tilt.on_move(&card, Point::new(rect.x1, rect.center().y));
    assert_eq!(
        card.style("transform").as_deref(),
        Some("perspective(1000px) rotateX(0deg) rotateY(10deg) scale3d(1.02, 1.02, 1.02)")
    );

    // Top edge, horizontally centred: normalized (0, -1).
    tilt.on_move(&card, Point::new(rect.center().x, rect.y0));
    assert_eq!(
        card.style("transform").as_deref(),
        Some("perspective(1000px) rotateX(10deg) rotateY(0deg) scale3d(1.02, 1.02, 1.02)")
    );
    assert_eq!(
        card.style("transition").as_deref(),
        Some("transform 0.1s ease-out, box-shadow 0.1s ease-out")
    );
}

#[test]
fn scroll_burst_recomputes_once_per_frame() {
    let frames = ManualFrames::new();
    let imgs = vec![FakeElement::with_rect(Rect::new(0.0, 100.0, 400.0, 300.0))];
    let mut parallax = Parallax::new(ParallaxConfig::theme(), imgs, frames.clone());
    let mut sink = RecordingSink::new();

    for i in 0..50 {
        parallax.on_scroll(f64::from(i) * 3.0, &mut Tracer::new(&mut sink));
    }
    assert_eq!(frames.requests(), 1);

    parallax.on_frame(VIEWPORT_H, &mut Tracer::new(&mut sink));
    assert_eq!(parallax.frames(), 1);
    assert_eq!(parallax.targets()[0].style_writes(), 1);
    assert_eq!(
        sink.count(|e| matches!(e, RecordedEvent::FrameRequested(_))),
        1
    );
    match sink.events.last() {
        Some(RecordedEvent::ParallaxFrame(e)) => {
            assert_eq!(e.scroll_y, 147.0);
            assert_eq!(e.updated, 1);
        }
        other => panic!("expected a parallax frame, got {other:?}"),
    }

    parallax.on_scroll(200.0, &mut Tracer::none());
    assert_eq!(frames.requests(), 2);
}

#[test]
fn image_entering_viewport_updates_next_frame() {
    let frames = ManualFrames::new();
    let below = FakeElement::with_rect(Rect::new(0.0, 900.0, 400.0, 1100.0));
    let above = FakeElement::with_rect(Rect::new(0.0, -400.0, 400.0, -10.0));
    let mut parallax = Parallax::new(
        ParallaxConfig::theme(),
        vec![below.clone(), above.clone()],
        frames,
    );

    parallax.on_scroll(0.0, &mut Tracer::none());
    let pass = parallax.on_frame(VIEWPORT_H, &mut Tracer::none());
    assert_eq!(pass.updated, 0);
    assert_eq!(pass.skipped, 2);
    assert_eq!(below.style_writes(), 0);
    assert_eq!(above.style_writes(), 0);

    // Scrolling brings the lower image 200px into view.
    below.set_rect(Rect::new(0.0, 600.0, 400.0, 800.0));
    parallax.on_scroll(300.0, &mut Tracer::none());
    let pass = parallax.on_frame(VIEWPORT_H, &mut Tracer::none());
    assert_eq!(pass.updated, 1);
    assert_eq!(
        below.style("transform").as_deref(),
        Some("translate3d(0, 30px, 0)")
    );
    assert_eq!(above.style_writes(), 0);
}

#[test]
fn independent_parallax_instances_do_not_share_pending_state() {
    let a_frames = ManualFrames::new();
    let b_frames = ManualFrames::new();
    let mut a = Parallax::new(ParallaxConfig::theme(), Vec::<FakeElement>::new(), a_frames.clone());
    let mut b = Parallax::new(ParallaxConfig::theme(), Vec::<FakeElement>::new(), b_frames.clone());

    a.on_scroll(10.0, &mut Tracer::none());
    b.on_scroll(20.0, &mut Tracer::none());
    a.on_frame(VIEWPORT_H, &mut Tracer::none());
    a.on_scroll(30.0, &mut Tracer::none());

    assert_eq!(a_frames.requests(), 2);
    assert_eq!(b_frames.requests(), 1);
    assert!(b.is_pending());
}

#[test]
fn hero_video_holds_last_frame() {
    let video = FakeElement::default();
    let mut sink = RecordingSink::new();
    HeroVideo.on_ended(&video, &mut Tracer::new(&mut sink));
    assert_eq!(video.pauses(), 1);
    assert_eq!(sink.events, vec![RecordedEvent::HeroFrozen]);
}

#[test]
fn empty_selection_is_a_no_op() {
    let config = EffectConfig::theme();
    let mut watcher = FakeWatcher::new(config.reveal.threshold, VIEWPORT_H);
    let mut rc = RevealController::new(config.reveal, &config.selectors);
    rc.prepare(&[], ViewportClass::Desktop, &mut watcher, &mut Tracer::none());
    assert_eq!(rc.on_entries(watcher.take_entries(), &mut watcher, &mut Tracer::none()), 0);

    let frames = ManualFrames::new();
    let mut parallax = Parallax::new(config.parallax, Vec::<FakeElement>::new(), frames);
    parallax.on_scroll(5.0, &mut Tracer::none());
    assert_eq!(parallax.on_frame(VIEWPORT_H, &mut Tracer::none()).updated, 0);
}
