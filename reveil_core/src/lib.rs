// Copyright 2026 the Reveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Effect rules for the Reveil interaction layer.
//!
//! `reveil_core` holds the semantics of every scroll and pointer effect the
//! theme applies to server-rendered markup. It is `no_std` compatible (with
//! `alloc`) and never touches a browser API directly: elements, visibility
//! notifications, and frame callbacks are reached through small capability
//! traits so the rules can be driven by deterministic fakes.
//!
//! # Architecture
//!
//! ```text
//!   Browser event (scroll, pointer, intersection, media)
//!       │
//!       ▼
//!   backend glue ──► effect controller ──► StyleTarget writes
//!                          │
//!                          ▼
//!                  FrameScheduler / VisibilityWatcher
//! ```
//!
//! **[`reveal`]**: Stagger assignment and one-way reveal on intersection.
//!
//! **[`magnetic`]**: Pointer-following translation for buttons.
//!
//! **[`parallax`]**: Scroll parallax with one recomputation per frame.
//!
//! **[`tilt`]**: Pointer-driven 3-D rotation for cards.
//!
//! **[`hero`]**: Freezes the hero background video on its last frame.
//!
//! **[`element`]**: The [`StyleTarget`](element::StyleTarget),
//! [`VisibilityWatcher`](element::VisibilityWatcher) and
//! [`FrameScheduler`](element::FrameScheduler) seams.
//!
//! **[`config`]**: Effect constants and the selector contract.
//!
//! **[`css`]**: CSS value formatting for the transforms effects write.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types,
//! with a zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod config;
pub mod css;
pub mod element;
pub mod hero;
pub mod magnetic;
pub mod parallax;
pub mod reveal;
pub mod tilt;
pub mod trace;
