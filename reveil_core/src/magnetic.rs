// Copyright 2026 the Reveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Magnetic button hover.
//!
//! While the pointer moves over a button, the button is translated toward the
//! pointer by a fixed fraction of the pointer's offset from the button centre
//! and scaled up slightly. Leaving snaps it back to rest; the easing of the
//! snap-back belongs to the stylesheet.

use alloc::string::ToString as _;
use kurbo::{Point, Rect, Vec2};

use crate::config::MagneticConfig;
use crate::css::{CssTransform, property};
use crate::element::StyleTarget;

/// Returns the translation for a pointer at `pointer` over an element
/// occupying `rect`, both in viewport coordinates.
#[must_use]
pub fn magnetic_offset(pointer: Point, rect: Rect, pull: f64) -> Vec2 {
    (pointer - rect.center()) * pull
}

/// Stateless magnetic hover behavior shared by every button.
#[derive(Clone, Copy, Debug, Default)]
pub struct MagneticHover {
    config: MagneticConfig,
}

impl MagneticHover {
    /// Creates the behavior.
    #[must_use]
    pub const fn new(config: MagneticConfig) -> Self {
        Self { config }
    }

    /// Returns the transform for a pointer over `rect`.
    #[must_use]
    pub fn transform_at(&self, pointer: Point, rect: Rect) -> CssTransform {
        let offset = magnetic_offset(pointer, rect, self.config.pull);
        CssTransform::TranslateScale {
            dx: offset.x,
            dy: offset.y,
            scale: self.config.hover_scale,
        }
    }

    /// Handles a pointer move over `target`.
    pub fn on_move<T: StyleTarget + ?Sized>(&self, target: &T, pointer: Point) {
        let transform = self.transform_at(pointer, target.bounding_rect());
        target.set_style(property::TRANSFORM, &transform.to_string());
    }

    /// Handles the pointer leaving `target`.
    pub fn on_leave<T: StyleTarget + ?Sized>(&self, target: &T) {
        target.set_style(
            property::TRANSFORM,
            &CssTransform::MAGNETIC_REST.to_string(),
        );
    }
}
