// Copyright 2026 the Reveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer-driven 3-D tilt for cards.
//!
//! The pointer's offset from the card centre is normalized by the half-extent
//! on each axis and mapped to a rotation of at most
//! [`TiltConfig::max_degrees`] at the card edge. The vertical axis is
//! inverted, so a pointer below centre tips the bottom edge away.
//!
//! Offsets are not clamped: a pointer reported outside the card (fast motion
//! outruns the leave event) produces more than the nominal rotation. This
//! overshoot is kept as part of the feel.
//!
//! During movement a short inline transition keeps rapid updates continuous;
//! on leave the inline transition is removed so the stylesheet's own
//! transition drives the snap-back.

use alloc::format;
use alloc::string::ToString as _;
use kurbo::{Point, Rect, Vec2};

use crate::config::TiltConfig;
use crate::css::{CssTransform, property};
use crate::element::StyleTarget;

/// Rotation produced by a pointer position, in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TiltAngles {
    /// Rotation about the X axis.
    pub rotate_x: f64,
    /// Rotation about the Y axis.
    pub rotate_y: f64,
}

/// Returns the pointer offset from the centre of `rect`, divided by the
/// half-extent on each axis. `(±1, ±1)` are the corners.
#[must_use]
pub fn normalized_offset(pointer: Point, rect: Rect) -> Vec2 {
    let d = pointer - rect.center();
    Vec2::new(d.x / (rect.width() / 2.0), d.y / (rect.height() / 2.0))
}

/// Maps a normalized offset to rotation angles.
#[must_use]
pub fn angles_for_offset(offset: Vec2, max_degrees: f64) -> TiltAngles {
    TiltAngles {
        rotate_x: offset.y * -max_degrees,
        rotate_y: offset.x * max_degrees,
    }
}

/// Returns the rotation for a pointer at `pointer` over `rect`.
#[must_use]
pub fn tilt_angles(pointer: Point, rect: Rect, max_degrees: f64) -> TiltAngles {
    angles_for_offset(normalized_offset(pointer, rect), max_degrees)
}

/// Stateless tilt behavior shared by every card.
#[derive(Clone, Copy, Debug, Default)]
pub struct TiltCard {
    config: TiltConfig,
}

impl TiltCard {
    /// Creates the behavior.
    #[must_use]
    pub const fn new(config: TiltConfig) -> Self {
        Self { config }
    }

    /// Returns the transform for a pointer over `rect`.
    #[must_use]
    pub fn transform_at(&self, pointer: Point, rect: Rect) -> CssTransform {
        let angles = tilt_angles(pointer, rect, self.config.max_degrees);
        CssTransform::Tilt {
            perspective: self.config.perspective_px,
            rotate_x: angles.rotate_x,
            rotate_y: angles.rotate_y,
            scale: self.config.hover_scale,
        }
    }

    /// The inline transition forced while the pointer moves.
    #[must_use]
    pub fn follow_transition(&self) -> alloc::string::String {
        let secs = self.config.follow_secs;
        format!("transform {secs}s ease-out, box-shadow {secs}s ease-out")
    }

    /// Handles a pointer move over `target`.
    pub fn on_move<T: StyleTarget + ?Sized>(&self, target: &T, pointer: Point) {
        let transform = self.transform_at(pointer, target.bounding_rect());
        target.set_style(property::TRANSITION, &self.follow_transition());
        target.set_style(property::TRANSFORM, &transform.to_string());
    }

    /// Handles the pointer leaving `target`.
    pub fn on_leave<T: StyleTarget + ?Sized>(&self, target: &T) {
        target.remove_style(property::TRANSITION);
        target.set_style(
            property::TRANSFORM,
            &CssTransform::tilt_rest(self.config.perspective_px).to_string(),
        );
    }
}
