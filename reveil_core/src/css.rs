// Copyright 2026 the Reveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS values written by the effects.
//!
//! [`CssTransform`] is the closed set of `transform` values the layer ever
//! produces. Its [`Display`](core::fmt::Display) impl renders the exact
//! property text, so a transform can be compared structurally in tests and
//! formatted once at the style-write site.

use core::fmt;

/// CSS property names the effects touch.
pub mod property {
    /// `transform`
    pub const TRANSFORM: &str = "transform";
    /// `transition`
    pub const TRANSITION: &str = "transition";
    /// `transition-delay`
    pub const TRANSITION_DELAY: &str = "transition-delay";
}

/// A `transform` value produced by one of the effects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CssTransform {
    /// `translate(dx px, dy px) scale(s)`, written by the magnetic hover.
    TranslateScale {
        /// Horizontal offset in px.
        dx: f64,
        /// Vertical offset in px.
        dy: f64,
        /// Uniform scale.
        scale: f64,
    },
    /// `translate3d(0, dy px, 0)`, written by the parallax.
    TranslateY3d {
        /// Vertical offset in px.
        dy: f64,
    },
    /// `perspective(p px) rotateX(x deg) rotateY(y deg) scale3d(s, s, s)`,
    /// written by the tilt.
    Tilt {
        /// Perspective distance in px.
        perspective: f64,
        /// Rotation about the X axis in degrees.
        rotate_x: f64,
        /// Rotation about the Y axis in degrees.
        rotate_y: f64,
        /// Uniform scale.
        scale: f64,
    },
}

impl CssTransform {
    /// The magnetic rest state: `translate(0px, 0px) scale(1)`.
    pub const MAGNETIC_REST: Self = Self::TranslateScale {
        dx: 0.0,
        dy: 0.0,
        scale: 1.0,
    };

    /// The tilt rest state at the given perspective.
    #[must_use]
    pub const fn tilt_rest(perspective: f64) -> Self {
        Self::Tilt {
            perspective,
            rotate_x: 0.0,
            rotate_y: 0.0,
            scale: 1.0,
        }
    }

    /// Returns `true` if this transform leaves the element where the
    /// stylesheet put it (no translation, no rotation, unit scale).
    #[must_use]
    pub fn is_identity(&self) -> bool {
        match *self {
            Self::TranslateScale { dx, dy, scale } => dx == 0.0 && dy == 0.0 && scale == 1.0,
            Self::TranslateY3d { dy } => dy == 0.0,
            Self::Tilt {
                rotate_x,
                rotate_y,
                scale,
                ..
            } => rotate_x == 0.0 && rotate_y == 0.0 && scale == 1.0,
        }
    }
}

/// Folds `-0.0` into `0.0` so the rendered text never reads `-0px`.
fn num(v: f64) -> f64 {
    v + 0.0
}

impl fmt::Display for CssTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::TranslateScale { dx, dy, scale } => write!(
                f,
                "translate({}px, {}px) scale({})",
                num(dx),
                num(dy),
                num(scale)
            ),
            Self::TranslateY3d { dy } => write!(f, "translate3d(0, {}px, 0)", num(dy)),
            Self::Tilt {
                perspective,
                rotate_x,
                rotate_y,
                scale,
            } => {
                let s = num(scale);
                write!(
                    f,
                    "perspective({}px) rotateX({}deg) rotateY({}deg) scale3d({s}, {s}, {s})",
                    num(perspective),
                    num(rotate_x),
                    num(rotate_y),
                )
            }
        }
    }
}

/// Formats a duration in seconds as a CSS time value (`0.15s`).
#[must_use]
pub fn seconds(secs: f64) -> alloc::string::String {
    alloc::format!("{}s", num(secs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString as _;

    #[test]
    fn magnetic_rest_text() {
        assert_eq!(
            CssTransform::MAGNETIC_REST.to_string(),
            "translate(0px, 0px) scale(1)"
        );
        assert!(CssTransform::MAGNETIC_REST.is_identity());
    }

    #[test]
    fn tilt_rest_text() {
        assert_eq!(
            CssTransform::tilt_rest(1000.0).to_string(),
            "perspective(1000px) rotateX(0deg) rotateY(0deg) scale3d(1, 1, 1)"
        );
    }

    #[test]
    fn negative_zero_is_folded() {
        let t = CssTransform::Tilt {
            perspective: 1000.0,
            rotate_x: -0.0,
            rotate_y: 10.0,
            scale: 1.02,
        };
        assert_eq!(
            t.to_string(),
            "perspective(1000px) rotateX(0deg) rotateY(10deg) scale3d(1.02, 1.02, 1.02)"
        );
    }

    #[test]
    fn parallax_text() {
        let t = CssTransform::TranslateY3d { dy: 12.5 };
        assert_eq!(t.to_string(), "translate3d(0, 12.5px, 0)");
        assert!(!t.is_identity());
    }

    #[test]
    fn seconds_text() {
        assert_eq!(seconds(0.0), "0s");
        assert_eq!(seconds(0.15), "0.15s");
    }
}
