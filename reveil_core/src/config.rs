// Copyright 2026 the Reveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Effect configuration table.
//!
//! Every tunable the effects use lives here, grouped per effect. The
//! [`Default`] values reproduce the theme's published behavior; the markup
//! contract (selectors and class names the templates render) is in
//! [`Selectors`].

/// Reveal-on-intersection tunables.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    /// Fraction of an element that must be visible before it reveals.
    pub threshold: f64,
    /// Delay added per stagger slot, in seconds.
    pub stagger_step_secs: f64,
    /// Number of slots in one stagger cascade.
    pub stagger_width: usize,
    /// Widest viewport (CSS px, inclusive) treated as mobile.
    pub mobile_breakpoint_px: f64,
}

impl RevealConfig {
    /// The theme's reveal settings: 15% threshold, 4-wide 0.15 s stagger,
    /// 768 px breakpoint.
    #[must_use]
    pub const fn theme() -> Self {
        Self {
            threshold: 0.15,
            stagger_step_secs: 0.15,
            stagger_width: 4,
            mobile_breakpoint_px: 768.0,
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self::theme()
    }
}

/// Magnetic hover tunables.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagneticConfig {
    /// Fraction of the pointer's offset from centre applied as translation.
    pub pull: f64,
    /// Scale applied while the pointer is over the element.
    pub hover_scale: f64,
}

impl MagneticConfig {
    /// The theme's magnetic settings.
    #[must_use]
    pub const fn theme() -> Self {
        Self {
            pull: 0.2,
            hover_scale: 1.05,
        }
    }
}

impl Default for MagneticConfig {
    fn default() -> Self {
        Self::theme()
    }
}

/// Scroll parallax tunables.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxConfig {
    /// Fraction of an element's viewport top applied as vertical offset.
    pub factor: f64,
}

impl ParallaxConfig {
    /// The theme's parallax settings.
    #[must_use]
    pub const fn theme() -> Self {
        Self { factor: 0.05 }
    }
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self::theme()
    }
}

/// 3-D tilt tunables.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltConfig {
    /// Rotation in degrees at a normalized offset of 1 on either axis.
    pub max_degrees: f64,
    /// CSS perspective distance in px.
    pub perspective_px: f64,
    /// Uniform scale applied while the pointer is over the card.
    pub hover_scale: f64,
    /// Inline transition duration forced during pointer movement, in seconds.
    pub follow_secs: f64,
}

impl TiltConfig {
    /// The theme's tilt settings.
    #[must_use]
    pub const fn theme() -> Self {
        Self {
            max_degrees: 10.0,
            perspective_px: 1000.0,
            hover_scale: 1.02,
            follow_secs: 0.1,
        }
    }
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self::theme()
    }
}

/// Markup contract: selectors matched at startup and class names toggled.
///
/// Renaming any of these in the page templates silently disables the
/// corresponding effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selectors {
    /// Structural blocks and opt-in items that reveal on scroll.
    pub reveal: &'static str,
    /// Buttons that follow the pointer.
    pub magnetic: &'static str,
    /// Images that drift with scroll.
    pub parallax: &'static str,
    /// Cards that tilt toward the pointer.
    pub tilt: &'static str,
    /// The hero background video.
    pub hero_video: &'static str,
    /// Class marking an element as a reveal candidate.
    pub candidate_class: &'static str,
    /// Class selecting the opacity-only transition on narrow viewports.
    pub fade_only_class: &'static str,
    /// Class that triggers the reveal transition.
    pub revealed_class: &'static str,
    /// Class added to `<body>` once the layer is installed.
    pub page_loaded_class: &'static str,
}

impl Selectors {
    /// The selectors rendered by the theme's block templates.
    #[must_use]
    pub const fn theme() -> Self {
        Self {
            reveal: ".wp-block-column, .wp-block-media-text, .fse-reveal-item",
            magnetic: ".wp-block-button__link",
            parallax: ".wp-block-image img",
            tilt: ".card-3d",
            hero_video: ".hero-video-bg",
            candidate_class: "fse-reveal-item",
            fade_only_class: "fse-fade-only",
            revealed_class: "is-revealed",
            page_loaded_class: "page-loaded",
        }
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self::theme()
    }
}

/// Which effects to attach.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnabledEffects {
    /// Reveal-on-intersection.
    pub reveal: bool,
    /// Magnetic button hover.
    pub magnetic: bool,
    /// Scroll parallax.
    pub parallax: bool,
    /// 3-D card tilt.
    pub tilt: bool,
    /// Hero video freeze.
    pub hero_video: bool,
}

impl EnabledEffects {
    /// Every effect enabled.
    pub const ALL: Self = Self {
        reveal: true,
        magnetic: true,
        parallax: true,
        tilt: true,
        hero_video: true,
    };

    /// No effect enabled.
    pub const NONE: Self = Self {
        reveal: false,
        magnetic: false,
        parallax: false,
        tilt: false,
        hero_video: false,
    };
}

impl Default for EnabledEffects {
    fn default() -> Self {
        Self::ALL
    }
}

/// The full configuration table for the interaction layer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EffectConfig {
    /// Reveal settings.
    pub reveal: RevealConfig,
    /// Magnetic hover settings.
    pub magnetic: MagneticConfig,
    /// Parallax settings.
    pub parallax: ParallaxConfig,
    /// Tilt settings.
    pub tilt: TiltConfig,
    /// Markup contract.
    pub selectors: Selectors,
    /// Which effects to attach.
    pub enabled: EnabledEffects,
}

impl EffectConfig {
    /// The theme's full configuration.
    #[must_use]
    pub const fn theme() -> Self {
        Self {
            reveal: RevealConfig::theme(),
            magnetic: MagneticConfig::theme(),
            parallax: ParallaxConfig::theme(),
            tilt: TiltConfig::theme(),
            selectors: Selectors::theme(),
            enabled: EnabledEffects::ALL,
        }
    }

    /// Returns this configuration with only the given effects enabled.
    #[must_use]
    pub const fn with_enabled(mut self, enabled: EnabledEffects) -> Self {
        self.enabled = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_theme() {
        assert_eq!(EffectConfig::default(), EffectConfig::theme());
    }

    #[test]
    fn theme_constants() {
        let c = EffectConfig::theme();
        assert_eq!(c.reveal.threshold, 0.15);
        assert_eq!(c.reveal.stagger_width, 4);
        assert_eq!(c.reveal.mobile_breakpoint_px, 768.0);
        assert_eq!(c.magnetic.pull, 0.2);
        assert_eq!(c.parallax.factor, 0.05);
        assert_eq!(c.tilt.max_degrees, 10.0);
    }

    #[test]
    fn with_enabled_replaces_flags() {
        let c = EffectConfig::theme().with_enabled(EnabledEffects::NONE);
        assert_eq!(c.enabled, EnabledEffects::NONE);
        assert_eq!(c.selectors, Selectors::theme());
    }
}
