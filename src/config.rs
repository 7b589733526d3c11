//! Configuration snapshot consumed by the evaluation pipeline.
//!
//! A [`Config`] is plain data owned by the host: the core never mutates it
//! and reads exactly one snapshot per frame, so an external control surface
//! may rewrite values between frames at any rate without synchronization.
//! Validation happens at this boundary; once a snapshot passes
//! [`Config::validate`], frame evaluation cannot fail.

use std::str::FromStr;

use glam::Vec3;

use crate::error::{ConfigError, ModeError};
use crate::visuals::{BlendMode, Palette, ParticleShape};

/// Motion mode: selects which kernel computes world positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// Spinning disc with radius-dependent spiral arms.
    #[default]
    Galaxy,

    /// Curl-noise advection with orbital drift.
    Flowfield,

    /// Cyclic radial expansion and collapse.
    Explosion,

    /// Orbiting cloud blended toward a movable attractor.
    Swarm,

    /// Double-helix strands with connecting rungs.
    Helix,

    /// Volumetric rotating starfield with per-star twinkle.
    Starfield,
}

impl Mode {
    /// All modes, in control-surface order.
    pub const ALL: [Mode; 6] = [
        Mode::Galaxy,
        Mode::Flowfield,
        Mode::Explosion,
        Mode::Swarm,
        Mode::Helix,
        Mode::Starfield,
    ];

    /// Control-surface name of this mode.
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Galaxy => "galaxy",
            Mode::Flowfield => "flowfield",
            Mode::Explosion => "explosion",
            Mode::Swarm => "swarm",
            Mode::Helix => "helix",
            Mode::Starfield => "starfield",
        }
    }
}

impl FromStr for Mode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "galaxy" => Ok(Mode::Galaxy),
            "flowfield" => Ok(Mode::Flowfield),
            "explosion" => Ok(Mode::Explosion),
            "swarm" => Ok(Mode::Swarm),
            "helix" => Ok(Mode::Helix),
            "starfield" => Ok(Mode::Starfield),
            other => Err(ModeError::Unknown(other.to_string())),
        }
    }
}

/// Full configuration snapshot for one frame of evaluation.
///
/// Defaults give a good-looking galaxy out of the box. Changing `count`, `mode`,
/// `palette` or `spread` is structural: the particle store must be
/// regenerated ([`crate::FrameDriver`] detects this). Everything else
/// takes effect on the very next evaluated frame.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Number of particles (structural).
    pub count: usize,
    /// Motion mode (structural).
    pub mode: Mode,
    /// Color palette (structural).
    pub palette: Palette,
    /// Base-position distribution radius (structural, must be > 0).
    pub spread: f32,

    /// Global point-size multiplier (must be > 0).
    pub size: f32,
    /// Sprite shape.
    pub shape: ParticleShape,
    /// Blend-state hint forwarded to the backend.
    pub blend_mode: BlendMode,
    /// Additive glow strength (>= 0).
    pub glow: f32,
    /// Blend factor from palette base toward per-particle color, in [0, 1].
    pub color_mix: f32,

    /// Animation speed multiplier (>= 0).
    pub speed: f32,
    /// Spatial frequency of the turbulence field.
    pub noise_scale: f32,
    /// Turbulence displacement amplitude (>= 0).
    pub noise_strength: f32,
    /// Spiral/twist strength (galaxy arms, helix twist rate).
    pub spiral: f32,
    /// Pulse amplitude (radial breathing).
    pub pulse: f32,

    /// Swarm attractor position.
    pub attractor: Vec3,
    /// Swarm attractor pull, in [0, 1].
    pub attractor_strength: f32,

    /// Starfield volume half-depth (must be > 0).
    pub field_depth: f32,
    /// Starfield rotation rate (>= 0).
    pub field_rotation: f32,
    /// Starfield per-star size variation, in [0, 1].
    pub size_random: f32,
    /// Twinkle depth, in [0, 1].
    pub twinkle_strength: f32,
    /// Twinkle frequency multiplier (>= 0).
    pub twinkle_speed: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            count: 50_000,
            mode: Mode::Galaxy,
            palette: Palette::Cyber,
            spread: 15.0,

            size: 0.1,
            shape: ParticleShape::SoftCircle,
            blend_mode: BlendMode::Alpha,
            glow: 0.0,
            color_mix: 0.7,

            speed: 0.5,
            noise_scale: 0.1,
            noise_strength: 2.0,
            spiral: 2.0,
            pulse: 0.5,

            attractor: Vec3::ZERO,
            attractor_strength: 0.5,

            field_depth: 50.0,
            field_rotation: 0.3,
            size_random: 0.5,
            twinkle_strength: 0.5,
            twinkle_speed: 1.0,
        }
    }
}

impl Config {
    /// Validate every numeric knob.
    ///
    /// Rejects the two classes of caller misuse up front: out-of-range
    /// values that would produce NaN or negative-size geometry, and
    /// non-finite values from a broken control surface. A `count` of 0 is
    /// degenerate but valid (empty store).
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("spread", self.spread),
            ("size", self.size),
            ("glow", self.glow),
            ("color_mix", self.color_mix),
            ("speed", self.speed),
            ("noise_scale", self.noise_scale),
            ("noise_strength", self.noise_strength),
            ("spiral", self.spiral),
            ("pulse", self.pulse),
            ("attractor.x", self.attractor.x),
            ("attractor.y", self.attractor.y),
            ("attractor.z", self.attractor.z),
            ("attractor_strength", self.attractor_strength),
            ("field_depth", self.field_depth),
            ("field_rotation", self.field_rotation),
            ("size_random", self.size_random),
            ("twinkle_strength", self.twinkle_strength),
            ("twinkle_speed", self.twinkle_speed),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
        }

        for (name, value) in [
            ("spread", self.spread),
            ("size", self.size),
            ("field_depth", self.field_depth),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        for (name, value) in [
            ("glow", self.glow),
            ("speed", self.speed),
            ("noise_strength", self.noise_strength),
            ("field_rotation", self.field_rotation),
            ("twinkle_speed", self.twinkle_speed),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative { name, value });
            }
        }

        for (name, value) in [
            ("color_mix", self.color_mix),
            ("attractor_strength", self.attractor_strength),
            ("size_random", self.size_random),
            ("twinkle_strength", self.twinkle_strength),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfRange {
                    name,
                    value,
                    min: 0.0,
                    max: 1.0,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn test_mode_parse_roundtrip() {
        for mode in Mode::ALL {
            assert_eq!(mode.name().parse::<Mode>(), Ok(mode));
        }
        assert!("vortex".parse::<Mode>().is_err());
    }

    #[test]
    fn test_rejects_non_positive_spread() {
        let cfg = Config {
            spread: 0.0,
            ..Config::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::NonPositive {
                name: "spread",
                value: 0.0
            })
        );

        let cfg = Config {
            spread: -3.0,
            ..Config::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_field_depth() {
        let cfg = Config {
            field_depth: -10.0,
            ..Config::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NonPositive {
                name: "field_depth",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_nan() {
        let cfg = Config {
            noise_strength: f32::NAN,
            ..Config::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NotFinite {
                name: "noise_strength",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_out_of_range_mix() {
        let cfg = Config {
            color_mix: 1.5,
            ..Config::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::OutOfRange {
                name: "color_mix",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_count_is_valid() {
        let cfg = Config {
            count: 0,
            ..Config::default()
        };
        assert_eq!(cfg.validate(), Ok(()));
    }
}
