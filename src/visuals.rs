//! Visual configuration and point-sprite compositing.
//!
//! This module owns everything about how a particle looks once its world
//! position is known: the named color palettes, the sprite shape profiles,
//! the blend-mode hint for the backend, and [`shade`], the pure
//! per-fragment compositing rule.
//!
//! # Usage
//!
//! ```
//! use glam::Vec2;
//! use swirl::visuals::{shade, FragmentInput, Palette, ParticleShape};
//!
//! let palette = Palette::Cyber;
//! let rgba = shade(&FragmentInput {
//!     offset: Vec2::new(0.1, 0.0),
//!     shape: ParticleShape::SoftCircle,
//!     time: 0.0,
//!     base_color: palette.base(),
//!     particle_color: palette.accents()[1],
//!     color_mix: 0.7,
//!     glow: 0.0,
//!     alpha: 1.0,
//! });
//! assert!(rgba.is_some());
//! ```

use glam::{Vec2, Vec3, Vec4};

use crate::error::PaletteError;
use crate::math::smoothstep;

/// Named color palettes: one base color plus an ordered accent list.
///
/// Per-particle colors are sampled from the accent list at store-generation
/// time (discrete picks, never interpolated); the base color enters at the
/// compositing stage through the `color_mix` knob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Palette {
    /// Cyan/magenta/green neon (default).
    #[default]
    Cyber,

    /// Reds through yellow.
    Fire,

    /// Deep blue through white.
    Ice,

    /// Acid greens.
    Toxic,

    /// Violets and hot pink.
    Void,

    /// White and tinted star colors (warm and cool stellar hues).
    Stars,
}

impl Palette {
    /// All palettes, in control-surface order.
    pub const ALL: [Palette; 6] = [
        Palette::Cyber,
        Palette::Fire,
        Palette::Ice,
        Palette::Toxic,
        Palette::Void,
        Palette::Stars,
    ];

    /// Resolve a palette by its control-surface name.
    ///
    /// Unknown names are an error, never a silent default.
    pub fn from_name(name: &str) -> Result<Self, PaletteError> {
        match name {
            "cyber" => Ok(Palette::Cyber),
            "fire" => Ok(Palette::Fire),
            "ice" => Ok(Palette::Ice),
            "toxic" => Ok(Palette::Toxic),
            "void" => Ok(Palette::Void),
            "stars" => Ok(Palette::Stars),
            other => Err(PaletteError::Unknown(other.to_string())),
        }
    }

    /// Control-surface name of this palette.
    pub fn name(&self) -> &'static str {
        match self {
            Palette::Cyber => "cyber",
            Palette::Fire => "fire",
            Palette::Ice => "ice",
            Palette::Toxic => "toxic",
            Palette::Void => "void",
            Palette::Stars => "stars",
        }
    }

    /// Base color, mixed into every fragment by `color_mix`.
    pub fn base(&self) -> Vec3 {
        match self {
            Palette::Cyber => Vec3::new(0.0, 1.0, 1.0),
            Palette::Fire => Vec3::new(1.0, 0.266_666_68, 0.0),
            Palette::Ice => Vec3::new(0.266_666_68, 0.533_333_36, 1.0),
            Palette::Toxic => Vec3::new(0.0, 1.0, 0.266_666_68),
            Palette::Void => Vec3::new(0.533_333_36, 0.0, 1.0),
            Palette::Stars => Vec3::new(1.0, 1.0, 1.0),
        }
    }

    /// Accent colors sampled per particle at store generation.
    pub fn accents(&self) -> &'static [Vec3] {
        const CYBER: [Vec3; 3] = [
            Vec3::new(0.0, 1.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        const FIRE: [Vec3; 3] = [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.533_333_36, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
        ];
        const ICE: [Vec3; 3] = [
            Vec3::new(0.0, 0.266_666_68, 1.0),
            Vec3::new(0.0, 1.0, 1.0),
            Vec3::new(1.0, 1.0, 1.0),
        ];
        const TOXIC: [Vec3; 3] = [
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.533_333_36, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
        ];
        const VOID: [Vec3; 3] = [
            Vec3::new(0.266_666_68, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 0.533_333_36),
        ];
        const STARS: [Vec3; 5] = [
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(0.666_666_7, 0.8, 1.0),
            Vec3::new(1.0, 0.894_117_65, 0.709_803_94),
            Vec3::new(1.0, 0.8, 0.6),
            Vec3::new(1.0, 0.533_333_36, 0.4),
        ];
        match self {
            Palette::Cyber => &CYBER,
            Palette::Fire => &FIRE,
            Palette::Ice => &ICE,
            Palette::Toxic => &TOXIC,
            Palette::Void => &VOID,
            Palette::Stars => &STARS,
        }
    }
}

/// Blend mode hint for the rendering backend.
///
/// The core does not blend; it reports which hardware blend state the
/// configuration asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BlendMode {
    /// Standard alpha blending (default).
    #[default]
    Alpha,

    /// Additive blending. Overlapping particles accumulate brightness,
    /// which reads as glow.
    Additive,
}

/// Point-sprite shape, selected by the configuration's shape index (0-3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParticleShape {
    /// Soft circle with smooth falloff (default).
    #[default]
    SoftCircle,

    /// Annulus with a dim core.
    Ring,

    /// Rotating five-pointed star (time-animated edge).
    Star,

    /// Square via Chebyshev distance.
    Square,
}

impl ParticleShape {
    /// Map a shape selector index (0-3) to a shape.
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            0 => Some(ParticleShape::SoftCircle),
            1 => Some(ParticleShape::Ring),
            2 => Some(ParticleShape::Star),
            3 => Some(ParticleShape::Square),
            _ => None,
        }
    }

    /// Shape selector index of this shape.
    pub fn index(&self) -> u32 {
        match self {
            ParticleShape::SoftCircle => 0,
            ParticleShape::Ring => 1,
            ParticleShape::Star => 2,
            ParticleShape::Square => 3,
        }
    }

    /// Opacity profile at a fragment `offset` from the sprite center.
    ///
    /// `offset` is normalized to the sprite radius, so its components lie
    /// in [-0.5, 0.5]. `time` is raw elapsed seconds; only [`Star`] reads
    /// it. The caller has already discarded fragments beyond radius 0.5.
    ///
    /// [`Star`]: ParticleShape::Star
    pub fn opacity(&self, offset: Vec2, time: f32) -> f32 {
        let dist = offset.length();
        match self {
            ParticleShape::SoftCircle => {
                (1.0 - smoothstep(0.0, 0.5, dist)).powf(1.5)
            }
            ParticleShape::Ring => {
                let ring = smoothstep(0.3, 0.35, dist)
                    * (1.0 - smoothstep(0.45, 0.5, dist));
                let core = 1.0 - smoothstep(0.0, 0.15, dist);
                ring + core * 0.5
            }
            ParticleShape::Star => {
                let angle = offset.y.atan2(offset.x);
                let star = 0.3 + 0.2 * (angle * 5.0 + time * 2.0).sin();
                1.0 - smoothstep(star * 0.8, star, dist)
            }
            ParticleShape::Square => {
                let box_dist = offset.x.abs().max(offset.y.abs());
                1.0 - smoothstep(0.3, 0.4, box_dist)
            }
        }
    }
}

/// Per-fragment inputs to [`shade`].
#[derive(Debug, Clone, Copy)]
pub struct FragmentInput {
    /// Offset from sprite center, normalized to sprite radius
    /// (components in [-0.5, 0.5]).
    pub offset: Vec2,
    /// Active sprite shape.
    pub shape: ParticleShape,
    /// Raw elapsed time in seconds (drives the star shape animation).
    pub time: f32,
    /// Palette base color.
    pub base_color: Vec3,
    /// This particle's accent color.
    pub particle_color: Vec3,
    /// Blend factor from base toward particle color, in [0, 1].
    pub color_mix: f32,
    /// Additive glow strength.
    pub glow: f32,
    /// Kernel-computed alpha for this particle (life-derived).
    pub alpha: f32,
}

/// Composite one fragment of a point sprite.
///
/// Returns `None` for fragments farther than 0.5 from the sprite center
/// (discarded, no color write). The returned alpha can slightly exceed 1
/// when glow is active; clamping is the output pipeline's job. The RGB
/// channels carry an unclamped central brightness boost for the same
/// reason.
pub fn shade(frag: &FragmentInput) -> Option<Vec4> {
    let dist = frag.offset.length();
    if dist > 0.5 {
        return None;
    }

    let mut alpha = frag.shape.opacity(frag.offset, frag.time);
    alpha += (-dist * 4.0).exp() * frag.glow;

    let mut color = frag
        .base_color
        .lerp(frag.particle_color, frag.color_mix);
    color += Vec3::splat((1.0 - smoothstep(0.0, 0.2, dist)) * 0.5);

    Some(color.extend(alpha * frag.alpha))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frag(offset: Vec2, shape: ParticleShape) -> FragmentInput {
        FragmentInput {
            offset,
            shape,
            time: 0.0,
            base_color: Vec3::new(0.0, 1.0, 1.0),
            particle_color: Vec3::new(1.0, 0.0, 1.0),
            color_mix: 0.5,
            glow: 0.0,
            alpha: 1.0,
        }
    }

    #[test]
    fn test_palette_from_name_roundtrip() {
        for palette in Palette::ALL {
            assert_eq!(Palette::from_name(palette.name()), Ok(palette));
        }
    }

    #[test]
    fn test_palette_unknown_name_fails() {
        let err = Palette::from_name("lava").unwrap_err();
        assert_eq!(err, PaletteError::Unknown("lava".into()));
    }

    #[test]
    fn test_palette_has_accents() {
        for palette in Palette::ALL {
            assert!(!palette.accents().is_empty());
        }
        assert_eq!(Palette::Stars.accents().len(), 5);
    }

    #[test]
    fn test_shape_index_roundtrip() {
        for i in 0..4 {
            assert_eq!(ParticleShape::from_index(i).unwrap().index(), i);
        }
        assert_eq!(ParticleShape::from_index(4), None);
    }

    #[test]
    fn test_discard_outside_radius() {
        for shape in [
            ParticleShape::SoftCircle,
            ParticleShape::Ring,
            ParticleShape::Star,
            ParticleShape::Square,
        ] {
            assert!(shade(&frag(Vec2::new(0.51, 0.0), shape)).is_none());
            assert!(shade(&frag(Vec2::new(0.4, 0.4), shape)).is_none());
        }
    }

    #[test]
    fn test_soft_circle_center_opaque() {
        let rgba = shade(&frag(Vec2::ZERO, ParticleShape::SoftCircle)).unwrap();
        assert!((rgba.w - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_ring_peaks_in_band() {
        let plateau = shade(&frag(Vec2::new(0.4, 0.0), ParticleShape::Ring))
            .unwrap()
            .w;
        let rising = shade(&frag(Vec2::new(0.325, 0.0), ParticleShape::Ring))
            .unwrap()
            .w;
        let gap = shade(&frag(Vec2::new(0.22, 0.0), ParticleShape::Ring))
            .unwrap()
            .w;
        let outer = shade(&frag(Vec2::new(0.49, 0.0), ParticleShape::Ring))
            .unwrap()
            .w;
        assert!((plateau - 1.0).abs() < 1e-6, "ring plateau should be opaque");
        assert!((rising - 0.5).abs() < 1e-6, "rising edge midpoint");
        assert!(plateau > gap, "band should exceed gap between core and ring");
        assert!(plateau > outer, "band should exceed outer fade");
    }

    #[test]
    fn test_ring_core_is_dim() {
        let core = shade(&frag(Vec2::ZERO, ParticleShape::Ring)).unwrap().w;
        assert!((core - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_square_edge_transparent() {
        let edge = shade(&frag(Vec2::new(0.45, 0.0), ParticleShape::Square))
            .unwrap()
            .w;
        assert_eq!(edge, 0.0);
        let center = shade(&frag(Vec2::ZERO, ParticleShape::Square)).unwrap().w;
        assert_eq!(center, 1.0);
    }

    #[test]
    fn test_glow_adds_alpha() {
        let mut input = frag(Vec2::new(0.45, 0.0), ParticleShape::SoftCircle);
        let without = shade(&input).unwrap().w;
        input.glow = 2.0;
        let with = shade(&input).unwrap().w;
        assert!(with > without);
        // Glow may push alpha past 1 near the center; it stays bounded.
        input.offset = Vec2::ZERO;
        let peak = shade(&input).unwrap().w;
        assert!(peak <= 3.0);
    }

    #[test]
    fn test_color_mix_blends() {
        let mut input = frag(Vec2::new(0.45, 0.0), ParticleShape::SoftCircle);
        input.color_mix = 0.0;
        let base_heavy = shade(&input).unwrap();
        input.color_mix = 1.0;
        let particle_heavy = shade(&input).unwrap();
        // Far from center the brightness boost is ~0, so channels follow
        // the mixed color directly.
        assert!(base_heavy.y > particle_heavy.y);
        assert!(particle_heavy.x > base_heavy.x);
    }

    #[test]
    fn test_alpha_scales_output() {
        let mut input = frag(Vec2::new(0.1, 0.0), ParticleShape::SoftCircle);
        input.alpha = 0.5;
        let half = shade(&input).unwrap().w;
        input.alpha = 1.0;
        let full = shade(&input).unwrap().w;
        assert!((half * 2.0 - full).abs() < 1e-6);
    }
}
