//! Motion kernels: per-particle procedural displacement.
//!
//! Each kernel is a pure function from a particle's static attributes plus
//! the scaled elapsed time to a world position, an alpha weight and an
//! optional point-size factor. Nothing is integrated or accumulated: world
//! state is recomputed from the immutable base attributes every frame, so
//! evaluation is deterministic, restartable and embarrassingly parallel.
//!
//! The kernels are a sum type with one variant per motion mode, each
//! carrying only the configuration fields it actually reads. Build one per
//! frame from the active snapshot with [`MotionKernel::from_config`].
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use swirl::{Config, MotionKernel};
//!
//! let cfg = Config::default();
//! let kernel = MotionKernel::from_config(&cfg);
//! let t = 1.25 * cfg.speed;
//! let sample = kernel.evaluate(Vec3::new(3.0, 0.5, -2.0), 0.37, 0.8, t);
//! assert!(sample.position.is_finite());
//! ```

use glam::{Vec2, Vec3, Vec3Swizzles};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use crate::config::{Config, Mode};
use crate::math::{fract, mix, modulo, smoothstep};
use crate::noise::curl_noise;

/// Helix strand radius before breathing.
const HELIX_RADIUS: f32 = 8.0;
/// Vertical spacing between helix rungs.
const RUNG_SPACING: f32 = 3.0;

/// One kernel evaluation result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelSample {
    /// World-space position.
    pub position: Vec3,
    /// Alpha weight in [0, 1], already scaled by the particle's life.
    pub alpha: f32,
    /// Extra point-size factor; only the starfield kernel sets this.
    pub size_factor: Option<f32>,
}

/// Motion kernel, one variant per [`Mode`].
///
/// `t` passed to [`evaluate`](Self::evaluate) is `elapsed * config.speed`.
/// Flowfield, swarm and helix additionally read the raw speed knob for
/// their internal phase terms, so those variants carry it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionKernel {
    /// Spinning disc; inner particles wind faster than outer ones.
    Galaxy {
        /// Spiral winding strength.
        spiral: f32,
        /// Vertical and radial pulse amplitude.
        pulse: f32,
        /// Turbulence field frequency.
        noise_scale: f32,
        /// Turbulence displacement amplitude.
        noise_strength: f32,
    },
    /// Curl-noise advection with a superimposed orbital drift.
    Flowfield {
        /// Animation speed knob (re-applied to the orbital phase).
        speed: f32,
        /// Radial pulse amplitude.
        pulse: f32,
        /// Turbulence field frequency.
        noise_scale: f32,
        /// Turbulence displacement amplitude.
        noise_strength: f32,
    },
    /// Cyclic radial expansion and collapse on a 4-time-unit period.
    Explosion {
        /// Radial pulse amplitude.
        pulse: f32,
        /// Turbulence field frequency.
        noise_scale: f32,
        /// Expansion distance and turbulence amplitude.
        noise_strength: f32,
    },
    /// Orbiting cloud blended toward a movable attractor point.
    Swarm {
        /// Attractor position.
        attractor: Vec3,
        /// Blend ratio toward the attractor orbit, in [0, 1].
        attractor_strength: f32,
        /// Animation speed knob (re-applied to the orbit phase).
        speed: f32,
        /// Radial pulse amplitude.
        pulse: f32,
        /// Turbulence field frequency.
        noise_scale: f32,
        /// Turbulence displacement amplitude.
        noise_strength: f32,
    },
    /// Two twisted strands plus ten connecting rungs.
    Helix {
        /// Twist rate multiplier.
        spiral: f32,
        /// Breathing amplitude.
        pulse: f32,
        /// Animation speed knob (scroll rate).
        speed: f32,
    },
    /// Rotating volumetric starfield with per-star twinkle.
    Starfield {
        /// Volume half-depth; base positions scale by this.
        field_depth: f32,
        /// Rotation rate about the Y then X axes.
        field_rotation: f32,
        /// Per-star size variation, in [0, 1].
        size_random: f32,
        /// Twinkle depth, in [0, 1].
        twinkle_strength: f32,
        /// Twinkle frequency multiplier.
        twinkle_speed: f32,
    },
}

impl MotionKernel {
    /// Build the kernel for the snapshot's active mode, capturing only the
    /// fields that mode reads.
    pub fn from_config(cfg: &Config) -> Self {
        match cfg.mode {
            Mode::Galaxy => MotionKernel::Galaxy {
                spiral: cfg.spiral,
                pulse: cfg.pulse,
                noise_scale: cfg.noise_scale,
                noise_strength: cfg.noise_strength,
            },
            Mode::Flowfield => MotionKernel::Flowfield {
                speed: cfg.speed,
                pulse: cfg.pulse,
                noise_scale: cfg.noise_scale,
                noise_strength: cfg.noise_strength,
            },
            Mode::Explosion => MotionKernel::Explosion {
                pulse: cfg.pulse,
                noise_scale: cfg.noise_scale,
                noise_strength: cfg.noise_strength,
            },
            Mode::Swarm => MotionKernel::Swarm {
                attractor: cfg.attractor,
                attractor_strength: cfg.attractor_strength,
                speed: cfg.speed,
                pulse: cfg.pulse,
                noise_scale: cfg.noise_scale,
                noise_strength: cfg.noise_strength,
            },
            Mode::Helix => MotionKernel::Helix {
                spiral: cfg.spiral,
                pulse: cfg.pulse,
                speed: cfg.speed,
            },
            Mode::Starfield => MotionKernel::Starfield {
                field_depth: cfg.field_depth,
                field_rotation: cfg.field_rotation,
                size_random: cfg.size_random,
                twinkle_strength: cfg.twinkle_strength,
                twinkle_speed: cfg.twinkle_speed,
            },
        }
    }

    /// The mode this kernel implements.
    pub fn mode(&self) -> Mode {
        match self {
            MotionKernel::Galaxy { .. } => Mode::Galaxy,
            MotionKernel::Flowfield { .. } => Mode::Flowfield,
            MotionKernel::Explosion { .. } => Mode::Explosion,
            MotionKernel::Swarm { .. } => Mode::Swarm,
            MotionKernel::Helix { .. } => Mode::Helix,
            MotionKernel::Starfield { .. } => Mode::Starfield,
        }
    }

    /// Evaluate one particle at scaled time `t` (`elapsed * speed`).
    ///
    /// Pure: identical inputs produce bit-identical samples.
    pub fn evaluate(&self, base: Vec3, seed: f32, life: f32, t: f32) -> KernelSample {
        match *self {
            MotionKernel::Galaxy {
                spiral,
                pulse,
                noise_scale,
                noise_strength,
            } => {
                let radius = base.xz().length();
                let angle = base.z.atan2(base.x);
                let spiral_angle = angle + t * (1.0 / (radius + 0.5)) * spiral;

                let mut pos = Vec3::new(
                    spiral_angle.cos() * radius,
                    base.y + (t * 2.0 + radius).sin() * 0.3 * pulse,
                    spiral_angle.sin() * radius,
                );

                let noise_pos = pos * noise_scale + Vec3::splat(t * 0.1);
                pos += curl_noise(noise_pos) * noise_strength;

                pulsed(pos, base, t, pulse, life)
            }

            MotionKernel::Flowfield {
                speed,
                pulse,
                noise_scale,
                noise_strength,
            } => {
                let flow = curl_noise(base * noise_scale + Vec3::splat(t * 0.2));
                let mut pos = base + flow * noise_strength * (t + seed * TAU).sin();

                // Orbital drift on top of the advection.
                let orbit_speed = t * speed * (0.5 + seed * 0.5);
                pos.x += (orbit_speed + seed * TAU).sin() * 0.5;
                pos.z += (orbit_speed + seed * TAU).cos() * 0.5;

                pulsed(pos, base, t, pulse, life)
            }

            MotionKernel::Explosion {
                pulse,
                noise_scale,
                noise_strength,
            } => {
                let dir = base.normalize_or_zero();
                let phase = modulo(t + seed, 4.0);
                let expand = (phase * PI * 0.5).sin();

                let mut pos = dir * (base.length() + expand * noise_strength * 10.0);
                pos += curl_noise(pos * noise_scale * 0.5) * noise_strength * 0.5;

                pulsed(pos, base, t, pulse, life)
            }

            MotionKernel::Swarm {
                attractor,
                attractor_strength,
                speed,
                pulse,
                noise_scale,
                noise_strength,
            } => {
                let orbit_angle = t * speed + seed * TAU;
                let orbit_offset = Vec3::new(
                    orbit_angle.cos() * (seed * TAU).sin(),
                    (orbit_angle * 0.7).sin() * 0.5,
                    orbit_angle.sin() * (seed * TAU).cos(),
                ) * (2.0 + seed * 3.0);

                // Blend is re-evaluated from the static base every frame,
                // so the ratio is constant over time rather than easing.
                let mut pos =
                    base.lerp(attractor + orbit_offset, attractor_strength * 0.02);
                pos += curl_noise(pos * noise_scale) * noise_strength * 0.5;

                pulsed(pos, base, t, pulse, life)
            }

            MotionKernel::Helix {
                spiral,
                pulse,
                speed,
            } => {
                let twist_rate = 0.4 * spiral;
                let scroll = t * speed * 0.5;
                let breathe = 1.0 + (t * 2.0).sin() * 0.1 * pulse;
                let radius = HELIX_RADIUS * breathe;
                let y = base.y;

                // Seed partitions particles into strand A, strand B and
                // rungs at fixed thresholds.
                let (mut pos, alpha) = if seed < 0.45 {
                    strand(y, twist_rate, scroll, 0.0, radius, seed, life, t)
                } else if seed < 0.9 {
                    strand(y, twist_rate, scroll, PI, radius, seed, life, t)
                } else {
                    let rung_index = ((seed - 0.9) * 100.0).floor();
                    let rung_y =
                        modulo(rung_index * RUNG_SPACING - 15.0, 30.0) - 15.0;
                    let rung_angle = rung_y * twist_rate + scroll;
                    let span = fract(seed * 73.0);

                    let angle_a = rung_angle;
                    let angle_b = rung_angle + PI;
                    let pos = Vec3::new(
                        mix(angle_a.cos(), angle_b.cos(), span) * radius,
                        rung_y,
                        mix(angle_a.sin(), angle_b.sin(), span) * radius,
                    );
                    (pos, life * 0.9)
                };

                // Slow rotation of the whole helix about Y.
                let (s, c) = (t * 0.2).sin_cos();
                pos = Vec3::new(pos.x * c - pos.z * s, pos.y, pos.x * s + pos.z * c);

                KernelSample {
                    position: pos,
                    alpha,
                    size_factor: None,
                }
            }

            MotionKernel::Starfield {
                field_depth,
                field_rotation,
                size_random,
                twinkle_strength,
                twinkle_speed,
            } => {
                let mut pos = base * field_depth;

                // Stable per-star hashes from the base position.
                let hash1 = hash2d(base.xy(), Vec2::new(12.9898, 78.233));
                let hash2 = hash2d(base.yz(), Vec2::new(39.346, 11.135));
                let hash3 = hash2d(base.xz(), Vec2::new(73.156, 52.235));

                let rot_x = t * field_rotation * 0.1;
                let rot_y = t * field_rotation * 0.15;

                let (sy, cy) = rot_y.sin_cos();
                pos = Vec3::new(pos.x * cy - pos.z * sy, pos.y, pos.x * sy + pos.z * cy);

                let (sx, cx) = rot_x.sin_cos();
                pos = Vec3::new(pos.x, pos.y * cx - pos.z * sx, pos.y * sx + pos.z * cx);

                // Size distribution favors small stars as size_random
                // approaches 1.
                let random_size = 0.2 + hash1.powf(2.5) * 1.8;
                let size_factor = mix(1.0, random_size, size_random);

                let brightness = 0.6 + hash2 * 0.4;

                let twinkle_phase = hash3 * TAU;
                let twinkle_freq = twinkle_speed * (0.8 + hash1 * 0.4);
                let wave = (t * twinkle_freq + twinkle_phase).sin();
                let twinkle = 1.0 - twinkle_strength * 0.7 * (0.5 - 0.5 * wave);

                let dist_fade = (1.0
                    - smoothstep(field_depth * 0.5, field_depth, pos.length()))
                .max(0.2);

                KernelSample {
                    position: pos,
                    alpha: brightness * twinkle * dist_fade * life,
                    size_factor: Some(size_factor),
                }
            }
        }
    }
}

/// Shared post-step for the four free-space kernels: radial pulse scale
/// keyed off the base distance, alpha straight from life.
#[inline]
fn pulsed(pos: Vec3, base: Vec3, t: f32, pulse: f32, life: f32) -> KernelSample {
    let scale = 1.0 + (t * 3.0 + base.length()).sin() * pulse * 0.1;
    KernelSample {
        position: pos * scale,
        alpha: life,
        size_factor: None,
    }
}

/// One helix strand point with tangential thickness jitter.
#[allow(clippy::too_many_arguments)]
fn strand(
    y: f32,
    twist_rate: f32,
    scroll: f32,
    phase: f32,
    radius: f32,
    seed: f32,
    life: f32,
    t: f32,
) -> (Vec3, f32) {
    let angle = y * twist_rate + scroll + phase;
    let mut pos = Vec3::new(angle.cos() * radius, y, angle.sin() * radius);

    let thick = 0.5 * (0.5 + seed * 0.5);
    pos.x += (angle + FRAC_PI_2).cos() * thick;
    pos.z += (angle + FRAC_PI_2).sin() * thick;

    let alpha = life * (0.7 + (y * 0.5 - t * 3.0 + phase / 2.0).sin() * 0.3);
    (pos, alpha)
}

/// 2D sine-dot hash in [0, 1); stable for a fixed input pair.
#[inline]
fn hash2d(p: Vec2, k: Vec2) -> f32 {
    fract(p.dot(k).sin() * 43_758.547)
}
