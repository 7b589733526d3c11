//! Static per-particle attributes, generated once per structural change.
//!
//! The store is immutable after generation: kernels recompute world state
//! from these attributes every frame, so there is no per-particle mutable
//! simulation state anywhere. When a structural parameter changes (count,
//! mode, palette, spread), a whole new store is generated and swapped in;
//! a render never observes a half-regenerated store.
//!
//! Layout is struct-of-arrays, matching how the attributes are handed to a
//! rendering backend as separate vertex streams.

use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

use crate::config::Mode;
use crate::error::ConfigError;
use crate::visuals::Palette;

/// Immutable per-particle attribute arrays.
///
/// All arrays have identical length. See the module docs for the
/// regeneration contract.
#[derive(Debug, Clone)]
pub struct ParticleStore {
    positions: Vec<Vec3>,
    sizes: Vec<f32>,
    velocity_seeds: Vec<Vec3>,
    lives: Vec<f32>,
    seeds: Vec<f32>,
    colors: Vec<Vec3>,
}

impl ParticleStore {
    /// Generate a store for the given structural parameters.
    ///
    /// `rng_seed` makes generation reproducible; `None` seeds from entropy.
    /// `count == 0` yields a valid empty store. `spread` must be strictly
    /// positive and finite.
    pub fn generate(
        count: usize,
        mode: Mode,
        palette: Palette,
        spread: f32,
        rng_seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        if !spread.is_finite() {
            return Err(ConfigError::NotFinite {
                name: "spread",
                value: spread,
            });
        }
        if spread <= 0.0 {
            return Err(ConfigError::NonPositive {
                name: "spread",
                value: spread,
            });
        }

        let mut rng = match rng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        let mut positions = Vec::with_capacity(count);
        let mut sizes = Vec::with_capacity(count);
        let mut velocity_seeds = Vec::with_capacity(count);
        let mut lives = Vec::with_capacity(count);
        let mut seeds = Vec::with_capacity(count);
        let mut colors = Vec::with_capacity(count);

        let accents = palette.accents();

        for _ in 0..count {
            positions.push(base_position(&mut rng, mode, spread));

            velocity_seeds.push(Vec3::new(
                (rng.gen::<f32>() - 0.5) * 2.0,
                (rng.gen::<f32>() - 0.5) * 2.0,
                (rng.gen::<f32>() - 0.5) * 2.0,
            ));

            sizes.push(0.5 + rng.gen::<f32>() * 1.5);
            lives.push(0.5 + rng.gen::<f32>() * 0.5);
            seeds.push(rng.gen::<f32>());

            colors.push(accents[rng.gen_range(0..accents.len())]);
        }

        Ok(Self {
            positions,
            sizes,
            velocity_seeds,
            lives,
            seeds,
            colors,
        })
    }

    /// Number of particles.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the store holds no particles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Base positions, one per particle.
    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Size factors in [0.5, 2.0).
    #[inline]
    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    /// Velocity seeds in [-1, 1)^3.
    ///
    /// Reserved extension point: no kernel currently reads these.
    #[inline]
    pub fn velocity_seeds(&self) -> &[Vec3] {
        &self.velocity_seeds
    }

    /// Life weights in [0.5, 1.0); multiplicative alpha, never decremented.
    #[inline]
    pub fn lives(&self) -> &[f32] {
        &self.lives
    }

    /// Per-particle phase seeds in [0, 1).
    #[inline]
    pub fn seeds(&self) -> &[f32] {
        &self.seeds
    }

    /// Accent colors sampled from the palette at generation time.
    #[inline]
    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }
}

/// Sample one base position from the mode's distribution.
fn base_position(rng: &mut SmallRng, mode: Mode, spread: f32) -> Vec3 {
    match mode {
        Mode::Galaxy => {
            // Disc, area-uniform via sqrt, thickness tapering to zero at
            // the outer edge.
            let radius = rng.gen::<f32>().sqrt() * spread;
            let angle = rng.gen::<f32>() * TAU;
            let height = (rng.gen::<f32>() - 0.5) * 2.0 * (1.0 - radius / spread);
            Vec3::new(angle.cos() * radius, height * 2.0, angle.sin() * radius)
        }
        Mode::Helix => {
            // Scratch values: the helix kernel fully overrides X and Z and
            // only keeps Y, which spans the strand height.
            Vec3::new(
                (rng.gen::<f32>() - 0.5) * 8.0,
                (rng.gen::<f32>() - 0.5) * 40.0,
                (rng.gen::<f32>() - 0.5) * 8.0,
            )
        }
        Mode::Starfield => {
            // Unit cube; the kernel scales by field depth.
            Vec3::new(
                (rng.gen::<f32>() - 0.5) * 2.0,
                (rng.gen::<f32>() - 0.5) * 2.0,
                (rng.gen::<f32>() - 0.5) * 2.0,
            )
        }
        Mode::Flowfield | Mode::Explosion | Mode::Swarm => {
            // Sphere with mass biased strongly outward (pow 0.3).
            let theta = rng.gen::<f32>() * TAU;
            let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
            let radius = rng.gen::<f32>().powf(0.3) * spread;
            Vec3::new(
                radius * phi.sin() * theta.cos(),
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
            )
        }
    }
}
