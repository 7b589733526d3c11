//! Frame evaluation and store lifecycle.
//!
//! [`evaluate_frame`] turns a particle store plus a configuration snapshot
//! and an elapsed time into a lazy stream of [`PointVertex`] values, ready
//! to copy into a backend vertex buffer. Evaluation is pure: the same
//! store, snapshot and time always produce bit-identical vertices.
//!
//! [`FrameDriver`] owns the store and handles the structural-change
//! contract: when count, mode, palette or spread changes, it generates a
//! complete replacement store and swaps it in, so no frame ever sees a
//! half-regenerated store. Non-structural knobs flow straight through to
//! the next evaluation.
//!
//! # Example
//!
//! ```
//! use swirl::{Config, FrameDriver};
//!
//! let mut cfg = Config { count: 1000, ..Config::default() };
//! let mut driver = FrameDriver::new(&cfg, Some(1)).unwrap();
//!
//! cfg.glow = 0.4; // cosmetic, no regeneration
//! assert!(!driver.prepare(&cfg).unwrap());
//!
//! let frame: Vec<_> = driver
//!     .evaluate(&cfg, 0.5, |p| (p.z + 40.0).abs())
//!     .collect();
//! assert_eq!(frame.len(), 1000);
//! ```

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::config::{Config, Mode};
use crate::error::ConfigError;
use crate::kernels::MotionKernel;
use crate::store::ParticleStore;
use crate::visuals::Palette;

/// Reference distance at which a particle renders at its nominal size.
const SIZE_REFERENCE_DISTANCE: f32 = 300.0;

/// One evaluated particle, laid out for direct upload as a vertex stream.
///
/// 32 bytes, no padding: position, point size, then straight-alpha RGBA.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PointVertex {
    /// World-space position.
    pub position: [f32; 3],
    /// Point size in backend units, already perspective-attenuated.
    pub size: f32,
    /// Per-particle color with the kernel's alpha in the last channel.
    pub color: [f32; 4],
}

/// Evaluate every particle in `store` at `elapsed` seconds.
///
/// `camera_distance` maps a world position to its distance from the eye;
/// point sizes attenuate as `300 / distance`. The returned iterator is
/// lazy and borrows `store`, so a caller can stream vertices without an
/// intermediate allocation.
pub fn evaluate_frame<'a, F>(
    store: &'a ParticleStore,
    cfg: &Config,
    elapsed: f32,
    camera_distance: F,
) -> impl Iterator<Item = PointVertex> + 'a
where
    F: Fn(Vec3) -> f32 + 'a,
{
    let kernel = MotionKernel::from_config(cfg);
    let t = elapsed * cfg.speed;
    let size = cfg.size;

    (0..store.len()).map(move |i| {
        let sample = kernel.evaluate(
            store.positions()[i],
            store.seeds()[i],
            store.lives()[i],
            t,
        );

        // Degenerate camera distances clamp rather than emit inf.
        let dist = camera_distance(sample.position).max(1e-3);
        let point_size = store.sizes()[i]
            * size
            * sample.size_factor.unwrap_or(1.0)
            * (SIZE_REFERENCE_DISTANCE / dist);

        let c = store.colors()[i];
        PointVertex {
            position: sample.position.to_array(),
            size: point_size,
            color: [c.x, c.y, c.z, sample.alpha],
        }
    })
}

/// The structural subset of a [`Config`]; a change here invalidates the
/// particle store.
#[derive(Debug, Clone, Copy, PartialEq)]
struct StoreKey {
    count: usize,
    mode: Mode,
    palette: Palette,
    spread: f32,
}

impl StoreKey {
    fn of(cfg: &Config) -> Self {
        Self {
            count: cfg.count,
            mode: cfg.mode,
            palette: cfg.palette,
            spread: cfg.spread,
        }
    }
}

/// Owns a particle store and regenerates it when the configuration's
/// structural parameters change.
///
/// Typical frame loop: call [`prepare`](Self::prepare) with the current
/// snapshot, then [`evaluate`](Self::evaluate).
#[derive(Debug)]
pub struct FrameDriver {
    store: ParticleStore,
    key: StoreKey,
    rng_seed: Option<u64>,
}

impl FrameDriver {
    /// Validate `cfg` and generate the initial store.
    ///
    /// `rng_seed` is reused for every regeneration, so a seeded driver is
    /// reproducible across structural changes; `None` draws fresh entropy
    /// each time.
    pub fn new(cfg: &Config, rng_seed: Option<u64>) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let key = StoreKey::of(cfg);
        let store =
            ParticleStore::generate(cfg.count, cfg.mode, cfg.palette, cfg.spread, rng_seed)?;
        log::debug!(
            "generated store: {} particles, mode {}",
            store.len(),
            cfg.mode.name()
        );
        Ok(Self {
            store,
            key,
            rng_seed,
        })
    }

    /// Sync the store with `cfg` before evaluating a frame.
    ///
    /// Returns `true` if a structural change forced regeneration. The
    /// replacement store is fully built before the old one is dropped; on
    /// error the existing store is left untouched.
    pub fn prepare(&mut self, cfg: &Config) -> Result<bool, ConfigError> {
        cfg.validate()?;
        let key = StoreKey::of(cfg);
        if key == self.key {
            return Ok(false);
        }

        let store = ParticleStore::generate(
            cfg.count,
            cfg.mode,
            cfg.palette,
            cfg.spread,
            self.rng_seed,
        )?;
        log::debug!(
            "regenerated store: {} particles, mode {} (was {} particles, mode {})",
            store.len(),
            cfg.mode.name(),
            self.store.len(),
            self.key.mode.name()
        );
        self.store = store;
        self.key = key;
        Ok(true)
    }

    /// Evaluate the current store at `elapsed` seconds.
    ///
    /// See [`evaluate_frame`]; this only supplies the driver's store.
    pub fn evaluate<'a, F>(
        &'a self,
        cfg: &Config,
        elapsed: f32,
        camera_distance: F,
    ) -> impl Iterator<Item = PointVertex> + 'a
    where
        F: Fn(Vec3) -> f32 + 'a,
    {
        evaluate_frame(&self.store, cfg, elapsed, camera_distance)
    }

    /// The current particle store.
    #[inline]
    pub fn store(&self) -> &ParticleStore {
        &self.store
    }
}
