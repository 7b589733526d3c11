//! # swirl
//!
//! Procedural particle motion and shading core: noise-driven point sprites
//! made easy.
//!
//! swirl animates 1K-200K particles without per-particle simulation state.
//! Each particle carries a handful of immutable attributes generated once,
//! and a pure motion kernel recomputes its world position, alpha and size
//! from those attributes plus the elapsed time, every frame. That makes
//! evaluation deterministic, restartable from any time value and trivially
//! parallel, and it makes live parameter editing free: non-structural
//! knobs simply change the function evaluated on the next frame.
//!
//! ## Quick start
//!
//! ```
//! use swirl::{Config, FrameDriver, Mode, Time};
//!
//! let cfg = Config {
//!     count: 10_000,
//!     mode: Mode::Galaxy,
//!     ..Config::default()
//! };
//!
//! let driver = FrameDriver::new(&cfg, None).unwrap();
//! let mut time = Time::new();
//! time.advance(1.0 / 60.0);
//!
//! let camera = |p: glam::Vec3| (p - glam::Vec3::new(0.0, 10.0, 30.0)).length();
//! for vertex in driver.evaluate(&cfg, time.elapsed(), camera) {
//!     // upload `vertex` to the backend of your choice
//!     let _ = vertex.size;
//! }
//! ```
//!
//! ## Pipeline
//!
//! | Stage | Module | Role |
//! |-------|--------|------|
//! | Attributes | [`store`] | per-particle base position, size, life, seed, color |
//! | Motion | [`kernels`] | six kernels mapping attributes + time to position and alpha |
//! | Turbulence | [`noise`] | simplex gradient noise and the curl field built on it |
//! | Shading | [`visuals`] | palettes, sprite shapes, per-fragment opacity and color |
//! | Frame | [`frame`] | vertex stream assembly and store regeneration |
//!
//! Six motion modes ship: `galaxy`, `flowfield`, `explosion`, `swarm`,
//! `helix` and `starfield`. All of them read the same [`Config`] snapshot;
//! see [`Mode`] for what each one does.
//!
//! Rendering is out of scope: the output is a stream of packed
//! [`PointVertex`] values and a CPU-side fragment model
//! ([`visuals::shade`]) describing how a backend should shade each sprite.

pub mod config;
pub mod error;
pub mod frame;
pub mod kernels;
pub mod math;
pub mod noise;
pub mod store;
pub mod time;
pub mod visuals;

pub use config::{Config, Mode};
pub use error::{ConfigError, ModeError, PaletteError};
pub use frame::{evaluate_frame, FrameDriver, PointVertex};
pub use kernels::{KernelSample, MotionKernel};
pub use noise::{curl_noise, noise3};
pub use store::ParticleStore;
pub use time::Time;
pub use visuals::{BlendMode, FragmentInput, Palette, ParticleShape};

/// Convenience re-exports for `use swirl::prelude::*`.
pub mod prelude {
    pub use crate::config::{Config, Mode};
    pub use crate::frame::{evaluate_frame, FrameDriver, PointVertex};
    pub use crate::store::ParticleStore;
    pub use crate::time::Time;
    pub use crate::visuals::{BlendMode, Palette, ParticleShape};
}
