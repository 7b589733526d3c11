//! Simplex gradient noise and the curl field derived from it.
//!
//! `noise3` is a stateless 3D simplex noise returning values in [-1, 1].
//! It hashes lattice corners with a closed-form permutation polynomial, so
//! there is no permutation table and no shared state: the functions are
//! trivially `Send + Sync` and safe to call from parallel per-particle
//! loops.
//!
//! `curl_noise` turns the scalar field into a unit-length direction field
//! via symmetric finite differences, which is what the motion kernels use
//! for turbulent advection.
//!
//! # Example
//!
//! ```
//! use glam::Vec3;
//! use swirl::noise::{noise3, curl_noise};
//!
//! let n = noise3(Vec3::new(0.3, 1.7, -2.2));
//! assert!((-1.0..=1.0).contains(&n));
//!
//! let dir = curl_noise(Vec3::new(0.3, 1.7, -2.2));
//! assert!((dir.length() - 1.0).abs() < 1e-3 || dir == Vec3::ZERO);
//! ```

use glam::{Vec3, Vec4};
use glam::{Vec3Swizzles, Vec4Swizzles};

/// Finite-difference step for the curl operator.
const CURL_EPS: f32 = 0.01;

#[inline]
fn mod289_3(x: Vec3) -> Vec3 {
    x - (x * (1.0 / 289.0)).floor() * 289.0
}

#[inline]
fn mod289_4(x: Vec4) -> Vec4 {
    x - (x * (1.0 / 289.0)).floor() * 289.0
}

/// Permutation polynomial: `(34x + 1) x mod 289`.
#[inline]
fn permute(x: Vec4) -> Vec4 {
    mod289_4((x * 34.0 + Vec4::ONE) * x)
}

/// First-order Taylor approximation of `1/sqrt(r)` around 0.7.
#[inline]
fn taylor_inv_sqrt(r: Vec4) -> Vec4 {
    Vec4::splat(1.792_842_9) - r * 0.853_734_7
}

/// GLSL `step(edge, x)`: 1.0 where `x >= edge`, else 0.0.
#[inline]
fn step3(edge: Vec3, x: Vec3) -> Vec3 {
    Vec3::select(x.cmpge(edge), Vec3::ONE, Vec3::ZERO)
}

#[inline]
fn step4(edge: Vec4, x: Vec4) -> Vec4 {
    Vec4::select(x.cmpge(edge), Vec4::ONE, Vec4::ZERO)
}

/// 3D simplex gradient noise in [-1, 1].
///
/// Deterministic and continuous everywhere, including across simplex cell
/// boundaries, so its finite-difference derivative is well behaved for
/// [`curl_noise`].
pub fn noise3(v: Vec3) -> f32 {
    const C_X: f32 = 1.0 / 6.0;
    const C_Y: f32 = 1.0 / 3.0;

    // Skew into simplex space and find the cell origin.
    let i = (v + Vec3::splat(v.dot(Vec3::splat(C_Y)))).floor();
    let x0 = v - i + Vec3::splat(i.dot(Vec3::splat(C_X)));

    // Rank the components of x0 to pick the simplex corner traversal order.
    let g = step3(x0.yzx(), x0);
    let l = Vec3::ONE - g;
    let i1 = g.min(l.zxy());
    let i2 = g.max(l.zxy());

    let x1 = x0 - i1 + Vec3::splat(C_X);
    let x2 = x0 - i2 + Vec3::splat(C_Y);
    let x3 = x0 - Vec3::splat(0.5);

    // Hash the four corner indices.
    let i = mod289_3(i);
    let p = permute(
        permute(
            permute(Vec4::splat(i.z) + Vec4::new(0.0, i1.z, i2.z, 1.0))
                + Vec4::splat(i.y)
                + Vec4::new(0.0, i1.y, i2.y, 1.0),
        ) + Vec4::splat(i.x)
            + Vec4::new(0.0, i1.x, i2.x, 1.0),
    );

    // Map hashes onto a 7x7 grid of gradient directions.
    const N: f32 = 1.0 / 7.0;
    let ns = Vec3::new(2.0 * N, 0.5 * N - 1.0, N);

    let j = p - (p * (ns.z * ns.z)).floor() * 49.0;

    let x_ = (j * ns.z).floor();
    let y_ = (j - x_ * 7.0).floor();

    let x = x_ * ns.x + Vec4::splat(ns.y);
    let y = y_ * ns.x + Vec4::splat(ns.y);
    let h = Vec4::ONE - x.abs() - y.abs();

    let b0 = Vec4::new(x.x, x.y, y.x, y.y);
    let b1 = Vec4::new(x.z, x.w, y.z, y.w);

    let s0 = b0.floor() * 2.0 + Vec4::ONE;
    let s1 = b1.floor() * 2.0 + Vec4::ONE;
    let sh = -step4(h, Vec4::ZERO);

    let a0 = b0.xzyw() + s0.xzyw() * Vec4::new(sh.x, sh.x, sh.y, sh.y);
    let a1 = b1.xzyw() + s1.xzyw() * Vec4::new(sh.z, sh.z, sh.w, sh.w);

    let mut p0 = Vec3::new(a0.x, a0.y, h.x);
    let mut p1 = Vec3::new(a0.z, a0.w, h.y);
    let mut p2 = Vec3::new(a1.x, a1.y, h.z);
    let mut p3 = Vec3::new(a1.z, a1.w, h.w);

    // Normalize gradients.
    let norm = taylor_inv_sqrt(Vec4::new(
        p0.dot(p0),
        p1.dot(p1),
        p2.dot(p2),
        p3.dot(p3),
    ));
    p0 *= norm.x;
    p1 *= norm.y;
    p2 *= norm.z;
    p3 *= norm.w;

    // Radial falloff per corner, then blend the gradient contributions.
    let m = (Vec4::splat(0.6)
        - Vec4::new(x0.dot(x0), x1.dot(x1), x2.dot(x2), x3.dot(x3)))
    .max(Vec4::ZERO);
    let m = m * m;

    42.0 * (m * m).dot(Vec4::new(
        p0.dot(x0),
        p1.dot(x1),
        p2.dot(x2),
        p3.dot(x3),
    ))
}

/// Unit-length turbulence direction at `p`, derived from [`noise3`].
///
/// Built from symmetric finite differences of the scalar field along each
/// axis (step 0.01) with the axis pairing `(ny - nz, nx - nz, nx - ny)`,
/// where `nk` is the central difference along axis `k`. Returns `Vec3::ZERO`
/// when the sampled gradient is degenerate.
///
/// Callers animate the field by folding time into `p` before sampling
/// (e.g. `curl_noise(pos * scale + t * 0.1)`).
pub fn curl_noise(p: Vec3) -> Vec3 {
    let dx = Vec3::new(CURL_EPS, 0.0, 0.0);
    let dy = Vec3::new(0.0, CURL_EPS, 0.0);
    let dz = Vec3::new(0.0, 0.0, CURL_EPS);

    let nx = noise3(p + dx) - noise3(p - dx);
    let ny = noise3(p + dy) - noise3(p - dy);
    let nz = noise3(p + dz) - noise3(p - dz);

    Vec3::new(ny - nz, nx - nz, nx - ny).normalize_or_zero()
}
