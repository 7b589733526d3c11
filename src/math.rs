//! Scalar helpers shared by the noise field, motion kernels and shading.
//!
//! These mirror the GLSL built-ins the shading math is written in terms of,
//! so kernel code reads the same as the formulas it implements.

/// Hermite interpolation between 0 and 1 over `[edge0, edge1]`.
///
/// Clamps outside the edge range. With `edge0 == edge1` this degenerates to
/// a step at the shared edge, matching GLSL behavior for our inputs.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Fractional part, always in `[0, 1)` for finite input (GLSL `fract`).
#[inline]
pub fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// Linear blend from `a` to `b` by `t` (GLSL `mix`).
#[inline]
pub fn mix(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Euclidean modulo, result has the sign of `m` (GLSL `mod`).
///
/// `f32::rem_euclid` differs from GLSL `mod` for negative `m`; the kernels
/// only use positive moduli so the two agree everywhere we care.
#[inline]
pub fn modulo(x: f32, m: f32) -> f32 {
    x - m * (x / m).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smoothstep_edges() {
        assert_eq!(smoothstep(0.0, 1.0, -0.5), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 0.0), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 1.0), 1.0);
        assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
        assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_smoothstep_monotone() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = smoothstep(0.3, 0.7, i as f32 / 100.0);
            assert!(v >= prev, "smoothstep not monotone at step {i}");
            prev = v;
        }
    }

    #[test]
    fn test_fract_negative() {
        assert!((fract(-0.25) - 0.75).abs() < 1e-6);
        assert!((fract(3.25) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_modulo_wraps_like_glsl() {
        assert!((modulo(5.5, 4.0) - 1.5).abs() < 1e-6);
        assert!((modulo(-0.5, 4.0) - 3.5).abs() < 1e-6);
    }

    #[test]
    fn test_mix_endpoints() {
        assert_eq!(mix(2.0, 6.0, 0.0), 2.0);
        assert_eq!(mix(2.0, 6.0, 1.0), 6.0);
        assert_eq!(mix(2.0, 6.0, 0.5), 4.0);
    }
}
