//! Frame clock feeding elapsed time into kernel evaluation.
//!
//! Motion is a pure function of elapsed time, so the clock is the only
//! stateful part of an animation loop: pausing it freezes the scene
//! mid-motion and resuming continues from the same pose, with no particle
//! state to save or restore. [`Time::tick`] follows the wall clock;
//! [`Time::advance`] steps by an explicit delta for offline rendering and
//! tests.

use std::time::Instant;

/// Accumulated animation time with pause and scale controls.
#[derive(Debug, Clone)]
pub struct Time {
    last: Instant,
    elapsed: f32,
    delta: f32,
    scale: f32,
    paused: bool,
    frame: u64,
}

impl Time {
    /// A clock at zero elapsed time, running.
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            elapsed: 0.0,
            delta: 0.0,
            scale: 1.0,
            paused: false,
            frame: 0,
        }
    }

    /// Advance by the wall-clock interval since the previous tick.
    ///
    /// While paused the interval is consumed but not accumulated, so
    /// resuming does not jump.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let real = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        self.step(real);
    }

    /// Advance by an explicit delta in seconds, ignoring the wall clock.
    pub fn advance(&mut self, dt: f32) {
        self.last = Instant::now();
        self.step(dt);
    }

    fn step(&mut self, dt: f32) {
        if self.paused {
            self.delta = 0.0;
            return;
        }
        self.delta = dt * self.scale;
        self.elapsed += self.delta;
        self.frame += 1;
    }

    /// Seconds of (scaled) animation time accumulated so far.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Scaled delta of the most recent tick.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Number of non-paused ticks so far.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Stop accumulating time.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume accumulating time from the current pose.
    pub fn resume(&mut self) {
        self.last = Instant::now();
        self.paused = false;
    }

    /// Whether the clock is paused.
    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Rate multiplier applied to every tick; 1.0 is real time.
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale.max(0.0);
    }

    /// Current rate multiplier.
    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Rewind to zero elapsed time, keeping pause and scale settings.
    pub fn reset(&mut self) {
        self.last = Instant::now();
        self.elapsed = 0.0;
        self.delta = 0.0;
        self.frame = 0;
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_accumulates() {
        let mut time = Time::new();
        time.advance(0.25);
        time.advance(0.25);
        assert!((time.elapsed() - 0.5).abs() < 1e-6);
        assert_eq!(time.frame(), 2);
    }

    #[test]
    fn test_pause_freezes_elapsed() {
        let mut time = Time::new();
        time.advance(1.0);
        time.pause();
        time.advance(5.0);
        assert!((time.elapsed() - 1.0).abs() < 1e-6);
        assert_eq!(time.delta(), 0.0);
        assert_eq!(time.frame(), 1);

        time.resume();
        time.advance(0.5);
        assert!((time.elapsed() - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_scale_multiplies_delta() {
        let mut time = Time::new();
        time.set_scale(2.0);
        time.advance(0.5);
        assert!((time.elapsed() - 1.0).abs() < 1e-6);
        assert!((time.delta() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_negative_scale_clamps_to_zero() {
        let mut time = Time::new();
        time.set_scale(-3.0);
        time.advance(1.0);
        assert_eq!(time.elapsed(), 0.0);
    }

    #[test]
    fn test_reset_keeps_settings() {
        let mut time = Time::new();
        time.set_scale(0.5);
        time.advance(2.0);
        time.reset();
        assert_eq!(time.elapsed(), 0.0);
        assert_eq!(time.frame(), 0);
        assert_eq!(time.scale(), 0.5);
    }
}
