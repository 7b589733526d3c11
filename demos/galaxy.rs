//! Evaluate a spinning galaxy on the CPU and print frame statistics.
//!
//! Run with `cargo run --example galaxy`.

use glam::Vec3;
use swirl::{Config, FrameDriver, Mode, Palette, Time};

fn main() {
    env_logger::init();

    let cfg = Config {
        count: 50_000,
        mode: Mode::Galaxy,
        palette: Palette::Cyber,
        glow: 0.3,
        ..Config::default()
    };

    let driver = match FrameDriver::new(&cfg, Some(42)) {
        Ok(driver) => driver,
        Err(err) => {
            eprintln!("bad configuration: {err}");
            std::process::exit(1);
        }
    };

    let camera = |p: Vec3| (p - Vec3::new(0.0, 20.0, 40.0)).length();
    let mut time = Time::new();

    println!(
        "galaxy: {} particles, palette {}",
        driver.store().len(),
        cfg.palette.name()
    );

    for _ in 0..10 {
        time.advance(1.0 / 60.0);

        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        let mut alpha_sum = 0.0;
        let mut n = 0usize;

        for v in driver.evaluate(&cfg, time.elapsed(), camera) {
            let p = Vec3::from_array(v.position);
            min = min.min(p);
            max = max.max(p);
            alpha_sum += v.color[3];
            n += 1;
        }

        println!(
            "t={:6.3}s  bounds [{:6.2} {:6.2} {:6.2}]..[{:5.2} {:5.2} {:5.2}]  mean alpha {:.3}",
            time.elapsed(),
            min.x,
            min.y,
            min.z,
            max.x,
            max.y,
            max.z,
            alpha_sum / n as f32
        );
    }
}
