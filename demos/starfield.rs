//! Rotate a twinkling starfield and print per-frame brightness stats.
//!
//! Run with `cargo run --example starfield`.

use glam::Vec3;
use swirl::{Config, FrameDriver, Mode, Palette, Time};

fn main() {
    env_logger::init();

    let cfg = Config {
        count: 20_000,
        mode: Mode::Starfield,
        palette: Palette::Stars,
        field_depth: 50.0,
        field_rotation: 0.3,
        size_random: 0.8,
        twinkle_strength: 0.7,
        twinkle_speed: 1.5,
        ..Config::default()
    };

    let driver = match FrameDriver::new(&cfg, Some(7)) {
        Ok(driver) => driver,
        Err(err) => {
            eprintln!("bad configuration: {err}");
            std::process::exit(1);
        }
    };

    let camera = |p: Vec3| (p - Vec3::new(0.0, 0.0, 90.0)).length();
    let mut time = Time::new();

    println!("starfield: {} stars", driver.store().len());

    for _ in 0..10 {
        time.advance(0.5);

        let mut alpha_sum = 0.0;
        let mut size_sum = 0.0;
        let mut n = 0usize;
        for v in driver.evaluate(&cfg, time.elapsed(), camera) {
            alpha_sum += v.color[3];
            size_sum += v.size;
            n += 1;
        }

        println!(
            "t={:5.2}s  mean alpha {:.3}  mean size {:.3}",
            time.elapsed(),
            alpha_sum / n as f32,
            size_sum / n as f32
        );
    }
}
