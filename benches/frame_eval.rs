use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;
use swirl::{curl_noise, noise3, Config, FrameDriver, Mode};

fn bench_noise(c: &mut Criterion) {
    c.bench_function("noise3", |b| {
        b.iter(|| noise3(black_box(Vec3::new(1.3, -2.7, 0.4))))
    });

    c.bench_function("curl_noise", |b| {
        b.iter(|| curl_noise(black_box(Vec3::new(1.3, -2.7, 0.4))))
    });
}

fn bench_frame(c: &mut Criterion) {
    let camera = |p: Vec3| (p - Vec3::new(0.0, 15.0, 60.0)).length();

    for mode in [Mode::Galaxy, Mode::Flowfield, Mode::Starfield] {
        let cfg = Config {
            count: 50_000,
            mode,
            ..Config::default()
        };
        let driver = FrameDriver::new(&cfg, Some(1)).unwrap();

        c.bench_function(&format!("frame_50k_{}", mode.name()), |b| {
            b.iter(|| {
                let mut acc = 0.0f32;
                for v in driver.evaluate(&cfg, black_box(3.7), camera) {
                    acc += v.size;
                }
                acc
            })
        });
    }
}

criterion_group!(benches, bench_noise, bench_frame);
criterion_main!(benches);
