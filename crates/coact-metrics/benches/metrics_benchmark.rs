//! Throughput of the co-activation metrics over trial sizes

use coact_metrics::{cci, compose_path, gradient, mean_activity, potential_path_integral, PotentialField};
use coact_simulation::{ActivitySimulator, SimulationConfig};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn simulated(frames: usize, channels: usize) -> coact_core::ActivitySignal {
    let config = SimulationConfig {
        channel_patterns: vec![coact_simulation::ActivationPattern::Constant { level: 0.3 }; channels],
        noise_std: 0.05,
        seed: Some(frames as u64),
        ..SimulationConfig::default()
    };
    let rate = config.sampling_rate;
    ActivitySimulator::new(config)
        .and_then(|mut sim| sim.generate(frames as f64 / rate))
        .expect("benchmark simulation")
}

fn bench_reductions(c: &mut Criterion) {
    let mut group = c.benchmark_group("reductions");

    for &frames in &[256, 4096, 65536] {
        for &channels in &[2, 8] {
            let signal = simulated(frames, channels);
            let id = format!("{}frames_{}ch", frames, channels);

            group.bench_with_input(BenchmarkId::new("mean_activity", &id), &signal, |b, s| {
                b.iter(|| black_box(mean_activity(black_box(s))))
            });
            group.bench_with_input(BenchmarkId::new("cci", &id), &signal, |b, s| {
                b.iter(|| black_box(cci(black_box(s))))
            });
        }
    }

    group.finish();
}

fn bench_integral(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_integral");
    let field = PotentialField::Gaussian {
        amplitude: 1.0, center_x: 0.9, center_y: 0.3, sigma_x: 0.2, sigma_y: 0.1,
    };

    for &frames in &[256, 4096, 65536] {
        let signal = simulated(frames, 4);
        let path = compose_path(&signal);

        group.bench_with_input(BenchmarkId::new("gradient", frames), &path, |b, p| {
            b.iter(|| black_box(gradient(black_box(p.x()))))
        });
        group.bench_with_input(BenchmarkId::new("full", frames), &signal, |b, s| {
            b.iter(|| black_box(potential_path_integral(black_box(s), &field)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reductions, bench_integral);
criterion_main!(benches);
