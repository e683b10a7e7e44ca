//! Benchmarks for the sonification engine.
//!
//! Run with: cargo bench
//!
//! The render is offline, so there is no realtime deadline to honor; the
//! numbers here track how render cost scales with history size and keep
//! the per-sample envelope math honest.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use repotone::analyze::Commit;
use repotone::dsp::envelope::NoteEnvelope;
use repotone::sonify::{Sonifier, SonifyConfig};

fn commit(timestamp: i64, additions: u32, deletions: u32) -> Commit {
    Commit {
        hash: String::new(),
        author: String::new(),
        email: String::new(),
        timestamp,
        subject: String::new(),
        additions,
        deletions,
        files_changed: Vec::new(),
    }
}

fn history(commits: usize) -> Vec<Commit> {
    (0..commits)
        .map(|i| {
            commit(
                i as i64 * 3_600,
                (i % 53) as u32 * 7,
                (i % 13) as u32 * 3,
            )
        })
        .collect()
}

fn bench_envelope(c: &mut Criterion) {
    let envelope = NoteEnvelope::new(0.1);
    let sample_rate = 44_100.0f32;

    c.bench_function("dsp/envelope", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for i in 0..4_410 {
                acc += envelope.amplitude(black_box(i as f32 / sample_rate));
            }
            acc
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("sonify/render");
    let sonifier = Sonifier::new(SonifyConfig::default()).expect("default config");

    for &commits in &[10usize, 100, 600] {
        let history = history(commits);
        group.bench_with_input(BenchmarkId::from_parameter(commits), &commits, |b, _| {
            b.iter(|| sonifier.render(black_box(&history)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_envelope, bench_render);
criterion_main!(benches);
