//! End-to-end properties of the sonification pipeline.

use repotone::analyze::Commit;
use repotone::io::wav;
use repotone::sonify::{Sonifier, SonifyConfig};
use rustfft::{num_complex::Complex, FftPlanner};

const SAMPLE_RATE: u32 = 44_100;

fn commit(timestamp: i64, additions: u32, deletions: u32) -> Commit {
    Commit {
        hash: format!("{timestamp:040x}"),
        author: "Test Author".into(),
        email: "test@example.com".into(),
        timestamp,
        subject: "change".into(),
        additions,
        deletions,
        files_changed: Vec::new(),
    }
}

fn sonifier() -> Sonifier {
    Sonifier::new(SonifyConfig::default()).expect("default config")
}

/// Dominant frequency of the first `fft_size` samples, in Hz.
fn dominant_frequency(samples: &[f32], fft_size: usize) -> f32 {
    let mut spectrum: Vec<Complex<f32>> = samples
        .iter()
        .take(fft_size)
        .map(|&s| Complex::new(s, 0.0))
        .collect();
    assert_eq!(spectrum.len(), fft_size, "not enough samples for the FFT");

    FftPlanner::new()
        .plan_fft_forward(fft_size)
        .process(&mut spectrum);

    let (bin, _) = spectrum[1..fft_size / 2]
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.norm().total_cmp(&b.1.norm()))
        .expect("non-empty spectrum");
    (bin + 1) as f32 * SAMPLE_RATE as f32 / fft_size as f32
}

#[test]
fn buffer_length_matches_the_duration_formula() {
    let sonifier = sonifier();
    for n in [1usize, 7, 25, 100] {
        let commits: Vec<Commit> = (0..n).map(|i| commit(i as i64 * 60, 3, 1)).collect();
        let buffer = sonifier.render(&commits);
        let expected = (60.0f32.min(n as f32 * 0.1) * SAMPLE_RATE as f32).round() as usize;
        assert_eq!(buffer.len(), expected, "for {n} commits");
    }
}

#[test]
fn empty_history_is_exactly_one_second_of_silence() {
    let buffer = sonifier().render(&[]);
    assert_eq!(buffer.len(), SAMPLE_RATE as usize);
    assert!(buffer.iter().all(|&s| s == 0.0));
}

#[test]
fn heavy_overlap_still_fits_the_unit_range() {
    // Fifty co-timed commits stack into one loud note and force the
    // post-mix normalization to engage.
    let commits: Vec<Commit> = (0..50).map(|_| commit(0, 500, 500)).collect();
    let buffer = sonifier().render(&commits);

    assert!(buffer.iter().all(|s| s.abs() <= 1.0));
    let peak = buffer.iter().map(|s| s.abs()).fold(0.0f32, f32::max);
    assert!(peak > 0.999, "normalization should land the peak at unity");
}

#[test]
fn renders_are_bitwise_reproducible() {
    let commits: Vec<Commit> = (0..40)
        .map(|i| commit(i * 3_600, (i % 17) as u32 * 5, (i % 5) as u32 * 3))
        .collect();

    let first = sonifier().render(&commits);
    let second = sonifier().render(&commits);
    assert_eq!(first, second);
}

#[test]
fn pure_addition_commit_sounds_the_doubled_frequency() {
    // additions only -> multiplier 2.0 -> 440 Hz on the default 220 Hz base
    let buffer = sonifier().render(&[commit(0, 10, 0)]);
    let frequency = dominant_frequency(&buffer, 4_096);
    assert!(
        (frequency - 440.0).abs() < 25.0,
        "expected ~440 Hz, got {frequency}"
    );
}

#[test]
fn pure_deletion_commit_sounds_the_halved_frequency() {
    // deletions only -> multiplier 0.5 -> 110 Hz on the default 220 Hz base
    let buffer = sonifier().render(&[commit(0, 0, 10)]);
    let frequency = dominant_frequency(&buffer, 4_096);
    assert!(
        (frequency - 110.0).abs() < 25.0,
        "expected ~110 Hz, got {frequency}"
    );
}

#[test]
fn renders_encode_to_a_playable_wav() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("history.wav");

    let commits: Vec<Commit> = (0..20).map(|i| commit(i * 86_400, 40, 10)).collect();
    let buffer = sonifier().render(&commits);
    wav::write_wav(&path, &buffer, SAMPLE_RATE).expect("encode wav");

    let reader = hound::WavReader::open(&path).expect("open wav");
    assert_eq!(reader.spec().channels, 1);
    assert_eq!(reader.spec().sample_rate, SAMPLE_RATE);
    assert_eq!(reader.len() as usize, buffer.len());
}
