/*
Note Synthesizer & Mixer
========================

The engine turns a commit list into one mono sample buffer:

  1. The commit list's span (time range, peak activity) is computed once.
  2. A zeroed buffer of min(60s, commits * note_duration) is allocated.
  3. Each commit becomes a short note: its timestamp picks the start
     sample, its add/delete balance picks the pitch, its total activity
     picks the loudness. The note is rendered into a scratch buffer
     (oscillator, then envelope, then gain) and summed into the mix at
     its offset. Notes overrunning the buffer are truncated there.
  4. The finished mix is peak-normalized once.

Mapping choices
---------------

  pitch       A commit that only adds lines sounds an octave above the
              base frequency; one that only deletes drops to half. Mixed
              commits land in between, and empty ones stay on the base.

  loudness    Linear in activity relative to the busiest commit, capped
              at half scale to leave mixing headroom.

  placement   Proportional to the commit's position in the history's
              time span, so the rhythm of the audio mirrors the rhythm
              of development. Co-timed commits stack additively.

Every step is deterministic, so the same history and configuration always
produce byte-identical audio.
*/

use std::fmt;

use tracing::debug;

use crate::analyze::Commit;
use crate::dsp::{envelope::NoteEnvelope, mix, oscillator};
use crate::sonify::span::EventSpan;
use crate::DEFAULT_SAMPLE_RATE;

/// Hard ceiling on the rendered duration, in seconds.
///
/// Long histories compress into this window; the alternative (minutes of
/// audio for thousand-commit repositories) helps nobody.
pub const MAX_RENDER_SECONDS: f32 = 60.0;

/// Fixed per-note gain applied before mixing, so a single loud note
/// cannot saturate the buffer ahead of the final normalization.
const NOTE_GAIN: f32 = 0.3;

/// Loudness cap: the busiest commit peaks at half scale.
const VOLUME_CEILING: f32 = 0.5;

/// Tunable surface of the engine. All values must be positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SonifyConfig {
    /// Output sample rate in Hz.
    pub sample_rate: u32,
    /// Seconds of audio per commit.
    pub note_duration: f32,
    /// Frequency of an unmodulated note, in Hz.
    pub base_frequency: f32,
}

impl Default for SonifyConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            note_duration: 0.1,
            base_frequency: 220.0, // A3
        }
    }
}

impl SonifyConfig {
    /// Reject configurations that have no numeric meaning.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.sample_rate == 0 {
            return Err(ConfigurationError::SampleRate(self.sample_rate));
        }
        if !(self.note_duration.is_finite() && self.note_duration > 0.0) {
            return Err(ConfigurationError::NoteDuration(self.note_duration));
        }
        if !(self.base_frequency.is_finite() && self.base_frequency > 0.0) {
            return Err(ConfigurationError::BaseFrequency(self.base_frequency));
        }
        Ok(())
    }
}

/// A configuration value the engine cannot render with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigurationError {
    SampleRate(u32),
    NoteDuration(f32),
    BaseFrequency(f32),
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SampleRate(v) => write!(f, "sample rate must be positive, got {v} Hz"),
            Self::NoteDuration(v) => {
                write!(f, "note duration must be positive and finite, got {v} s")
            }
            Self::BaseFrequency(v) => {
                write!(f, "base frequency must be positive and finite, got {v} Hz")
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// Frequency multiplier from a commit's add/delete balance.
///
/// Pure deletions halve the base frequency, pure additions double it,
/// and a commit with no line changes stays at exactly 1.0.
#[inline]
pub fn frequency_multiplier(additions: u32, deletions: u32) -> f32 {
    let activity = u64::from(additions) + u64::from(deletions);
    if activity == 0 {
        return 1.0;
    }
    let add_ratio = additions as f32 / activity as f32;
    0.5 + add_ratio * 1.5
}

/// Renders commit histories to audio. Construction validates the
/// configuration, so rendering itself cannot fail.
pub struct Sonifier {
    config: SonifyConfig,
}

impl Sonifier {
    pub fn new(config: SonifyConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SonifyConfig {
        &self.config
    }

    /// Render the history into a mono sample buffer in [-1.0, 1.0].
    ///
    /// An empty history produces one second of silence rather than an
    /// error, so callers can always hand the result to an encoder.
    pub fn render(&self, commits: &[Commit]) -> Vec<f32> {
        let sample_rate = self.config.sample_rate as f32;
        let Some(span) = EventSpan::of(commits) else {
            return vec![0.0; self.config.sample_rate as usize];
        };

        let total_duration =
            MAX_RENDER_SECONDS.min(commits.len() as f32 * self.config.note_duration);
        let total_samples = (total_duration * sample_rate).round() as usize;
        let mut buffer = vec![0.0f32; total_samples];

        let envelope = NoteEnvelope::new(self.config.note_duration);
        let note_samples = (self.config.note_duration * sample_rate).round() as usize;
        let mut note = vec![0.0f32; note_samples];

        for commit in commits {
            let start = (span.position(commit.timestamp) * total_samples as f32) as usize;
            let frequency = self.config.base_frequency
                * frequency_multiplier(commit.additions, commit.deletions);
            let volume = note_volume(&span, commit.activity());

            oscillator::render(&mut note, frequency, sample_rate);
            envelope.apply(&mut note, sample_rate);
            mix::scale(&mut note, volume * NOTE_GAIN);
            mix::accumulate(&mut buffer[start.min(total_samples)..], &note);
        }

        let peak = mix::normalize_peak(&mut buffer);
        debug!(
            commits = commits.len(),
            samples = buffer.len(),
            duration = total_duration,
            peak,
            "render complete"
        );
        buffer
    }
}

/// Loudness of a note: linear in relative activity, capped at half scale.
#[inline]
fn note_volume(span: &EventSpan, activity: u64) -> f32 {
    (span.relative_activity(activity) * VOLUME_CEILING).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

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

    fn sonifier() -> Sonifier {
        Sonifier::new(SonifyConfig::default()).expect("default config is valid")
    }

    #[test]
    fn pure_addition_doubles_the_frequency() {
        assert_eq!(frequency_multiplier(10, 0), 2.0);
    }

    #[test]
    fn pure_deletion_halves_the_frequency() {
        assert_eq!(frequency_multiplier(0, 10), 0.5);
    }

    #[test]
    fn zero_activity_stays_on_the_base_frequency() {
        assert_eq!(frequency_multiplier(0, 0), 1.0);
    }

    #[test]
    fn balanced_commit_sits_mid_range() {
        assert!((frequency_multiplier(5, 5) - 1.25).abs() < 1e-6);
    }

    #[test]
    fn rejects_zero_sample_rate() {
        let config = SonifyConfig {
            sample_rate: 0,
            ..SonifyConfig::default()
        };
        assert_eq!(
            Sonifier::new(config).err(),
            Some(ConfigurationError::SampleRate(0))
        );
    }

    #[test]
    fn rejects_non_finite_note_duration() {
        for bad in [0.0, -0.1, f32::NAN, f32::INFINITY] {
            let config = SonifyConfig {
                note_duration: bad,
                ..SonifyConfig::default()
            };
            assert!(config.validate().is_err(), "accepted {bad}");
        }
    }

    #[test]
    fn rejects_negative_base_frequency() {
        let config = SonifyConfig {
            base_frequency: -220.0,
            ..SonifyConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigurationError::BaseFrequency(_))
        ));
    }

    #[test]
    fn empty_history_is_one_second_of_silence() {
        let buffer = sonifier().render(&[]);
        assert_eq!(buffer.len(), DEFAULT_SAMPLE_RATE as usize);
        assert!(buffer.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn buffer_length_scales_with_commit_count() {
        let commits: Vec<Commit> = (0..25).map(|i| commit(i, 1, 0)).collect();
        let buffer = sonifier().render(&commits);
        // 25 commits * 0.1s = 2.5s at 44.1 kHz
        assert_eq!(buffer.len(), 110_250);
    }

    #[test]
    fn duration_is_capped_at_sixty_seconds() {
        let commits: Vec<Commit> = (0..700).map(|i| commit(i, 1, 0)).collect();
        let buffer = sonifier().render(&commits);
        assert_eq!(buffer.len(), 60 * DEFAULT_SAMPLE_RATE as usize);
    }

    #[test]
    fn co_timed_commits_mix_additively() {
        let one = sonifier().render(&[commit(0, 10, 0)]);
        let two = sonifier().render(&[commit(0, 10, 0), commit(0, 10, 0)]);

        let peak_one = mix::peak(&one);
        let peak_two = mix::peak(&two);
        assert!(
            peak_two > peak_one * 1.5,
            "expected stacked notes to sum: {peak_one} vs {peak_two}"
        );
    }

    #[test]
    fn zero_activity_history_renders_silence() {
        let commits = [commit(0, 0, 0), commit(100, 0, 0)];
        let buffer = sonifier().render(&commits);
        assert!(buffer.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn final_commit_note_is_dropped_not_wrapped() {
        // The latest commit floors to an index one past the buffer, so its
        // note vanishes; everything else must stay inside the mix.
        let commits = [commit(0, 5, 5), commit(1_000, 5, 5)];
        let buffer = sonifier().render(&commits);

        let half = buffer.len() / 2;
        assert!(mix::peak(&buffer[..half]) > 0.0);
        assert_eq!(mix::peak(&buffer[half..]), 0.0);
    }
}
