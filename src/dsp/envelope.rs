/*
Note Envelope
=============

This module shapes the amplitude of a single note over its lifetime using a
linear ADSR (attack / decay / sustain / release) curve.

Vocabulary
----------

  amplitude   The envelope's output value (0.0 to 1.0). This multiplies the
              raw oscillator signal to control its loudness over time.

  t           Elapsed time within the note, in seconds, starting at 0.0.

  duration    Total length of the note, in seconds. Known when the note is
              created, so every phase boundary can be computed up front.

  phase       Which segment of the curve `t` falls in. Unlike a gate-driven
              synthesizer envelope there is no note-off signal here: notes
              have a fixed duration, so the phase is a pure function of `t`.


The Shape: Linear Ramps
-----------------------

  Amplitude
    1.0 ┐     ╱╲
        │    ╱  ╲___________
    S   │   ╱               ╲
        │  ╱                 ╲
    0.0 └─╱───────────────────╲──→ t
        Attack Decay  Sustain  Release
         (A)   (D)      (S)      (R)

Phase boundaries scale with the note but are capped so long notes keep a
snappy onset:

    attack_time  = min(10 ms, 10% of duration)
    decay_time   = min(20 ms, 20% of duration)
    release_time = min(50 ms, 30% of duration)
    sustain      = 0.7

The curve is continuous: each ramp ends exactly where the next segment
starts, and the value is exactly 0.0 at both t = 0 and t = duration. For
very short notes the sustain plateau shrinks until the decay ramp and the
release ramp directly abut; the per-phase formulas still hold, so this
needs no special casing.
*/

/// Longest attack ramp, in seconds.
const MAX_ATTACK: f32 = 0.01;
/// Longest decay ramp, in seconds.
const MAX_DECAY: f32 = 0.02;
/// Longest release ramp, in seconds.
const MAX_RELEASE: f32 = 0.05;
/// Plateau level held between decay and release.
const SUSTAIN_LEVEL: f32 = 0.7;

/// Amplitude envelope for a note of fixed duration.
///
/// All phase boundaries are derived from the duration at construction;
/// evaluation carries no mutable state, so one envelope can shape any
/// number of notes of the same length.
#[derive(Debug, Clone, Copy)]
pub struct NoteEnvelope {
    duration: f32,
    attack_time: f32,
    decay_time: f32,
    release_time: f32,
}

impl NoteEnvelope {
    /// Build the envelope for a note lasting `duration` seconds.
    pub fn new(duration: f32) -> Self {
        debug_assert!(duration > 0.0, "note duration must be positive");

        Self {
            duration,
            attack_time: MAX_ATTACK.min(duration * 0.1),
            decay_time: MAX_DECAY.min(duration * 0.2),
            release_time: MAX_RELEASE.min(duration * 0.3),
        }
    }

    /// Envelope value at elapsed time `t` seconds into the note.
    #[inline]
    pub fn amplitude(&self, t: f32) -> f32 {
        if t < self.attack_time {
            // Attack: 0 -> 1
            t / self.attack_time
        } else if t < self.attack_time + self.decay_time {
            // Decay: 1 -> sustain
            let progress = (t - self.attack_time) / self.decay_time;
            1.0 - (1.0 - SUSTAIN_LEVEL) * progress
        } else if t < self.duration - self.release_time {
            // Sustain: hold
            SUSTAIN_LEVEL
        } else {
            // Release: sustain -> 0
            let progress = (t - (self.duration - self.release_time)) / self.release_time;
            (SUSTAIN_LEVEL * (1.0 - progress)).max(0.0)
        }
    }

    /// Shape a rendered note in place, multiplying each sample by the
    /// envelope value at that sample's elapsed time.
    pub fn apply(&self, buffer: &mut [f32], sample_rate: f32) {
        for (i, sample) in buffer.iter_mut().enumerate() {
            *sample *= self.amplitude(i as f32 / sample_rate);
        }
    }
}
