//! Event-to-waveform sonification engine.
//!
//! Converts a repository's commit history into a deterministic mono
//! waveform: each commit becomes a short enveloped note whose placement,
//! pitch, and loudness mirror when the commit happened, whether it mostly
//! added or removed lines, and how large it was.

/// Note synthesis, mixing, and the engine configuration surface.
pub mod engine;
/// Derived scalars over an event list.
pub mod span;

pub use engine::{
    frequency_multiplier, ConfigurationError, Sonifier, SonifyConfig, MAX_RENDER_SECONDS,
};
pub use span::EventSpan;
