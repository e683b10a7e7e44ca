//! 16-bit mono PCM WAV encoding.

use std::fs;
use std::path::Path;

use tracing::debug;

/// Write samples as a mono, 16-bit signed PCM WAV file.
///
/// Samples are clamped to [-1.0, 1.0] before scaling: normalization
/// upstream keeps the mix inside the range, but floating-point rounding
/// can still leave a sample marginally above unity. Parent directories
/// are created as needed.
pub fn write_wav(path: &Path, samples: &[f32], sample_rate: u32) -> Result<(), hound::Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec)?;
    for &sample in samples {
        let clamped = sample.clamp(-1.0, 1.0);
        writer.write_sample((clamped * 32_767.0).round() as i16)?;
    }
    writer.finalize()?;

    debug!(path = %path.display(), samples = samples.len(), sample_rate, "wrote wav");
    Ok(())
}
