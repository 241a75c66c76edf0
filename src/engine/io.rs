//! Audio file loading for mse-eval
//!
//! Reads WAV files into mono `f32` buffers at the target sample rate.
//! Multi-channel files keep their first channel only. Sample rate conversion
//! uses linear interpolation.

use std::path::Path;

use hound::{SampleFormat, WavReader};
use log::{debug, warn};

use crate::engine::buffer::MonoBuffer;
use crate::error::{EvalError, Result};

/// Load a WAV file as a mono buffer at `target_rate`
///
/// Reads the file, converts samples to 32-bit float, keeps the first channel
/// and resamples to `target_rate` if the file was recorded at another rate.
///
/// # Arguments
/// * `path` - Path to the WAV file to load
/// * `target_rate` - Sample rate of the returned buffer
///
/// # Errors
/// * `FileNotFound` - If the file does not exist
/// * `Decode` - If `hound` cannot open or decode the file
/// * `UnsupportedFormat` - If the bit depth or channel count is not readable
pub fn load_mono(path: &Path, target_rate: u32) -> Result<MonoBuffer> {
    if !path.exists() {
        return Err(EvalError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let reader = WavReader::open(path).map_err(|source| EvalError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let spec = reader.spec();
    let source_rate = spec.sample_rate;
    let channels = spec.channels as usize;

    if channels == 0 || source_rate == 0 {
        return Err(EvalError::UnsupportedFormat {
            format: format!("{}-channel audio at {} Hz", channels, source_rate),
        });
    }

    let interleaved = read_samples_as_f32(reader, spec.bits_per_sample, spec.sample_format)
        .map_err(|err| match err {
            DecodeFailure::Hound(source) => EvalError::Decode {
                path: path.to_path_buf(),
                source,
            },
            DecodeFailure::Unsupported(format) => EvalError::UnsupportedFormat { format },
        })?;

    debug!(
        "Decoded {}: {} Hz, {} channel(s), {} samples",
        path.display(),
        source_rate,
        channels,
        interleaved.len()
    );

    let mono = first_channel(interleaved, channels);

    let samples = if source_rate != target_rate {
        warn!(
            "Sample rate mismatch in {}: resampling from {} to {}",
            path.display(),
            source_rate,
            target_rate
        );
        resample_linear(&mono, source_rate, target_rate)
    } else {
        mono
    };

    Ok(MonoBuffer::new(samples, target_rate))
}

// ============================================================================
// Internal helper functions
// ============================================================================

/// Why reading samples failed, before the path is attached
enum DecodeFailure {
    Hound(hound::Error),
    Unsupported(String),
}

/// Read samples from WAV reader and convert to f32
fn read_samples_as_f32<R: std::io::Read>(
    mut reader: WavReader<R>,
    bits_per_sample: u16,
    sample_format: SampleFormat,
) -> std::result::Result<Vec<f32>, DecodeFailure> {
    let samples = match sample_format {
        SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<std::result::Result<Vec<_>, _>>(),
        SampleFormat::Int => {
            let scale = match bits_per_sample {
                8 => 128.0,
                16 => 32768.0,
                24 => 8388608.0,
                32 => 2147483648.0,
                _ => {
                    return Err(DecodeFailure::Unsupported(format!(
                        "{}-bit integer audio",
                        bits_per_sample
                    )))
                }
            };
            // hound widens every integer depth into i32
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| (v as f64 / scale) as f32))
                .collect::<std::result::Result<Vec<_>, _>>()
        }
    };

    samples.map_err(DecodeFailure::Hound)
}

/// Keep frame-wise sample 0 of interleaved data, dropping any partial frame
fn first_channel(interleaved: Vec<f32>, channels: usize) -> Vec<f32> {
    if channels == 1 {
        return interleaved;
    }

    let frames = interleaved.len() / channels;
    interleaved
        .into_iter()
        .step_by(channels)
        .take(frames)
        .collect()
}

/// Linear interpolation from `source_rate` to `target_rate`
///
/// The output holds `ceil(len * target_rate / source_rate)` samples. A
/// position landing on the last input sample copies it; positions past the
/// end of the input are `0.0`.
fn resample_linear(samples: &[f32], source_rate: u32, target_rate: u32) -> Vec<f32> {
    if samples.is_empty() {
        return Vec::new();
    }

    // Input samples advanced per output sample
    let step = source_rate as f64 / target_rate as f64;
    let target_len = (samples.len() as f64 / step).ceil() as usize;

    (0..target_len)
        .map(|n| {
            let pos = n as f64 * step;
            let idx = pos.floor() as usize;
            let frac = (pos - idx as f64) as f32;

            match (samples.get(idx), samples.get(idx + 1)) {
                (Some(&a), Some(&b)) => a + (b - a) * frac,
                (Some(&a), None) => a,
                _ => 0.0,
            }
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::buffer::TARGET_SAMPLE_RATE;
    use hound::{WavSpec, WavWriter};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;
    use test_case::test_case;

    fn write_float_wav(path: &Path, channels: u16, sample_rate: u32, interleaved: &[f32]) {
        let spec = WavSpec {
            channels,
            sample_rate,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        };
        let mut writer = WavWriter::create(path, spec).unwrap();
        for &sample in interleaved {
            writer.write_sample(sample).unwrap();
        }
        writer.finalize().unwrap();
    }

    /// Mono WAVE_FORMAT_EXTENSIBLE PCM, for headers hound's writer refuses
    fn write_extensible_pcm(
        path: &Path,
        sample_rate: u32,
        container_bits: u16,
        valid_bits: u16,
        data: &[u8],
    ) {
        const SUBTYPE_PCM: [u8; 16] = [
            0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x80, 0x00, 0x00, 0xaa, 0x00, 0x38,
            0x9b, 0x71,
        ];
        let block_align = container_bits / 8;

        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"RIFF");
        bytes.extend_from_slice(&(4 + 8 + 40 + 8 + data.len() as u32).to_le_bytes());
        bytes.extend_from_slice(b"WAVE");
        bytes.extend_from_slice(b"fmt ");
        bytes.extend_from_slice(&40u32.to_le_bytes());
        bytes.extend_from_slice(&0xfffeu16.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes());
        bytes.extend_from_slice(&sample_rate.to_le_bytes());
        bytes.extend_from_slice(&(sample_rate * block_align as u32).to_le_bytes());
        bytes.extend_from_slice(&block_align.to_le_bytes());
        bytes.extend_from_slice(&container_bits.to_le_bytes());
        bytes.extend_from_slice(&22u16.to_le_bytes());
        bytes.extend_from_slice(&valid_bits.to_le_bytes());
        bytes.extend_from_slice(&4u32.to_le_bytes());
        bytes.extend_from_slice(&SUBTYPE_PCM);
        bytes.extend_from_slice(b"data");
        bytes.extend_from_slice(&(data.len() as u32).to_le_bytes());
        bytes.extend_from_slice(data);

        fs::write(path, bytes).unwrap();
    }

    #[test]
    fn test_load_at_target_rate_is_identity() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mono.wav");
        let raw = vec![0.0, 0.25, -0.5, 0.75, -1.0];
        write_float_wav(&path, 1, TARGET_SAMPLE_RATE, &raw);

        let buffer = load_mono(&path, TARGET_SAMPLE_RATE).unwrap();

        assert_eq!(buffer.sample_rate(), TARGET_SAMPLE_RATE);
        assert_eq!(buffer.samples(), raw.as_slice());
    }

    #[test]
    fn test_load_stereo_keeps_first_channel() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stereo.wav");
        write_float_wav(
            &path,
            2,
            TARGET_SAMPLE_RATE,
            &[0.1, 0.9, 0.2, 0.8, 0.3, 0.7],
        );

        let buffer = load_mono(&path, TARGET_SAMPLE_RATE).unwrap();

        assert_eq!(buffer.samples(), &[0.1f32, 0.2, 0.3][..]);
    }

    #[test_case(8, &[0, 64, -128], &[0.0, 0.5, -1.0] ; "eight bit")]
    #[test_case(16, &[0, 16384, -32768], &[0.0, 0.5, -1.0] ; "sixteen bit")]
    #[test_case(24, &[0, 4194304, -8388608], &[0.0, 0.5, -1.0] ; "twenty four bit")]
    #[test_case(32, &[0, 1 << 30, i32::MIN], &[0.0, 0.5, -1.0] ; "thirty two bit")]
    fn test_load_int_pcm_is_normalised(bits: u16, raw: &[i32], expected: &[f32]) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pcm.wav");
        let spec = WavSpec {
            channels: 1,
            sample_rate: TARGET_SAMPLE_RATE,
            bits_per_sample: bits,
            sample_format: SampleFormat::Int,
        };
        let mut writer = WavWriter::create(&path, spec).unwrap();
        for &v in raw {
            writer.write_sample(v).unwrap();
        }
        writer.finalize().unwrap();

        let buffer = load_mono(&path, TARGET_SAMPLE_RATE).unwrap();

        assert_eq!(buffer.samples(), expected);
    }

    #[test]
    fn test_load_12bit_is_unsupported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pcm12.wav");
        write_extensible_pcm(&path, TARGET_SAMPLE_RATE, 16, 12, &[0, 0, 0x10, 0]);

        match load_mono(&path, TARGET_SAMPLE_RATE).unwrap_err() {
            EvalError::UnsupportedFormat { format } => assert!(format.contains("12-bit")),
            other => panic!("Expected UnsupportedFormat error, got: {:?}", other),
        }
    }

    #[test]
    fn test_load_zero_sample_rate_is_unsupported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("zero_rate.wav");
        write_extensible_pcm(&path, 0, 16, 16, &[0, 0, 0, 0]);

        match load_mono(&path, TARGET_SAMPLE_RATE).unwrap_err() {
            EvalError::UnsupportedFormat { format } => assert!(format.contains("0 Hz")),
            other => panic!("Expected UnsupportedFormat error, got: {:?}", other),
        }
    }

    #[test]
    fn test_load_resamples_to_target_rate() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("48k.wav");
        write_float_wav(&path, 1, 48000, &vec![0.5; 4800]);

        let buffer = load_mono(&path, TARGET_SAMPLE_RATE).unwrap();

        assert_eq!(buffer.sample_rate(), TARGET_SAMPLE_RATE);
        assert!((4410..=4411).contains(&buffer.len()));
        assert!(buffer.samples()[..4400]
            .iter()
            .all(|&s| (s - 0.5).abs() < 1e-6));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = load_mono(Path::new("/nonexistent/path/TARGET.wav"), TARGET_SAMPLE_RATE);

        match result.unwrap_err() {
            EvalError::FileNotFound { path } => {
                assert_eq!(path, PathBuf::from("/nonexistent/path/TARGET.wav"));
            }
            other => panic!("Expected FileNotFound error, got: {:?}", other),
        }
    }

    #[test]
    fn test_load_garbage_propagates_decode_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("garbage.wav");
        fs::write(&path, b"definitely not a riff header").unwrap();

        match load_mono(&path, TARGET_SAMPLE_RATE).unwrap_err() {
            EvalError::Decode { path: p, .. } => assert_eq!(p, path),
            other => panic!("Expected Decode error, got: {:?}", other),
        }
    }

    #[test]
    fn test_first_channel_drops_partial_frame() {
        let interleaved = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(first_channel(interleaved, 2), vec![1.0f32, 3.0]);
    }

    #[test]
    fn test_resample_linear_upsample() {
        let samples = vec![0.0, 1.0, 0.0];
        let resampled = resample_linear(&samples, 22050, 44100);

        assert_eq!(resampled.len(), 6);
        // At index 1 (src pos 0.5), should be 0.5
        assert!((resampled[1] - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_resample_linear_downsample() {
        let samples = vec![0.0, 0.5, 1.0, 0.5, 0.0, -0.5, -1.0, -0.5];
        let resampled = resample_linear(&samples, 88200, 44100);

        assert_eq!(resampled, vec![0.0f32, 1.0, 0.0, -1.0]);
    }
}
