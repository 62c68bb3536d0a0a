//! Raw frame byte view of a PCM sample buffer.
//!
//! The byte level methods treat the carrier exactly as it sits in the WAV
//! data chunk: 16-bit samples as two little-endian bytes each, 8-bit samples
//! as one byte each, channels interleaved.

use hound::WavSpec;

fn wide_samples(spec: &WavSpec) -> bool {
    spec.bits_per_sample > 8
}

/// flattens samples into the little-endian frame byte stream of the carrier
pub fn frame_bytes(spec: &WavSpec, samples: &[i16]) -> Vec<u8> {
    if wide_samples(spec) {
        samples.iter().flat_map(|s| s.to_le_bytes()).collect()
    } else {
        samples.iter().map(|s| *s as u8).collect()
    }
}

/// folds a frame byte stream back into samples
pub fn samples_from_frame_bytes(spec: &WavSpec, bytes: &[u8]) -> Vec<i16> {
    if wide_samples(spec) {
        bytes
            .chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
            .collect()
    } else {
        bytes.iter().map(|b| i16::from(*b as i8)).collect()
    }
}

/// averages all channels of each frame into a single mono channel
pub fn collapse_channels(spec: &WavSpec, samples: &[i16]) -> Vec<i16> {
    let channels = usize::from(spec.channels.max(1));
    if channels == 1 {
        return samples.to_vec();
    }

    samples
        .chunks(channels)
        .map(|frame| {
            let sum: i32 = frame.iter().map(|s| i32::from(*s)).sum();
            (sum / frame.len() as i32) as i16
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hound::SampleFormat;

    fn spec(channels: u16, bits_per_sample: u16) -> WavSpec {
        WavSpec {
            channels,
            sample_rate: 44_100,
            bits_per_sample,
            sample_format: SampleFormat::Int,
        }
    }

    #[test]
    fn should_view_16_bit_samples_as_little_endian_byte_pairs() {
        let samples = [0x0102i16, -2];

        let bytes = frame_bytes(&spec(1, 16), &samples);

        assert_eq!(bytes, vec![0x02, 0x01, 0xFE, 0xFF]);
        assert_eq!(samples_from_frame_bytes(&spec(1, 16), &bytes), samples);
    }

    #[test]
    fn should_view_8_bit_samples_as_single_bytes() {
        let samples = [1i16, -1, 127, -128];

        let bytes = frame_bytes(&spec(1, 8), &samples);

        assert_eq!(bytes, vec![0x01, 0xFF, 0x7F, 0x80]);
        assert_eq!(samples_from_frame_bytes(&spec(1, 8), &bytes), samples);
    }

    #[test]
    fn should_average_interleaved_channels_per_frame() {
        let samples = [100i16, 200, -3, -4, 7, 7];

        let mono = collapse_channels(&spec(2, 16), &samples);

        // integer division truncates toward zero
        assert_eq!(mono, vec![150, -3, 7]);
    }

    #[test]
    fn should_pass_mono_through_unchanged() {
        let samples = [5i16, -5, 0];

        assert_eq!(collapse_channels(&spec(1, 16), &samples), samples.to_vec());
    }
}
