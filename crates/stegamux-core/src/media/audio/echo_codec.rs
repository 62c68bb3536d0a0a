//! Echo hiding: payload bits are imprinted as delayed copies of anchor
//! samples, same-signed for a 1 bit and inverted for a 0 bit.
//!
//! Framing here is neither of the two shared schemes: the message bytes plus
//! one NUL byte go out as raw bits without a length header. The delay is
//! configurable; one bit occupies `delay + 2` samples.

use crate::bit_iterator::BitIterator;
use crate::error::StegoError;
use crate::media::audio::require_16_bit;
use crate::media::types::WavAudio;
use crate::result::Result;

fn framed_bits(message: &str) -> Vec<bool> {
    let mut framed = message.as_bytes().to_vec();
    framed.push(0);

    BitIterator::new(&framed).collect()
}

pub fn embed(audio: &mut WavAudio, message: &str, delay: usize) -> Result<()> {
    let (spec, samples) = audio;
    require_16_bit(spec)?;

    let bits = framed_bits(message);
    let step = delay + 2;
    let capacity = samples.len() / step;
    if bits.len() > capacity {
        return Err(StegoError::CapacityError {
            needed: bits.len(),
            available: capacity,
        });
    }

    for (i, bit) in bits.iter().enumerate() {
        let anchor = i * step;
        let echo = anchor + delay;
        if echo >= samples.len() {
            break;
        }
        samples[echo] = if *bit {
            samples[anchor]
        } else {
            samples[anchor].wrapping_neg()
        };
    }

    Ok(())
}

pub fn extract(audio: &WavAudio, delay: usize) -> Result<String> {
    let (spec, samples) = audio;
    require_16_bit(spec)?;

    let step = delay + 2;
    let positions = samples.len() / step;

    let mut bits: Vec<bool> = Vec::with_capacity(positions);
    for i in 0..positions {
        let anchor = i * step;
        let echo = anchor + delay;
        if echo >= samples.len() {
            break;
        }
        let a = samples[anchor];
        let b = samples[echo];

        // a zeroed side leaves the sign undecidable, which reads as 0
        let bit = a != 0 && b != 0 && (a < 0) == (b < 0);
        bits.push(bit);

        if bits.len() >= 8 && bits[bits.len() - 8..].iter().all(|b| !*b) {
            break;
        }
    }

    let mut message = String::new();
    for group in bits.chunks_exact(8) {
        let byte = group
            .iter()
            .fold(0u8, |acc, bit| (acc << 1) | u8::from(*bit));
        if byte == 0 {
            break;
        }
        message.push(char::from(byte));
    }

    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hound::{SampleFormat, WavSpec};

    const DELAY: usize = 120;

    fn spec(bits_per_sample: u16) -> WavSpec {
        WavSpec {
            channels: 1,
            sample_rate: 44_100,
            bits_per_sample,
            sample_format: SampleFormat::Int,
        }
    }

    /// a carrier whose anchors are never zero
    fn loud_carrier(samples: usize) -> WavAudio {
        (
            spec(16),
            (0..samples).map(|i| 1000 + (i % 50) as i16).collect(),
        )
    }

    #[test]
    fn should_round_trip_a_message_through_echo_signs() {
        let mut carrier = loud_carrier((DELAY + 2) * 200);

        embed(&mut carrier, "echo echo", DELAY).unwrap();

        assert_eq!(extract(&carrier, DELAY).unwrap(), "echo echo");
    }

    #[test]
    fn should_round_trip_with_a_custom_delay() {
        let mut carrier = loud_carrier(50 * 120);

        embed(&mut carrier, "short echoes", 48).unwrap();

        assert_eq!(extract(&carrier, 48).unwrap(), "short echoes");
    }

    #[test]
    fn should_reject_a_message_beyond_the_position_capacity() {
        // room for 16 bit positions, "a" frames to 16 bits, "ab" to 24
        let mut carrier = loud_carrier((DELAY + 2) * 16);
        embed(&mut carrier, "a", DELAY).unwrap();

        let mut carrier = loud_carrier((DELAY + 2) * 16);
        match embed(&mut carrier, "ab", DELAY).err() {
            Some(StegoError::CapacityError {
                needed: 24,
                available: 16,
            }) => (),
            other => panic!("expected a capacity error, got {other:?}"),
        }
    }

    #[test]
    fn should_reject_narrow_samples() {
        let mut carrier = (spec(8), vec![0i16; 4096]);

        match embed(&mut carrier, "x", DELAY).err() {
            Some(StegoError::UnsupportedSampleFormat {
                required: 16,
                actual: 8,
            }) => (),
            other => panic!("expected UnsupportedSampleFormat, got {other:?}"),
        }
    }

    #[test]
    fn zero_anchors_always_read_as_zero_bits() {
        // a silent carrier keeps every sign undecidable, so the very first
        // byte scans as the terminator and nothing is decoded
        let carrier = (spec(16), vec![0i16; (DELAY + 2) * 64]);

        assert_eq!(extract(&carrier, DELAY).unwrap(), "");
    }

    #[test]
    fn should_return_the_partial_message_when_no_terminator_shows_up() {
        // flipping every anchor positive and echo negative spells endless 0
        // bits once, then 1s; craft a carrier that decodes to 'a' bits with
        // no NUL afterwards
        let step = DELAY + 2;
        let mut samples = vec![0i16; step * 8];
        let letter = b'a';
        for i in 0..8 {
            let anchor = i * step;
            let echo = anchor + DELAY;
            let bit = (letter >> (7 - i)) & 1 == 1;
            samples[anchor] = 500;
            samples[echo] = if bit { 500 } else { -500 };
        }
        let carrier = (spec(16), samples);

        assert_eq!(extract(&carrier, DELAY).unwrap(), "a");
    }
}
