//! Audio codec over PCM sample buffers read from WAV files.
//!
//! The byte level methods (LSB, Parity) reuse the universal codec over the
//! raw frame byte stream and work for any integer sample width. Phase coding
//! and echo hiding interpret the 16-bit waveform itself and live in their own
//! submodules.

pub mod echo_codec;
pub mod pcm;
pub mod phase_codec;

use hound::WavSpec;

use crate::error::StegoError;
use crate::media::codec_options::CodecOptions;
use crate::media::types::WavAudio;
use crate::payload;
use crate::result::Result;
use crate::universal_decoder::{OneBitUnveil, ParityBitUnveil, UniversalDecoder, UnveilAlgorithms};
use crate::universal_encoder::{HideAlgorithms, OneBitHide, ParityBitHide, UniversalEncoder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioMethod {
    /// overwrite the least significant bit of every frame byte
    Lsb,
    /// adjust the popcount parity of every frame byte
    Parity,
    /// imprint bits onto the phase angles of the spectrum
    Phase,
    /// imprint bits as same-sign or inverted echoes of anchor samples
    Echo,
}

pub(crate) fn require_16_bit(spec: &WavSpec) -> Result<()> {
    if spec.bits_per_sample != 16 {
        return Err(StegoError::UnsupportedSampleFormat {
            required: 16,
            actual: spec.bits_per_sample,
        });
    }
    Ok(())
}

/// Embeds a message into the sample buffer, dispatching per method.
///
/// Phase coding collapses the carrier to mono 16-bit; the other methods
/// preserve the original channel layout and sample width.
pub fn embed_message(
    audio: &mut WavAudio,
    message: &str,
    method: &AudioMethod,
    opts: &CodecOptions,
) -> Result<()> {
    match method {
        AudioMethod::Lsb => embed_in_frame_bytes(audio, message, OneBitHide.into()),
        AudioMethod::Parity => embed_in_frame_bytes(audio, message, ParityBitHide.into()),
        AudioMethod::Phase => phase_codec::embed(audio, message),
        AudioMethod::Echo => echo_codec::embed(audio, message, opts.echo_delay),
    }
}

/// Reads a message back out of the sample buffer, dispatching per method.
pub fn extract_message(
    audio: &WavAudio,
    method: &AudioMethod,
    opts: &CodecOptions,
) -> Result<String> {
    match method {
        AudioMethod::Lsb => Ok(extract_from_frame_bytes(audio, OneBitUnveil.into())),
        AudioMethod::Parity => Ok(extract_from_frame_bytes(audio, ParityBitUnveil.into())),
        AudioMethod::Phase => phase_codec::extract(audio),
        AudioMethod::Echo => echo_codec::extract(audio, opts.echo_delay),
    }
}

fn embed_in_frame_bytes(
    audio: &mut WavAudio,
    message: &str,
    algorithm: HideAlgorithms,
) -> Result<()> {
    let (spec, samples) = audio;
    let mut bytes = pcm::frame_bytes(spec, samples);
    let bits = payload::header::encode(message);

    UniversalEncoder::new(&mut bytes, algorithm).embed(&bits)?;
    *samples = pcm::samples_from_frame_bytes(spec, &bytes);

    Ok(())
}

fn extract_from_frame_bytes(audio: &WavAudio, algorithm: UnveilAlgorithms) -> String {
    let (spec, samples) = audio;
    let bytes = pcm::frame_bytes(spec, samples);
    let decoder = UniversalDecoder::new(&bytes, algorithm);

    payload::header::decode(decoder.bits())
}
