//! Image codec over the flat RGB byte buffer of a carrier picture.
//!
//! The carrier unit is a single color channel byte in row-major,
//! channel-interleaved order, so a `width x height` image holds
//! `width * height * 3` payload bits. All methods are header framed.

use image::RgbImage;

use crate::error::StegoError;
use crate::media::codec_options::CodecOptions;
use crate::payload;
use crate::result::Result;
use crate::universal_decoder::{
    BitPlaneUnveil, OneBitUnveil, ParityBitUnveil, UniversalDecoder, UnveilAlgorithms,
};
use crate::universal_encoder::{
    BitPlaneHide, HideAlgorithms, OneBitHide, ParityBitHide, UniversalEncoder,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageMethod {
    /// overwrite the least significant bit of every channel byte
    Lsb,
    /// adjust the popcount parity of every channel byte
    Parity,
    /// set or clear one configurable bit plane of every channel byte
    BitPlane,
}

fn validated_plane(opts: &CodecOptions) -> Result<u8> {
    if opts.bit_plane > 7 {
        return Err(StegoError::InvalidBitPlane(opts.bit_plane));
    }
    Ok(opts.bit_plane)
}

fn hide_algorithm(method: &ImageMethod, opts: &CodecOptions) -> Result<HideAlgorithms> {
    Ok(match method {
        ImageMethod::Lsb => OneBitHide.into(),
        ImageMethod::Parity => ParityBitHide.into(),
        ImageMethod::BitPlane => BitPlaneHide::new(validated_plane(opts)?).into(),
    })
}

fn unveil_algorithm(method: &ImageMethod, opts: &CodecOptions) -> Result<UnveilAlgorithms> {
    Ok(match method {
        ImageMethod::Lsb => OneBitUnveil.into(),
        ImageMethod::Parity => ParityBitUnveil.into(),
        ImageMethod::BitPlane => BitPlaneUnveil::new(validated_plane(opts)?).into(),
    })
}

/// Embeds a header framed message into the pixel bytes of `image`.
///
/// A message that does not fit leaves the image untouched and reports a
/// capacity error.
pub fn embed_message(
    image: &mut RgbImage,
    message: &str,
    method: &ImageMethod,
    opts: &CodecOptions,
) -> Result<()> {
    let algorithm = hide_algorithm(method, opts)?;
    let bits = payload::header::encode(message);
    let units: &mut [u8] = image;

    UniversalEncoder::new(units, algorithm).embed(&bits)
}

/// Reads a header framed message back out of the pixel bytes of `image`.
///
/// A carrier without an embedded message yields the empty string.
pub fn extract_message(
    image: &RgbImage,
    method: &ImageMethod,
    opts: &CodecOptions,
) -> Result<String> {
    let algorithm = unveil_algorithm(method, opts)?;
    let units: &[u8] = image;
    let decoder = UniversalDecoder::new(units, algorithm);

    Ok(payload::header::decode(decoder.bits()))
}
