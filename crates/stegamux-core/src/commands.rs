//! File based entry points: load a carrier, run one codec over it, persist
//! the result. The shell (CLI or any other frontend) only ever talks to this
//! layer.

use std::path::Path;

use log::debug;

use crate::media::audio::AudioMethod;
use crate::media::image::ImageMethod;
use crate::media::text::TextMethod;
use crate::media::types::Media;
use crate::media::{audio, image, text, CodecOptions, Persist};
use crate::result::Result;
use crate::StegoError;

/// one embedding method, scoped to the media category it applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Image(ImageMethod),
    Audio(AudioMethod),
    Text(TextMethod),
}

/// Embeds `message` into the carrier at `carrier_path` and writes the
/// modified media to `output_path`.
///
/// The input file is never touched; the output is only written after the
/// whole bit sequence found its place, so a capacity error leaves no partial
/// artifact behind. A method applied to the wrong media category is an
/// `UnsupportedMedia` error.
pub fn hide(
    carrier_path: &Path,
    output_path: &Path,
    message: &str,
    method: &Method,
    opts: &CodecOptions,
) -> Result<()> {
    let mut media = Media::from_file(carrier_path)?;

    match (&mut media, method) {
        (Media::Image(img), Method::Image(m)) => image::embed_message(img, message, m, opts)?,
        (Media::Audio(wav), Method::Audio(m)) => audio::embed_message(wav, message, m, opts)?,
        (Media::Text(cover), Method::Text(m)) => {
            let hidden = text::embed_message(cover.as_str(), message, m)?;
            *cover = hidden;
        }
        _ => return Err(StegoError::UnsupportedMedia),
    }
    debug!("embedded {} message bytes via {method:?}", message.len());

    media.save_as(output_path)
}

/// Reads a message back out of the carrier at `carrier_path`.
///
/// A carrier without an embedded message yields `Ok("")`; only a missing
/// file, an unreadable carrier or a wrong-format carrier is an error.
pub fn extract(carrier_path: &Path, method: &Method, opts: &CodecOptions) -> Result<String> {
    let media = Media::from_file(carrier_path)?;

    match (&media, method) {
        (Media::Image(img), Method::Image(m)) => image::extract_message(img, m, opts),
        (Media::Audio(wav), Method::Audio(m)) => audio::extract_message(wav, m, opts),
        (Media::Text(cover), Method::Text(m)) => Ok(text::extract_message(cover, m)),
        _ => Err(StegoError::UnsupportedMedia),
    }
}
