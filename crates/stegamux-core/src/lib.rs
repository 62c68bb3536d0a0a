//! # Stegamux Core API
//!
//! A multi-carrier steganography library. A text message is framed into a bit
//! sequence and spread over the low-order information of a host medium, then
//! recovered losslessly from the modified carrier. Three carrier families are
//! supported, each with its own set of embedding methods:
//!
//! - images via [`media::image`] (LSB, Parity, BitPlane over RGB pixel bytes)
//! - WAV audio via [`media::audio`] (LSB, Parity over the raw frame bytes,
//!   Phase coding over the spectrum, Echo hiding over the waveform)
//! - plain text via [`media::text`] (zero-width markers, whitespace parity,
//!   trailing whitespace)
//!
//! File based workflows go through [`commands::hide`] and
//! [`commands::extract`]; the codecs themselves are pure functions over
//! in-memory carrier buffers.
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image
//!
//! ```rust
//! use stegamux_core::media::image::{embed_message, extract_message, ImageMethod};
//! use stegamux_core::media::RgbImage;
//! use stegamux_core::CodecOptions;
//!
//! let mut image = RgbImage::new(32, 32);
//!
//! embed_message(
//!     &mut image,
//!     "Hello, World!",
//!     &ImageMethod::Lsb,
//!     &CodecOptions::default(),
//! )
//! .expect("Failed to hide message in image");
//!
//! let message = extract_message(&image, &ImageMethod::Lsb, &CodecOptions::default())
//!     .expect("Failed to unveil message from image");
//! assert_eq!(message, "Hello, World!");
//! ```
//!
//! ## Hide a message inside an audio clip
//!
//! ```rust
//! use stegamux_core::media::audio::{embed_message, extract_message, AudioMethod};
//! use stegamux_core::media::WavSpec;
//! use stegamux_core::CodecOptions;
//!
//! let spec = WavSpec {
//!     channels: 1,
//!     sample_rate: 44_100,
//!     bits_per_sample: 16,
//!     sample_format: hound::SampleFormat::Int,
//! };
//! let mut audio = (spec, vec![0i16; 1024]);
//!
//! embed_message(
//!     &mut audio,
//!     "Hello, World!",
//!     &AudioMethod::Lsb,
//!     &CodecOptions::default(),
//! )
//! .expect("Failed to hide message in audio");
//!
//! let message = extract_message(&audio, &AudioMethod::Lsb, &CodecOptions::default())
//!     .expect("Failed to unveil message from audio");
//! assert_eq!(message, "Hello, World!");
//! ```

#![warn(clippy::redundant_else)]

pub mod bit_iterator;
pub use bit_iterator::BitIterator;

pub mod commands;
pub mod error;
pub mod media;
pub mod payload;
pub mod result;
pub mod universal_decoder;
pub mod universal_encoder;

pub use crate::commands::Method;
pub use crate::error::StegoError;
pub use crate::media::codec_options::CodecOptions;
pub use crate::media::types::Media;
pub use crate::result::Result;
