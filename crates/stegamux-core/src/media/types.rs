use std::fs;
use std::path::Path;

pub use hound::{WavReader, WavSpec, WavWriter};
pub use image::RgbImage;
use log::error;

use crate::error::StegoError;
use crate::result::Result;

use super::Persist;

pub type WavAudio = (WavSpec, Vec<i16>);

/// a media container for steganography
#[derive(Debug)]
pub enum Media {
    Image(RgbImage),
    Audio(WavAudio),
    Text(String),
}

impl Media {
    pub fn from_image(img: RgbImage) -> Self {
        Self::Image(img)
    }

    pub fn from_audio(audio: WavAudio) -> Self {
        Self::Audio(audio)
    }

    pub fn from_text(text: String) -> Self {
        Self::Text(text)
    }

    pub fn from_file(f: &Path) -> Result<Self> {
        if !f.exists() {
            return Err(StegoError::CarrierNotFound(f.to_path_buf()));
        }

        let Some(ext) = f.extension().and_then(|e| e.to_str()) else {
            return Err(StegoError::UnsupportedMedia);
        };

        match ext.to_lowercase().as_str() {
            "png" | "jpg" | "jpeg" => Ok(Self::Image(
                image::open(f)
                    .map_err(|_e| StegoError::InvalidImageMedia)?
                    .to_rgb8(),
            )),
            "wav" => {
                let mut reader = WavReader::open(f).map_err(|_e| StegoError::InvalidAudioMedia)?;
                let spec = reader.spec();
                if spec.sample_format != hound::SampleFormat::Int {
                    return Err(StegoError::InvalidAudioMedia);
                }
                let samples = reader
                    .samples::<i16>()
                    .collect::<std::result::Result<Vec<_>, _>>()
                    .map_err(|_e| StegoError::InvalidAudioMedia)?;

                Ok(Self::Audio((spec, samples)))
            }
            "txt" => {
                let text =
                    fs::read_to_string(f).map_err(|source| StegoError::ReadError { source })?;

                Ok(Self::Text(text))
            }
            _ => Err(StegoError::UnsupportedMedia),
        }
    }
}

impl Persist for Media {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        match self {
            Media::Image(img) => img.save(file).map_err(|e| {
                error!("Error saving image {file:?}: {e}");
                StegoError::ImageEncodingError
            }),
            Media::Audio((spec, samples)) => {
                let mut writer =
                    WavWriter::create(file, *spec).map_err(|_| StegoError::AudioCreationError)?;
                for s in samples.iter() {
                    writer
                        .write_sample(*s)
                        .map_err(|_| StegoError::AudioEncodingError)?;
                }
                writer
                    .finalize()
                    .map_err(|_| StegoError::AudioEncodingError)?;

                Ok(())
            }
            Media::Text(text) => fs::write(file, text).map_err(|e| {
                error!("Error saving text {file:?}: {e}");
                StegoError::WriteError { source: e }
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn should_report_a_missing_carrier_path() {
        let result = Media::from_file(Path::new("no/such/carrier.png"));

        match result.err() {
            Some(StegoError::CarrierNotFound(p)) => {
                assert_eq!(p, Path::new("no/such/carrier.png"))
            }
            other => panic!("expected CarrierNotFound, got {other:?}"),
        }
    }

    #[test]
    fn should_reject_an_unknown_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("carrier.bin");
        fs::write(&path, b"not a carrier").unwrap();

        match Media::from_file(&path).err() {
            Some(StegoError::UnsupportedMedia) => (),
            other => panic!("expected UnsupportedMedia, got {other:?}"),
        }
    }

    #[test]
    fn should_reject_a_broken_image_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("carrier.png");
        fs::write(&path, b"not really a png").unwrap();

        match Media::from_file(&path).err() {
            Some(StegoError::InvalidImageMedia) => (),
            other => panic!("expected InvalidImageMedia, got {other:?}"),
        }
    }

    #[test]
    fn should_load_and_persist_a_text_carrier() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cover.txt");
        let copy = dir.path().join("copy.txt");
        let mut f = fs::File::create(&path).unwrap();
        f.write_all("two lines\nof cover\n".as_bytes()).unwrap();
        drop(f);

        let mut media = Media::from_file(&path).unwrap();
        match &media {
            Media::Text(text) => assert_eq!(text, "two lines\nof cover\n"),
            other => panic!("expected a text media, got {other:?}"),
        }

        media.save_as(&copy).unwrap();
        assert_eq!(fs::read_to_string(&copy).unwrap(), "two lines\nof cover\n");
    }

    #[test]
    fn should_round_trip_an_audio_carrier_through_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("carrier.wav");
        let spec = WavSpec {
            channels: 1,
            sample_rate: 8_000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let samples: Vec<i16> = (0..64).map(|i| i * 100 - 3200).collect();

        let mut media = Media::from_audio((spec, samples.clone()));
        media.save_as(&path).unwrap();

        match Media::from_file(&path).unwrap() {
            Media::Audio((read_spec, read_samples)) => {
                assert_eq!(read_spec, spec);
                assert_eq!(read_samples, samples);
            }
            other => panic!("expected an audio media, got {other:?}"),
        }
    }
}
