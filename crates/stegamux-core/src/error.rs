use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StegoError {
    /// Represents a carrier path that does not exist on disk
    #[error("Carrier file was not found: {}", .0.display())]
    CarrierNotFound(PathBuf),

    /// Represents an unsupported carrier media, or a method applied to the wrong media category
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents an invalid carrier audio media. For example, a broken or float WAV file
    #[error("Audio media is invalid")]
    InvalidAudioMedia,

    /// Represents a sample width the selected method cannot work with
    #[error("Method requires {required}-bit PCM samples, carrier has {actual}-bit")]
    UnsupportedSampleFormat { required: u16, actual: u16 },

    /// Represents a bit plane index outside of the byte range
    #[error("Bit plane {0} is out of range, must be within 0..=7")]
    InvalidBitPlane(u8),

    /// Represents a framed message that does not fit into the carrier
    #[error("Capacity error: the carrier holds {available} units, the framed message needs {needed}")]
    CapacityError { needed: usize, available: usize },

    /// Represents a failure to read from input.
    #[error("Read error")]
    ReadError { source: std::io::Error },

    /// Represents a failure to write the target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when creating an audio file.
    #[error("Audio creation error")]
    AudioCreationError,

    /// Represents a failure when encoding an audio file.
    #[error("Audio encoding error")]
    AudioEncodingError,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}
