use std::path::PathBuf;

use clap::Args;
use log::info;
use stegamux_core::CodecOptions;

use crate::cli::MethodArg;
use crate::CliResult;

/// Hides a text message in PNG images, WAV audio files and text covers
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Embedding method to use
    #[arg(long, value_enum, value_name = "method")]
    pub method: MethodArg,

    /// Media file such as a PNG image, WAV audio file or text cover, used readonly.
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// Final carrier will be stored as file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output media file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// A text message that will be hidden
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,

    /// Bit plane targeted by the image bit-plane method (0-7)
    #[arg(long, value_name = "plane")]
    pub plane: Option<u8>,

    /// Echo offset in samples used by the audio echo method
    #[arg(long, value_name = "samples")]
    pub echo_delay: Option<usize>,
}

impl HideArgs {
    fn options(&self) -> CodecOptions {
        let defaults = CodecOptions::default();
        CodecOptions {
            bit_plane: self.plane.unwrap_or(defaults.bit_plane),
            echo_delay: self.echo_delay.unwrap_or(defaults.echo_delay),
        }
    }

    pub fn run(self) -> CliResult<()> {
        let options = self.options();
        stegamux_core::commands::hide(
            &self.media,
            &self.write_to_file,
            &self.message,
            &self.method.into(),
            &options,
        )?;

        info!("carrier written to {}", self.write_to_file.display());
        println!("Hidden message saved to {}", self.write_to_file.display());

        Ok(())
    }
}
