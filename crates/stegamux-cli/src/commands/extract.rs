use std::path::PathBuf;

use clap::Args;
use stegamux_core::CodecOptions;

use crate::cli::MethodArg;
use crate::CliResult;

/// Extracts a hidden text message from a carrier media file
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Embedding method the carrier was produced with
    #[arg(long, value_enum, value_name = "method")]
    pub method: MethodArg,

    /// Carrier media file that contains the hidden message
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// Bit plane targeted by the image bit-plane method (0-7)
    #[arg(long, value_name = "plane")]
    pub plane: Option<u8>,

    /// Echo offset in samples used by the audio echo method
    #[arg(long, value_name = "samples")]
    pub echo_delay: Option<usize>,
}

impl ExtractArgs {
    fn options(&self) -> CodecOptions {
        let defaults = CodecOptions::default();
        CodecOptions {
            bit_plane: self.plane.unwrap_or(defaults.bit_plane),
            echo_delay: self.echo_delay.unwrap_or(defaults.echo_delay),
        }
    }

    pub fn run(self) -> CliResult<()> {
        let options = self.options();
        let message =
            stegamux_core::commands::extract(&self.media, &self.method.into(), &options)?;

        if message.is_empty() {
            println!("[no message found]");
        } else {
            println!("{message}");
        }

        Ok(())
    }
}
