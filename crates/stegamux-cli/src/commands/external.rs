use std::path::PathBuf;

use clap::Args;
use stegamux_core::media::external;

use crate::CliResult;

/// Stages a message file for a media type that an external tool embeds
#[derive(Args, Debug)]
pub struct PrepareExternalArgs {
    /// Host media file the external tool will embed into, used readonly.
    #[arg(short = 'i', long = "host", value_name = "host file", required = true)]
    pub host: PathBuf,

    /// The staged message file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "message file",
        required = true
    )]
    pub embed_file: PathBuf,

    /// A text message that will be staged for embedding
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,
}

impl PrepareExternalArgs {
    pub fn run(self) -> CliResult<()> {
        let staged = external::prepare_embedding(&self.host, &self.message, &self.embed_file)?;

        println!("Host:       {}", staged.host.display());
        println!("Embed file: {}", staged.embed_file.display());
        println!("Select the host and the embed file in your embedding tool and run it there.");

        Ok(())
    }
}

/// Reads back a message file an external tool extracted
#[derive(Args, Debug)]
pub struct ReadExternalArgs {
    /// The extracted message file
    #[arg(short = 'i', long = "in", value_name = "message file", required = true)]
    pub file: PathBuf,
}

impl ReadExternalArgs {
    pub fn run(self) -> CliResult<()> {
        let message = external::read_back(&self.file)?;
        println!("{message}");

        Ok(())
    }
}
