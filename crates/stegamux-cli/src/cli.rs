use clap::{Parser, Subcommand, ValueEnum};

use stegamux_core::media::audio::AudioMethod;
use stegamux_core::media::image::ImageMethod;
use stegamux_core::media::text::TextMethod;
use stegamux_core::Method;

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Extract(extract::ExtractArgs),
    PrepareExternal(external::PrepareExternalArgs),
    ReadExternal(external::ReadExternalArgs),
}

/// every embedding method the suite knows, spelled `<category>-<scheme>`
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    ImageLsb,
    ImageParity,
    ImageBitPlane,
    AudioLsb,
    AudioParity,
    AudioPhase,
    AudioEcho,
    TextZeroWidth,
    TextParity,
    TextWhitespace,
}

impl From<MethodArg> for Method {
    fn from(value: MethodArg) -> Self {
        match value {
            MethodArg::ImageLsb => Method::Image(ImageMethod::Lsb),
            MethodArg::ImageParity => Method::Image(ImageMethod::Parity),
            MethodArg::ImageBitPlane => Method::Image(ImageMethod::BitPlane),
            MethodArg::AudioLsb => Method::Audio(AudioMethod::Lsb),
            MethodArg::AudioParity => Method::Audio(AudioMethod::Parity),
            MethodArg::AudioPhase => Method::Audio(AudioMethod::Phase),
            MethodArg::AudioEcho => Method::Audio(AudioMethod::Echo),
            MethodArg::TextZeroWidth => Method::Text(TextMethod::ZeroWidth),
            MethodArg::TextParity => Method::Text(TextMethod::Parity),
            MethodArg::TextWhitespace => Method::Text(TextMethod::Whitespace),
        }
    }
}
