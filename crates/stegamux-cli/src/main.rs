use clap::Parser;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = stegamux_core::Result<T>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    match args.command {
        Commands::Hide(args) => args.run(),
        Commands::Extract(args) => args.run(),
        Commands::PrepareExternal(args) => args.run(),
        Commands::ReadExternal(args) => args.run(),
    }
}
