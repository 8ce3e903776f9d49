use anyhow::Result;
use block_icon_gen::icon_gen::{self, Options, Outcome, PngSupport};
use clap::Parser;
use std::{io, path::PathBuf, process::ExitCode};

#[derive(Debug, Parser)]
#[clap(
    name = "block-icon-gen",
    about = "Generate the 16, 48 and 128 px placeholder icons of the content blocker extension"
)]
struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// Also write icons.json, the icon section of the extension manifest
    #[clap(long)]
    manifest: bool,
}

// Returned when the build cannot encode PNG and only guidance was printed
const EXIT_MISSING_CAPABILITY: u8 = 2;

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let options = Options {
        output: args.output,
        manifest: args.manifest,
    };

    let mut status = io::stdout().lock();
    match icon_gen::generate_icons(&options, PngSupport::detect(), &mut status)? {
        Outcome::Generated(_) => Ok(ExitCode::SUCCESS),
        Outcome::Skipped(_) => Ok(ExitCode::from(EXIT_MISSING_CAPABILITY)),
    }
}
