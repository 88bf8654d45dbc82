use clap::Parser;
use inmet_synth::cli::{run, Cli};
use inmet_synth::error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
