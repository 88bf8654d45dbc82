use crate::cli::args::Cli;
use crate::config::BatchConfig;
use crate::error::Result;
use crate::processors::BatchDriver;
use crate::utils::progress::ProgressReporter;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, Level};

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    let config = BatchConfig::default();
    debug!(?config, "Batch configuration");

    let driver = BatchDriver::new(config)?;
    let mut rng = ChaCha8Rng::seed_from_u64(driver.config().seed);

    // One tick per year file plus the combined file
    let total = driver.config().year_count() as u64 + 1;
    let progress = ProgressReporter::new(total, "Generating sample data...", cli.quiet);

    let summary = driver.run(&mut rng, Some(&progress))?;
    progress.finish_with_message(&format!("Wrote {} files", summary.files_written()));

    debug!("\n{}", summary.summary());
    progress.println("Sample weather data generation completed!");

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    // Ignore a second initialisation (e.g. when run from tests)
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
