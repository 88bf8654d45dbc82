use clap::Parser;

/// Runs the full batch with no arguments; flags only affect console output.
#[derive(Parser, Debug)]
#[command(name = "inmet-synth")]
#[command(about = "Generate synthetic INMET-style daily weather CSV files")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, help = "Hide the progress bar")]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["inmet-synth"]).unwrap();
        assert!(!cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_unknown_argument_rejected() {
        assert!(Cli::try_parse_from(["inmet-synth", "--years", "2020"]).is_err());
    }
}
