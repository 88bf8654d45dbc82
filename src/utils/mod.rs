pub mod constants;
pub mod filename;
pub mod progress;
pub mod rounding;

pub use constants::*;
pub use filename::{combined_file_path, year_file_path};
pub use progress::ProgressReporter;
pub use rounding::round_to_tenth;
