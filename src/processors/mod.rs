pub mod batch_driver;
pub mod series_generator;

pub use batch_driver::{BatchDriver, BatchSummary, CombinedOutput, YearOutput};
pub use series_generator::SeriesGenerator;
