use crate::error::{GenerationError, Result};
use crate::models::DailyObservation;
use crate::writers::csv_writer::COLUMNS;
use csv::ReaderBuilder;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub struct SeriesReader {
    check_header: bool,
}

impl SeriesReader {
    pub fn new() -> Self {
        Self { check_header: true }
    }

    /// Accept files whose header differs from the INMET column list
    pub fn lenient() -> Self {
        Self {
            check_header: false,
        }
    }

    /// Read every observation of a year or combined file, in file order
    pub fn read_observations(&self, path: &Path) -> Result<Vec<DailyObservation>> {
        let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;

        if self.check_header {
            let headers = reader.headers()?;
            if !headers.iter().eq(COLUMNS.iter().copied()) {
                return Err(GenerationError::InvalidFormat(format!(
                    "Unexpected header in '{}': {}",
                    path.display(),
                    headers.iter().collect::<Vec<_>>().join(",")
                )));
            }
        }

        let mut observations = Vec::new();
        for result in reader.deserialize() {
            let observation: DailyObservation = result?;
            observations.push(observation);
        }

        debug!(path = %path.display(), rows = observations.len(), "Read CSV file");
        Ok(observations)
    }

    /// Read and concatenate files in the given order, skipping any that do not exist
    pub fn read_concatenated(&self, paths: &[PathBuf]) -> Result<Vec<DailyObservation>> {
        let mut combined = Vec::new();

        for path in paths {
            if !path.exists() {
                warn!(path = %path.display(), "Skipping missing file");
                continue;
            }
            combined.extend(self.read_observations(path)?);
        }

        Ok(combined)
    }
}

impl Default for SeriesReader {
    fn default() -> Self {
        Self::new()
    }
}
