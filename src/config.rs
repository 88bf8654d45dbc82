use chrono::{Datelike, NaiveDate};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use validator::Validate;

use crate::error::{GenerationError, Result};
use crate::models::StationMetadata;
use crate::utils::constants::{
    DEFAULT_AS_OF, DEFAULT_FIRST_YEAR, DEFAULT_LAST_YEAR, DEFAULT_SEED, FILE_PREFIX, OUTPUT_DIR,
};

/// Fixed parameters of a batch run.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub first_year: i32,
    pub last_year: i32,
    /// Last generated day of `last_year`
    pub as_of: NaiveDate,
    pub output_dir: PathBuf,
    pub file_prefix: String,
    pub seed: u64,
    pub station: StationMetadata,
}

impl Default for BatchConfig {
    fn default() -> Self {
        let (year, month, day) = DEFAULT_AS_OF;
        Self {
            first_year: DEFAULT_FIRST_YEAR,
            last_year: DEFAULT_LAST_YEAR,
            as_of: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
            output_dir: PathBuf::from(OUTPUT_DIR),
            file_prefix: FILE_PREFIX.to_string(),
            seed: DEFAULT_SEED,
            station: StationMetadata::default(),
        }
    }
}

impl BatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output_dir(mut self, output_dir: &Path) -> Self {
        self.output_dir = output_dir.to_path_buf();
        self
    }

    pub fn with_years(mut self, first_year: i32, last_year: i32) -> Self {
        self.first_year = first_year;
        self.last_year = last_year;
        self
    }

    pub fn with_as_of(mut self, as_of: NaiveDate) -> Self {
        self.as_of = as_of;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_station(mut self, station: StationMetadata) -> Self {
        self.station = station;
        self
    }

    pub fn years(&self) -> RangeInclusive<i32> {
        self.first_year..=self.last_year
    }

    pub fn year_count(&self) -> usize {
        self.years().count()
    }

    pub fn validate_config(&self) -> Result<()> {
        if self.first_year > self.last_year {
            return Err(GenerationError::Config(format!(
                "First year {} is after last year {}",
                self.first_year, self.last_year
            )));
        }

        if self.as_of.year() != self.last_year {
            return Err(GenerationError::Config(format!(
                "As-of date {} is not in the last year {}",
                self.as_of, self.last_year
            )));
        }

        if self.file_prefix.is_empty() {
            return Err(GenerationError::Config("Empty file prefix".to_string()));
        }

        self.station.validate()?;
        Ok(())
    }

    /// Inclusive date bounds for `year`; the last year stops at the as-of date.
    pub fn year_bounds(&self, year: i32) -> Result<(NaiveDate, NaiveDate)> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or_else(|| GenerationError::Config(format!("Year {} out of range", year)))?;

        let end = if year == self.last_year {
            self.as_of
        } else {
            NaiveDate::from_ymd_opt(year, 12, 31)
                .ok_or_else(|| GenerationError::Config(format!("Year {} out of range", year)))?
        };

        Ok((start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = BatchConfig::default();

        assert!(config.validate_config().is_ok());
        assert_eq!(config.years(), 2020..=2024);
        assert_eq!(config.year_count(), 5);
        assert_eq!(config.as_of, NaiveDate::from_ymd_opt(2024, 8, 11).unwrap());
        assert_eq!(config.output_dir, PathBuf::from("data"));
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_year_bounds() {
        let config = BatchConfig::default();

        let (start, end) = config.year_bounds(2021).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2021, 12, 31).unwrap());

        let (start, end) = config.year_bounds(2024).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2024, 8, 11).unwrap());
    }

    #[test]
    fn test_inverted_years_rejected() {
        let config = BatchConfig::default().with_years(2024, 2020);
        assert!(matches!(
            config.validate_config(),
            Err(GenerationError::Config(_))
        ));
    }

    #[test]
    fn test_as_of_outside_last_year_rejected() {
        let config = BatchConfig::default()
            .with_as_of(NaiveDate::from_ymd_opt(2023, 8, 11).unwrap());
        assert!(config.validate_config().is_err());
    }
}
