use crate::config::BatchConfig;
use crate::error::Result;
use crate::processors::SeriesGenerator;
use crate::readers::SeriesReader;
use crate::utils::filename::{combined_file_path, year_file_path};
use crate::utils::progress::ProgressReporter;
use crate::writers::CsvWriter;
use rand::Rng;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct YearOutput {
    pub year: i32,
    pub path: PathBuf,
    pub rows: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CombinedOutput {
    pub path: PathBuf,
    pub rows: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchSummary {
    pub years: Vec<YearOutput>,
    pub combined: Option<CombinedOutput>,
}

impl BatchSummary {
    pub fn total_year_rows(&self) -> usize {
        self.years.iter().map(|y| y.rows).sum()
    }

    pub fn files_written(&self) -> usize {
        self.years.len() + usize::from(self.combined.is_some())
    }

    pub fn summary(&self) -> String {
        let mut lines = vec![format!("Files written: {}", self.files_written())];
        for year in &self.years {
            lines.push(format!(
                "  {}: {} rows -> {}",
                year.year,
                year.rows,
                year.path.display()
            ));
        }
        match &self.combined {
            Some(combined) => lines.push(format!(
                "  combined: {} rows -> {}",
                combined.rows,
                combined.path.display()
            )),
            None => lines.push("  combined: not written".to_string()),
        }
        lines.join("\n")
    }
}

/// Writes one CSV per year, then the concatenation of those files.
pub struct BatchDriver {
    config: BatchConfig,
    generator: SeriesGenerator,
    writer: CsvWriter,
    reader: SeriesReader,
}

impl BatchDriver {
    pub fn new(config: BatchConfig) -> Result<Self> {
        config.validate_config()?;
        let generator = SeriesGenerator::new(config.station.clone())?;

        Ok(Self {
            config,
            generator,
            writer: CsvWriter::new(),
            reader: SeriesReader::new(),
        })
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    pub fn year_path(&self, year: i32) -> PathBuf {
        year_file_path(
            &self.config.output_dir,
            &self.config.file_prefix,
            &self.config.station.slug(),
            year,
        )
    }

    pub fn combined_path(&self) -> PathBuf {
        combined_file_path(
            &self.config.output_dir,
            &self.config.file_prefix,
            &self.config.station.slug(),
        )
    }

    /// Run every year in order from one random stream, then write the combined file.
    pub fn run<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        progress: Option<&ProgressReporter>,
    ) -> Result<BatchSummary> {
        std::fs::create_dir_all(&self.config.output_dir)?;

        let mut years = Vec::with_capacity(self.config.year_count());
        for year in self.config.years() {
            if let Some(p) = progress {
                p.set_message(&format!("Generating {}...", year));
            }

            let output = self.write_year(year, rng)?;

            if let Some(p) = progress {
                p.println(&format!(
                    "Generated sample data for {}: {}",
                    year,
                    output.path.display()
                ));
                p.increment(1);
            }
            years.push(output);
        }

        if let Some(p) = progress {
            p.set_message("Combining year files...");
        }

        let combined = self.write_combined()?;

        if let (Some(p), Some(output)) = (progress, &combined) {
            p.println(&format!(
                "Generated combined dataset: {}",
                output.path.display()
            ));
            p.increment(1);
        }

        Ok(BatchSummary { years, combined })
    }

    fn write_year<R: Rng + ?Sized>(&self, year: i32, rng: &mut R) -> Result<YearOutput> {
        let (start, end) = self.config.year_bounds(year)?;
        let observations = self
            .generator
            .generate(start, end, &self.config.station.name, rng);

        let path = self.year_path(year);
        let rows = self.writer.write_observations(&observations, &path)?;
        info!(year, rows, path = %path.display(), "Wrote year file");

        Ok(YearOutput { year, path, rows })
    }

    /// Concatenate the year files on disk in year order, without de-duplication.
    fn write_combined(&self) -> Result<Option<CombinedOutput>> {
        let existing: Vec<PathBuf> = self
            .config
            .years()
            .map(|year| self.year_path(year))
            .filter(|path| path.exists())
            .collect();

        if existing.is_empty() {
            warn!("No year files found, combined file not written");
            return Ok(None);
        }

        let observations = self.reader.read_concatenated(&existing)?;
        let path = self.combined_path();
        let rows = self.writer.write_observations(&observations, &path)?;
        info!(rows, files = existing.len(), path = %path.display(), "Wrote combined file");

        Ok(Some(CombinedOutput { path, rows }))
    }
}
