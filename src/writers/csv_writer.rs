use crate::error::Result;
use crate::models::DailyObservation;
use csv::WriterBuilder;
use std::path::Path;
use tracing::debug;

/// Header row, in the column order of the INMET station exports.
pub const COLUMNS: [&str; 16] = [
    "DATA",
    "HORA",
    "ESTACAO",
    "NOME_DA_ESTACAO",
    "UF",
    "REGIAO",
    "LATITUDE",
    "LONGITUDE",
    "ALTITUDE",
    "TEMPERATURA_MAXIMA",
    "TEMPERATURA_MINIMA",
    "TEMPERATURA_MEDIA",
    "UMIDADE_RELATIVA",
    "PRECIPITACAO",
    "VELOCIDADE_VENTO",
    "PRESSAO_ATMOSFERICA",
];

pub struct CsvWriter {
    delimiter: u8,
}

impl CsvWriter {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Write observations to `path`, replacing any existing file.
    ///
    /// The header is always written, so an empty series yields a header-only file.
    pub fn write_observations(&self, records: &[DailyObservation], path: &Path) -> Result<usize> {
        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .from_path(path)?;

        writer.write_record(COLUMNS)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        debug!(path = %path.display(), rows = records.len(), "Wrote CSV file");
        Ok(records.len())
    }
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self::new()
    }
}
