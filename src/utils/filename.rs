use crate::utils::constants::{COMBINED_SUFFIX, CSV_EXTENSION};
use std::path::{Path, PathBuf};

/// Year file path with format: {dir}/{prefix}_{slug}_{YYYY}.csv
pub fn year_file_path(output_dir: &Path, prefix: &str, slug: &str, year: i32) -> PathBuf {
    let filename = format!("{}_{}_{}.{}", prefix, slug, year, CSV_EXTENSION);
    output_dir.join(filename)
}

/// Combined file path with format: {dir}/{prefix}_{slug}_combined.csv
pub fn combined_file_path(output_dir: &Path, prefix: &str, slug: &str) -> PathBuf {
    let filename = format!("{}_{}_{}.{}", prefix, slug, COMBINED_SUFFIX, CSV_EXTENSION);
    output_dir.join(filename)
}
