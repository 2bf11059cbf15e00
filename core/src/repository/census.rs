use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::error::DataError;
use crate::model::employment::{EmploymentRate, EmploymentRecord};

/// Census estimates CSV, one row per survey year.
#[derive(Clone)]
pub struct FileCensusRepository {
    file_path: PathBuf,
}

impl FileCensusRepository {
    pub fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    pub fn list(&self) -> Result<Vec<EmploymentRecord>> {
        if !self.file_path.exists() {
            return Err(DataError::MissingInput {
                path: self.file_path.clone(),
            }
            .into());
        }
        let file = File::open(&self.file_path)
            .with_context(|| format!("Could not open {}", self.file_path.display()))?;
        let mut reader = csv::Reader::from_reader(BufReader::new(file));

        let mut records = Vec::new();
        for (line, row) in reader.deserialize::<EmploymentRecord>().enumerate() {
            let record = row.with_context(|| {
                format!("Bad census row {} in {}", line + 2, self.file_path.display())
            })?;
            records.push(record);
        }
        Ok(records)
    }
}

/// Writes computed rates as CSV with camelCase headers; undefined rates are
/// left blank.
pub fn save_rates_csv(rates: &[EmploymentRate], path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Could not create {}", path.display()))?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(file));
    for rate in rates {
        writer.serialize(rate)?;
    }
    writer.flush()?;
    Ok(())
}
