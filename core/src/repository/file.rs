use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, warn};
use csv::StringRecord;
use serde_json::{Map, Value};

use crate::error::DataError;
use crate::input::ColumnSchema;
use crate::model::record::{IntervalDataset, RawRecord};
use crate::model::slot::SlotRow;
use crate::repository::traits::{Dataset, DatasetSource};

fn open(path: &Path) -> Result<File> {
    if !path.exists() {
        return Err(DataError::MissingInput {
            path: path.to_path_buf(),
        }
        .into());
    }
    File::open(path).with_context(|| format!("Could not open {}", path.display()))
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

/// Slot dataset on disk: CSV, or a JSON array of objects when the file ends
/// in `.json`. Both go through the same declared column schema.
#[derive(Clone)]
pub struct FileDatasetRepository {
    file_path: PathBuf,
    schema: ColumnSchema,
}

impl FileDatasetRepository {
    pub fn new(file_path: PathBuf, schema: ColumnSchema) -> Self {
        Self { file_path, schema }
    }

    fn read_csv(&self) -> Result<Vec<RawRecord>> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(BufReader::new(open(&self.file_path)?));
        let headers = reader
            .headers()
            .with_context(|| format!("Could not read header of {}", self.file_path.display()))?
            .clone();
        let index = self.schema.validate(&headers.iter().collect::<Vec<_>>())?;

        // Cells that are not valid UTF-8 are decoded lossily; a row the parser
        // cannot read at all is skipped on its own.
        let mut records = Vec::new();
        for (line, row) in reader.byte_records().enumerate() {
            match row {
                Ok(row) => records.push(index.record(&StringRecord::from_byte_record_lossy(row))),
                Err(err) if err.is_io_error() => {
                    return Err(err).with_context(|| {
                        format!("Could not read {}", self.file_path.display())
                    });
                }
                Err(err) => warn!(
                    "Skipping unreadable row {} in {}: {}",
                    line + 2,
                    self.file_path.display(),
                    err
                ),
            }
        }
        Ok(records)
    }

    fn read_json(&self) -> Result<Vec<RawRecord>> {
        let reader = BufReader::new(open(&self.file_path)?);
        let objects: Vec<Map<String, Value>> = serde_json::from_reader(reader)
            .with_context(|| format!("{} is not an array of objects", self.file_path.display()))?;
        Ok(self.schema.records_from_objects(&objects)?)
    }
}

impl DatasetSource for FileDatasetRepository {
    fn load(&self) -> Result<Dataset> {
        let records = if is_json(&self.file_path) {
            self.read_json()?
        } else {
            self.read_csv()?
        };
        debug!("Read {} rows from {}", records.len(), self.file_path.display());
        Ok(Dataset::Slots(records))
    }

    fn describe(&self) -> String {
        self.file_path.display().to_string()
    }
}

/// Interval dataset on disk, in the timeline-chart JSON shape.
#[derive(Clone)]
pub struct IntervalFileRepository {
    file_path: PathBuf,
}

impl IntervalFileRepository {
    pub fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }
}

impl DatasetSource for IntervalFileRepository {
    fn load(&self) -> Result<Dataset> {
        let reader = BufReader::new(open(&self.file_path)?);
        let data: IntervalDataset = serde_json::from_reader(reader)
            .with_context(|| format!("Invalid interval data in {}", self.file_path.display()))?;
        debug!("Read {} tracks from {}", data.tracks.len(), self.file_path.display());
        Ok(Dataset::Intervals(data))
    }

    fn describe(&self) -> String {
        self.file_path.display().to_string()
    }
}

/// Writes cleaned rows back out under the schema's header names, one row per
/// slot, categories spelled `Self`/`Work`/`Kid`.
pub fn write_cleaned_csv<W: Write>(rows: &[SlotRow], schema: &ColumnSchema, out: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(schema.headers())?;
    for row in rows {
        writer.write_record([
            row.time.as_str(),
            row.with_kid.activity.as_str(),
            row.with_kid.category.label(),
            row.without_kid.activity.as_str(),
            row.without_kid.category.label(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn save_cleaned_csv(rows: &[SlotRow], schema: &ColumnSchema, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Could not create {}", path.display()))?;
    write_cleaned_csv(rows, schema, BufWriter::new(file))
}
