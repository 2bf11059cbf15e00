use std::path::PathBuf;
use thiserror::Error;

/// Problems with the data itself, as opposed to plain I/O.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("dataset not found at {}", path.display())]
    MissingInput { path: PathBuf },

    #[error("dataset has no usable rows")]
    EmptyDataset,

    #[error("column for {field} not found: expected header '{expected}', found {found:?}")]
    MissingColumn {
        field: &'static str,
        expected: String,
        found: Vec<String>,
    },

    #[error("no track labelled '{label}' in interval data")]
    MissingScenario { label: &'static str },

    #[error("UTC offset of {minutes} minutes is not a valid fixed offset")]
    InvalidUtcOffset { minutes: i32 },
}
