pub mod census;
pub mod fallback;
pub mod file;
pub mod traits;

// Re-export
pub use census::{save_rates_csv, FileCensusRepository};
pub use fallback::FallbackDataset;
pub use file::{save_cleaned_csv, write_cleaned_csv, FileDatasetRepository, IntervalFileRepository};
pub use traits::{Dataset, DatasetSource};
