use crate::model::record::{IntervalDataset, RawRecord};
use anyhow::Result;

/// The two input shapes the slot builder understands.
#[derive(Debug, Clone, PartialEq)]
pub enum Dataset {
    /// One row per grid slot, both scenarios per row.
    Slots(Vec<RawRecord>),
    /// Free-length `[start, end)` activities per scenario.
    Intervals(IntervalDataset),
}

impl Dataset {
    pub fn is_empty(&self) -> bool {
        match self {
            Dataset::Slots(records) => records.is_empty(),
            Dataset::Intervals(data) => data.tracks.iter().all(|t| t.times.is_empty()),
        }
    }
}

pub trait DatasetSource {
    fn load(&self) -> Result<Dataset>;
    fn describe(&self) -> String;
}
