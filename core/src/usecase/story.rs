use anyhow::Result;
use log::{debug, error, warn};

use crate::error::DataError;
use crate::model::slot::{Scenario, SlotRow};
use crate::model::story::{DataOrigin, DayStory};
use crate::repository::{Dataset, DatasetSource, FallbackDataset};
use crate::service::aggregator::{compare, summarize};
use crate::service::grouper::{group_scenarios, transition_points};
use crate::service::slot_builder::{build_rows, build_rows_from_intervals, BuildOptions};
use crate::time::parse_clock;

/// One load of the day story. Holds everything the transform needs, so no
/// step reads or writes shared state.
pub struct StoryUseCase<S: DatasetSource> {
    source: S,
    options: BuildOptions,
}

impl<S: DatasetSource> StoryUseCase<S> {
    pub fn new(source: S, options: BuildOptions) -> Self {
        Self { source, options }
    }

    /// Cleaned grid rows from the source, or the reason there are none.
    pub fn rows(&self) -> Result<Vec<SlotRow>> {
        let dataset = self.source.load()?;
        if dataset.is_empty() {
            return Err(DataError::EmptyDataset.into());
        }
        rows_from(&dataset, &self.options)
    }

    /// Builds the story from the source and fails on any data problem.
    pub fn try_load(&self) -> Result<DayStory> {
        let rows = self.rows()?;
        Ok(assemble(rows, DataOrigin::Dataset, self.options.slot_minutes))
    }

    /// Builds the story, substituting the built-in day if the source cannot
    /// produce one. Always returns a non-empty story.
    pub fn load(&self) -> DayStory {
        match self.rows() {
            Ok(rows) => {
                debug!("Loaded {} slots from {}", rows.len(), self.source.describe());
                assemble(rows, DataOrigin::Dataset, self.options.slot_minutes)
            }
            Err(err) => {
                match err.downcast_ref::<DataError>() {
                    Some(DataError::MissingColumn { .. }) => {
                        error!("Schema mismatch in {}: {:#}", self.source.describe(), err);
                    }
                    _ => warn!("Could not load {}: {:#}", self.source.describe(), err),
                }
                warn!("Using the built-in fallback day");
                let records = FallbackDataset.records();
                let rows = build_rows(&records, &self.options);
                assemble(rows, DataOrigin::Fallback, self.options.slot_minutes)
            }
        }
    }
}

fn rows_from(dataset: &Dataset, options: &BuildOptions) -> Result<Vec<SlotRow>> {
    match dataset {
        Dataset::Slots(records) => {
            if !records.iter().any(|r| parse_clock(&r.time).is_some()) {
                return Err(DataError::EmptyDataset.into());
            }
            Ok(build_rows(records, options))
        }
        Dataset::Intervals(data) => Ok(build_rows_from_intervals(data, options)?),
    }
}

fn assemble(rows: Vec<SlotRow>, source: DataOrigin, slot_minutes: u32) -> DayStory {
    let groups = group_scenarios(&rows, slot_minutes);
    let with_kid = summarize(Scenario::WithKid, &groups.with_kid, slot_minutes);
    let without_kid = summarize(Scenario::WithoutKid, &groups.without_kid, slot_minutes);
    let comparisons = compare(&with_kid, &without_kid);
    let transitions = transition_points(&groups);

    debug!(
        "Story: {} slots, {} + {} groups, {} transitions",
        rows.len(),
        groups.with_kid.len(),
        groups.without_kid.len(),
        transitions.len()
    );

    DayStory {
        source,
        slot_minutes,
        rows,
        groups,
        with_kid,
        without_kid,
        comparisons,
        transitions,
    }
}
