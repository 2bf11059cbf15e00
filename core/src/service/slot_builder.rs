use chrono::{DateTime, FixedOffset};
use log::{debug, warn};

use crate::config::{CarryForwardSeed, DayWindow, StoryConfig, DEFAULT_UTC_OFFSET_MINUTES};
use crate::error::DataError;
use crate::model::category::{categorize_activity, normalize_category};
use crate::model::record::{IntervalDataset, IntervalTrack, RawRecord};
use crate::model::slot::{ActivityEntry, SlotRow, SLOT_MINUTES};
use crate::time::{format_offset, parse_clock, DAY_START_HOUR};

#[derive(Debug, Clone, PartialEq)]
pub struct BuildOptions {
    pub window: DayWindow,
    pub slot_minutes: u32,
    pub seed: CarryForwardSeed,
    pub utc_offset_minutes: i32,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            window: DayWindow::default(),
            slot_minutes: SLOT_MINUTES,
            seed: CarryForwardSeed::default(),
            utc_offset_minutes: DEFAULT_UTC_OFFSET_MINUTES,
        }
    }
}

impl BuildOptions {
    pub fn from_config(config: &StoryConfig) -> Self {
        Self {
            window: config.window,
            slot_minutes: config.slot_minutes,
            seed: config.carry_forward.clone(),
            utc_offset_minutes: config.utc_offset_minutes,
        }
    }

    pub fn slot_count(&self) -> usize {
        self.window.slot_count(self.slot_minutes)
    }

    fn offset_at(&self, index: usize) -> u32 {
        index as u32 * self.slot_minutes
    }
}

/// Missing-value policy shared by every input shape: a blank activity repeats
/// the last known one of the same scenario, and before there is any, the
/// seed (Sleep / Self unless configured otherwise).
#[derive(Debug, Clone)]
pub struct CarryForward {
    last: ActivityEntry,
}

impl CarryForward {
    pub fn new(seed: &CarryForwardSeed) -> Self {
        Self { last: seed.entry() }
    }

    pub fn resolve(&mut self, candidate: Option<ActivityEntry>) -> ActivityEntry {
        match candidate {
            Some(entry) if !entry.activity.is_empty() => {
                self.last = entry.clone();
                entry
            }
            _ => self.last.clone(),
        }
    }
}

/// Trims, turns tabs into spaces, collapses runs of whitespace and undoes the
/// spreadsheet's quadruple-quote escaping.
pub fn clean_text(raw: &str) -> String {
    raw.replace("\"\"\"\"", "\"")
        .replace('\t', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// One column of grid cells for one scenario, before carry-forward.
type Cells = Vec<Option<ActivityEntry>>;

fn fill(cells: Cells, seed: &CarryForwardSeed) -> Vec<ActivityEntry> {
    let mut policy = CarryForward::new(seed);
    cells.into_iter().map(|c| policy.resolve(c)).collect()
}

fn assemble(
    with_kid: Cells,
    without_kid: Cells,
    options: &BuildOptions,
) -> Vec<SlotRow> {
    let with_kid = fill(with_kid, &options.seed);
    let without_kid = fill(without_kid, &options.seed);

    with_kid
        .into_iter()
        .zip(without_kid)
        .enumerate()
        .map(|(index, (with_kid, without_kid))| {
            let offset_minutes = options.offset_at(index);
            SlotRow {
                time: format_offset(offset_minutes),
                offset_minutes,
                with_kid,
                without_kid,
            }
        })
        .collect()
}

fn entry_from_cells(activity: &str, category: &str) -> Option<ActivityEntry> {
    let activity = clean_text(activity);
    if activity.is_empty() {
        return None;
    }
    Some(ActivityEntry::new(activity, normalize_category(category)))
}

/// Lays already-sliced rows onto the grid of the configured window.
///
/// Rows without a time are dropped. Rows whose time does not parse are
/// dropped with a warning. A row off the grid is snapped to the slot it falls
/// in; a second row for the same slot is ignored. Rows past the window are
/// cut, which for `UntilMidnight` means everything after the `0:00` slot.
/// Every slot with no row, or with a blank activity, is carried forward.
pub fn build_rows(records: &[RawRecord], options: &BuildOptions) -> Vec<SlotRow> {
    let count = options.slot_count();
    let mut with_kid: Cells = vec![None; count];
    let mut without_kid: Cells = vec![None; count];
    let mut seen = vec![false; count];
    let mut blank = 0;
    let mut outside = 0;

    for record in records {
        if record.time.trim().is_empty() {
            blank += 1;
            continue;
        }
        let Some(offset) = parse_clock(&record.time) else {
            warn!("Skipping row with unparsable time '{}'", record.time);
            continue;
        };
        let index = (offset / options.slot_minutes) as usize;
        if index >= count {
            outside += 1;
            continue;
        }
        if seen[index] {
            warn!("Duplicate row for {}, keeping the first", format_offset(offset));
            continue;
        }
        seen[index] = true;
        with_kid[index] =
            entry_from_cells(&record.with_kid_activity, &record.with_kid_category);
        without_kid[index] =
            entry_from_cells(&record.without_kid_activity, &record.without_kid_category);
    }

    let missing = seen.iter().filter(|s| !**s).count();
    debug!(
        "Built {} slots from {} rows ({} without time, {} past window, {} slots carried forward)",
        count,
        records.len(),
        blank,
        outside,
        missing
    );

    assemble(with_kid, without_kid, options)
}

fn is_without_label(label: &str) -> bool {
    label.contains("without kid") || label.contains("without children")
}

fn is_with_label(label: &str) -> bool {
    !is_without_label(label) && (label.contains("with kid") || label.contains("with children"))
}

fn stamp(track: &IntervalTrack, anchor_ms: i64, options: &BuildOptions) -> Cells {
    let step_ms = options.slot_minutes as i64 * 60_000;
    (0..options.slot_count())
        .map(|index| {
            let at = anchor_ms + index as i64 * step_ms;
            // Later intervals win where the source overlaps itself.
            track
                .times
                .iter()
                .rev()
                .find(|i| i.starting_time <= at && at < i.ending_time)
                .and_then(|i| {
                    let activity = clean_text(&i.activity);
                    if activity.is_empty() {
                        return None;
                    }
                    let category = categorize_activity(&activity);
                    Some(ActivityEntry::new(activity, category))
                })
        })
        .collect()
}

const DAY_MS: i64 = 24 * 60 * 60_000;

fn fixed_offset(utc_offset_minutes: i32) -> Result<FixedOffset, DataError> {
    utc_offset_minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or(DataError::InvalidUtcOffset {
            minutes: utc_offset_minutes,
        })
}

/// The first local 4:00 the opening interval reaches. An overnight sleep that
/// starts the evening before therefore anchors on the morning it ends in.
/// When the opening interval ends before any 4:00, the day is the one it
/// starts in.
fn day_anchor_ms(dataset: &IntervalDataset, offset: FixedOffset) -> Option<i64> {
    let opening = dataset.opening_interval()?;
    let start = DateTime::from_timestamp_millis(opening.starting_time)?.with_timezone(&offset);
    let same_date = start
        .date_naive()
        .and_hms_opt(DAY_START_HOUR, 0, 0)?
        .and_local_timezone(offset)
        .single()?
        .timestamp_millis();

    // Latest 4:00 at or before the start, and the first one at or after it.
    let floor = if same_date <= opening.starting_time {
        same_date
    } else {
        same_date - DAY_MS
    };
    let ceil = if floor == opening.starting_time {
        floor
    } else {
        floor + DAY_MS
    };
    Some(if ceil < opening.ending_time { ceil } else { floor })
}

/// Re-slices `[start, end)` interval tracks onto the fixed grid. Interval
/// edges need not be aligned; a grid point belongs to the interval that
/// contains it. Categories are inferred from the activity text.
pub fn build_rows_from_intervals(
    dataset: &IntervalDataset,
    options: &BuildOptions,
) -> Result<Vec<SlotRow>, DataError> {
    let with_kid = dataset
        .find_track(is_with_label)
        .ok_or(DataError::MissingScenario { label: "With Kid" })?;
    let without_kid = dataset
        .find_track(is_without_label)
        .ok_or(DataError::MissingScenario { label: "Without Kid" })?;
    let offset = fixed_offset(options.utc_offset_minutes)?;
    let anchor = day_anchor_ms(dataset, offset).ok_or(DataError::EmptyDataset)?;

    debug!(
        "Re-slicing {} + {} intervals from anchor {}",
        with_kid.times.len(),
        without_kid.times.len(),
        anchor
    );

    Ok(assemble(
        stamp(with_kid, anchor, options),
        stamp(without_kid, anchor, options),
        options,
    ))
}
