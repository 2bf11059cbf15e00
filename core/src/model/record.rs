use serde::{Deserialize, Serialize};

/// One row as it comes off the dataset, before any cleaning. Every cell is
/// kept as text; the slot builder decides what a blank or odd value means.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct RawRecord {
    pub time: String,
    pub with_kid_activity: String,
    pub with_kid_category: String,
    pub without_kid_activity: String,
    pub without_kid_category: String,
}

impl RawRecord {
    pub fn new(
        time: &str,
        with_kid: (&str, &str),
        without_kid: (&str, &str),
    ) -> Self {
        Self {
            time: time.to_string(),
            with_kid_activity: with_kid.0.to_string(),
            with_kid_category: with_kid.1.to_string(),
            without_kid_activity: without_kid.0.to_string(),
            without_kid_category: without_kid.1.to_string(),
        }
    }
}

/// `[start, end)` in epoch milliseconds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IntervalActivity {
    pub starting_time: i64,
    pub ending_time: i64,
    pub activity: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IntervalTrack {
    pub label: String,
    pub times: Vec<IntervalActivity>,
}

/// Timeline-chart shaped input: one labelled track per scenario.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct IntervalDataset {
    pub tracks: Vec<IntervalTrack>,
}

impl IntervalDataset {
    pub fn find_track(&self, matches: impl Fn(&str) -> bool) -> Option<&IntervalTrack> {
        self.tracks.iter().find(|t| matches(&t.label.to_lowercase()))
    }

    /// The interval that starts first across all tracks.
    pub fn opening_interval(&self) -> Option<&IntervalActivity> {
        self.tracks
            .iter()
            .flat_map(|t| t.times.iter())
            .min_by_key(|i| i.starting_time)
    }
}
