use anyhow::Result;

use crate::model::record::RawRecord;
use crate::repository::traits::{Dataset, DatasetSource};
use crate::time::DAY_START_HOUR;

/// Built-in day used whenever the real dataset cannot be read. Covers the
/// whole 4:00-to-4:00 day; the slot builder cuts it to the configured window.
#[derive(Clone, Copy, Default)]
pub struct FallbackDataset;

fn with_kid_at(hour: u32, minute: u32) -> (&'static str, &'static str) {
    match hour {
        4 if minute == 0 => ("Sleep", "Self"),
        4 if minute == 15 => ("Alarm goes off", "Self"),
        4 => ("Get ready", "Self"),
        5..=6 => ("Work out", "Self"),
        7..=8 => ("Wake up son and get ready", "Kid"),
        9..=14 => ("Work", "Work"),
        15..=17 => ("Pick up son and activities", "Kid"),
        18..=20 => ("Dinner and family time", "Kid"),
        21 => ("Bedtime routine", "Kid"),
        _ => ("Sleep", "Self"),
    }
}

fn without_kid_at(hour: u32) -> (&'static str, &'static str) {
    match hour {
        7..=8 => ("Get ready for work", "Self"),
        9..=17 => ("Work", "Work"),
        18..=20 => ("Personal time", "Self"),
        21 => ("Leisure time", "Self"),
        _ => ("Sleep", "Self"),
    }
}

impl FallbackDataset {
    pub fn records(&self) -> Vec<RawRecord> {
        (DAY_START_HOUR..DAY_START_HOUR + 24)
            .flat_map(|h| (0..60).step_by(15).map(move |m| (h % 24, m)))
            .map(|(hour, minute)| {
                RawRecord::new(
                    &format!("{}:{:02}", hour, minute),
                    with_kid_at(hour, minute),
                    without_kid_at(hour),
                )
            })
            .collect()
    }
}

impl DatasetSource for FallbackDataset {
    fn load(&self) -> Result<Dataset> {
        Ok(Dataset::Slots(self.records()))
    }

    fn describe(&self) -> String {
        "built-in fallback day".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_covers_full_day() {
        let records = FallbackDataset.records();
        assert_eq!(records.len(), 96);
        assert_eq!(records[0].time, "4:00");
        assert_eq!(records[1].with_kid_activity, "Alarm goes off");
        assert_eq!(records[80].time, "0:00");
        assert_eq!(records[95].time, "3:45");
        assert!(records.iter().all(|r| !r.with_kid_activity.is_empty()));
    }
}
