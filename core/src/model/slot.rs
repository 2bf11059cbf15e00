use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::category::Category;

/// Width of one grid cell in minutes.
pub const SLOT_MINUTES: u32 = 15;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Scenario {
    WithKid,
    WithoutKid,
}

impl Scenario {
    pub const ALL: [Scenario; 2] = [Scenario::WithKid, Scenario::WithoutKid];

    pub fn label(&self) -> &'static str {
        match self {
            Scenario::WithKid => "With Kid",
            Scenario::WithoutKid => "Without Kid",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What one scenario was doing during one slot.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct ActivityEntry {
    pub activity: String,
    pub category: Category,
}

impl ActivityEntry {
    pub fn new(activity: impl Into<String>, category: Category) -> Self {
        Self {
            activity: activity.into(),
            category,
        }
    }
}

/// One cleaned grid point carrying both scenarios side by side.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SlotRow {
    pub time: String,
    pub offset_minutes: u32,
    pub with_kid: ActivityEntry,
    pub without_kid: ActivityEntry,
}

impl SlotRow {
    pub fn entry(&self, scenario: Scenario) -> &ActivityEntry {
        match scenario {
            Scenario::WithKid => &self.with_kid,
            Scenario::WithoutKid => &self.without_kid,
        }
    }
}

/// One scenario's view of one slot. Values are never mutated after the
/// slot builder hands them out.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub offset_minutes: u32,
    pub slot_index: usize,
    pub activity: String,
    pub category: Category,
}

/// Projects one scenario out of the paired rows, keeping row order.
pub fn slots_for(rows: &[SlotRow], scenario: Scenario) -> Vec<TimeSlot> {
    rows.iter()
        .enumerate()
        .map(|(slot_index, row)| {
            let entry = row.entry(scenario);
            TimeSlot {
                offset_minutes: row.offset_minutes,
                slot_index,
                activity: entry.activity.clone(),
                category: entry.category,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_for_projects_scenario() {
        let rows = vec![
            SlotRow {
                time: "4:00".to_string(),
                offset_minutes: 0,
                with_kid: ActivityEntry::new("Sleep", Category::Personal),
                without_kid: ActivityEntry::new("Sleep", Category::Personal),
            },
            SlotRow {
                time: "4:15".to_string(),
                offset_minutes: 15,
                with_kid: ActivityEntry::new("Alarm goes off", Category::Personal),
                without_kid: ActivityEntry::new("Sleep", Category::Personal),
            },
        ];

        let with_kid = slots_for(&rows, Scenario::WithKid);
        assert_eq!(with_kid.len(), 2);
        assert_eq!(with_kid[1].activity, "Alarm goes off");
        assert_eq!(with_kid[1].slot_index, 1);
        assert_eq!(with_kid[1].offset_minutes, 15);

        let without_kid = slots_for(&rows, Scenario::WithoutKid);
        assert_eq!(without_kid[0].activity, without_kid[1].activity);
        assert_eq!(without_kid[1].category, Category::Personal);
    }

    #[test]
    fn test_scenario_serde_names() {
        assert_eq!(serde_json::to_string(&Scenario::WithKid).unwrap(), "\"withKid\"");
        assert_eq!(Scenario::WithoutKid.to_string(), "Without Kid");
    }
}
