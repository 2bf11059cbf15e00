use serde::{Deserialize, Serialize};

use crate::model::category::Category;
use crate::model::slot::TimeSlot;
use crate::time::{format_duration, format_offset};

/// A maximal run of consecutive slots with the same activity and category.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityGroup {
    pub start_offset: u32,
    /// Exclusive.
    pub end_offset: u32,
    pub duration_slots: usize,
    pub duration_minutes: u32,
    pub activity: String,
    pub category: Category,
    pub slots: Vec<TimeSlot>,
}

impl ActivityGroup {
    pub fn start(first: TimeSlot, slot_minutes: u32) -> Self {
        Self {
            start_offset: first.offset_minutes,
            end_offset: first.offset_minutes + slot_minutes,
            duration_slots: 1,
            duration_minutes: slot_minutes,
            activity: first.activity.clone(),
            category: first.category,
            slots: vec![first],
        }
    }

    pub fn extend(&mut self, slot: TimeSlot, slot_minutes: u32) {
        self.end_offset = slot.offset_minutes + slot_minutes;
        self.duration_slots += 1;
        self.duration_minutes += slot_minutes;
        self.slots.push(slot);
    }

    pub fn accepts(&self, slot: &TimeSlot) -> bool {
        self.activity == slot.activity && self.category == slot.category
    }

    pub fn covers(&self, offset_minutes: u32) -> bool {
        self.start_offset <= offset_minutes && offset_minutes < self.end_offset
    }

    pub fn start_time(&self) -> String {
        format_offset(self.start_offset)
    }

    pub fn end_time(&self) -> String {
        format_offset(self.end_offset)
    }

    pub fn duration_label(&self) -> String {
        format_duration(self.duration_minutes)
    }
}

/// Independent group sequences, one per scenario.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioGroups {
    pub with_kid: Vec<ActivityGroup>,
    pub without_kid: Vec<ActivityGroup>,
}

/// A group reduced to what a scroll step shows, without member slots.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GroupSpan {
    pub activity: String,
    pub category: Category,
    pub start_offset: u32,
    pub end_offset: u32,
    pub start_time: String,
    pub end_time: String,
    pub duration_minutes: u32,
}

impl From<&ActivityGroup> for GroupSpan {
    fn from(group: &ActivityGroup) -> Self {
        Self {
            activity: group.activity.clone(),
            category: group.category,
            start_offset: group.start_offset,
            end_offset: group.end_offset,
            start_time: group.start_time(),
            end_time: group.end_time(),
            duration_minutes: group.duration_minutes,
        }
    }
}

/// The moment either scenario switches activity.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TransitionPoint {
    pub offset_minutes: u32,
    pub time: String,
    pub with_kid: Option<GroupSpan>,
    pub without_kid: Option<GroupSpan>,
}
