use std::collections::BTreeSet;

use crate::model::group::{ActivityGroup, GroupSpan, ScenarioGroups, TransitionPoint};
use crate::model::slot::{slots_for, Scenario, SlotRow, TimeSlot};
use crate::time::format_offset;

/// Run-length encodes one scenario's slots. A new group starts whenever the
/// (activity, category) pair changes; comparison is exact. Single pass, input
/// order kept.
pub fn group_slots(slots: &[TimeSlot], slot_minutes: u32) -> Vec<ActivityGroup> {
    let mut groups: Vec<ActivityGroup> = Vec::new();

    for slot in slots {
        match groups.last_mut() {
            Some(current) if current.accepts(slot) => current.extend(slot.clone(), slot_minutes),
            _ => groups.push(ActivityGroup::start(slot.clone(), slot_minutes)),
        }
    }

    groups
}

/// Inverse of [`group_slots`]: the member slots in their original order.
pub fn flatten(groups: &[ActivityGroup]) -> Vec<TimeSlot> {
    groups.iter().flat_map(|g| g.slots.iter().cloned()).collect()
}

/// Groups each scenario on its own. A run in one scenario is never split or
/// relabelled because the other scenario changed underneath it.
pub fn group_scenarios(rows: &[SlotRow], slot_minutes: u32) -> ScenarioGroups {
    ScenarioGroups {
        with_kid: group_slots(&slots_for(rows, Scenario::WithKid), slot_minutes),
        without_kid: group_slots(&slots_for(rows, Scenario::WithoutKid), slot_minutes),
    }
}

/// One step per offset at which either scenario starts a new group, each
/// paired with what both scenarios are doing at that moment.
pub fn transition_points(groups: &ScenarioGroups) -> Vec<TransitionPoint> {
    let starts: BTreeSet<u32> = groups
        .with_kid
        .iter()
        .chain(groups.without_kid.iter())
        .map(|g| g.start_offset)
        .collect();

    let covering = |list: &[ActivityGroup], at: u32| -> Option<GroupSpan> {
        list.iter().find(|g| g.covers(at)).map(GroupSpan::from)
    };

    starts
        .into_iter()
        .map(|offset| TransitionPoint {
            offset_minutes: offset,
            time: format_offset(offset),
            with_kid: covering(&groups.with_kid, offset),
            without_kid: covering(&groups.without_kid, offset),
        })
        .collect()
}
