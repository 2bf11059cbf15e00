//! Property tests for the slot grouping transform.
//!
//! Slot sequences are generated from a small activity alphabet so that runs
//! of equal neighbours actually occur.

use daysplit_core::{
    build_rows, flatten, group_slots, parse_clock, tally_groups, tally_slots, BuildOptions,
    Category, RawRecord, TimeSlot,
};
use proptest::prelude::*;

fn category() -> impl Strategy<Value = Category> {
    prop_oneof![Just(Category::Personal), Just(Category::Work), Just(Category::Kid)]
}

fn slot_sequence() -> impl Strategy<Value = Vec<TimeSlot>> {
    prop::collection::vec((prop::sample::select(vec!["Sleep", "Work", "Drive", "Eat"]), category()), 0..120)
        .prop_map(|cells| {
            cells
                .into_iter()
                .enumerate()
                .map(|(i, (activity, category))| TimeSlot {
                    offset_minutes: i as u32 * 15,
                    slot_index: i,
                    activity: activity.to_string(),
                    category,
                })
                .collect()
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_groups_partition_slots_losslessly(slots in slot_sequence()) {
        let groups = group_slots(&slots, 15);
        prop_assert_eq!(flatten(&groups), slots);
    }

    #[test]
    fn prop_members_share_group_key(slots in slot_sequence()) {
        for group in group_slots(&slots, 15) {
            prop_assert!(group.slots.iter().all(|s| s.activity == group.activity && s.category == group.category));
            prop_assert_eq!(group.duration_slots, group.slots.len());
            prop_assert_eq!(group.end_offset - group.start_offset, group.duration_minutes);
        }
    }

    #[test]
    fn prop_groups_are_contiguous_and_maximal(slots in slot_sequence()) {
        let groups = group_slots(&slots, 15);
        for pair in groups.windows(2) {
            prop_assert_eq!(pair[0].end_offset, pair[1].start_offset);
            prop_assert!(pair[0].activity != pair[1].activity || pair[0].category != pair[1].category);
        }
    }

    #[test]
    fn prop_regrouping_is_idempotent(slots in slot_sequence()) {
        let groups = group_slots(&slots, 15);
        prop_assert_eq!(group_slots(&flatten(&groups), 15), groups);
    }

    #[test]
    fn prop_tally_counts_every_slot(slots in slot_sequence()) {
        let tallies = tally_slots(&slots, 15);
        let counted: usize = tallies.iter().map(|t| t.slot_count).sum();
        prop_assert_eq!(counted, slots.len());
        prop_assert_eq!(tally_groups(&group_slots(&slots, 15), 15), tallies);
    }

    #[test]
    fn prop_rounded_percentages_stay_near_100(slots in slot_sequence()) {
        prop_assume!(!slots.is_empty());
        let total: u32 = tally_slots(&slots, 15).iter().map(|t| t.percentage_of_day).sum();
        prop_assert!((98..=102).contains(&total));
    }

    #[test]
    fn prop_parse_clock_never_panics(input in "\\PC{0,8}") {
        let _ = parse_clock(&input);
    }

    #[test]
    fn prop_build_rows_always_fills_window(
        cells in prop::collection::vec(
            (0u32..24, 0u32..4, "[A-Za-z ]{0,6}", prop::sample::select(vec!["Self", "Work", "Kid", ""])),
            0..40,
        )
    ) {
        let records: Vec<RawRecord> = cells
            .iter()
            .map(|(h, q, activity, category)| {
                let time = format!("{}:{:02}", h, q * 15);
                RawRecord::new(&time, (activity.as_str(), *category), (activity.as_str(), *category))
            })
            .collect();
        let options = BuildOptions::default();
        let rows = build_rows(&records, &options);
        prop_assert_eq!(rows.len(), options.slot_count());
        prop_assert!(rows.iter().all(|r| !r.with_kid.activity.is_empty() && !r.without_kid.activity.is_empty()));
    }
}
