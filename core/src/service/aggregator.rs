use crate::model::category::Category;
use crate::model::group::ActivityGroup;
use crate::model::slot::{Scenario, TimeSlot};
use crate::model::stats::{CategoryComparison, CategoryTally, ScenarioSummary};

fn tallies_from_counts(counts: [usize; 3], slot_minutes: u32) -> Vec<CategoryTally> {
    let total: usize = counts.iter().sum();

    Category::ALL
        .iter()
        .map(|&category| {
            let slot_count = counts[category.index()];
            let minutes = slot_count as u32 * slot_minutes;
            let percentage_of_day = if total == 0 {
                0
            } else {
                (slot_count as f64 / total as f64 * 100.0).round() as u32
            };
            CategoryTally {
                category,
                slot_count,
                minutes,
                hours: minutes as f64 / 60.0,
                percentage_of_day,
            }
        })
        .collect()
}

/// Per-category totals over raw slots, Self/Work/Kid order. Percentages are
/// rounded one by one and are not forced to add up to 100.
pub fn tally_slots(slots: &[TimeSlot], slot_minutes: u32) -> Vec<CategoryTally> {
    let mut counts = [0usize; 3];
    for slot in slots {
        counts[slot.category.index()] += 1;
    }
    tallies_from_counts(counts, slot_minutes)
}

/// Same totals computed from groups, weighting each by its length.
pub fn tally_groups(groups: &[ActivityGroup], slot_minutes: u32) -> Vec<CategoryTally> {
    let mut counts = [0usize; 3];
    for group in groups {
        counts[group.category.index()] += group.duration_slots;
    }
    tallies_from_counts(counts, slot_minutes)
}

pub fn summarize(scenario: Scenario, groups: &[ActivityGroup], slot_minutes: u32) -> ScenarioSummary {
    let tallies = tally_groups(groups, slot_minutes);
    let total_slots = tallies.iter().map(|t| t.slot_count).sum();
    let total_hours = tallies.iter().map(|t| t.hours).sum();

    ScenarioSummary {
        scenario,
        label: scenario.label().to_string(),
        tallies,
        total_slots,
        total_hours,
        group_count: groups.len(),
    }
}

/// Hours gained or lost per category when the kid is in the picture.
pub fn compare(with_kid: &ScenarioSummary, without_kid: &ScenarioSummary) -> Vec<CategoryComparison> {
    Category::ALL
        .iter()
        .map(|&category| {
            let with_kid_hours = with_kid.hours(category);
            let without_kid_hours = without_kid.hours(category);
            let difference_hours = with_kid_hours - without_kid_hours;
            let percentage_change = if without_kid_hours > 0.0 {
                difference_hours / without_kid_hours * 100.0
            } else {
                0.0
            };
            CategoryComparison {
                category,
                with_kid_hours,
                without_kid_hours,
                difference_hours,
                percentage_change,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::grouper::group_slots;

    fn slots(categories: &[Category]) -> Vec<TimeSlot> {
        categories
            .iter()
            .enumerate()
            .map(|(i, &category)| TimeSlot {
                offset_minutes: i as u32 * 15,
                slot_index: i,
                activity: category.label().to_string(),
                category,
            })
            .collect()
    }

    #[test]
    fn test_tally_slots_counts_and_hours() {
        let list = slots(&[Category::Personal, Category::Personal, Category::Work, Category::Kid]);
        let tallies = tally_slots(&list, 15);

        assert_eq!(tallies.len(), 3);
        assert_eq!(tallies[0].category, Category::Personal);
        assert_eq!(tallies[0].slot_count, 2);
        assert_eq!(tallies[0].minutes, 30);
        assert_eq!(tallies[0].hours, 0.5);
        assert_eq!(tallies[0].percentage_of_day, 50);
        assert_eq!(tallies[1].percentage_of_day, 25);
        assert_eq!(tallies[2].percentage_of_day, 25);
    }

    #[test]
    fn test_independent_rounding_is_not_fixed_up() {
        // 1/3 each: 33 + 33 + 33 = 99.
        let list = slots(&[Category::Personal, Category::Work, Category::Kid]);
        let tallies = tally_slots(&list, 15);
        let total: u32 = tallies.iter().map(|t| t.percentage_of_day).sum();
        assert_eq!(total, 99);
    }

    #[test]
    fn test_tally_groups_matches_tally_slots() {
        let list = slots(&[
            Category::Work,
            Category::Work,
            Category::Kid,
            Category::Personal,
            Category::Personal,
            Category::Personal,
        ]);
        let groups = group_slots(&list, 15);
        assert_eq!(tally_groups(&groups, 15), tally_slots(&list, 15));
    }

    #[test]
    fn test_empty_input_has_zero_percentages() {
        let tallies = tally_slots(&[], 15);
        assert!(tallies.iter().all(|t| t.slot_count == 0 && t.percentage_of_day == 0));
    }

    #[test]
    fn test_single_category_day_is_full() {
        let list = slots(&[Category::Personal; 96]);
        let summary = summarize(Scenario::WithoutKid, &group_slots(&list, 15), 15);
        assert_eq!(summary.group_count, 1);
        assert_eq!(summary.total_slots, 96);
        assert_eq!(summary.total_hours, 24.0);
        assert_eq!(summary.tally(Category::Personal).unwrap().percentage_of_day, 100);
        assert_eq!(summary.tally(Category::Kid).unwrap().percentage_of_day, 0);
    }

    #[test]
    fn test_compare() {
        let with_kid = summarize(
            Scenario::WithKid,
            &group_slots(&slots(&[Category::Kid, Category::Kid, Category::Work, Category::Personal]), 15),
            15,
        );
        let without_kid = summarize(
            Scenario::WithoutKid,
            &group_slots(&slots(&[Category::Work, Category::Work, Category::Personal, Category::Personal]), 15),
            15,
        );
        let rows = compare(&with_kid, &without_kid);

        let work = &rows[1];
        assert_eq!(work.category, Category::Work);
        assert_eq!(work.with_kid_hours, 0.25);
        assert_eq!(work.without_kid_hours, 0.5);
        assert_eq!(work.difference_hours, -0.25);
        assert_eq!(work.percentage_change, -50.0);

        let kid = &rows[2];
        assert_eq!(kid.difference_hours, 0.5);
        assert_eq!(kid.percentage_change, 0.0);
    }
}
