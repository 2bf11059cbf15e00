use serde::{Deserialize, Serialize};

use crate::model::category::Category;
use crate::model::slot::Scenario;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTally {
    pub category: Category,
    pub slot_count: usize,
    pub minutes: u32,
    pub hours: f64,
    /// Rounded on its own; the three values may sum to 99 or 101.
    pub percentage_of_day: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioSummary {
    pub scenario: Scenario,
    pub label: String,
    /// Always Self, Work, Kid in that order.
    pub tallies: Vec<CategoryTally>,
    pub total_slots: usize,
    pub total_hours: f64,
    pub group_count: usize,
}

impl ScenarioSummary {
    pub fn tally(&self, category: Category) -> Option<&CategoryTally> {
        self.tallies.iter().find(|t| t.category == category)
    }

    pub fn hours(&self, category: Category) -> f64 {
        self.tally(category).map(|t| t.hours).unwrap_or(0.0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryComparison {
    pub category: Category,
    pub with_kid_hours: f64,
    pub without_kid_hours: f64,
    pub difference_hours: f64,
    /// Relative to the without-kid day; 0 when that day has none of it.
    pub percentage_change: f64,
}
