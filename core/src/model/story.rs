use serde::{Deserialize, Serialize};

use crate::model::group::{ScenarioGroups, TransitionPoint};
use crate::model::slot::SlotRow;
use crate::model::stats::{CategoryComparison, ScenarioSummary};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DataOrigin {
    Dataset,
    Fallback,
}

/// Everything one render pass needs, computed once per load.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DayStory {
    pub source: DataOrigin,
    pub slot_minutes: u32,
    pub rows: Vec<SlotRow>,
    pub groups: ScenarioGroups,
    pub with_kid: ScenarioSummary,
    pub without_kid: ScenarioSummary,
    pub comparisons: Vec<CategoryComparison>,
    pub transitions: Vec<TransitionPoint>,
}
