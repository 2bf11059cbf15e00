pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use config::{CarryForwardSeed, DayWindow, StoryConfig};
pub use error::DataError;
pub use input::ColumnSchema;
pub use model::category::{categorize_activity, normalize_category, Category};
pub use model::record::{IntervalActivity, IntervalDataset, IntervalTrack, RawRecord};
pub use model::group::{ActivityGroup, GroupSpan, ScenarioGroups, TransitionPoint};
pub use model::slot::{slots_for, ActivityEntry, Scenario, SlotRow, TimeSlot, SLOT_MINUTES};
pub use model::stats::{CategoryComparison, CategoryTally, ScenarioSummary};
pub use model::story::{DataOrigin, DayStory};
pub use model::employment::{EmploymentRate, EmploymentRecord, RateSummary};
pub use repository::{
    save_cleaned_csv, save_rates_csv, Dataset, DatasetSource, FallbackDataset,
    FileCensusRepository, FileDatasetRepository, IntervalFileRepository,
};
pub use service::aggregator::{compare, summarize, tally_groups, tally_slots};
pub use service::rates::{compute_rates, summarize_rates};
pub use service::grouper::{flatten, group_scenarios, group_slots, transition_points};
pub use service::slot_builder::{build_rows, build_rows_from_intervals, BuildOptions, CarryForward};
pub use time::parse_clock;
pub use usecase::story::StoryUseCase;
