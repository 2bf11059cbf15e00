use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::input::ColumnSchema;
use crate::model::category::Category;
use crate::model::slot::{ActivityEntry, SLOT_MINUTES};

pub const DEFAULT_DATA_FILE: &str = "working-mom-data-cleaned.csv";
const CONFIG_DIR_NAME: &str = ".daysplit";
const CONFIG_FILE_NAME: &str = "config.json";
/// US Eastern standard time, the zone the bundled timeline was recorded in.
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = -5 * 60;
/// Fixed offsets must stay strictly inside one day.
const MAX_UTC_OFFSET_MINUTES: i32 = 24 * 60 - 1;

/// How much of the modeled day the grid covers.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DayWindow {
    /// 4:00 through 3:45 the next morning.
    FullDay,
    /// 4:00 through the 0:00 slot.
    UntilMidnight,
}

impl Default for DayWindow {
    fn default() -> Self {
        DayWindow::UntilMidnight
    }
}

impl DayWindow {
    /// Offset of the last slot inside the window, inclusive.
    pub fn last_offset(&self, slot_minutes: u32) -> u32 {
        match self {
            DayWindow::FullDay => 24 * 60 - slot_minutes,
            DayWindow::UntilMidnight => 20 * 60,
        }
    }

    pub fn slot_count(&self, slot_minutes: u32) -> usize {
        (self.last_offset(slot_minutes) / slot_minutes) as usize + 1
    }
}

/// Value used for a blank activity before the scenario has any history.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CarryForwardSeed {
    pub activity: String,
    pub category: Category,
}

impl Default for CarryForwardSeed {
    fn default() -> Self {
        Self {
            activity: "Sleep".to_string(),
            category: Category::Personal,
        }
    }
}

impl CarryForwardSeed {
    pub fn entry(&self) -> ActivityEntry {
        ActivityEntry::new(self.activity.clone(), self.category)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct StoryConfig {
    pub data_path: PathBuf,
    pub intervals_path: Option<PathBuf>,
    pub schema: ColumnSchema,
    pub window: DayWindow,
    pub slot_minutes: u32,
    pub carry_forward: CarryForwardSeed,
    /// Offset from UTC of the wall clock that interval timestamps are read in.
    pub utc_offset_minutes: i32,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_FILE),
            intervals_path: None,
            schema: ColumnSchema::default(),
            window: DayWindow::default(),
            slot_minutes: SLOT_MINUTES,
            carry_forward: CarryForwardSeed::default(),
            utc_offset_minutes: DEFAULT_UTC_OFFSET_MINUTES,
        }
    }
}

impl StoryConfig {
    /// `~/.daysplit/config.json`, if a home directory exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Could not read config {}", path.display()))?;
        let config: StoryConfig = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        config.check()?;
        Ok(config)
    }

    /// Explicit path first, then the default location, then built-in values.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    fn check(&self) -> Result<()> {
        if self.slot_minutes == 0 || 60 % self.slot_minutes != 0 {
            return Err(anyhow!(
                "slotMinutes must divide an hour, got {}",
                self.slot_minutes
            ));
        }
        if !(-MAX_UTC_OFFSET_MINUTES..=MAX_UTC_OFFSET_MINUTES).contains(&self.utc_offset_minutes) {
            return Err(anyhow!(
                "utcOffsetMinutes must be within ±{}, got {}",
                MAX_UTC_OFFSET_MINUTES,
                self.utc_offset_minutes
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_window_slot_counts() {
        assert_eq!(DayWindow::FullDay.slot_count(15), 96);
        assert_eq!(DayWindow::UntilMidnight.slot_count(15), 81);
        assert_eq!(DayWindow::FullDay.last_offset(15), 1425);
    }

    #[test]
    fn test_load_partial_config_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"dataPath": "day.json", "window": "fullDay"}}"#).unwrap();

        let config = StoryConfig::load(file.path()).unwrap();
        assert_eq!(config.data_path, PathBuf::from("day.json"));
        assert_eq!(config.window, DayWindow::FullDay);
        assert_eq!(config.slot_minutes, 15);
        assert_eq!(config.schema, ColumnSchema::default());
        assert_eq!(config.carry_forward.activity, "Sleep");
    }

    #[test]
    fn test_load_rejects_bad_slot_width() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"slotMinutes": 7}}"#).unwrap();
        assert!(StoryConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_load_rejects_out_of_range_utc_offset() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"utcOffsetMinutes": 2147483647}}"#).unwrap();
        assert!(StoryConfig::load(file.path()).is_err());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"utcOffsetMinutes": 330}}"#).unwrap();
        assert_eq!(StoryConfig::load(file.path()).unwrap().utc_offset_minutes, 330);
    }

    #[test]
    fn test_schema_keys_are_camel_case() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"dataPath": "day.csv", "schema": {{"time": "When", "withKidActivity": "Kid day"}}}}"#
        )
        .unwrap();

        let config = StoryConfig::load(file.path()).unwrap();
        assert_eq!(config.schema.time, "When");
        assert_eq!(config.schema.with_kid_activity, "Kid day");
        assert_eq!(config.schema.without_kid_activity, ColumnSchema::default().without_kid_activity);

        let json = serde_json::to_value(&config).unwrap();
        assert!(json["schema"].get("withoutKidCategory").is_some());
        assert_eq!(json["utcOffsetMinutes"], -300);
    }
}
