use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::DataError;
use crate::model::record::RawRecord;

/// Declared header names of the slot dataset. Headers are matched exactly
/// (surrounding whitespace ignored); a missing one fails the load instead of
/// falling back to some similar-looking column.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ColumnSchema {
    pub time: String,
    pub with_kid_activity: String,
    pub with_kid_category: String,
    pub without_kid_activity: String,
    pub without_kid_category: String,
}

impl Default for ColumnSchema {
    fn default() -> Self {
        Self {
            time: "Time".to_string(),
            with_kid_activity: "Things she did(With kid)".to_string(),
            with_kid_category: "Categories(with kid)".to_string(),
            without_kid_activity: "Things she did(Without kid)".to_string(),
            without_kid_category: "Categories(without kid)".to_string(),
        }
    }
}

/// Column positions resolved against one concrete header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    pub time: usize,
    pub with_kid_activity: usize,
    pub with_kid_category: usize,
    pub without_kid_activity: usize,
    pub without_kid_category: usize,
}

impl ColumnSchema {
    fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("time", self.time.as_str()),
            ("with-kid activity", self.with_kid_activity.as_str()),
            ("with-kid category", self.with_kid_category.as_str()),
            ("without-kid activity", self.without_kid_activity.as_str()),
            ("without-kid category", self.without_kid_category.as_str()),
        ]
    }

    /// Header names in output order, for writing cleaned data back out.
    pub fn headers(&self) -> [&str; 5] {
        self.fields().map(|(_, name)| name)
    }

    pub fn validate<S: AsRef<str>>(&self, headers: &[S]) -> Result<ColumnIndex, DataError> {
        let find = |field: &'static str, expected: &str| {
            headers
                .iter()
                .position(|h| h.as_ref().trim() == expected.trim())
                .ok_or_else(|| DataError::MissingColumn {
                    field,
                    expected: expected.to_string(),
                    found: headers.iter().map(|h| h.as_ref().to_string()).collect(),
                })
        };
        let [time, wk_act, wk_cat, wo_act, wo_cat] = self.fields();

        Ok(ColumnIndex {
            time: find(time.0, time.1)?,
            with_kid_activity: find(wk_act.0, wk_act.1)?,
            with_kid_category: find(wk_cat.0, wk_cat.1)?,
            without_kid_activity: find(wo_act.0, wo_act.1)?,
            without_kid_category: find(wo_cat.0, wo_cat.1)?,
        })
    }

    /// Validates the keys of the first object and maps every object through
    /// them. Non-string values (numbers, null) are rendered as text.
    pub fn records_from_objects(
        &self,
        objects: &[Map<String, Value>],
    ) -> Result<Vec<RawRecord>, DataError> {
        let Some(first) = objects.first() else {
            return Ok(Vec::new());
        };
        let keys: Vec<&String> = first.keys().collect();
        self.validate(&keys)?;

        let cell = |object: &Map<String, Value>, header: &str| -> String {
            let value = object
                .iter()
                .find(|(k, _)| k.trim() == header.trim())
                .map(|(_, v)| v);
            match value {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Null) | None => String::new(),
                Some(other) => other.to_string(),
            }
        };

        Ok(objects
            .iter()
            .map(|o| RawRecord {
                time: cell(o, &self.time),
                with_kid_activity: cell(o, &self.with_kid_activity),
                with_kid_category: cell(o, &self.with_kid_category),
                without_kid_activity: cell(o, &self.without_kid_activity),
                without_kid_category: cell(o, &self.without_kid_category),
            })
            .collect())
    }
}

impl ColumnIndex {
    pub fn record(&self, row: &csv::StringRecord) -> RawRecord {
        let cell = |i: usize| row.get(i).unwrap_or("").to_string();
        RawRecord {
            time: cell(self.time),
            with_kid_activity: cell(self.with_kid_activity),
            with_kid_category: cell(self.with_kid_category),
            without_kid_activity: cell(self.without_kid_activity),
            without_kid_category: cell(self.without_kid_category),
        }
    }
}
