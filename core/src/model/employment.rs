use serde::{Deserialize, Serialize};

/// Survey years behind the census `year` index (1-based). 2020 had no release.
pub const SURVEY_YEARS: [i32; 8] = [2015, 2016, 2017, 2018, 2019, 2021, 2022, 2023];

/// One census row of labour force estimates.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EmploymentRecord {
    pub year: u32,
    pub working_mom_under6yos_estimate: f64,
    pub non_working_mom_under6yos_estimate: f64,
    #[serde(rename = "working_mom_6yosto17yos_estimate")]
    pub working_mom_6to17yos_estimate: f64,
    #[serde(rename = "non_working_mom_6yosto17yos_estimate")]
    pub non_working_mom_6to17yos_estimate: f64,
    pub working_women_estimate: f64,
    pub non_working_women_estimate: f64,
}

impl EmploymentRecord {
    pub fn actual_year(&self) -> Option<i32> {
        let index = (self.year as usize).checked_sub(1)?;
        SURVEY_YEARS.get(index).copied()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentRate {
    pub year: u32,
    pub actual_year: Option<i32>,
    pub under6: Option<f64>,
    pub six_to17: Option<f64>,
    pub all_women: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct RateSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}
