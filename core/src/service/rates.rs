use crate::model::employment::{EmploymentRate, EmploymentRecord, RateSummary};

fn rate(working: f64, non_working: f64) -> Option<f64> {
    let total = working + non_working;
    if total <= 0.0 || !total.is_finite() {
        return None;
    }
    Some((working / total * 10_000.0).round() / 10_000.0)
}

/// Share of each group that is employed, rounded to four places.
pub fn compute_rates(records: &[EmploymentRecord]) -> Vec<EmploymentRate> {
    records
        .iter()
        .map(|r| EmploymentRate {
            year: r.year,
            actual_year: r.actual_year(),
            under6: rate(r.working_mom_under6yos_estimate, r.non_working_mom_under6yos_estimate),
            six_to17: rate(r.working_mom_6to17yos_estimate, r.non_working_mom_6to17yos_estimate),
            all_women: rate(r.working_women_estimate, r.non_working_women_estimate),
        })
        .collect()
}

/// Min, max and mean over the years where the series is defined.
pub fn summarize_rates<F>(rates: &[EmploymentRate], series: F) -> Option<RateSummary>
where
    F: Fn(&EmploymentRate) -> Option<f64>,
{
    let values: Vec<f64> = rates.iter().filter_map(series).collect();
    if values.is_empty() {
        return None;
    }
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    Some(RateSummary { min, max, mean })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: u32, under6: (f64, f64), women: (f64, f64)) -> EmploymentRecord {
        EmploymentRecord {
            year,
            working_mom_under6yos_estimate: under6.0,
            non_working_mom_under6yos_estimate: under6.1,
            working_mom_6to17yos_estimate: 0.0,
            non_working_mom_6to17yos_estimate: 0.0,
            working_women_estimate: women.0,
            non_working_women_estimate: women.1,
        }
    }

    #[test]
    fn test_compute_rates() {
        let rates = compute_rates(&[record(1, (75.0, 25.0), (2.0, 1.0))]);
        assert_eq!(rates[0].actual_year, Some(2015));
        assert_eq!(rates[0].under6, Some(0.75));
        assert_eq!(rates[0].all_women, Some(0.6667));
        assert_eq!(rates[0].six_to17, None);
    }

    #[test]
    fn test_summarize_rates_skips_undefined() {
        let rates = compute_rates(&[
            record(1, (70.0, 30.0), (0.0, 0.0)),
            record(2, (80.0, 20.0), (0.0, 0.0)),
            record(3, (0.0, 0.0), (0.0, 0.0)),
        ]);
        let summary = summarize_rates(&rates, |r| r.under6).unwrap();
        assert_eq!(summary.min, 0.7);
        assert_eq!(summary.max, 0.8);
        assert!((summary.mean - 0.75).abs() < 1e-9);
        assert!(summarize_rates(&rates, |r| r.all_women).is_none());
    }
}
