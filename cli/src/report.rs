use daysplit_core::time::format_12h;
use daysplit_core::{
    summarize_rates, ActivityGroup, CategoryComparison, DataOrigin, DayStory, EmploymentRate,
    GroupSpan, RateSummary, ScenarioSummary, TransitionPoint,
};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct GroupRow {
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "End")]
    end: String,
    #[tabled(rename = "Duration")]
    duration: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Activity")]
    activity: String,
}

#[derive(Tabled)]
struct TallyRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Slots")]
    slots: usize,
    #[tabled(rename = "Hours")]
    hours: String,
    #[tabled(rename = "% of day")]
    percentage: String,
}

#[derive(Tabled)]
struct ComparisonRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "With kid (h)")]
    with_kid: String,
    #[tabled(rename = "Without kid (h)")]
    without_kid: String,
    #[tabled(rename = "Diff (h)")]
    difference: String,
    #[tabled(rename = "Change")]
    change: String,
}

#[derive(Tabled)]
struct TransitionRow {
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "With kid")]
    with_kid: String,
    #[tabled(rename = "Without kid")]
    without_kid: String,
}

#[derive(Tabled)]
struct RateRow {
    #[tabled(rename = "Year")]
    year: String,
    #[tabled(rename = "Moms, kids < 6")]
    under6: String,
    #[tabled(rename = "Moms, kids 6-17")]
    six_to17: String,
    #[tabled(rename = "All women")]
    all_women: String,
}

fn styled(table: &mut Table) -> String {
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    table.to_string()
}

fn percent(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.1}%", v * 100.0))
        .unwrap_or_else(|| "-".to_string())
}

pub fn source_note(story: &DayStory) {
    if story.source == DataOrigin::Fallback {
        println!("\x1b[33mDataset unavailable, showing the built-in fallback day.\x1b[0m");
    }
}

pub fn show_groups(title: &str, groups: &[ActivityGroup]) {
    println!("\n\x1b[1;36m{}\x1b[0m ({} blocks)", title, groups.len());
    let rows: Vec<GroupRow> = groups
        .iter()
        .map(|g| GroupRow {
            start: g.start_time(),
            end: g.end_time(),
            duration: g.duration_label(),
            category: g.category.to_string(),
            activity: g.activity.clone(),
        })
        .collect();
    println!("{}", styled(&mut Table::new(rows)));
}

pub fn show_summary(summary: &ScenarioSummary) {
    println!(
        "\n\x1b[1;36m{}\x1b[0m ({:.2}h over {} slots, {} blocks)",
        summary.label, summary.total_hours, summary.total_slots, summary.group_count
    );
    let rows: Vec<TallyRow> = summary
        .tallies
        .iter()
        .map(|t| TallyRow {
            category: t.category.to_string(),
            slots: t.slot_count,
            hours: format!("{:.2}", t.hours),
            percentage: format!("{}%", t.percentage_of_day),
        })
        .collect();
    println!("{}", styled(&mut Table::new(rows)));
}

pub fn show_comparisons(comparisons: &[CategoryComparison]) {
    println!("\n\x1b[1;36mWith vs without kid\x1b[0m");
    let rows: Vec<ComparisonRow> = comparisons
        .iter()
        .map(|c| ComparisonRow {
            category: c.category.to_string(),
            with_kid: format!("{:.2}", c.with_kid_hours),
            without_kid: format!("{:.2}", c.without_kid_hours),
            difference: format!("{:+.2}", c.difference_hours),
            change: if c.without_kid_hours > 0.0 {
                format!("{:+.0}%", c.percentage_change)
            } else {
                "-".to_string()
            },
        })
        .collect();
    println!("{}", styled(&mut Table::new(rows)));
}

fn transition_rows(points: &[TransitionPoint]) -> Vec<TransitionRow> {
    let describe = |span: &Option<GroupSpan>| {
        span.as_ref()
            .map(|s| format!("{} [{}]", s.activity, s.category))
            .unwrap_or_else(|| "-".to_string())
    };
    points
        .iter()
        .map(|p| TransitionRow {
            time: format_12h(&p.time).unwrap_or_else(|| p.time.clone()),
            with_kid: describe(&p.with_kid),
            without_kid: describe(&p.without_kid),
        })
        .collect()
}

pub fn show_transitions(points: &[TransitionPoint]) {
    println!("{}", styled(&mut Table::new(transition_rows(points))));
}

pub fn show_rates(rates: &[EmploymentRate]) {
    let rows: Vec<RateRow> = rates
        .iter()
        .map(|r| RateRow {
            year: r
                .actual_year
                .map(|y| y.to_string())
                .unwrap_or_else(|| format!("#{}", r.year)),
            under6: percent(r.under6),
            six_to17: percent(r.six_to17),
            all_women: percent(r.all_women),
        })
        .collect();
    println!("{}", styled(&mut Table::new(rows)));

    let line = |name: &str, summary: Option<RateSummary>| match summary {
        Some(s) => println!(
            "{:<18} min {:.1}%  max {:.1}%  mean {:.1}%",
            name,
            s.min * 100.0,
            s.max * 100.0,
            s.mean * 100.0
        ),
        None => println!("{:<18} no data", name),
    };
    line("Moms, kids < 6", summarize_rates(rates, |r| r.under6));
    line("Moms, kids 6-17", summarize_rates(rates, |r| r.six_to17));
    line("All women", summarize_rates(rates, |r| r.all_women));
}

#[cfg(test)]
mod tests {
    use super::*;
    use daysplit_core::Category;

    #[test]
    fn test_transition_rows_use_12h_clock() {
        let span = GroupSpan {
            activity: "Work".to_string(),
            category: Category::Work,
            start_offset: 720,
            end_offset: 780,
            start_time: "16:00".to_string(),
            end_time: "17:00".to_string(),
            duration_minutes: 60,
        };
        let points = vec![TransitionPoint {
            offset_minutes: 720,
            time: "16:00".to_string(),
            with_kid: Some(span),
            without_kid: None,
        }];

        let rows = transition_rows(&points);
        assert_eq!(rows[0].time, "4:00 PM");
        assert_eq!(rows[0].with_kid, "Work [Work]");
        assert_eq!(rows[0].without_kid, "-");
    }
}
