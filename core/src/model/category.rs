use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a quarter hour of the day went.
///
/// `Self` is a keyword, so the personal-time bucket is `Personal` in code and
/// `"Self"` everywhere it is written out.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    #[serde(rename = "Self")]
    Personal,
    Work,
    Kid,
}

impl Default for Category {
    fn default() -> Self {
        Category::Personal
    }
}

impl Category {
    /// Display order used by every tally and report.
    pub const ALL: [Category; 3] = [Category::Personal, Category::Work, Category::Kid];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Personal => "Self",
            Category::Work => "Work",
            Category::Kid => "Kid",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Category::Personal => 0,
            Category::Work => 1,
            Category::Kid => 2,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps a free-text category cell onto the closed set. Never fails: blank or
/// unknown labels count as personal time.
pub fn normalize_category(raw: &str) -> Category {
    match raw.trim().to_lowercase().as_str() {
        "kid" | "child" | "children" => Category::Kid,
        "work" => Category::Work,
        _ => Category::Personal,
    }
}

const PERSONAL_KEYWORDS: [&str; 3] = ["work out", "workout", "gym"];
const WORK_KEYWORDS: [&str; 5] = ["work", "meeting", "office", "commute", "travel to"];
const KID_KEYWORDS: [&str; 7] = ["son", "kid", "child", "school", "band", "practice", "pick up"];

/// Guesses a category from the activity text alone. Interval data carries no
/// category column, so this is the only signal there.
pub fn categorize_activity(activity: &str) -> Category {
    let lower = activity.to_lowercase();
    let has = |keywords: &[&str]| keywords.iter().any(|k| contains_word(&lower, k));

    if has(&PERSONAL_KEYWORDS) {
        return Category::Personal;
    }
    // Work before kid: "work event after school" is a work slot.
    if has(&WORK_KEYWORDS) {
        return Category::Work;
    }
    if has(&KID_KEYWORDS) {
        return Category::Kid;
    }
    Category::Personal
}

// Keyword must start at a word boundary, so "personal" does not match "son".
// Trailing text is allowed ("kids", "children", "son's").
fn contains_word(haystack: &str, needle: &str) -> bool {
    haystack.match_indices(needle).any(|(pos, _)| {
        haystack[..pos]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_known_labels() {
        assert_eq!(normalize_category("Kid"), Category::Kid);
        assert_eq!(normalize_category("  CHILD "), Category::Kid);
        assert_eq!(normalize_category("children"), Category::Kid);
        assert_eq!(normalize_category("work"), Category::Work);
        assert_eq!(normalize_category("Self"), Category::Personal);
    }

    #[test]
    fn test_normalize_defaults_to_self() {
        assert_eq!(normalize_category(""), Category::Personal);
        assert_eq!(normalize_category("errands"), Category::Personal);
        assert_eq!(normalize_category("   "), Category::Personal);
    }

    #[test]
    fn test_categorize_activity() {
        assert_eq!(categorize_activity("Take son to school"), Category::Kid);
        assert_eq!(categorize_activity("head to work event"), Category::Work);
        assert_eq!(categorize_activity("Team meeting"), Category::Work);
        assert_eq!(categorize_activity("Pick up from band practice"), Category::Kid);
        assert_eq!(categorize_activity("Sleep"), Category::Personal);
        assert_eq!(categorize_activity("Work out"), Category::Personal);
        assert_eq!(categorize_activity("Personal time"), Category::Personal);
        assert_eq!(categorize_activity("Wake up son."), Category::Kid);
    }

    #[test]
    fn test_serde_uses_self_label() {
        let json = serde_json::to_string(&Category::Personal).unwrap();
        assert_eq!(json, "\"Self\"");
        let back: Category = serde_json::from_str("\"Self\"").unwrap();
        assert_eq!(back, Category::Personal);
        assert_eq!(Category::Kid.to_string(), "Kid");
    }
}
