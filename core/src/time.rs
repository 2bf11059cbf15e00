use chrono::{NaiveTime, Timelike};

/// The modeled day starts at 4:00 and runs to 4:00 the next morning.
pub const DAY_START_HOUR: u32 = 4;
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parses an `H:MM` wall clock into minutes after the 4:00 anchor.
///
/// Hours before 4 belong to the following day, so `1:00` is 1260 and the
/// offsets of one modeled day always increase. Returns `None` on anything
/// that is not a valid 24h clock; the caller decides whether to skip the row.
pub fn parse_clock(input: &str) -> Option<u32> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    let time = NaiveTime::parse_from_str(input, "%H:%M").ok()?;
    Some(offset_of(time.hour(), time.minute()))
}

fn offset_of(hour: u32, minute: u32) -> u32 {
    if hour >= DAY_START_HOUR {
        (hour - DAY_START_HOUR) * 60 + minute
    } else {
        (hour + 24 - DAY_START_HOUR) * 60 + minute
    }
}

/// Wall clock (`H:MM`, no leading zero) for an offset after the anchor.
pub fn format_offset(offset_minutes: u32) -> String {
    let absolute = (offset_minutes + DAY_START_HOUR * 60) % MINUTES_PER_DAY;
    format!("{}:{:02}", absolute / 60, absolute % 60)
}

/// 12-hour display form, e.g. "16:30" -> "4:30 PM".
pub fn format_12h(input: &str) -> Option<String> {
    let time = NaiveTime::parse_from_str(input.trim(), "%H:%M").ok()?;
    let period = if time.hour() < 12 { "AM" } else { "PM" };
    let hour = match time.hour() % 12 {
        0 => 12,
        h => h,
    };
    Some(format!("{}:{:02} {}", hour, time.minute(), period))
}

/// Human duration of a run of slots: "45 minutes", "1h 30m", "2 hours".
pub fn format_duration(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{} minutes", minutes);
    }
    let hours = minutes / 60;
    let mins = minutes % 60;
    if mins > 0 {
        format!("{}h {}m", hours, mins)
    } else if hours == 1 {
        "1 hour".to_string()
    } else {
        format!("{} hours", hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clock_anchor() {
        assert_eq!(parse_clock("4:00"), Some(0));
        assert_eq!(parse_clock("4:15"), Some(15));
        assert_eq!(parse_clock("12:00"), Some(480));
        assert_eq!(parse_clock("23:45"), Some(1185));
    }

    #[test]
    fn test_parse_clock_wraps_after_midnight() {
        assert_eq!(parse_clock("0:00"), Some(1200));
        assert_eq!(parse_clock("1:00"), Some(1260));
        assert_eq!(parse_clock("3:45"), Some(1425));
    }

    #[test]
    fn test_parse_clock_rejects_garbage() {
        assert_eq!(parse_clock(""), None);
        assert_eq!(parse_clock("noon"), None);
        assert_eq!(parse_clock("25:00"), None);
        assert_eq!(parse_clock("7"), None);
    }

    #[test]
    fn test_parse_clock_tolerates_padding() {
        assert_eq!(parse_clock(" 07:30 "), Some(210));
    }

    #[test]
    fn test_format_offset() {
        assert_eq!(format_offset(0), "4:00");
        assert_eq!(format_offset(1200), "0:00");
        assert_eq!(format_offset(1425), "3:45");
    }

    #[test]
    fn test_format_12h() {
        assert_eq!(format_12h("0:15").as_deref(), Some("12:15 AM"));
        assert_eq!(format_12h("12:00").as_deref(), Some("12:00 PM"));
        assert_eq!(format_12h("16:30").as_deref(), Some("4:30 PM"));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(45), "45 minutes");
        assert_eq!(format_duration(60), "1 hour");
        assert_eq!(format_duration(90), "1h 30m");
        assert_eq!(format_duration(120), "2 hours");
    }
}
