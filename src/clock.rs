use chrono::NaiveTime;

/// Formats a wall-clock time as `HH:MM:SS`, or `HH:MM` with seconds hidden.
pub fn time_text(time: NaiveTime, show_seconds: bool) -> String {
    if show_seconds {
        time.format("%H:%M:%S").to_string()
    } else {
        time.format("%H:%M").to_string()
    }
}

/// Widest representative string for the configured format, used to measure
/// the label before the window is sized.
pub fn placeholder_text(show_seconds: bool) -> &'static str {
    if show_seconds {
        "00:00:00"
    } else {
        "00:00"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hms(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn with_seconds_matches_hh_mm_ss() {
        assert_eq!(time_text(hms(0, 0, 0), true), "00:00:00");
        assert_eq!(time_text(hms(9, 5, 7), true), "09:05:07");
        assert_eq!(time_text(hms(23, 59, 59), true), "23:59:59");
    }

    #[test]
    fn without_seconds_matches_hh_mm() {
        assert_eq!(time_text(hms(0, 0, 30), false), "00:00");
        assert_eq!(time_text(hms(18, 40, 59), false), "18:40");
    }

    #[test]
    fn placeholder_matches_format_width() {
        assert_eq!(placeholder_text(true).len(), "23:59:59".len());
        assert_eq!(placeholder_text(false).len(), "23:59".len());
    }
}
