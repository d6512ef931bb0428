//! Text formatting helpers for badges and labels.

/// Formats a video duration as `m:ss` with truncated seconds.
///
/// Matches the duration badge convention of photo grids: minutes are not
/// zero-padded, seconds are.
pub fn format_duration(duration_secs: f64) -> String {
    let total = duration_secs.max(0.0) as u64;
    let minutes = total / 60;
    let seconds = total % 60;
    format!("{}:{:02}", minutes, seconds)
}

/// Builds the bottom-bar selection summary, singular/plural aware.
pub fn selection_count_label(count: usize) -> String {
    let noun = if count == 1 { "Item" } else { "Items" };
    format!("{} {} Selected", count, noun)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_truncates_and_pads_seconds() {
        assert_eq!(format_duration(0.0), "0:00");
        assert_eq!(format_duration(7.9), "0:07");
        assert_eq!(format_duration(60.0), "1:00");
        assert_eq!(format_duration(83.4), "1:23");
        assert_eq!(format_duration(754.0), "12:34");
        assert_eq!(format_duration(-3.0), "0:00");
    }

    #[test]
    fn count_label_pluralizes() {
        assert_eq!(selection_count_label(1), "1 Item Selected");
        assert_eq!(selection_count_label(2), "2 Items Selected");
        assert_eq!(selection_count_label(0), "0 Items Selected");
    }
}
