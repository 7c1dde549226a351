/// Turn a number of milliseconds into a readable race time,
/// f.e. '01:02:05' for '3725000'. Hours are not capped at 24.
///
/// Missing and non-positive times format as the empty string.
pub(super) fn format_duration(millis: Option<i64>) -> String {
    let millis = match millis {
        Some(ms) if ms > 0 => ms,
        _ => return String::new(),
    };
    let total_secs = millis / 1000;
    let hours = total_secs / 3600;
    let mins = (total_secs % 3600) / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}:{:02}", hours, mins, secs)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!("", format_duration(None));
        assert_eq!("", format_duration(Some(0)));
        assert_eq!("", format_duration(Some(-5)));
        assert_eq!("00:00:05", format_duration(Some(5000)));
        assert_eq!("01:01:01", format_duration(Some(3_661_000)));
        assert_eq!("01:02:05", format_duration(Some(3_725_000)));
        // hours are unbounded
        assert_eq!("25:00:00", format_duration(Some(90_000_000)));
    }

    #[test]
    fn test_format_duration_floors_to_whole_seconds() {
        assert_eq!("00:00:05", format_duration(Some(5999)));
    }
}
