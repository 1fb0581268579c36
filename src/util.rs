/// Format a second count as `HH:MM:SS`, e.g. 3661 -> "01:01:01".
/// Negative inputs clamp to zero.
pub fn make_time_string(total_secs: i64) -> String {
    let total_secs = total_secs.max(0);
    let hours = total_secs / 3600;
    let mins = (total_secs % 3600) / 60;
    let secs = (total_secs % 3600) % 60;
    format!("{:02}:{:02}:{:02}", hours, mins, secs)
}
