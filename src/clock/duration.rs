//! `MM:SS` duration formatting.

/// Formats whole minutes as `MM:00`.
///
/// Minutes are zero-padded to two digits and are not wrapped into hours,
/// so `minutes_to_duration(90)` is `"90:00"`.
pub fn minutes_to_duration(minutes: u32) -> String {
    format!("{:02}:00", minutes)
}

/// Formats a number of seconds as `MM:SS`.
pub fn seconds_to_duration(total_seconds: u32) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}", minutes, seconds)
}
