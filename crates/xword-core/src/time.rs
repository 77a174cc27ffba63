//! Elapsed-time formatting for the solve timer

/// Format elapsed seconds as `HH:MM:SS`, dropping the hours when zero.
///
/// ```
/// use xword_core::format_elapsed;
///
/// assert_eq!(format_elapsed(3661), "01:01:01");
/// assert_eq!(format_elapsed(59), "00:59");
/// ```
pub fn format_elapsed(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours == 0 {
        format!("{minutes:02}:{secs:02}")
    } else {
        format!("{hours:02}:{minutes:02}:{secs:02}")
    }
}
