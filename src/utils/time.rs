//! Time utilities: elapsed-duration formatting for the live readout.

/// Format a number of elapsed seconds as zero-padded HH:MM:SS.
/// Hours come from the total second count, so they keep counting past 23
/// for long-running tasks instead of wrapping at a day boundary.
pub fn format_elapsed(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
