//! Playhead formatting

/// Format seconds as `m:ss`
///
/// Non-finite or negative input (duration not yet known) renders as `0:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }

    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Format an optional duration, `0:00` while unknown
pub fn format_duration(seconds: Option<f64>) -> String {
    seconds.map_or_else(|| format_time(f64::NAN), format_time)
}
