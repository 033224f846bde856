/// Format a microsecond offset in SubRip notation (`HH:MM:SS,mmm`).
///
/// Negative offsets keep a leading `-`.
pub fn format_timestamp(time_us: i64) -> String {
    let sign = if time_us < 0 { "-" } else { "" };
    let total_millis = time_us.unsigned_abs() / 1000;
    let millis = total_millis % 1000;
    let total_seconds = total_millis / 1000;
    let secs = total_seconds % 60;
    let total_minutes = total_seconds / 60;
    let minutes = total_minutes % 60;
    let hours = total_minutes / 60;

    format!(
        "{}{:02}:{:02}:{:02},{:03}",
        sign, hours, minutes, secs, millis
    )
}
