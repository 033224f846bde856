use crate::errors::TimecodeError;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// [-][H:]M:S[,ms] --> [-][H:]M:S[,ms], anything after the end time is ignored
static TIMING_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*(-)?(?:(\d+):)?(\d+):(\d+)(?:[,.](\d+))?\s*-->\s*(-)?(?:(\d+):)?(\d+):(\d+)(?:[,.](\d+))?(?:\s.*)?$",
    )
    .unwrap()
});

/// Start and end of a cue in microseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimecodeRange {
    pub start_us: i64,
    pub end_us: i64,
}

/// Cheap check used by the lexer to find timing lines.
pub fn is_timing_line(line: &str) -> bool {
    TIMING_LINE_REGEX.is_match(line)
}

/// Parse a `start --> end` timing line.
pub fn parse_timing_line(line: &str) -> Result<TimecodeRange, TimecodeError> {
    let caps = TIMING_LINE_REGEX
        .captures(line)
        .ok_or_else(|| TimecodeError::new(line))?;
    let start_us = timestamp_us(&caps, 1).ok_or_else(|| TimecodeError::new(line))?;
    let end_us = timestamp_us(&caps, 6).ok_or_else(|| TimecodeError::new(line))?;
    Ok(TimecodeRange { start_us, end_us })
}

/// Combine the five capture groups starting at `first` into microseconds.
fn timestamp_us(caps: &Captures, first: usize) -> Option<i64> {
    let group = |i: usize| -> Option<i64> {
        match caps.get(first + i) {
            Some(m) => m.as_str().parse::<i64>().ok(),
            None => Some(0),
        }
    };
    let negative = caps.get(first).is_some();
    let hours = group(1)?;
    let minutes = group(2)?;
    let seconds = group(3)?;
    let millis = group(4)?;
    let total_seconds = hours
        .checked_mul(3600)?
        .checked_add(minutes.checked_mul(60)?)?
        .checked_add(seconds)?;
    let us = total_seconds
        .checked_mul(1000)?
        .checked_add(millis)?
        .checked_mul(1000)?;
    Some(if negative { -us } else { us })
}
