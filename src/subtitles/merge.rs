use super::types::{CuesWithTiming, TimedCue};
use log::debug;

/// Turn individually timed cues into a sequence of display events.
///
/// Every distinct start or end time opens a new event holding the cues
/// visible from that instant, in source order. Gaps produce an empty event
/// that clears the screen, and the final end time produces an empty event of
/// unknown duration.
pub(crate) fn merge_timed_cues(
    mut timed: Vec<TimedCue>,
    discard_pre_zero: bool,
) -> Vec<CuesWithTiming> {
    timed.retain(|c| {
        if c.end_us <= c.start_us {
            debug!(
                "Dropping cue with empty window [{}, {}]",
                c.start_us, c.end_us
            );
            return false;
        }
        if discard_pre_zero && c.end_us <= 0 {
            debug!("Dropping cue ending before zero at {}", c.end_us);
            return false;
        }
        true
    });
    if timed.is_empty() {
        return Vec::new();
    }

    let mut times: Vec<i64> = timed.iter().flat_map(|c| [c.start_us, c.end_us]).collect();
    times.sort_unstable();
    times.dedup();

    let mut events = Vec::with_capacity(times.len());
    for window in times.windows(2) {
        let (start, end) = (window[0], window[1]);
        let cues = timed
            .iter()
            .filter(|c| c.start_us <= start && start < c.end_us)
            .map(|c| c.cue.clone())
            .collect();
        events.push(CuesWithTiming::new(cues, Some(start), Some(end.abs_diff(start))));
    }
    if let Some(&last) = times.last() {
        events.push(CuesWithTiming::new(Vec::new(), Some(last), None));
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subtitles::types::{Cue, CueText};

    fn timed(text: &str, start_us: i64, end_us: i64) -> TimedCue {
        TimedCue {
            cue: Cue::new(CueText::plain(text)),
            start_us,
            end_us,
        }
    }

    fn texts(event: &CuesWithTiming) -> Vec<&str> {
        event.cues.iter().map(|c| c.plain_text()).collect()
    }

    #[test]
    fn test_sequential_cues_with_gaps() {
        let events = merge_timed_cues(vec![timed("a", 0, 10), timed("b", 20, 30)], true);
        assert_eq!(events.len(), 4);
        assert_eq!(texts(&events[0]), vec!["a"]);
        assert_eq!(events[0].duration_us, Some(10));
        assert!(events[1].cues.is_empty());
        assert_eq!(events[1].start_time_us, Some(10));
        assert_eq!(events[1].duration_us, Some(10));
        assert_eq!(texts(&events[2]), vec!["b"]);
        assert_eq!(events[3].start_time_us, Some(30));
        assert_eq!(events[3].duration_us, None);
    }

    #[test]
    fn test_adjacent_cues_have_no_clear_event() {
        let events = merge_timed_cues(vec![timed("a", 0, 10), timed("b", 10, 20)], true);
        assert_eq!(events.len(), 3);
        assert_eq!(texts(&events[1]), vec!["b"]);
    }

    #[test]
    fn test_overlapping_cues_keep_source_order() {
        let events = merge_timed_cues(
            vec![timed("late", 5, 15), timed("early", 0, 10), timed("same", 5, 8)],
            true,
        );
        let starts: Vec<_> = events.iter().map(|e| e.start_time_us.unwrap()).collect();
        assert_eq!(starts, vec![0, 5, 8, 10, 15]);
        assert_eq!(texts(&events[0]), vec!["early"]);
        assert_eq!(texts(&events[1]), vec!["late", "early", "same"]);
        assert_eq!(texts(&events[2]), vec!["late", "early"]);
        assert_eq!(texts(&events[3]), vec!["late"]);
    }

    #[test]
    fn test_end_times_never_decrease() {
        let events = merge_timed_cues(
            vec![timed("a", 0, 100), timed("b", 30, 50), timed("c", 40, 200)],
            true,
        );
        let ends: Vec<_> = events.iter().filter_map(|e| e.end_time_us()).collect();
        assert!(ends.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_pre_zero_cues() {
        let input = vec![timed("gone", -20, -10), timed("straddle", -5, 5)];
        let events = merge_timed_cues(input.clone(), true);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].start_time_us, Some(-5));
        assert_eq!(texts(&events[0]), vec!["straddle"]);

        let kept = merge_timed_cues(input, false);
        assert_eq!(kept[0].start_time_us, Some(-20));
        assert_eq!(texts(&kept[0]), vec!["gone"]);
    }

    #[test]
    fn test_extreme_window_duration() {
        let events = merge_timed_cues(vec![timed("huge", i64::MIN + 1, i64::MAX)], false);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].duration_us, Some(u64::MAX - 1));
        assert_eq!(texts(&events[0]), vec!["huge"]);
    }

    #[test]
    fn test_empty_and_inverted_windows_dropped() {
        let events = merge_timed_cues(vec![timed("zero", 5, 5), timed("inverted", 9, 3)], true);
        assert!(events.is_empty());
    }
}
