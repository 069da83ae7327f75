use std::cmp::Ordering;

use catalog::Event;
use foundation::ordering::stable_total_cmp_f64;
use foundation::time::Timestamp;

/// Ordering mode for the working set.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    NewestFirst,
    OldestFirst,
    MagnitudeDesc,
    MagnitudeAsc,
}

/// Stable in-place sort of a derived sequence.
///
/// Ordering contract:
/// - newest-first / oldest-first: by time, absent time = earliest.
/// - magnitude modes: absent magnitude = −∞ (descending) or +∞ (ascending),
///   ties broken newest-first, remaining ties by prior (feed) order.
pub fn sort_events(events: &mut [Event], mode: SortMode) {
    events.sort_by(|a, b| compare(a, b, mode));
}

fn compare(a: &Event, b: &Event, mode: SortMode) -> Ordering {
    match mode {
        SortMode::NewestFirst => newest_first(a, b),
        SortMode::OldestFirst => newest_first(b, a),
        SortMode::MagnitudeDesc => {
            stable_total_cmp_f64(magnitude_key(b, f64::NEG_INFINITY), magnitude_key(a, f64::NEG_INFINITY))
                .then_with(|| newest_first(a, b))
        }
        SortMode::MagnitudeAsc => {
            stable_total_cmp_f64(magnitude_key(a, f64::INFINITY), magnitude_key(b, f64::INFINITY))
                .then_with(|| newest_first(a, b))
        }
    }
}

fn newest_first(a: &Event, b: &Event) -> Ordering {
    Timestamp::sort_key(b.time).cmp(&Timestamp::sort_key(a.time))
}

fn magnitude_key(event: &Event, absent: f64) -> f64 {
    event.magnitude.unwrap_or(absent)
}
