pub mod filter;
pub mod metrics;
pub mod sort;

pub use filter::*;
pub use metrics::*;
pub use sort::*;

use catalog::Event;

/// Derives the working set: filter, then a stable sort.
///
/// Always produces a fresh sequence; the canonical set is never mutated.
pub fn derive_working_set(events: &[Event], min_magnitude: f64, mode: SortMode) -> Vec<Event> {
    let mut working: Vec<Event> = events
        .iter()
        .filter(|e| passes_filter(e, min_magnitude))
        .cloned()
        .collect();
    sort_events(&mut working, mode);
    working
}
