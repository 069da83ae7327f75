//! Summary statistics over the working set.
//!
//! Membership decides the result; order does not. "No matches" (empty set)
//! and "magnitude unavailable" (events present, none with a magnitude) are
//! distinct states and must stay distinguishable.

use catalog::{Event, EventId};
use foundation::ordering::stable_total_cmp_f64;
use foundation::time::Timestamp;

#[derive(Debug, Clone, PartialEq)]
pub enum Strongest {
    /// Empty working set.
    NoEvents,
    /// Events exist, but none carries a magnitude.
    Unavailable,
    Event {
        id: EventId,
        magnitude: f64,
        place: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummarySnapshot {
    pub count: usize,
    pub strongest: Strongest,
    /// Mean over events with a present depth; `None` when no event has one.
    pub mean_depth_km: Option<f64>,
}

pub fn summarize(events: &[Event]) -> SummarySnapshot {
    SummarySnapshot {
        count: events.len(),
        strongest: strongest(events),
        mean_depth_km: mean_depth(events),
    }
}

fn strongest(events: &[Event]) -> Strongest {
    if events.is_empty() {
        return Strongest::NoEvents;
    }

    let mut best: Option<&Event> = None;
    for event in events {
        if event.magnitude.is_none() {
            continue;
        }
        best = match best {
            None => Some(event),
            Some(current) => {
                if beats(event, current) {
                    Some(event)
                } else {
                    Some(current)
                }
            }
        };
    }

    match best {
        None => Strongest::Unavailable,
        Some(event) => Strongest::Event {
            id: event.id.clone(),
            magnitude: event.magnitude.unwrap_or(f64::NEG_INFINITY),
            place: event.place.clone(),
        },
    }
}

// Order-independent winner: magnitude, then newer time, then smaller id.
fn beats(challenger: &Event, current: &Event) -> bool {
    let a = challenger.magnitude.unwrap_or(f64::NEG_INFINITY);
    let b = current.magnitude.unwrap_or(f64::NEG_INFINITY);
    stable_total_cmp_f64(a, b)
        .then_with(|| Timestamp::sort_key(challenger.time).cmp(&Timestamp::sort_key(current.time)))
        .then_with(|| current.id.cmp(&challenger.id))
        .is_gt()
}

fn mean_depth(events: &[Event]) -> Option<f64> {
    let mut sum = 0.0;
    let mut n = 0usize;
    for event in events {
        if let Some(depth) = event.depth_km {
            sum += depth;
            n += 1;
        }
    }
    if n == 0 { None } else { Some(sum / n as f64) }
}
