//! Normalization of raw feed records into canonical [`Event`]s.
//!
//! A record is valid iff its first two geometry coordinates parse as finite
//! numbers. Invalid records are dropped, not errors: partial feeds are
//! expected. This is a pure transform; the canonical set it produces is the
//! only place events are created.

use foundation::geo::GeoPoint;
use foundation::time::Timestamp;

use crate::event::{Event, EventId, PLACEHOLDER_URL, UNKNOWN_PLACE};
use crate::raw::{RawRecord, as_finite_f64, as_millis, as_text};

/// Outcome of one normalization pass.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeOutcome {
    pub events: Vec<Event>,
    /// Records dropped for missing or non-finite coordinates.
    pub dropped: usize,
}

/// Produces one event per valid raw record, in feed order.
pub fn normalize(records: &[RawRecord]) -> NormalizeOutcome {
    let mut events = Vec::with_capacity(records.len());
    let mut dropped = 0usize;

    for (index, record) in records.iter().enumerate() {
        match normalize_record(record, index) {
            Some(event) => events.push(event),
            None => dropped += 1,
        }
    }

    NormalizeOutcome { events, dropped }
}

fn normalize_record(record: &RawRecord, index: usize) -> Option<Event> {
    let geometry = record.geometry.as_ref()?;
    // GeoJSON coordinate order: [lon, lat, depth].
    let lon = as_finite_f64(geometry.coordinates.first()?)?;
    let lat = as_finite_f64(geometry.coordinates.get(1)?)?;
    let location = GeoPoint::new(lat, lon)?;

    let depth_km = geometry.coordinates.get(2).and_then(as_finite_f64);

    let props = &record.properties;
    let magnitude = props.get("mag").and_then(as_finite_f64);
    let time = props.get("time").and_then(as_millis).map(Timestamp);
    let place = props
        .get("place")
        .and_then(as_text)
        .unwrap_or(UNKNOWN_PLACE)
        .to_string();
    let url = props
        .get("url")
        .and_then(as_text)
        .unwrap_or(PLACEHOLDER_URL)
        .to_string();

    let id = match &record.id {
        Some(id) if !id.is_empty() => EventId::new(id.clone()),
        // Id-less records still need a stable per-cycle join key.
        _ => EventId::new(format!("evt-{index}")),
    };

    Some(Event {
        id,
        magnitude,
        place,
        time,
        depth_km,
        location,
        url,
    })
}
