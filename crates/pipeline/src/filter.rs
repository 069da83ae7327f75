use catalog::Event;

/// Minimum-magnitude filter (inclusive lower bound).
///
/// An event with absent magnitude passes only when the threshold is at or
/// below zero: "no minimum" does not require magnitude presence, but an
/// absent magnitude can never be shown to satisfy a nonzero floor.
pub fn passes_filter(event: &Event, min_magnitude: f64) -> bool {
    match event.magnitude {
        Some(mag) => mag >= min_magnitude,
        None => min_magnitude <= 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::passes_filter;
    use catalog::{Event, EventId};
    use foundation::geo::GeoPoint;

    fn event(magnitude: Option<f64>) -> Event {
        Event {
            id: EventId::new("x"),
            magnitude,
            place: "somewhere".to_string(),
            time: None,
            depth_km: None,
            location: GeoPoint::new(0.0, 0.0).unwrap(),
            url: "about:blank".to_string(),
        }
    }

    #[test]
    fn threshold_is_an_inclusive_lower_bound() {
        assert!(passes_filter(&event(Some(4.5)), 4.5));
        assert!(!passes_filter(&event(Some(4.49)), 4.5));
    }

    #[test]
    fn absent_magnitude_passes_only_without_a_floor() {
        assert!(passes_filter(&event(None), 0.0));
        assert!(passes_filter(&event(None), -1.0));
        assert!(!passes_filter(&event(None), 0.1));
    }

    #[test]
    fn zero_magnitude_is_not_absent() {
        assert!(passes_filter(&event(Some(0.0)), 0.0));
        assert!(!passes_filter(&event(Some(0.0)), 0.1));
    }
}
