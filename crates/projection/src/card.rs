use catalog::{Event, EventId};
use foundation::time::Timestamp;

use crate::symbology::{Severity, is_aftershock};

/// Empty-state message; distinct from the feed-unavailability message.
pub const EMPTY_MESSAGE: &str = "No earthquakes match the current filters.";

/// One display card in the ordered list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListCard {
    pub id: EventId,
    pub title: String,
    pub magnitude_label: String,
    pub severity: Severity,
    /// Set only when the aftershock toggle is on and the magnitude is low.
    pub aftershock: bool,
    pub time: Option<Timestamp>,
    pub url: String,
}

pub fn card_for(event: &Event, highlight_aftershocks: bool) -> ListCard {
    ListCard {
        id: event.id.clone(),
        title: event.place.clone(),
        magnitude_label: magnitude_label(event.magnitude),
        severity: Severity::from_magnitude(event.magnitude),
        aftershock: highlight_aftershocks && is_aftershock(event.magnitude),
        time: event.time,
        url: event.url.clone(),
    }
}

fn magnitude_label(magnitude: Option<f64>) -> String {
    match magnitude {
        Some(mag) => format!("M {mag:.1}"),
        None => "M n/a".to_string(),
    }
}
