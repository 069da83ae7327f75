use foundation::geo::GeoPoint;
use foundation::time::Timestamp;

/// Placeholder shown when the source omits a place label.
pub const UNKNOWN_PLACE: &str = "Unknown location";

/// Placeholder link for events without a source URL.
pub const PLACEHOLDER_URL: &str = "about:blank";

/// Opaque stable identifier for one event.
///
/// Unique within a fetch cycle; the sole join key between the list and the
/// marker layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(pub String);

impl EventId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonical record of one seismic observation.
///
/// Immutable after normalization. Absent magnitude is distinct from zero and
/// must never be coerced in comparisons or filters; `location` is the only
/// hard validity invariant (finite, enforced by [`GeoPoint::new`] upstream).
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: EventId,
    pub magnitude: Option<f64>,
    pub place: String,
    pub time: Option<Timestamp>,
    /// Depth in kilometers; absent events are excluded from depth averaging
    /// but stay in the list and on the map.
    pub depth_km: Option<f64>,
    pub location: GeoPoint,
    pub url: String,
}
