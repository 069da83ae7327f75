//! Viewport policy for the marker layer.

use foundation::geo::{GeoBounds, GeoPoint};

pub const WORLD_CENTER: GeoPoint = GeoPoint { lat: 20.0, lon: 0.0 };
pub const WORLD_ZOOM: f64 = 2.0;
pub const SINGLE_MARKER_ZOOM: f64 = 6.0;
pub const FIT_PADDING_PX: u32 = 32;
/// Cap that prevents over-zooming on geographically clustered results.
pub const FIT_MAX_ZOOM: f64 = 10.0;

pub const FOCUS_ZOOM: f64 = 8.0;
pub const FOCUS_ZOOM_MIN: f64 = 3.0;
pub const FOCUS_ZOOM_MAX: f64 = 10.0;

/// What the map viewport should do after a render pass.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportAction {
    World {
        center: GeoPoint,
        zoom: f64,
    },
    Center {
        at: GeoPoint,
        zoom: f64,
    },
    Fit {
        bounds: GeoBounds,
        padding_px: u32,
        max_zoom: f64,
    },
}

/// Zero markers reset to the world view, one centers on it, two or more fit
/// the bounding region with padding and a zoom cap.
pub fn viewport_for(locations: &[GeoPoint]) -> ViewportAction {
    match locations {
        [] => ViewportAction::World {
            center: WORLD_CENTER,
            zoom: WORLD_ZOOM,
        },
        [only] => ViewportAction::Center {
            at: *only,
            zoom: SINGLE_MARKER_ZOOM,
        },
        many => ViewportAction::Fit {
            // covering() cannot fail here: `many` has at least two points.
            bounds: GeoBounds::covering(many).unwrap_or(GeoBounds::around(many[0])),
            padding_px: FIT_PADDING_PX,
            max_zoom: FIT_MAX_ZOOM,
        },
    }
}

/// One-shot focus zoom, clamped to the usable range.
pub fn clamp_focus_zoom(zoom: f64) -> f64 {
    zoom.clamp(FOCUS_ZOOM_MIN, FOCUS_ZOOM_MAX)
}
