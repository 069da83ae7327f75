//! Capability interfaces consumed by the projector.
//!
//! The core never depends on a concrete map widget or UI layer; it drives
//! whatever implements these traits. Recording implementations for tests
//! live in [`crate::recording`].

use catalog::EventId;
use foundation::geo::{GeoBounds, GeoPoint};

use crate::card::ListCard;

/// Visual styling of one circular marker.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MarkerStyle {
    pub radius: f64,
    pub color: [f32; 4],
    /// Outline width.
    pub weight: f32,
    pub fill_opacity: f32,
}

/// A geographic surface that can place circular markers and move its viewport.
pub trait MapSurface {
    fn add_marker(&mut self, id: &EventId, at: GeoPoint, style: MarkerStyle, callout: &str);
    fn remove_all_markers(&mut self);
    /// Restyles an existing marker. Returns `false` for unknown ids.
    fn set_marker_style(&mut self, id: &EventId, style: MarkerStyle) -> bool;
    fn open_callout(&mut self, id: &EventId);
    fn set_view(&mut self, center: GeoPoint, zoom: f64);
    fn fit_bounds(&mut self, bounds: GeoBounds, padding_px: u32, max_zoom: f64);
    /// Animated recenter.
    fn fly_to(&mut self, center: GeoPoint, zoom: f64);
}

/// A UI surface that renders the ordered card list.
pub trait ListSurface {
    fn replace_cards(&mut self, cards: &[ListCard]);
    /// Empty-state message; not an error.
    fn show_placeholder(&mut self, message: &str);
    /// Feed-unavailability message; distinct from the empty state.
    fn show_error(&mut self, message: &str);
}
