//! Plain-text stand-ins for the map widget and list UI.

use catalog::EventId;
use foundation::geo::{GeoBounds, GeoPoint};
use projection::{ListCard, ListSurface, MapSurface, MarkerStyle, Severity};

pub struct ConsoleMap;

impl MapSurface for ConsoleMap {
    fn add_marker(&mut self, id: &EventId, at: GeoPoint, style: MarkerStyle, _callout: &str) {
        println!(
            "map: + {id} @ ({:.2}, {:.2}) r={:.1}",
            at.lat, at.lon, style.radius
        );
    }

    fn remove_all_markers(&mut self) {
        println!("map: cleared");
    }

    fn set_marker_style(&mut self, id: &EventId, style: MarkerStyle) -> bool {
        println!("map: restyle {id} w={:.1}", style.weight);
        true
    }

    fn open_callout(&mut self, id: &EventId) {
        println!("map: callout {id}");
    }

    fn set_view(&mut self, center: GeoPoint, zoom: f64) {
        println!("map: view ({:.2}, {:.2}) z={zoom:.1}", center.lat, center.lon);
    }

    fn fit_bounds(&mut self, bounds: GeoBounds, padding_px: u32, max_zoom: f64) {
        println!(
            "map: fit [{:.2}..{:.2}] x [{:.2}..{:.2}] pad={padding_px} zcap={max_zoom:.1}",
            bounds.min_lat, bounds.max_lat, bounds.min_lon, bounds.max_lon
        );
    }

    fn fly_to(&mut self, center: GeoPoint, zoom: f64) {
        println!("map: fly ({:.2}, {:.2}) z={zoom:.1}", center.lat, center.lon);
    }
}

pub struct ConsoleList;

impl ListSurface for ConsoleList {
    fn replace_cards(&mut self, cards: &[ListCard]) {
        for card in cards {
            let tier = match card.severity {
                Severity::Strong => "strong",
                Severity::Moderate => "moderate",
                Severity::Light => "light",
            };
            let tag = if card.aftershock { " [aftershock]" } else { "" };
            println!("list: {} {} ({tier}){tag}", card.magnitude_label, card.title);
        }
    }

    fn show_placeholder(&mut self, message: &str) {
        println!("list: {message}");
    }

    fn show_error(&mut self, message: &str) {
        println!("list: ERROR {message}");
    }
}
