//! The sync projector: two coupled views over one working-set snapshot.
//!
//! Every render pass rebuilds the marker registry and the card list
//! wholesale from the same snapshot; handles never survive across snapshot
//! boundaries, so there is nothing to dangle. The highlight machine keys
//! both views by event id.

use std::collections::HashMap;

use catalog::{Event, EventId};
use foundation::geo::GeoPoint;

use crate::card::{EMPTY_MESSAGE, ListCard, card_for};
use crate::surfaces::{ListSurface, MapSurface, MarkerStyle};
use crate::symbology::{active_style, base_style};
use crate::viewport::{FOCUS_ZOOM, ViewportAction, clamp_focus_zoom, viewport_for};

/// Per-render projection knobs.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub highlight_aftershocks: bool,
}

/// Highlight state of one marker/card pair.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum HighlightPhase {
    Idle,
    Active,
}

#[derive(Debug, Clone)]
struct MarkerRecord {
    location: GeoPoint,
    base: MarkerStyle,
    phase: HighlightPhase,
}

pub struct Projector {
    map: Box<dyn MapSurface>,
    list: Box<dyn ListSurface>,
    // Rebuilt in full every render pass; keyed by the id join key.
    markers: HashMap<EventId, MarkerRecord>,
}

impl Projector {
    pub fn new(map: Box<dyn MapSurface>, list: Box<dyn ListSurface>) -> Self {
        Self {
            map,
            list,
            markers: HashMap::new(),
        }
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Renders one working-set snapshot into both views atomically.
    pub fn render(&mut self, snapshot: &[Event], opts: RenderOptions) {
        self.map.remove_all_markers();
        self.markers.clear();

        if snapshot.is_empty() {
            self.list.show_placeholder(EMPTY_MESSAGE);
            self.apply_viewport(&[]);
            return;
        }

        let mut cards: Vec<ListCard> = Vec::with_capacity(snapshot.len());
        let mut locations: Vec<GeoPoint> = Vec::with_capacity(snapshot.len());

        for event in snapshot {
            let style = base_style(event.magnitude);
            let card = card_for(event, opts.highlight_aftershocks);
            let callout = format!("{} ({})", card.title, card.magnitude_label);

            self.map
                .add_marker(&event.id, event.location, style, &callout);
            self.markers.insert(
                event.id.clone(),
                MarkerRecord {
                    location: event.location,
                    base: style,
                    phase: HighlightPhase::Idle,
                },
            );

            locations.push(event.location);
            cards.push(card);
        }

        self.list.replace_cards(&cards);
        self.apply_viewport(&locations);
    }

    /// Clears both views after a failed refresh, keeping them in lockstep.
    pub fn clear_with_error(&mut self, message: &str) {
        self.map.remove_all_markers();
        self.markers.clear();
        self.list.show_error(message);
    }

    /// Pointer-enter or keyboard-focus on a card: idle → active.
    ///
    /// Unknown ids are a no-op, not an error.
    pub fn highlight(&mut self, id: &EventId) {
        let Some(record) = self.markers.get_mut(id) else {
            return;
        };
        if record.phase == HighlightPhase::Active {
            return;
        }
        record.phase = HighlightPhase::Active;
        let style = active_style(record.base);
        self.map.set_marker_style(id, style);
        self.map.open_callout(id);
    }

    /// Pointer-leave or blur: active → idle, restoring the exact base style.
    ///
    /// Closing the callout is left to the view layer.
    pub fn unhighlight(&mut self, id: &EventId) {
        let Some(record) = self.markers.get_mut(id) else {
            return;
        };
        if record.phase == HighlightPhase::Idle {
            return;
        }
        record.phase = HighlightPhase::Idle;
        let base = record.base;
        self.map.set_marker_style(id, base);
    }

    /// One-shot focus: recenter on the marker at a clamped zoom.
    ///
    /// Independent of highlight state; unknown ids are a no-op.
    pub fn focus(&mut self, id: &EventId) {
        let Some(record) = self.markers.get(id) else {
            return;
        };
        let location = record.location;
        self.map.fly_to(location, clamp_focus_zoom(FOCUS_ZOOM));
    }

    fn apply_viewport(&mut self, locations: &[GeoPoint]) {
        match viewport_for(locations) {
            ViewportAction::World { center, zoom } => self.map.set_view(center, zoom),
            ViewportAction::Center { at, zoom } => self.map.set_view(at, zoom),
            ViewportAction::Fit {
                bounds,
                padding_px,
                max_zoom,
            } => self.map.fit_bounds(bounds, padding_px, max_zoom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Projector, RenderOptions};
    use crate::card::EMPTY_MESSAGE;
    use crate::recording::{ListState, MapOp, SharedList, SharedMap};
    use crate::symbology::{ACTIVE_WEIGHT, BASE_WEIGHT, base_style};
    use catalog::{Event, EventId};
    use foundation::geo::GeoPoint;
    use foundation::time::Timestamp;
    use pretty_assertions::assert_eq;

    fn event(id: &str, magnitude: Option<f64>, lat: f64, lon: f64) -> Event {
        Event {
            id: EventId::new(id),
            magnitude,
            place: format!("near {id}"),
            time: Some(Timestamp(1_000)),
            depth_km: Some(10.0),
            location: GeoPoint::new(lat, lon).unwrap(),
            url: "about:blank".to_string(),
        }
    }

    fn projector() -> (Projector, SharedMap, SharedList) {
        let map = SharedMap::default();
        let list = SharedList::default();
        let p = Projector::new(Box::new(map.clone()), Box::new(list.clone()));
        (p, map, list)
    }

    #[test]
    fn render_builds_both_views_from_one_snapshot() {
        let (mut p, map, list) = projector();
        let snapshot = vec![
            event("a", Some(5.8), 10.0, 10.0),
            event("b", Some(4.0), 20.0, 20.0),
        ];
        p.render(&snapshot, RenderOptions::default());

        assert_eq!(map.marker_ids(), vec!["a", "b"]);
        match list.state() {
            ListState::Cards(cards) => {
                let ids: Vec<String> = cards.iter().map(|c| c.id.to_string()).collect();
                assert_eq!(ids, vec!["a", "b"]);
            }
            other => panic!("unexpected list state: {other:?}"),
        }
        // Two markers: viewport fits both.
        match map.last_viewport_op() {
            Some(MapOp::FitBounds { bounds, .. }) => {
                assert!(bounds.contains(GeoPoint::new(10.0, 10.0).unwrap()));
                assert!(bounds.contains(GeoPoint::new(20.0, 20.0).unwrap()));
            }
            other => panic!("unexpected viewport op: {other:?}"),
        }
    }

    #[test]
    fn empty_snapshot_renders_placeholder_and_world_view() {
        let (mut p, map, list) = projector();
        p.render(&[], RenderOptions::default());

        assert!(map.marker_ids().is_empty());
        assert_eq!(list.state(), ListState::Placeholder(EMPTY_MESSAGE.to_string()));
        assert!(matches!(map.last_viewport_op(), Some(MapOp::SetView { .. })));
    }

    #[test]
    fn rerender_rebuilds_the_registry_wholesale() {
        let (mut p, map, _list) = projector();
        p.render(&[event("a", Some(5.0), 1.0, 1.0)], RenderOptions::default());
        p.render(&[event("b", Some(3.0), 2.0, 2.0)], RenderOptions::default());

        assert_eq!(p.marker_count(), 1);
        assert_eq!(map.marker_ids(), vec!["b"]);
        // Stale handle from the previous snapshot is a no-op.
        p.highlight(&EventId::new("a"));
        assert!(map.open_callouts().is_empty());
    }

    #[test]
    fn highlight_touches_exactly_one_marker_and_restores_exactly() {
        let (mut p, map, _list) = projector();
        let snapshot = vec![
            event("a", Some(5.8), 10.0, 10.0),
            event("b", Some(4.0), 20.0, 20.0),
        ];
        p.render(&snapshot, RenderOptions::default());
        let before_b = map.marker_style(&EventId::new("b")).unwrap();

        p.highlight(&EventId::new("a"));
        let active = map.marker_style(&EventId::new("a")).unwrap();
        assert_eq!(active.weight, ACTIVE_WEIGHT);
        assert_eq!(map.marker_style(&EventId::new("b")).unwrap(), before_b);
        assert_eq!(map.open_callouts(), vec!["a"]);

        p.unhighlight(&EventId::new("a"));
        let restored = map.marker_style(&EventId::new("a")).unwrap();
        assert_eq!(restored, base_style(Some(5.8)));
        assert_eq!(restored.weight, BASE_WEIGHT);
        // Callout stays open; closing is a view-layer concern.
        assert_eq!(map.open_callouts(), vec!["a"]);
    }

    #[test]
    fn highlight_is_idempotent_per_phase() {
        let (mut p, map, _list) = projector();
        p.render(&[event("a", Some(5.0), 1.0, 1.0)], RenderOptions::default());

        p.highlight(&EventId::new("a"));
        p.highlight(&EventId::new("a"));
        assert_eq!(map.open_callouts(), vec!["a"]);

        p.unhighlight(&EventId::new("a"));
        p.unhighlight(&EventId::new("a"));
        assert_eq!(map.marker_style(&EventId::new("a")).unwrap(), base_style(Some(5.0)));
    }

    #[test]
    fn focus_recenters_with_clamped_zoom_regardless_of_highlight() {
        let (mut p, map, _list) = projector();
        p.render(&[event("a", Some(5.0), 33.0, -117.0)], RenderOptions::default());

        p.focus(&EventId::new("a"));
        match map.last_viewport_op() {
            Some(MapOp::FlyTo { center, zoom }) => {
                assert_eq!(center, GeoPoint::new(33.0, -117.0).unwrap());
                assert!((3.0..=10.0).contains(&zoom));
            }
            other => panic!("unexpected viewport op: {other:?}"),
        }
        // Unknown id: no-op.
        p.focus(&EventId::new("ghost"));
        assert!(matches!(map.last_viewport_op(), Some(MapOp::FlyTo { .. })));
    }

    #[test]
    fn clear_with_error_empties_both_views() {
        let (mut p, map, list) = projector();
        p.render(&[event("a", Some(5.0), 1.0, 1.0)], RenderOptions::default());
        p.clear_with_error("quake feed unavailable");

        assert!(map.marker_ids().is_empty());
        assert_eq!(p.marker_count(), 0);
        assert_eq!(
            list.state(),
            ListState::Error("quake feed unavailable".to_string())
        );
    }
}
