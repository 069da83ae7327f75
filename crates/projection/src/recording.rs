//! Recording surface implementations.
//!
//! In-memory stand-ins for the map widget and the list UI, used by tests in
//! this crate and downstream. They record enough state to assert on marker
//! styling, callouts, viewport moves and list content.

use std::cell::RefCell;
use std::rc::Rc;

use catalog::EventId;
use foundation::geo::{GeoBounds, GeoPoint};

use crate::card::ListCard;
use crate::surfaces::{ListSurface, MapSurface, MarkerStyle};

/// A viewport operation observed by the recording map.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MapOp {
    SetView {
        center: GeoPoint,
        zoom: f64,
    },
    FitBounds {
        bounds: GeoBounds,
        padding_px: u32,
        max_zoom: f64,
    },
    FlyTo {
        center: GeoPoint,
        zoom: f64,
    },
}

#[derive(Debug, Default)]
struct MapInner {
    markers: Vec<(EventId, GeoPoint, MarkerStyle, String)>,
    callouts: Vec<EventId>,
    viewport_ops: Vec<MapOp>,
}

/// Cloneable handle to one recording map; clones share state.
#[derive(Debug, Clone, Default)]
pub struct SharedMap {
    inner: Rc<RefCell<MapInner>>,
}

impl SharedMap {
    pub fn marker_ids(&self) -> Vec<String> {
        self.inner
            .borrow()
            .markers
            .iter()
            .map(|(id, ..)| id.to_string())
            .collect()
    }

    pub fn marker_style(&self, id: &EventId) -> Option<MarkerStyle> {
        self.inner
            .borrow()
            .markers
            .iter()
            .find(|(mid, ..)| mid == id)
            .map(|(_, _, style, _)| *style)
    }

    pub fn open_callouts(&self) -> Vec<String> {
        self.inner
            .borrow()
            .callouts
            .iter()
            .map(|id| id.to_string())
            .collect()
    }

    pub fn last_viewport_op(&self) -> Option<MapOp> {
        self.inner.borrow().viewport_ops.last().copied()
    }
}

impl MapSurface for SharedMap {
    fn add_marker(&mut self, id: &EventId, at: GeoPoint, style: MarkerStyle, callout: &str) {
        self.inner
            .borrow_mut()
            .markers
            .push((id.clone(), at, style, callout.to_string()));
    }

    fn remove_all_markers(&mut self) {
        let mut inner = self.inner.borrow_mut();
        inner.markers.clear();
        inner.callouts.clear();
    }

    fn set_marker_style(&mut self, id: &EventId, style: MarkerStyle) -> bool {
        let mut inner = self.inner.borrow_mut();
        for (mid, _, mstyle, _) in inner.markers.iter_mut() {
            if mid == id {
                *mstyle = style;
                return true;
            }
        }
        false
    }

    fn open_callout(&mut self, id: &EventId) {
        let mut inner = self.inner.borrow_mut();
        if !inner.callouts.contains(id) {
            inner.callouts.push(id.clone());
        }
    }

    fn set_view(&mut self, center: GeoPoint, zoom: f64) {
        self.inner
            .borrow_mut()
            .viewport_ops
            .push(MapOp::SetView { center, zoom });
    }

    fn fit_bounds(&mut self, bounds: GeoBounds, padding_px: u32, max_zoom: f64) {
        self.inner.borrow_mut().viewport_ops.push(MapOp::FitBounds {
            bounds,
            padding_px,
            max_zoom,
        });
    }

    fn fly_to(&mut self, center: GeoPoint, zoom: f64) {
        self.inner
            .borrow_mut()
            .viewport_ops
            .push(MapOp::FlyTo { center, zoom });
    }
}

/// What the recording list is currently showing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListState {
    #[default]
    Untouched,
    Cards(Vec<ListCard>),
    Placeholder(String),
    Error(String),
}

/// Cloneable handle to one recording list; clones share state.
#[derive(Debug, Clone, Default)]
pub struct SharedList {
    inner: Rc<RefCell<ListState>>,
}

impl SharedList {
    pub fn state(&self) -> ListState {
        self.inner.borrow().clone()
    }
}

impl ListSurface for SharedList {
    fn replace_cards(&mut self, cards: &[ListCard]) {
        *self.inner.borrow_mut() = ListState::Cards(cards.to_vec());
    }

    fn show_placeholder(&mut self, message: &str) {
        *self.inner.borrow_mut() = ListState::Placeholder(message.to_string());
    }

    fn show_error(&mut self, message: &str) {
        *self.inner.borrow_mut() = ListState::Error(message.to_string());
    }
}
