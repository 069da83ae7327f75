//! The refresh controller.
//!
//! Owns the canonical event set and decides when to re-fetch versus merely
//! re-run the derivation pipeline. Filter/sort/toggle changes never touch
//! the network; time-window changes, manual refreshes and periodic ticks do.
//!
//! Overlapping fetches are not deduplicated: `start_fetch` and `apply_fetch`
//! are split so the caller owns the suspension point, and whichever result
//! is applied last wins. This is a documented race, preserved deliberately.

use std::sync::Arc;

use catalog::{Event, RawRecord, normalize};
use pipeline::{SortMode, SummarySnapshot, derive_working_set, summarize};
use projection::{InputEvent, Projector, RenderOptions, dispatch_input};
use tracing::{debug, info, warn};

use crate::source::{BoxFuture, FeedError, FeedSource, TimeWindow};

/// Feed-unavailability message; distinct from the empty-state message.
pub const FEED_ERROR_MESSAGE: &str = "Earthquake feed unavailable. Try refreshing.";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RefreshState {
    Idle,
    Loading,
    Error,
}

/// User-facing derivation controls.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewOptions {
    /// Inclusive minimum magnitude; 0 means "no minimum".
    pub min_magnitude: f64,
    pub sort: SortMode,
    pub highlight_aftershocks: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            min_magnitude: 0.0,
            sort: SortMode::NewestFirst,
            highlight_aftershocks: false,
        }
    }
}

/// A change coming from the controls or the refresh timer.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent {
    MinMagnitude(f64),
    Sort(SortMode),
    HighlightAftershocks(bool),
    TimeWindow(TimeWindow),
    RefreshTick,
}

/// What the caller must do after handing the controller a control event.
#[must_use]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Reaction {
    /// Handled locally; the pipeline was re-run over the held canonical set.
    Done,
    /// The caller should await [`RefreshController::refresh`].
    RefreshNeeded,
}

pub struct RefreshController {
    source: Arc<dyn FeedSource>,
    projector: Projector,
    canonical: Vec<Event>,
    options: ViewOptions,
    window: TimeWindow,
    state: RefreshState,
    summary: SummarySnapshot,
}

impl RefreshController {
    pub fn new(source: Arc<dyn FeedSource>, projector: Projector) -> Self {
        Self {
            source,
            projector,
            canonical: Vec::new(),
            options: ViewOptions::default(),
            window: TimeWindow::default(),
            state: RefreshState::Idle,
            summary: summarize(&[]),
        }
    }

    pub fn state(&self) -> RefreshState {
        self.state
    }

    pub fn window(&self) -> TimeWindow {
        self.window
    }

    pub fn options(&self) -> ViewOptions {
        self.options
    }

    /// Summary metrics for the last rendered working set.
    pub fn summary(&self) -> &SummarySnapshot {
        &self.summary
    }

    pub fn canonical_len(&self) -> usize {
        self.canonical.len()
    }

    /// Routes a control change: local re-run, or signal that a fetch is due.
    pub fn handle_control(&mut self, event: ControlEvent) -> Reaction {
        match event {
            ControlEvent::MinMagnitude(min) => {
                self.options.min_magnitude = min;
                self.rerun();
                Reaction::Done
            }
            ControlEvent::Sort(mode) => {
                self.options.sort = mode;
                self.rerun();
                Reaction::Done
            }
            ControlEvent::HighlightAftershocks(on) => {
                self.options.highlight_aftershocks = on;
                self.rerun();
                Reaction::Done
            }
            ControlEvent::TimeWindow(window) => {
                self.window = window;
                Reaction::RefreshNeeded
            }
            ControlEvent::RefreshTick => Reaction::RefreshNeeded,
        }
    }

    /// Forwards a card interaction to the projector.
    pub fn handle_input(&mut self, event: InputEvent) {
        dispatch_input(&mut self.projector, event);
    }

    /// Starts a fetch for the current window and enters `Loading`.
    ///
    /// The returned future owns its source handle, so several fetches may be
    /// outstanding at once; results land via [`Self::apply_fetch`].
    pub fn start_fetch(&mut self) -> BoxFuture<'static, Result<Vec<RawRecord>, FeedError>> {
        self.state = RefreshState::Loading;
        let source = Arc::clone(&self.source);
        let window = self.window;
        debug!(window = window.slug(), "starting feed fetch");
        Box::pin(async move { source.fetch(window).await })
    }

    /// Applies one fetch result, replacing or preserving the canonical set.
    ///
    /// Success replaces the canonical set and re-runs the pipeline. Failure
    /// leaves the canonical set untouched but clears the displayed views to
    /// signal staleness.
    pub fn apply_fetch(&mut self, result: Result<Vec<RawRecord>, FeedError>) {
        match result {
            Ok(records) => {
                let outcome = normalize(&records);
                info!(
                    events = outcome.events.len(),
                    dropped = outcome.dropped,
                    window = self.window.slug(),
                    "feed refresh applied"
                );
                self.canonical = outcome.events;
                self.state = RefreshState::Idle;
                self.rerun();
            }
            Err(error) => {
                warn!(error = %error, "feed refresh failed");
                self.state = RefreshState::Error;
                self.projector.clear_with_error(FEED_ERROR_MESSAGE);
            }
        }
    }

    /// One full fetch-normalize-render cycle.
    pub async fn refresh(&mut self) {
        let fetch = self.start_fetch();
        let result = fetch.await;
        self.apply_fetch(result);
    }

    /// Re-derives the working set from the canonical set and renders it.
    fn rerun(&mut self) {
        let working = derive_working_set(
            &self.canonical,
            self.options.min_magnitude,
            self.options.sort,
        );
        self.summary = summarize(&working);
        self.projector.render(
            &working,
            RenderOptions {
                highlight_aftershocks: self.options.highlight_aftershocks,
            },
        );
    }
}
