//! Feed source abstraction.
//!
//! The controller consumes "summary of events over a time window" from
//! whatever implements [`FeedSource`]. Network errors, non-success statuses
//! and malformed bodies are all folded into [`FeedError`]; the controller
//! treats them identically.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

use catalog::{RawFeed, RawRecord};

/// Error type for feed fetches.
#[derive(Debug)]
pub struct FeedError {
    pub message: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl std::fmt::Display for FeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for FeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as _)
    }
}

impl FeedError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Time window of the summary feed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum TimeWindow {
    PastHour,
    #[default]
    PastDay,
    PastWeek,
}

impl TimeWindow {
    pub fn slug(&self) -> &'static str {
        match self {
            TimeWindow::PastHour => "hour",
            TimeWindow::PastDay => "day",
            TimeWindow::PastWeek => "week",
        }
    }
}

/// Type alias for a boxed future that can be sent between threads.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Trait for event feed sources.
///
/// Implementations must be `Send + Sync` for use across async tasks.
/// Methods return boxed futures for dyn-compatibility.
pub trait FeedSource: Send + Sync {
    /// Fetch the raw records for one time window.
    fn fetch(&self, window: TimeWindow) -> BoxFuture<'_, Result<Vec<RawRecord>, FeedError>>;
}

/// HTTP feed source (URL template with a `{window}` placeholder).
pub struct HttpFeedSource {
    url_template: String,
    client: reqwest::Client,
}

impl HttpFeedSource {
    pub fn new(url_template: impl Into<String>) -> Self {
        Self {
            url_template: url_template.into(),
            client: reqwest::Client::new(),
        }
    }

    fn feed_url(&self, window: TimeWindow) -> String {
        self.url_template.replace("{window}", window.slug())
    }
}

impl FeedSource for HttpFeedSource {
    fn fetch(&self, window: TimeWindow) -> BoxFuture<'_, Result<Vec<RawRecord>, FeedError>> {
        let url = self.feed_url(window);
        Box::pin(async move {
            let resp = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|e| FeedError::with_source("Feed request failed", e))?;

            if !resp.status().is_success() {
                return Err(FeedError::new(format!("Feed HTTP error: {}", resp.status())));
            }

            let body = resp
                .text()
                .await
                .map_err(|e| FeedError::with_source("Failed to read feed body", e))?;

            let feed = RawFeed::from_json(&body)
                .map_err(|e| FeedError::with_source("Feed body was not a summary feed", e))?;

            Ok(feed.features)
        })
    }
}

/// In-memory feed source for testing.
pub struct MemoryFeedSource {
    responses: Mutex<HashMap<TimeWindow, Result<Vec<RawRecord>, String>>>,
    fetches: std::sync::atomic::AtomicUsize,
}

impl Default for MemoryFeedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFeedSource {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            fetches: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Number of fetches observed so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(std::sync::atomic::Ordering::SeqCst)
    }

    pub fn set_records(&self, window: TimeWindow, records: Vec<RawRecord>) {
        if let Ok(mut map) = self.responses.lock() {
            map.insert(window, Ok(records));
        }
    }

    pub fn set_failure(&self, window: TimeWindow, message: impl Into<String>) {
        if let Ok(mut map) = self.responses.lock() {
            map.insert(window, Err(message.into()));
        }
    }
}

impl FeedSource for MemoryFeedSource {
    fn fetch(&self, window: TimeWindow) -> BoxFuture<'_, Result<Vec<RawRecord>, FeedError>> {
        self.fetches
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        let response = self
            .responses
            .lock()
            .ok()
            .and_then(|map| map.get(&window).cloned());
        Box::pin(async move {
            match response {
                Some(Ok(records)) => Ok(records),
                Some(Err(message)) => Err(FeedError::new(message)),
                None => Err(FeedError::new("no response configured for window")),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{FeedSource, HttpFeedSource, MemoryFeedSource, TimeWindow};
    use catalog::RawRecord;

    #[test]
    fn url_template_substitutes_the_window() {
        let source = HttpFeedSource::new("https://feed.test/summary/all_{window}.geojson");
        assert_eq!(
            source.feed_url(TimeWindow::PastWeek),
            "https://feed.test/summary/all_week.geojson"
        );
    }

    #[tokio::test]
    async fn memory_source_replays_configured_responses() {
        let source = MemoryFeedSource::new();
        source.set_records(TimeWindow::PastHour, vec![RawRecord::default()]);
        source.set_failure(TimeWindow::PastDay, "boom");

        assert_eq!(source.fetch(TimeWindow::PastHour).await.unwrap().len(), 1);
        assert!(source.fetch(TimeWindow::PastDay).await.is_err());
        assert!(source.fetch(TimeWindow::PastWeek).await.is_err());
    }
}
