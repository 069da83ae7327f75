//! Console front end for the event viewer core.
//!
//! Stands in for the real map widget and DOM layer with plain-text surfaces,
//! which is enough to run the full fetch-normalize-filter-sort-render cycle
//! against a live summary feed.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use controller::{
    AutoRefresh, ControlEvent, HttpFeedSource, Reaction, RefreshController, RefreshState,
    TimeWindow,
};
use pipeline::{SortMode, Strongest};
use projection::Projector;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod surfaces;

use surfaces::{ConsoleList, ConsoleMap};

const DEFAULT_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_{window}.geojson";

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum WindowArg {
    Hour,
    Day,
    Week,
}

impl From<WindowArg> for TimeWindow {
    fn from(value: WindowArg) -> Self {
        match value {
            WindowArg::Hour => TimeWindow::PastHour,
            WindowArg::Day => TimeWindow::PastDay,
            WindowArg::Week => TimeWindow::PastWeek,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum SortArg {
    Newest,
    Oldest,
    MagDesc,
    MagAsc,
}

impl From<SortArg> for SortMode {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Newest => SortMode::NewestFirst,
            SortArg::Oldest => SortMode::OldestFirst,
            SortArg::MagDesc => SortMode::MagnitudeDesc,
            SortArg::MagAsc => SortMode::MagnitudeAsc,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "viewer", about = "Seismic event feed viewer")]
struct Args {
    /// Feed URL template; `{window}` expands to hour/day/week.
    #[arg(long)]
    feed_url: Option<String>,

    /// Time window to fetch.
    #[arg(long, value_enum, default_value = "day")]
    window: WindowArg,

    /// Inclusive minimum magnitude (0 = no minimum).
    #[arg(long, default_value_t = 0.0)]
    min_magnitude: f64,

    /// Ordering of the list.
    #[arg(long, value_enum, default_value = "newest")]
    sort: SortArg,

    /// Annotate low-magnitude events as aftershocks.
    #[arg(long)]
    highlight_aftershocks: bool,

    /// Re-fetch every N seconds; omit for a single refresh.
    #[arg(long)]
    auto_refresh_secs: Option<u64>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let feed_url = args
        .feed_url
        .or_else(|| env::var("QUAKE_FEED_URL").ok())
        .unwrap_or_else(|| DEFAULT_FEED_URL.to_string());

    let source = Arc::new(HttpFeedSource::new(feed_url));
    let projector = Projector::new(Box::new(ConsoleMap), Box::new(ConsoleList));
    let mut ctl = RefreshController::new(source, projector);

    // Apply the CLI-selected view options; these re-run locally only.
    let _ = ctl.handle_control(ControlEvent::MinMagnitude(args.min_magnitude));
    let _ = ctl.handle_control(ControlEvent::Sort(args.sort.into()));
    let _ = ctl.handle_control(ControlEvent::HighlightAftershocks(args.highlight_aftershocks));

    match ctl.handle_control(ControlEvent::TimeWindow(args.window.into())) {
        Reaction::RefreshNeeded => ctl.refresh().await,
        Reaction::Done => {}
    }
    print_summary(&ctl);

    let Some(secs) = args.auto_refresh_secs else {
        return;
    };

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut timer = AutoRefresh::new();
    timer.enable(Duration::from_secs(secs.max(1)), tx);
    info!(period_s = secs, "auto-refresh loop running, ctrl-c to stop");

    while let Some(event) = rx.recv().await {
        match ctl.handle_control(event) {
            Reaction::RefreshNeeded => {
                ctl.refresh().await;
                print_summary(&ctl);
            }
            Reaction::Done => {}
        }
    }
}

fn print_summary(ctl: &RefreshController) {
    if ctl.state() == RefreshState::Error {
        return;
    }
    let summary = ctl.summary();
    match &summary.strongest {
        Strongest::NoEvents => println!("summary: no matches"),
        Strongest::Unavailable => println!(
            "summary: {} events, strongest magnitude unavailable",
            summary.count
        ),
        Strongest::Event { magnitude, place, .. } => {
            println!(
                "summary: {} events, strongest M {:.1} ({place})",
                summary.count, magnitude
            );
        }
    }
    match summary.mean_depth_km {
        Some(depth) => println!("summary: mean depth {depth:.1} km"),
        None => println!("summary: mean depth unavailable"),
    }
}
