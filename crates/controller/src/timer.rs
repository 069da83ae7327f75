//! Auto-refresh timer.
//!
//! The periodic refresh is a single process-wide handle: enabling tears any
//! existing task down before spawning a new one, so two timers can never
//! coexist. Ticks arrive as [`ControlEvent::RefreshTick`] on a channel; the
//! owner of the controller turns them into refresh cycles.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::refresh::ControlEvent;

#[derive(Debug, Default)]
pub struct AutoRefresh {
    handle: Option<JoinHandle<()>>,
}

impl AutoRefresh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self) -> bool {
        self.handle.is_some()
    }

    /// Starts the periodic tick, replacing any previous timer.
    pub fn enable(&mut self, period: Duration, ticks: UnboundedSender<ControlEvent>) {
        self.disable();
        debug!(period_s = period.as_secs_f64(), "auto-refresh enabled");
        self.handle = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first interval tick fires immediately; skip it so the
            // cadence starts one period from now.
            interval.tick().await;
            loop {
                interval.tick().await;
                if ticks.send(ControlEvent::RefreshTick).is_err() {
                    break;
                }
            }
        }));
    }

    /// Stops the periodic tick, if one is running.
    pub fn disable(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!("auto-refresh disabled");
        }
    }
}

impl Drop for AutoRefresh {
    fn drop(&mut self) {
        self.disable();
    }
}

#[cfg(test)]
mod tests {
    use super::AutoRefresh;
    use crate::refresh::ControlEvent;
    use std::time::Duration;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn ticks_arrive_once_per_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = AutoRefresh::new();
        timer.enable(Duration::from_secs(60), tx);

        for _ in 0..3 {
            assert_eq!(rx.recv().await, Some(ControlEvent::RefreshTick));
        }
        timer.disable();
        assert!(!timer.is_enabled());
    }

    #[tokio::test(start_paused = true)]
    async fn re_enabling_replaces_the_previous_timer() {
        let (tx1, mut rx1) = mpsc::unbounded_channel();
        let (tx2, mut rx2) = mpsc::unbounded_channel();
        let mut timer = AutoRefresh::new();

        timer.enable(Duration::from_secs(60), tx1);
        timer.enable(Duration::from_secs(60), tx2);
        assert!(timer.is_enabled());

        // The replaced task is aborted before its first tick; its sender is
        // dropped, so the first channel closes without a tick.
        assert_eq!(rx1.recv().await, None);
        assert_eq!(rx2.recv().await, Some(ControlEvent::RefreshTick));
    }

    #[tokio::test(start_paused = true)]
    async fn disabling_stops_ticks() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut timer = AutoRefresh::new();
        timer.enable(Duration::from_secs(60), tx);
        assert_eq!(rx.recv().await, Some(ControlEvent::RefreshTick));

        timer.disable();
        assert_eq!(rx.recv().await, None);
    }
}
