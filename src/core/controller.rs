use crate::core::ui::UiHandle;
use crate::domain::ports::{DisplaySink, ReportSource};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Drives one fetch-and-display round per activation.
///
/// The fetch runs on a background task; the display update, if any, is
/// dispatched back to the UI thread. An absent result is a no-op, not an
/// error: the screen keeps its placeholder state.
pub struct ReportController<S: ReportSource + 'static, D: DisplaySink + 'static> {
    source: Arc<S>,
    sink: Arc<D>,
    ui: UiHandle,
    feed_url: String,
    alive: Arc<AtomicBool>,
}

impl<S: ReportSource + 'static, D: DisplaySink + 'static> ReportController<S, D> {
    pub fn new(source: Arc<S>, sink: Arc<D>, ui: UiHandle, feed_url: String) -> Self {
        Self {
            source,
            sink,
            ui,
            feed_url,
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Launches exactly one background fetch. The returned handle completes
    /// once the result has been dispatched (or discarded); it does not wait
    /// for the UI thread to run the update.
    ///
    /// Nothing serializes overlapping activations: if `activate` is called
    /// again before the first fetch completes, the update that reaches the
    /// UI thread last wins.
    pub fn activate(&self) -> JoinHandle<()> {
        let source = Arc::clone(&self.source);
        let sink = Arc::clone(&self.sink);
        let ui = self.ui.clone();
        let alive = Arc::clone(&self.alive);
        let url = self.feed_url.clone();

        tokio::spawn(async move {
            let Some(report) = source.fetch(&url).await else {
                tracing::info!("No felt report available, leaving display untouched");
                return;
            };

            if !alive.load(Ordering::Acquire) {
                tracing::debug!("Controller deactivated during fetch, dropping report");
                return;
            }

            ui.dispatch(move || {
                // Re-checked on the UI thread: deactivation can land between
                // the dispatch and the task actually running.
                if alive.load(Ordering::Acquire) {
                    sink.show_report(&report);
                }
            });
        })
    }

    /// Marks the owning screen as gone. Any in-flight fetch still completes,
    /// but its display update is suppressed.
    pub fn deactivate(&self) {
        self.alive.store(false, Ordering::Release);
    }
}
