use felt_report::{
    DisplaySink, EarthquakeReport, FeedConfig, ReportController, UiThread, UsgsFetcher,
};
use httpmock::prelude::*;
use std::sync::{Arc, Mutex};
use std::thread::ThreadId;

#[derive(Default)]
struct RecordingDisplay {
    updates: Mutex<Vec<(EarthquakeReport, ThreadId)>>,
}

impl DisplaySink for RecordingDisplay {
    fn show_report(&self, report: &EarthquakeReport) {
        self.updates
            .lock()
            .unwrap()
            .push((report.clone(), std::thread::current().id()));
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_full_pipeline_displays_first_event() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/fdsnws/event/1/query");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "type": "FeatureCollection",
                "features": [
                    {
                        "type": "Feature",
                        "properties": {
                            "place": "10km SE of Example",
                            "felt": 150,
                            "cdi": 6.2,
                            "mag": 5.4,
                            "tsunami": 0
                        }
                    },
                    {
                        "type": "Feature",
                        "properties": {"place": "Ignored", "felt": 9, "cdi": 1.0}
                    }
                ]
            }));
    });

    let config = FeedConfig::new(server.url("/fdsnws/event/1/query"));
    let fetcher = Arc::new(UsgsFetcher::new(&config).unwrap());
    let display = Arc::new(RecordingDisplay::default());
    let ui = UiThread::spawn();
    let ui_thread = ui.thread_id();

    let controller = ReportController::new(
        fetcher,
        Arc::clone(&display),
        ui.handle(),
        config.feed_url.clone(),
    );

    controller.activate().await.unwrap();
    drop(controller);
    ui.shutdown();

    api_mock.assert();
    let updates = display.updates.lock().unwrap();
    assert_eq!(updates.len(), 1);

    let (report, thread) = &updates[0];
    assert_eq!(report.title, "10km SE of Example");
    assert_eq!(report.respondent_count, "150");
    assert_eq!(report.perceived_strength, "6.2");
    assert_eq!(*thread, ui_thread);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_full_pipeline_failure_leaves_display_untouched() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/fdsnws/event/1/query");
        then.status(503);
    });

    let config = FeedConfig::new(server.url("/fdsnws/event/1/query"));
    let fetcher = Arc::new(UsgsFetcher::new(&config).unwrap());
    let display = Arc::new(RecordingDisplay::default());
    let ui = UiThread::spawn();

    let controller = ReportController::new(
        fetcher,
        Arc::clone(&display),
        ui.handle(),
        config.feed_url.clone(),
    );

    controller.activate().await.unwrap();
    drop(controller);
    ui.shutdown();

    api_mock.assert();
    assert!(display.updates.lock().unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_reactivation_fetches_again() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/fdsnws/event/1/query");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "features": [
                    {"properties": {"place": "Near Example", "felt": 88, "cdi": 4.0}}
                ]
            }));
    });

    let config = FeedConfig::new(server.url("/fdsnws/event/1/query"));
    let fetcher = Arc::new(UsgsFetcher::new(&config).unwrap());
    let display = Arc::new(RecordingDisplay::default());
    let ui = UiThread::spawn();

    let controller = ReportController::new(
        fetcher,
        Arc::clone(&display),
        ui.handle(),
        config.feed_url.clone(),
    );

    // Reloading the screen restarts the whole sequence; each activation is
    // one fetch and one display update.
    controller.activate().await.unwrap();
    controller.activate().await.unwrap();
    drop(controller);
    ui.shutdown();

    api_mock.assert_hits(2);
    assert_eq!(display.updates.lock().unwrap().len(), 2);
}
