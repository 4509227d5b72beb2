use clap::Parser;
use felt_report::utils::{logger, validation::Validate};
use felt_report::{
    CliArgs, DisplaySink, EarthquakeReport, FeedConfig, ReportController, UiThread, UsgsFetcher,
};
use std::sync::Arc;

/// Console stand-in for the host application's screen: three labeled text
/// regions, updated at most once.
struct ConsoleDisplay;

impl DisplaySink for ConsoleDisplay {
    fn show_report(&self, report: &EarthquakeReport) {
        println!("{}", report.title);
        println!("Number of people who felt it: {}", report.respondent_count);
        println!("Perceived strength: {}", report.perceived_strength);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    if args.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting felt-report");

    let config = FeedConfig::default();
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
    if args.verbose {
        tracing::debug!("Feed config: {:?}", config);
    }

    let fetcher = Arc::new(UsgsFetcher::new(&config)?);
    let sink = Arc::new(ConsoleDisplay);
    let ui = UiThread::spawn();

    let controller = ReportController::new(fetcher, sink, ui.handle(), config.feed_url.clone());

    // One fetch per activation; an absent result simply leaves the display
    // blank and is not an error.
    controller.activate().await?;

    drop(controller);
    ui.shutdown();

    tracing::info!("Done");
    Ok(())
}
