use clap::Parser;

/// Arguments for the demo shell. The feed query itself is fixed
/// configuration and deliberately not overridable here.
#[derive(Debug, Clone, Parser)]
#[command(name = "felt-report")]
#[command(about = "Fetch and display one earthquake felt report from the USGS feed")]
pub struct CliArgs {
    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON instead of compact text")]
    pub log_json: bool,
}
