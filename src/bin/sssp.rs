use clap::Parser;
use dijkstra_sssp::config::{run, OutputFormat, RunConfig};
use std::path::PathBuf;
use std::process::ExitCode;

/// Shortest distances from one vertex of a JSON graph file
#[derive(Debug, Parser)]
#[command(name = "sssp", version)]
struct Cli {
    /// Graph file (`vertex_count` plus an `edges` list)
    #[arg(default_value = "data/campus.json")]
    graph: PathBuf,

    /// Source vertex index
    #[arg(short, long, default_value_t = 0)]
    source: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        RunConfig {
            graph_path: cli.graph,
            source: cli.source,
            format: cli.format,
        }
    }
}

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let config = RunConfig::from(Cli::parse());
    log::debug!("Configuration: {:?}", config);

    match run(&config) {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
