//! mmview - render media manager data
//!
//! Formats labels, titles, season ranges and elapsed times, and renders
//! saved API response bodies the way the web dashboard shows them.
//!
//! # Usage
//!
//! ```bash
//! mmview quality 2
//! mmview torrents torrents.json
//! mmview endpoint tv/shows --json
//! ```

use clap::Parser;
use tracing::debug;

use mediamanager_view::cli::{Cli, Command, ExitCode, Output};
use mediamanager_view::commands;
use mediamanager_view::config::Config;

fn main() -> std::process::ExitCode {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (warn)
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(?cli, "CLI arguments parsed");
    run(cli).into()
}

fn run(cli: Cli) -> ExitCode {
    let config_path = cli.config.clone().or_else(Config::path);
    let config = match config_path.as_deref() {
        Some(path) => match Config::load_from(path) {
            Ok(config) => config,
            Err(e) => {
                let output = Output::new(&cli, false);
                return output.error(format!("{:#}", e), ExitCode::ConfigError);
            }
        },
        None => Config::default(),
    }
    .with_process_env();
    let output = Output::new(&cli, config.json.unwrap_or(false));

    match cli.command {
        Command::Quality(cmd) => commands::quality_cmd(cmd, &output),
        Command::Status(cmd) => commands::status_cmd(cmd, &output),
        Command::Title(cmd) => commands::title_cmd(cmd, &output),
        Command::Seasons(cmd) => commands::seasons_cmd(cmd, &output),
        Command::Elapsed(cmd) => commands::elapsed_cmd(cmd, &output),
        Command::Torrents(cmd) => commands::torrents_cmd(cmd, &output),
        Command::Show(cmd) => commands::show_cmd(cmd, &output),
        Command::Search(cmd) => commands::search_cmd(cmd, &output),
        Command::Requests(cmd) => commands::requests_cmd(cmd, &output),
        Command::Indexer(cmd) => commands::indexer_cmd(cmd, &output),
        Command::Endpoint(cmd) => commands::endpoint_cmd(cmd, &config, &output),
        Command::Config(cmd) => {
            commands::config_cmd(cmd, &config, config_path.as_deref(), &output)
        }
    }
}
