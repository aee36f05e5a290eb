//! CLI - Command Line Interface for mmview
//!
//! Renders media manager API bodies the same way the web pages do.
//! Every command prints a plain display string, or a JSON envelope with
//! `--json` (the default when stdout is not a terminal).
//!
//! # Examples
//!
//! ```bash
//! # Labels and titles
//! mmview quality 2
//! mmview title "Severance" --year 2022
//! mmview seasons 1 2 3
//! mmview elapsed 90000
//!
//! # Render saved API responses
//! curl -s "$API/tv/shows/torrents" | mmview torrents
//! mmview show show.json --json
//!
//! # Resolve endpoint URLs
//! mmview endpoint tv/show 2b0f5b4e-8a7c-4d2e-9f61-3c8d1e0a7b59 --ssr
//! ```

use clap::{ArgAction, Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::io::IsTerminal;
use std::path::PathBuf;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error
    Error = 1,
    /// Invalid arguments
    InvalidArgs = 2,
    /// Input could not be read or decoded
    InvalidInput = 3,
    /// Configuration could not be loaded or is unusable
    ConfigError = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> std::process::ExitCode {
        std::process::ExitCode::from(code as u8)
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// mmview - render media manager data for humans and scripts
#[derive(Parser, Debug)]
#[command(
    name = "mmview",
    version,
    about = "Render media manager API data as display strings",
    long_about = "Formats quality and status codes, titles, season ranges and \
                  elapsed times, and renders saved API response bodies the way \
                  the web dashboard shows them.",
    after_help = "EXAMPLES:\n\
                  mmview quality 1                    Print a quality label\n\
                  mmview seasons 1 2 3                Print a season range\n\
                  mmview torrents torrents.json       Render show torrents\n\
                  mmview endpoint tv/shows --ssr      Print a server-side API URL"
)]
pub struct Cli {
    /// Output format as JSON (default for non-TTY)
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Path to config file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Check if JSON output should be used
    pub fn should_json(&self) -> bool {
        self.json || !std::io::stdout().is_terminal()
    }

    /// Default tracing filter when RUST_LOG is not set
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Label for a quality tier code
    #[command(visible_alias = "q")]
    Quality(CodeCmd),

    /// Label for a torrent status code
    Status(CodeCmd),

    /// Display title for a show or movie
    #[command(visible_alias = "t")]
    Title(TitleCmd),

    /// Compact range for a list of season numbers
    #[command(visible_alias = "s")]
    Seasons(SeasonsCmd),

    /// Compact elapsed time for a number of seconds
    #[command(visible_alias = "e")]
    Elapsed(ElapsedCmd),

    /// Render a show torrents list (`/tv/shows/torrents`)
    Torrents(InputCmd),

    /// Render a show (`/tv/shows/{id}`)
    Show(InputCmd),

    /// Render metadata search results (`/tv/search`)
    Search(InputCmd),

    /// Render season requests (`/tv/seasons/requests`)
    Requests(InputCmd),

    /// Render indexer search results
    Indexer(InputCmd),

    /// Print the API URL for a route
    #[command(visible_alias = "url")]
    Endpoint(EndpointCmd),

    /// Print the effective configuration
    Config(ConfigCmd),
}

/// Integer code lookup
#[derive(Args, Debug)]
pub struct CodeCmd {
    /// Code as sent by the API
    #[arg(required = true, allow_negative_numbers = true)]
    pub code: i64,
}

/// Media title
#[derive(Args, Debug)]
pub struct TitleCmd {
    /// Show or movie name
    #[arg(required = true)]
    pub name: String,

    /// Release year
    #[arg(long, short = 'y', allow_negative_numbers = true)]
    pub year: Option<i32>,
}

/// Season range
#[derive(Args, Debug)]
pub struct SeasonsCmd {
    /// Season numbers, ascending
    pub numbers: Vec<u32>,

    /// Treat the numbers as the legacy `season` field
    #[arg(long)]
    pub legacy: bool,
}

/// Elapsed time
#[derive(Args, Debug)]
pub struct ElapsedCmd {
    /// Seconds (fractional and negative values allowed)
    #[arg(required = true, allow_negative_numbers = true)]
    pub seconds: f64,
}

/// JSON body input
#[derive(Args, Debug)]
pub struct InputCmd {
    /// File holding the API response body (reads stdin when omitted or "-")
    pub file: Option<PathBuf>,
}

impl InputCmd {
    /// Whether input comes from stdin
    pub fn is_stdin(&self) -> bool {
        self.file
            .as_deref()
            .map(|p| p.as_os_str() == "-")
            .unwrap_or(true)
    }
}

/// Endpoint URL resolution
#[derive(Args, Debug)]
pub struct EndpointCmd {
    /// Route name (see `--list`)
    #[arg(required_unless_present = "list")]
    pub route: Option<String>,

    /// Path parameters (show id, season number, movie id)
    pub params: Vec<String>,

    /// Resolve for the server-side renderer instead of the browser
    #[arg(long)]
    pub ssr: bool,

    /// Search query for `tv/search`
    #[arg(long)]
    pub query: Option<String>,

    /// List known route names
    #[arg(long)]
    pub list: bool,
}

/// Configuration display
#[derive(Args, Debug)]
pub struct ConfigCmd {}

// =============================================================================
// JSON Output Types
// =============================================================================

/// Generic JSON output wrapper with status
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub exit_code: i32,
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

impl<T: Serialize> JsonOutput<T> {
    /// Create success output with data
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            exit_code: 0,
        }
    }

    /// Create error output (no data)
    pub fn error_msg(msg: impl Into<String>, code: ExitCode) -> JsonOutput<()> {
        JsonOutput::<()> {
            data: None,
            error: Some(msg.into()),
            exit_code: code.into(),
        }
    }
}

/// A formatted value alongside its inputs
#[derive(Debug, Serialize, Deserialize)]
pub struct Formatted<I: Serialize> {
    pub input: I,
    pub output: String,
}

/// One rendered row of an API body
#[derive(Debug, Serialize, Deserialize)]
pub struct RenderedRow {
    pub text: String,
}

/// Resolved endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct EndpointResponse {
    pub route: String,
    pub method: String,
    pub url: String,
    pub ssr: bool,
}

/// Effective configuration after env and file resolution
#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub api_url: String,
    pub ssr_api_url: String,
    pub web_ssr: bool,
}

// =============================================================================
// Output Helpers
// =============================================================================

/// Output handler for consistent formatting
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(cli: &Cli, json_default: bool) -> Self {
        Self {
            json: cli.should_json() || json_default,
            quiet: cli.quiet,
        }
    }

    /// Print `data` as a JSON envelope, or `text` for terminals
    pub fn print<T: Serialize>(&self, data: T, text: impl Display) -> anyhow::Result<()> {
        if self.json {
            let output = JsonOutput::success(data);
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", text);
        }
        Ok(())
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        if self.json {
            let output = JsonOutput::<()>::error_msg(&msg, code);
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                eprintln!("{}", json);
            }
        } else if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Print info message (suppressed in quiet mode)
    pub fn info(&self, msg: impl Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
