//! CLI Command Handlers
//!
//! Each handler takes its CLI args and the Output, returns ExitCode.

use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::cli::{
    CodeCmd, ConfigCmd, ConfigResponse, ElapsedCmd, EndpointCmd, EndpointResponse, ExitCode,
    Formatted, InputCmd, Output, RenderedRow, SeasonsCmd, TitleCmd,
};
use crate::config::{Config, RenderContext};
use crate::endpoints::{ApiRoute, ROUTE_NAMES};
use crate::error::ViewError;
use crate::format::{
    format_elapsed, media_title, quality_label, season_range, status_label, SeasonFields,
};
use crate::models::{
    MetaDataProviderShowSearchResult, PublicIndexerQueryResult, PublicShow, RichShowTorrent,
    SeasonRequest,
};

/// Finish a command: print on success, map serialization failures to Error
fn finish<T: Serialize>(output: &Output, data: T, text: impl std::fmt::Display) -> ExitCode {
    match output.print(data, text) {
        Ok(()) => ExitCode::Success,
        Err(e) => output.error(format!("Failed to serialize: {}", e), ExitCode::Error),
    }
}

// =============================================================================
// Label / Formatting Commands
// =============================================================================

pub fn quality_cmd(cmd: CodeCmd, output: &Output) -> ExitCode {
    let label = quality_label(cmd.code);
    finish(
        output,
        Formatted {
            input: cmd.code,
            output: label.to_string(),
        },
        label,
    )
}

pub fn status_cmd(cmd: CodeCmd, output: &Output) -> ExitCode {
    let label = status_label(cmd.code);
    finish(
        output,
        Formatted {
            input: cmd.code,
            output: label.to_string(),
        },
        label,
    )
}

pub fn title_cmd(cmd: TitleCmd, output: &Output) -> ExitCode {
    let title = media_title(&cmd.name, cmd.year);
    finish(
        output,
        Formatted {
            input: (&cmd.name, cmd.year),
            output: title.clone(),
        },
        title,
    )
}

pub fn seasons_cmd(cmd: SeasonsCmd, output: &Output) -> ExitCode {
    let fields = if cmd.legacy {
        SeasonFields::legacy(&cmd.numbers)
    } else {
        SeasonFields::current(&cmd.numbers)
    };
    let range = season_range(fields);
    finish(
        output,
        Formatted {
            input: &cmd.numbers,
            output: range.clone(),
        },
        range,
    )
}

pub fn elapsed_cmd(cmd: ElapsedCmd, output: &Output) -> ExitCode {
    let elapsed = format_elapsed(cmd.seconds);
    finish(
        output,
        Formatted {
            input: cmd.seconds,
            output: elapsed.clone(),
        },
        elapsed,
    )
}

// =============================================================================
// API Body Rendering
// =============================================================================

/// Read an input file, or stdin when no file (or `-`) was given
pub fn read_input(cmd: &InputCmd) -> Result<String, ViewError> {
    if cmd.is_stdin() {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    let path: &Path = cmd.file.as_deref().unwrap_or(Path::new("-"));
    debug!(path = %path.display(), "reading API body");
    Ok(std::fs::read_to_string(path)?)
}

/// Decode an API body into `T`
pub fn decode<T: DeserializeOwned>(raw: &str, what: &'static str) -> Result<T, ViewError> {
    serde_json::from_str(raw).map_err(|e| ViewError::invalid_json(what, e))
}

/// Render each item with its Display impl, one per line (or one row each in JSON)
fn render_items<T: std::fmt::Display>(
    cmd: InputCmd,
    output: &Output,
    what: &'static str,
    load: impl FnOnce(&str) -> Result<Vec<T>, ViewError>,
) -> ExitCode {
    let raw = match read_input(&cmd) {
        Ok(raw) => raw,
        Err(e) => return output.error(e.to_string(), ExitCode::InvalidInput),
    };
    let items = match load(&raw) {
        Ok(items) => items,
        Err(e) => return output.error(e.to_string(), ExitCode::InvalidInput),
    };
    debug!(count = items.len(), what, "rendering API body");

    let rows: Vec<RenderedRow> = items
        .iter()
        .map(|item| RenderedRow {
            text: item.to_string(),
        })
        .collect();
    let text = rows
        .iter()
        .map(|r| r.text.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    if rows.is_empty() {
        output.info(format!("No {} found", what));
    }
    finish(output, rows, text)
}

pub fn torrents_cmd(cmd: InputCmd, output: &Output) -> ExitCode {
    render_items(cmd, output, "show torrents", |raw| {
        decode::<Vec<RichShowTorrent>>(raw, "show torrents")
    })
}

pub fn show_cmd(cmd: InputCmd, output: &Output) -> ExitCode {
    render_items(cmd, output, "show", |raw| {
        let show: PublicShow = decode(raw, "show")?;
        let mut lines = vec![show.to_string()];
        lines.extend(show.seasons.iter().map(|s| format!("  {}", s)));
        Ok(lines)
    })
}

pub fn search_cmd(cmd: InputCmd, output: &Output) -> ExitCode {
    render_items(cmd, output, "search results", |raw| {
        decode::<Vec<MetaDataProviderShowSearchResult>>(raw, "search results")
    })
}

pub fn requests_cmd(cmd: InputCmd, output: &Output) -> ExitCode {
    render_items(cmd, output, "season requests", |raw| {
        decode::<Vec<SeasonRequest>>(raw, "season requests")
    })
}

pub fn indexer_cmd(cmd: InputCmd, output: &Output) -> ExitCode {
    render_items(cmd, output, "indexer results", |raw| {
        decode::<Vec<PublicIndexerQueryResult>>(raw, "indexer results")
    })
}

// =============================================================================
// Endpoint / Config Commands
// =============================================================================

pub fn endpoint_cmd(cmd: EndpointCmd, config: &Config, output: &Output) -> ExitCode {
    if cmd.list {
        return finish(output, ROUTE_NAMES, ROUTE_NAMES.join("\n"));
    }

    let Some(name) = cmd.route.as_deref() else {
        return output.error("route name required", ExitCode::InvalidArgs);
    };
    let route = match ApiRoute::parse(name, &cmd.params, cmd.query.as_deref()) {
        Ok(route) => route,
        Err(e) => return output.error(e.to_string(), ExitCode::InvalidArgs),
    };

    let context = if cmd.ssr {
        RenderContext::Server
    } else {
        RenderContext::Browser
    };
    let url = match route.url(config, context) {
        Ok(url) => url,
        Err(e) => return output.error(e.to_string(), ExitCode::ConfigError),
    };
    debug!(%route, %url, "resolved endpoint");

    let text = format!("{} {}", route.method(), url);
    finish(
        output,
        EndpointResponse {
            route: name.to_string(),
            method: route.method().to_string(),
            url,
            ssr: cmd.ssr,
        },
        text,
    )
}

pub fn config_cmd(
    _cmd: ConfigCmd,
    config: &Config,
    path: Option<&Path>,
    output: &Output,
) -> ExitCode {
    let response = ConfigResponse {
        path: path.map(|p| p.display().to_string()),
        api_url: config.api_base(RenderContext::Browser),
        ssr_api_url: config.api_base(RenderContext::Server),
        web_ssr: config.ssr_enabled(),
    };
    let text = format!(
        "api_url = {}\nssr_api_url = {}\nweb_ssr = {}",
        response.api_url, response.ssr_api_url, response.web_ssr
    );
    finish(output, response, text)
}
