//! mediamanager-view - presentation layer for a media library manager
//!
//! Turns the media manager API's codes and records into the strings its
//! dashboard shows: quality and status labels, `Name (Year)` titles, season
//! ranges and compact elapsed times.
//!
//! # Modules
//!
//! - `format` - Pure formatting functions and lookup tables
//! - `models` - API schema types with display rendering
//! - `config` - API base URL and SSR configuration
//! - `endpoints` - Catalog of API routes and URL building
//! - `cli` / `commands` - The `mmview` command line

pub mod cli;
pub mod commands;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod format;
pub mod models;

// Re-export commonly used types
pub use format::{
    format_elapsed, format_elapsed_duration, media_title, quality_label, season_range,
    status_label, SeasonFields, UNKNOWN_LABEL,
};
pub use models::{
    PublicSeason, PublicSeasonFile, PublicShow, Quality, RichSeasonTorrent, RichShowTorrent,
    SeasonRequest, Show, Torrent, TorrentStatus, User,
};

pub use config::{Config, RenderContext};
pub use endpoints::ApiRoute;
pub use error::ViewError;
