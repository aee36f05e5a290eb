//! Data structures mirroring the media manager API
//!
//! Organized by the API area each type comes from:
//! - **Codes**: quality tier and torrent status
//! - **Users**: accounts returned by `/users/*`
//! - **TV**: shows, seasons, episodes and season files
//! - **Torrents**: torrents and indexer search results
//! - **Requests**: season requests and their create/update bodies
//!
//! Display impls render the same strings the web pages show.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::format::{media_title, quality_label, season_range, status_label, SeasonFields};

// =============================================================================
// Codes
// =============================================================================

/// Quality tier as sent by the API (integer code, 1 = best)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "i64", into = "i64")]
pub enum Quality {
    Uhd,
    FullHd,
    Hd,
    Sd,
    #[default]
    Unknown,
}

impl Quality {
    /// Integer code used on the wire
    pub fn code(&self) -> i64 {
        match self {
            Quality::Uhd => 1,
            Quality::FullHd => 2,
            Quality::Hd => 3,
            Quality::Sd => 4,
            Quality::Unknown => 5,
        }
    }

    /// Display label, e.g. `1080p/FullHD`
    pub fn label(&self) -> &'static str {
        quality_label(self.code())
    }
}

impl From<i64> for Quality {
    fn from(code: i64) -> Self {
        match code {
            1 => Quality::Uhd,
            2 => Quality::FullHd,
            3 => Quality::Hd,
            4 => Quality::Sd,
            _ => Quality::Unknown,
        }
    }
}

impl From<Quality> for i64 {
    fn from(quality: Quality) -> i64 {
        quality.code()
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lifecycle state of a download as sent by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "i64", into = "i64")]
pub enum TorrentStatus {
    Finished,
    Downloading,
    Error,
    #[default]
    Unknown,
}

impl TorrentStatus {
    /// Integer code used on the wire
    pub fn code(&self) -> i64 {
        match self {
            TorrentStatus::Finished => 1,
            TorrentStatus::Downloading => 2,
            TorrentStatus::Error => 3,
            TorrentStatus::Unknown => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        status_label(self.code())
    }
}

impl From<i64> for TorrentStatus {
    fn from(code: i64) -> Self {
        match code {
            1 => TorrentStatus::Finished,
            2 => TorrentStatus::Downloading,
            3 => TorrentStatus::Error,
            _ => TorrentStatus::Unknown,
        }
    }
}

impl From<TorrentStatus> for i64 {
    fn from(status: TorrentStatus) -> i64 {
        status.code()
    }
}

impl fmt::Display for TorrentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Users
// =============================================================================

/// Account as returned by `/users/me` and `/users/all`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub is_superuser: Option<bool>,
    #[serde(default)]
    pub is_verified: Option<bool>,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.email)?;
        if self.is_superuser == Some(true) {
            write!(f, " (admin)")?;
        }
        Ok(())
    }
}

/// Body for creating an account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_superuser: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
}

/// Partial account update; absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_superuser: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
}

// =============================================================================
// TV
// =============================================================================

/// Episode within a season
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Episode {
    pub number: u32,
    pub external_id: i64,
    pub title: String,
    #[serde(default)]
    pub id: Option<Uuid>,
}

impl fmt::Display for Episode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:02} - {}", self.number, self.title)
    }
}

/// Season as stored in the library
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Season {
    pub number: u32,
    pub name: String,
    pub overview: String,
    pub external_id: i64,
    #[serde(default)]
    pub episodes: Vec<Episode>,
    #[serde(default)]
    pub id: Option<Uuid>,
}

/// Season as exposed on a show page, with its download flag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicSeason {
    pub number: u32,
    pub name: String,
    pub downloaded: bool,
    pub overview: String,
    pub external_id: i64,
    #[serde(default)]
    pub episodes: Vec<Episode>,
    #[serde(default)]
    pub id: Option<Uuid>,
}

impl fmt::Display for PublicSeason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "S{:02} {} ({} episodes){}",
            self.number,
            self.name,
            self.episodes.len(),
            if self.downloaded { " ✓" } else { "" }
        )
    }
}

/// File imported for a season, as listed by `/tv/shows/{id}/{season}/files`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicSeasonFile {
    pub season_id: Uuid,
    pub quality: Quality,
    #[serde(default)]
    pub torrent_id: Option<Uuid>,
    #[serde(default)]
    pub file_path_suffix: Option<String>,
    pub downloaded: bool,
}

impl fmt::Display for PublicSeasonFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.quality)?;
        if let Some(suffix) = self.file_path_suffix.as_deref().filter(|s| !s.is_empty()) {
            write!(f, " {}", suffix)?;
        }
        write!(
            f,
            " {}",
            if self.downloaded { "downloaded" } else { "missing" }
        )
    }
}

/// Show as stored in the library
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Show {
    pub id: Uuid,
    pub name: String,
    pub overview: String,
    pub year: Option<i32>,
    pub external_id: i64,
    pub metadata_provider: String,
    #[serde(default)]
    pub seasons: Vec<Season>,
    #[serde(default)]
    pub continuous_download: bool,
    #[serde(default)]
    pub ended: bool,
}

impl Show {
    pub fn title(&self) -> String {
        media_title(&self.name, self.year)
    }
}

impl fmt::Display for Show {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Show as returned by `/tv/shows/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicShow {
    pub id: Uuid,
    pub name: String,
    pub overview: String,
    pub year: Option<i32>,
    pub external_id: i64,
    pub metadata_provider: String,
    #[serde(default)]
    pub seasons: Vec<PublicSeason>,
    #[serde(default)]
    pub continuous_download: bool,
    #[serde(default)]
    pub ended: bool,
}

impl PublicShow {
    pub fn title(&self) -> String {
        media_title(&self.name, self.year)
    }

    /// Number of seasons with a completed download
    pub fn downloaded_seasons(&self) -> usize {
        self.seasons.iter().filter(|s| s.downloaded).count()
    }
}

impl fmt::Display for PublicShow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}/{} seasons downloaded{}",
            self.title(),
            self.downloaded_seasons(),
            self.seasons.len(),
            if self.ended { " (ended)" } else { "" }
        )
    }
}

/// Result of a metadata provider show search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaDataProviderShowSearchResult {
    pub poster_path: Option<String>,
    pub overview: Option<String>,
    pub name: String,
    pub external_id: i64,
    pub year: Option<i32>,
    pub metadata_provider: String,
    pub added: bool,
    pub vote_average: f32,
}

impl fmt::Display for MetaDataProviderShowSearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] ⭐ {:.1}{}",
            media_title(&self.name, self.year),
            self.metadata_provider,
            self.vote_average,
            if self.added { " (in library)" } else { "" }
        )
    }
}

// =============================================================================
// Torrents
// =============================================================================

/// Torrent as returned by `/torrent`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Torrent {
    pub status: TorrentStatus,
    pub title: String,
    pub quality: Quality,
    pub imported: bool,
    pub hash: String,
    #[serde(default)]
    pub id: Option<Uuid>,
}

impl fmt::Display for Torrent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] {}", self.title, self.quality, self.status)?;
        if self.imported {
            write!(f, " (imported)")?;
        }
        Ok(())
    }
}

/// Release found by an indexer search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicIndexerQueryResult {
    pub id: Uuid,
    pub title: String,
    pub quality: Quality,
    pub seeders: u32,
    #[serde(default)]
    pub flags: Vec<String>,
    /// Legacy field name for the release's season numbers
    #[serde(default)]
    pub season: Vec<u32>,
    pub size: u64,
}

impl PublicIndexerQueryResult {
    pub fn season_fields(&self) -> SeasonFields<'_> {
        SeasonFields::legacy(&self.season)
    }

    /// Format size for display
    pub fn format_size(&self) -> String {
        const GIB: f64 = 1024.0 * 1024.0 * 1024.0;
        const MIB: f64 = 1024.0 * 1024.0;
        let bytes = self.size as f64;
        if bytes >= GIB {
            format!("{:.1} GB", bytes / GIB)
        } else if bytes >= MIB {
            format!("{:.0} MB", bytes / MIB)
        } else {
            format!("{} KB", self.size / 1024)
        }
    }
}

impl fmt::Display for PublicIndexerQueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] S{} {} 👤{} {}",
            self.quality,
            season_range(self.season_fields()),
            self.format_size(),
            self.seeders,
            self.title
        )
    }
}

/// Torrent attached to a show, as grouped by `/tv/shows/torrents`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RichSeasonTorrent {
    pub torrent_id: Uuid,
    pub torrent_title: String,
    pub status: TorrentStatus,
    pub quality: Quality,
    pub imported: bool,
    #[serde(default)]
    pub file_path_suffix: String,
    #[serde(default)]
    pub seasons: Vec<u32>,
}

impl RichSeasonTorrent {
    pub fn season_fields(&self) -> SeasonFields<'_> {
        SeasonFields::current(&self.seasons)
    }
}

impl fmt::Display for RichSeasonTorrent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {} S{}",
            self.torrent_title,
            self.quality,
            self.status,
            season_range(self.season_fields())
        )?;
        if self.imported {
            write!(f, " (imported)")?;
        }
        Ok(())
    }
}

/// A show together with all of its torrents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RichShowTorrent {
    pub show_id: Uuid,
    pub name: String,
    pub year: Option<i32>,
    pub metadata_provider: String,
    #[serde(default)]
    pub torrents: Vec<RichSeasonTorrent>,
}

impl RichShowTorrent {
    pub fn title(&self) -> String {
        media_title(&self.name, self.year)
    }
}

impl fmt::Display for RichShowTorrent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())?;
        for torrent in &self.torrents {
            write!(f, "\n  {}", torrent)?;
        }
        Ok(())
    }
}

// =============================================================================
// Requests
// =============================================================================

/// Body for requesting a season download
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSeasonRequest {
    pub season_id: Uuid,
    pub min_quality: Quality,
    pub wanted_quality: Quality,
}

/// Body for changing the qualities of an existing request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSeasonRequest {
    pub id: Uuid,
    pub min_quality: Quality,
    pub wanted_quality: Quality,
}

/// Season request as listed by `/tv/seasons/requests`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonRequest {
    pub id: Uuid,
    pub season: Season,
    pub show: Show,
    pub min_quality: Quality,
    pub wanted_quality: Quality,
    #[serde(default)]
    pub requested_by: Option<User>,
    pub authorized: bool,
    #[serde(default)]
    pub authorized_by: Option<User>,
}

impl fmt::Display for SeasonRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} S{:02}: {} - {} ({})",
            self.show.title(),
            self.season.number,
            self.min_quality,
            self.wanted_quality,
            if self.authorized { "authorized" } else { "pending" }
        )?;
        if let Some(user) = &self.requested_by {
            write!(f, " by {}", user.email)?;
        }
        Ok(())
    }
}
