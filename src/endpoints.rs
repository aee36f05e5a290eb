//! API endpoint catalog
//!
//! Paths of every API resource the web client pages read, and URL building
//! against a [`Config`]. Nothing here performs a request.

use std::fmt;

use uuid::Uuid;

use crate::config::{Config, RenderContext};
use crate::error::{Result, ViewError};

/// An API resource, with the parameters its path needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiRoute {
    AuthMetadata,
    CurrentUser,
    AllUsers,
    Logout,
    TvShows,
    TvShow { show_id: Uuid },
    TvShowTorrents { show_id: Uuid },
    SeasonFiles { show_id: Uuid, season_number: u32 },
    Season { season_id: Uuid },
    SeasonFilesById { season_id: Uuid },
    ShowTorrents,
    TvRecommended,
    TvSearch { query: String },
    SeasonRequests,
    Torrents,
    Movie { movie_id: Uuid },
    MovieRequests,
}

/// Names accepted by [`ApiRoute::parse`], in catalog order
pub const ROUTE_NAMES: &[&str] = &[
    "auth/metadata",
    "users/me",
    "users/all",
    "logout",
    "tv/shows",
    "tv/show",
    "tv/show/torrents",
    "tv/season/files",
    "tv/season",
    "tv/season/files-by-id",
    "tv/torrents",
    "tv/recommended",
    "tv/search",
    "tv/requests",
    "torrents",
    "movie",
    "movies/requests",
];

impl ApiRoute {
    /// Path relative to the API base, starting with `/`
    pub fn path(&self) -> String {
        match self {
            ApiRoute::AuthMetadata => "/auth/metadata".to_string(),
            ApiRoute::CurrentUser => "/users/me".to_string(),
            ApiRoute::AllUsers => "/users/all".to_string(),
            ApiRoute::Logout => "/auth/cookie/logout".to_string(),
            ApiRoute::TvShows => "/tv/shows".to_string(),
            ApiRoute::TvShow { show_id } => format!("/tv/shows/{}", show_id),
            ApiRoute::TvShowTorrents { show_id } => format!("/tv/shows/{}/torrents", show_id),
            ApiRoute::SeasonFiles {
                show_id,
                season_number,
            } => format!("/tv/shows/{}/{}/files", show_id, season_number),
            ApiRoute::Season { season_id } => format!("/tv/seasons/{}", season_id),
            ApiRoute::SeasonFilesById { season_id } => {
                format!("/tv/seasons/{}/files", season_id)
            }
            ApiRoute::ShowTorrents => "/tv/shows/torrents".to_string(),
            ApiRoute::TvRecommended => "/tv/recommended".to_string(),
            ApiRoute::TvSearch { query } => {
                format!("/tv/search?query={}", urlencoding::encode(query))
            }
            ApiRoute::SeasonRequests => "/tv/seasons/requests".to_string(),
            ApiRoute::Torrents => "/torrent".to_string(),
            ApiRoute::Movie { movie_id } => format!("/movies/{}", movie_id),
            ApiRoute::MovieRequests => "/movies/requests".to_string(),
        }
    }

    /// HTTP method the web client uses for this resource
    pub fn method(&self) -> &'static str {
        match self {
            ApiRoute::Logout => "POST",
            _ => "GET",
        }
    }

    /// Build a route from its catalog name and positional parameters.
    ///
    /// `query` is only used by `tv/search`.
    pub fn parse(name: &str, params: &[String], query: Option<&str>) -> Result<Self> {
        let route = match name {
            "auth/metadata" => ApiRoute::AuthMetadata,
            "users/me" => ApiRoute::CurrentUser,
            "users/all" => ApiRoute::AllUsers,
            "logout" => ApiRoute::Logout,
            "tv/shows" => ApiRoute::TvShows,
            "tv/show" => ApiRoute::TvShow {
                show_id: uuid_param(params, 0, "show id")?,
            },
            "tv/show/torrents" => ApiRoute::TvShowTorrents {
                show_id: uuid_param(params, 0, "show id")?,
            },
            "tv/season/files" => ApiRoute::SeasonFiles {
                show_id: uuid_param(params, 0, "show id")?,
                season_number: season_param(params, 1)?,
            },
            "tv/season" => ApiRoute::Season {
                season_id: uuid_param(params, 0, "season id")?,
            },
            "tv/season/files-by-id" => ApiRoute::SeasonFilesById {
                season_id: uuid_param(params, 0, "season id")?,
            },
            "tv/torrents" => ApiRoute::ShowTorrents,
            "tv/recommended" => ApiRoute::TvRecommended,
            "tv/search" => ApiRoute::TvSearch {
                query: query
                    .map(str::to_string)
                    .or_else(|| params.first().cloned())
                    .ok_or_else(|| ViewError::InvalidParameter("search query required".into()))?,
            },
            "tv/requests" => ApiRoute::SeasonRequests,
            "torrents" => ApiRoute::Torrents,
            "movie" => ApiRoute::Movie {
                movie_id: uuid_param(params, 0, "movie id")?,
            },
            "movies/requests" => ApiRoute::MovieRequests,
            other => return Err(ViewError::UnknownRoute(other.to_string())),
        };
        Ok(route)
    }

    /// Full URL for this route as requested from `context`
    pub fn url(&self, config: &Config, context: RenderContext) -> Result<String> {
        let base = config.api_base(context);
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ViewError::InvalidConfig(format!(
                "API base URL must be http(s), got {:?}",
                base
            )));
        }
        Ok(format!("{}{}", base, self.path()))
    }
}

impl fmt::Display for ApiRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}

fn uuid_param(params: &[String], idx: usize, what: &str) -> Result<Uuid> {
    let raw = params
        .get(idx)
        .ok_or_else(|| ViewError::InvalidParameter(format!("{} required", what)))?;
    Uuid::parse_str(raw).map_err(|_| {
        ViewError::InvalidParameter(format!("{} is not a UUID: {}", what, raw))
    })
}

fn season_param(params: &[String], idx: usize) -> Result<u32> {
    let raw = params
        .get(idx)
        .ok_or_else(|| ViewError::InvalidParameter("season number required".into()))?;
    raw.parse().map_err(|_| {
        ViewError::InvalidParameter(format!("season number is not an integer: {}", raw))
    })
}
