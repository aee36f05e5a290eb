//! API Model Tests
//!
//! Decoding realistic API bodies and rendering them the way the dashboard does.

use mediamanager_view::models::{
    CreateSeasonRequest, PublicShow, Quality, RichShowTorrent, SeasonRequest, Torrent,
    TorrentStatus,
};
use serde_json::json;

const SHOW_ID: &str = "2b0f5b4e-8a7c-4d2e-9f61-3c8d1e0a7b59";
const SEASON_ID: &str = "9c4f1e2a-5b6d-4e7f-8a9b-0c1d2e3f4a5b";
const USER_ID: &str = "0f8e7d6c-5b4a-4392-8170-6e5d4c3b2a19";

fn show_torrents_body() -> serde_json::Value {
    json!([
        {
            "show_id": SHOW_ID,
            "name": "Severance",
            "year": 2022,
            "metadata_provider": "tmdb",
            "torrents": [
                {
                    "torrent_id": "6f1c3a52-3d1b-4c8e-9d55-0e7f4f1e2a10",
                    "torrent_title": "Severance.S01.2160p",
                    "status": 1,
                    "quality": 1,
                    "imported": true,
                    "file_path_suffix": "",
                    "seasons": [1]
                },
                {
                    "torrent_id": "7a2d4b63-4e2c-4d9f-8e66-1f8a5a2f3b21",
                    "torrent_title": "Severance.S01-S02.1080p",
                    "status": 2,
                    "quality": 2,
                    "imported": false,
                    "file_path_suffix": "",
                    "seasons": [1, 2]
                }
            ]
        },
        {
            "show_id": "3c1a6f5e-9b8d-4e3f-a072-4d9e2f1b8c60",
            "name": "Unknown Pilot",
            "year": null,
            "metadata_provider": "tvdb",
            "torrents": []
        }
    ])
}

fn season_request_body() -> serde_json::Value {
    json!({
        "id": "5e6f7a8b-9c0d-4e1f-a2b3-c4d5e6f7a8b9",
        "min_quality": 3,
        "wanted_quality": 1,
        "authorized": false,
        "requested_by": { "id": USER_ID, "email": "alice@example.com" },
        "season": {
            "number": 2,
            "name": "Season 2",
            "overview": "",
            "external_id": 1001,
            "episodes": [],
            "id": SEASON_ID
        },
        "show": {
            "id": SHOW_ID,
            "name": "Severance",
            "overview": "",
            "year": 2022,
            "external_id": 95396,
            "metadata_provider": "tmdb",
            "seasons": [],
            "continuous_download": false,
            "ended": false
        }
    })
}

// =============================================================================
// Torrent Rendering
// =============================================================================

#[test]
fn test_show_torrents_render() {
    let shows: Vec<RichShowTorrent> = serde_json::from_value(show_torrents_body()).unwrap();
    assert_eq!(shows.len(), 2);

    assert_eq!(
        shows[0].to_string(),
        "Severance (2022)\n  \
         Severance.S01.2160p [4K/UHD] finished S1 (imported)\n  \
         Severance.S01-S02.1080p [1080p/FullHD] downloading S1-2"
    );
    assert_eq!(shows[1].to_string(), "Unknown Pilot");
}

/// Test: a torrent without season numbers still renders
#[test]
fn test_torrent_without_seasons_renders_diagnostic() {
    let shows: Vec<RichShowTorrent> = serde_json::from_value(json!([{
        "show_id": SHOW_ID,
        "name": "Show",
        "year": 2020,
        "metadata_provider": "tmdb",
        "torrents": [{
            "torrent_id": "6f1c3a52-3d1b-4c8e-9d55-0e7f4f1e2a10",
            "torrent_title": "Show.Complete",
            "status": 3,
            "quality": 5,
            "imported": false,
            "file_path_suffix": "",
            "seasons": []
        }]
    }]))
    .unwrap();

    let text = shows[0].torrents[0].to_string();
    assert!(text.starts_with("Show.Complete [unknown] error SError parsing season range"));
}

#[test]
fn test_torrent_unknown_codes_decode() {
    let torrent: Torrent = serde_json::from_value(json!({
        "status": 17,
        "title": "Odd.Release",
        "quality": 0,
        "imported": false,
        "hash": "abcdef"
    }))
    .unwrap();

    assert_eq!(torrent.status, TorrentStatus::Unknown);
    assert_eq!(torrent.quality, Quality::Unknown);
    assert_eq!(torrent.to_string(), "Odd.Release [unknown] unknown");
}

// =============================================================================
// Show Rendering
// =============================================================================

#[test]
fn test_public_show_render() {
    let show: PublicShow = serde_json::from_value(json!({
        "id": SHOW_ID,
        "name": "Severance",
        "overview": "",
        "year": 2022,
        "external_id": 95396,
        "metadata_provider": "tmdb",
        "continuous_download": true,
        "ended": false,
        "seasons": [
            { "number": 1, "name": "Season 1", "downloaded": true, "overview": "",
              "external_id": 1000, "episodes": [] },
            { "number": 2, "name": "Season 2", "downloaded": false, "overview": "",
              "external_id": 1001, "episodes": [] }
        ]
    }))
    .unwrap();

    assert_eq!(show.downloaded_seasons(), 1);
    assert_eq!(show.to_string(), "Severance (2022) - 1/2 seasons downloaded");
    assert_eq!(show.seasons[0].to_string(), "S01 Season 1 (0 episodes) ✓");
}

// =============================================================================
// Request Rendering
// =============================================================================

#[test]
fn test_season_request_render() {
    let request: SeasonRequest = serde_json::from_value(season_request_body()).unwrap();
    assert_eq!(
        request.to_string(),
        "Severance (2022) S02: 720p/HD - 4K/UHD (pending) by alice@example.com"
    );
}

#[test]
fn test_create_request_serializes_codes() {
    let body = CreateSeasonRequest {
        season_id: SEASON_ID.parse().unwrap(),
        min_quality: Quality::Sd,
        wanted_quality: Quality::FullHd,
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({ "season_id": SEASON_ID, "min_quality": 4, "wanted_quality": 2 })
    );
}

// =============================================================================
// Crate-Root Exports
// =============================================================================

/// Test: the schema types are reachable from the crate root
#[test]
fn test_root_exports_decode() {
    use mediamanager_view::{Quality as RootQuality, SeasonRequest as RootRequest, TorrentStatus};

    let request: RootRequest = serde_json::from_value(season_request_body()).unwrap();
    assert_eq!(request.min_quality, RootQuality::Hd);
    assert_eq!(TorrentStatus::from(2).label(), "downloading");
}
