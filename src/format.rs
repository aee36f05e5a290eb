//! Presentation formatting for library, torrent and request views
//!
//! Everything here is a pure function over its arguments and a few fixed
//! tables, so the output can be dropped straight into rendered pages:
//! - **Labels**: quality tier and torrent status codes
//! - **Titles**: `Name (Year)` display names
//! - **Seasons**: compact `first-last` season ranges
//! - **Durations**: single-unit elapsed strings (`3d`, `2mo`, ...)

use std::fmt;
use std::time::Duration;

use tracing::warn;

/// Label returned for any code missing from a lookup table
pub const UNKNOWN_LABEL: &str = "unknown";

// =============================================================================
// Code Labels
// =============================================================================

const QUALITY_LABELS: [(i64, &str); 5] = [
    (1, "4K/UHD"),
    (2, "1080p/FullHD"),
    (3, "720p/HD"),
    (4, "480p/SD"),
    (5, "unknown"),
];

const STATUS_LABELS: [(i64, &str); 4] = [
    (1, "finished"),
    (2, "downloading"),
    (3, "error"),
    (4, "unknown"),
];

fn lookup(table: &[(i64, &'static str)], code: i64) -> &'static str {
    table
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
        .unwrap_or(UNKNOWN_LABEL)
}

/// Human-readable label for a quality tier code (1 = best, 5 = unknown)
pub fn quality_label(code: i64) -> &'static str {
    lookup(&QUALITY_LABELS, code)
}

/// Human-readable label for a torrent status code
pub fn status_label(code: i64) -> &'static str {
    lookup(&STATUS_LABELS, code)
}

// =============================================================================
// Titles
// =============================================================================

/// Display name for a show or movie, with the release year when known
pub fn media_title(name: &str, year: Option<i32>) -> String {
    match year {
        Some(year) => format!("{} ({})", name, year),
        None => name.to_string(),
    }
}

// =============================================================================
// Season Ranges
// =============================================================================

/// Season numbers attached to a release.
///
/// Older API responses carry them under `season`, newer ones under
/// `seasons`. At most one of the two is expected to be populated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeasonFields<'a> {
    pub season: Option<&'a [u32]>,
    pub seasons: Option<&'a [u32]>,
}

impl<'a> SeasonFields<'a> {
    /// Seasons delivered under the legacy `season` field
    pub fn legacy(season: &'a [u32]) -> Self {
        Self {
            season: Some(season),
            seasons: None,
        }
    }

    /// Seasons delivered under the current `seasons` field
    pub fn current(seasons: &'a [u32]) -> Self {
        Self {
            season: None,
            seasons: Some(seasons),
        }
    }

    /// The first non-empty candidate, legacy field first
    pub fn numbers(&self) -> Option<&'a [u32]> {
        self.season
            .filter(|s| !s.is_empty())
            .or_else(|| self.seasons.filter(|s| !s.is_empty()))
    }
}

impl fmt::Display for SeasonFields<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "seasons={}, season={}",
            DisplayList(self.seasons),
            DisplayList(self.season)
        )
    }
}

struct DisplayList<'a>(Option<&'a [u32]>);

impl fmt::Display for DisplayList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None => write!(f, "none"),
            Some(list) => write!(f, "{:?}", list),
        }
    }
}

/// Compact season range: `"3"` for one season, `"1-4"` for several.
///
/// Uses the first and last entries as given; the input is assumed to be
/// ascending already. When no season data is present a diagnostic string is
/// returned in place of the range.
pub fn season_range(fields: SeasonFields<'_>) -> String {
    match fields.numbers() {
        Some([only]) => only.to_string(),
        Some([first, .., last]) => format!("{}-{}", first, last),
        _ => {
            warn!(%fields, "no season numbers to build a range from");
            format!("Error parsing season range: {}", fields)
        }
    }
}

// =============================================================================
// Durations
// =============================================================================

const SECS_PER_DAY: f64 = 24.0 * 60.0 * 60.0;

/// Units tried largest first
const ELAPSED_UNITS: [(&str, f64); 6] = [
    ("y", 365.25 * SECS_PER_DAY),
    ("mo", 30.44 * SECS_PER_DAY),
    ("d", SECS_PER_DAY),
    ("h", 60.0 * 60.0),
    ("m", 60.0),
    ("s", 1.0),
];

/// Elapsed time in the single largest whole unit (e.g. `90.0` → `"1m"`).
///
/// Negative and sub-second inputs render as `"0s"`.
pub fn format_elapsed(seconds: f64) -> String {
    if seconds < 0.0 {
        return "0s".to_string();
    }

    ELAPSED_UNITS
        .iter()
        .map(|(suffix, unit)| (suffix, seconds / unit))
        .find(|(_, value)| *value >= 1.0)
        .map(|(suffix, value)| format!("{}{}", value.floor(), suffix))
        .unwrap_or_else(|| "0s".to_string())
}

/// [`format_elapsed`] for a [`Duration`]
pub fn format_elapsed_duration(elapsed: Duration) -> String {
    format_elapsed(elapsed.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_labels() {
        assert_eq!(quality_label(1), "4K/UHD");
        assert_eq!(quality_label(2), "1080p/FullHD");
        assert_eq!(quality_label(3), "720p/HD");
        assert_eq!(quality_label(4), "480p/SD");
        assert_eq!(quality_label(5), "unknown");
    }

    #[test]
    fn test_quality_label_out_of_range() {
        assert_eq!(quality_label(0), UNKNOWN_LABEL);
        assert_eq!(quality_label(6), UNKNOWN_LABEL);
        assert_eq!(quality_label(-1), UNKNOWN_LABEL);
        assert_eq!(quality_label(i64::MAX), UNKNOWN_LABEL);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(status_label(1), "finished");
        assert_eq!(status_label(2), "downloading");
        assert_eq!(status_label(3), "error");
        assert_eq!(status_label(4), "unknown");
        assert_eq!(status_label(5), UNKNOWN_LABEL);
        assert_eq!(status_label(0), UNKNOWN_LABEL);
    }

    #[test]
    fn test_media_title() {
        assert_eq!(media_title("Show", None), "Show");
        assert_eq!(media_title("Show", Some(2020)), "Show (2020)");
        assert_eq!(media_title("", Some(1999)), " (1999)");
    }

    #[test]
    fn test_season_range_single() {
        assert_eq!(season_range(SeasonFields::current(&[3])), "3");
        assert_eq!(season_range(SeasonFields::legacy(&[7])), "7");
    }

    #[test]
    fn test_season_range_multiple() {
        assert_eq!(season_range(SeasonFields::current(&[1, 2, 3])), "1-3");
        assert_eq!(season_range(SeasonFields::legacy(&[4, 5])), "4-5");
    }

    #[test]
    fn test_season_range_keeps_given_order() {
        assert_eq!(season_range(SeasonFields::current(&[5, 1, 3])), "5-3");
    }

    #[test]
    fn test_season_range_empty_legacy_falls_through() {
        let fields = SeasonFields {
            season: Some(&[]),
            seasons: Some(&[2, 3]),
        };
        assert_eq!(season_range(fields), "2-3");
    }

    #[test]
    fn test_season_range_missing() {
        let out = season_range(SeasonFields::default());
        assert_eq!(out, "Error parsing season range: seasons=none, season=none");

        let out = season_range(SeasonFields::current(&[]));
        assert_eq!(out, "Error parsing season range: seasons=[], season=none");
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(-5.0), "0s");
        assert_eq!(format_elapsed(0.0), "0s");
        assert_eq!(format_elapsed(0.5), "0s");
        assert_eq!(format_elapsed(1.0), "1s");
        assert_eq!(format_elapsed(59.9), "59s");
        assert_eq!(format_elapsed(90.0), "1m");
        assert_eq!(format_elapsed(7200.0), "2h");
        assert_eq!(format_elapsed(90000.0), "1d");
    }

    #[test]
    fn test_format_elapsed_long_units() {
        assert_eq!(format_elapsed(31.0 * SECS_PER_DAY), "1mo");
        assert_eq!(format_elapsed(400.0 * SECS_PER_DAY), "1y");
        assert_eq!(format_elapsed(3.5 * 365.25 * SECS_PER_DAY), "3y");
    }

    #[test]
    fn test_format_elapsed_beyond_u64() {
        let out = format_elapsed(1e30);
        let years: f64 = out.strip_suffix('y').unwrap().parse().unwrap();
        assert_eq!(years, (1e30 / (365.25 * SECS_PER_DAY)).floor());

        let huge = format_elapsed(1e300);
        assert!(huge.ends_with('y'));
        assert_ne!(huge, format!("{}y", u64::MAX));
        assert!(huge.len() > 290);
    }

    #[test]
    fn test_format_elapsed_nan() {
        assert_eq!(format_elapsed(f64::NAN), "0s");
    }

    #[test]
    fn test_format_elapsed_duration() {
        assert_eq!(format_elapsed_duration(Duration::from_secs(3600)), "1h");
        assert_eq!(format_elapsed_duration(Duration::from_millis(400)), "0s");
    }
}
