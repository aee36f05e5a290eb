//! Error types for reading API bodies and resolving configuration

use thiserror::Error;

/// Failures at the edges of the crate: input files, JSON bodies, config
#[derive(Error, Debug)]
pub enum ViewError {
    #[error("Invalid JSON for {what}: {source}")]
    InvalidJson {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl ViewError {
    pub fn invalid_json(what: &'static str, source: serde_json::Error) -> Self {
        Self::InvalidJson { what, source }
    }
}

/// Result alias for fallible crate operations
pub type Result<T> = std::result::Result<T, ViewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_json_display() {
        let source = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = ViewError::invalid_json("torrent list", source);
        assert!(err.to_string().starts_with("Invalid JSON for torrent list:"));
    }

    #[test]
    fn test_unknown_route_display() {
        let err = ViewError::UnknownRoute("tv/bogus".to_string());
        assert_eq!(err.to_string(), "Unknown route: tv/bogus");
    }
}
