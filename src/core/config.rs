//! Configuration for the earthquake map
//!
//! Every field has a default matching the stock map (1.0+ magnitude feed of
//! the past day, continental-US view, Mapbox street/dark tiles capped at zoom
//! 18). A JSON file may override any subset of fields. The tile provider
//! credential is never part of the file; it comes from the environment or the
//! caller as an [`AccessToken`].

use crate::{
    core::{
        constants::{
            ACCESS_TOKEN_ENV_VARS, DEFAULT_CENTER, DEFAULT_ZOOM, MAP_CONTAINER_ID, TILE_MAX_ZOOM,
        },
        geo::LatLng,
    },
    data::feed::FeedKind,
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuakeMapConfig {
    pub feed: FeedConfig,
    pub view: ViewConfig,
    pub tiles: TileConfig,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub kind: FeedKind,
    /// Explicit feed URL, wins over `kind`
    pub url: Option<String>,
    /// Request timeout; none by default
    pub timeout_secs: Option<u64>,
}

impl FeedConfig {
    pub fn url(&self) -> String {
        self.url.clone().unwrap_or_else(|| self.kind.url())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub center: LatLng,
    pub zoom: f64,
    /// DOM id of the element hosting the map
    pub container: String,
    pub title: String,
    pub control_collapsed: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            center: LatLng::new(DEFAULT_CENTER.0, DEFAULT_CENTER.1),
            zoom: DEFAULT_ZOOM,
            container: MAP_CONTAINER_ID.to_string(),
            title: "Earthquakes".to_string(),
            control_collapsed: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileConfig {
    pub max_zoom: u8,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            max_zoom: TILE_MAX_ZOOM,
        }
    }
}

impl QuakeMapConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.view.center.is_valid() {
            return Err(Error::InvalidCoordinates(format!(
                "map center {:?} is out of range",
                self.view.center
            )));
        }
        if !(0.0..=self.tiles.max_zoom as f64).contains(&self.view.zoom) {
            return Err(Error::Config(format!(
                "zoom {} is outside 0..={}",
                self.view.zoom, self.tiles.max_zoom
            )));
        }
        if self.view.container.trim().is_empty() {
            return Err(Error::Config("map container id is empty".to_string()));
        }
        Ok(())
    }
}

/// Tile provider credential.
///
/// Kept out of `Debug` output and logs.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(Error::Config("tile provider access token is empty".to_string()));
        }
        Ok(Self(token))
    }

    /// Resolves the token through `lookup`, trying each of
    /// [`ACCESS_TOKEN_ENV_VARS`] in order
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        ACCESS_TOKEN_ENV_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .find(|value| !value.trim().is_empty())
            .map(Self)
            .ok_or_else(|| {
                Error::Config(format!(
                    "no tile provider access token; set one of {}",
                    ACCESS_TOKEN_ENV_VARS.join(", ")
                ))
            })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::feed::{FeedMagnitude, FeedPeriod};
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = QuakeMapConfig::default();
        assert_eq!(config.view.center, LatLng::new(37.09, -95.71));
        assert_eq!(config.view.zoom, 5.0);
        assert_eq!(config.tiles.max_zoom, 18);
        assert!(!config.view.control_collapsed);
        assert_eq!(
            config.feed.url(),
            "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/1.0_day.geojson"
        );
        assert!(config.feed.timeout_secs.is_none());
        config.validate().unwrap();
    }

    #[test]
    fn test_partial_json_overrides() {
        let config = QuakeMapConfig::from_json_str(
            r#"{"feed": {"kind": "4.5_week", "timeout_secs": 30}, "view": {"zoom": 3}}"#,
        )
        .unwrap();

        assert_eq!(config.feed.kind, FeedKind::new(FeedMagnitude::M4_5, FeedPeriod::Week));
        assert_eq!(config.feed.timeout_secs, Some(30));
        assert_eq!(config.view.zoom, 3.0);
        assert_eq!(config.view.center, LatLng::new(37.09, -95.71));
    }

    #[test]
    fn test_explicit_url_wins() {
        let config =
            QuakeMapConfig::from_json_str(r#"{"feed": {"url": "http://localhost/feed.json"}}"#)
                .unwrap();
        assert_eq!(config.feed.url(), "http://localhost/feed.json");
    }

    #[test]
    fn test_invalid_configs() {
        assert!(QuakeMapConfig::from_json_str(r#"{"view": {"zoom": 25}}"#).is_err());
        assert!(QuakeMapConfig::from_json_str(r#"{"view": {"center": {"lat": 95, "lng": 0}}}"#).is_err());
        assert!(QuakeMapConfig::from_json_str(r#"{"view": {"container": " "}}"#).is_err());
        assert!(QuakeMapConfig::from_json_str(r#"{"feed": {"kind": "5.0_day"}}"#).is_err());
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"view": {{"title": "Quakes"}}}}"#).unwrap();

        let config = QuakeMapConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.view.title, "Quakes");
    }

    #[test]
    fn test_access_token_lookup_order() {
        let token = AccessToken::from_lookup(|name| match name {
            "MAPBOX_ACCESS_TOKEN" => Some("mapbox".to_string()),
            "API_KEY" => Some("legacy".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(token.as_str(), "mapbox");

        let token = AccessToken::from_lookup(|name| match name {
            "QUAKEMAP_ACCESS_TOKEN" => Some("".to_string()),
            "API_KEY" => Some("legacy".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(token.as_str(), "legacy");

        assert!(AccessToken::from_lookup(|_| None).is_err());
    }

    #[test]
    fn test_access_token_redacted() {
        let token = AccessToken::new("pk.secret").unwrap();
        assert_eq!(format!("{:?}", token), "AccessToken(***)");
        assert!(AccessToken::new("  ").is_err());
    }
}
