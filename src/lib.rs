//! # quakemap
//!
//! Near-real-time earthquake map built in the Leaflet style.
//!
//! One fetch of a USGS GeoJSON summary feed becomes one circle marker per
//! event, sized by magnitude and colored by depth, overlaid on a choice of
//! two base tile layers with a layer-toggle control. The composed map is
//! handed to an injected [`MapEngine`](rendering::engine::MapEngine); the
//! bundled [`LeafletDocument`](rendering::leaflet::LeafletDocument) turns it
//! into a self-contained HTML page.

pub mod core;
pub mod data;
pub mod layers;
pub mod prelude;
pub mod rendering;
pub mod ui;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    composer::MapComposer,
    config::{AccessToken, QuakeMapConfig},
    geo::LatLng,
    map::{Map, MapOptions},
};

pub use layers::{
    base::LayerTrait, group::FeatureGroup, marker::CircleMarker, tile::TileLayer,
};

pub use data::{
    feed::{FeedKind, QuakeFeed, RawEvent},
    source::{FeedSource, HttpFeedSource, StaticFeedSource},
};

pub use ui::{
    controls::LayerControl,
    popup::Popup,
    style::{color_for_depth, radius_for_magnitude, DepthColor},
};

pub use rendering::{engine::MapEngine, leaflet::LeafletDocument, scene::SceneRecorder};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Feed error: {0}")]
    Feed(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Layer error: {0}")]
    Layer(String),
}

/// Error type alias for convenience
pub type Error = MapError;
