//! Fixed values of the earthquake map: view, styling thresholds and provider URLs.

/// Continental-US center the map opens on.
pub const DEFAULT_CENTER: (f64, f64) = (37.09, -95.71);

/// Initial zoom level.
pub const DEFAULT_ZOOM: f64 = 5.0;

/// Maximum zoom of both base tile layers.
pub const TILE_MAX_ZOOM: u8 = 18;

/// DOM id of the map container.
pub const MAP_CONTAINER_ID: &str = "map";

/// Depth (km) above which an event counts as deep.
pub const DEEP_THRESHOLD_KM: f64 = 300.0;

/// Depth (km) above which an event counts as intermediate.
pub const INTERMEDIATE_THRESHOLD_KM: f64 = 70.0;

pub const DEEP_COLOR: &str = "#239B56";
pub const INTERMEDIATE_COLOR: &str = "#F4D03F";
pub const SHALLOW_COLOR: &str = "#E74C3C";

/// Marker radius per unit of magnitude.
pub const RADIUS_PER_MAGNITUDE: f64 = 3.0;

/// Circle marker stroke weight.
pub const MARKER_WEIGHT: f64 = 1.0;

/// Circle marker stroke opacity.
pub const MARKER_OPACITY: f64 = 1.0;

/// Circle marker fill opacity.
pub const MARKER_FILL_OPACITY: f64 = 0.8;

/// Root of the USGS GeoJSON summary feeds.
pub const USGS_FEED_BASE: &str = "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary";

pub const STREET_LAYER_ID: &str = "streetmap";
pub const STREET_LAYER_NAME: &str = "Street Map";
pub const STREET_TILE_URL: &str =
    "https://api.mapbox.com/styles/v1/{id}/tiles/{z}/{x}/{y}?access_token={accessToken}";
pub const STREET_STYLE_ID: &str = "mapbox/streets-v11";
pub const STREET_ATTRIBUTION: &str = "© <a href='https://www.mapbox.com/about/maps/'>Mapbox</a> © <a href='http://www.openstreetmap.org/copyright'>OpenStreetMap</a> <strong><a href='https://www.mapbox.com/map-feedback/' target='_blank'>Improve this map</a></strong>";

pub const DARK_LAYER_ID: &str = "darkmap";
pub const DARK_LAYER_NAME: &str = "Dark Map";
pub const DARK_TILE_URL: &str =
    "https://api.mapbox.com/styles/v1/mapbox/{id}/tiles/{z}/{x}/{y}?access_token={accessToken}";
pub const DARK_STYLE_ID: &str = "dark-v10";
pub const DARK_ATTRIBUTION: &str = "Map data &copy; <a href=\"https://www.openstreetmap.org/\">OpenStreetMap</a> contributors, <a href=\"https://creativecommons.org/licenses/by-sa/2.0/\">CC-BY-SA</a>, Imagery © <a href=\"https://www.mapbox.com/\">Mapbox</a>";

pub const EARTHQUAKE_LAYER_ID: &str = "earthquakes";
pub const EARTHQUAKE_LAYER_NAME: &str = "Earthquakes";

/// Environment variables searched, in order, for the tile provider credential.
pub const ACCESS_TOKEN_ENV_VARS: [&str; 3] =
    ["QUAKEMAP_ACCESS_TOKEN", "MAPBOX_ACCESS_TOKEN", "API_KEY"];

/// Leaflet release the HTML document loads.
pub const LEAFLET_VERSION: &str = "1.9.4";
