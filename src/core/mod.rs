pub mod composer;
pub mod config;
pub mod constants;
pub mod geo;
pub mod map;

pub use composer::{build_base_layers, build_map, build_marker_layer, MapComposer};
pub use config::{AccessToken, FeedConfig, QuakeMapConfig, TileConfig, ViewConfig};
pub use geo::LatLng;
pub use map::{Map, MapOptions};
