pub mod base;
pub mod group;
pub mod macros;
pub mod manager;
pub mod marker;
pub mod tile;

pub use base::{LayerProperties, LayerTrait, LayerType};
pub use group::FeatureGroup;
pub use manager::LayerManager;
pub use marker::{CircleMarker, CircleMarkerOptions};
pub use tile::{TileLayer, TileLayerOptions};
