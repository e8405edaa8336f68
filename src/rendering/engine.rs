//! The seam between a composed [`Map`](crate::core::map::Map) and whatever
//! actually draws it.

use crate::{
    core::map::MapOptions,
    layers::{group::FeatureGroup, marker::CircleMarker, tile::TileLayer},
    ui::controls::LayerControl,
    Result,
};

/// A rendering backend the map is replayed into.
///
/// Calls arrive in a fixed order: `reset`, `create_map`, then layers in
/// render order (a feature group is followed by its markers), then the
/// layer control. Visibility on open is read from each layer's
/// `is_visible()`.
pub trait MapEngine {
    /// Drops everything emitted so far
    fn reset(&mut self);

    /// Creates the map widget inside `container`
    fn create_map(&mut self, container: &str, options: &MapOptions) -> Result<()>;

    fn add_tile_layer(&mut self, layer: &TileLayer) -> Result<()>;

    /// Declares a marker group; its markers follow through `add_marker`
    fn add_layer(&mut self, group: &FeatureGroup) -> Result<()>;

    /// Adds a marker to the group `parent`, or straight onto the map when `None`
    fn add_marker(&mut self, parent: Option<&str>, marker: &CircleMarker) -> Result<()>;

    fn add_layer_control(&mut self, control: &LayerControl) -> Result<()>;
}
