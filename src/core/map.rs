use crate::{
    core::{
        constants::{DEFAULT_CENTER, DEFAULT_ZOOM, MAP_CONTAINER_ID},
        geo::LatLng,
    },
    layers::{base::LayerTrait, group::FeatureGroup, manager::LayerManager},
    rendering::engine::MapEngine,
    ui::controls::LayerControl,
    Result,
};
use serde::{Deserialize, Serialize};

/// Initial view and chrome of the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapOptions {
    pub center: LatLng,
    pub zoom: f64,
    pub min_zoom: Option<f64>,
    pub max_zoom: Option<f64>,
    pub zoom_control: bool,
    pub attribution_control: bool,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            center: LatLng::new(DEFAULT_CENTER.0, DEFAULT_CENTER.1),
            zoom: DEFAULT_ZOOM,
            min_zoom: None,
            max_zoom: None,
            zoom_control: true,
            attribution_control: true,
        }
    }
}

/// A fully described map: view options, layers and the layer control.
///
/// Holds no rendering state; [`Map::render`] replays it into an engine.
pub struct Map {
    container: String,
    options: MapOptions,
    layers: LayerManager,
    layer_control: Option<LayerControl>,
}

impl Map {
    pub fn new(container: impl Into<String>, options: MapOptions) -> Self {
        Self {
            container: container.into(),
            options,
            layers: LayerManager::new(),
            layer_control: None,
        }
    }

    pub fn container(&self) -> &str {
        &self.container
    }

    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    pub fn center(&self) -> LatLng {
        self.options.center
    }

    pub fn zoom(&self) -> f64 {
        self.options.zoom
    }

    pub fn add_layer(&mut self, layer: Box<dyn LayerTrait>) -> Result<()> {
        self.layers.add_layer(layer)
    }

    pub fn layers(&self) -> &LayerManager {
        &self.layers
    }

    /// Installs the layer control after checking its entries resolve
    pub fn set_layer_control(&mut self, control: LayerControl) -> Result<()> {
        control.validate(&self.layers)?;
        self.layer_control = Some(control);
        Ok(())
    }

    pub fn layer_control(&self) -> Option<&LayerControl> {
        self.layer_control.as_ref()
    }

    /// IDs of the layers shown when the map opens, in render order
    pub fn visible_layers(&self) -> Vec<String> {
        self.layers
            .layers()
            .into_iter()
            .filter(|layer| layer.is_visible())
            .map(|layer| layer.id().to_string())
            .collect()
    }

    pub fn feature_group(&self, id: &str) -> Option<&FeatureGroup> {
        self.layers.get_layer_as::<FeatureGroup>(id)
    }

    /// Replays the map into `engine`, replacing whatever it held before
    pub fn render(&self, engine: &mut dyn MapEngine) -> Result<()> {
        engine.reset();
        engine.create_map(&self.container, &self.options)?;
        self.layers.render(engine)?;
        if let Some(control) = &self.layer_control {
            engine.add_layer_control(control)?;
        }
        Ok(())
    }
}

impl Default for Map {
    fn default() -> Self {
        Self::new(MAP_CONTAINER_ID, MapOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::config::AccessToken, layers::tile::TileLayer};

    #[test]
    fn test_default_view() {
        let map = Map::default();
        assert_eq!(map.container(), "map");
        assert_eq!(map.center(), LatLng::new(37.09, -95.71));
        assert_eq!(map.zoom(), 5.0);
        assert!(map.layer_control().is_none());
    }

    #[test]
    fn test_visible_layers() {
        let token = AccessToken::new("pk.test").unwrap();
        let mut map = Map::default();
        map.add_layer(Box::new(TileLayer::mapbox_streets(token.clone(), 18))).unwrap();
        let mut dark = TileLayer::mapbox_dark(token, 18);
        dark.set_visible(false);
        map.add_layer(Box::new(dark)).unwrap();
        map.add_layer(Box::new(FeatureGroup::new("earthquakes".into(), "Earthquakes".into())))
            .unwrap();

        assert_eq!(map.visible_layers(), vec!["streetmap", "earthquakes"]);
        assert_eq!(map.feature_group("earthquakes").map(|g| g.len()), Some(0));
        assert!(map.feature_group("streetmap").is_none());
    }

    #[test]
    fn test_layer_control_must_resolve() {
        let mut map = Map::default();
        let control = LayerControl::new().with_overlay("Earthquakes", "earthquakes");
        assert!(map.set_layer_control(control).is_err());
        assert!(map.layer_control().is_none());
    }
}
