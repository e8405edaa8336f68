use crate::{rendering::engine::MapEngine, Result};

/// Common interface of everything that can be placed on the map.
pub trait LayerTrait: Send + Sync {
    /// Get layer ID
    fn id(&self) -> &str;

    /// Get layer name, as shown in the layer control
    fn name(&self) -> &str;

    /// Get layer type
    fn layer_type(&self) -> LayerType;

    /// Check if layer is visible
    fn is_visible(&self) -> bool;

    /// Set layer visibility
    fn set_visible(&mut self, visible: bool);

    /// Get layer z-index for ordering
    fn z_index(&self) -> i32;

    /// Emit the layer into a rendering engine
    fn render(&self, engine: &mut dyn MapEngine) -> Result<()>;

    /// Get layer options
    fn options(&self) -> serde_json::Value;

    /// Dynamic casting support
    fn as_any(&self) -> &dyn std::any::Any;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerType {
    Tile,
    Marker,
    FeatureGroup,
}

impl std::fmt::Display for LayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerType::Tile => write!(f, "tile"),
            LayerType::Marker => write!(f, "marker"),
            LayerType::FeatureGroup => write!(f, "feature_group"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LayerProperties {
    pub id: String,
    pub name: String,
    pub layer_type: LayerType,
    pub z_index: i32,
    pub visible: bool,
}

impl LayerProperties {
    pub fn new(id: String, name: String, layer_type: LayerType) -> Self {
        Self {
            id,
            name,
            layer_type,
            z_index: 0,
            visible: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_properties() {
        let props = LayerProperties::new(
            "earthquakes".to_string(),
            "Earthquakes".to_string(),
            LayerType::FeatureGroup,
        );

        assert_eq!(props.id, "earthquakes");
        assert_eq!(props.name, "Earthquakes");
        assert_eq!(props.layer_type, LayerType::FeatureGroup);
        assert_eq!(props.z_index, 0);
        assert!(props.visible);
    }

    #[test]
    fn test_layer_type_display() {
        assert_eq!(LayerType::Tile.to_string(), "tile");
        assert_eq!(LayerType::Marker.to_string(), "marker");
        assert_eq!(LayerType::FeatureGroup.to_string(), "feature_group");
    }
}
