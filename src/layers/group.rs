use crate::{
    data::feed::RawEvent,
    layers::{
        base::{LayerProperties, LayerTrait, LayerType},
        marker::CircleMarker,
    },
    rendering::engine::MapEngine,
    Result,
};

/// A named set of circle markers toggled on and off as one overlay
#[derive(Debug, Clone)]
pub struct FeatureGroup {
    properties: LayerProperties,
    markers: Vec<CircleMarker>,
}

impl FeatureGroup {
    pub fn new(id: String, name: String) -> Self {
        let mut properties = LayerProperties::new(id, name, LayerType::FeatureGroup);
        properties.z_index = 10;
        Self {
            properties,
            markers: Vec::new(),
        }
    }

    /// Builds one marker per event, in feed order
    pub fn from_events(id: String, name: String, events: &[RawEvent]) -> Self {
        let mut group = Self::new(id, name);
        group.markers = events
            .iter()
            .enumerate()
            .map(|(index, event)| CircleMarker::from_event(index, event))
            .collect();
        group
    }

    pub fn markers(&self) -> &[CircleMarker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

impl LayerTrait for FeatureGroup {
    crate::impl_layer_trait!(FeatureGroup, properties);

    fn render(&self, engine: &mut dyn MapEngine) -> Result<()> {
        engine.add_layer(self)?;
        for marker in &self.markers {
            engine.add_marker(Some(self.id()), marker)?;
        }
        Ok(())
    }

    fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.properties.id,
            "name": self.properties.name,
            "layer_type": self.properties.layer_type.to_string(),
            "visible": self.properties.visible,
            "markers": self.markers.len()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLng;
    use crate::data::feed::QuakeFeed;

    const BODY: &str = r#"{"features": [
        {"properties": {"mag": 6.0, "place": "A"}, "geometry": {"coordinates": [-118.0, 34.0, 15.0]}},
        {"properties": {"mag": 5.0, "place": "B"}, "geometry": {"coordinates": [-122.0, 37.0, 120.0]}},
        {"properties": {"mag": 4.0, "place": "C"}, "geometry": {"coordinates": [140.0, 35.0, 450.0]}},
        {"properties": {"place": "D"}}
    ]}"#;

    fn group() -> FeatureGroup {
        let events = BODY.parse::<QuakeFeed>().unwrap().decode().events;
        FeatureGroup::from_events("earthquakes".into(), "Earthquakes".into(), &events)
    }

    #[test]
    fn test_one_marker_per_event_in_order() {
        let group = group();
        assert_eq!(group.len(), 4);
        let radii: Vec<f64> = group.markers().iter().take(3).map(|m| m.radius()).collect();
        assert_eq!(radii, vec![18.0, 15.0, 12.0]);
        assert!(group.markers()[3].radius().is_nan());
    }

    #[test]
    fn test_markers_keep_feed_positions() {
        let group = group();
        let positions: Vec<LatLng> = group.markers().iter().map(|m| m.position()).collect();
        assert_eq!(positions[0], LatLng::new(34.0, -118.0));
        assert_eq!(positions[2], LatLng::new(35.0, 140.0));
        assert!(!positions[3].is_valid());
    }

    #[test]
    fn test_empty_group() {
        let group = FeatureGroup::from_events("earthquakes".into(), "Earthquakes".into(), &[]);
        assert!(group.is_empty());
        assert_eq!(group.options()["markers"], 0);
        assert_eq!(group.z_index(), 10);
    }
}
