use crate::{
    core::geo::LatLng,
    data::feed::RawEvent,
    layers::base::{LayerProperties, LayerTrait, LayerType},
    rendering::engine::MapEngine,
    ui::{
        popup::Popup,
        style::{color_for_depth, radius_for_magnitude, DepthColor, MarkerStyle},
    },
    Result,
};
use serde::{Deserialize, Serialize};

/// Path options of a circle marker, named the way Leaflet names them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleMarkerOptions {
    /// Radius in pixels; may be zero, negative or NaN for degenerate events
    pub radius: f64,
    /// Stroke color
    pub color: String,
    pub fill_color: String,
    pub weight: f64,
    pub opacity: f64,
    pub fill_opacity: f64,
}

impl CircleMarkerOptions {
    pub fn styled(radius: f64, color: DepthColor, style: MarkerStyle) -> Self {
        Self {
            radius,
            color: color.hex().to_string(),
            fill_color: color.hex().to_string(),
            weight: style.weight,
            opacity: style.opacity,
            fill_opacity: style.fill_opacity,
        }
    }
}

/// Circular marker with an optional popup
#[derive(Debug, Clone)]
pub struct CircleMarker {
    properties: LayerProperties,
    position: LatLng,
    options: CircleMarkerOptions,
    popup: Option<Popup>,
}

impl CircleMarker {
    pub fn new(id: String, position: LatLng, options: CircleMarkerOptions) -> Self {
        let properties = LayerProperties::new(id, "Circle Marker".to_string(), LayerType::Marker);
        Self {
            properties,
            position,
            options,
            popup: None,
        }
    }

    /// Turns one feed event into its marker.
    ///
    /// The feed orders positions `[lng, lat, depth]`; the marker sits at
    /// `(lat, lng)`. Fill and stroke share the depth color, the radius follows
    /// the magnitude, and the popup is attached unrendered.
    pub fn from_event(index: usize, event: &RawEvent) -> Self {
        let id = event
            .id
            .clone()
            .unwrap_or_else(|| format!("quake-{}", index));
        let position = LatLng::from_lng_lat(&event.coordinates);
        let options = CircleMarkerOptions::styled(
            radius_for_magnitude(event.magnitude),
            color_for_depth(event.depth()),
            MarkerStyle::default(),
        );

        Self::new(id, position, options).with_popup(Popup::for_event(event))
    }

    pub fn with_popup(mut self, popup: Popup) -> Self {
        self.popup = Some(popup);
        self
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn radius(&self) -> f64 {
        self.options.radius
    }

    pub fn fill_color(&self) -> &str {
        &self.options.fill_color
    }

    pub fn color(&self) -> &str {
        &self.options.color
    }

    pub fn path_options(&self) -> &CircleMarkerOptions {
        &self.options
    }

    pub fn popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }
}

impl LayerTrait for CircleMarker {
    crate::impl_layer_trait!(CircleMarker, properties);

    fn render(&self, engine: &mut dyn MapEngine) -> Result<()> {
        engine.add_marker(None, self)
    }

    fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "position": {
                "lat": self.position.lat,
                "lng": self.position.lng
            },
            "path": self.options,
            "popup": self.popup.is_some()
        })
    }
}
