use crate::{
    core::{
        config::AccessToken,
        constants::{
            DARK_ATTRIBUTION, DARK_LAYER_ID, DARK_LAYER_NAME, DARK_STYLE_ID, DARK_TILE_URL,
            STREET_ATTRIBUTION, STREET_LAYER_ID, STREET_LAYER_NAME, STREET_STYLE_ID,
            STREET_TILE_URL, TILE_MAX_ZOOM,
        },
    },
    layers::base::{LayerProperties, LayerTrait, LayerType},
    rendering::engine::MapEngine,
    Result,
};

/// Configuration for a tile layer
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TileLayerOptions {
    /// Attribution HTML
    pub attribution: String,
    /// Tile size in pixels; the engine default (256) when unset
    pub tile_size: Option<u32>,
    /// Offset added to the map zoom when requesting tiles
    pub zoom_offset: i32,
    /// Value substituted for `{id}` in the URL template
    pub id: Option<String>,
    /// Maximum zoom level for this tile source
    pub max_zoom: u8,
    /// Minimum zoom level for this tile source
    pub min_zoom: u8,
}

impl Default for TileLayerOptions {
    fn default() -> Self {
        Self {
            attribution: String::new(),
            tile_size: None,
            zoom_offset: 0,
            id: None,
            max_zoom: TILE_MAX_ZOOM,
            min_zoom: 0,
        }
    }
}

/// A base layer of map tiles served from a URL template
///
/// The template keeps its `{z}/{x}/{y}`, `{id}` and `{accessToken}`
/// placeholders; the engine fills them from [`TileLayer::leaflet_options`].
#[derive(Debug, Clone)]
pub struct TileLayer {
    properties: LayerProperties,
    options: TileLayerOptions,
    url_template: String,
    access_token: Option<AccessToken>,
}

impl TileLayer {
    pub fn new(
        id: String,
        name: String,
        url_template: impl Into<String>,
        options: TileLayerOptions,
    ) -> Self {
        Self {
            properties: LayerProperties::new(id, name, LayerType::Tile),
            options,
            url_template: url_template.into(),
            access_token: None,
        }
    }

    pub fn with_access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Mapbox street style, 512px tiles with a zoom offset of -1
    pub fn mapbox_streets(token: AccessToken, max_zoom: u8) -> Self {
        let options = TileLayerOptions {
            attribution: STREET_ATTRIBUTION.to_string(),
            tile_size: Some(512),
            zoom_offset: -1,
            id: Some(STREET_STYLE_ID.to_string()),
            max_zoom,
            ..Default::default()
        };
        Self::new(
            STREET_LAYER_ID.to_string(),
            STREET_LAYER_NAME.to_string(),
            STREET_TILE_URL,
            options,
        )
        .with_access_token(token)
    }

    /// Mapbox dark style
    pub fn mapbox_dark(token: AccessToken, max_zoom: u8) -> Self {
        let options = TileLayerOptions {
            attribution: DARK_ATTRIBUTION.to_string(),
            id: Some(DARK_STYLE_ID.to_string()),
            max_zoom,
            ..Default::default()
        };
        Self::new(
            DARK_LAYER_ID.to_string(),
            DARK_LAYER_NAME.to_string(),
            DARK_TILE_URL,
            options,
        )
        .with_access_token(token)
    }

    pub fn tile_options(&self) -> &TileLayerOptions {
        &self.options
    }

    pub fn url_template(&self) -> &str {
        &self.url_template
    }

    pub fn max_zoom(&self) -> u8 {
        self.options.max_zoom
    }

    /// Options in the shape `L.tileLayer(template, options)` expects
    pub fn leaflet_options(&self) -> serde_json::Value {
        let mut options = serde_json::json!({
            "attribution": self.options.attribution,
            "maxZoom": self.options.max_zoom,
            "minZoom": self.options.min_zoom,
        });

        if let Some(tile_size) = self.options.tile_size {
            options["tileSize"] = tile_size.into();
        }
        if self.options.zoom_offset != 0 {
            options["zoomOffset"] = self.options.zoom_offset.into();
        }
        if let Some(id) = &self.options.id {
            options["id"] = id.as_str().into();
        }
        if let Some(token) = &self.access_token {
            options["accessToken"] = token.as_str().into();
        }
        options
    }
}

impl LayerTrait for TileLayer {
    crate::impl_layer_trait!(TileLayer, properties);

    fn render(&self, engine: &mut dyn MapEngine) -> Result<()> {
        engine.add_tile_layer(self)
    }

    fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.properties.id,
            "name": self.properties.name,
            "layer_type": self.properties.layer_type.to_string(),
            "visible": self.properties.visible,
            "url_template": self.url_template,
            "max_zoom": self.options.max_zoom,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> AccessToken {
        AccessToken::new("pk.test").unwrap()
    }

    #[test]
    fn test_street_layer() {
        let layer = TileLayer::mapbox_streets(token(), 18);
        assert_eq!(layer.id(), "streetmap");
        assert_eq!(layer.name(), "Street Map");
        assert_eq!(layer.max_zoom(), 18);

        let options = layer.leaflet_options();
        assert_eq!(options["tileSize"], 512);
        assert_eq!(options["zoomOffset"], -1);
        assert_eq!(options["id"], "mapbox/streets-v11");
        assert_eq!(options["accessToken"], "pk.test");
        assert_eq!(options["maxZoom"], 18);
    }

    #[test]
    fn test_dark_layer() {
        let layer = TileLayer::mapbox_dark(token(), 18);
        assert_eq!(layer.name(), "Dark Map");
        assert!(layer.url_template().starts_with("https://api.mapbox.com/styles/v1/mapbox/{id}/"));

        let options = layer.leaflet_options();
        assert_eq!(options["id"], "dark-v10");
        assert!(options.get("tileSize").is_none());
        assert!(options.get("zoomOffset").is_none());
    }

    #[test]
    fn test_layer_without_token() {
        let layer = TileLayer::new(
            "osm".into(),
            "OpenStreetMap".into(),
            "https://tile.openstreetmap.org/{z}/{x}/{y}.png",
            TileLayerOptions::default(),
        );
        let options = layer.leaflet_options();
        assert!(options.get("accessToken").is_none());
        assert!(options.get("id").is_none());
        assert_eq!(options["maxZoom"], 18);
    }

    #[test]
    fn test_layer_options_hide_token() {
        let layer = TileLayer::mapbox_streets(token(), 18);
        let options = layer.options().to_string();
        assert!(!options.contains("pk.test"));
        assert!(options.contains("{accessToken}"));
    }
}
