use crate::{
    core::{geo::LatLng, map::MapOptions},
    layers::{
        base::LayerTrait, group::FeatureGroup, marker::CircleMarker, marker::CircleMarkerOptions,
        tile::TileLayer,
    },
    rendering::engine::MapEngine,
    ui::controls::LayerControl,
    Error, Result,
};
use serde::{Deserialize, Serialize};

/// Everything a renderer emitted, in a form that can be inspected or
/// serialized and replayed by a browser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub map: Option<SceneMap>,
    pub tile_layers: Vec<SceneTileLayer>,
    pub groups: Vec<SceneGroup>,
    /// Markers added directly to the map rather than to a group
    pub markers: Vec<SceneMarker>,
    pub control: Option<LayerControl>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneMap {
    pub container: String,
    pub options: MapOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneTileLayer {
    pub id: String,
    pub name: String,
    pub url_template: String,
    pub options: serde_json::Value,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneGroup {
    pub id: String,
    pub name: String,
    pub visible: bool,
    pub markers: Vec<SceneMarker>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneMarker {
    pub id: String,
    pub position: LatLng,
    pub options: CircleMarkerOptions,
    pub popup: Option<ScenePopup>,
}

/// Popup of a recorded marker.
///
/// The event time stays in epoch milliseconds so the viewer formats it in
/// their own time zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenePopup {
    pub content: String,
    pub time: Option<i64>,
}

impl SceneMarker {
    fn from_marker(marker: &CircleMarker) -> Result<Self> {
        let popup = match marker.popup() {
            Some(popup) => Some(ScenePopup {
                content: popup.content()?.to_string(),
                time: popup.time(),
            }),
            None => None,
        };
        Ok(Self {
            id: marker.id().to_string(),
            position: marker.position(),
            options: marker.path_options().clone(),
            popup,
        })
    }
}

impl Scene {
    pub fn group(&self, id: &str) -> Option<&SceneGroup> {
        self.groups.iter().find(|group| group.id == id)
    }

    pub fn tile_layer(&self, id: &str) -> Option<&SceneTileLayer> {
        self.tile_layers.iter().find(|layer| layer.id == id)
    }

    /// Markers across all groups plus loose ones
    pub fn marker_count(&self) -> usize {
        self.groups.iter().map(|g| g.markers.len()).sum::<usize>() + self.markers.len()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Engine that records every call into a [`Scene`]
#[derive(Debug, Default)]
pub struct SceneRecorder {
    scene: Scene,
}

impl SceneRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn into_scene(self) -> Scene {
        self.scene
    }
}

impl MapEngine for SceneRecorder {
    fn reset(&mut self) {
        self.scene = Scene::default();
    }

    fn create_map(&mut self, container: &str, options: &MapOptions) -> Result<()> {
        if self.scene.map.is_some() {
            return Err(Error::Render("map already created; reset first".to_string()));
        }
        self.scene.map = Some(SceneMap {
            container: container.to_string(),
            options: options.clone(),
        });
        Ok(())
    }

    fn add_tile_layer(&mut self, layer: &TileLayer) -> Result<()> {
        self.scene.tile_layers.push(SceneTileLayer {
            id: layer.id().to_string(),
            name: layer.name().to_string(),
            url_template: layer.url_template().to_string(),
            options: layer.leaflet_options(),
            visible: layer.is_visible(),
        });
        Ok(())
    }

    fn add_layer(&mut self, group: &FeatureGroup) -> Result<()> {
        if self.scene.group(group.id()).is_some() {
            return Err(Error::Render(format!("duplicate layer group `{}`", group.id())));
        }
        self.scene.groups.push(SceneGroup {
            id: group.id().to_string(),
            name: group.name().to_string(),
            visible: group.is_visible(),
            markers: Vec::with_capacity(group.len()),
        });
        Ok(())
    }

    fn add_marker(&mut self, parent: Option<&str>, marker: &CircleMarker) -> Result<()> {
        let recorded = SceneMarker::from_marker(marker)?;
        match parent {
            Some(id) => {
                let group = self
                    .scene
                    .groups
                    .iter_mut()
                    .find(|group| group.id == id)
                    .ok_or_else(|| Error::Render(format!("unknown layer group `{}`", id)))?;
                group.markers.push(recorded);
            }
            None => self.scene.markers.push(recorded),
        }
        Ok(())
    }

    fn add_layer_control(&mut self, control: &LayerControl) -> Result<()> {
        self.scene.control = Some(control.clone());
        Ok(())
    }
}
