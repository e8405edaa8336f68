//! Standalone HTML output backed by Leaflet.
//!
//! The recorded [`Scene`] is embedded as JSON and replayed by a small script,
//! so the page needs nothing beyond the Leaflet assets from unpkg.

use crate::{
    core::constants::LEAFLET_VERSION,
    rendering::{
        scene::Scene,
        templates::{self, ERROR_PAGE, PAGE},
    },
    Error, Result,
};
use minijinja::context;
use std::{fs, path::Path};

/// A self-contained HTML page showing a recorded scene
#[derive(Debug, Clone)]
pub struct LeafletDocument {
    title: String,
    scene: Scene,
}

impl LeafletDocument {
    pub fn new(title: impl Into<String>, scene: Scene) -> Self {
        Self {
            title: title.into(),
            scene,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn to_html(&self) -> Result<String> {
        let map = self
            .scene
            .map
            .as_ref()
            .ok_or_else(|| Error::Render("scene has no map; render a map first".to_string()))?;

        templates::render(
            PAGE,
            context! {
                title => self.title,
                container => map.container,
                leaflet_version => LEAFLET_VERSION,
                scene_json => escape_script(&self.scene.to_json()?),
            },
        )
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_html()?)?;
        log::info!("Wrote map page to {}", path.display());
        Ok(())
    }

    /// Page shown in place of the map when the feed could not be loaded
    pub fn error_page(title: &str, message: &str) -> Result<String> {
        templates::render(
            ERROR_PAGE,
            context! {
                title => title,
                message => message,
                leaflet_version => LEAFLET_VERSION,
            },
        )
    }
}

/// Keeps embedded JSON from closing its `<script>` element early
fn escape_script(json: &str) -> String {
    json.replace("</", "<\\/")
}
