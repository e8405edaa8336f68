pub mod engine;
pub mod leaflet;
pub mod scene;
pub(crate) mod templates;

pub use engine::MapEngine;
pub use leaflet::LeafletDocument;
pub use scene::{
    Scene, SceneGroup, SceneMap, SceneMarker, ScenePopup, SceneRecorder, SceneTileLayer,
};
