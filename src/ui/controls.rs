use crate::{layers::manager::LayerManager, Error, Result};
use serde::{Deserialize, Serialize};

/// Corner of the map a control is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlPosition {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

/// One row of the layer control: a label and the layer it toggles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlEntry {
    pub label: String,
    pub layer_id: String,
}

/// Layer switcher: radio buttons for base layers, checkboxes for overlays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerControl {
    base_layers: Vec<ControlEntry>,
    overlays: Vec<ControlEntry>,
    collapsed: bool,
    position: ControlPosition,
}

impl LayerControl {
    /// Empty, expanded control in the top-right corner
    pub fn new() -> Self {
        Self {
            base_layers: Vec::new(),
            overlays: Vec::new(),
            collapsed: false,
            position: ControlPosition::TopRight,
        }
    }

    pub fn with_base_layer(
        mut self,
        label: impl Into<String>,
        layer_id: impl Into<String>,
    ) -> Self {
        self.base_layers.push(ControlEntry {
            label: label.into(),
            layer_id: layer_id.into(),
        });
        self
    }

    pub fn with_overlay(mut self, label: impl Into<String>, layer_id: impl Into<String>) -> Self {
        self.overlays.push(ControlEntry {
            label: label.into(),
            layer_id: layer_id.into(),
        });
        self
    }

    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }

    pub fn base_layers(&self) -> &[ControlEntry] {
        &self.base_layers
    }

    pub fn overlays(&self) -> &[ControlEntry] {
        &self.overlays
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn position(&self) -> ControlPosition {
        self.position
    }

    /// Checks that every entry points at a layer the manager holds
    pub fn validate(&self, layers: &LayerManager) -> Result<()> {
        for entry in self.base_layers.iter().chain(&self.overlays) {
            if layers.get_layer(&entry.layer_id).is_none() {
                return Err(Error::Layer(format!(
                    "layer control entry `{}` refers to unknown layer `{}`",
                    entry.label, entry.layer_id
                )));
            }
        }
        Ok(())
    }
}

impl Default for LayerControl {
    fn default() -> Self {
        Self::new()
    }
}
