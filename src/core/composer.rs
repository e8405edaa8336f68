//! Builds a [`Map`] from one snapshot of an earthquake feed.

use crate::{
    core::{
        config::{AccessToken, QuakeMapConfig},
        constants::{EARTHQUAKE_LAYER_ID, EARTHQUAKE_LAYER_NAME},
        map::{Map, MapOptions},
    },
    data::{feed::RawEvent, source::FeedSource},
    layers::{base::LayerTrait, group::FeatureGroup, tile::TileLayer},
    rendering::engine::MapEngine,
    ui::{controls::LayerControl, style::MagnitudeClass},
    Result,
};
use std::collections::BTreeMap;

/// Fetches the feed once and assembles the layered map.
///
/// Street tiles are shown on open, dark tiles are available through the
/// layer control, and every event becomes a circle marker in the
/// `earthquakes` overlay.
pub struct MapComposer<S: FeedSource> {
    source: S,
    token: AccessToken,
    config: QuakeMapConfig,
}

impl<S: FeedSource> MapComposer<S> {
    pub fn new(source: S, token: AccessToken, config: QuakeMapConfig) -> Self {
        Self {
            source,
            token,
            config,
        }
    }

    pub fn config(&self) -> &QuakeMapConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn compose(&self) -> Result<Map> {
        self.config.validate()?;

        log::info!("Fetching earthquake feed from {}", self.source.describe());
        let feed = self.source.fetch().await?.decode();
        if let Some(metadata) = &feed.metadata {
            let count = metadata
                .count
                .map_or_else(|| "an unknown number of".to_string(), |c| c.to_string());
            log::info!(
                "Feed `{}` reports {} events",
                metadata.title.as_deref().unwrap_or("untitled"),
                count
            );
        }
        if feed.skipped > 0 {
            log::warn!("{} features were skipped", feed.skipped);
        }
        log::info!("Plotting {} earthquakes", feed.events.len());
        log_magnitude_summary(&feed.events);

        let quakes = build_marker_layer(&feed.events);
        let (street, dark) = build_base_layers(&self.token, &self.config);
        build_map(&self.config, street, dark, quakes)
    }

    /// Composes the map and replays it into `engine`
    pub async fn render(&self, engine: &mut dyn MapEngine) -> Result<Map> {
        let map = self.compose().await?;
        map.render(engine)?;
        Ok(map)
    }
}

/// One circle marker per event, feed order preserved
pub fn build_marker_layer(events: &[RawEvent]) -> FeatureGroup {
    FeatureGroup::from_events(
        EARTHQUAKE_LAYER_ID.to_string(),
        EARTHQUAKE_LAYER_NAME.to_string(),
        events,
    )
}

/// Street and dark base layers; only the street layer starts visible
pub fn build_base_layers(token: &AccessToken, config: &QuakeMapConfig) -> (TileLayer, TileLayer) {
    let street = TileLayer::mapbox_streets(token.clone(), config.tiles.max_zoom);
    let mut dark = TileLayer::mapbox_dark(token.clone(), config.tiles.max_zoom);
    dark.set_visible(false);
    (street, dark)
}

pub fn build_map(
    config: &QuakeMapConfig,
    street: TileLayer,
    dark: TileLayer,
    quakes: FeatureGroup,
) -> Result<Map> {
    let options = MapOptions {
        center: config.view.center,
        zoom: config.view.zoom,
        ..MapOptions::default()
    };
    let mut map = Map::new(config.view.container.clone(), options);

    let control = LayerControl::new()
        .with_base_layer(street.name(), street.id())
        .with_base_layer(dark.name(), dark.id())
        .with_overlay(quakes.name(), quakes.id())
        .collapsed(config.view.control_collapsed);

    map.add_layer(Box::new(street))?;
    map.add_layer(Box::new(dark))?;
    map.add_layer(Box::new(quakes))?;
    map.set_layer_control(control)?;
    Ok(map)
}

fn log_magnitude_summary(events: &[RawEvent]) {
    if !log::log_enabled!(log::Level::Debug) {
        return;
    }
    let mut counts: BTreeMap<MagnitudeClass, usize> = BTreeMap::new();
    for event in events.iter().filter(|e| !e.magnitude.is_nan()) {
        *counts.entry(MagnitudeClass::from_magnitude(event.magnitude)).or_default() += 1;
    }
    for (class, count) in counts {
        log::debug!("  {}: {}", class.label(), count);
    }
}
