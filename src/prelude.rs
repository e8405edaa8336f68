//! Prelude module for common quakemap types and traits
//!
//! Re-exports the types most callers need, for `use quakemap::prelude::*;`

pub use crate::core::{
    composer::MapComposer,
    config::{AccessToken, FeedConfig, QuakeMapConfig, TileConfig, ViewConfig},
    geo::LatLng,
    map::{Map, MapOptions},
};

pub use crate::data::{
    feed::{DecodedFeed, FeedKind, FeedMagnitude, FeedPeriod, QuakeFeed, RawEvent},
    source::{FeedSource, HttpFeedSource, StaticFeedSource},
};

pub use crate::layers::{
    base::{LayerTrait, LayerType},
    group::FeatureGroup,
    manager::LayerManager,
    marker::{CircleMarker, CircleMarkerOptions},
    tile::TileLayer,
};

pub use crate::ui::{
    controls::{ControlPosition, LayerControl},
    popup::Popup,
    style::{color_for_depth, radius_for_magnitude, DepthColor, MagnitudeClass},
};

pub use crate::rendering::{
    engine::MapEngine,
    leaflet::LeafletDocument,
    scene::{Scene, SceneRecorder},
};

pub use crate::{Error as MapError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
