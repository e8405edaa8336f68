//! USGS earthquake summary feed: catalogue of feed URLs and the event records
//! decoded from a feed snapshot.

use crate::{core::constants::USGS_FEED_BASE, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum-magnitude class of a USGS summary feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedMagnitude {
    Significant,
    M4_5,
    M2_5,
    M1_0,
    All,
}

impl FeedMagnitude {
    fn slug(&self) -> &'static str {
        match self {
            FeedMagnitude::Significant => "significant",
            FeedMagnitude::M4_5 => "4.5",
            FeedMagnitude::M2_5 => "2.5",
            FeedMagnitude::M1_0 => "1.0",
            FeedMagnitude::All => "all",
        }
    }
}

/// Time window covered by a USGS summary feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedPeriod {
    Hour,
    Day,
    Week,
    Month,
}

impl FeedPeriod {
    fn slug(&self) -> &'static str {
        match self {
            FeedPeriod::Hour => "hour",
            FeedPeriod::Day => "day",
            FeedPeriod::Week => "week",
            FeedPeriod::Month => "month",
        }
    }
}

/// One of the USGS summary feeds, identified by its `<magnitude>_<period>` slug.
///
/// Serializes as the slug, e.g. `"1.0_day"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FeedKind {
    pub magnitude: FeedMagnitude,
    pub period: FeedPeriod,
}

impl FeedKind {
    pub fn new(magnitude: FeedMagnitude, period: FeedPeriod) -> Self {
        Self { magnitude, period }
    }

    pub fn slug(&self) -> String {
        format!("{}_{}", self.magnitude.slug(), self.period.slug())
    }

    /// Full GeoJSON URL of this feed
    pub fn url(&self) -> String {
        format!("{}/{}.geojson", USGS_FEED_BASE, self.slug())
    }
}

impl Default for FeedKind {
    fn default() -> Self {
        Self::new(FeedMagnitude::M1_0, FeedPeriod::Day)
    }
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.slug())
    }
}

impl FromStr for FeedKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (magnitude, period) = s.split_once('_').ok_or_else(|| {
            Error::Config(format!("feed kind `{}` is not <magnitude>_<period>", s))
        })?;

        let magnitude = match magnitude {
            "significant" => FeedMagnitude::Significant,
            "4.5" => FeedMagnitude::M4_5,
            "2.5" => FeedMagnitude::M2_5,
            "1.0" => FeedMagnitude::M1_0,
            "all" => FeedMagnitude::All,
            other => return Err(Error::Config(format!("unknown feed magnitude `{}`", other))),
        };
        let period = match period {
            "hour" => FeedPeriod::Hour,
            "day" => FeedPeriod::Day,
            "week" => FeedPeriod::Week,
            "month" => FeedPeriod::Month,
            other => return Err(Error::Config(format!("unknown feed period `{}`", other))),
        };

        Ok(Self::new(magnitude, period))
    }
}

impl TryFrom<String> for FeedKind {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<FeedKind> for String {
    fn from(kind: FeedKind) -> Self {
        kind.slug()
    }
}

/// Collection-level metadata of a feed snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedMetadata {
    pub title: Option<String>,
    pub generated: Option<i64>,
    pub count: Option<u64>,
    pub url: Option<String>,
}

/// Root object of a feed response.
///
/// Features stay as raw JSON until [`QuakeFeed::decode`] so one bad feature
/// cannot fail the whole response.
#[derive(Debug, Clone, Deserialize)]
pub struct QuakeFeed {
    #[serde(default)]
    pub metadata: Option<FeedMetadata>,
    pub features: Vec<serde_json::Value>,
}

/// Events decoded from one feed snapshot
#[derive(Debug, Clone, Default)]
pub struct DecodedFeed {
    pub metadata: Option<FeedMetadata>,
    pub events: Vec<RawEvent>,
    /// Number of features that could not be decoded at all
    pub skipped: usize,
}

impl FromStr for QuakeFeed {
    type Err = Error;

    /// Parses a feed response body
    fn from_str(body: &str) -> Result<Self> {
        serde_json::from_str(body)
            .map_err(|e| Error::Feed(format!("malformed feed response: {}", e)))
    }
}

impl QuakeFeed {
    /// Decodes every feature, skipping the ones that are not features at all
    pub fn decode(self) -> DecodedFeed {
        let mut events = Vec::with_capacity(self.features.len());
        let mut skipped = 0;

        for (index, value) in self.features.into_iter().enumerate() {
            match RawEvent::from_value(value) {
                Ok(event) => events.push(event),
                Err(e) => {
                    log::warn!("skipping feature #{}: {}", index, e);
                    skipped += 1;
                }
            }
        }

        DecodedFeed {
            metadata: self.metadata,
            events,
            skipped,
        }
    }
}

/// One seismic event as delivered by the feed.
///
/// Missing numbers are `NaN` so downstream styling degrades instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawEvent {
    pub id: Option<String>,
    pub place: Option<String>,
    pub magnitude: f64,
    /// `[longitude, latitude, depth_km]`, feed order
    pub coordinates: [f64; 3],
    /// Milliseconds since the Unix epoch
    pub time: Option<i64>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub mag_type: Option<String>,
    pub tsunami: bool,
    pub significance: Option<i64>,
}

#[derive(Deserialize)]
struct FeatureRecord {
    #[serde(default)]
    id: Option<serde_json::Value>,
    #[serde(default)]
    properties: Option<PropertiesRecord>,
    #[serde(default)]
    geometry: Option<GeometryRecord>,
}

#[derive(Deserialize, Default)]
struct PropertiesRecord {
    place: Option<String>,
    mag: Option<f64>,
    time: Option<f64>,
    title: Option<String>,
    url: Option<String>,
    #[serde(rename = "magType")]
    mag_type: Option<String>,
    tsunami: Option<i64>,
    sig: Option<i64>,
}

#[derive(Deserialize)]
struct GeometryRecord {
    #[serde(default)]
    coordinates: Vec<Option<f64>>,
}

impl RawEvent {
    /// Decodes a single GeoJSON feature
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        if !value.is_object() {
            return Err(Error::Feed(format!("feature is not an object: {}", value)));
        }
        let record: FeatureRecord = serde_json::from_value(value)?;
        Ok(record.into())
    }

    pub fn depth(&self) -> f64 {
        self.coordinates[2]
    }
}

impl From<FeatureRecord> for RawEvent {
    fn from(record: FeatureRecord) -> Self {
        let properties = record.properties.unwrap_or_default();
        let position = record.geometry.map(|g| g.coordinates).unwrap_or_default();
        let coordinate = |i: usize| position.get(i).copied().flatten().unwrap_or(f64::NAN);

        Self {
            id: record.id.map(|id| match id {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            }),
            place: properties.place,
            magnitude: properties.mag.unwrap_or(f64::NAN),
            coordinates: [coordinate(0), coordinate(1), coordinate(2)],
            time: properties
                .time
                .filter(|t| t.is_finite())
                .map(|t| t.trunc() as i64),
            title: properties.title,
            url: properties.url,
            mag_type: properties.mag_type,
            tsunami: properties.tsunami.unwrap_or(0) != 0,
            significance: properties.sig,
        }
    }
}
