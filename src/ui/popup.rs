use crate::{
    data::feed::RawEvent,
    rendering::templates::{self, POPUP},
    Result,
};
use chrono::TimeZone;
use once_cell::sync::OnceCell;
use serde::Serialize;
use std::fmt;

/// Text shown when a timestamp is missing or out of range
pub const INVALID_DATE: &str = "Invalid Date";

/// Heading used when the feed omits the place name
pub const UNKNOWN_PLACE: &str = "Unknown location";

#[derive(Serialize)]
struct PopupContext<'a> {
    place: &'a str,
    magnitude: String,
    depth: String,
    time: Option<String>,
}

/// Info panel attached to an earthquake marker.
///
/// The place, magnitude and depth markup is built on first access and cached.
/// The time line depends on the viewer's time zone, so it is left to
/// [`Popup::render_in`] or to whatever displays the popup.
#[derive(Debug, Clone)]
pub struct Popup {
    place: Option<String>,
    magnitude: f64,
    depth: f64,
    time: Option<i64>,
    content: OnceCell<String>,
}

impl Popup {
    pub fn new(place: Option<String>, magnitude: f64, depth: f64, time: Option<i64>) -> Self {
        Self {
            place,
            magnitude,
            depth,
            time,
            content: OnceCell::new(),
        }
    }

    pub fn for_event(event: &RawEvent) -> Self {
        Self::new(event.place.clone(), event.magnitude, event.depth(), event.time)
    }

    /// Event time in milliseconds since the Unix epoch
    pub fn time(&self) -> Option<i64> {
        self.time
    }

    /// Popup markup without the time line
    pub fn content(&self) -> Result<&str> {
        self.content
            .get_or_try_init(|| self.render_with(None))
            .map(String::as_str)
    }

    /// Whether the content has been built yet
    pub fn is_rendered(&self) -> bool {
        self.content.get().is_some()
    }

    /// Full markup with the time shown in `tz`, bypassing the cache
    pub fn render_in<Tz>(&self, tz: &Tz) -> Result<String>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        self.render_with(Some(format_event_time_in(self.time, tz)))
    }

    fn render_with(&self, time: Option<String>) -> Result<String> {
        templates::render(
            POPUP,
            PopupContext {
                place: self.place.as_deref().unwrap_or(UNKNOWN_PLACE),
                magnitude: format_number(self.magnitude),
                depth: format_number(self.depth),
                time,
            },
        )
    }
}

impl PartialEq for Popup {
    fn eq(&self, other: &Self) -> bool {
        self.place == other.place
            && self.magnitude.to_bits() == other.magnitude.to_bits()
            && self.depth.to_bits() == other.depth.to_bits()
            && self.time == other.time
    }
}

/// Renders epoch milliseconds as a calendar date and time in `tz`,
/// e.g. `Fri Jul 05 2019 20:19:53 GMT-0700`
pub fn format_event_time_in<Tz>(time: Option<i64>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    time.and_then(|ms| tz.timestamp_millis_opt(ms).single())
        .map(|dt| dt.format("%a %b %d %Y %H:%M:%S GMT%z").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

/// Number formatting as a browser would print it.
///
/// Negative zero prints as `0`; magnitudes from `1e21` up and below `1e-6`
/// switch to exponent notation with an explicit sign, e.g. `1e+21`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{:e}", value);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        }
    } else {
        value.to_string()
    }
}
