pub mod controls;
pub mod popup;
pub mod style;

pub use controls::{ControlEntry, ControlPosition, LayerControl};

pub use popup::{format_event_time_in, format_number, Popup};

pub use style::{
    color_for_depth, radius_for_magnitude, DepthClass, DepthColor, MagnitudeClass, MarkerStyle,
};
