//! Default sizes and settings

use crate::style::Color;
use crate::types::Dimensions;

pub const DOCUMENT_SIZE: Dimensions = Dimensions {
    width: 400.0,
    height: 300.0,
};
pub const FONT_SIZE: f64 = 12.0;
pub const FONT_FAMILY: &str = "Verdana";
pub const AXIS_STROKE_WIDTH: f64 = 0.5;
pub const AXIS_STROKE_COLOR: Color = Color::PURPLE;
/// Axis frame is this much larger than the data bounding box.
pub const AXIS_OVERSHOOT: f64 = 1.1;
/// Chart vertex dot radius is the data height divided by this.
pub const VERTEX_RADIUS_DIVISOR: f64 = 30.0;
/// Tolerance when comparing marker geometry.
pub const MARKER_EPSILON: f64 = 1e-10;
pub const ANIMATION_ATTRIBUTE_TYPE: &str = "CSS";

pub const GENERATOR_NAME: &str = env!("CARGO_PKG_NAME");
pub const GENERATOR_URL: &str = env!("CARGO_PKG_REPOSITORY");
pub const GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SVG_VERSION: &str = "1.1";
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
