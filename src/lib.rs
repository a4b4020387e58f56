//! Build SVG documents from shapes and serialize them to markup.
//!
//! This crate is organized into modules:
//! - `types`: points, dimensions, bounding boxes and finiteness checks
//! - `layout`: the user-space to output-space transform
//! - `style`: colors, fill, stroke and font attributes
//! - `shapes`: the shape types and the [`Shape`] enum
//! - `chart`: a line chart composed from polylines
//! - `marker`: reusable marker definitions and references to them
//! - `animation`: `<set>` and `<animateMotion>`
//! - `document`: z-ordering, marker collection and the final output
//! - `svg`: number formatting and the markup writer
//!
//! ```
//! use svg_writer::{Circle, Color, Document, Layout, pt};
//!
//! let mut doc = Document::new(Layout::default());
//! doc.append(Circle::new(pt(50.0, 50.0), 20.0, Color::RED));
//! let svg = doc.render().unwrap();
//! assert!(svg.contains("<circle cx=\"50\" cy=\"250\" r=\"10\" fill=\"rgb(255,0,0)\" />"));
//! ```

pub mod animation;
pub mod chart;
pub mod defaults;
pub mod document;
pub mod errors;
pub mod layout;
pub mod log;
pub mod marker;
pub mod shapes;
pub mod style;
pub mod svg;
pub mod types;

pub use animation::{AnimateMotion, Animation, SetAttribute, Timing};
pub use chart::LineChart;
pub use document::{Document, MarkerCollision};
pub use errors::{MarkerError, RenderError, SaveError};
pub use layout::{Layout, Origin};
pub use marker::{Marker, MarkerPosition, MarkerRef, MarkerSlots, Orient};
pub use shapes::{
    Circle, DominantBaseline, Element, Ellipse, Fillable, Identifiable, Line, Markerable, Path,
    Polygon, Polyline, Rectangle, Shape, ShapeBase, Text, TextAnchor,
};
pub use style::{Color, Fill, Font, ParseColorError, Stroke};
pub use svg::{Attributes, fmt_num};
pub use types::{BBox, Dimensions, NumericError, Point, pt};
