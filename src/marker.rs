//! Markers: named, reusable groups of shapes drawn at the vertices of lines
//! and polylines.
//!
//! A marker is shared as an `Rc<Marker>`. Shapes only keep a [`MarkerRef`]
//! (a weak handle), so the caller decides how long a marker lives; the
//! document resolves every live reference at render time.

use std::fmt;
use std::rc::{Rc, Weak};
use std::str::FromStr;

use crate::defaults;
use crate::errors::{MarkerError, RenderError};
use crate::layout::Layout;
use crate::log::warn;
use crate::shapes::{Element, Identifiable, Shape};
use crate::svg::{Attributes, Markup};
use crate::types::{Point, check_finite};

/// How the marker is rotated along the path.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Orient {
    #[default]
    Auto,
    AutoStartReverse,
    /// Fixed angle in degrees
    Angle(f64),
}

impl fmt::Display for Orient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orient::Auto => f.write_str("auto"),
            Orient::AutoStartReverse => f.write_str("auto-start-reverse"),
            Orient::Angle(deg) => write!(f, "{:.6}", deg),
        }
    }
}

impl FromStr for Orient {
    type Err = MarkerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(Orient::Auto),
            "auto-start-reverse" => Ok(Orient::AutoStartReverse),
            other => other
                .parse::<f64>()
                .ok()
                .filter(|deg| deg.is_finite())
                .map(Orient::Angle)
                .ok_or_else(|| MarkerError::InvalidOrientation {
                    value: other.to_string(),
                }),
        }
    }
}

/// A named group of shapes in its own coordinate system.
#[derive(Clone, Debug, Default)]
pub struct Marker {
    id: String,
    pub width: f64,
    pub height: f64,
    /// The point of the marker placed on the vertex
    pub reference: Point,
    pub orient: Orient,
    shapes: Vec<Shape>,
}

impl Identifiable for Marker {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }
}

impl Marker {
    pub fn new(
        id: impl Into<String>,
        width: f64,
        height: f64,
        reference: Point,
        shape: impl Into<Shape>,
    ) -> Self {
        check_finite("Marker::new", &[width, height, reference.x, reference.y]);
        Self {
            id: id.into(),
            width,
            height,
            reference,
            orient: Orient::Auto,
            shapes: vec![shape.into()],
        }
    }

    pub fn with_shape(mut self, shape: impl Into<Shape>) -> Self {
        self.push(shape);
        self
    }

    pub fn with_orient(mut self, orient: Orient) -> Self {
        self.orient = orient;
        self
    }

    /// Add a shape (moved in; clone it first to keep using it).
    pub fn push(&mut self, shape: impl Into<Shape>) -> &mut Self {
        self.shapes.push(shape.into());
        self
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shapes_mut(&mut self) -> &mut [Shape] {
        &mut self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// A marker without an id cannot be referenced.
    pub fn is_valid(&self) -> bool {
        !self.id.is_empty()
    }

    /// Share this marker so shapes can reference it.
    pub fn into_shared(self) -> Rc<Marker> {
        Rc::new(self)
    }

    /// The `<marker>` definition, for use inside `<defs>`.
    pub fn render(&self) -> Result<String, RenderError> {
        if !self.is_valid() {
            return Err(RenderError::MissingMarkerId);
        }

        let layout = Layout::neutral();
        let mut out = Markup::new();
        out.raw("\t")
            .open("marker")
            .id(&self.id)
            .num("markerWidth", self.width)
            .num("markerHeight", self.height)
            .num("refX", self.reference.x)
            .num("refY", self.reference.y)
            .attr("orient", self.orient)
            .raw(">\n");
        for (i, shape) in self.shapes.iter().enumerate() {
            out.raw("\t\t");
            shape.write_svg(&mut out, &layout);
            if i + 1 < self.shapes.len() {
                out.raw("\n");
            }
        }
        out.raw("\t\t").close("marker");
        Ok(out.finish())
    }

    /// Whether two markers look the same, ignoring their ids.
    ///
    /// Geometry is compared with a small epsilon; the contained shapes are
    /// rendered under the neutral layout and compared as sorted lists of
    /// strings, so insertion order does not matter.
    pub fn visually_eq(&self, other: &Marker) -> bool {
        let close = |a: f64, b: f64| (a - b).abs() < defaults::MARKER_EPSILON;
        if self.shapes.len() != other.shapes.len()
            || !close(self.width, other.width)
            || !close(self.height, other.height)
            || !close(self.reference.x, other.reference.x)
            || !close(self.reference.y, other.reference.y)
        {
            return false;
        }
        self.sorted_fragments() == other.sorted_fragments()
    }

    fn sorted_fragments(&self) -> Vec<String> {
        let layout = Layout::neutral();
        let mut fragments: Vec<String> = self.shapes.iter().map(|s| s.render(&layout)).collect();
        fragments.sort();
        fragments
    }
}

/// A non-owning handle to a shared marker.
#[derive(Clone, Debug)]
pub struct MarkerRef(Weak<Marker>);

impl MarkerRef {
    pub fn new(marker: &Rc<Marker>) -> Self {
        Self(Rc::downgrade(marker))
    }

    /// The marker, if it is still alive.
    pub fn get(&self) -> Option<Rc<Marker>> {
        self.0.upgrade()
    }
}

impl From<&Rc<Marker>> for MarkerRef {
    fn from(marker: &Rc<Marker>) -> Self {
        Self::new(marker)
    }
}

/// Where along a line a marker is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerPosition {
    Start,
    Mid,
    End,
}

impl MarkerPosition {
    pub const ALL: [MarkerPosition; 3] = [Self::Start, Self::Mid, Self::End];

    pub fn attribute(self) -> &'static str {
        match self {
            MarkerPosition::Start => "marker-start",
            MarkerPosition::Mid => "marker-mid",
            MarkerPosition::End => "marker-end",
        }
    }
}

/// The start/mid/end marker references of a markerable shape.
#[derive(Clone, Debug, Default)]
pub struct MarkerSlots {
    start: Option<MarkerRef>,
    mid: Option<MarkerRef>,
    end: Option<MarkerRef>,
}

impl MarkerSlots {
    pub fn set(&mut self, position: MarkerPosition, marker: &Rc<Marker>) -> &mut Self {
        *self.slot_mut(position) = Some(MarkerRef::new(marker));
        self
    }

    pub fn clear(&mut self, position: MarkerPosition) -> &mut Self {
        *self.slot_mut(position) = None;
        self
    }

    pub fn with(mut self, position: MarkerPosition, marker: &Rc<Marker>) -> Self {
        self.set(position, marker);
        self
    }

    pub fn get(&self, position: MarkerPosition) -> Option<&MarkerRef> {
        match position {
            MarkerPosition::Start => self.start.as_ref(),
            MarkerPosition::Mid => self.mid.as_ref(),
            MarkerPosition::End => self.end.as_ref(),
        }
    }

    fn slot_mut(&mut self, position: MarkerPosition) -> &mut Option<MarkerRef> {
        match position {
            MarkerPosition::Start => &mut self.start,
            MarkerPosition::Mid => &mut self.mid,
            MarkerPosition::End => &mut self.end,
        }
    }

    /// Live, valid markers in start/mid/end order.
    ///
    /// A reference whose marker has been dropped is skipped with a warning.
    pub fn resolve(&self) -> Vec<(MarkerPosition, Rc<Marker>)> {
        MarkerPosition::ALL
            .into_iter()
            .filter_map(|pos| {
                let reference = self.get(pos)?;
                match reference.get() {
                    Some(marker) => marker.is_valid().then_some((pos, marker)),
                    None => {
                        warn!(attribute = pos.attribute(), "marker reference outlived its marker");
                        None
                    }
                }
            })
            .collect()
    }
}

impl Attributes for MarkerSlots {
    fn write_attrs(&self, out: &mut Markup, _layout: &Layout) {
        for (pos, marker) in self.resolve() {
            out.attr(pos.attribute(), format_args!("url(#{})", marker.id()));
        }
    }
}
