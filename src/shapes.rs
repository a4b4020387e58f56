//! Shape types
//!
//! Each shape is its own type that knows how to:
//! - Render itself to an SVG element under a [`Layout`]
//! - Move all of its coordinates by an offset
//! - Clone itself deeply (every shape is a plain owned value)
//!
//! [`Shape`] is the closed set of variants a [`crate::Document`] stores.
//! Capabilities are split over three traits: every shape is an [`Element`],
//! surface shapes are also [`Fillable`], and line-like shapes are
//! [`Markerable`].

use enum_dispatch::enum_dispatch;

use crate::chart::LineChart;
use crate::layout::Layout;
use crate::log::warn;
use crate::marker::MarkerSlots;
use crate::style::{Fill, Font, Stroke};
use crate::svg::{Attributes, Markup, Num, PointList};
use crate::types::{Point, check_finite, check_finite_points};

/// Anything that can carry an `id` attribute. An empty id emits nothing.
pub trait Identifiable {
    fn id(&self) -> &str;
    fn set_id(&mut self, id: impl Into<String>);
}

/// State every shape carries besides its geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeBase {
    pub id: String,
    pub stroke: Stroke,
    /// Inline CSS, emitted as `style="..."` when non-empty
    pub style: String,
    pub visible: bool,
    /// Paint order; lower z is drawn first, ties keep insertion order
    pub z: i32,
}

impl Default for ShapeBase {
    fn default() -> Self {
        Self {
            id: String::new(),
            stroke: Stroke::none(),
            style: String::new(),
            visible: true,
            z: 0,
        }
    }
}

impl ShapeBase {
    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn show(&mut self) {
        self.visible = true;
    }
}

impl Attributes for ShapeBase {
    fn write_attrs(&self, out: &mut Markup, layout: &Layout) {
        self.stroke.write_attrs(out, layout);
        if !self.style.is_empty() {
            out.attr("style", &self.style);
        }
        if !self.visible {
            out.attr("visibility", "hidden");
        }
    }
}

/// Common behavior for all shapes
#[enum_dispatch]
pub trait Element {
    fn base(&self) -> &ShapeBase;

    fn base_mut(&mut self) -> &mut ShapeBase;

    /// Append this shape's markup to `out`.
    fn write_svg(&self, out: &mut Markup, layout: &Layout);

    /// Move every owned coordinate by `delta`.
    fn offset(&mut self, delta: Point);

    /// The element as a standalone fragment.
    fn render(&self, layout: &Layout) -> String {
        let mut out = Markup::new();
        self.write_svg(&mut out, layout);
        out.finish()
    }

    fn z(&self) -> i32 {
        self.base().z
    }

    fn set_z(&mut self, z: i32) {
        self.base_mut().z = z;
    }
}

/// Shapes with an interior that can be painted.
pub trait Fillable {
    fn fill(&self) -> &Fill;
    fn set_fill(&mut self, fill: Fill);
}

/// Line-like shapes that can reference start/mid/end markers.
pub trait Markerable {
    fn markers(&self) -> &MarkerSlots;
    fn markers_mut(&mut self) -> &mut MarkerSlots;
}

/// Builder methods and [`Identifiable`] for every concrete shape.
macro_rules! impl_shape_common {
    ($($ty:ty),*) => {
        $(
            impl $ty {
                pub fn with_stroke(mut self, stroke: Stroke) -> Self {
                    self.base.stroke = stroke;
                    self
                }

                pub fn with_style(mut self, style: impl Into<String>) -> Self {
                    self.base.style = style.into();
                    self
                }

                pub fn with_z(mut self, z: i32) -> Self {
                    self.base.z = z;
                    self
                }

                pub fn with_id(mut self, id: impl Into<String>) -> Self {
                    self.base.id = id.into();
                    self
                }

                pub fn hidden(mut self) -> Self {
                    self.base.hide();
                    self
                }
            }

            impl Identifiable for $ty {
                fn id(&self) -> &str { &self.base.id }
                fn set_id(&mut self, id: impl Into<String>) { self.base.id = id.into(); }
            }
        )*
    };
}

macro_rules! impl_fillable {
    ($($ty:ty),*) => {
        $(
            impl $ty {
                pub fn with_fill(mut self, fill: impl Into<Fill>) -> Self {
                    self.fill = fill.into();
                    self
                }
            }

            impl Fillable for $ty {
                fn fill(&self) -> &Fill { &self.fill }
                fn set_fill(&mut self, fill: Fill) { self.fill = fill; }
            }
        )*
    };
}

macro_rules! impl_markerable {
    ($($ty:ty),*) => {
        $(
            impl Markerable for $ty {
                fn markers(&self) -> &MarkerSlots { &self.markers }
                fn markers_mut(&mut self) -> &mut MarkerSlots { &mut self.markers }
            }
        )*
    };
}

impl_shape_common!(Circle, Ellipse, Rectangle, Line, Polygon, Path, Polyline, Text, LineChart);
impl_fillable!(Circle, Ellipse, Rectangle, Polygon, Path, Text);
impl_markerable!(Line, Polyline);

fn check_offset(what: &'static str, delta: Point) {
    check_finite(what, &[delta.x, delta.y]);
}

// ============================================================================
// Shape Types
// ============================================================================

/// A circle, given by center and diameter
#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub base: ShapeBase,
    pub fill: Fill,
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, diameter: f64, fill: impl Into<Fill>) -> Self {
        check_finite("Circle::new", &[center.x, center.y, diameter]);
        Self {
            base: ShapeBase::default(),
            fill: fill.into(),
            center,
            radius: diameter / 2.0,
        }
    }
}

impl Element for Circle {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn write_svg(&self, out: &mut Markup, layout: &Layout) {
        out.open("circle")
            .id(&self.base.id)
            .num("cx", layout.x(self.center.x))
            .num("cy", layout.y(self.center.y))
            .num("r", layout.scale(self.radius));
        self.base.write_attrs(out, layout);
        self.fill.write_attrs(out, layout);
        out.close_empty();
    }

    fn offset(&mut self, delta: Point) {
        check_offset("Circle::offset", delta);
        self.center += delta;
    }
}

/// An ellipse, given by center and full width/height
#[derive(Clone, Debug, PartialEq)]
pub struct Ellipse {
    pub base: ShapeBase,
    pub fill: Fill,
    pub center: Point,
    pub radius_x: f64,
    pub radius_y: f64,
}

impl Ellipse {
    pub fn new(center: Point, width: f64, height: f64) -> Self {
        check_finite("Ellipse::new", &[center.x, center.y, width, height]);
        Self {
            base: ShapeBase::default(),
            fill: Fill::default(),
            center,
            radius_x: width / 2.0,
            radius_y: height / 2.0,
        }
    }
}

impl Element for Ellipse {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn write_svg(&self, out: &mut Markup, layout: &Layout) {
        out.open("ellipse")
            .id(&self.base.id)
            .num("cx", layout.x(self.center.x))
            .num("cy", layout.y(self.center.y))
            .num("rx", layout.scale(self.radius_x))
            .num("ry", layout.scale(self.radius_y));
        self.base.write_attrs(out, layout);
        self.fill.write_attrs(out, layout);
        out.close_empty();
    }

    fn offset(&mut self, delta: Point) {
        check_offset("Ellipse::offset", delta);
        self.center += delta;
    }
}

/// An axis-aligned rectangle anchored at a corner, optionally rounded
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    pub base: ShapeBase,
    pub fill: Fill,
    pub corner: Point,
    pub width: f64,
    pub height: f64,
    pub rx: f64,
    pub ry: f64,
}

impl Rectangle {
    pub fn new(corner: Point, width: f64, height: f64) -> Self {
        check_finite("Rectangle::new", &[corner.x, corner.y, width, height]);
        Self {
            base: ShapeBase::default(),
            fill: Fill::default(),
            corner,
            width,
            height,
            rx: 0.0,
            ry: 0.0,
        }
    }

    /// Round the corners. Radii are only emitted when one of them is positive.
    pub fn with_corner_radius(mut self, rx: f64, ry: f64) -> Self {
        check_finite("Rectangle::with_corner_radius", &[rx, ry]);
        self.rx = rx;
        self.ry = ry;
        self
    }

    /// A rectangle of the same size, fill, stroke and corner radii, centered
    /// on `pos`.
    pub fn center_at(&self, pos: Point) -> Rectangle {
        check_finite("Rectangle::center_at", &[pos.x, pos.y]);
        let corner = pos - Point::new(self.width / 2.0, self.height / 2.0);
        Rectangle::new(corner, self.width, self.height)
            .with_corner_radius(self.rx, self.ry)
            .with_fill(self.fill)
            .with_stroke(self.base.stroke.clone())
    }
}

impl Element for Rectangle {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn write_svg(&self, out: &mut Markup, layout: &Layout) {
        out.open("rect")
            .id(&self.base.id)
            .num("x", layout.x(self.corner.x))
            .num("y", layout.y(self.corner.y));
        if self.rx > 0.0 || self.ry > 0.0 {
            out.num("rx", layout.scale(self.rx))
                .num("ry", layout.scale(self.ry));
        }
        out.num("width", layout.scale(self.width))
            .num("height", layout.scale(self.height));
        self.base.write_attrs(out, layout);
        self.fill.write_attrs(out, layout);
        out.close_empty();
    }

    fn offset(&mut self, delta: Point) {
        check_offset("Rectangle::offset", delta);
        self.corner += delta;
    }
}

/// A straight line segment
#[derive(Clone, Debug)]
pub struct Line {
    pub base: ShapeBase,
    pub markers: MarkerSlots,
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub fn new(start: Point, end: Point) -> Self {
        check_finite_points("Line::new", &[start, end]);
        Self {
            base: ShapeBase::default(),
            markers: MarkerSlots::default(),
            start,
            end,
        }
    }

    pub fn with_markers(mut self, markers: MarkerSlots) -> Self {
        self.markers = markers;
        self
    }
}

impl Element for Line {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn write_svg(&self, out: &mut Markup, layout: &Layout) {
        out.open("line")
            .id(&self.base.id)
            .num("x1", layout.x(self.start.x))
            .num("y1", layout.y(self.start.y))
            .num("x2", layout.x(self.end.x))
            .num("y2", layout.y(self.end.y));
        self.base.write_attrs(out, layout);
        self.markers.write_attrs(out, layout);
        out.close_empty();
    }

    fn offset(&mut self, delta: Point) {
        check_offset("Line::offset", delta);
        self.start += delta;
        self.end += delta;
    }
}

/// A closed polygon; the closing edge is implied by the element
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Polygon {
    pub base: ShapeBase,
    pub fill: Fill,
    pub points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: impl Into<Vec<Point>>) -> Self {
        let points = points.into();
        check_finite_points("Polygon::new", &points);
        Self {
            points,
            ..Self::default()
        }
    }

    pub fn push(&mut self, point: Point) -> &mut Self {
        check_finite_points("Polygon::push", &[point]);
        self.points.push(point);
        self
    }
}

impl Element for Polygon {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn write_svg(&self, out: &mut Markup, layout: &Layout) {
        out.open("polygon").id(&self.base.id).attr(
            "points",
            PointList {
                points: &self.points,
                layout,
            },
        );
        self.base.write_attrs(out, layout);
        self.fill.write_attrs(out, layout);
        out.close_empty();
    }

    fn offset(&mut self, delta: Point) {
        check_offset("Polygon::offset", delta);
        for p in &mut self.points {
            *p += delta;
        }
    }
}

/// A path made of closed sub-paths, filled with the even-odd rule
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    pub base: ShapeBase,
    pub fill: Fill,
    subpaths: Vec<Vec<Point>>,
}

impl Default for Path {
    fn default() -> Self {
        Self {
            base: ShapeBase::default(),
            fill: Fill::default(),
            subpaths: vec![Vec::new()],
        }
    }
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// A path whose first sub-path is `points`.
    pub fn from_points(points: impl Into<Vec<Point>>) -> Self {
        let points = points.into();
        check_finite_points("Path::from_points", &points);
        Self {
            subpaths: vec![points],
            ..Self::default()
        }
    }

    /// Append a point to the current (last) sub-path.
    pub fn push(&mut self, point: Point) -> &mut Self {
        check_finite_points("Path::push", &[point]);
        match self.subpaths.last_mut() {
            Some(current) => current.push(point),
            None => self.subpaths.push(vec![point]),
        }
        self
    }

    /// Start a new sub-path, unless the current one is still empty.
    pub fn start_new_sub_path(&mut self) -> &mut Self {
        if self.subpaths.last().is_none_or(|sp| !sp.is_empty()) {
            self.subpaths.push(Vec::new());
        }
        self
    }

    pub fn subpaths(&self) -> &[Vec<Point>] {
        &self.subpaths
    }
}

/// `M x,y x,y ... z ` for every non-empty sub-path.
struct PathData<'a> {
    subpaths: &'a [Vec<Point>],
    layout: &'a Layout,
}

impl std::fmt::Display for PathData<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for subpath in self.subpaths.iter().filter(|sp| !sp.is_empty()) {
            let points = PointList {
                points: subpath,
                layout: self.layout,
            };
            write!(f, "M{points}z ")?;
        }
        Ok(())
    }
}

impl Element for Path {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn write_svg(&self, out: &mut Markup, layout: &Layout) {
        out.open("path")
            .id(&self.base.id)
            .attr(
                "d",
                PathData {
                    subpaths: &self.subpaths,
                    layout,
                },
            )
            .attr("fill-rule", "evenodd");
        self.base.write_attrs(out, layout);
        self.fill.write_attrs(out, layout);
        out.close_empty();
    }

    fn offset(&mut self, delta: Point) {
        check_offset("Path::offset", delta);
        for p in self.subpaths.iter_mut().flatten() {
            *p += delta;
        }
    }
}

/// An open poly-line; never filled
#[derive(Clone, Debug, Default)]
pub struct Polyline {
    pub base: ShapeBase,
    pub markers: MarkerSlots,
    pub(crate) points: Vec<Point>,
}

impl Polyline {
    pub fn new(points: impl Into<Vec<Point>>) -> Self {
        let points = points.into();
        check_finite_points("Polyline::new", &points);
        Self {
            points,
            ..Self::default()
        }
    }

    pub fn push(&mut self, point: Point) -> &mut Self {
        check_finite_points("Polyline::push", &[point]);
        self.points.push(point);
        self
    }

    pub fn with_markers(mut self, markers: MarkerSlots) -> Self {
        self.markers = markers;
        self
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Element for Polyline {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    /// An empty polyline contributes nothing.
    fn write_svg(&self, out: &mut Markup, layout: &Layout) {
        if self.points.is_empty() {
            return;
        }
        out.open("polyline")
            .id(&self.base.id)
            .attr("fill", "none")
            .attr(
                "points",
                PointList {
                    points: &self.points,
                    layout,
                },
            );
        self.base.write_attrs(out, layout);
        self.markers.write_attrs(out, layout);
        out.close_empty();
    }

    fn offset(&mut self, delta: Point) {
        check_offset("Polyline::offset", delta);
        for p in &mut self.points {
            *p += delta;
        }
    }
}

/// Horizontal alignment of text relative to its origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
    /// Emit no `text-anchor` attribute at all
    None,
}

impl TextAnchor {
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            TextAnchor::Start => Some("start"),
            TextAnchor::Middle => Some("middle"),
            TextAnchor::End => Some("end"),
            TextAnchor::None => None,
        }
    }
}

/// Vertical alignment of text relative to its origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DominantBaseline {
    TextBottom,
    Alphabetic,
    Ideographic,
    #[default]
    Middle,
    Central,
    Mathematical,
    Hanging,
    TextTop,
    /// Emit no `dominant-baseline` attribute (the renderer's `auto`)
    None,
}

impl DominantBaseline {
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            DominantBaseline::TextBottom => Some("text-bottom"),
            DominantBaseline::Alphabetic => Some("alphabetic"),
            DominantBaseline::Ideographic => Some("ideographic"),
            DominantBaseline::Middle => Some("middle"),
            DominantBaseline::Central => Some("central"),
            DominantBaseline::Mathematical => Some("mathematical"),
            DominantBaseline::Hanging => Some("hanging"),
            DominantBaseline::TextTop => Some("text-top"),
            DominantBaseline::None => None,
        }
    }
}

/// A text label. Content is written verbatim, it is not escaped.
#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub base: ShapeBase,
    pub fill: Fill,
    pub origin: Point,
    pub content: String,
    pub font: Font,
    pub anchor: TextAnchor,
    pub baseline: DominantBaseline,
}

impl Text {
    pub fn new(origin: Point, content: impl Into<String>) -> Self {
        let content = content.into();
        check_finite("Text::new", &[origin.x, origin.y]);
        if content.is_empty() {
            warn!(what = "Text::new", "empty text content");
        }
        Self {
            base: ShapeBase::default(),
            fill: Fill::default(),
            origin,
            content,
            font: Font::default(),
            anchor: TextAnchor::default(),
            baseline: DominantBaseline::default(),
        }
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn with_baseline(mut self, baseline: DominantBaseline) -> Self {
        self.baseline = baseline;
        self
    }
}

impl Element for Text {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    fn write_svg(&self, out: &mut Markup, layout: &Layout) {
        out.open("text").id(&self.base.id);
        if let Some(anchor) = self.anchor.keyword() {
            out.attr("text-anchor", anchor);
        }
        if let Some(baseline) = self.baseline.keyword() {
            out.attr("dominant-baseline", baseline);
        }
        out.attr("x", Num(layout.x(self.origin.x)))
            .attr("y", Num(layout.y(self.origin.y)));
        self.base.write_attrs(out, layout);
        self.fill.write_attrs(out, layout);
        self.font.write_attrs(out, layout);
        out.raw(">").raw(&self.content).close("text");
    }

    fn offset(&mut self, delta: Point) {
        check_offset("Text::offset", delta);
        self.origin += delta;
    }
}

// ============================================================================
// Shape enum
// ============================================================================

/// Every shape a document can hold.
#[enum_dispatch(Element)]
#[derive(Clone, Debug)]
pub enum Shape {
    Circle(Circle),
    Ellipse(Ellipse),
    Rectangle(Rectangle),
    Line(Line),
    Polygon(Polygon),
    Path(Path),
    Polyline(Polyline),
    Text(Text),
    LineChart(LineChart),
}

impl Shape {
    /// The fill of surface shapes, `None` for the others.
    pub fn fill(&self) -> Option<&Fill> {
        match self {
            Shape::Circle(s) => Some(s.fill()),
            Shape::Ellipse(s) => Some(s.fill()),
            Shape::Rectangle(s) => Some(s.fill()),
            Shape::Polygon(s) => Some(s.fill()),
            Shape::Path(s) => Some(s.fill()),
            Shape::Text(s) => Some(s.fill()),
            Shape::Line(_) | Shape::Polyline(_) | Shape::LineChart(_) => None,
        }
    }

    /// Marker slots reachable from this shape, including those of a chart's
    /// series.
    pub fn marker_slots(&self) -> Vec<&MarkerSlots> {
        match self {
            Shape::Line(s) => vec![s.markers()],
            Shape::Polyline(s) => vec![s.markers()],
            Shape::LineChart(chart) => chart.series().iter().map(|p| p.markers()).collect(),
            _ => Vec::new(),
        }
    }
}

impl Identifiable for Shape {
    fn id(&self) -> &str {
        &self.base().id
    }

    fn set_id(&mut self, id: impl Into<String>) {
        self.base_mut().id = id.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Origin;
    use crate::style::Color;
    use crate::types::{Dimensions, pt};
    use insta::assert_snapshot;

    fn top_left() -> Layout {
        Layout::new(Dimensions::new(400.0, 300.0), Origin::TopLeft)
    }

    #[test]
    fn circle_mirrors_y_by_default() {
        let c = Circle::new(pt(50.0, 50.0), 20.0, Color::RED);
        assert_snapshot!(c.render(&Layout::default()).trim(), @r#"<circle cx="50" cy="250" r="10" fill="rgb(255,0,0)" />"#);
    }

    #[test]
    fn fragments_are_tab_indented_and_newline_terminated() {
        let c = Circle::new(pt(1.0, 2.0), 2.0, Fill::default());
        let s = c.render(&top_left());
        assert!(s.starts_with("\t<circle "));
        assert!(s.ends_with("/>\n"));
    }

    #[test]
    fn ellipse_halves_its_size() {
        let e = Ellipse::new(pt(10.0, 10.0), 8.0, 4.0)
            .with_fill(Color::BLUE)
            .with_id("e1");
        assert_snapshot!(e.render(&top_left()).trim(), @r#"<ellipse id="e1" cx="10" cy="10" rx="4" ry="2" fill="rgb(0,0,255)" />"#);
    }

    #[test]
    fn rectangle_radii_only_when_positive() {
        let r = Rectangle::new(pt(1.0, 2.0), 30.0, 20.0);
        assert!(!r.render(&top_left()).contains("rx="));
        let r = r.with_corner_radius(0.0, 2.0);
        assert_snapshot!(r.render(&top_left()).trim(), @r#"<rect x="1" y="2" rx="0" ry="2" width="30" height="20" fill="none" />"#);
    }

    #[test]
    fn rectangle_center_at() {
        let r = Rectangle::new(pt(0.0, 0.0), 20.0, 10.0)
            .with_fill(Color::GREEN)
            .with_stroke(Stroke::new(1.0, Color::BLACK))
            .with_z(7);
        let centered = r.center_at(pt(100.0, 100.0));
        assert_eq!(centered.corner, pt(90.0, 95.0));
        assert_eq!(centered.fill, r.fill);
        assert_eq!(centered.base.stroke, r.base.stroke);
        assert_eq!(centered.base.z, 0);
    }

    #[test]
    fn line_with_stroke_and_style() {
        let l = Line::new(pt(0.0, 0.0), pt(10.0, 5.0))
            .with_stroke(Stroke::new(1.0, Color::BLACK))
            .with_style("opacity:0.5")
            .hidden();
        assert_snapshot!(l.render(&top_left()).trim(), @r#"<line x1="0" y1="0" x2="10" y2="5" stroke-width="1" stroke="rgb(0,0,0)" stroke-dashoffset="0" style="opacity:0.5" visibility="hidden" />"#);
    }

    #[test]
    fn polygon_point_list() {
        let mut p = Polygon::new(vec![pt(0.0, 0.0), pt(10.0, 0.0)]);
        p.push(pt(5.0, 5.0));
        assert_snapshot!(p.render(&top_left()).trim(), @r#"<polygon points="0,0 10,0 5,5 " fill="none" />"#);
    }

    #[test]
    fn path_sub_paths() {
        let mut path = Path::new();
        path.push(pt(0.0, 0.0)).push(pt(4.0, 0.0)).push(pt(4.0, 4.0));
        path.start_new_sub_path().start_new_sub_path();
        path.push(pt(1.0, 1.0)).push(pt(2.0, 1.0));
        assert_eq!(path.subpaths().len(), 2);
        assert_snapshot!(path.render(&top_left()).trim(), @r#"<path d="M0,0 4,0 4,4 z M1,1 2,1 z " fill-rule="evenodd" fill="none" />"#);
    }

    #[test]
    fn path_start_new_sub_path_is_idempotent_on_empty() {
        let mut path = Path::new();
        path.start_new_sub_path();
        path.start_new_sub_path();
        assert_eq!(path.subpaths().len(), 1);
        assert!(path.render(&top_left()).contains("d=\"\" "));
    }

    #[test]
    fn polyline_is_never_filled() {
        let p = Polyline::new(vec![pt(0.0, 0.0), pt(1.0, 2.0)])
            .with_stroke(Stroke::new(0.5, Color::RED));
        assert_snapshot!(p.render(&top_left()).trim(), @r#"<polyline fill="none" points="0,0 1,2 " stroke-width="0.5" stroke="rgb(255,0,0)" stroke-dashoffset="0" />"#);
    }

    #[test]
    fn empty_polyline_renders_nothing() {
        assert_eq!(Polyline::default().render(&top_left()), "");
    }

    #[test]
    fn text_defaults() {
        let t = Text::new(pt(10.0, 20.0), "Hello").with_fill(Color::BLACK);
        assert_snapshot!(t.render(&top_left()).trim(), @r#"<text text-anchor="middle" dominant-baseline="middle" x="10" y="20" fill="rgb(0,0,0)" font-size="12" font-family="Verdana" >Hello</text>"#);
    }

    #[test]
    fn text_none_suppresses_alignment() {
        let t = Text::new(pt(0.0, 0.0), "x")
            .with_anchor(TextAnchor::None)
            .with_baseline(DominantBaseline::None);
        let s = t.render(&top_left());
        assert!(!s.contains("text-anchor"));
        assert!(!s.contains("dominant-baseline"));
        let t = t
            .with_anchor(TextAnchor::End)
            .with_baseline(DominantBaseline::TextTop);
        let s = t.render(&top_left());
        assert!(s.contains("text-anchor=\"end\" dominant-baseline=\"text-top\" "));
    }

    #[test]
    fn offset_moves_every_point() {
        let delta = pt(1.0, -1.0);
        let mut path = Path::from_points(vec![pt(0.0, 0.0), pt(2.0, 2.0)]);
        path.start_new_sub_path();
        path.push(pt(5.0, 5.0));
        path.offset(delta);
        assert_eq!(
            path.subpaths(),
            &[vec![pt(1.0, -1.0), pt(3.0, 1.0)], vec![pt(6.0, 4.0)]]
        );

        let mut line = Line::new(pt(0.0, 0.0), pt(1.0, 1.0));
        line.offset(delta);
        assert_eq!((line.start, line.end), (pt(1.0, -1.0), pt(2.0, 0.0)));

        let mut shape: Shape = Circle::new(pt(3.0, 3.0), 1.0, Color::RED).into();
        shape.offset(delta);
        let Shape::Circle(c) = &shape else {
            panic!("expected a circle");
        };
        assert_eq!(c.center, pt(4.0, 2.0));
    }

    #[test]
    fn non_finite_offset_is_applied_anyway() {
        let mut c = Circle::new(pt(0.0, 0.0), 1.0, Color::RED);
        c.offset(pt(f64::NAN, 1.0));
        assert!(c.center.x.is_nan());
        assert_eq!(c.center.y, 1.0);
    }

    #[test]
    fn clone_is_deep() {
        let original = Polygon::new(vec![pt(0.0, 0.0)]);
        let mut copy = original.clone();
        copy.push(pt(1.0, 1.0));
        copy.offset(pt(5.0, 5.0));
        assert_eq!(original.points, vec![pt(0.0, 0.0)]);
        assert_eq!(copy.points.len(), 2);
    }

    #[test]
    fn shape_enum_dispatches() {
        let mut shape: Shape = Text::new(pt(0.0, 0.0), "t").into();
        shape.set_z(3);
        shape.set_id("label");
        assert_eq!(shape.z(), 3);
        assert_eq!(shape.id(), "label");
        assert!(shape.fill().is_some());
        assert!(shape.marker_slots().is_empty());

        let line: Shape = Line::new(pt(0.0, 0.0), pt(1.0, 0.0)).into();
        assert!(line.fill().is_none());
        assert_eq!(line.marker_slots().len(), 1);
    }

    #[test]
    fn layout_scale_applies_to_lengths() {
        let layout = top_left().with_scale(2.0);
        let c = Circle::new(pt(1.0, 1.0), 4.0, Fill::default())
            .with_stroke(Stroke::new(0.5, Color::BLACK));
        assert_snapshot!(c.render(&layout).trim(), @r#"<circle cx="2" cy="2" r="4" stroke-width="1" stroke="rgb(0,0,0)" stroke-dashoffset="0" fill="none" />"#);
    }
}
