//! A minimal line chart built from polylines.

use crate::defaults;
use crate::layout::Layout;
use crate::shapes::{Circle, Element, Polyline, ShapeBase};
use crate::style::{Color, Fill, Stroke};
use crate::svg::Markup;
use crate::types::{BBox, Dimensions, Point, check_finite};

/// Data series drawn as polylines with a dot on every vertex, framed by an
/// L-shaped axis.
#[derive(Clone, Debug)]
pub struct LineChart {
    pub base: ShapeBase,
    /// Shift applied to every series and to the axis
    pub margin: Dimensions,
    pub axis_stroke: Stroke,
    series: Vec<Polyline>,
}

impl Default for LineChart {
    fn default() -> Self {
        Self::new(Dimensions::default())
    }
}

impl LineChart {
    pub fn new(margin: Dimensions) -> Self {
        Self {
            base: ShapeBase::default(),
            margin,
            axis_stroke: Stroke::new(defaults::AXIS_STROKE_WIDTH, defaults::AXIS_STROKE_COLOR),
            series: Vec::new(),
        }
    }

    pub fn with_axis_stroke(mut self, stroke: Stroke) -> Self {
        self.axis_stroke = stroke;
        self
    }

    /// Add a series. Empty polylines are ignored.
    pub fn push(&mut self, polyline: Polyline) -> &mut Self {
        if !polyline.is_empty() {
            self.series.push(polyline);
        }
        self
    }

    pub fn with_series(mut self, polyline: Polyline) -> Self {
        self.push(polyline);
        self
    }

    pub fn series(&self) -> &[Polyline] {
        &self.series
    }

    /// Union of the bounding boxes of all series.
    pub fn data_bounds(&self) -> Option<BBox> {
        let mut bounds = BBox::new();
        for series in &self.series {
            if let Some(bb) = BBox::of(series.points()) {
                bounds.union(&bb);
            }
        }
        (!bounds.is_empty()).then_some(bounds)
    }

    fn margin_offset(&self) -> Point {
        Point::new(self.margin.width, self.margin.height)
    }

    fn write_series(&self, series: &Polyline, data: &Dimensions, out: &mut Markup, layout: &Layout) {
        let mut shifted = series.clone();
        shifted.offset(self.margin_offset());
        shifted.write_svg(out, layout);

        let radius = data.height / defaults::VERTEX_RADIUS_DIVISOR;
        for vertex in shifted.points() {
            Circle::new(*vertex, 2.0 * radius, Fill::new(Color::BLACK)).write_svg(out, layout);
        }
    }

    fn write_axis(&self, data: &Dimensions, out: &mut Markup, layout: &Layout) {
        let width = data.width * defaults::AXIS_OVERSHOOT;
        let height = data.height * defaults::AXIS_OVERSHOOT;
        let m = self.margin;

        let axis = Polyline::new(vec![
            Point::new(m.width, m.height + height),
            Point::new(m.width, m.height),
            Point::new(m.width + width, m.height),
        ])
        .with_stroke(self.axis_stroke.clone());
        axis.write_svg(out, layout);
    }
}

impl Element for LineChart {
    fn base(&self) -> &ShapeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ShapeBase {
        &mut self.base
    }

    /// Nothing at all when no series was added.
    fn write_svg(&self, out: &mut Markup, layout: &Layout) {
        let Some(bounds) = self.data_bounds() else {
            return;
        };
        let data = bounds.size();

        for series in &self.series {
            self.write_series(series, &data, out, layout);
        }
        self.write_axis(&data, out, layout);
    }

    fn offset(&mut self, delta: Point) {
        check_finite("LineChart::offset", &[delta.x, delta.y]);
        for series in &mut self.series {
            series.offset(delta);
        }
    }
}
