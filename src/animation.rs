//! Declarative SVG animations (`<set>` and `<animateMotion>`).
//!
//! Animations are written after all shapes and target a shape by id.
//! Missing targets or attribute names are logged, never fatal.

use crate::defaults;
use crate::log::warn;
use crate::shapes::Identifiable;
use crate::svg::{Markup, Num};
use crate::types::{Point, check_finite_points};

/// Target and timing shared by every animation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Timing {
    pub id: String,
    /// Id of the animated element, without the leading `#`
    pub href: String,
    pub begin: String,
    /// Fill mode, e.g. `freeze`
    pub fill: String,
    pub dur: String,
}

impl Timing {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            ..Self::default()
        }
    }

    fn write_attrs(&self, out: &mut Markup) {
        if self.href.is_empty() {
            warn!(id = %self.id, "animation has no target href");
        }
        out.id(&self.id).attr("href", format_args!("#{}", self.href));
        if !self.begin.is_empty() {
            out.attr("begin", &self.begin);
        }
        if !self.fill.is_empty() {
            out.attr("fill", &self.fill);
        }
        if !self.dur.is_empty() {
            out.attr("dur", &self.dur);
        }
    }
}

/// Builder methods shared by the animation types.
macro_rules! impl_timing_builders {
    ($($ty:ty),*) => {
        $(
            impl $ty {
                pub fn with_begin(mut self, begin: impl Into<String>) -> Self {
                    self.timing.begin = begin.into();
                    self
                }

                pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
                    self.timing.fill = fill.into();
                    self
                }

                pub fn with_dur(mut self, dur: impl Into<String>) -> Self {
                    self.timing.dur = dur.into();
                    self
                }

                pub fn with_id(mut self, id: impl Into<String>) -> Self {
                    self.timing.id = id.into();
                    self
                }

                pub fn timing(&self) -> &Timing {
                    &self.timing
                }
            }

            impl Identifiable for $ty {
                fn id(&self) -> &str { &self.timing.id }
                fn set_id(&mut self, id: impl Into<String>) { self.timing.id = id.into(); }
            }
        )*
    };
}

impl_timing_builders!(SetAttribute, AnimateMotion);

/// Set an attribute of the target to a value (`<set>`).
#[derive(Clone, Debug, PartialEq)]
pub struct SetAttribute {
    pub timing: Timing,
    pub to: String,
    pub attribute_name: String,
    pub attribute_type: String,
}

impl SetAttribute {
    pub fn new(
        href: impl Into<String>,
        attribute_name: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            timing: Timing::new(href),
            to: to.into(),
            attribute_name: attribute_name.into(),
            attribute_type: defaults::ANIMATION_ATTRIBUTE_TYPE.to_string(),
        }
    }

    pub fn with_attribute_type(mut self, attribute_type: impl Into<String>) -> Self {
        self.attribute_type = attribute_type.into();
        self
    }

    fn write_svg(&self, out: &mut Markup) {
        if self.attribute_name.is_empty() {
            warn!(id = %self.timing.id, "set animation has no attributeName");
        }
        out.open("set");
        self.timing.write_attrs(out);
        out.attr("to", &self.to)
            .attr("attributeName", &self.attribute_name)
            .attr("attributeType", &self.attribute_type)
            .close_empty();
    }
}

/// Move the target along a polyline path (`<animateMotion>`).
///
/// Path points are in the target's own coordinates and are not transformed
/// by the document layout.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimateMotion {
    pub timing: Timing,
    pub path: Vec<Point>,
}

impl AnimateMotion {
    pub fn new(href: impl Into<String>, path: impl Into<Vec<Point>>) -> Self {
        let path = path.into();
        check_finite_points("AnimateMotion::new", &path);
        Self {
            timing: Timing::new(href),
            path,
        }
    }

    fn path_data(&self) -> String {
        self.path
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let cmd = if i == 0 { 'M' } else { 'L' };
                format!("{cmd}{},{}", Num(p.x), Num(p.y))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn write_svg(&self, out: &mut Markup) {
        if self.path.is_empty() {
            warn!(id = %self.timing.id, "motion animation has no path points");
        }
        out.open("animateMotion");
        self.timing.write_attrs(out);
        out.attr("path", self.path_data()).close_empty();
    }
}

/// Every animation a document can hold.
#[derive(Clone, Debug, PartialEq)]
pub enum Animation {
    Set(SetAttribute),
    Motion(AnimateMotion),
}

impl From<SetAttribute> for Animation {
    fn from(value: SetAttribute) -> Self {
        Animation::Set(value)
    }
}

impl From<AnimateMotion> for Animation {
    fn from(value: AnimateMotion) -> Self {
        Animation::Motion(value)
    }
}

impl Animation {
    pub fn timing(&self) -> &Timing {
        match self {
            Animation::Set(a) => &a.timing,
            Animation::Motion(a) => &a.timing,
        }
    }

    pub fn write_svg(&self, out: &mut Markup) {
        match self {
            Animation::Set(a) => a.write_svg(out),
            Animation::Motion(a) => a.write_svg(out),
        }
    }

    /// Animations ignore the layout; the element as a standalone fragment.
    pub fn render(&self) -> String {
        let mut out = Markup::new();
        self.write_svg(&mut out);
        out.finish()
    }
}

impl Identifiable for Animation {
    fn id(&self) -> &str {
        &self.timing().id
    }

    fn set_id(&mut self, id: impl Into<String>) {
        match self {
            Animation::Set(a) => a.set_id(id),
            Animation::Motion(a) => a.set_id(id),
        }
    }
}
