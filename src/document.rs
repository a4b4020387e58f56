//! The document: owns shapes and animations and turns them into one SVG file.

use std::collections::BTreeMap;
use std::rc::Rc;

use camino::{Utf8Path, Utf8PathBuf};

use crate::animation::Animation;
use crate::defaults;
use crate::errors::{RenderError, SaveError};
use crate::layout::Layout;
use crate::log::{debug, warn};
use crate::marker::Marker;
use crate::shapes::{Element, Identifiable, Shape};
use crate::svg::{Markup, Num};

/// Two different markers registered under the same id.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerCollision {
    pub id: String,
    /// Markup of the top-level shape through which the second marker was found
    pub element: String,
}

/// Markers referenced by a document, keyed (and therefore ordered) by id.
#[derive(Debug, Default)]
struct MarkerRegistry {
    markers: BTreeMap<String, Rc<Marker>>,
    collisions: Vec<MarkerCollision>,
}

impl MarkerRegistry {
    /// Walk every marker reachable from `shapes`, following markers used by
    /// the shapes inside markers too. The first instance seen for an id wins.
    fn collect(shapes: &[Shape], layout: &Layout) -> Self {
        let mut registry = Self::default();
        for shape in shapes {
            let mut pending: Vec<Rc<Marker>> = shape
                .marker_slots()
                .into_iter()
                .flat_map(|slots| slots.resolve())
                .map(|(_, marker)| marker)
                .collect();
            pending.reverse();

            while let Some(marker) = pending.pop() {
                if let Some(known) = registry.markers.get(marker.id()) {
                    if !Rc::ptr_eq(known, &marker) && !known.visually_eq(&marker) {
                        registry.collisions.push(MarkerCollision {
                            id: marker.id().to_string(),
                            element: shape.render(layout),
                        });
                    }
                    continue;
                }

                let nested: Vec<Rc<Marker>> = marker
                    .shapes()
                    .iter()
                    .flat_map(|inner| inner.marker_slots())
                    .flat_map(|slots| slots.resolve())
                    .map(|(_, m)| m)
                    .collect();
                registry.markers.insert(marker.id().to_string(), marker);
                pending.extend(nested.into_iter().rev());
            }
        }
        registry
    }
}

/// An SVG document under construction.
///
/// Shapes are painted in ascending z order; shapes with equal z keep the
/// order in which they were appended.
#[derive(Clone, Debug, Default)]
pub struct Document {
    id: String,
    layout: Layout,
    shapes: Vec<Shape>,
    animations: Vec<Animation>,
    /// Set once any shape with a non-zero z is appended, never cleared
    needs_ordering: bool,
    file_name: Option<Utf8PathBuf>,
}

impl Identifiable for Document {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }
}

impl Document {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Take ownership of a shape. Clone it first to keep using it.
    pub fn append(&mut self, shape: impl Into<Shape>) -> &mut Self {
        let shape = shape.into();
        if shape.z() != 0 {
            self.needs_ordering = true;
        }
        self.shapes.push(shape);
        self
    }

    pub fn append_animation(&mut self, animation: impl Into<Animation>) -> &mut Self {
        self.animations.push(animation.into());
        self
    }

    pub fn is_animated(&self) -> bool {
        !self.animations.is_empty()
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Shapes in their current order (z-sorted after the first render).
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn animations(&self) -> &[Animation] {
        &self.animations
    }

    /// The path used by the last [`Document::save`], extension included.
    pub fn file_name(&self) -> Option<&Utf8Path> {
        self.file_name.as_deref()
    }

    /// Markers sharing an id but differing in content, in discovery order.
    pub fn check_markers(&self) -> Vec<MarkerCollision> {
        MarkerRegistry::collect(&self.shapes, &self.layout).collisions
    }

    fn sort_by_z(&mut self) {
        if self.needs_ordering {
            // stable: equal z keeps insertion order
            self.shapes.sort_by_key(|shape| shape.z());
        }
    }

    fn write_header(&self, out: &mut Markup) {
        let dims = self.layout.dimensions;
        out.raw("<?xml ")
            .attr("version", "1.0")
            .attr("standalone", "no")
            .raw("?>\n")
            .display(format_args!(
                "<!-- Generator: {} ({}), Version: {} -->\n",
                defaults::GENERATOR_NAME,
                defaults::GENERATOR_URL,
                defaults::GENERATOR_VERSION
            ))
            .display(format_args!(
                "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG {}//EN\" \
                 \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n",
                defaults::SVG_VERSION
            ))
            .raw("<svg ")
            .id(&self.id)
            .attr("width", format_args!("{}px", Num(dims.width)))
            .attr("height", format_args!("{}px", Num(dims.height)))
            .attr("xmlns", defaults::SVG_NS)
            .attr("version", defaults::SVG_VERSION)
            .raw(">\n");
    }

    /// Serialize the whole document.
    ///
    /// The only state this touches is the shape order, which is z-sorted in
    /// place, so rendering twice yields the same text. Marker collisions are
    /// logged and rendering goes on with the first instance seen.
    pub fn render(&mut self) -> Result<String, RenderError> {
        self.sort_by_z();

        let registry = MarkerRegistry::collect(&self.shapes, &self.layout);
        for collision in &registry.collisions {
            warn!(
                id = %collision.id,
                element = %collision.element.trim(),
                "marker collision, markers may not render correctly"
            );
        }

        let mut out = Markup::new();
        self.write_header(&mut out);

        if !registry.markers.is_empty() {
            out.open_block("defs");
            for marker in registry.markers.values() {
                out.raw(&marker.render()?);
            }
            out.raw("\t").close("defs");
        }
        for shape in &self.shapes {
            shape.write_svg(&mut out, &self.layout);
        }
        for animation in &self.animations {
            animation.write_svg(&mut out);
        }
        out.close("svg");

        debug!(
            shapes = self.shapes.len(),
            markers = registry.markers.len(),
            animations = self.animations.len(),
            "rendered document"
        );
        Ok(out.finish())
    }

    /// Render and write the document to `path`.
    ///
    /// With `auto_append`, `.html` is appended to animated documents and
    /// `.svg` to the others, unless the path already ends with it. Returns the
    /// path actually written.
    pub fn save(
        &mut self,
        path: impl AsRef<Utf8Path>,
        auto_append: bool,
    ) -> Result<Utf8PathBuf, SaveError> {
        let mut file_name = path.as_ref().to_string();
        if auto_append {
            let extension = if self.is_animated() { ".html" } else { ".svg" };
            if !file_name.ends_with(extension) {
                file_name.push_str(extension);
            }
        }
        let file_name = Utf8PathBuf::from(file_name);
        self.file_name = Some(file_name.clone());

        let text = self.render()?;
        std::fs::write(&file_name, text).map_err(|source| SaveError::Io {
            path: file_name.clone(),
            source,
        })?;
        debug!(path = %file_name, "saved document");
        Ok(file_name)
    }
}
