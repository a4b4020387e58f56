//! Presentation values: color, fill, stroke and font.
//!
//! Each one knows how to write its own attribute run; see [`Attributes`].

use std::fmt;
use std::str::FromStr;

use crate::defaults;
use crate::layout::Layout;
use crate::log::warn;
use crate::svg::{Attributes, Markup};
use crate::types::check_finite;

/// An RGB color, or no color at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Transparent,
    Rgb(u8, u8, u8),
}

impl Color {
    pub const AQUA: Color = Color::Rgb(0, 255, 255);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const BLUE: Color = Color::Rgb(0, 0, 255);
    pub const BROWN: Color = Color::Rgb(165, 42, 42);
    pub const CYAN: Color = Color::Rgb(0, 255, 255);
    pub const FUCHSIA: Color = Color::Rgb(255, 0, 255);
    pub const GREEN: Color = Color::Rgb(0, 128, 0);
    pub const LIME: Color = Color::Rgb(0, 255, 0);
    pub const MAGENTA: Color = Color::Rgb(255, 0, 255);
    pub const ORANGE: Color = Color::Rgb(255, 165, 0);
    pub const PURPLE: Color = Color::Rgb(128, 0, 128);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const SILVER: Color = Color::Rgb(192, 192, 192);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const YELLOW: Color = Color::Rgb(255, 255, 0);

    /// Look up one of the named palette entries (case-insensitive).
    pub fn named(name: &str) -> Option<Color> {
        let color = match name.to_ascii_lowercase().as_str() {
            "aqua" => Color::AQUA,
            "black" => Color::BLACK,
            "gray" | "grey" => Color::GRAY,
            "blue" => Color::BLUE,
            "brown" => Color::BROWN,
            "cyan" => Color::CYAN,
            "fuchsia" => Color::FUCHSIA,
            "green" => Color::GREEN,
            "lime" => Color::LIME,
            "magenta" => Color::MAGENTA,
            "orange" => Color::ORANGE,
            "purple" => Color::PURPLE,
            "red" => Color::RED,
            "silver" => Color::SILVER,
            "white" => Color::WHITE,
            "yellow" => Color::YELLOW,
            "none" | "transparent" => Color::Transparent,
            _ => return None,
        };
        Some(color)
    }

    pub fn is_transparent(self) -> bool {
        self == Color::Transparent
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Transparent => f.write_str("none"),
            Color::Rgb(r, g, b) => write!(f, "rgb({},{},{})", r, g, b),
        }
    }
}

/// Error returned when a color string is not understood
#[derive(Debug, Clone, PartialEq)]
pub struct ParseColorError(pub String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color: {}", self.0)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Accepts palette names, `none`, `#rgb`, `#rrggbb` and `rgb(r,g,b)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(color) = Color::named(s) {
            return Ok(color);
        }
        let err = || ParseColorError(s.to_string());

        if let Some(inner) = s.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
            let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
            if let [r, g, b] = parts.as_slice() {
                return match (r.parse::<u8>(), g.parse::<u8>(), b.parse::<u8>()) {
                    (Ok(r), Ok(g), Ok(b)) => Ok(Color::Rgb(r, g, b)),
                    _ => Err(err()),
                };
            }
            return Err(err());
        }

        if let Some(hex) = s.strip_prefix('#') {
            let channel = |range: std::ops::Range<usize>| {
                hex.get(range).and_then(|h| u8::from_str_radix(h, 16).ok())
            };
            return match hex.len() {
                6 => match (channel(0..2), channel(2..4), channel(4..6)) {
                    (Some(r), Some(g), Some(b)) => Ok(Color::Rgb(r, g, b)),
                    _ => Err(err()),
                },
                // #abc -> #aabbcc
                3 => match (channel(0..1), channel(1..2), channel(2..3)) {
                    (Some(r), Some(g), Some(b)) => Ok(Color::Rgb(r * 17, g * 17, b * 17)),
                    _ => Err(err()),
                },
                _ => Err(err()),
            };
        }

        Err(err())
    }
}

fn check_opacity(what: &'static str, opacity: f64) {
    if !(0.0..=1.0).contains(&opacity) {
        warn!(what, opacity, "opacity is out of range [0,1]");
    }
}

/// Interior paint of a surface shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fill {
    pub color: Color,
    /// 1 = fully visible, 0 = fully transparent
    pub opacity: f64,
}

impl Default for Fill {
    fn default() -> Self {
        Self::new(Color::Transparent)
    }
}

impl From<Color> for Fill {
    fn from(color: Color) -> Self {
        Self::new(color)
    }
}

impl Fill {
    pub fn new(color: Color) -> Self {
        Self { color, opacity: 1.0 }
    }

    /// Out-of-range opacity is logged and kept.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        check_opacity("Fill::with_opacity", opacity);
        self.opacity = opacity;
        self
    }
}

impl Attributes for Fill {
    fn write_attrs(&self, out: &mut Markup, _layout: &Layout) {
        out.attr("fill", self.color);
        if self.opacity < 1.0 {
            out.num("fill-opacity", self.opacity);
        }
    }
}

/// Outline of a shape. A negative width means "no stroke" and renders nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub width: f64,
    pub color: Color,
    pub non_scaling: bool,
    /// Omitted when negative
    pub miter_limit: f64,
    pub dash_array: Vec<u32>,
    pub dash_offset: u32,
    pub opacity: f64,
}

impl Default for Stroke {
    fn default() -> Self {
        Self::none()
    }
}

impl Stroke {
    pub fn new(width: f64, color: Color) -> Self {
        check_finite("Stroke::new", &[width]);
        Self {
            width,
            color,
            ..Self::none()
        }
    }

    /// The "no stroke" sentinel.
    pub fn none() -> Self {
        Self {
            width: -1.0,
            color: Color::Transparent,
            non_scaling: false,
            miter_limit: -1.0,
            dash_array: Vec::new(),
            dash_offset: 0,
            opacity: 1.0,
        }
    }

    pub fn is_none(&self) -> bool {
        self.width < 0.0
    }

    /// Keep the stroke width constant regardless of transforms.
    pub fn non_scaling(mut self) -> Self {
        self.non_scaling = true;
        self
    }

    pub fn with_miter_limit(mut self, miter_limit: f64) -> Self {
        check_finite("Stroke::with_miter_limit", &[miter_limit]);
        self.miter_limit = miter_limit;
        self
    }

    pub fn with_dash_array(mut self, dashes: impl Into<Vec<u32>>) -> Self {
        self.dash_array = dashes.into();
        self
    }

    pub fn with_dash_offset(mut self, offset: u32) -> Self {
        self.dash_offset = offset;
        self
    }

    /// Out-of-range or non-finite opacity is logged and kept.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        check_finite("Stroke::with_opacity", &[opacity]);
        check_opacity("Stroke::with_opacity", opacity);
        self.opacity = opacity;
        self
    }
}

impl Attributes for Stroke {
    fn write_attrs(&self, out: &mut Markup, layout: &Layout) {
        if self.is_none() {
            return;
        }

        out.num("stroke-width", layout.scale(self.width))
            .attr("stroke", self.color);
        if self.miter_limit >= 0.0 {
            out.num("stroke-miterlimit", layout.scale(self.miter_limit));
        }
        out.num("stroke-dashoffset", layout.scale(f64::from(self.dash_offset)));
        if !self.dash_array.is_empty() {
            let dashes: Vec<String> = self.dash_array.iter().map(u32::to_string).collect();
            out.attr("stroke-dasharray", dashes.join(","));
        }
        if self.opacity < 1.0 {
            out.num("stroke-opacity", self.opacity);
        }
        if self.non_scaling {
            out.attr("vector-effect", "non-scaling-stroke");
        }
    }
}

/// Font size and family for text.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    pub size: f64,
    pub family: String,
}

impl Default for Font {
    fn default() -> Self {
        Self::new(defaults::FONT_SIZE, defaults::FONT_FAMILY)
    }
}

impl Font {
    pub fn new(size: f64, family: impl Into<String>) -> Self {
        check_finite("Font::new", &[size]);
        Self {
            size,
            family: family.into(),
        }
    }
}

impl Attributes for Font {
    fn write_attrs(&self, out: &mut Markup, layout: &Layout) {
        out.num("font-size", layout.scale(self.size))
            .attr("font-family", &self.family);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_display() {
        assert_eq!(Color::RED.to_string(), "rgb(255,0,0)");
        assert_eq!(Color::Transparent.to_string(), "none");
        assert_eq!(Color::GRAY.to_string(), "rgb(127,127,127)");
    }

    #[test]
    fn color_parse() {
        assert_eq!("Purple".parse::<Color>(), Ok(Color::PURPLE));
        assert_eq!("none".parse::<Color>(), Ok(Color::Transparent));
        assert_eq!("rgb(1, 2, 3)".parse::<Color>(), Ok(Color::Rgb(1, 2, 3)));
        assert_eq!("#ff8000".parse::<Color>(), Ok(Color::Rgb(255, 128, 0)));
        assert_eq!("#abc".parse::<Color>(), Ok(Color::Rgb(0xaa, 0xbb, 0xcc)));
        assert!("rgb(300,0,0)".parse::<Color>().is_err());
        assert!("#12".parse::<Color>().is_err());
        assert!("chartreuse".parse::<Color>().is_err());
    }

    #[test]
    fn fill_opacity_only_below_one() {
        let l = Layout::default();
        assert_eq!(Fill::new(Color::RED).render(&l), "fill=\"rgb(255,0,0)\" ");
        assert_eq!(
            Fill::new(Color::RED).with_opacity(0.5).render(&l),
            "fill=\"rgb(255,0,0)\" fill-opacity=\"0.5\" "
        );
        assert_eq!(Fill::default().render(&l), "fill=\"none\" ");
    }

    #[test]
    fn fill_keeps_out_of_range_opacity() {
        let fill = Fill::new(Color::BLUE).with_opacity(1.5);
        assert_eq!(fill.opacity, 1.5);
        assert_eq!(fill.render(&Layout::default()), "fill=\"rgb(0,0,255)\" ");
    }

    #[test]
    fn negative_stroke_width_renders_nothing() {
        assert_eq!(Stroke::none().render(&Layout::default()), "");
        assert_eq!(Stroke::new(-0.5, Color::RED).render(&Layout::default()), "");
    }

    #[test]
    fn stroke_minimal() {
        let s = Stroke::new(2.0, Color::BLACK);
        assert_eq!(
            s.render(&Layout::default()),
            "stroke-width=\"2\" stroke=\"rgb(0,0,0)\" stroke-dashoffset=\"0\" "
        );
    }

    #[test]
    fn stroke_full_is_scaled() {
        let s = Stroke::new(1.5, Color::GREEN)
            .with_miter_limit(4.0)
            .with_dash_array([5u32, 3, 2])
            .with_dash_offset(1)
            .with_opacity(0.25)
            .non_scaling();
        let l = Layout::default().with_scale(2.0);
        assert_eq!(
            s.render(&l),
            "stroke-width=\"3\" stroke=\"rgb(0,128,0)\" stroke-miterlimit=\"8\" \
             stroke-dashoffset=\"2\" stroke-dasharray=\"5,3,2\" stroke-opacity=\"0.25\" \
             vector-effect=\"non-scaling-stroke\" "
        );
    }

    #[test]
    fn font_attributes() {
        let l = Layout::default().with_scale(0.5);
        assert_eq!(
            Font::default().render(&l),
            "font-size=\"6\" font-family=\"Verdana\" "
        );
        assert_eq!(
            Font::new(10.0, "monospace").render(&Layout::default()),
            "font-size=\"10\" font-family=\"monospace\" "
        );
    }
}
