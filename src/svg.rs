//! Markup generation helpers
//!
//! The output is written by hand rather than through an XML serializer: the
//! format is fixed, down to the tab indentation and the trailing space after
//! every attribute, and existing consumers compare it byte for byte.

use std::fmt::{self, Display, Write};

use crate::layout::Layout;
use crate::types::Point;

/// Format a number matching C's `%g` (6 significant figures, trailing zeros
/// trimmed, exponent notation below 1e-4 or from 1e6 on).
pub fn fmt_num(value: f64) -> String {
    Num(value).to_string()
}

/// Display wrapper applying [`fmt_num`] formatting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Num(pub f64);

const SIG_FIGS: i32 = 6;

impl Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return f.write_str("nan");
        }
        if value.is_infinite() {
            return f.write_str(if value < 0.0 { "-inf" } else { "inf" });
        }
        if value == 0.0 {
            return f.write_str(if value.is_sign_negative() { "-0" } else { "0" });
        }

        // Let the float formatter do the rounding to 6 significant figures,
        // then read the decimal exponent back out of it.
        let sci = format!("{:.*e}", (SIG_FIGS - 1) as usize, value);
        let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
        let exp: i32 = exp.parse().unwrap_or(0);

        if exp < -4 || exp >= SIG_FIGS {
            let sign = if exp < 0 { '-' } else { '+' };
            write!(f, "{}e{}{:02}", trim_fraction(mantissa), sign, exp.abs())
        } else {
            let decimals = (SIG_FIGS - 1 - exp).max(0) as usize;
            let fixed = format!("{:.*}", decimals, value);
            f.write_str(trim_fraction(&fixed))
        }
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// A point list in the `x,y x,y ` form used by `points` and path data.
pub(crate) struct PointList<'a> {
    pub points: &'a [Point],
    pub layout: &'a Layout,
}

impl Display for PointList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in self.points {
            write!(f, "{},{} ", Num(self.layout.x(p.x)), Num(self.layout.y(p.y)))?;
        }
        Ok(())
    }
}

/// Append-only markup buffer.
#[derive(Debug, Default)]
pub struct Markup {
    buf: String,
}

impl Markup {
    pub fn new() -> Self {
        Self::default()
    }

    /// `\t<name ` - the start of an element whose attributes follow.
    pub fn open(&mut self, name: &str) -> &mut Self {
        let _ = write!(self.buf, "\t<{name} ");
        self
    }

    /// `\t<name>` plus newline - an element without attributes.
    pub fn open_block(&mut self, name: &str) -> &mut Self {
        let _ = writeln!(self.buf, "\t<{name}>");
        self
    }

    /// `name="value" `
    pub fn attr(&mut self, name: &str, value: impl Display) -> &mut Self {
        let _ = write!(self.buf, "{name}=\"{value}\" ");
        self
    }

    /// Numeric attribute, `%g` formatted.
    pub fn num(&mut self, name: &str, value: f64) -> &mut Self {
        self.attr(name, Num(value))
    }

    /// `id="..." `, only when the id is non-empty.
    pub fn id(&mut self, id: &str) -> &mut Self {
        if !id.is_empty() {
            self.attr("id", id);
        }
        self
    }

    pub fn raw(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(text);
        self
    }

    pub fn display(&mut self, value: impl Display) -> &mut Self {
        let _ = write!(self.buf, "{value}");
        self
    }

    /// `/>` plus newline
    pub fn close_empty(&mut self) -> &mut Self {
        self.buf.push_str("/>\n");
        self
    }

    /// `</name>` plus newline
    pub fn close(&mut self, name: &str) -> &mut Self {
        let _ = writeln!(self.buf, "</{name}>");
        self
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

impl Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}

/// Something that contributes a run of attributes to an element.
pub trait Attributes {
    fn write_attrs(&self, out: &mut Markup, layout: &Layout);

    /// The attribute fragment on its own.
    fn render(&self, layout: &Layout) -> String {
        let mut out = Markup::new();
        self.write_attrs(&mut out, layout);
        out.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::pt;

    #[test]
    fn fmt_num_matches_printf_g() {
        let cases = [
            (0.0, "0"),
            (250.0, "250"),
            (10.0, "10"),
            (-3.0, "-3"),
            (0.1, "0.1"),
            (0.5, "0.5"),
            (1.0 / 3.0, "0.333333"),
            (2.0 / 3.0, "0.666667"),
            (123456.0, "123456"),
            (1234567.0, "1.23457e+06"),
            (1e6, "1e+06"),
            (999999.5, "1e+06"),
            (0.0001, "0.0001"),
            (0.00001234, "1.234e-05"),
            (3.14159265, "3.14159"),
            (100.5, "100.5"),
        ];
        for (value, expected) in cases {
            assert_eq!(fmt_num(value), expected, "formatting {value}");
        }
    }

    #[test]
    fn fmt_num_non_finite() {
        assert_eq!(fmt_num(f64::NAN), "nan");
        assert_eq!(fmt_num(f64::INFINITY), "inf");
        assert_eq!(fmt_num(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn markup_element() {
        let mut m = Markup::new();
        m.open("circle").id("").num("r", 2.5).attr("fill", "none").close_empty();
        assert_eq!(m.as_str(), "\t<circle r=\"2.5\" fill=\"none\" />\n");
    }

    #[test]
    fn markup_block() {
        let mut m = Markup::new();
        m.open_block("defs").raw("\t").close("defs");
        assert_eq!(m.finish(), "\t<defs>\n\t</defs>\n");
    }

    #[test]
    fn point_list_uses_layout() {
        let layout = Layout::default();
        let points = [pt(1.0, 2.0), pt(3.5, 300.0)];
        let s = PointList {
            points: &points,
            layout: &layout,
        }
        .to_string();
        assert_eq!(s, "1,298 3.5,0 ");
    }
}
