//! Validation problems are reported through tracing, never as errors.
#![cfg(feature = "tracing")]

use std::io;
use std::sync::{Arc, Mutex};

use svg_writer::{
    AnimateMotion, Circle, Color, Document, Fill, Line, Marker, MarkerPosition, MarkerSlots,
    SetAttribute, Text, pt,
};
use tracing_subscriber::fmt::MakeWriter;

/// Collects everything the subscriber writes.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture(f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(captured.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    captured.text()
}

#[test]
fn non_finite_input_is_logged_and_kept() {
    let mut circle = None;
    let logs = capture(|| circle = Some(Circle::new(pt(f64::NAN, 1.0), 2.0, Color::RED)));
    assert!(logs.contains("non-finite value provided"), "{logs}");
    assert!(logs.contains("Circle::new"), "{logs}");
    assert!(circle.unwrap().center.x.is_nan());
}

#[test]
fn opacity_out_of_range_is_logged() {
    let logs = capture(|| {
        let _ = Fill::new(Color::RED).with_opacity(1.5);
    });
    assert!(logs.contains("WARN"), "{logs}");
}

#[test]
fn empty_text_is_logged() {
    let logs = capture(|| {
        let _ = Text::new(pt(0.0, 0.0), "");
    });
    assert!(logs.contains("empty text content"), "{logs}");
}

#[test]
fn animation_problems_are_logged_at_render() {
    let logs = capture(|| {
        let mut doc = Document::default();
        doc.append_animation(SetAttribute::new("", "", "1"));
        doc.append_animation(AnimateMotion::new("dot", Vec::new()));
        let svg = doc.render().unwrap();
        assert!(svg.contains("path=\"\" "));
    });
    assert!(logs.contains("animation has no target href"), "{logs}");
    assert!(logs.contains("set animation has no attributeName"), "{logs}");
    assert!(logs.contains("motion animation has no path points"), "{logs}");
}

#[test]
fn marker_collision_is_logged_and_rendering_continues() {
    let a = Marker::new("m", 2.0, 2.0, pt(1.0, 1.0), Circle::new(pt(1.0, 1.0), 2.0, Color::RED))
        .into_shared();
    let b = Marker::new("m", 2.0, 2.0, pt(1.0, 1.0), Circle::new(pt(1.0, 1.0), 2.0, Color::BLUE))
        .into_shared();
    let mut doc = Document::default();
    doc.append(
        Line::new(pt(0.0, 0.0), pt(1.0, 0.0))
            .with_markers(MarkerSlots::default().with(MarkerPosition::End, &a)),
    );
    doc.append(
        Line::new(pt(0.0, 1.0), pt(1.0, 1.0))
            .with_id("offender")
            .with_markers(MarkerSlots::default().with(MarkerPosition::End, &b)),
    );

    let mut svg = String::new();
    let logs = capture(|| svg = doc.render().unwrap());
    assert!(logs.contains("marker collision"), "{logs}");
    assert!(logs.contains("offender"), "{logs}");
    assert!(svg.contains("fill=\"rgb(255,0,0)\""));
    assert!(!svg.contains("fill=\"rgb(0,0,255)\""));
}

#[test]
fn dangling_marker_reference_is_logged() {
    let head = Marker::new("h", 1.0, 1.0, pt(0.0, 0.0), Circle::new(pt(0.0, 0.0), 1.0, Color::RED))
        .into_shared();
    let line = Line::new(pt(0.0, 0.0), pt(1.0, 0.0))
        .with_markers(MarkerSlots::default().with(MarkerPosition::Start, &head));
    drop(head);

    let logs = capture(|| {
        let mut doc = Document::default();
        doc.append(line);
        doc.render().unwrap();
    });
    assert!(logs.contains("marker reference outlived its marker"), "{logs}");
}
