//! Error types with diagnostics using miette
//!
//! Only a handful of conditions are fatal. Everything else (non-finite
//! numbers, opacity out of range, marker collisions) is reported through
//! [`crate::log`] and rendering carries on.

use camino::Utf8PathBuf;
use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Render Errors
// ============================================================================

/// Errors that occur while serializing a document or one of its parts
#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    #[error("marker has no id, it cannot be referenced")]
    #[diagnostic(
        code(svg_writer::render::missing_marker_id),
        help("give the marker a non-empty id before rendering it")
    )]
    MissingMarkerId,
}

// ============================================================================
// Marker Errors
// ============================================================================

/// Errors raised while configuring a marker
#[derive(Error, Diagnostic, Debug, PartialEq)]
pub enum MarkerError {
    #[error("invalid marker orientation: {value}")]
    #[diagnostic(
        code(svg_writer::marker::invalid_orientation),
        help("use \"auto\", \"auto-start-reverse\" or an angle in degrees")
    )]
    InvalidOrientation { value: String },
}

// ============================================================================
// Save Errors
// ============================================================================

/// Errors from writing a document to disk
#[derive(Error, Diagnostic, Debug)]
pub enum SaveError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Render(#[from] RenderError),

    #[error("cannot write {path}")]
    #[diagnostic(code(svg_writer::save::io))]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}
