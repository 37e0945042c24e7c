//! Error types for chipbox.
//!
//! The taxonomy is deliberately small. Construction-time rejection is the
//! only fatal library error: the editor refuses to attach to a missing or
//! non-empty surface and the host decides what to do about it. Runtime
//! misuse (adding a duplicate, removing an absent value, operating on a
//! destructed editor) is a silent no-op, never an error; the widget shows
//! invalid entries through a visual marker, not a dialog.
//!
//! The demo binary has fallible layers the library does not (config files,
//! logging, the terminal itself); [`AppError`] wraps those so `main` can
//! propagate everything with `?`.

use thiserror::Error;

/// Construction-time failures.
///
/// Fatal to the constructor call: the editor is never built, so the host
/// must not attempt further operations. There is nothing to retry: the
/// options themselves are wrong.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    /// The options carried no surface to attach to.
    #[error("chip editor requires a surface to attach to; none was supplied")]
    MissingSurface,

    /// The supplied surface already has child content. The widget refuses
    /// to attach rather than corrupt whatever the host put there.
    #[error("surface for chip editor must be empty, found {child_count} existing child node(s)")]
    SurfaceNotEmpty {
        /// How many children the surface already held.
        child_count: usize,
    },
}

/// Top-level error for the demo binary.
///
/// All layer-specific errors convert via `From`, so `main` composes with
/// `?` throughout.
#[derive(Debug, Error)]
pub enum AppError {
    /// The editor could not be constructed.
    #[error("failed to construct chip editor: {0}")]
    Construction(#[from] ConstructionError),

    /// A config file existed but could not be read or parsed.
    #[error("failed to load configuration: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// The tracing subscriber could not be initialized.
    #[error("failed to initialize logging: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal setup, drawing, or teardown failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn missing_surface_display() {
        let err = ConstructionError::MissingSurface;
        assert!(err.to_string().contains("none was supplied"));
    }

    #[test]
    fn surface_not_empty_reports_child_count() {
        let err = ConstructionError::SurfaceNotEmpty { child_count: 3 };
        let msg = err.to_string();
        assert!(msg.contains("must be empty"));
        assert!(msg.contains('3'));
    }

    #[test]
    fn app_error_from_construction_error() {
        let err: AppError = ConstructionError::MissingSurface.into();
        let msg = err.to_string();
        assert!(msg.contains("failed to construct chip editor"));
        assert!(msg.contains("none was supplied"));
    }

    #[test]
    fn app_error_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe broken");
        let err: AppError = io_err.into();
        let msg = err.to_string();
        assert!(msg.contains("terminal error"));
        assert!(msg.contains("pipe broken"));
    }
}
