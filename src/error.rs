#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the crate."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint. The lint is disabled for
//! the module to keep the generated implementations warning-free while still
//! exposing a thoroughly documented error surface for library consumers.

use std::path::{Path, PathBuf};

/// Unified error type returned by the manifest loader, the integrations, and
/// the CLI.
///
/// Each variant captures sufficient context for diagnostics. No variant is
/// ever recovered silently: every failure propagates to the binary boundary,
/// which reports it to the host environment before exiting.
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// Returned when the requested integration key is unknown or missing.
    #[error("invalid configuration: {message}")]
    Config {
        /// Human readable message describing the configuration problem.
        message: String
    },
    /// Wraps I/O errors that occur while reading the manifest file.
    #[error("failed to read manifest from {path:?}: {source}")]
    Source {
        /// Location of the manifest file.
        path:   PathBuf,
        /// Underlying I/O error reported by the operating system.
        source: std::io::Error
    },
    /// Wraps JSON decoding errors produced while parsing the manifest.
    #[error("failed to parse manifest: {source}")]
    Parse {
        /// Source decoding error from serde_json.
        source: serde_json::Error
    },
    /// Returned when a required manifest field is absent or empty.
    #[error("manifest does not contain '{path}' property")]
    MissingField {
        /// Dotted path of the missing field, e.g. `.engines.node`.
        path: String
    },
    /// Wraps serialization errors when writing the badge payload.
    #[error("failed to serialize badge payload: {source}")]
    Serialize {
        /// Underlying serialization error.
        source: serde_json::Error
    }
}

impl Error {
    /// Constructs a configuration error from the provided displayable value.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the configuration failure.
    pub fn config<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Config {
            message: message.into()
        }
    }

    /// Constructs a missing-field error naming the required dotted path.
    ///
    /// # Parameters
    ///
    /// * `path` - Dotted path of the field, e.g. `.license`.
    pub fn missing_field<P>(path: P) -> Self
    where
        P: Into<String>
    {
        Self::MissingField {
            path: path.into()
        }
    }

    /// Formats the error for diagnostics without the variant name.
    ///
    /// This method is primarily intended for CLI contexts where the variant
    /// name does not add value to end users. The returned string matches the
    /// [`std::fmt::Display`] implementation.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

/// Creates an [`Error::Source`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Location of the manifest file that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn source_error(path: &Path, source: std::io::Error) -> Error {
    Error::Source {
        path: path.to_path_buf(),
        source
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn config_constructor_populates_message() {
        let error = Error::config("integration must be one of (license)");
        match error {
            Error::Config {
                ref message
            } => {
                assert_eq!(message, "integration must be one of (license)");
            }
            other => panic!("expected config error, got {other:?}")
        }
    }

    #[test]
    fn missing_field_display_names_the_path() {
        let error = Error::missing_field(".engines.node");
        assert_eq!(
            error.to_string(),
            "manifest does not contain '.engines.node' property"
        );
    }

    #[test]
    fn to_display_string_matches_display() {
        let error = Error::config("display me");
        assert_eq!(error.to_string(), error.to_display_string());
    }

    #[test]
    fn source_error_helper_wraps_path_and_source() {
        let path = std::path::Path::new("/tmp/package.json");
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error = super::source_error(path, io_error);

        match error {
            Error::Source {
                path: ref stored_path,
                ref source
            } => {
                assert_eq!(stored_path, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected source error, got {other:?}")
        }
    }

    #[test]
    fn parse_variant_reports_decode_failures() {
        let invalid = serde_json::from_str::<serde_json::Value>("not-json").unwrap_err();
        let error = Error::Parse {
            source: invalid
        };
        assert!(error.to_string().starts_with("failed to parse manifest:"));
    }
}
