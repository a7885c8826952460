// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Badge integrations mapping manifest fields to badge payloads.
//!
//! Every integration follows the same three-step protocol: fetch the
//! manifest through an injected [`ManifestSource`], validate that the field
//! it requires is present, and render the badge payload. Fetch failures
//! always surface before validation failures, and a validated manifest
//! cannot fail to format.

use serde::Serialize;

use crate::{
    error::Error,
    formatter::{Color, ensure_v_prefix, version_color},
    manifest::{Manifest, ManifestSource}
};

/// Dotted path required by the license integration.
const LICENSE_PATH: &str = ".license";
/// Dotted path required by the version integration.
const VERSION_PATH: &str = ".version";
/// Dotted path required by the node-version integration.
const NODE_PATH: &str = ".engines.node";

/// Badge payload consumed by the badge-rendering host.
///
/// The wire shape is `{"message": ..., "messageColor": ...}`.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BadgePayload {
    /// Text displayed on the message half of the badge.
    pub message:       String,
    /// Display color applied to the message half.
    pub message_color: Color
}

/// Shared contract implemented by every badge integration.
///
/// Implementations are stateless unit structs. Selection happens through
/// [`resolve_integration`](crate::resolve_integration); rendering is a
/// single synchronous pass with no retries and no recovery.
pub trait Integration: std::fmt::Debug {
    /// Returns the fixed badge label for this integration.
    fn label(&self) -> &'static str;

    /// Asserts that the manifest carries the field this integration needs.
    ///
    /// Returns the same manifest on success so callers can chain into
    /// formatting.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`](Error::MissingField) naming the
    /// required dotted path when the field is absent or empty.
    fn validate<'manifest>(
        &self,
        manifest: &'manifest Manifest
    ) -> Result<&'manifest Manifest, Error>;

    /// Fetches the manifest, validates it, and produces the badge payload.
    ///
    /// # Errors
    ///
    /// Propagates fetch and validation errors unmodified. Formatting adds no
    /// failure modes of its own.
    fn render(&self, source: &dyn ManifestSource) -> Result<BadgePayload, Error>;
}

/// Integration exposing the manifest license as a badge.
#[derive(Debug, Clone, Copy, Default)]
pub struct License;

impl Integration for License {
    fn label(&self) -> &'static str {
        "license"
    }

    fn validate<'manifest>(
        &self,
        manifest: &'manifest Manifest
    ) -> Result<&'manifest Manifest, Error> {
        if manifest.license().is_some() {
            Ok(manifest)
        } else {
            Err(Error::missing_field(LICENSE_PATH))
        }
    }

    fn render(&self, source: &dyn ManifestSource) -> Result<BadgePayload, Error> {
        let manifest = source.fetch()?;
        let manifest = self.validate(&manifest)?;
        let license = manifest
            .license()
            .ok_or_else(|| Error::missing_field(LICENSE_PATH))?;

        Ok(BadgePayload {
            message:       license.to_owned(),
            message_color: Color::Blue
        })
    }
}

/// Integration exposing the manifest version as a badge.
///
/// The message carries a single leading `v` and the color reflects semver
/// stability, see [`version_color`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Version;

impl Integration for Version {
    fn label(&self) -> &'static str {
        "version"
    }

    fn validate<'manifest>(
        &self,
        manifest: &'manifest Manifest
    ) -> Result<&'manifest Manifest, Error> {
        if manifest.version().is_some() {
            Ok(manifest)
        } else {
            Err(Error::missing_field(VERSION_PATH))
        }
    }

    fn render(&self, source: &dyn ManifestSource) -> Result<BadgePayload, Error> {
        let manifest = source.fetch()?;
        let manifest = self.validate(&manifest)?;
        let version = manifest
            .version()
            .ok_or_else(|| Error::missing_field(VERSION_PATH))?;

        Ok(BadgePayload {
            message:       ensure_v_prefix(version).into_owned(),
            message_color: version_color(version)
        })
    }
}

/// Integration exposing the supported Node.js range as a badge.
///
/// Whitespace inside the range expression is stripped so `>= 14.0.0 < 16`
/// renders as `>=14.0.0<16`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeVersion;

impl Integration for NodeVersion {
    fn label(&self) -> &'static str {
        "node"
    }

    fn validate<'manifest>(
        &self,
        manifest: &'manifest Manifest
    ) -> Result<&'manifest Manifest, Error> {
        if manifest.node_range().is_some() {
            Ok(manifest)
        } else {
            Err(Error::missing_field(NODE_PATH))
        }
    }

    fn render(&self, source: &dyn ManifestSource) -> Result<BadgePayload, Error> {
        let manifest = source.fetch()?;
        let manifest = self.validate(&manifest)?;
        let range = manifest
            .node_range()
            .ok_or_else(|| Error::missing_field(NODE_PATH))?;

        Ok(BadgePayload {
            message:       range.chars().filter(|ch| !ch.is_whitespace()).collect(),
            message_color: Color::Blue
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{BadgePayload, Integration, License, NodeVersion, Version};
    use crate::{
        error::Error,
        formatter::Color,
        manifest::{Manifest, ManifestSource, parse_manifest}
    };

    struct StaticSource(&'static str);

    impl ManifestSource for StaticSource {
        fn fetch(&self) -> Result<Manifest, Error> {
            parse_manifest(self.0)
        }
    }

    struct FailingSource;

    impl ManifestSource for FailingSource {
        fn fetch(&self) -> Result<Manifest, Error> {
            Err(crate::error::source_error(
                std::path::Path::new("package.json"),
                std::io::Error::new(std::io::ErrorKind::NotFound, "missing")
            ))
        }
    }

    fn missing_field_path(error: Error) -> String {
        match error {
            Error::MissingField {
                path
            } => path,
            other => panic!("expected missing field error, got {other:?}")
        }
    }

    #[test]
    fn labels_are_fixed() {
        assert_eq!(License.label(), "license");
        assert_eq!(Version.label(), "version");
        assert_eq!(NodeVersion.label(), "node");
    }

    #[test]
    fn license_renders_raw_value_in_blue() {
        let payload = License
            .render(&StaticSource(r#"{"license": "MIT"}"#))
            .expect("expected render to succeed");

        assert_eq!(payload, BadgePayload {
            message:       "MIT".to_owned(),
            message_color: Color::Blue
        });
    }

    #[test]
    fn version_renders_prefixed_stable_value() {
        let payload = Version
            .render(&StaticSource(r#"{"version": "1.0.0"}"#))
            .expect("expected render to succeed");

        assert_eq!(payload.message, "v1.0.0");
        assert_eq!(payload.message_color, Color::Blue);
    }

    #[test]
    fn version_keeps_existing_prefix_and_flags_prereleases() {
        let payload = Version
            .render(&StaticSource(r#"{"version": "v2.0.0-rc.1"}"#))
            .expect("expected render to succeed");

        assert_eq!(payload.message, "v2.0.0-rc.1");
        assert_eq!(payload.message_color, Color::Orange);
    }

    #[test]
    fn node_version_strips_whitespace() {
        let payload = NodeVersion
            .render(&StaticSource(r#"{"engines": {"node": ">= 14.0.0 < 16"}}"#))
            .expect("expected render to succeed");

        assert_eq!(payload.message, ">=14.0.0<16");
        assert_eq!(payload.message_color, Color::Blue);
    }

    #[test]
    fn each_variant_reports_its_required_path() {
        let empty = StaticSource("{}");

        let error = License.render(&empty).expect_err("expected failure");
        assert_eq!(missing_field_path(error), ".license");

        let error = Version.render(&empty).expect_err("expected failure");
        assert_eq!(missing_field_path(error), ".version");

        let error = NodeVersion.render(&empty).expect_err("expected failure");
        assert_eq!(missing_field_path(error), ".engines.node");
    }

    #[test]
    fn fetch_failures_surface_before_validation() {
        for integration in [
            &License as &dyn Integration,
            &Version as &dyn Integration,
            &NodeVersion as &dyn Integration
        ] {
            let error = integration
                .render(&FailingSource)
                .expect_err("expected fetch failure");
            assert!(
                matches!(error, Error::Source { .. }),
                "expected source error, got {error:?}"
            );
        }
    }

    #[test]
    fn validate_returns_the_document_unchanged() {
        let manifest = parse_manifest(r#"{"version": "0.1.0", "license": "ISC"}"#)
            .expect("expected manifest to parse");

        let validated = Version
            .validate(&manifest)
            .expect("expected validation to pass");
        assert_eq!(validated.version(), Some("0.1.0"));
        assert_eq!(validated.license(), Some("ISC"));
    }

    #[test]
    fn empty_field_fails_validation() {
        let manifest =
            parse_manifest(r#"{"license": ""}"#).expect("expected manifest to parse");

        let error = License
            .validate(&manifest)
            .expect_err("expected validation failure");
        assert_eq!(missing_field_path(error), ".license");
    }

    #[test]
    fn payload_serializes_camel_case() {
        let payload = BadgePayload {
            message:       "v1.0.0".to_owned(),
            message_color: Color::Blue
        };

        let encoded = serde_json::to_string(&payload).expect("expected payload to serialize");
        assert_eq!(encoded, r#"{"message":"v1.0.0","messageColor":"blue"}"#);
    }
}
