//! Badge payload generation from `package.json` metadata.
//!
//! The library exposes three integrations that map manifest fields into
//! `{message, messageColor}` badge payloads for a GitHub Actions host:
//! `license`, `version`, and `node-version`. Each follows the same fetch →
//! validate → render protocol over an injectable manifest source, and a
//! registry resolves the externally supplied integration key before any I/O
//! happens. All public APIs are documented with invariants, error semantics,
//! and minimal examples.

mod actions;
mod error;
mod formatter;
mod integration;
mod manifest;
mod registry;

pub use actions::issue_error;
pub use error::{Error, source_error};
pub use formatter::{Color, ensure_v_prefix, version_color};
pub use integration::{BadgePayload, Integration, License, NodeVersion, Version};
pub use manifest::{
    DEFAULT_MANIFEST_PATH, FileSource, Manifest, ManifestSource, load_manifest, parse_manifest
};
pub use registry::{VALID_INTEGRATIONS, resolve_integration};
