// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Registry mapping externally supplied integration keys to implementations.
//!
//! The key set is closed. Unknown keys are rejected before any manifest I/O
//! happens, and the rejection message enumerates every accepted key so the
//! host configuration can be corrected in one round trip.

use crate::{
    error::Error,
    integration::{Integration, License, NodeVersion, Version}
};

/// Accepted values for the `integration` configuration input.
pub const VALID_INTEGRATIONS: &[&str] = &["license", "node-version", "version"];

/// Resolves an integration key to its implementation.
///
/// # Errors
///
/// Returns [`Error::Config`](Error::Config) listing the accepted keys when
/// `key` is not one of [`VALID_INTEGRATIONS`].
///
/// # Examples
///
/// ```
/// use manifest_badges::{Integration, resolve_integration};
///
/// let integration = resolve_integration("version")?;
/// assert_eq!(integration.label(), "version");
/// # Ok::<(), manifest_badges::Error>(())
/// ```
pub fn resolve_integration(key: &str) -> Result<Box<dyn Integration>, Error> {
    tracing::debug!(key, "resolving integration");

    match key {
        "license" => Ok(Box::new(License)),
        "node-version" => Ok(Box::new(NodeVersion)),
        "version" => Ok(Box::new(Version)),
        other => Err(Error::config(format!(
            "integration must be one of ({}), got '{other}'",
            VALID_INTEGRATIONS.join(", ")
        )))
    }
}
