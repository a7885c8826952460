// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Formatting utilities for version badges.
//!
//! Both helpers are total functions: any string input produces a usable
//! display value, so badge rendering never fails on malformed metadata.

use std::borrow::Cow;

use semver::Version;
use serde::Serialize;

/// Display color tokens understood by the badge-rendering host.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Neutral informational color, also used for stable versions.
    Blue,
    /// Warning color used for prerelease and unparseable versions.
    Orange
}

impl Color {
    /// Returns the lowercase token emitted on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Orange => "orange"
        }
    }
}

/// Prefixes a version string with `v` unless it already carries one.
///
/// The function is idempotent and total: applying it twice yields the same
/// value, and inputs that are not version-like are passed through unmodified
/// aside from the prefix. Already-prefixed input is returned borrowed.
///
/// # Examples
///
/// ```
/// use manifest_badges::ensure_v_prefix;
///
/// assert_eq!(ensure_v_prefix("1.2.3"), "v1.2.3");
/// assert_eq!(ensure_v_prefix("v1.2.3"), "v1.2.3");
/// ```
pub fn ensure_v_prefix(version: &str) -> Cow<'_, str> {
    if version.starts_with('v') {
        Cow::Borrowed(version)
    } else {
        let mut prefixed = String::with_capacity(version.len() + 1);
        prefixed.push('v');
        prefixed.push_str(version);
        Cow::Owned(prefixed)
    }
}

/// Classifies a version string into a display color.
///
/// Versions without a prerelease component are considered stable and map to
/// [`Color::Blue`]. A prerelease component maps to [`Color::Orange`]. Build
/// metadata alone does not affect stability. Input that does not parse as a
/// semantic version is classified as [`Color::Orange`]; treating unparseable
/// versions as unstable is the designed policy, not an error path.
///
/// # Examples
///
/// ```
/// use manifest_badges::{Color, version_color};
///
/// assert_eq!(version_color("1.2.3"), Color::Blue);
/// assert_eq!(version_color("1.2.3-alpha.1"), Color::Orange);
/// assert_eq!(version_color("2.0.0+build5"), Color::Blue);
/// ```
pub fn version_color(version: &str) -> Color {
    match Version::parse(version) {
        Ok(parsed) if parsed.pre.is_empty() => Color::Blue,
        _ => Color::Orange
    }
}
