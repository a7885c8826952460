//! Manifest document types and the source abstraction used to obtain them.
//!
//! The types in this module mirror the subset of `package.json` consumed by
//! the badge integrations. Unknown fields are ignored so arbitrary real-world
//! manifests deserialize without friction. Field accessors treat empty
//! strings as absent, matching the truthiness semantics badge consumers
//! expect from npm metadata.

use std::{
    fs,
    path::{Path, PathBuf}
};

use serde::Deserialize;

use crate::error::{self, Error};

/// Default manifest location resolved relative to the working directory.
pub const DEFAULT_MANIFEST_PATH: &str = "package.json";

/// Parsed view of a project manifest.
///
/// # Examples
///
/// ```
/// use manifest_badges::parse_manifest;
///
/// let manifest = parse_manifest(r#"{"license": "MIT"}"#).expect("valid manifest");
/// assert_eq!(manifest.license(), Some("MIT"));
/// assert_eq!(manifest.version(), None);
/// ```
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Manifest {
    /// SPDX license expression declared by the project.
    #[serde(default)]
    license: Option<String>,

    /// Project version, expected to be semantic-version-like.
    #[serde(default)]
    version: Option<String>,

    /// Engine version ranges declared by the project.
    #[serde(default)]
    engines: Option<Engines>
}

/// Engine requirements nested under the manifest `engines` key.
#[derive(Debug, Deserialize, Clone, Default)]
struct Engines {
    /// Supported Node.js version range expression.
    #[serde(default)]
    node: Option<String>
}

impl Manifest {
    /// Returns the declared license, treating an empty string as absent.
    pub fn license(&self) -> Option<&str> {
        non_empty(self.license.as_deref())
    }

    /// Returns the declared version, treating an empty string as absent.
    pub fn version(&self) -> Option<&str> {
        non_empty(self.version.as_deref())
    }

    /// Returns the `engines.node` range, treating an empty string as absent.
    pub fn node_range(&self) -> Option<&str> {
        non_empty(
            self.engines
                .as_ref()
                .and_then(|engines| engines.node.as_deref())
        )
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|candidate| !candidate.is_empty())
}

/// Loads a manifest from the provided file path.
///
/// # Errors
///
/// Returns [`Error::Source`](Error::Source) when the file cannot be read and
/// [`Error::Parse`](Error::Parse) when the contents are not valid JSON.
pub fn load_manifest(path: &Path) -> Result<Manifest, Error> {
    let contents = fs::read_to_string(path).map_err(|source| error::source_error(path, source))?;
    parse_manifest(&contents)
}

/// Parses a manifest from the provided JSON document string.
///
/// This function is suitable for unit tests and higher-level callers that
/// already obtained the manifest contents.
///
/// # Errors
///
/// Returns [`Error::Parse`](Error::Parse) when the JSON cannot be decoded
/// into an object.
pub fn parse_manifest(contents: &str) -> Result<Manifest, Error> {
    serde_json::from_str(contents).map_err(|source| Error::Parse {
        source
    })
}

/// Capability for obtaining a fresh manifest document.
///
/// Integrations fetch through this trait instead of a hardcoded file path so
/// tests can inject in-memory manifests while production keeps the default
/// "read from the project root" behaviour via [`FileSource`].
pub trait ManifestSource {
    /// Acquires and parses the manifest document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Source`](Error::Source) or
    /// [`Error::Parse`](Error::Parse) when the document is unavailable or
    /// malformed.
    fn fetch(&self) -> Result<Manifest, Error>;
}

/// Manifest source backed by a file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf
}

impl FileSource {
    /// Creates a source reading from the provided path.
    pub fn new<P>(path: P) -> Self
    where
        P: Into<PathBuf>
    {
        Self {
            path: path.into()
        }
    }

    /// Returns the path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileSource {
    /// Reads `package.json` from the current working directory.
    fn default() -> Self {
        Self::new(DEFAULT_MANIFEST_PATH)
    }
}

impl ManifestSource for FileSource {
    fn fetch(&self) -> Result<Manifest, Error> {
        tracing::debug!(path = %self.path.display(), "reading manifest");
        load_manifest(&self.path)
    }
}
