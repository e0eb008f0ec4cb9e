//! `standards/manifest.toml` model.
//!
//! The manifest pins every bundled data file by SHA-256 so that an edited or
//! truncated rule table is rejected at load time instead of silently
//! changing which postal codes pass.

use serde::{Deserialize, Serialize};

/// Schema identifier expected in `[manifest] schema`.
pub const MANIFEST_SCHEMA: &str = "postal-code.standards-manifest";

/// Supported `[manifest] schema_version`.
pub const MANIFEST_SCHEMA_VERSION: u32 = 1;

/// Role of the postal code rule table file.
pub const FORMATS_ROLE: &str = "postal_formats";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub manifest: ManifestHeader,
    #[serde(default)]
    pub notes: Option<ManifestNotes>,
    pub files: Vec<ManifestFile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestHeader {
    pub schema: String,
    pub schema_version: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestNotes {
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestFile {
    pub path: String,
    pub sha256: String,
    pub kind: String,
    pub role: String,
    #[serde(default)]
    pub notes: Option<String>,
}
