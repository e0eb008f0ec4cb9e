#![deny(unsafe_code)]

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use postal_model::RuleTable;
use sha2::Digest;
use tracing::debug;

use crate::error::{Result, StandardsError};
use crate::loaders::load_rule_table;
use crate::manifest::{
    FORMATS_ROLE, MANIFEST_SCHEMA, MANIFEST_SCHEMA_VERSION, Manifest, ManifestFile,
};
use crate::paths::standards_root;

const ALLOWED_KINDS: &[&str] = &["json", "csv"];

/// Load the rule table from the default standards directory.
pub fn load_default_rule_table() -> Result<RuleTable> {
    load_rule_table_from(&standards_root())
}

/// Verify `manifest.toml` in `standards_dir` and load the rule table it pins.
pub fn load_rule_table_from(standards_dir: &Path) -> Result<RuleTable> {
    let manifest = load_manifest(&standards_dir.join("manifest.toml"))?;

    validate_manifest(&manifest)?;

    for file in &manifest.files {
        verify_file(standards_dir, file)?;
    }

    let formats = manifest
        .files
        .iter()
        .find(|f| f.role == FORMATS_ROLE)
        .ok_or_else(|| StandardsError::MissingRole {
            role: FORMATS_ROLE.to_string(),
        })?;

    load_rule_table(&standards_dir.join(&formats.path))
}

pub(crate) fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(sha2::Sha256::digest(bytes))
}

fn load_manifest(path: &Path) -> Result<Manifest> {
    let contents = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
    toml::from_str(&contents).map_err(|e| StandardsError::Toml {
        path: path.to_path_buf(),
        source: e,
    })
}

fn validate_manifest(manifest: &Manifest) -> Result<()> {
    if manifest.manifest.schema != MANIFEST_SCHEMA {
        return Err(StandardsError::InvalidManifest {
            message: format!("unsupported schema: {}", manifest.manifest.schema),
        });
    }
    if manifest.manifest.schema_version != MANIFEST_SCHEMA_VERSION {
        return Err(StandardsError::InvalidManifest {
            message: format!(
                "unsupported schema_version: {}",
                manifest.manifest.schema_version
            ),
        });
    }

    let mut roles: BTreeSet<&str> = BTreeSet::new();
    for file in &manifest.files {
        if !roles.insert(file.role.as_str()) {
            return Err(StandardsError::DuplicateRole {
                role: file.role.clone(),
            });
        }

        if !ALLOWED_KINDS.contains(&file.kind.as_str()) {
            return Err(StandardsError::InvalidManifest {
                message: format!("unsupported kind '{}' for {}", file.kind, file.path),
            });
        }

        validate_sha(&file.sha256, &file.path)?;
        validate_path(&file.path)?;
    }

    if !roles.contains(FORMATS_ROLE) {
        return Err(StandardsError::MissingRole {
            role: FORMATS_ROLE.to_string(),
        });
    }

    Ok(())
}

fn validate_sha(sha: &str, path: &str) -> Result<()> {
    if sha.len() != 64 || !sha.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(StandardsError::InvalidManifest {
            message: format!("sha256 for {path} must be 64 hex characters"),
        });
    }
    Ok(())
}

fn validate_path(raw: &str) -> Result<()> {
    let path = PathBuf::from(raw);
    if path.is_absolute() {
        return Err(StandardsError::InvalidPath {
            path,
            message: "absolute paths are not allowed".to_string(),
        });
    }
    if path
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
    {
        return Err(StandardsError::InvalidPath {
            path,
            message: "path must stay inside the standards directory".to_string(),
        });
    }
    Ok(())
}

fn verify_file(standards_dir: &Path, file: &ManifestFile) -> Result<()> {
    let full_path = standards_dir.join(&file.path);
    let bytes = std::fs::read(&full_path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StandardsError::MissingFile {
                path: full_path.clone(),
            }
        } else {
            StandardsError::io(full_path.clone(), e)
        }
    })?;

    let actual = sha256_hex(&bytes);
    let expected = file.sha256.to_ascii_lowercase();
    if actual != expected {
        return Err(StandardsError::Sha256Mismatch {
            path: full_path,
            expected,
            actual,
        });
    }
    debug!(path = %full_path.display(), role = %file.role, "verified standards file");
    Ok(())
}
