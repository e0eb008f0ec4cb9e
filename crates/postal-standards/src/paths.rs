//! Standards directory resolution.

use std::path::{Path, PathBuf};

/// Environment variable for overriding the standards directory.
pub const STANDARDS_ENV_VAR: &str = "POSTAL_STANDARDS_DIR";

/// The standards directory used when nothing is configured.
pub fn bundled_standards_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../standards")
}

/// Get the standards root directory.
///
/// Resolution order:
/// 1. `POSTAL_STANDARDS_DIR` environment variable, when set and non-empty
/// 2. the bundled `standards/` directory at the workspace root
pub fn standards_root() -> PathBuf {
    resolve_standards_root(None)
}

/// Like [`standards_root`], with an explicitly configured directory taking
/// precedence over the environment.
pub fn resolve_standards_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    match std::env::var_os(STANDARDS_ENV_VAR) {
        Some(root) if !root.is_empty() => PathBuf::from(root),
        _ => bundled_standards_dir(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_dir_wins() {
        let dir = Path::new("/srv/postal");
        assert_eq!(resolve_standards_root(Some(dir)), dir);
    }

    #[test]
    fn test_bundled_dir_holds_manifest() {
        assert!(bundled_standards_dir().join("manifest.toml").is_file());
    }
}
