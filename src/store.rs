//! State store initialization probe

use std::path::Path;

use tracing::debug;

/// Subpath inside the data directory whose existence means "bootstrapped".
///
/// The node binary creates it as the final step of a successful bootstrap,
/// so a bootstrap interrupted mid-way leaves the store looking uninitialized
/// and safe to retry. Nodestrap never creates or removes this path itself.
pub const MARKER_SUBPATH: &str = "db";

/// Check whether the state store under `data_dir` has been initialized
///
/// Pure function of the filesystem at the moment of the call: true iff the
/// marker subpath exists, false otherwise, including when `data_dir` itself
/// does not exist yet. No checksums, no version files; there is no migration
/// mechanism this probe would need to feed.
pub fn is_initialized(data_dir: &Path) -> bool {
    let marker = data_dir.join(MARKER_SUBPATH);
    let initialized = marker.exists();
    debug!(marker = %marker.display(), initialized, "state store probe");
    initialized
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_data_dir_is_uninitialized() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join("does-not-exist");

        assert!(!is_initialized(&data_dir));
    }

    #[test]
    fn test_empty_data_dir_is_uninitialized() {
        let temp_dir = TempDir::new().unwrap();

        assert!(!is_initialized(temp_dir.path()));
    }

    #[test]
    fn test_marker_dir_means_initialized() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join(MARKER_SUBPATH)).unwrap();

        assert!(is_initialized(temp_dir.path()));
    }

    #[test]
    fn test_marker_file_also_counts() {
        // Existence is the signal, not the node kind
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(MARKER_SUBPATH), b"").unwrap();

        assert!(is_initialized(temp_dir.path()));
    }

    #[test]
    fn test_other_content_is_ignored() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("accounts")).unwrap();
        fs::write(temp_dir.path().join("node.log"), b"x").unwrap();

        assert!(!is_initialized(temp_dir.path()));
    }
}
