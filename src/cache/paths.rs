// Cache path utilities.
// Resolves where the launch cache document lives on disk.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// File name of the launch cache document.
pub const LAUNCHES_FILE: &str = "launches.json";

/// Get the base cache directory (~/.cache/launchpad on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "launchpad").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to the launch cache document inside `dir`.
pub fn launches_path(dir: &Path) -> PathBuf {
    dir.join(LAUNCHES_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_paths() {
        let dir = Path::new("/var/cache/launchpad");
        let path = launches_path(dir);
        assert_eq!(path, PathBuf::from("/var/cache/launchpad/launches.json"));
    }

    #[test]
    fn test_default_cache_dir_is_app_scoped() {
        // Not every CI environment has a home directory.
        if let Some(dir) = cache_dir() {
            assert!(dir.to_string_lossy().contains("launchpad"));
        }
    }
}
