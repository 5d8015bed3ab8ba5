//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "checklist";
const APPLICATION: &str = "checklist";

/// Log file used when neither `--log-file` nor a cache directory is available.
const FALLBACK_LOG_FILE: &str = "checklist.log";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory for temporary/regenerable data.
///
/// - Linux: `$XDG_CACHE_HOME/checklist` or `~/.cache/checklist`
/// - macOS: `~/Library/Caches/dev.checklist.checklist`
/// - Windows: `C:\Users\<User>\AppData\Local\checklist\checklist\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path of the latest log file, creating its directory when possible.
pub fn log_file() -> PathBuf {
    cache_dir()
        .filter(|dir| fs::create_dir_all(dir).is_ok())
        .map(|dir| dir.join("latest.log"))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_LOG_FILE))
}
