// Gitfolio platform paths for macOS
// Config: ~/Library/Application Support/Gitfolio

use std::env;
use std::path::PathBuf;

/// Returns the home directory on macOS.
fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the configuration directory for Gitfolio on macOS.
/// `~/Library/Application Support/Gitfolio`
pub fn get_config_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("Gitfolio")
}
