// Gitfolio platform paths for Windows
// Config: %APPDATA%/Gitfolio

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for Gitfolio on Windows.
/// `%APPDATA%/Gitfolio`, falling back to `C:\Temp\Gitfolio` if unset.
pub fn get_config_dir() -> PathBuf {
    match env::var("APPDATA") {
        Ok(appdata) => PathBuf::from(appdata).join("Gitfolio"),
        Err(_) => PathBuf::from("C:\\Temp").join("Gitfolio"),
    }
}
