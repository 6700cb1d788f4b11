// Gitfolio platform paths for Linux
// Config: ~/.config/gitfolio

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for Gitfolio on Linux.
/// Uses `$XDG_CONFIG_HOME/gitfolio` if set, otherwise `~/.config/gitfolio`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("gitfolio")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("gitfolio")
    }
}
