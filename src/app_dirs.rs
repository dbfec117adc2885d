//! Application directory paths.
//!
//! Uses the [`dirs`] crate for platform-appropriate resolution. On Linux the
//! config directory honours `XDG_CONFIG_HOME`. Set `CYBERONTO_CONFIG_DIR` to
//! override it.

use std::path::PathBuf;

/// Application config directory, `dirs::config_dir()/cyberonto/` by default.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Some(override_dir) = std::env::var_os("CYBERONTO_CONFIG_DIR") {
        return PathBuf::from(override_dir);
    }
    dirs::config_dir()
        .map(|d| d.join("cyberonto"))
        .unwrap_or_else(|| PathBuf::from("/tmp/cyberonto-config"))
}
