//! Path handling for the Zellij sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`, so user
//! paths such as `~/shows.json` from the plugin configuration need rewriting
//! before they can be opened.

use std::path::PathBuf;

/// Sandbox mount point of the host filesystem.
const HOST_ROOT: &str = "/host";

/// Returns the plugin data directory, where trace files are written.
///
/// # Examples
///
/// ```
/// use flexchill::infrastructure::get_data_dir;
///
/// let data_dir = get_data_dir();
/// assert_eq!(data_dir.to_str().unwrap(), "/host/.local/share/zellij/flexchill");
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT)
        .join(".local/share/zellij")
        .join("flexchill")
}

/// Rewrites a leading `~` to the sandbox host root.
///
/// # Examples
///
/// ```
/// use flexchill::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/shows.json"), "/host/shows.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/data/shows.json"), "/data/shows.json");
/// assert_eq!(expand_tilde("~other/shows.json"), "~other/shows.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_ROOT.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_ROOT}{rest}"),
        _ => path.to_string(),
    }
}
