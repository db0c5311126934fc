//! Configuration: defaults, the optional TOML file, and the XDG paths
//! where the file and logs live.

use std::env;
use std::path::{Path, PathBuf};

use crate::state::SortOrder;

/// Runtime configuration after merging the config file over the defaults.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the news search service.
    pub api_url: String,
    /// Directory exported spreadsheets are written into.
    pub export_dir: PathBuf,
    /// Keyword prefilled into the query form at startup.
    pub default_keyword: String,
    /// Combination mode prefilled at startup, "AND" or "OR".
    pub default_logic: String,
    /// Length in days of the prefilled date window ending today.
    pub default_days_back: i64,
    /// Initial ordering of the results pane.
    pub sort_order: SortOrder,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://127.0.0.1:5000".into(),
            export_dir: default_export_dir(),
            default_keyword: "台灣".into(),
            default_logic: "OR".into(),
            default_days_back: 7,
            sort_order: SortOrder::default(),
        }
    }
}

/// On-disk shape of `newsdeck.toml`. Every field is optional so a partial
/// file merges over the defaults.
#[derive(Debug, Default, serde::Deserialize)]
struct ConfigFile {
    api_url: Option<String>,
    export_dir: Option<PathBuf>,
    default_keyword: Option<String>,
    default_logic: Option<String>,
    default_days_back: Option<i64>,
    sort_order: Option<String>,
}

impl Config {
    /// Overlay the values present in a parsed file onto `self`. Invalid
    /// values are logged and skipped rather than failing the load.
    fn merged(mut self, file: ConfigFile) -> Self {
        if let Some(v) = file.api_url {
            self.api_url = v.trim_end_matches('/').to_string();
        }
        if let Some(v) = file.export_dir {
            self.export_dir = v;
        }
        if let Some(v) = file.default_keyword {
            self.default_keyword = v;
        }
        if let Some(v) = file.default_logic {
            let upper = v.trim().to_ascii_uppercase();
            if upper == "AND" || upper == "OR" {
                self.default_logic = upper;
            } else {
                tracing::warn!(value = %v, "ignoring unknown default_logic");
            }
        }
        if let Some(v) = file.default_days_back {
            self.default_days_back = v.max(0);
        }
        if let Some(v) = file.sort_order {
            match SortOrder::from_config_key(&v) {
                Some(order) => self.sort_order = order,
                None => tracing::warn!(value = %v, "ignoring unknown sort_order"),
            }
        }
        self
    }
}

/// What: Load the configuration, tolerating a missing or broken file.
///
/// Inputs:
/// - `path`: Explicit file path from the command line, or `None` for the
///   default location under the config directory
///
/// Output:
/// - Defaults merged with whatever the file provided. A missing file is
///   normal; a malformed one logs a warning and yields plain defaults.
#[must_use]
pub fn load(path: Option<&Path>) -> Config {
    let path = path.map_or_else(config_path, Path::to_path_buf);
    let Ok(text) = std::fs::read_to_string(&path) else {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Config::default();
    };
    match toml::from_str::<ConfigFile>(&text) {
        Ok(file) => Config::default().merged(file),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "malformed config file, using defaults");
            Config::default()
        }
    }
}

/// Default configuration file path: `<config_dir>/newsdeck.toml`.
#[must_use]
pub fn config_path() -> PathBuf {
    config_dir().join("newsdeck.toml")
}

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// XDG config directory for newsdeck (ensured to exist).
#[must_use]
pub fn config_dir() -> PathBuf {
    let base = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]);
    let dir = base.join("newsdeck");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: `<config_dir>/logs` (ensured to exist).
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Where exports land when the config file does not say otherwise:
/// `$HOME/Downloads`, or the current directory without a HOME.
fn default_export_dir() -> PathBuf {
    env::var("HOME").map_or_else(
        |_| PathBuf::from("."),
        |home| Path::new(&home).join("Downloads"),
    )
}
