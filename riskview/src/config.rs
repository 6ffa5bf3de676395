//! User settings loaded from `riskview.toml`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Configuration filename searched for in the working directory and its
/// parents.
pub const CONFIG_FILENAME: &str = "riskview.toml";

/// Locale used when none is configured (the catalog's fallback table).
pub const DEFAULT_LOCALE: &str = "en-GB";

/// Default trend-graph window: show only the latest scan until the user
/// widens the interval.
pub const DEFAULT_GRAPH_WINDOW: usize = 1;

/// Top-level configuration struct.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    /// The main configuration section.
    #[serde(default)]
    pub riskview: RiskviewConfig,
}

/// Configuration options for the reporting core.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct RiskviewConfig {
    /// Locale tag for metadata resolution, e.g. "en-GB" or "nl".
    pub locale: Option<String>,
    /// Number of scans shown in the trend graph.
    pub graph_window: Option<usize>,
}

impl Config {
    /// Loads configuration from the current directory, traversing up.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from_path(Path::new("."))
    }

    /// Loads configuration starting from a specific path and traversing up.
    ///
    /// A missing or unparsable file silently yields the defaults.
    #[must_use]
    pub fn load_from_path(path: &Path) -> Self {
        let mut current = path.to_path_buf();
        if current.is_file() {
            current.pop();
        }

        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                if let Ok(content) = fs::read_to_string(&candidate) {
                    if let Ok(config) = toml::from_str::<Config>(&content) {
                        return config;
                    }
                }
            }
            if !current.pop() {
                break;
            }
        }

        Config::default()
    }

    /// Effective locale.
    #[must_use]
    pub fn locale(&self) -> &str {
        self.riskview.locale.as_deref().unwrap_or(DEFAULT_LOCALE)
    }

    /// Effective trend-graph window.
    #[must_use]
    pub fn graph_window(&self) -> usize {
        self.riskview.graph_window.unwrap_or(DEFAULT_GRAPH_WINDOW)
    }
}
