//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a wikisect.toml, and if present we load settings from there.
//! This provides the ignored section titles (so other locales can supply their own) along with
//! the default article language and HTTP client settings.

use crate::prune::{IgnoreSet, DEFAULT_IGNORE_SECTIONS};
use facet::Facet;
use std::fs;
use std::path::Path;

/// File looked up in the working directory when no path is given.
pub const CONFIG_FILE: &str = "wikisect.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from wikisect.toml or falling back to defaults.
pub struct Config {
    #[facet(default = default_ignore_sections())]
    /// Section titles pruned from every article, matched exactly.
    pub ignore_sections: Vec<String>,
    #[facet(default = "en".to_string())]
    /// Wikipedia language edition used when a title is given without a URL.
    pub lang: String,
    #[facet(default = default_user_agent())]
    /// User agent sent to the MediaWiki API.
    pub user_agent: String,
    #[facet(default = 10)]
    /// Request timeout for API calls, in seconds.
    pub timeout_secs: u64,
}

fn default_ignore_sections() -> Vec<String> {
    DEFAULT_IGNORE_SECTIONS
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn default_user_agent() -> String {
    concat!("wikisect/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignore_sections: default_ignore_sections(),
            lang: "en".to_string(),
            user_agent: default_user_agent(),
            timeout_secs: 10,
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from wikisect.toml if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from the given file, falling back to defaults.
    ///
    /// A missing file is silent; a file that fails to parse is reported and ignored.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };
        match facet_toml::from_str::<Self>(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), "ignoring invalid config: {e}");
                Self::default()
            }
        }
    }

    #[must_use]
    /// Ignore set built from the configured section titles.
    pub fn ignore_set(&self) -> IgnoreSet {
        IgnoreSet::new(self.ignore_sections.iter().cloned())
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
