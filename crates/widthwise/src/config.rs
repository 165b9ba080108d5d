//! Responsive token configuration.
//!
//! Breakpoints and media queries are usually declared once per application,
//! under a `tokens` section:
//!
//! ```yaml
//! tokens:
//!   breakpoints:
//!     base: 0
//!     sm: 480
//!     md: 768
//!   mediaQueries:
//!     base: "@media screen and (min-width: 0)"
//!     sm: "@media screen and (min-width: 480px)"
//!     md: "@media screen and (min-width: 768px)"
//! ```
//!
//! Mapping order in the document is breakpoint order. Loaders validate that
//! both sets are strictly ascending.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::breakpoint::{BreakpointError, Breakpoints, MediaQueries};

/// Error loading a [`ResponsiveConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unsupported config format '{}': expected .yaml, .yml or .json", .path.display())]
    UnsupportedFormat { path: PathBuf },
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Breakpoints(#[from] BreakpointError),
}

/// Breakpoint tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tokens {
    #[serde(default)]
    pub breakpoints: Breakpoints,
    #[serde(default)]
    pub media_queries: MediaQueries,
}

impl Default for Tokens {
    /// The conventional `base`/`sm`/`md`/`lg`/`xl` scale.
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::new()
                .add("base", 0)
                .add("sm", 480)
                .add("md", 768)
                .add("lg", 992)
                .add("xl", 1280),
            media_queries: MediaQueries::new()
                .add("base", "@media screen and (min-width: 0)")
                .add("sm", "@media screen and (min-width: 480px)")
                .add("md", "@media screen and (min-width: 768px)")
                .add("lg", "@media screen and (min-width: 992px)")
                .add("xl", "@media screen and (min-width: 1280px)"),
        }
    }
}

/// Application-wide responsive configuration.
///
/// A document without a `tokens` section gets the default scale; a `tokens`
/// section replaces it entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsiveConfig {
    #[serde(default)]
    pub tokens: Tokens,
}

impl ResponsiveConfig {
    /// Parses and validates a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a config file, choosing the format from its extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let is_yaml = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => true,
            Some("json") => false,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        debug!(path = %path.display(), "loading responsive config");
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        if is_yaml {
            Self::from_yaml_str(&content)
        } else {
            Self::from_json_str(&content)
        }
    }

    /// Checks that breakpoints and media-query thresholds are strictly ascending.
    pub fn validate(&self) -> Result<(), BreakpointError> {
        self.tokens.breakpoints.validate()?;
        self.tokens.media_queries.validate()
    }

    /// Name of the breakpoint active at `width`.
    pub fn breakpoint(&self, width: u32) -> Option<&str> {
        self.tokens.breakpoints.resolve(width)
    }

    /// Media-query threshold active at `width`.
    pub fn threshold(&self, width: u32) -> Option<u32> {
        self.tokens.media_queries.resolve(width)
    }
}
