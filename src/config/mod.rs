//! Tool configuration from `linkfile.toml`.
//!
//! The config file is optional; defaults apply when it is absent.
//!
//! | Section      | Purpose                                |
//! |--------------|----------------------------------------|
//! | `[output]`   | How tags are emitted (separator)       |
//! | `[classify]` | Extension → content kind overrides     |

mod error;

pub use error::ConfigError;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::content::ContentKind;
use crate::log;
use crate::utils::path::file_extension;

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing linkfile.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LinkfileConfig {
    /// Tag emission settings
    pub output: OutputConfig,

    /// Classifier settings
    pub classify: ClassifyConfig,
}

/// `[output]` - how emitted tags are separated.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Emit each tag on its own line. When false, tags of one batch are
    /// concatenated on a single line.
    pub newline: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { newline: true }
    }
}

/// `[classify]` - classifier tuning.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClassifyConfig {
    /// Extension → kind overrides, consulted before the built-in tables.
    pub extensions: BTreeMap<String, ContentKind>,
}

impl ClassifyConfig {
    /// Classify a path, honoring user overrides first.
    pub fn kind_for_path(&self, path: &str) -> ContentKind {
        if let Some(ext) = file_extension(path)
            && let Some(kind) = self.extensions.get(&ext)
        {
            return *kind;
        }
        ContentKind::from_path(path)
    }
}

// ============================================================================
// loading
// ============================================================================

impl LinkfileConfig {
    /// Load configuration, falling back to defaults when the file is
    /// absent.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            log!("warning"; "unknown fields in {}: {}", path.display(), ignored.join(", "));
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Check override table sanity.
    fn validate(&self) -> Result<(), ConfigError> {
        for ext in self.classify.extensions.keys() {
            if ext.is_empty() || ext.contains(['.', '/']) {
                return Err(ConfigError::Validation(format!(
                    "invalid extension override key `{ext}`: use a bare extension like \"scss\""
                )));
            }
        }
        Ok(())
    }
}
