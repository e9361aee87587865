//! Encoder configuration.

use serde::{Deserialize, Serialize};

use crate::directive::FieldDirective;
use crate::error::{ConfigError, DirectiveError};

pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Options for an [`Encoder`](crate::Encoder).
///
/// ```toml
/// max_depth = 32
/// strict_directives = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EncoderConfig {
    /// Maximum record nesting depth. The root record is depth 1.
    pub max_depth: usize,
    /// Reject unrecognized directive kinds and modifiers instead of treating
    /// them as a plain nested record.
    pub strict_directives: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            strict_directives: true,
        }
    }
}

impl EncoderConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|e| ConfigError::Toml(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::Invalid("max_depth must be at least 1".into()));
        }
        Ok(())
    }

    /// Resolves an annotation pair under this config's strictness.
    pub fn parse_directive(
        &self,
        kind_text: &str,
        constr_text: Option<&str>,
    ) -> Result<FieldDirective, DirectiveError> {
        FieldDirective::parse_with(kind_text, constr_text, self.strict_directives)
    }
}
