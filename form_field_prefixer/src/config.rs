//! Rendering conventions for generated identifiers and bindings.
//!
//! The defaults reproduce the conventions of server-rendered forms with Vue
//! bindings: `_` joins a prefix and a field name, `.` joins validation key
//! segments, `${ … }` marks a JavaScript placeholder and bindings use
//! `v-model` or a `:` attribute prefix.
//!
//! Applications that need different conventions load a [`PrefixerConfig`]
//! from layered providers: defaults, then an optional TOML file, then
//! `FORM_FIELD_PREFIXER_*` environment variables.

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::error::{PrefixerError, PrefixerResult};

/// Environment variable prefix consulted by [`PrefixerConfig::figment`].
pub const ENV_PREFIX: &str = "FORM_FIELD_PREFIXER_";

/// Separators, markers and binding attribute names used while rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrefixerConfig {
    /// Joins a prefix with a field name, and array segments of names and IDs.
    pub separator: String,
    /// Joins array segments of validation keys.
    pub validation_separator: String,
    /// Opening marker of a JavaScript placeholder.
    pub dynamic_marker: String,
    /// Closing marker of a JavaScript placeholder.
    pub dynamic_marker_close: String,
    /// Attribute that replaces `value` in binding mode.
    pub binding_attribute: String,
    /// Prefix that turns any other attribute into a bound one.
    pub bound_attribute_prefix: String,
}

impl Default for PrefixerConfig {
    fn default() -> Self {
        Self {
            separator: String::from("_"),
            validation_separator: String::from("."),
            dynamic_marker: String::from("${"),
            dynamic_marker_close: String::from("}"),
            binding_attribute: String::from("v-model"),
            bound_attribute_prefix: String::from(":"),
        }
    }
}

impl PrefixerConfig {
    /// Layer the default configuration, the TOML file at `path` (when given
    /// and present) and `FORM_FIELD_PREFIXER_*` environment variables.
    #[must_use]
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut layered = Figment::from(Serialized::defaults(Self::default()));
        if let Some(file) = path {
            layered = layered.merge(Toml::file(file));
        }
        layered.merge(Env::prefixed(ENV_PREFIX))
    }

    /// Load configuration from the layers described in [`Self::figment`].
    ///
    /// # Errors
    ///
    /// Returns [`PrefixerError::Config`] when extraction fails and
    /// [`PrefixerError::InvalidConfig`] when a required value is empty.
    pub fn load(path: Option<&Path>) -> PrefixerResult<Self> {
        Self::load_from(&Self::figment(path))
    }

    /// Extract and validate configuration from an arbitrary `figment`.
    ///
    /// # Errors
    ///
    /// Returns [`PrefixerError::Config`] when extraction fails and
    /// [`PrefixerError::InvalidConfig`] when a required value is empty.
    pub fn load_from(figment: &Figment) -> PrefixerResult<Self> {
        let config: Self = figment.extract()?;
        config.validate()?;
        tracing::debug!(
            separator = %config.separator,
            validation_separator = %config.validation_separator,
            binding_attribute = %config.binding_attribute,
            "loaded form field prefixer configuration"
        );
        Ok(config)
    }

    /// Check that every separator and binding name is non-empty.
    ///
    /// An empty `dynamic_marker` is allowed and disables placeholder
    /// detection; an empty `bound_attribute_prefix` is allowed too.
    ///
    /// # Errors
    ///
    /// Returns [`PrefixerError::InvalidConfig`] naming the first empty value.
    pub fn validate(&self) -> PrefixerResult<()> {
        let required = [
            ("separator", &self.separator),
            ("validation_separator", &self.validation_separator),
            ("binding_attribute", &self.binding_attribute),
        ];
        required
            .into_iter()
            .find(|(_, value)| value.is_empty())
            .map_or(Ok(()), |(key, _)| Err(PrefixerError::invalid(key, "must not be empty")))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::PrefixerConfig;
    use crate::PrefixerError;

    #[test]
    fn defaults_match_vue_conventions() {
        let config = PrefixerConfig::default();
        assert_eq!(config.separator, "_");
        assert_eq!(config.validation_separator, ".");
        assert_eq!(config.dynamic_marker, "${");
        assert_eq!(config.dynamic_marker_close, "}");
        assert_eq!(config.binding_attribute, "v-model");
        assert_eq!(config.bound_attribute_prefix, ":");
        assert!(config.validate().is_ok());
    }

    #[rstest]
    #[case::separator(PrefixerConfig { separator: String::new(), ..PrefixerConfig::default() }, "separator")]
    #[case::validation(PrefixerConfig { validation_separator: String::new(), ..PrefixerConfig::default() }, "validation_separator")]
    #[case::binding(PrefixerConfig { binding_attribute: String::new(), ..PrefixerConfig::default() }, "binding_attribute")]
    fn rejects_empty_values(#[case] config: PrefixerConfig, #[case] expected: &str) {
        match config.validate() {
            Err(PrefixerError::InvalidConfig { key, .. }) => assert_eq!(key, expected),
            other => panic!("expected InvalidConfig for {expected}, got {other:?}"),
        }
    }

    #[test]
    fn empty_marker_is_accepted() {
        let config = PrefixerConfig {
            dynamic_marker: String::new(),
            ..PrefixerConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
