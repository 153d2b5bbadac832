//! The [`FormFieldPrefixer`] builder.
//!
//! A prefixer carries three pieces of configuration: an optional prefix, an
//! optional array key and a multi-dimensional flag. Every configuration
//! method consumes the prefixer and returns the updated value, so a
//! configured prefixer can be cloned and shared freely between templates.

mod identifier;
mod render;

use std::fmt;
use std::sync::Arc;

use crate::config::PrefixerConfig;
use crate::key::Key;
use crate::old_input::OldInput;

/// How form fields are grouped into arrays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum ArrayKey {
    /// Fields are not grouped.
    #[default]
    None,
    /// The field name of each call is used as the array key.
    FieldName,
    /// A fixed or dynamic array key.
    Key(Key),
}

/// Generates consistent form field names, IDs, label targets and
/// validation keys, and repopulates fields from old input.
///
/// # Examples
///
/// ```rust
/// use form_field_prefixer::FormFieldPrefixer;
///
/// let prefixer = FormFieldPrefixer::make("prefix").as_multi_dimensional_array(Some("arrayKey"));
///
/// assert_eq!(prefixer.name("abc"), "prefix[arrayKey][abc]");
/// assert_eq!(prefixer.id("abc"), "prefix_arrayKey_abc");
/// assert_eq!(prefixer.validation_key("abc"), "prefix.arrayKey.abc");
/// assert_eq!(prefixer.name_attribute("abc").to_string(), r#"name="prefix[arrayKey][abc]""#);
/// ```
#[derive(Clone)]
pub struct FormFieldPrefixer {
    prefix: Option<Key>,
    array_key: ArrayKey,
    multi_dimensional: bool,
    config: Arc<PrefixerConfig>,
    old_input: Option<Arc<dyn OldInput>>,
}

impl Default for FormFieldPrefixer {
    fn default() -> Self {
        Self::new()
    }
}

impl FormFieldPrefixer {
    /// Create a prefixer without prefix or array key, using the default
    /// [`PrefixerConfig`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(PrefixerConfig::default())
    }

    /// Create a prefixer that renders with `config`.
    #[must_use]
    pub fn with_config(config: PrefixerConfig) -> Self {
        Self {
            prefix: None,
            array_key: ArrayKey::None,
            multi_dimensional: false,
            config: Arc::new(config),
            old_input: None,
        }
    }

    /// Create a prefixer with `prefix`; an empty prefix means no prefix.
    #[must_use]
    pub fn make(prefix: &str) -> Self {
        Self::new().with_prefix(prefix)
    }

    /// Set or replace the prefix. An empty prefix removes it.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        let text: String = prefix.into();
        self.prefix = (!text.is_empty()).then(|| self.classify(text));
        self
    }

    /// Remove the prefix.
    #[must_use]
    pub fn without_prefix(mut self) -> Self {
        self.prefix = None;
        self
    }

    /// Group fields as a flat array under `key`.
    ///
    /// With `None` the field name of each call becomes the array key under
    /// the prefix, so field `abc` is named `prefix[abc]`. Without a prefix
    /// the field name is both base and key: `abc[abc]`.
    #[must_use]
    pub fn as_array(self, key: Option<&str>) -> Self {
        self.as_array_with(key, false)
    }

    /// Group fields as an array under `key`, optionally nesting the field
    /// name as a second array level.
    ///
    /// The second level only applies when a prefix is set; without one the
    /// fields fall back to a flat array.
    #[must_use]
    pub fn as_array_with(mut self, key: Option<&str>, multi_dimensional: bool) -> Self {
        self.array_key =
            key.map_or(ArrayKey::FieldName, |text| ArrayKey::Key(self.classify(text)));
        self.multi_dimensional = multi_dimensional;
        self
    }

    /// Group fields as a multi-dimensional array: `prefix[key][field]`.
    #[must_use]
    pub fn as_multi_dimensional_array(self, key: Option<&str>) -> Self {
        self.as_array_with(key, true)
    }

    /// Use `source` to look up old input for [`value`](Self::value) and
    /// [`selected`](Self::selected).
    #[must_use]
    pub fn with_old_input(self, source: impl OldInput + 'static) -> Self {
        let shared: Arc<dyn OldInput> = Arc::new(source);
        self.with_shared_old_input(shared)
    }

    /// Share an already wrapped old input source.
    #[must_use]
    pub fn with_shared_old_input(mut self, source: Arc<dyn OldInput>) -> Self {
        self.old_input = Some(source);
        self
    }

    /// Whether a non-empty prefix is set.
    #[must_use]
    pub const fn has_prefix(&self) -> bool {
        self.prefix.is_some()
    }

    /// Whether fields are grouped as an array.
    #[must_use]
    pub const fn is_array(&self) -> bool {
        !matches!(self.array_key, ArrayKey::None)
    }

    /// Whether the multi-dimensional flag is set.
    ///
    /// The flag is reported as configured even when the missing prefix
    /// makes it ineffective.
    #[must_use]
    pub const fn is_multi_dimensional_array(&self) -> bool {
        self.multi_dimensional
    }

    /// Whether the prefix or the array key is a JavaScript placeholder.
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        self.prefix.as_ref().is_some_and(Key::is_dynamic)
            || matches!(&self.array_key, ArrayKey::Key(key) if key.is_dynamic())
    }

    /// Alias of [`is_dynamic`](Self::is_dynamic).
    #[must_use]
    pub fn is_javascript(&self) -> bool {
        self.is_dynamic()
    }

    /// The configured prefix.
    #[must_use]
    pub const fn prefix(&self) -> Option<&Key> {
        self.prefix.as_ref()
    }

    /// The rendering configuration.
    #[must_use]
    pub fn config(&self) -> &PrefixerConfig {
        &self.config
    }

    /// The field name becomes a second array level below the array key.
    const fn nests_field_name(&self) -> bool {
        self.has_prefix() && self.multi_dimensional && matches!(self.array_key, ArrayKey::Key(_))
    }

    /// The prefix alone forms the base of every identifier.
    const fn groups_under_prefix(&self) -> bool {
        self.has_prefix()
            && (self.multi_dimensional || matches!(self.array_key, ArrayKey::FieldName))
    }

    fn classify(&self, raw: impl Into<String>) -> Key {
        Key::classify(
            raw,
            &self.config.dynamic_marker,
            &self.config.dynamic_marker_close,
        )
    }
}

impl fmt::Debug for FormFieldPrefixer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormFieldPrefixer")
            .field("prefix", &self.prefix)
            .field("array_key", &self.array_key)
            .field("multi_dimensional", &self.multi_dimensional)
            .field("config", &self.config)
            .field(
                "old_input",
                &self.old_input.as_ref().map(|_| "<old input>"),
            )
            .finish()
    }
}
