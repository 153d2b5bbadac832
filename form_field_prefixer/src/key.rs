//! Classification of prefixes and array keys.
//!
//! A key that starts with the dynamic marker (`${` by default) is a
//! JavaScript template placeholder. The classification happens once, when
//! the key is configured, so rendering never re-inspects the raw text.

use std::fmt;

/// A prefix or array key as configured on a
/// [`FormFieldPrefixer`](crate::FormFieldPrefixer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// Plain text rendered verbatim.
    Literal(String),
    /// A JavaScript template placeholder such as `${ index }`.
    Dynamic {
        /// Text exactly as supplied, rendered inside template strings.
        source: String,
        /// The bare expression between the markers, used in bindings.
        expression: String,
    },
}

impl Key {
    /// Classify `raw` using the `open` and `close` marker pair.
    ///
    /// An empty `open` marker disables dynamic detection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use form_field_prefixer::Key;
    ///
    /// let key = Key::classify("${ index }", "${", "}");
    /// assert!(key.is_dynamic());
    /// assert_eq!(key.expression(), "index");
    /// assert_eq!(key.source(), "${ index }");
    /// ```
    #[must_use]
    pub fn classify(raw: impl Into<String>, open: &str, close: &str) -> Self {
        let source = raw.into();
        if !open.is_empty()
            && let Some(rest) = source.strip_prefix(open)
        {
            let expression = rest.strip_suffix(close).unwrap_or(rest).trim().to_owned();
            tracing::trace!(key = %source, %expression, "classified dynamic key");
            return Self::Dynamic { source, expression };
        }
        Self::Literal(source)
    }

    /// Whether the key is a JavaScript placeholder.
    #[must_use]
    pub const fn is_dynamic(&self) -> bool {
        matches!(self, Self::Dynamic { .. })
    }

    /// The text rendered into identifiers and template strings.
    #[must_use]
    pub fn source(&self) -> &str {
        match self {
            Self::Literal(text) => text,
            Self::Dynamic { source, .. } => source,
        }
    }

    /// The text rendered into binding expressions.
    ///
    /// Literal keys render unchanged; dynamic keys render without their
    /// markers.
    #[must_use]
    pub fn expression(&self) -> &str {
        match self {
            Self::Literal(text) => text,
            Self::Dynamic { expression, .. } => expression,
        }
    }

    /// Property access for a binding expression: `[expr]` for a dynamic key,
    /// `['text']` for a literal one.
    #[must_use]
    pub fn binding_index(&self) -> String {
        match self {
            Self::Literal(text) => quoted_index(text),
            Self::Dynamic { expression, .. } => format!("[{expression}]"),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source())
    }
}

/// Render `text` as a quoted JavaScript property access, `['text']`.
pub(crate) fn quoted_index(text: &str) -> String {
    let escaped = text.replace('\\', "\\\\").replace('\'', "\\'");
    format!("['{escaped}']")
}
