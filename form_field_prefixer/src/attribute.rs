//! Rendered HTML attributes.

use std::fmt;

/// An HTML attribute that renders as `name="value"`.
///
/// The value is emitted as given. Callers that interpolate user data are
/// expected to escape it first, as
/// [`FormFieldPrefixer::value`](crate::FormFieldPrefixer::value) does.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attribute {
    name: String,
    value: String,
}

impl Attribute {
    /// Create an attribute from its name and value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The attribute name, e.g. `name`, `:id` or `v-model`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attribute value without surrounding quotes.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Consume the attribute and return its value.
    #[must_use]
    pub fn into_value(self) -> String {
        self.value
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=\"{}\"", self.name, self.value)
    }
}

impl From<Attribute> for String {
    fn from(attribute: Attribute) -> Self {
        attribute.to_string()
    }
}
